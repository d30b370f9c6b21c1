use std::ops::Range;
use super::FiniteField;

// CONSTANTS
// ================================================================================================

// F32 modulus = 119 * 2^23 + 1
pub const M: u32 = 998244353;

// generator of the multiplicative group
pub const G: u32 = 3;

// largest power of 2 dividing M - 1
const TWO_ADICITY: u32 = 23;

// 32-BIT FIELD IMPLEMENTATION
// ================================================================================================
pub type F32 = u32;

impl FiniteField for F32 {

    const MODULUS: u32 = M;
    const RANGE: Range<u32> = Range { start: 0, end: M };

    const ZERO: u32 = 0;
    const ONE: u32 = 1;

    // BASIC ARITHMETIC
    // --------------------------------------------------------------------------------------------
    fn add(a: u32, b: u32) -> u32 {
        let z = a + b; // M < 2^30, so this cannot overflow
        return if z >= M { z - M } else { z };
    }

    fn sub(a: u32, b: u32) -> u32 {
        if a < b { M - b + a } else { a - b }
    }

    fn mul(a: u32, b: u32) -> u32 {
        return ((a as u64) * (b as u64) % (M as u64)) as u32;
    }

    fn inv(x: u32) -> u32 {
        if x == 0 { return 0 };
        return Self::exp(x, (M - 2) as u64);
    }

    // ROOT OF UNITY
    // --------------------------------------------------------------------------------------------
    fn get_root_of_unity(order: usize) -> u32 {
        assert!(order != 0, "cannot get root of unity for order 0");
        assert!(order.is_power_of_two(), "order must be a power of 2");
        assert!(order.trailing_zeros() <= TWO_ADICITY, "order cannot exceed 2^23");
        return Self::exp(G, ((M - 1) as u64) / (order as u64));
    }

    // TYPE CONVERSIONS
    // --------------------------------------------------------------------------------------------
    fn from_u64(value: u64) -> u32 {
        return (value % (M as u64)) as u32;
    }
}
