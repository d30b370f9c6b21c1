use std::ops::Range;
use super::FiniteField;

// CONSTANTS
// ================================================================================================

// F64 modulus = 2^64 - 45 * 2^32 + 1
pub const M: u64 = 18446743880436023297;

// 2^32 root of unity
pub const G: u64 = 8387321423513296549;

// 64-BIT FIELD IMPLEMENTATION
// ================================================================================================
pub type F64 = u64;

impl FiniteField for F64 {

    const MODULUS: u64 = M;
    const RANGE: Range<u64> = Range { start: 0, end: M };

    const ZERO: u64 = 0;
    const ONE: u64 = 1;

    // BASIC ARITHMETIC
    // --------------------------------------------------------------------------------------------
    fn add(a: u64, b: u64) -> u64 {
        let z = (a as u128) + (b as u128);
        return if z >= (M as u128) { (z - (M as u128)) as u64 } else { z as u64 };
    }

    fn sub(a: u64, b: u64) -> u64 {
        if a < b { M - b + a } else { a - b }
    }

    fn mul(a: u64, b: u64) -> u64 {
        let mut z = (a as u128) * (b as u128);

        // each fold replaces the high 64 bits h with h * (2^64 - M); three folds bring z
        // below 2^64 + 2^44, after which a single subtraction suffices
        for _ in 0..3 {
            let q = (z >> 64) * (M as u128);
            z = z - q;
        }

        if z >= (M as u128) {
            z = z - (M as u128);
        }

        return z as u64;
    }

    fn inv(x: u64) -> u64 {
        if x == 0 { return 0 };
        return Self::exp(x, M - 2);
    }

    // ROOT OF UNITY
    // --------------------------------------------------------------------------------------------
    fn get_root_of_unity(order: usize) -> u64 {
        assert!(order != 0, "cannot get root of unity for order 0");
        assert!(order.is_power_of_two(), "order must be a power of 2");
        assert!(order.trailing_zeros() <= 32, "order cannot exceed 2^32");
        let p = 1u64 << (32 - order.trailing_zeros());
        return Self::exp(G, p);
    }

    // TYPE CONVERSIONS
    // --------------------------------------------------------------------------------------------
    fn from_u64(value: u64) -> u64 {
        return if value >= M { value - M } else { value };
    }
}
