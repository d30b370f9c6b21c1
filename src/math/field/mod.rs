use std::fmt::{ Debug, Display };
use std::hash::Hash;
use std::ops::Range;
use rand::prelude::*;
use rand::distributions::{ Distribution, Uniform, uniform::SampleUniform };
use serde::{ Serialize, de::DeserializeOwned };

pub mod prime32;
pub mod prime64;

// FINITE FIELD INTERFACE
// ================================================================================================

/// Arithmetic over a prime field. The trait is implemented directly on the primitive integer type
/// which holds field elements, so the modulus is fixed by the type for the whole computation.
/// All operations assume their inputs are valid field elements (i.e. in `RANGE`).
pub trait FiniteField:
    Copy + Eq + Ord + Hash + Debug + Display + Default + Send + Sync + 'static
    + SampleUniform + Serialize + DeserializeOwned
{
    const MODULUS: Self;
    const RANGE: Range<Self>;

    const ZERO: Self;
    const ONE: Self;

    // BASIC ARITHMETIC
    // --------------------------------------------------------------------------------------------

    fn add(a: Self, b: Self) -> Self;

    fn sub(a: Self, b: Self) -> Self;

    fn mul(a: Self, b: Self) -> Self;

    /// Computes y such that x * y = 1; the inverse of zero is defined to be zero.
    fn inv(x: Self) -> Self;

    fn div(a: Self, b: Self) -> Self {
        let b = Self::inv(b);
        return Self::mul(a, b);
    }

    /// Computes b^p using square-and-multiply.
    fn exp(b: Self, p: u64) -> Self {
        if p == 0 { return Self::ONE; }
        else if b == Self::ZERO { return Self::ZERO; }

        let mut r = Self::ONE;
        let mut b = b;
        let mut p = p;

        while p > 0 {
            if p & 1 == 1 {
                r = Self::mul(r, b);
            }
            p = p >> 1;
            b = Self::mul(b, b);
        }

        return r;
    }

    fn neg(x: Self) -> Self {
        return Self::sub(Self::ZERO, x);
    }

    // ROOT OF UNITY
    // --------------------------------------------------------------------------------------------

    /// Returns a primitive root of unity of the specified `order`; `order` must be a power of 2
    /// no greater than the 2-adicity of the field.
    fn get_root_of_unity(order: usize) -> Self;

    fn get_power_series(b: Self, length: usize) -> Vec<Self> {
        let mut result = Vec::with_capacity(length);
        let mut p = Self::ONE;
        for _ in 0..length {
            result.push(p);
            p = Self::mul(p, b);
        }
        return result;
    }

    // TYPE CONVERSIONS
    // --------------------------------------------------------------------------------------------

    /// Reduces an arbitrary unsigned integer into the field.
    fn from_u64(value: u64) -> Self;

    /// Reduces an arbitrary signed integer into the field; negative values wrap around.
    fn from_i64(value: i64) -> Self {
        let r = Self::from_u64(value.unsigned_abs());
        return if value < 0 { Self::neg(r) } else { r };
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    fn rand() -> Self {
        let range = Uniform::from(Self::RANGE);
        let mut g = thread_rng();
        return range.sample(&mut g);
    }

    fn rand_vector(length: usize) -> Vec<Self> {
        let range = Uniform::from(Self::RANGE);
        let g = thread_rng();
        return g.sample_iter(range).take(length).collect();
    }

    fn prng_vector(seed: [u8; 32], length: usize) -> Vec<Self> {
        let range = Uniform::from(Self::RANGE);
        let g = StdRng::from_seed(seed);
        return g.sample_iter(range).take(length).collect();
    }
}
