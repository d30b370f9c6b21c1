mod field;
pub use field::{ FiniteField, prime32::F32, prime64::F64 };

pub mod fft;
pub mod polynom;
