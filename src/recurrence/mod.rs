use std::fmt;
use num_bigint::BigInt;
use serde::{ Serialize, Deserialize };
use crate::math::FiniteField;

mod errors;
mod options;
mod synthesis;
mod kitamasa;
mod sequences;

pub use errors::{ RecurrenceError, ErrorKind };
pub use options::EvaluatorOptions;
pub use synthesis::{ RecurrenceSynthesizer, find_linear_recurrence };
pub use kitamasa::{ KitamasaEvaluator, nth_term, nth_term_with_offset, nth_term_by_fraction };
pub use sequences::{ fibonacci, lucas, cumulative };

// TYPES AND INTERFACES
// ================================================================================================

/// Linear recurrence a[i] = c[0] a[i - 1] + c[1] a[i - 2] + ... + c[d - 1] a[i - d] over a
/// prime field; d = `order()` is the number of coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Recurrence<E: FiniteField> {
    coefficients: Vec<E>,
}

// RECURRENCE IMPLEMENTATION
// ================================================================================================
impl<E: FiniteField> Recurrence<E> {

    /// Creates a recurrence from its coefficients; coefficients are assumed to be valid field
    /// elements.
    pub fn new(coefficients: Vec<E>) -> Recurrence<E> {
        return Recurrence { coefficients };
    }

    pub fn coefficients(&self) -> &[E] {
        return &self.coefficients;
    }

    pub fn order(&self) -> usize {
        return self.coefficients.len();
    }

    /// Returns 1 - c[0] x - c[1] x^2 - ... - c[d - 1] x^d.
    pub fn characteristic_polynomial(&self) -> Vec<E> {
        return kitamasa::get_characteristic_polynomial(&self.coefficients);
    }

    // DIRECT EVALUATION
    // --------------------------------------------------------------------------------------------

    /// Returns the term which follows `prefix`; the prefix must contain at least d terms.
    pub fn next_term(&self, prefix: &[E]) -> Result<E, RecurrenceError> {
        let d = self.order();
        if prefix.len() < d {
            return Err(RecurrenceError::insufficient_terms(d, prefix.len()));
        }

        let last = prefix.len() - 1;
        let mut result = E::ZERO;
        for k in 0..d {
            result = E::add(result, E::mul(self.coefficients[k], prefix[last - k]));
        }
        return Ok(result);
    }

    /// Returns the first `count` terms of the sequence which starts with `initial` by applying the
    /// recurrence directly.
    pub fn generate(&self, initial: &[E], count: usize) -> Result<Vec<E>, RecurrenceError> {
        if initial.len() != self.order() {
            return Err(RecurrenceError::length_mismatch(initial.len(), self.order()));
        }

        let mut result = initial.to_vec();
        while result.len() < count {
            let next = self.next_term(&result)?;
            result.push(next);
        }
        result.truncate(count);
        return Ok(result);
    }

    /// Returns term `n` of the sequence which starts with `initial`.
    pub fn nth_term<N: Into<BigInt>>(&self, initial: &[E], n: N) -> Result<E, RecurrenceError> {
        return nth_term(initial, &self.coefficients, n);
    }

    /// Checks whether every term of `sequence` from index d onwards is produced by this
    /// recurrence.
    pub fn verify(&self, sequence: &[E]) -> bool {
        for i in self.order()..sequence.len() {
            match self.next_term(&sequence[..i]) {
                Ok(value) if value == sequence[i] => continue,
                _ => return false,
            }
        }
        return true;
    }

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    pub fn to_bytes(&self) -> Result<Vec<u8>, RecurrenceError> {
        return Ok(bincode::serialize(self)?);
    }

    /// Decodes a recurrence and checks that all of its coefficients are valid field elements.
    pub fn from_bytes(bytes: &[u8]) -> Result<Recurrence<E>, RecurrenceError> {
        let result: Recurrence<E> = bincode::deserialize(bytes)?;
        if let Some(c) = result.coefficients.iter().find(|&&c| c >= E::MODULUS) {
            return Err(RecurrenceError::serialization(format!("{} is not a valid field element", c)));
        }
        return Ok(result);
    }
}

impl<E: FiniteField> fmt::Display for Recurrence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "a[i] = 0");
        }
        let terms: Vec<String> = self.coefficients.iter().enumerate()
            .map(|(k, c)| format!("{} * a[i - {}]", c, k + 1))
            .collect();
        write!(f, "a[i] = {}", terms.join(" + "))
    }
}

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use crate::math::{ FiniteField, F32, F64 };
    use super::{ Recurrence, ErrorKind };

    #[test]
    fn characteristic_polynomial() {
        let r = Recurrence::new(vec![1u32, 2, 3]);
        let m = F32::MODULUS;
        assert_eq!(vec![1, m - 1, m - 2, m - 3], r.characteristic_polynomial());
        assert_eq!(vec![1u32], Recurrence::new(vec![]).characteristic_polynomial());
    }

    #[test]
    fn next_term() {
        let r = Recurrence::new(vec![1u32, 1]);
        assert_eq!(13, r.next_term(&[0, 1, 1, 2, 3, 5, 8]).unwrap());

        let err = r.next_term(&[1]).unwrap_err();
        assert_eq!(ErrorKind::InsufficientTerms, err.kind());

        assert_eq!(0, Recurrence::<u32>::new(vec![]).next_term(&[]).unwrap());
    }

    #[test]
    fn generate() {
        let r = Recurrence::new(vec![1u32, 1]);
        assert_eq!(vec![2, 1, 3, 4, 7, 11], r.generate(&[2, 1], 6).unwrap());
        assert_eq!(vec![2], r.generate(&[2, 1], 1).unwrap());
        assert_eq!(ErrorKind::LengthMismatch, r.generate(&[2], 6).unwrap_err().kind());
    }

    #[test]
    fn nth_term() {
        let r = Recurrence::new(vec![1u32, 1]);
        assert_eq!(11, r.nth_term(&[2, 1], 5).unwrap());
    }

    #[test]
    fn verify() {
        let r = Recurrence::new(vec![2u32, F32::MODULUS - 1]);
        assert!(r.verify(&[1, 2, 3, 4, 5]));
        assert!(!r.verify(&[1, 2, 3, 4, 6]));
        assert!(r.verify(&[7]));
    }

    #[test]
    fn serialization() {
        let r = Recurrence::new(F32::rand_vector(10));
        let bytes = r.to_bytes().unwrap();
        assert_eq!(r, Recurrence::from_bytes(&bytes).unwrap());

        // truncated encoding
        let err = Recurrence::<u32>::from_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert_eq!(ErrorKind::Serialization, err.kind());

        // coefficient outside of the field
        let bytes = Recurrence::new(vec![1u32, u32::MAX]).to_bytes().unwrap();
        let err = Recurrence::<u32>::from_bytes(&bytes).unwrap_err();
        assert_eq!(ErrorKind::Serialization, err.kind());
        assert!(err.message().contains("4294967295 is not a valid field element"));
    }

    #[test]
    fn serialization_generic() {
        let r = Recurrence::new(F64::rand_vector(7));
        assert_eq!(r, round_trip(&r));

        let r = Recurrence::<u32>::new(Vec::new());
        assert_eq!(r, round_trip(&r));
    }

    fn round_trip<E: FiniteField>(recurrence: &Recurrence<E>) -> Recurrence<E> {
        let bytes = bincode::serialize(recurrence).unwrap();
        return bincode::deserialize(&bytes).unwrap();
    }

    #[test]
    fn display() {
        let r = Recurrence::new(vec![1u32, 2]);
        assert_eq!("a[i] = 1 * a[i - 1] + 2 * a[i - 2]", r.to_string());
        assert_eq!("a[i] = 0", Recurrence::<u32>::new(vec![]).to_string());
    }
}
