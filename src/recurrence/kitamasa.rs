use std::marker::PhantomData;
use log::debug;
use num_bigint::{ BigInt, BigUint };
use num_traits::ToPrimitive;
use crate::math::{ FiniteField, polynom };
use crate::utils::bits_le;
use super::{ EvaluatorOptions, RecurrenceError };

// TYPES AND INTERFACES
// ================================================================================================

/// Evaluates arbitrary terms of linearly recurrent sequences by computing x^n modulo the
/// characteristic polynomial of the recurrence (Kitamasa method).
#[derive(Clone, Debug)]
pub struct KitamasaEvaluator<E: FiniteField> {
    options : EvaluatorOptions,
    _field  : PhantomData<E>,
}

// KITAMASA EVALUATOR IMPLEMENTATION
// ================================================================================================
impl<E: FiniteField> KitamasaEvaluator<E> {

    pub fn new(options: EvaluatorOptions) -> KitamasaEvaluator<E> {
        return KitamasaEvaluator { options, _field: PhantomData };
    }

    pub fn options(&self) -> &EvaluatorOptions {
        return &self.options;
    }

    /// Returns term `n` of the sequence a[i] = c[0] a[i - 1] + ... + c[d - 1] a[i - d] whose
    /// first d terms are `initial`.
    pub fn nth_term<N>(&self, initial: &[E], coefficients: &[E], n: N) -> Result<E, RecurrenceError>
    where
        N: Into<BigInt>
    {
        return self.nth_term_with_offset(initial, coefficients, n, 0);
    }

    /// Same as `nth_term` but treats `initial[0]` as the term with index `offset`, i.e. returns
    /// term `n - offset` of the sequence. Terms before the start of the sequence are zero.
    pub fn nth_term_with_offset<N, O>(&self, initial: &[E], coefficients: &[E], n: N, offset: O)
        -> Result<E, RecurrenceError>
    where
        N: Into<BigInt>,
        O: Into<BigInt>
    {
        if initial.len() != coefficients.len() {
            return Err(RecurrenceError::length_mismatch(initial.len(), coefficients.len()));
        }
        let n: BigInt = n.into();
        let offset: BigInt = offset.into();
        return Ok(self.evaluate(initial, coefficients, &(n - offset)));
    }

    /// Evaluates term `index`; `initial` and `coefficients` are assumed to have the same length.
    pub(crate) fn evaluate(&self, initial: &[E], coefficients: &[E], index: &BigInt) -> E {
        debug_assert!(initial.len() == coefficients.len(), "lengths must match");
        let d = initial.len();

        let m = match index.to_biguint() {
            Some(m) => m,
            None => return E::ZERO,
        };
        if let Some(m) = m.to_usize() {
            if m < d { return initial[m]; }
        }
        if d == 0 {
            return E::ZERO;
        }

        debug!("evaluating term {} of order {} recurrence", m, d);
        let residue = self.power_of_x(coefficients, &m);

        let mut result = E::ZERO;
        for k in 0..d {
            result = E::add(result, E::mul(residue[k], initial[k]));
        }
        return result;
    }

    /// Computes x^m modulo x^d - c[0] x^(d - 1) - ... - c[d - 1] by square-and-multiply,
    /// processing bits of `m` from the most significant one.
    fn power_of_x(&self, coefficients: &[E], m: &BigUint) -> Vec<E> {
        let modulus = get_reduction_modulus(coefficients);
        let ntt_threshold = self.options.ntt_threshold();
        let num_threads = self.options.num_threads();

        let mut residue = vec![E::ONE];
        for bit in bits_le(m).into_iter().rev() {
            let square = polynom::mul_with_threshold(&residue, &residue, ntt_threshold, num_threads);
            residue = polynom::rem(&square, &modulus);
            if bit {
                residue = polynom::mul_by_x_rem(&residue, &modulus);
            }
        }

        residue.resize(coefficients.len(), E::ZERO);
        return residue;
    }
}

impl<E: FiniteField> Default for KitamasaEvaluator<E> {
    fn default() -> Self {
        return Self::new(EvaluatorOptions::default());
    }
}

// PUBLIC FUNCTIONS
// ================================================================================================

/// Returns term `n` of the sequence defined by its first d terms `initial` and the recurrence
/// a[i] = c[0] a[i - 1] + ... + c[d - 1] a[i - d]; uses default evaluator options.
pub fn nth_term<E, N>(initial: &[E], coefficients: &[E], n: N) -> Result<E, RecurrenceError>
where
    E: FiniteField,
    N: Into<BigInt>
{
    return KitamasaEvaluator::default().nth_term(initial, coefficients, n);
}

/// Returns term `n - offset` of the sequence defined by `initial` and `coefficients`.
pub fn nth_term_with_offset<E, N, O>(initial: &[E], coefficients: &[E], n: N, offset: O)
    -> Result<E, RecurrenceError>
where
    E: FiniteField,
    N: Into<BigInt>,
    O: Into<BigInt>
{
    return KitamasaEvaluator::default().nth_term_with_offset(initial, coefficients, n, offset);
}

/// Computes the same value as `nth_term_with_offset` but extracts it as a power series
/// coefficient of P(x) / Q(x), where Q(x) = 1 - c[0] x - ... - c[d - 1] x^d is the
/// characteristic polynomial and P(x) = (A(x) * Q(x)) mod x^d.
pub fn nth_term_by_fraction<E, N, O>(initial: &[E], coefficients: &[E], n: N, offset: O)
    -> Result<E, RecurrenceError>
where
    E: FiniteField,
    N: Into<BigInt>,
    O: Into<BigInt>
{
    if initial.len() != coefficients.len() {
        return Err(RecurrenceError::length_mismatch(initial.len(), coefficients.len()));
    }
    let d = initial.len();

    let n: BigInt = n.into();
    let offset: BigInt = offset.into();
    let m = match (n - offset).to_biguint() {
        Some(m) => m,
        None => return Ok(E::ZERO),
    };
    if let Some(m) = m.to_usize() {
        if m < d { return Ok(initial[m]); }
    }
    if d == 0 {
        return Ok(E::ZERO);
    }

    let q = get_characteristic_polynomial(coefficients);
    let p = polynom::mul_truncated(initial, &q, d);
    return Ok(polynom::fraction_coefficient(&p, &q, &m));
}

// HELPER FUNCTIONS
// ================================================================================================

/// Returns 1 - c[0] x - c[1] x^2 - ... - c[d - 1] x^d.
pub(crate) fn get_characteristic_polynomial<E: FiniteField>(coefficients: &[E]) -> Vec<E> {
    let mut result = Vec::with_capacity(coefficients.len() + 1);
    result.push(E::ONE);
    result.extend(coefficients.iter().map(|&c| E::neg(c)));
    return result;
}

/// Returns x^d - c[0] x^(d - 1) - ... - c[d - 1], the reciprocal of the characteristic
/// polynomial; x^m = r(x) modulo this polynomial implies a[m] = r[0] a[0] + ... + r[d - 1] a[d - 1].
fn get_reduction_modulus<E: FiniteField>(coefficients: &[E]) -> Vec<E> {
    let mut result = get_characteristic_polynomial(coefficients);
    result.reverse();
    return result;
}
