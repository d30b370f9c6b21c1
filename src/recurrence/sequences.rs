use num_bigint::BigInt;
use crate::math::FiniteField;
use super::KitamasaEvaluator;

// NAMED SEQUENCES
// ================================================================================================

/// Returns the `n`-th Fibonacci number: F(0) = 0, F(1) = 1, F(n) = F(n - 1) + F(n - 2).
pub fn fibonacci<E: FiniteField, N: Into<BigInt>>(n: N) -> E {
    return evaluate(&[E::ZERO, E::ONE], &[E::ONE, E::ONE], n);
}

/// Returns the `n`-th Lucas number: L(0) = 2, L(1) = 1, L(n) = L(n - 1) + L(n - 2).
pub fn lucas<E: FiniteField, N: Into<BigInt>>(n: N) -> E {
    let two = E::add(E::ONE, E::ONE);
    return evaluate(&[two, E::ONE], &[E::ONE, E::ONE], n);
}

/// Returns a[n] for the sequence whose first d terms are `initial` and every later term is the
/// sum of the d terms before it.
pub fn cumulative<E: FiniteField, N: Into<BigInt>>(initial: &[E], n: N) -> E {
    let coefficients = vec![E::ONE; initial.len()];
    return evaluate(initial, &coefficients, n);
}

// HELPER FUNCTIONS
// ================================================================================================
fn evaluate<E: FiniteField, N: Into<BigInt>>(initial: &[E], coefficients: &[E], n: N) -> E {
    let n: BigInt = n.into();
    return KitamasaEvaluator::default().evaluate(initial, coefficients, &n);
}
