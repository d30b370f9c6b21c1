use num_bigint::BigUint;
use crate::math::{ FiniteField, fft };
use crate::utils::bits_le;

// CONSTANTS
// ================================================================================================

/// Polynomials shorter than this (in either operand) are multiplied using the schoolbook method.
pub const DEFAULT_NTT_THRESHOLD: usize = 64;

// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` over the domain defined by `twiddles` in-place, spreading the work
/// over `num_threads`.
///
/// If `unpermute` parameter is set to false, the evaluations will be left in permuted state.
pub fn eval_fft_twiddles<E: FiniteField>(p: &mut [E], twiddles: &[E], unpermute: bool, num_threads: usize) {
    debug_assert!(p.len() == twiddles.len() * 2, "Invalid number of twiddles");
    fft::fft_in_place(p, twiddles, 1, 1, 0, num_threads);
    if unpermute {
        fft::permute(p);
    }
}

/// Interpolates a polynomial from its evaluations `v` in-place using the supplied inverse
/// twiddles; the work is spread over `num_threads`.
pub fn interpolate_fft_twiddles<E: FiniteField>(
    v: &mut [E], inv_twiddles: &[E], unpermute: bool, num_threads: usize)
{
    fft::fft_in_place(v, inv_twiddles, 1, 1, 0, num_threads);
    let inv_length = E::inv(E::from_u64(v.len() as u64));
    for e in v.iter_mut() {
        *e = E::mul(*e, inv_length);
    }
    if unpermute {
        fft::permute(v);
    }
}

// POLYNOMIAL MATH OPERATIONS
// ================================================================================================

/// Multiplies polynomial `a` by polynomial `b`; switches from the schoolbook method to NTT once
/// both operands are at least `DEFAULT_NTT_THRESHOLD` terms long.
pub fn mul<E: FiniteField>(a: &[E], b: &[E]) -> Vec<E> {
    return mul_with_threshold(a, b, DEFAULT_NTT_THRESHOLD, 1);
}

/// Multiplies polynomial `a` by polynomial `b` using NTT whenever both operands are at least
/// `ntt_threshold` terms long, and the schoolbook method otherwise.
pub fn mul_with_threshold<E: FiniteField>(
    a: &[E], b: &[E], ntt_threshold: usize, num_threads: usize) -> Vec<E>
{
    if std::cmp::min(a.len(), b.len()) < ntt_threshold {
        return mul_naive(a, b);
    }
    return mul_fft(a, b, num_threads);
}

/// Multiplies polynomial `a` by polynomial `b` using the schoolbook method
pub fn mul_naive<E: FiniteField>(a: &[E], b: &[E]) -> Vec<E> {
    if a.is_empty() || b.is_empty() { return Vec::new(); }

    let result_len = a.len() + b.len() - 1;
    let mut result = vec![E::ZERO; result_len];
    for i in 0..a.len() {
        if a[i] == E::ZERO { continue; }
        for j in 0..b.len() {
            let s = E::mul(a[i], b[j]);
            result[i + j] = E::add(result[i + j], s);
        }
    }
    return result;
}

/// Multiplies polynomial `a` by polynomial `b` by evaluating both over a domain of roots of
/// unity, multiplying point-wise, and interpolating the product back.
pub fn mul_fft<E: FiniteField>(a: &[E], b: &[E], num_threads: usize) -> Vec<E> {
    if a.is_empty() || b.is_empty() { return Vec::new(); }

    let result_len = a.len() + b.len() - 1;
    let domain_size = std::cmp::max(result_len.next_power_of_two(), 2);
    let g = E::get_root_of_unity(domain_size);
    let twiddles = fft::get_twiddles(g, domain_size);
    let inv_twiddles = fft::get_inv_twiddles(g, domain_size);

    let mut a_evals = a.to_vec();
    a_evals.resize(domain_size, E::ZERO);
    eval_fft_twiddles(&mut a_evals, &twiddles, true, num_threads);

    let mut b_evals = b.to_vec();
    b_evals.resize(domain_size, E::ZERO);
    eval_fft_twiddles(&mut b_evals, &twiddles, true, num_threads);

    for i in 0..domain_size {
        a_evals[i] = E::mul(a_evals[i], b_evals[i]);
    }

    interpolate_fft_twiddles(&mut a_evals, &inv_twiddles, true, num_threads);
    a_evals.truncate(result_len);
    return a_evals;
}

/// Multiplies polynomial `a` by polynomial `b` and drops all terms of degree `bound` or higher;
/// i.e. computes a * b mod x^bound.
pub fn mul_truncated<E: FiniteField>(a: &[E], b: &[E], bound: usize) -> Vec<E> {
    let a = &a[..std::cmp::min(a.len(), bound)];
    let b = &b[..std::cmp::min(b.len(), bound)];

    if std::cmp::min(a.len(), b.len()) >= DEFAULT_NTT_THRESHOLD {
        let mut result = mul_fft(a, b, 1);
        result.truncate(bound);
        return result;
    }

    if a.is_empty() || b.is_empty() { return Vec::new(); }
    let result_len = std::cmp::min(a.len() + b.len() - 1, bound);
    let mut result = vec![E::ZERO; result_len];
    for i in 0..a.len() {
        if a[i] == E::ZERO { continue; }
        for j in 0..std::cmp::min(b.len(), result_len - i) {
            result[i + j] = E::add(result[i + j], E::mul(a[i], b[j]));
        }
    }
    return result;
}

/// Returns the remainder of dividing polynomial `a` by polynomial `b`. The remainder always has
/// exactly deg(b) coefficients (some of which may be zero).
pub fn rem<E: FiniteField>(a: &[E], b: &[E]) -> Vec<E> {
    let (_, remainder) = div_rem(a, b);
    return remainder;
}

/// Divides polynomial `a` by polynomial `b` using long division and returns the quotient
/// together with the remainder of exactly deg(b) coefficients.
pub fn div_rem<E: FiniteField>(a: &[E], b: &[E]) -> (Vec<E>, Vec<E>) {
    let bpos = degree_of(b);
    assert!(!b.is_empty() && b[bpos] != E::ZERO, "cannot divide polynomial by zero");

    let mut remainder = a.to_vec();
    if remainder.len() <= bpos {
        remainder.resize(bpos, E::ZERO);
        return (Vec::new(), remainder);
    }

    let lead_inv = E::inv(b[bpos]);
    let mut quotient = vec![E::ZERO; remainder.len() - bpos];
    for i in (0..quotient.len()).rev() {
        let quot = E::mul(remainder[i + bpos], lead_inv);
        quotient[i] = quot;
        if quot == E::ZERO { continue; }
        for j in 0..=bpos {
            remainder[i + j] = E::sub(remainder[i + j], E::mul(b[j], quot));
        }
    }

    remainder.truncate(bpos);
    return (quotient, remainder);
}

/// Computes a * x mod `divisor` in linear time; `a` must already be reduced modulo `divisor`.
pub fn mul_by_x_rem<E: FiniteField>(a: &[E], divisor: &[E]) -> Vec<E> {
    let d = degree_of(divisor);
    assert!(!divisor.is_empty() && divisor[d] != E::ZERO, "cannot divide polynomial by zero");
    debug_assert!(a.len() <= d || a[d..].iter().all(|&c| c == E::ZERO), "polynomial is not reduced");

    let mut result = vec![E::ZERO; d];
    if d == 0 { return result; }

    let top = if a.len() >= d { a[d - 1] } else { E::ZERO };
    for i in 1..d {
        if i - 1 < a.len() {
            result[i] = a[i - 1];
        }
    }

    if top != E::ZERO {
        let t = E::div(top, divisor[d]);
        for i in 0..d {
            result[i] = E::sub(result[i], E::mul(t, divisor[i]));
        }
    }

    return result;
}

// RATIONAL FUNCTIONS
// ================================================================================================

/// Returns the coefficient of x^n in the power series expansion of p(x) / q(x) using the
/// Bostan-Mori algorithm; q(0) must be non-zero and deg(p) < deg(q).
pub fn fraction_coefficient<E: FiniteField>(p: &[E], q: &[E], n: &BigUint) -> E {
    assert!(!q.is_empty() && q[0] != E::ZERO, "constant term of the denominator must be non-zero");

    let mut p = p.to_vec();
    let mut q = q.to_vec();
    for bit in bits_le(n) {
        // q(-x)
        let q_neg: Vec<E> = q.iter().enumerate()
            .map(|(i, &c)| if i & 1 == 1 { E::neg(c) } else { c })
            .collect();

        let u = mul(&p, &q_neg);
        let v = mul(&q, &q_neg);

        let parity = if bit { 1 } else { 0 };
        p = u.iter().skip(parity).step_by(2).copied().collect();
        q = v.iter().step_by(2).copied().collect();
    }

    let p0 = if p.is_empty() { E::ZERO } else { p[0] };
    return E::div(p0, q[0]);
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns degree of the polynomial `poly`
pub fn degree_of<E: FiniteField>(poly: &[E]) -> usize {
    for i in (0..poly.len()).rev() {
        if poly[i] != E::ZERO { return i; }
    }
    return 0;
}

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use num_bigint::BigUint;
    use crate::math::{ FiniteField, F32, F64 };

    #[test]
    fn mul() {
        let poly1: [u64; 3] = [384863712573444386, 7682273369345308472, 13294661765012277990];
        let poly2: [u64; 3] = [9918505539874556741, 16401861429499852246, 12181445947541805654];

        let pr = vec![
            F64::mul(poly1[0], poly2[0]),
            F64::add(F64::mul(poly1[0], poly2[1]), F64::mul(poly2[0], poly1[1])),
            F64::add(
                F64::mul(poly1[1], poly2[1]),
                F64::add(F64::mul(poly1[2], poly2[0]), F64::mul(poly2[2], poly1[0]))
            ),
            F64::add(F64::mul(poly1[2], poly2[1]), F64::mul(poly2[2], poly1[1])),
            F64::mul(poly1[2], poly2[2])
        ];
        assert_eq!(pr, super::mul(&poly1, &poly2));
        assert_eq!(pr, super::mul_fft(&poly1, &poly2, 1));

        assert!(super::mul::<u64>(&[], &poly2).is_empty());
    }

    #[test]
    fn mul_fft() {
        let a = F32::rand_vector(300);
        let b = F32::rand_vector(517);
        let expected = super::mul_naive(&a, &b);
        assert_eq!(expected, super::mul_fft(&a, &b, 1));
        assert_eq!(expected, super::mul_fft(&a, &b, 2));
        assert_eq!(expected, super::mul(&a, &b));

        let a = F64::rand_vector(130);
        let b = F64::rand_vector(70);
        assert_eq!(super::mul_naive(&a, &b), super::mul_fft(&a, &b, 1));
    }

    #[test]
    fn mul_truncated() {
        let a = F32::rand_vector(40);
        let b = F32::rand_vector(25);
        let full = super::mul(&a, &b);
        assert_eq!(full[..30].to_vec(), super::mul_truncated(&a, &b, 30));
        assert_eq!(full, super::mul_truncated(&a, &b, 1000));
        assert!(super::mul_truncated(&a, &b, 0).is_empty());

        let a = F32::rand_vector(200);
        let b = F32::rand_vector(100);
        let full = super::mul(&a, &b);
        assert_eq!(full[..150].to_vec(), super::mul_truncated(&a, &b, 150));
    }

    #[test]
    fn div_rem() {
        let a = F32::rand_vector(37);
        let mut b = F32::rand_vector(9);
        b.push(0); // leading zeros must be ignored

        let (q, r) = super::div_rem(&a, &b);
        assert_eq!(8, r.len());
        assert_eq!(29, q.len());

        let mut restored = super::mul(&q, &b);
        for i in 0..r.len() {
            restored[i] = F32::add(restored[i], r[i]);
        }
        assert_eq!(a[..], restored[..a.len()]);
        assert!(restored[a.len()..].iter().all(|&c| c == 0));

        // dividend of lower degree is its own remainder
        let r = super::rem(&[1u32, 2], &[5, 6, 7, 8]);
        assert_eq!(vec![1, 2, 0], r);

        // constant divisor leaves no remainder
        assert!(super::rem(&a, &[3u32]).is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot divide polynomial by zero")]
    fn rem_by_zero() {
        super::rem(&[1u32, 2, 3], &[0, 0]);
    }

    #[test]
    fn mul_by_x_rem() {
        let divisor = F32::rand_vector(7);
        let a = super::rem(&F32::rand_vector(20), &divisor);

        let mut shifted = vec![0u32];
        shifted.extend_from_slice(&a);
        assert_eq!(super::rem(&shifted, &divisor), super::mul_by_x_rem(&a, &divisor));

        // short input does not overflow the divisor
        assert_eq!(vec![0, 0, 5, 0, 0, 0], super::mul_by_x_rem(&[0u32, 5], &divisor));
    }

    #[test]
    fn fraction_coefficient() {
        // 1 / (1 - x - x^2) generates Fibonacci numbers shifted by one
        let q = [1u32, F32::MODULUS - 1, F32::MODULUS - 1];
        let p = [1u32];
        assert_eq!(1, super::fraction_coefficient(&p, &q, &BigUint::from(0u64)));
        assert_eq!(89, super::fraction_coefficient(&p, &q, &BigUint::from(10u64)));

        // compare with power series expansion by long division
        let p = F32::rand_vector(5);
        let mut q = F32::rand_vector(6);
        q[0] = 1;
        let mut series = vec![0u32; 64];
        for i in 0..series.len() {
            let mut v = if i < p.len() { p[i] } else { 0 };
            for j in 1..std::cmp::min(i + 1, q.len()) {
                v = F32::sub(v, F32::mul(q[j], series[i - j]));
            }
            series[i] = v;
        }
        for (i, &expected) in series.iter().enumerate() {
            assert_eq!(expected, super::fraction_coefficient(&p, &q, &BigUint::from(i as u64)));
        }
    }

    #[test]
    fn degree_of() {
        assert_eq!(0, super::degree_of::<u64>(&[]));
        assert_eq!(0, super::degree_of(&[1u64]));
        assert_eq!(1, super::degree_of(&[1u64, 2]));
        assert_eq!(1, super::degree_of(&[1u64, 2, 0]));
        assert_eq!(2, super::degree_of(&[1u64, 2, 3]));
        assert_eq!(2, super::degree_of(&[1u64, 2, 3, 0]));
    }
}
