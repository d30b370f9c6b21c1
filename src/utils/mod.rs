use num_bigint::BigUint;

/// Returns bits of `n` ordered from the least significant to the most significant one; the
/// most significant bit of the result is always set (an empty vector is returned for zero).
pub fn bits_le(n: &BigUint) -> Vec<bool> {
    let digits = n.to_u64_digits();
    return (0..n.bits() as u64)
        .map(|i| (digits[(i / 64) as usize] >> (i % 64)) & 1 == 1)
        .collect();
}
