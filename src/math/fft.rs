use crossbeam_utils::thread;
use crate::math::FiniteField;

// CONSTANTS
// ================================================================================================
const USIZE_BITS: usize = 0_usize.count_zeros() as usize;
const MAX_LOOP: usize = 256;

// PUBLIC FUNCTIONS
// ================================================================================================

/// In-place recursive FFT with permuted output. If `num_threads` is > 1, the computation is
/// performed in multiple threads. Number of threads must be a power of 2.
///
/// Adapted from: https://github.com/0xProject/OpenZKP/tree/master/algebra/primefield/src/fft
pub fn fft_in_place<E: FiniteField>(
    values: &mut [E], twiddles: &[E], count: usize, stride: usize, offset: usize, num_threads: usize)
{
    let size = values.len() / stride;
    debug_assert!(size.is_power_of_two());
    debug_assert!(offset < stride);
    debug_assert_eq!(values.len() % size, 0);
    debug_assert!(num_threads.is_power_of_two());

    // Keep recursing until size is 2
    if size > 2 {
        if stride == count && count < MAX_LOOP {
            fft_in_place(values, twiddles, 2 * count, 2 * stride, offset, num_threads);
        }
        else if num_threads > 1 {
            // run half of FFT in the current thread, and spin up a new thread for the other half
            let result = thread::scope(|s| {
                // halves of the FFT touch disjoint sets of indexes, so a second mutable
                // reference to `values` is sound here
                let values2 = unsafe { &mut *(values as *mut [E]) };
                s.spawn(move |_| {
                    fft_in_place(values2, twiddles, count, 2 * stride, offset, num_threads / 2);
                });
                fft_in_place(values, twiddles, count, 2 * stride, offset + stride, num_threads / 2);
            });
            if let Err(e) = result {
                std::panic::resume_unwind(e);
            }
        }
        else {
            fft_in_place(values, twiddles, count, 2 * stride, offset, num_threads);
            fft_in_place(values, twiddles, count, 2 * stride, offset + stride, num_threads);
        }
    }

    for offset in offset..(offset + count) {
        butterfly(values, offset, stride);
    }

    let last_offset = offset + size * stride;
    for (i, offset) in (offset..last_offset).step_by(2 * stride).enumerate().skip(1) {
        for j in offset..(offset + count) {
            butterfly_twiddle(values, twiddles[i], j, stride);
        }
    }
}

pub fn get_twiddles<E: FiniteField>(root: E, size: usize) -> Vec<E> {
    assert!(size.is_power_of_two());
    assert!(E::exp(root, size as u64) == E::ONE);
    let mut twiddles = E::get_power_series(root, size / 2);
    permute(&mut twiddles);
    return twiddles;
}

pub fn get_inv_twiddles<E: FiniteField>(root: E, size: usize) -> Vec<E> {
    let inv_root = E::exp(root, (size - 1) as u64);
    return get_twiddles(inv_root, size);
}

pub fn permute<E: FiniteField>(v: &mut [E]) {
    let n = v.len();
    for i in 0..n {
        let j = permute_index(n, i);
        if j > i {
            v.swap(i, j);
        }
    }
}

// HELPER FUNCTIONS
// ================================================================================================
fn permute_index(size: usize, index: usize) -> usize {
    debug_assert!(index < size);
    if size == 1 { return 0 }
    debug_assert!(size.is_power_of_two());
    let bits = size.trailing_zeros() as usize;
    return index.reverse_bits() >> (USIZE_BITS - bits);
}

#[inline(always)]
fn butterfly<E: FiniteField>(values: &mut [E], offset: usize, stride: usize) {
    let i = offset;
    let j = offset + stride;
    let temp = values[i];
    values[i] = E::add(temp, values[j]);
    values[j] = E::sub(temp, values[j]);
}

#[inline(always)]
fn butterfly_twiddle<E: FiniteField>(values: &mut [E], twiddle: E, offset: usize, stride: usize) {
    let i = offset;
    let j = offset + stride;
    let temp = values[i];
    values[j] = E::mul(values[j], twiddle);
    values[i] = E::add(temp, values[j]);
    values[j] = E::sub(temp, values[j]);
}
