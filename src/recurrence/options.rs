use serde::{ Serialize, Deserialize };
use crate::math::polynom;

// CONSTANTS
// ================================================================================================
const DEFAULT_NTT_THRESHOLD : usize = polynom::DEFAULT_NTT_THRESHOLD;
const DEFAULT_NUM_THREADS   : usize = 1;
const MAX_NUM_THREADS       : usize = 64;

// TYPES AND INTERFACES
// ================================================================================================

/// Tuning parameters for `KitamasaEvaluator`; none of them affect the computed values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorOptions {
    ntt_threshold   : u32,
    num_threads     : u8,   // stored as power of 2
}

// EVALUATOR OPTIONS IMPLEMENTATION
// ================================================================================================
impl EvaluatorOptions {

    pub fn new(ntt_threshold: usize, num_threads: usize) -> EvaluatorOptions {
        assert!(ntt_threshold > 0, "ntt_threshold must be greater than 0");
        assert!(ntt_threshold <= u32::MAX as usize, "ntt_threshold cannot exceed 2^32 - 1");

        assert!(num_threads.is_power_of_two(), "num_threads must be a power of 2");
        assert!(num_threads <= MAX_NUM_THREADS, "num_threads cannot be greater than 64");

        return EvaluatorOptions {
            ntt_threshold   : ntt_threshold as u32,
            num_threads     : num_threads.trailing_zeros() as u8,
        };
    }

    /// Polynomials with fewer terms than this are multiplied using the schoolbook method.
    pub fn ntt_threshold(&self) -> usize {
        return self.ntt_threshold as usize;
    }

    pub fn num_threads(&self) -> usize {
        return 1 << (self.num_threads as usize);
    }
}

impl Default for EvaluatorOptions {

    fn default() -> EvaluatorOptions {
        return EvaluatorOptions::new(DEFAULT_NTT_THRESHOLD, DEFAULT_NUM_THREADS);
    }
}

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use super::EvaluatorOptions;

    #[test]
    fn new() {
        let options = EvaluatorOptions::new(32, 4);
        assert_eq!(32, options.ntt_threshold());
        assert_eq!(4, options.num_threads());

        let options = EvaluatorOptions::default();
        assert_eq!(64, options.ntt_threshold());
        assert_eq!(1, options.num_threads());
    }

    #[test]
    #[should_panic(expected = "num_threads must be a power of 2")]
    fn invalid_num_threads() {
        EvaluatorOptions::new(32, 3);
    }

    #[test]
    fn serialization() {
        let options = EvaluatorOptions::new(128, 8);
        let bytes = bincode::serialize(&options).unwrap();
        let decoded: EvaluatorOptions = bincode::deserialize(&bytes).unwrap();
        assert_eq!(options, decoded);
    }
}
