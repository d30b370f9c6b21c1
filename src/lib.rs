pub mod math;
pub use math::{ FiniteField, F32, F64, fft, polynom };

pub mod recurrence;
pub use recurrence::{
    Recurrence,
    RecurrenceError,
    ErrorKind,
    EvaluatorOptions,
    KitamasaEvaluator,
    RecurrenceSynthesizer,
    find_linear_recurrence,
    nth_term,
    nth_term_with_offset,
    nth_term_by_fraction,
    fibonacci,
    lucas,
    cumulative };

pub mod utils;
