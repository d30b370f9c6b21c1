// TYPES AND INTERFACES
// ================================================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Initial terms and recurrence coefficients have different lengths.
    LengthMismatch,
    /// Fewer terms were supplied than the order of the recurrence requires.
    InsufficientTerms,
    /// A recurrence could not be encoded or decoded.
    Serialization,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RecurrenceError {
    kind    : ErrorKind,
    message : String,
}

// RECURRENCE ERROR IMPLEMENTATION
// ================================================================================================
impl RecurrenceError {

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    pub fn length_mismatch(num_terms: usize, num_coefficients: usize) -> RecurrenceError {
        return RecurrenceError {
            kind    : ErrorKind::LengthMismatch,
            message : format!("expected {} initial terms for a recurrence with {} coefficients, but received {}",
                num_coefficients, num_coefficients, num_terms),
        };
    }

    pub fn insufficient_terms(required: usize, provided: usize) -> RecurrenceError {
        return RecurrenceError {
            kind    : ErrorKind::InsufficientTerms,
            message : format!("at least {} terms are required, but only {} were provided", required, provided),
        };
    }

    pub fn serialization(reason: String) -> RecurrenceError {
        return RecurrenceError {
            kind    : ErrorKind::Serialization,
            message : format!("malformed recurrence encoding: {}", reason),
        };
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------
    pub fn kind(&self) -> ErrorKind {
        return self.kind;
    }

    pub fn message(&self) -> &String {
        return &self.message;
    }
}

// COMMON TRAIT IMPLEMENTATIONS
// ================================================================================================

impl std::fmt::Debug for RecurrenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recurrence error ({:?}): {}", self.kind, self.message)
    }
}

impl std::fmt::Display for RecurrenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recurrence error: {}", self.message)
    }
}

impl std::error::Error for RecurrenceError {}

impl From<bincode::Error> for RecurrenceError {
    fn from(error: bincode::Error) -> RecurrenceError {
        return RecurrenceError::serialization(error.to_string());
    }
}
