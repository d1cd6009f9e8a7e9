// error.rs - Error types for the analysis engine

use thiserror::Error;

/// Errors raised by the core sequence operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HcatError {
    /// A required input was empty or violated a structural invariant
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Codon offset outside of the sequence bounds
    #[error("Offset {offset} out of range for sequence of length {length}")]
    OutOfRange { offset: usize, length: usize },

    /// A haplotype representative does not have the master's length
    #[error("Sequence '{name}' has different length to master sequence. Expected length: {expected}. Actual length: {actual}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, HcatError>;

impl From<HcatError> for String {
    fn from(error: HcatError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message_names_sequence() {
        let error = HcatError::LengthMismatch {
            name: "Hap2".to_string(),
            expected: 10,
            actual: 9,
        };
        let message = error.to_string();
        assert!(message.contains("'Hap2'"));
        assert!(message.contains("Expected length: 10"));
        assert!(message.contains("Actual length: 9"));
    }

    #[test]
    fn test_error_converts_to_string() {
        let message: String = HcatError::OutOfRange { offset: 15, length: 15 }.into();
        assert_eq!(message, "Offset 15 out of range for sequence of length 15");
    }
}
