// sequence.rs - Named sequence value type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::{HcatError, Result};

/// A sequence value with an optional name.
///
/// Two sequences are fully equal when both value and name match. Use
/// [`Sequence::equal_seq`] to compare values only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    value: String,
    name: Option<String>,
}

impl Sequence {
    /// Create an unnamed sequence. The value must not be empty.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(HcatError::InvalidArgument(
                "Sequence value must not be empty".to_string(),
            ));
        }
        Ok(Self { value, name: None })
    }

    /// Create a named sequence. The value must not be empty.
    pub fn with_name(value: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let mut sequence = Self::new(value)?;
        sequence.name = Some(name.into());
        Ok(sequence)
    }

    /// Build a sequence without the non-empty check. Used for translation
    /// output, which can legitimately be empty.
    pub(crate) fn unchecked(value: String, name: Option<String>) -> Self {
        Self { value, name }
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name for reports, falling back to the value for unnamed sequences
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.value)
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Compare values only, ignoring names
    pub fn equal_seq(&self, other: &Sequence) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} -> {}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_rejected() {
        assert!(matches!(Sequence::new(""), Err(HcatError::InvalidArgument(_))));
        assert!(Sequence::with_name("", "Empty").is_err());
    }

    #[test]
    fn test_equality() {
        let a = Sequence::with_name("ACGT", "a").unwrap();
        let b = Sequence::with_name("ACGT", "b").unwrap();
        let c = Sequence::with_name("ACGT", "a").unwrap();

        assert!(a.equal_seq(&b));
        assert_ne!(a, b);
        assert_eq!(a, c);
        assert!(!a.equal_seq(&Sequence::new("ACGA").unwrap()));
    }

    #[test]
    fn test_display_and_length() {
        let mut sequence = Sequence::new("ACGTN").unwrap();
        assert_eq!(sequence.to_string(), "ACGTN");
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.label(), "ACGTN");

        sequence.set_name(Some("Sample1".to_string()));
        assert_eq!(sequence.to_string(), "Sample1 -> ACGTN");
        assert_eq!(sequence.name(), Some("Sample1"));
        assert_eq!(sequence.label(), "Sample1");
    }
}
