//! Error types for VLQ decoding.

use thiserror::Error;

/// Errors that can occur when decoding a VLQ segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VlqError {
    /// A character outside the Base64 alphabet.
    #[error("invalid base64 character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    /// A value that does not fit a 32-bit signed integer.
    #[error("value starting at offset {offset} overflows a 32-bit integer")]
    Overflow { offset: usize },
}

/// Result type alias for VLQ operations.
pub type Result<T> = std::result::Result<T, VlqError>;

impl VlqError {
    /// Create an InvalidCharacter error.
    pub fn invalid_character(character: char, offset: usize) -> Self {
        Self::InvalidCharacter { character, offset }
    }

    /// Create an Overflow error.
    pub fn overflow(offset: usize) -> Self {
        Self::Overflow { offset }
    }

    /// Byte offset within the segment where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. } | Self::Overflow { offset } => *offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VlqError::invalid_character('#', 3);
        assert_eq!(format!("{err}"), "invalid base64 character '#' at offset 3");

        let err = VlqError::overflow(0);
        assert_eq!(
            format!("{err}"),
            "value starting at offset 0 overflows a 32-bit integer"
        );
    }

    #[test]
    fn test_error_offset() {
        assert_eq!(VlqError::invalid_character('!', 7).offset(), 7);
        assert_eq!(VlqError::overflow(2).offset(), 2);
    }
}
