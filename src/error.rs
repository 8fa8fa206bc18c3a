use std::fmt;

/// Error types for reading complex literals from text
#[derive(Debug, Clone, PartialEq)]
pub enum ParseComplexError {
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },
    InvalidNumber {
        position: usize,
        found: String,
    },
    UnexpectedCharacter {
        position: usize,
        expected: char,
        found: char,
    },
    TrailingInput {
        position: usize,
    },
}

impl ParseComplexError {
    /// Byte offset into the input where reading stopped
    pub fn position(&self) -> usize {
        match self {
            ParseComplexError::UnexpectedEnd { position, .. }
            | ParseComplexError::InvalidNumber { position, .. }
            | ParseComplexError::UnexpectedCharacter { position, .. }
            | ParseComplexError::TrailingInput { position } => *position,
        }
    }
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseComplexError::UnexpectedEnd { position, expected } => {
                write!(f, "Unexpected end of input at {}: expected {}", position, expected)
            }
            ParseComplexError::InvalidNumber { position, found } => {
                write!(f, "Invalid number at {}: found {:?}", position, found)
            }
            ParseComplexError::UnexpectedCharacter {
                position,
                expected,
                found,
            } => write!(
                f,
                "Unexpected character at {}: expected '{}', found '{}'",
                position, expected, found
            ),
            ParseComplexError::TrailingInput { position } => {
                write!(f, "Trailing input after complex literal at {}", position)
            }
        }
    }
}

impl std::error::Error for ParseComplexError {}
