// ============================================================================
// Numeric Errors
// Error types for decimal parsing and ball construction
// ============================================================================

use std::fmt;

/// Errors that can occur while building a ball from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input was empty (after trimming whitespace)
    EmptyInput,
    /// Input does not match the decimal literal grammar
    MalformedLiteral {
        /// Byte offset of the first offending character
        offset: usize,
    },
    /// Requested precision is outside the supported range
    InvalidPrecision(u64),
    /// Decimal exponent magnitude is too large to expand
    ExponentOutOfRange,
    /// Floating-point input was NaN or infinite
    NonFinite,
}

impl ParseError {
    /// True for errors caused by the literal text itself.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            ParseError::EmptyInput | ParseError::MalformedLiteral { .. }
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input: no literal to parse"),
            ParseError::MalformedLiteral { offset } => {
                write!(f, "malformed decimal literal at byte {}", offset)
            },
            ParseError::InvalidPrecision(bits) => write!(
                f,
                "invalid precision: {} bits is outside the supported range",
                bits
            ),
            ParseError::ExponentOutOfRange => {
                write!(f, "exponent out of range: decimal exponent is too large")
            },
            ParseError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::EmptyInput.to_string(),
            "empty input: no literal to parse"
        );
        assert_eq!(
            ParseError::MalformedLiteral { offset: 3 }.to_string(),
            "malformed decimal literal at byte 3"
        );
        assert_eq!(
            ParseError::InvalidPrecision(1).to_string(),
            "invalid precision: 1 bits is outside the supported range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseError::EmptyInput, ParseError::EmptyInput);
        assert_ne!(
            ParseError::MalformedLiteral { offset: 0 },
            ParseError::MalformedLiteral { offset: 1 }
        );
    }

    #[test]
    fn test_syntax_classification() {
        assert!(ParseError::EmptyInput.is_syntax_error());
        assert!(ParseError::MalformedLiteral { offset: 2 }.is_syntax_error());
        assert!(!ParseError::ExponentOutOfRange.is_syntax_error());
        assert!(!ParseError::NonFinite.is_syntax_error());
    }
}
