use std::fmt;

/// Error types raised by matrix construction, matrix arithmetic and
/// expression evaluation. Every failure in the crate is one of these
/// kinds; callers match on the kind and read the message.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Malformed matrix literal: missing brackets, non-numeric cell,
    /// inconsistent column counts per row, jagged construction grid.
    InvalidFormat(String),
    /// Shape mismatch between the operands of an elementwise or matrix
    /// operation.
    DimensionMismatch(String),
    /// Arithmetic result or parsed cell literal exceeds the representable
    /// range of f64.
    Overflow(String),
    /// Divisor cell magnitude below the division epsilon.
    DivisionByZero(String),
    /// Expression-level failure: empty-tree evaluation, operator missing
    /// on append, unknown operator tag, comparer applied to a non-square
    /// matrix, operand loader not configured.
    Arithmetic(String),
    /// Named external resource (file, input stream, preset queue) cannot
    /// be opened or read.
    Resource(String),
    /// Out-of-range index on matrix cell access or collection access.
    OutOfBounds(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::InvalidFormat(msg) => write!(f, "Invalid matrix format: {}", msg),
            MatrixError::DimensionMismatch(msg) => {
                write!(f, "Matrix dimension mismatch: {}", msg)
            }
            MatrixError::Overflow(msg) => write!(f, "Matrix overflow: {}", msg),
            MatrixError::DivisionByZero(msg) => write!(f, "Matrix division by zero: {}", msg),
            MatrixError::Arithmetic(msg) => write!(f, "Matrix arithmetic error: {}", msg),
            MatrixError::Resource(msg) => write!(f, "Resource error: {}", msg),
            MatrixError::OutOfBounds(msg) => write!(f, "Index out of bounds: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_carry_kind_prefix() {
        let cases = [
            (
                MatrixError::InvalidFormat("no brackets".to_string()),
                "Invalid matrix format: no brackets",
            ),
            (
                MatrixError::DimensionMismatch("2x2 vs 3x3".to_string()),
                "Matrix dimension mismatch: 2x2 vs 3x3",
            ),
            (
                MatrixError::Overflow("Addition overflow".to_string()),
                "Matrix overflow: Addition overflow",
            ),
            (
                MatrixError::DivisionByZero("cell (0,1)".to_string()),
                "Matrix division by zero: cell (0,1)",
            ),
            (
                MatrixError::Arithmetic("Expression tree is empty".to_string()),
                "Matrix arithmetic error: Expression tree is empty",
            ),
            (
                MatrixError::Resource("Unable to open file: m.txt".to_string()),
                "Resource error: Unable to open file: m.txt",
            ),
            (
                MatrixError::OutOfBounds("index 5, size 2".to_string()),
                "Index out of bounds: index 5, size 2",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_error_kinds_compare_by_kind_and_message() {
        assert_eq!(
            MatrixError::Overflow("x".to_string()),
            MatrixError::Overflow("x".to_string())
        );
        assert_ne!(
            MatrixError::Overflow("x".to_string()),
            MatrixError::Arithmetic("x".to_string())
        );
    }
}
