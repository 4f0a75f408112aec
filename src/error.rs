use thiserror::Error;

/// A malformed SPDX license expression.
///
/// Always fatal to the parse call that produced it. `offset` is the byte
/// offset of `fragment` in the input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}: `{fragment}`")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub offset: usize,
    pub fragment: String,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, offset: usize, fragment: impl Into<String>) -> Self {
        SyntaxError {
            kind,
            offset,
            fragment: fragment.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A character outside the identifier alphabet, parentheses and whitespace.
    MalformedToken,
    EmptyExpression,
    UnmatchedParenthesis,
    /// An operator where a license id or `(` was expected.
    UnexpectedOperator,
    UnexpectedToken,
    UnexpectedEnd,
    /// The left operand of `WITH` is not a single license id.
    InvalidWithOperand,
    /// The right operand of `WITH` is not a bare exception id.
    ExpectedException,
    /// More parentheses open at once than the parser accepts.
    NestingTooDeep,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxErrorKind::MalformedToken => write!(f, "malformed token"),
            SyntaxErrorKind::EmptyExpression => write!(f, "empty expression"),
            SyntaxErrorKind::UnmatchedParenthesis => write!(f, "unmatched parenthesis"),
            SyntaxErrorKind::UnexpectedOperator => write!(f, "unexpected operator"),
            SyntaxErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            SyntaxErrorKind::UnexpectedEnd => write!(f, "unexpected end of expression"),
            SyntaxErrorKind::InvalidWithOperand => {
                write!(f, "WITH must follow a single license id")
            }
            SyntaxErrorKind::ExpectedException => write!(f, "expected an exception id"),
            SyntaxErrorKind::NestingTooDeep => write!(f, "parentheses nested too deeply"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SyntaxError::new(SyntaxErrorKind::MalformedToken, 4, "/");
        assert_eq!(err.to_string(), "malformed token at offset 4: `/`");

        let err = SyntaxError::new(SyntaxErrorKind::NestingTooDeep, 128, "(");
        assert_eq!(err.to_string(), "parentheses nested too deeply at offset 128: `(`");
    }
}
