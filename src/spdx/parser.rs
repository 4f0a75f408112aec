use tracing::warn;

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::spdx::deprecated::{resolve_exception, resolve_license};
use crate::spdx::expression::{SpdxExpression, SpdxOperator};
use crate::spdx::token::{tokenize, Token, TokenKind};

/// Parse an SPDX license expression into a normalized tree.
///
/// Grammar (`WITH` binds tighter than `AND`, which binds tighter than `OR`):
/// ```text
/// expr      := or_expr
/// or_expr   := and_expr ( "OR" and_expr )*
/// and_expr  := with_expr ( "AND" with_expr )*
/// with_expr := atom ( "WITH" exception )?
/// atom      := license_id | "(" expr ")"
/// ```
///
/// Chained `AND`/`OR` operands are assembled left-deep, so a tree printed and
/// parsed again is structurally identical to the original.
///
/// At most [`MAX_DEPTH`] parentheses may be open at once.
pub fn parse(expr: &str) -> Result<SpdxExpression, SyntaxError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(SyntaxError::new(SyntaxErrorKind::EmptyExpression, 0, expr));
    }

    let mut parser = ExprParser {
        tokens,
        pos: 0,
        depth: 0,
        end: expr.len(),
    };
    let result = parser.parse_or()?;
    parser.finish()?;
    Ok(result)
}

/// Deepest parenthesis nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 128;

struct ExprParser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Number of currently open parentheses.
    depth: usize,
    /// Length of the source, reported as the offset of end-of-input errors.
    end: usize,
}

impl<'a> ExprParser<'a> {
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_is(&self, kind: TokenKind<'_>) -> bool {
        matches!(self.peek(), Some(t) if t.kind == kind)
    }

    fn consume(&mut self) -> Option<Token<'a>> {
        let t = self.tokens.get(self.pos).copied();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn end_error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.end, "")
    }

    /// Parse an OR-level expression (lowest precedence).
    fn parse_or(&mut self) -> Result<SpdxExpression, SyntaxError> {
        let mut result = self.parse_and()?;
        while self.peek_is(TokenKind::Or) {
            self.consume();
            let rhs = self.parse_and()?;
            result = chain(result, SpdxOperator::Or, rhs);
        }
        Ok(result)
    }

    /// Parse an AND-level expression.
    fn parse_and(&mut self) -> Result<SpdxExpression, SyntaxError> {
        let mut result = self.parse_with()?;
        while self.peek_is(TokenKind::And) {
            self.consume();
            let rhs = self.parse_with()?;
            result = chain(result, SpdxOperator::And, rhs);
        }
        Ok(result)
    }

    /// Parse an atom optionally followed by `WITH <exception>`.
    fn parse_with(&mut self) -> Result<SpdxExpression, SyntaxError> {
        let atom = self.parse_atom()?;

        let with = match self.peek() {
            Some(t) if t.kind == TokenKind::With => *t,
            _ => return Ok(atom),
        };
        if !matches!(atom, SpdxExpression::LicenseId { .. }) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::InvalidWithOperand,
                with.offset,
                with.text,
            ));
        }
        self.consume();

        let exception = match self.consume() {
            Some(Token {
                kind: TokenKind::Id { text, plus: false },
                ..
            }) => resolve_exception(text),
            Some(t) => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::ExpectedException,
                    t.offset,
                    t.text,
                ))
            }
            None => return Err(self.end_error(SyntaxErrorKind::ExpectedException)),
        };

        // `A WITH B WITH C`: the second WITH has a compound on its left.
        if let Some(t) = self.peek().filter(|t| t.kind == TokenKind::With) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::InvalidWithOperand,
                t.offset,
                t.text,
            ));
        }

        Ok(SpdxExpression::compound(atom, SpdxOperator::With, exception))
    }

    /// Parse an atom: a parenthesised sub-expression or a single license id.
    fn parse_atom(&mut self) -> Result<SpdxExpression, SyntaxError> {
        let token = match self.consume() {
            Some(t) => t,
            None => return Err(self.end_error(SyntaxErrorKind::UnexpectedEnd)),
        };

        match token.kind {
            TokenKind::Id { text, plus } => Ok(resolve_license(text, plus)),
            TokenKind::LParen if self.depth >= MAX_DEPTH => Err(SyntaxError::new(
                SyntaxErrorKind::NestingTooDeep,
                token.offset,
                token.text,
            )),
            TokenKind::LParen => {
                self.depth += 1;
                let inner = self.parse_or()?;
                match self.consume() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => {
                        self.depth -= 1;
                        Ok(inner)
                    }
                    Some(t) => Err(SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken,
                        t.offset,
                        t.text,
                    )),
                    None => Err(SyntaxError::new(
                        SyntaxErrorKind::UnmatchedParenthesis,
                        token.offset,
                        token.text,
                    )),
                }
            }
            TokenKind::RParen if self.depth == 0 => Err(SyntaxError::new(
                SyntaxErrorKind::UnmatchedParenthesis,
                token.offset,
                token.text,
            )),
            TokenKind::RParen => Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedToken,
                token.offset,
                token.text,
            )),
            TokenKind::And | TokenKind::Or | TokenKind::With => Err(SyntaxError::new(
                SyntaxErrorKind::UnexpectedOperator,
                token.offset,
                token.text,
            )),
        }
    }

    /// Check that the whole input was consumed.
    ///
    /// Surplus closing parentheses at the very end are dropped with a warning.
    fn finish(&self) -> Result<(), SyntaxError> {
        let rest = &self.tokens[self.pos..];
        let first = match rest.first() {
            Some(t) => t,
            None => return Ok(()),
        };

        if rest.iter().all(|t| t.kind == TokenKind::RParen) {
            warn!(
                offset = first.offset,
                count = rest.len(),
                "ignoring surplus closing parentheses"
            );
            return Ok(());
        }

        let kind = if first.kind == TokenKind::RParen {
            SyntaxErrorKind::UnmatchedParenthesis
        } else {
            SyntaxErrorKind::UnexpectedToken
        };
        Err(SyntaxError::new(kind, first.offset, first.text))
    }
}

/// Append `right` to the chain `left operator ...`, keeping the tree
/// left-deep when `right` is itself a group of the same operator.
fn chain(left: SpdxExpression, operator: SpdxOperator, right: SpdxExpression) -> SpdxExpression {
    let mut result = left;
    let mut pending = vec![right];
    while let Some(node) = pending.pop() {
        if node.operator() != Some(operator) {
            result = SpdxExpression::compound(result, operator, node);
            continue;
        }
        match node.into_parts() {
            Ok((inner_left, _, inner_right)) => {
                pending.push(inner_right);
                pending.push(inner_left);
            }
            Err(leaf) => result = SpdxExpression::compound(result, operator, leaf),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lic(id: &str) -> SpdxExpression {
        SpdxExpression::license(id)
    }

    fn err_kind(expr: &str) -> SyntaxErrorKind {
        parse(expr).unwrap_err().kind
    }

    #[test]
    fn test_single_license() {
        assert_eq!(parse("MIT").unwrap(), lic("MIT"));
        assert_eq!(parse("  MIT+ ").unwrap(), SpdxExpression::license_or_later("MIT"));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(parse("A OR B AND C").unwrap(), parse("A OR (B AND C)").unwrap());
        assert_eq!(
            parse("A AND B OR C").unwrap(),
            SpdxExpression::compound(
                SpdxExpression::compound(lic("A"), SpdxOperator::And, lic("B")),
                SpdxOperator::Or,
                lic("C"),
            )
        );
    }

    #[test]
    fn test_with_binds_tighter_than_and() {
        assert_eq!(
            parse("A WITH B AND C").unwrap(),
            SpdxExpression::compound(
                SpdxExpression::compound(lic("A"), SpdxOperator::With, SpdxExpression::exception("B")),
                SpdxOperator::And,
                lic("C"),
            )
        );
    }

    #[test]
    fn test_chains_are_left_deep() {
        let expected = SpdxExpression::compound(
            SpdxExpression::compound(lic("A"), SpdxOperator::And, lic("B")),
            SpdxOperator::And,
            lic("C"),
        );
        assert_eq!(parse("A AND B AND C").unwrap(), expected);
        assert_eq!(parse("A AND (B AND C)").unwrap(), expected);
        assert_eq!(parse("(A AND B) AND C").unwrap(), expected);
    }

    #[test]
    fn test_long_right_group_is_folded() {
        let group = vec!["B"; 50_000].join(" AND ");
        let expr = parse(&format!("A AND ({})", group)).unwrap();
        assert_eq!(expr, parse(&format!("A AND {}", group)).unwrap());
    }

    #[test]
    fn test_nesting_limit() {
        let at_limit = format!("{}MIT{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse(&at_limit).unwrap(), lic("MIT"));

        let err = parse(&format!("{}MIT{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1))).unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::NestingTooDeep);
        assert_eq!(err.offset, MAX_DEPTH);
        assert_eq!(err.fragment, "(");
    }

    #[test]
    fn test_parenthesized_with_operand() {
        assert_eq!(parse("(A) WITH B").unwrap(), parse("A WITH B").unwrap());
    }

    #[test]
    fn test_deprecated_ids_are_normalized() {
        assert_eq!(parse("GPL-1.0+").unwrap(), lic("GPL-1.0-or-later"));
        assert_eq!(parse("GPL-3.0").unwrap(), lic("GPL-3.0-only"));
        assert_eq!(
            parse("GPL-2.0-with-classpath-exception").unwrap(),
            parse("GPL-2.0 WITH Classpath-exception").unwrap()
        );
    }

    #[test]
    fn test_surplus_trailing_parens_are_ignored() {
        assert_eq!(parse("(MIT OR ISC))").unwrap(), parse("MIT OR ISC").unwrap());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(err_kind(""), SyntaxErrorKind::EmptyExpression);
        assert_eq!(err_kind("  \t"), SyntaxErrorKind::EmptyExpression);
    }

    #[test]
    fn test_unmatched_parenthesis() {
        let err = parse("(MIT OR Apache-2.0").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::UnmatchedParenthesis);
        assert_eq!(err.offset, 0);

        assert_eq!(err_kind(")MIT"), SyntaxErrorKind::UnmatchedParenthesis);
        assert_eq!(err_kind("MIT) OR ISC"), SyntaxErrorKind::UnmatchedParenthesis);
        assert_eq!(err_kind("((MIT)"), SyntaxErrorKind::UnmatchedParenthesis);
    }

    #[test]
    fn test_operator_errors() {
        assert_eq!(err_kind("MIT AND OR ISC"), SyntaxErrorKind::UnexpectedOperator);
        assert_eq!(err_kind("AND MIT"), SyntaxErrorKind::UnexpectedOperator);
        assert_eq!(err_kind("MIT OR"), SyntaxErrorKind::UnexpectedEnd);
        assert_eq!(err_kind("MIT ISC"), SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err_kind("()"), SyntaxErrorKind::UnexpectedToken);
        assert_eq!(err_kind("MIT and ISC"), SyntaxErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_with_errors() {
        assert_eq!(err_kind("(A OR B) WITH C"), SyntaxErrorKind::InvalidWithOperand);
        assert_eq!(err_kind("A WITH B WITH C"), SyntaxErrorKind::InvalidWithOperand);
        assert_eq!(
            err_kind("GPL-2.0-with-font-exception WITH C"),
            SyntaxErrorKind::InvalidWithOperand
        );
        assert_eq!(err_kind("A WITH (B AND C)"), SyntaxErrorKind::ExpectedException);
        assert_eq!(err_kind("A WITH B+"), SyntaxErrorKind::ExpectedException);
        assert_eq!(err_kind("A WITH"), SyntaxErrorKind::ExpectedException);
        assert_eq!(err_kind("A WITH OR"), SyntaxErrorKind::ExpectedException);
    }

    #[test]
    fn test_error_offset_and_fragment() {
        let err = parse("MIT OR OR ISC").unwrap_err();
        assert_eq!(err.offset, 7);
        assert_eq!(err.fragment, "OR");
    }
}
