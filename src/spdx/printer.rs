//! Canonical rendering of an [`SpdxExpression`].
//!
//! A child of a compound node is parenthesized iff it is itself a compound
//! whose operator binds strictly looser than the parent's. This yields the
//! minimal parenthesization for any tree shape.

use std::fmt;

use crate::spdx::expression::{SpdxExpression, SpdxOperator};

enum Piece<'a> {
    Node(&'a SpdxExpression),
    Text(&'static str),
    Operator(SpdxOperator),
}

impl fmt::Display for SpdxExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Operator(op) => write!(f, " {} ", op)?,
                Piece::Node(SpdxExpression::LicenseId { id, or_later }) => {
                    f.write_str(id)?;
                    if *or_later {
                        f.write_str("+")?;
                    }
                }
                Piece::Node(SpdxExpression::LicenseException { id }) => f.write_str(id)?,
                Piece::Node(SpdxExpression::Compound {
                    left,
                    operator,
                    right,
                }) => {
                    // Pushed in reverse: popped as left, operator, right.
                    push_operand(&mut pending, right, *operator);
                    pending.push(Piece::Operator(*operator));
                    push_operand(&mut pending, left, *operator);
                }
            }
        }
        Ok(())
    }
}

fn push_operand<'a>(pending: &mut Vec<Piece<'a>>, child: &'a SpdxExpression, parent: SpdxOperator) {
    match child.operator() {
        Some(op) if op.precedence() < parent.precedence() => {
            pending.push(Piece::Text(")"));
            pending.push(Piece::Node(child));
            pending.push(Piece::Text("("));
        }
        _ => pending.push(Piece::Node(child)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lic(id: &str) -> SpdxExpression {
        SpdxExpression::license(id)
    }

    #[test]
    fn test_leaves() {
        assert_eq!(lic("MIT").to_string(), "MIT");
        assert_eq!(SpdxExpression::license_or_later("GPL-2.0").to_string(), "GPL-2.0+");
        assert_eq!(SpdxExpression::exception("LLVM-exception").to_string(), "LLVM-exception");
    }

    #[test]
    fn test_or_inside_and_is_parenthesized() {
        let expr = SpdxExpression::compound(
            lic("A"),
            SpdxOperator::And,
            SpdxExpression::compound(lic("B"), SpdxOperator::Or, lic("C")),
        );
        assert_eq!(expr.to_string(), "A AND (B OR C)");
    }

    #[test]
    fn test_with_inside_or_is_bare() {
        let expr = SpdxExpression::compound(
            lic("A"),
            SpdxOperator::Or,
            SpdxExpression::compound(lic("B"), SpdxOperator::With, SpdxExpression::exception("E")),
        );
        assert_eq!(expr.to_string(), "A OR B WITH E");
    }

    #[test]
    fn test_same_operator_never_parenthesized() {
        let right_deep = SpdxExpression::compound(
            lic("A"),
            SpdxOperator::And,
            SpdxExpression::compound(lic("B"), SpdxOperator::And, lic("C")),
        );
        let left_deep = SpdxExpression::compound(
            SpdxExpression::compound(lic("A"), SpdxOperator::And, lic("B")),
            SpdxOperator::And,
            lic("C"),
        );
        assert_eq!(right_deep.to_string(), "A AND B AND C");
        assert_eq!(left_deep.to_string(), "A AND B AND C");
    }

    #[test]
    fn test_left_or_inside_and() {
        let expr = SpdxExpression::compound(
            SpdxExpression::compound(lic("A"), SpdxOperator::Or, lic("B")),
            SpdxOperator::And,
            lic("C"),
        );
        assert_eq!(expr.to_string(), "(A OR B) AND C");
    }

    #[test]
    fn test_long_chains_print() {
        let mut left_deep = lic("L0");
        let mut right_deep = lic("L0");
        for i in 1..50_000 {
            left_deep = SpdxExpression::compound(left_deep, SpdxOperator::Or, lic(&format!("L{}", i)));
            right_deep = SpdxExpression::compound(lic(&format!("L{}", i)), SpdxOperator::And, right_deep);
        }
        let text = left_deep.to_string();
        assert!(text.starts_with("L0 OR L1 OR L2 OR "));
        assert!(text.ends_with(" OR L49999"));
        assert!(right_deep.to_string().ends_with("L1 AND L0"));
    }

    #[test]
    fn test_alternating_operators_print() {
        // (((A OR B) AND B) OR B) AND B ...
        let mut expr = lic("A");
        for i in 0..10_000 {
            let op = if i % 2 == 0 { SpdxOperator::Or } else { SpdxOperator::And };
            expr = SpdxExpression::compound(expr, op, lic("B"));
        }
        let text = expr.to_string();
        assert_eq!(text.matches('(').count(), 5_000);
        assert_eq!(text.matches(')').count(), 5_000);
        assert!(text.starts_with(&format!("{}A OR B) AND B", "(".repeat(5_000))));
    }
}
