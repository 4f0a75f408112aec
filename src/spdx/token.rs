use crate::error::{SyntaxError, SyntaxErrorKind};

/// Tokens produced by [`tokenize`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind<'a> {
    /// A license or exception id. `plus` records an immediately trailing `+`.
    Id { text: &'a str, plus: bool },
    And,
    Or,
    With,
    LParen,
    RParen,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset of the token in the source text.
    pub offset: usize,
    /// Source text of the token, including any `+` suffix.
    pub text: &'a str,
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-'
}

/// Tokenize an SPDX license expression into a flat [`Vec<Token>`].
///
/// Keywords are matched case-sensitively as whole words, so `and` or `With`
/// are identifiers.
pub fn tokenize(expr: &str) -> Result<Vec<Token<'_>>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '(' || c == ')' {
            chars.next();
            let kind = if c == '(' { TokenKind::LParen } else { TokenKind::RParen };
            tokens.push(Token {
                kind,
                offset: start,
                text: &expr[start..start + 1],
            });
            continue;
        }

        if !is_id_char(c) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::MalformedToken,
                start,
                c.to_string(),
            ));
        }

        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if !is_id_char(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        let word = &expr[start..end];

        let plus = matches!(chars.peek(), Some(&(_, '+')));
        if plus {
            chars.next();
            end += 1;
        }

        let kind = match (word, plus) {
            ("AND", false) => TokenKind::And,
            ("OR", false) => TokenKind::Or,
            ("WITH", false) => TokenKind::With,
            _ => TokenKind::Id { text: word, plus },
        };
        tokens.push(Token {
            kind,
            offset: start,
            text: &expr[start..end],
        });
    }

    Ok(tokens)
}
