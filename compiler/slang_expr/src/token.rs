//! Expression tokens.
//!
//! `RawToken` is the logos-derived scanner output; [`Tokens`] converts it
//! into [`Token`]s carrying parsed literals and identifier slices, paired
//! with their byte offset. Whitespace and `;` are insignificant.

use std::fmt;

use logos::Logos;

use crate::errors::{integer_overflow, invalid_character, ExprError, ExprResult};

/// Raw token from logos (before literal conversion).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f;]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"\p{Alphabetic}+")]
    Ident,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Binding strength: multiplicative operators bind tighter than additive ones.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    /// Source symbol.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// A scanned expression token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'src> {
    /// Non-negative decimal literal.
    Integer(i64),
    /// Maximal run of letters (any Unicode alphabetic character).
    Ident(&'src str),
    Op(BinaryOp),
    LParen,
    RParen,
}

/// Iterator over the tokens of one expression, with byte offsets.
///
/// Stops at the first scanning error; the error itself is yielded once.
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, RawToken>,
    source: &'src str,
    failed: bool,
}

impl<'src> Tokens<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: RawToken::lexer(source),
            source,
            failed: false,
        }
    }

    fn convert(&self, raw: RawToken) -> ExprResult<Token<'src>> {
        let slice = self.lexer.slice();
        Ok(match raw {
            RawToken::Integer => Token::Integer(parse_integer(slice).ok_or_else(|| {
                ExprError::new(
                    integer_overflow("integer literal"),
                    Some(self.lexer.span().start),
                )
            })?),
            RawToken::Ident => Token::Ident(slice),
            RawToken::Plus => Token::Op(BinaryOp::Add),
            RawToken::Minus => Token::Op(BinaryOp::Sub),
            RawToken::Star => Token::Op(BinaryOp::Mul),
            RawToken::Slash => Token::Op(BinaryOp::Div),
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
        })
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = ExprResult<(Token<'src>, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let raw = self.lexer.next()?;
        let offset = self.lexer.span().start;
        let result = match raw {
            Ok(raw) => self.convert(raw).map(|token| (token, offset)),
            Err(()) => {
                let ch = self
                    .source
                    .get(offset..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(invalid_character(ch, offset))
            }
        };
        self.failed = result.is_err();
        Some(result)
    }
}

/// Unsigned-magnitude accumulation of an ASCII digit run.
///
/// Returns `None` when the value does not fit in `i64`.
fn parse_integer(digits: &str) -> Option<i64> {
    digits.bytes().try_fold(0i64, |acc, digit| {
        acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
    })
}

#[cfg(test)]
mod tests;
