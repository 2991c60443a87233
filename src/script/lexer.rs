use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::trace;

use crate::script::token::{Lexeme, Token};

pub type LexResult<T> = Result<T, LexError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("line {line}: invalid symbol '{symbol}'")]
    InvalidSymbol { symbol: char, line: usize },
    #[error("line {line}: syntax error near '{found}', expected token {expected} but got {found}")]
    UnexpectedToken {
        expected: Token,
        found: Token,
        line: usize,
    },
    #[error("line {line}: string is never closed, missing {marker}")]
    UnterminatedString { marker: String, line: usize },
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*").expect("identifier pattern is a valid regex")
    })
}

/// Length of the line terminator at the start of `s`, if any.
/// `\r\n` and `\n\r` count as a single terminator.
fn line_break_len(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") || s.starts_with("\n\r") {
        return Some(2);
    }
    if s.starts_with(['\r', '\n']) {
        return Some(1);
    }
    None
}

fn count_line_breaks(mut s: &str) -> usize {
    let mut lines = 0;
    while let Some(c) = s.chars().next() {
        match line_break_len(s) {
            Some(len) => {
                lines += 1;
                s = &s[len..];
            }
            None => s = &s[c.len_utf8()..],
        }
    }
    lines
}

/// A token scanned ahead of the parser, plus the cursor state from before
/// it was scanned.
#[derive(Debug, Clone, Copy)]
struct Lookahead<'src> {
    lexeme: Lexeme<'src>,
    rest: &'src str,
    line: usize,
}

/// Pull-based scanner over a borrowed source string.
///
/// Scanning is destructive: `rest` only ever shrinks. At most one token is
/// held back in the lookahead slot, filled by [`Lexer::peek`] and drained by
/// [`Lexer::next`].
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    rest: &'src str,
    line: usize,
    lookahead: Option<Lookahead<'src>>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            line: 1,
            lookahead: None,
        }
    }

    /// Line the cursor is currently on, 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Type of the next token, without consuming it.
    pub fn peek(&mut self) -> LexResult<Token> {
        if let Some(lookahead) = &self.lookahead {
            return Ok(lookahead.lexeme.token);
        }
        let rest = self.rest;
        let line = self.line;
        let lexeme = self.scan()?;
        self.lookahead = Some(Lookahead { lexeme, rest, line });
        Ok(lexeme.token)
    }

    /// Consume the next token, which must be `expected`.
    pub fn next(&mut self, expected: Token) -> LexResult<Lexeme<'src>> {
        let lexeme = match self.lookahead.take() {
            Some(lookahead) => lookahead.lexeme,
            None => self.scan()?,
        };
        if lexeme.token != expected {
            return Err(LexError::UnexpectedToken {
                expected,
                found: lexeme.token,
                line: lexeme.line,
            });
        }
        Ok(lexeme)
    }

    /// Consume the next token only if it is `expected`. Returns whether it did.
    pub fn skip_if_matches(&mut self, expected: Token) -> LexResult<bool> {
        if self.peek()? != expected {
            return Ok(false);
        }
        self.lookahead = None;
        Ok(true)
    }

    /// Consume everything before the first occurrence of `marker`, leaving
    /// the marker itself in place. No escape processing is done.
    pub fn scan_raw_until(&mut self, marker: &str) -> LexResult<&'src str> {
        if let Some(lookahead) = self.lookahead.take() {
            self.rest = lookahead.rest;
            self.line = lookahead.line;
        }
        let Some(end) = self.rest.find(marker) else {
            return Err(LexError::UnterminatedString {
                marker: marker.to_owned(),
                line: self.line,
            });
        };
        let (body, rest) = self.rest.split_at(end);
        self.line += count_line_breaks(body);
        self.rest = rest;
        trace!(line = self.line, len = body.len(), "raw string body");
        Ok(body)
    }

    fn scan(&mut self) -> LexResult<Lexeme<'src>> {
        let start_line = self.line;
        let skipped = self.skip_ignored();
        if !skipped.is_empty() {
            return Ok(Lexeme::new(Token::Ignored, start_line, skipped));
        }
        let Some(first) = self.rest.chars().next() else {
            return Ok(Lexeme::new(Token::Eof, self.line, ""));
        };
        let lexeme = match first {
            '$' => self.take(Token::VarPrefix, 1),
            '(' => self.take(Token::LeftParen, 1),
            ')' => self.take(Token::RightParen, 1),
            '=' => self.take(Token::Equals, 1),
            '\'' | '"' => {
                if self.rest[1..].starts_with(first) {
                    self.take(Token::EmptyString, 2)
                } else {
                    self.take(Token::Quote, 1)
                }
            }
            _ => match identifier_pattern().find(self.rest) {
                Some(ident) => {
                    let len = ident.end();
                    self.take(Token::from_identifier(ident.as_str()), len)
                }
                None => {
                    return Err(LexError::InvalidSymbol {
                        symbol: first,
                        line: self.line,
                    })
                }
            },
        };
        trace!(token = %lexeme.token, line = lexeme.line, text = lexeme.text, "scanned");
        Ok(lexeme)
    }

    fn take(&mut self, token: Token, len: usize) -> Lexeme<'src> {
        let (text, rest) = self.rest.split_at(len);
        self.rest = rest;
        Lexeme::new(token, self.line, text)
    }

    fn skip_ignored(&mut self) -> &'src str {
        let start = self.rest;
        loop {
            if let Some(len) = line_break_len(self.rest) {
                self.rest = &self.rest[len..];
                self.line += 1;
            } else if self.rest.starts_with([' ', '\t']) {
                self.rest = &self.rest[1..];
            } else {
                break;
            }
        }
        &start[..start.len() - self.rest.len()]
    }
}
