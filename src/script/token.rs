use std::fmt;

/// Lexical categories produced by the [`Lexer`](super::lexer::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// End of the source text.
    Eof,
    /// $
    VarPrefix,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// =
    Equals,
    /// ' or ", opens or closes a raw string body
    Quote,
    /// '' or "", the empty string literal
    EmptyString,
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,
    /// the reserved word `print`
    Print,
    /// A run of spaces, tabs and line terminators.
    Ignored,
}

impl Token {
    /// Classify a scanned identifier run.
    pub fn from_identifier(ident: &str) -> Token {
        match ident {
            "print" => Token::Print,
            _ => Token::Name,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Eof => "EOF",
            Token::VarPrefix => "$",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Equals => "=",
            Token::Quote => "quote",
            Token::EmptyString => "\"\"",
            Token::Name => "Name",
            Token::Print => "print",
            Token::Ignored => "Ignored",
        };
        f.write_str(s)
    }
}

/// A scanned token together with where it started and the text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub token: Token,
    pub line: usize,
    pub text: &'src str,
}

impl<'src> Lexeme<'src> {
    pub fn new(token: Token, line: usize, text: &'src str) -> Self {
        Self { token, line, text }
    }
}
