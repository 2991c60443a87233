use thiserror::Error;
use tracing::{debug, warn};

use crate::script::ast::{Assignment, Print, SourceCode, Statement, Variable};
use crate::script::lexer::{LexError, Lexer};
use crate::script::token::Token;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("line {line}: unknown statement starting with {found}")]
    UnknownStatement { found: Token, line: usize },
    #[error("line {line}: expected a string literal but got {found}")]
    NotAString { found: Token, line: usize },
}

/// What to do with a statement whose leading token is neither `print` nor `$`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Keep every statement parsed so far and stop there.
    #[default]
    Lenient,
    /// Fail with [`ParseError::UnknownStatement`].
    Strict,
}

/// Recursive-descent parser.
///
/// ```text
/// SourceCode  ::= Statement+
/// Statement   ::= Print | Assignment
/// Print       ::= "print" "(" Ignored? Variable Ignored? ")" Ignored?
/// Assignment  ::= Variable Ignored? "=" Ignored? String Ignored?
/// Variable    ::= "$" Name Ignored?
/// String      ::= '""' | "'" RawChars "'"
/// ```
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    mode: ParseMode,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_mode(source, ParseMode::default())
    }

    pub fn with_mode(source: &'src str, mode: ParseMode) -> Self {
        Self {
            lexer: Lexer::new(source),
            mode,
        }
    }

    pub fn parse(mut self) -> ParseResult<SourceCode> {
        let start_line = self.lexer.line();
        let mut statements = vec![];
        let mut truncated_at = None;
        while self.lexer.peek()? != Token::Eof {
            match self.parse_statement() {
                Ok(Some(statement)) => {
                    debug!(line = statement.line(), ?statement, "parsed statement");
                    statements.push(statement);
                }
                Ok(None) => break,
                Err(ParseError::UnknownStatement { found, line })
                    if self.mode == ParseMode::Lenient =>
                {
                    warn!(%found, line, "unknown statement, ignoring the rest of the program");
                    truncated_at = Some(line);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        if truncated_at.is_none() {
            self.lexer.next(Token::Eof)?;
        }
        let line = statements.first().map_or(start_line, Statement::line);
        Ok(SourceCode {
            line,
            statements,
            truncated_at,
        })
    }

    /// Returns `None` when only trailing whitespace was left.
    fn parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        self.lexer.skip_if_matches(Token::Ignored)?;
        match self.lexer.peek()? {
            Token::Eof => Ok(None),
            Token::Print => Ok(Some(Statement::Print(self.parse_print()?))),
            Token::VarPrefix => Ok(Some(Statement::Assignment(self.parse_assignment()?))),
            found => Err(ParseError::UnknownStatement {
                found,
                line: self.lexer.line(),
            }),
        }
    }

    fn parse_print(&mut self) -> ParseResult<Print> {
        let line = self.lexer.line();
        self.lexer.next(Token::Print)?;
        self.lexer.next(Token::LeftParen)?;
        self.lexer.skip_if_matches(Token::Ignored)?;
        let variable = self.parse_variable()?;
        self.lexer.skip_if_matches(Token::Ignored)?;
        self.lexer.next(Token::RightParen)?;
        self.lexer.skip_if_matches(Token::Ignored)?;
        Ok(Print { line, variable })
    }

    fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let line = self.lexer.line();
        let variable = self.parse_variable()?;
        self.lexer.skip_if_matches(Token::Ignored)?;
        self.lexer.next(Token::Equals)?;
        self.lexer.skip_if_matches(Token::Ignored)?;
        let value = self.parse_string()?;
        self.lexer.skip_if_matches(Token::Ignored)?;
        Ok(Assignment {
            line,
            variable,
            value,
        })
    }

    // The line is read after the name is consumed.
    fn parse_variable(&mut self) -> ParseResult<Variable> {
        self.lexer.next(Token::VarPrefix)?;
        let name = self.lexer.next(Token::Name)?;
        let variable = Variable::new(name.text, self.lexer.line());
        self.lexer.skip_if_matches(Token::Ignored)?;
        Ok(variable)
    }

    fn parse_string(&mut self) -> ParseResult<String> {
        match self.lexer.peek()? {
            Token::EmptyString => {
                self.lexer.next(Token::EmptyString)?;
                Ok(String::new())
            }
            Token::Quote => {
                let open = self.lexer.next(Token::Quote)?;
                let body = self.lexer.scan_raw_until(open.text)?;
                self.lexer.next(Token::Quote)?;
                Ok(body.to_owned())
            }
            found => Err(ParseError::NotAString {
                found,
                line: self.lexer.line(),
            }),
        }
    }
}
