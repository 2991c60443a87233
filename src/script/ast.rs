/// Root of a parsed program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCode {
    /// Line the first statement starts on.
    pub line: usize,
    pub statements: Vec<Statement>,
    /// Set when a lenient parse stopped at a statement it could not classify.
    pub truncated_at: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assignment(Assignment),
    Print(Print),
}

impl Statement {
    pub fn line(&self) -> usize {
        match self {
            Statement::Assignment(a) => a.line,
            Statement::Print(p) => p.line,
        }
    }
}

/// `$name = 'literal'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub line: usize,
    pub variable: Variable,
    /// The literal exactly as written between the quotes.
    pub value: String,
}

/// `print($name)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Print {
    pub line: usize,
    pub variable: Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub line: usize,
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            line,
            name: name.into(),
        }
    }
}
