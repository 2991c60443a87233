use std::io::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::script::ast::{Assignment, Print, SourceCode, Statement};
use crate::script::environment::Environment;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("program has no statements")]
    EmptyProgram,
    #[error("line {line}: variable \"{name}\" undefined")]
    VariableUndefined { name: String, line: usize },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Tree-walking evaluator. Print output goes to `out`, one line per value.
pub struct Interpreter<W> {
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run every statement in order against a fresh environment, stopping
    /// at the first failure.
    pub fn execute(&mut self, ast: &SourceCode) -> EvalResult<()> {
        if ast.statements.is_empty() {
            return Err(EvalError::EmptyProgram);
        }
        let mut env = Environment::new();
        for statement in &ast.statements {
            debug!(line = statement.line(), "executing statement");
            match statement {
                Statement::Assignment(assignment) => self.eval_assignment(&mut env, assignment),
                Statement::Print(print) => self.eval_print(&env, print)?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn eval_assignment(&mut self, env: &mut Environment, assignment: &Assignment) {
        env.set(&assignment.variable.name, &assignment.value);
    }

    fn eval_print(&mut self, env: &Environment, print: &Print) -> EvalResult<()> {
        let name = &print.variable.name;
        let Some(value) = env.get(name) else {
            return Err(EvalError::VariableUndefined {
                name: name.clone(),
                line: print.line,
            });
        };
        writeln!(self.out, "{value}")?;
        Ok(())
    }
}
