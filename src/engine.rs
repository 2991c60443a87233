use std::io::{self, Write};

use tracing::info;

use crate::error::PineappleResult;
use crate::script::ast::SourceCode;
use crate::script::interpreter::Interpreter;
use crate::script::parser::{ParseMode, Parser};

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    pub mode: ParseMode,
}

/// Front door to the language: parse a script, then run it.
///
/// An engine keeps no state between calls, so every `execute` sees an
/// empty set of variables.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn strict() -> Self {
        Self::new(EngineOptions {
            mode: ParseMode::Strict,
        })
    }

    pub fn compile(&self, source: &str) -> PineappleResult<SourceCode> {
        let ast = Parser::with_mode(source, self.options.mode).parse()?;
        info!(
            statements = ast.statements.len(),
            truncated_at = ?ast.truncated_at,
            "compiled script"
        );
        Ok(ast)
    }

    /// Compile and run `source`, writing printed values to `out`. Output
    /// produced before a failing statement is left in `out`.
    pub fn execute<W: Write>(&self, source: &str, out: W) -> PineappleResult<()> {
        let ast = self.compile(source)?;
        Interpreter::new(out).execute(&ast)?;
        Ok(())
    }

    pub fn execute_stdout(&self, source: &str) -> PineappleResult<()> {
        self.execute(source, io::stdout().lock())
    }

    /// Run `source` and return everything it printed.
    pub fn capture(&self, source: &str) -> PineappleResult<String> {
        let mut out = Vec::new();
        self.execute(source, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::PineappleError;
    use crate::script::interpreter::EvalError;
    use crate::script::parser::ParseError;

    #[test]
    fn round_trip() {
        let out = Engine::default()
            .capture("$x = 'hello'\nprint($x)\n")
            .unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn partial_output_survives_failure() {
        let mut out = Vec::new();
        let err = Engine::default()
            .execute("$a = 'x'\nprint($a)\nprint($nope)", &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            PineappleError::Eval(EvalError::VariableUndefined { .. })
        ));
        assert_eq!(out, b"x\n");
    }

    #[test]
    fn modes_differ_on_unknown_statements() {
        let source = "$a = 'x'\nprint($a)\n)";
        assert_eq!(Engine::default().capture(source).unwrap(), "x\n");
        assert!(matches!(
            Engine::strict().capture(source),
            Err(PineappleError::Parse(ParseError::UnknownStatement { line: 3, .. }))
        ));
    }

    #[test]
    fn error_messages_read_well() {
        let err = Engine::default().capture("print($undefined)").unwrap_err();
        assert_eq!(
            err.to_string(),
            "eval failed, line 1: variable \"undefined\" undefined"
        );
    }
}
