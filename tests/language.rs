use pineapple::script::interpreter::EvalError;
use pineapple::script::lexer::LexError;
use pineapple::script::parser::ParseError;
use pineapple::script::token::Token;
use pineapple::{Engine, PineappleError};
use pretty_assertions::assert_eq;

fn run(source: &str) -> Result<String, PineappleError> {
    Engine::default().capture(source)
}

#[test]
fn hello() {
    assert_eq!(run("$x = 'hello'\nprint($x)\n").unwrap(), "hello\n");
}

#[test]
fn empty_literal_prints_empty_line() {
    assert_eq!(run("$x = \"\"\nprint($x)\n").unwrap(), "\n");
}

#[test]
fn print_of_undefined_fails_without_output() {
    let mut out = Vec::new();
    let err = Engine::default()
        .execute("print($undefined)", &mut out)
        .unwrap_err();
    assert!(matches!(
        err,
        PineappleError::Eval(EvalError::VariableUndefined { ref name, line: 1 }) if name == "undefined"
    ));
    assert!(out.is_empty());
}

#[test]
fn separators_do_not_matter() {
    assert_eq!(
        run("$x='a'print($x)").unwrap(),
        run("$x = 'a'\n\nprint( $x )\n").unwrap()
    );
}

#[test]
fn crlf_and_tabs_are_separators() {
    let out = run("\t$first_name =\t'Ada'\r\n$last = \"Lovelace\"\r\nprint($first_name)\r\nprint($last)\r\n")
        .unwrap();
    assert_eq!(out, "Ada\nLovelace\n");
}

#[test]
fn repeated_assignment_is_idempotent() {
    let once = run("$v = 'same'\nprint($v)").unwrap();
    let twice = run("$v = 'same'\n$v = 'same'\nprint($v)").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn values_are_not_escaped() {
    assert_eq!(run("$p = 'C:\\new\\table'\nprint($p)").unwrap(), "C:\\new\\table\n");
}

#[test]
fn multiline_literal_keeps_line_numbers() {
    let err = run("$a = 'one\ntwo'\nprint($a)\nprint($b)").unwrap_err();
    assert!(matches!(
        err,
        PineappleError::Eval(EvalError::VariableUndefined { line: 4, .. })
    ));
}

#[test]
fn empty_programs_fail() {
    for source in ["", "   ", "\n\r\n\t"] {
        assert!(
            matches!(run(source), Err(PineappleError::Eval(EvalError::EmptyProgram))),
            "{source:?}"
        );
    }
}

#[test]
fn unknown_statement_keeps_prefix() {
    let source = "$a = 'kept'\nprint($a)\n= 'lost'\nprint($a)\n";
    assert_eq!(run(source).unwrap(), "kept\n");
}

#[test]
fn unknown_first_statement_leaves_nothing_to_run() {
    assert!(matches!(
        run("hello()"),
        Err(PineappleError::Eval(EvalError::EmptyProgram))
    ));
}

#[test]
fn strict_engine_reports_unknown_statement() {
    let err = Engine::strict()
        .capture("$a = 'kept'\nprint($a)\n= 'lost'\n")
        .unwrap_err();
    assert!(matches!(
        err,
        PineappleError::Parse(ParseError::UnknownStatement {
            found: Token::Equals,
            line: 3
        })
    ));
}

#[test]
fn invalid_symbol_aborts_before_running() {
    let mut out = Vec::new();
    let err = Engine::default()
        .execute("$a = 'x'\nprint($a)\n$b = 'y' ;", &mut out)
        .unwrap_err();
    assert!(matches!(
        err,
        PineappleError::Parse(ParseError::Lex(LexError::InvalidSymbol { symbol: ';', line: 3 }))
    ));
    assert!(out.is_empty());
}

#[test]
fn mismatch_names_expected_and_found() {
    let err = run("print($x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse failed, line 1: syntax error near 'EOF', expected token ) but got EOF"
    );
}

#[test]
fn print_is_reserved() {
    let err = run("$print = 'x'").unwrap_err();
    assert!(matches!(
        err,
        PineappleError::Parse(ParseError::Lex(LexError::UnexpectedToken {
            expected: Token::Name,
            found: Token::Print,
            ..
        }))
    ));
}

#[test]
fn compile_exposes_the_tree() {
    let ast = Engine::default().compile("$x = 'a'\nprint($x)").unwrap();
    assert_eq!(ast.statements.len(), 2);
    assert_eq!(ast.statements[1].line(), 2);
}
