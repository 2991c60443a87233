use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pineapple::script::interpreter::EvalError;
use pineapple::script::parser::ParseError;
use pineapple::source::{load_script, resolve_path};
use pineapple::{logger, Engine, EngineOptions, ParseMode, PineappleError, PineappleResult};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log more; repeat for more detail. RUST_LOG overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script.
    Run(ScriptArgs),
    /// Parse a script and print its syntax tree without running it.
    Check(ScriptArgs),
}

#[derive(Args)]
struct ScriptArgs {
    /// Path to the script. A leading `~` means the home directory.
    path: String,
    /// Reject statements that start with an unknown token instead of
    /// stopping quietly before them.
    #[arg(long)]
    strict: bool,
    /// Encoding of the script when it has no byte order mark.
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,
}

impl ScriptArgs {
    fn engine(&self) -> Engine {
        let mode = if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        };
        Engine::new(EngineOptions { mode })
    }

    fn load(&self) -> PineappleResult<String> {
        load_script(&resolve_path(&self.path), self.encoding.as_deref())
    }
}

fn handle_pineapple_err(e: &PineappleError) {
    eprintln!("\x1b[31m[Error]:{e}.\x1b[0m");
    match e {
        PineappleError::Eval(EvalError::EmptyProgram) => {
            eprintln!("\x1b[31m[Error]:A script needs at least one assignment or print.\x1b[0m")
        }
        PineappleError::Parse(ParseError::UnknownStatement { .. }) => {
            eprintln!("\x1b[31m[Error]:Statements start with `$name` or `print`.\x1b[0m")
        }
        _ => {}
    }
}

fn cli() -> PineappleResult<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    match &cli.command {
        Commands::Run(args) => {
            let script = args.load()?;
            args.engine().execute_stdout(&script)
        }
        Commands::Check(args) => {
            let script = args.load()?;
            let ast = args.engine().compile(&script)?;
            println!("{ast:#?}");
            if let Some(line) = ast.truncated_at {
                println!("stopped at line {line}, the rest of the script is ignored");
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    match cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_pineapple_err(&e);
            ExitCode::FAILURE
        }
    }
}
