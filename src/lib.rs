//! Pineapple: a tiny scripting language with two statements.
//!
//! ```text
//! $greeting = 'hello'
//! print($greeting)
//! ```
//!
//! Source text flows through [`script::lexer`], [`script::parser`] and
//! [`script::interpreter`]. [`Engine`] ties them together.

pub mod engine;
pub mod error;
pub mod logger;
pub mod script;
pub mod source;

pub use engine::{Engine, EngineOptions};
pub use error::{PineappleError, PineappleResult};
pub use script::parser::ParseMode;

/// Run `source` with default options, printing to stdout.
pub fn execute(source: &str) -> PineappleResult<()> {
    Engine::default().execute_stdout(source)
}
