use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::script::interpreter::EvalError;
use crate::script::parser::ParseError;

pub type PineappleResult<T> = Result<T, PineappleError>;

#[derive(Debug, Error)]
pub enum PineappleError {
    #[error("parse failed, {0}")]
    Parse(#[from] ParseError),
    #[error("eval failed, {0}")]
    Eval(#[from] EvalError),
    #[error("cannot read script {}: {source}", path.display())]
    ReadScript {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("script {} is not valid {encoding}", path.display())]
    DecodeScript {
        path: PathBuf,
        encoding: &'static str,
    },
    #[error("unknown encoding \"{0}\"")]
    UnknownEncoding(String),
}
