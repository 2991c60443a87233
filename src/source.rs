use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::error::{PineappleError, PineappleResult};

/// Expand a leading `~` to the home directory. Anything else is returned
/// as given and resolves against the working directory.
pub fn resolve_path(raw: &str) -> PathBuf {
    let home_relative = raw
        .strip_prefix("~/")
        .or_else(|| raw.strip_prefix("~\\"))
        .or(if raw == "~" { Some("") } else { None });
    match (home_relative, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

/// Read a script and decode it to text. A byte order mark takes precedence
/// over `label`, which defaults to UTF-8.
pub fn load_script(path: &Path, label: Option<&str>) -> PineappleResult<String> {
    let fallback = match label {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| PineappleError::UnknownEncoding(label.into()))?,
        None => UTF_8,
    };
    let bytes = fs::read(path).map_err(|source| PineappleError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, &bytes, fallback)
}

fn decode(path: &Path, bytes: &[u8], fallback: &'static Encoding) -> PineappleResult<String> {
    let (encoding, bom_len) = Encoding::for_bom(bytes).unwrap_or((fallback, 0));
    let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        return Err(PineappleError::DecodeScript {
            path: path.to_path_buf(),
            encoding: encoding.name(),
        });
    }
    debug!(path = %path.display(), encoding = encoding.name(), "loaded script");
    Ok(text.into_owned())
}
