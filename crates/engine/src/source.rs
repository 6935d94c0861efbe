// crates/engine/src/source.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Name reported for reader-based sources that have no path.
pub const STDIN_NAME: &str = "<stdin>";

/// Read every line of a source, keeping the trailing `\n` on each line.
///
/// Invalid UTF-8 is replaced lossily so mostly-text sources still analyze.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails mid-stream.
pub fn read_lines<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    log::debug!("read {} line(s) from source", lines.len());
    Ok(lines)
}

/// Open a file and read it as a line source.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] when the file cannot be opened or read.
pub fn read_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_lines(BufReader::new(file)).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
