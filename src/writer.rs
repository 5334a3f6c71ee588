use crate::error::OcrError;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of writing the match set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteReport {
    Saved { count: usize, path: PathBuf },
    NoMatches,
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteReport::Saved { count, path } => write!(
                f,
                "Found {} e-mail addresses, saved in {}",
                count,
                path.display()
            ),
            WriteReport::NoMatches => write!(f, "No e-mail address found"),
        }
    }
}

/// Write one match per line, truncating any previous content.
///
/// An empty match set still truncates the file, leaving it empty.
pub fn write(matches: &[String], path: &Path) -> Result<WriteReport, OcrError> {
    let io_err = |source| OcrError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    for email in matches {
        writeln!(out, "{}", email).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    if matches.is_empty() {
        tracing::info!("No matches, truncated {}", path.display());
        return Ok(WriteReport::NoMatches);
    }

    tracing::info!("Wrote {} matches to {}", matches.len(), path.display());
    Ok(WriteReport::Saved {
        count: matches.len(),
        path: path.to_path_buf(),
    })
}
