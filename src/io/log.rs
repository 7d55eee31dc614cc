//! Append-only result log.
//!
//! One flat, comma-delimited line per evaluated candidate, parameters
//! first, then either the fit scores followed by the space-separated
//! theoretical intensities or the `None, None,` failure sentinel:
//!
//! ```text
//! 8.0, 4.0, 6.0, 1.4e-5, 0.993, 0.0187 0.0243 0.0292
//! 8.0, 4.0, 12.0, None, None,
//! ```
//!
//! Floats print in shortest round-trip form (`8.0`, never `8`), and
//! opening an existing log appends to it rather than truncating, so
//! successive runs accumulate into one file.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Candidate, Evaluation};
use crate::error::AppError;

/// Buffered writer over the append-only result log file.
#[derive(Debug)]
pub struct ResultLog {
    writer: BufWriter<std::fs::File>,
}

impl ResultLog {
    /// Open (or create) the log at `path` in append mode.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                AppError::config(format!("Failed to open result log '{}': {e}", path.display()))
            })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append one record line for an evaluated candidate.
    pub fn record(
        &mut self,
        candidate: &Candidate,
        evaluation: &Evaluation,
    ) -> Result<(), AppError> {
        let line = format_record(candidate, evaluation);
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| AppError::config(format!("Failed to write to result log: {e}")))
    }

    /// Flush buffered lines to disk.
    pub fn flush(&mut self) -> Result<(), AppError> {
        self.writer
            .flush()
            .map_err(|e| AppError::config(format!("Failed to flush result log: {e}")))
    }
}

/// Render one candidate's log line, trailing newline included.
pub fn format_record(candidate: &Candidate, evaluation: &Evaluation) -> String {
    let mut line = String::new();
    for value in candidate.values() {
        line.push_str(&format!("{value:?}, "));
    }
    match evaluation {
        Evaluation::Fitted { curve, stats } => {
            line.push_str(&format!(
                "{:?}, {:?}, ",
                stats.mean_squared_error, stats.r_squared
            ));
            for intensity in &curve.intensities {
                line.push_str(&format!("{intensity:?} "));
            }
        }
        Evaluation::Failed(_) => line.push_str("None, None, "),
    }
    line.push('\n');
    line
}
