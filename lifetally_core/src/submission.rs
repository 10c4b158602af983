//! Append-only log of raw user-submitted inputs.
//!
//! Submissions are appended to a JSONL (JSON Lines) file with file
//! locking for safe concurrent access. The calculation engine never
//! reads this log; it exists purely as an audit trail for the rollup.

use crate::types::Submission;
use crate::Result;
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Sink trait for persisting submissions
pub trait SubmissionSink {
    fn append(&mut self, submission: &Submission) -> Result<()>;
}

/// JSONL-based submission sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl SubmissionSink for JsonlSink {
    fn append(&mut self, submission: &Submission) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(submission)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended submission {} to log", submission.id);
        Ok(())
    }
}

/// Read all submissions from a log file
///
/// Malformed lines are skipped with a warning rather than failing the
/// whole read.
pub fn read_submissions(path: &Path) -> Result<Vec<Submission>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut submissions = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Submission>(&line) {
            Ok(submission) => submissions.push(submission),
            Err(e) => {
                tracing::warn!("Failed to parse submission at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} submissions from log", submissions.len());
    Ok(submissions)
}
