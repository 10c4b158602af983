//! CSV rollup for archiving logged submissions.
//!
//! Converts the JSONL submission log into an append-only CSV audit file,
//! fsyncing the CSV before the log is archived so no submission is lost.

use crate::types::Submission;
use crate::Result;
use std::fs::OpenOptions;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    submitted_at: String,
    birth_date: String,
    country: String,
    gender: String,
}

impl From<&Submission> for CsvRow {
    fn from(submission: &Submission) -> Self {
        CsvRow {
            id: submission.id.to_string(),
            submitted_at: submission.submitted_at.to_rfc3339(),
            birth_date: submission.birth_date.to_string(),
            country: submission.country.clone(),
            gender: submission.gender.as_str().to_string(),
        }
    }
}

/// Roll up logged submissions into CSV and archive the log atomically
///
/// This function:
/// 1. Reads all submissions from the JSONL log
/// 2. Appends them to the CSV file (creates with headers if needed)
/// 3. Syncs the CSV to disk
/// 4. Renames the log to .processed
/// 5. Returns the number of submissions processed
///
/// The log is renamed (not deleted) so manual recovery stays possible;
/// processed files are removed separately by `cleanup_processed_logs`.
pub fn log_to_csv_and_archive(log_path: &Path, csv_path: &Path) -> Result<usize> {
    let submissions = crate::submission::read_submissions(log_path)?;

    if submissions.is_empty() {
        tracing::info!("No submissions in log to roll up");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Write headers only when the file is brand new
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for submission in &submissions {
        writer.serialize(CsvRow::from(submission))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Wrote {} submissions to CSV", submissions.len());

    let processed_path = log_path.with_extension("jsonl.processed");
    std::fs::rename(log_path, &processed_path)?;

    tracing::info!("Archived submission log to {:?}", processed_path);

    Ok(submissions.len())
}

/// Remove all .processed submission logs in the given directory
pub fn cleanup_processed_logs(dir: &Path) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(extension) = path.extension() {
            if extension == "processed" {
                std::fs::remove_file(&path)?;
                tracing::debug!("Removed processed log: {:?}", path);
                count += 1;
            }
        }
    }

    if count > 0 {
        tracing::info!("Cleaned up {} processed logs", count);
    }

    Ok(count)
}
