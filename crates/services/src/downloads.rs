use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::DownloadError;

/// File stem for an exported PDF, sanitised the way the backend names its
/// Content-Disposition attachments.
#[must_use]
pub fn pdf_file_stem(title: &str) -> String {
    let trimmed = title.trim();
    let base = if trimmed.is_empty() { "Question_Paper" } else { trimmed };
    base.replace(' ', "_").replace('/', "-")
}

/// Write a downloaded PDF payload under `dir` and return the final path.
///
/// Independent of wizard state by design: a failure here surfaces as a
/// notification and nothing else changes.
///
/// # Errors
///
/// Returns `DownloadError` if the directory cannot be created or the file
/// cannot be written.
pub async fn write_pdf(dir: &Path, stem: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{stem}.pdf"));
    fs::write(&path, bytes).await?;
    Ok(path)
}
