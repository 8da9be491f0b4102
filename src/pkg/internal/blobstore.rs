use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::prelude::{Error, Result};

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Reference to a validated, durably written resume file. The workflow only
/// ever persists references produced by [`BlobStore::intake`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRef {
    pub filename: String,
    pub original_name: String,
    pub stored_path: String,
    pub size_bytes: i64,
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        BlobStore { root: root.into() }
    }

    /// Validates the upload against the type and size policy, then writes it
    /// under a generated name. The returned reference points at a file whose
    /// write has completed and been flushed.
    pub async fn intake(&self, original_name: &str, data: &[u8]) -> Result<BlobRef> {
        let extension = Path::new(original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::validation(
                "resume",
                "Only PDF, DOC, and DOCX files are allowed",
            ));
        }
        if data.len() > MAX_RESUME_BYTES {
            return Err(Error::validation(
                "resume",
                "File too large. Maximum size is 5MB",
            ));
        }

        let filename = format!("resume-{}.{}", Uuid::new_v4(), extension);
        let dir = self.root.join("resumes");
        fs::create_dir_all(&dir).await?;
        let mut file = fs::File::create(dir.join(&filename)).await?;
        file.write_all(data).await?;
        file.flush().await?;
        tracing::debug!("stored resume {} ({} bytes)", &filename, data.len());

        Ok(BlobRef {
            stored_path: format!("resumes/{filename}"),
            original_name: original_name.to_string(),
            size_bytes: data.len() as i64,
            mime_type: mime_for_extension(&extension).to_string(),
            filename,
        })
    }

    /// Removes a previously written blob; used to roll back a submission
    /// whose insert was lost to a concurrent race. Missing files are fine.
    pub async fn discard(&self, blob: &BlobRef) -> Result<()> {
        match fs::remove_file(self.root.join(&blob.stored_path)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn resolve(&self, blob: &BlobRef) -> Result<Vec<u8>> {
        match fs::read(self.root.join(&blob.stored_path)).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound("Resume file not found on server"))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}
