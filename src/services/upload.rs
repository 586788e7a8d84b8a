//! src/services/upload.rs
//!
//! UploadStore — disk persistence for images attached to donation and pet
//! records. Files are streamed to a temporary name and renamed into place;
//! the stored name is a random token, so concurrent uploads cannot collide.

use axum::extract::multipart::{Field, MultipartError};
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};
use uuid::Uuid;

/// Multipart field name carrying the optional image file.
pub const UPLOAD_FIELD: &str = "img";

/// URL prefix the stored files are served under.
const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

/// Root directory for uploaded files. Cheap to clone; carried in the
/// application state.
#[derive(Clone, Debug)]
pub struct UploadStore {
    pub root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Stream one multipart file field to disk and return the public path
    /// to store on the owning record.
    ///
    /// Writes go to a `.tmp-*` name first and are renamed once durable, so
    /// a failed upload never leaves a half-written file under the final
    /// name. The bytes are written unchanged; no content-type or size
    /// checks.
    pub async fn save(&self, mut field: Field<'_>) -> Result<String, UploadError> {
        let name = unique_name(field.file_name());
        let final_path = self.root.join(&name);
        let tmp_path = self.root.join(format!(".tmp-{}", Uuid::new_v4()));

        let mut file = File::create(&tmp_path).await?;
        loop {
            let chunk = match field.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(err) => {
                    let _ = fs::remove_file(&tmp_path).await;
                    return Err(err.into());
                }
            };
            if let Err(err) = file.write_all(&chunk).await {
                let _ = fs::remove_file(&tmp_path).await;
                return Err(err.into());
            }
        }
        if let Err(err) = file.flush().await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }
        if let Err(err) = file.sync_all().await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }

        if let Err(err) = fs::rename(&tmp_path, &final_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }

        Ok(format!("{}/{}", PUBLIC_PREFIX, name))
    }
}

/// Generate a collision-resistant filename, reusing only the extension of
/// the client-supplied name.
fn unique_name(original: Option<&str>) -> String {
    let ext = original
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("{}{}", Uuid::new_v4(), ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_extension_of_the_original_name() {
        let name = unique_name(Some("../escape attempt/minha foto.png"));
        assert!(name.ends_with(".png"));
        assert!(!name.contains("foto"));
        assert!(!name.contains('/'));
    }

    #[test]
    fn no_extension_when_the_original_has_none() {
        let name = unique_name(Some("arquivo"));
        assert!(!name.contains('.'));
    }

    #[test]
    fn missing_original_name_still_yields_a_name() {
        assert!(!unique_name(None).is_empty());
    }

    #[test]
    fn names_do_not_repeat() {
        assert_ne!(unique_name(Some("a.jpg")), unique_name(Some("a.jpg")));
    }
}
