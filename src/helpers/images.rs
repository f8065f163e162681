use crate::errors::{CatalogError, FieldError};
use std::path::PathBuf;

/// Writes uploaded product images into the static image directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Stores `bytes` under the client supplied file name and returns the name actually used.
    /// Directory components are stripped so uploads cannot escape the image directory.
    #[tracing::instrument(
        name = "Save product image.",
        skip(self, bytes),
        fields(size = bytes.len())
    )]
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, CatalogError> {
        let filename = sanitize_filename(filename).ok_or_else(|| {
            CatalogError::ValidationFailed(vec![FieldError::new(
                "imageUrl",
                "Image file name is missing or invalid",
            )])
        })?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(|err| {
            CatalogError::StorageUnavailable(format!(
                "could not create {}: {}",
                self.dir.display(),
                err
            ))
        })?;

        let path = self.dir.join(&filename);
        tokio::fs::write(&path, bytes).await.map_err(|err| {
            CatalogError::StorageUnavailable(format!("could not write {}: {}", path.display(), err))
        })?;
        tracing::info!("Image {} saved", path.display());

        Ok(filename)
    }
}

fn sanitize_filename(filename: &str) -> Option<String> {
    // browsers on windows may send full paths
    let name = filename.rsplit(['/', '\\']).next()?.trim();
    match name {
        "" | "." | ".." => None,
        name => Some(name.to_string()),
    }
}
