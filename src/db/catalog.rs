use crate::errors::CatalogError;
use crate::models::Catalog;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Result of a change passed to [`CatalogStore::apply`].
#[derive(Debug)]
pub enum Outcome<T> {
    Changed(T),
    Unchanged(T),
}

/// Owns the catalog JSON file: a single top-level array of products that is read
/// whole and rewritten whole.
///
/// Writers inside this process are serialized through [`CatalogStore::mutate`].
/// Readers never block and always observe the last completed save. Another process
/// writing the same file is not coordinated with and can still lose updates.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty catalog file if none exists yet. An existing file is left as is.
    #[tracing::instrument(
        name = "Initialize catalog file.",
        skip(self),
        fields(path = %self.path.display())
    )]
    pub async fn init(&self) -> Result<(), CatalogError> {
        if tokio::fs::metadata(&self.path).await.is_ok() {
            tracing::debug!("Catalog file already present");
            return Ok(());
        }

        tokio::fs::create_dir_all(self.dir()).await.map_err(|err| {
            CatalogError::StorageUnavailable(format!(
                "could not create {}: {}",
                self.dir().display(),
                err
            ))
        })?;
        self.save(&Catalog::new()).await?;
        tracing::info!("Created empty catalog");

        Ok(())
    }

    /// Reads the whole catalog. A missing file is an error, never an empty catalog.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let content = tokio::fs::read(&self.path).await.map_err(|err| {
            CatalogError::StorageUnavailable(format!(
                "could not read {}: {}",
                self.path.display(),
                err
            ))
        })?;

        serde_json::from_slice(&content).map_err(|err| {
            CatalogError::StorageUnavailable(format!(
                "corrupt catalog {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    /// Replaces the file with `catalog`. The new content goes to a temp file in the same
    /// directory which is then renamed over the target, so a crash leaves either the old
    /// or the new snapshot on disk.
    pub async fn save(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        let content = serde_json::to_vec_pretty(catalog).map_err(|err| {
            CatalogError::StorageUnavailable(format!("could not serialize catalog: {}", err))
        })?;
        let dir = self.dir().to_path_buf();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &content))
            .await
            .map_err(|err| CatalogError::StorageUnavailable(format!("write task failed: {}", err)))?
            .map_err(|err| {
                CatalogError::StorageUnavailable(format!(
                    "could not write {}: {}",
                    self.path.display(),
                    err
                ))
            })
    }

    /// Load, apply `change`, save, holding the write lock for the whole sequence.
    /// Nothing is written when `change` fails.
    pub async fn mutate<T, F>(&self, change: F) -> Result<T, CatalogError>
    where
        F: FnOnce(&mut Catalog) -> Result<T, CatalogError>,
    {
        self.apply(|catalog| change(catalog).map(Outcome::Changed)).await
    }

    /// Like [`CatalogStore::mutate`], but `change` reports whether it modified the
    /// catalog. An [`Outcome::Unchanged`] result skips the save.
    pub async fn apply<T, F>(&self, change: F) -> Result<T, CatalogError>
    where
        F: FnOnce(&mut Catalog) -> Result<Outcome<T>, CatalogError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut catalog = self.load().await?;
        match change(&mut catalog)? {
            Outcome::Changed(outcome) => {
                self.save(&catalog).await?;
                Ok(outcome)
            }
            Outcome::Unchanged(outcome) => Ok(outcome),
        }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

fn write_atomically(dir: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|err| err.error)?;

    Ok(())
}
