//! A single JSON object backed by a file.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use super::{read_json, write_json};
use crate::error::Result;

/// A document of type `T` stored as one JSON object.
#[derive(Debug)]
pub struct JsonDocument<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonDocument<T> {
    /// Create a document backed by the file at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Get the path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document, or `None` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<T>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        read_json(&self.path)
    }

    /// Overwrite the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, value: &T) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        write_json(&self.path, value)?;
        info!("Saved {}", self.path.display());
        Ok(())
    }
}
