//! Storage layer for akademi.
//!
//! Every resource lives in its own pretty-printed JSON file inside the data
//! directory. Reads load the whole file; writes serialise the whole value to
//! a sibling temporary file and rename it over the original.

pub mod collection;
pub mod document;
pub mod ids;
pub mod seed;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::content::{ContactInfo, Faq, LinkedInContent, Resource, Testimonial, Training};
use crate::error::{Error, Result};

pub use collection::JsonCollection;
pub use document::JsonDocument;

/// The five content stores, opened from one data directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    data_dir: PathBuf,
    /// Training programmes.
    pub trainings: Arc<JsonCollection<Training>>,
    /// Client testimonials.
    pub testimonials: Arc<JsonCollection<Testimonial>>,
    /// Frequently asked questions.
    pub faqs: Arc<JsonCollection<Faq>>,
    /// Embedded LinkedIn posts.
    pub linkedin_contents: Arc<JsonCollection<LinkedInContent>>,
    /// Contact details document.
    pub contact: Arc<JsonDocument<ContactInfo>>,
}

impl ContentStore {
    /// Open the stores rooted at `data_dir`.
    ///
    /// Creates the directory if it does not exist. Individual files are
    /// created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        ensure_dir(&data_dir)?;

        info!("Content store opened at {}", data_dir.display());
        Ok(Self {
            trainings: Arc::new(JsonCollection::open(data_dir.join(Training::FILE_NAME))),
            testimonials: Arc::new(JsonCollection::open(data_dir.join(Testimonial::FILE_NAME))),
            faqs: Arc::new(JsonCollection::open(data_dir.join(Faq::FILE_NAME))),
            linkedin_contents: Arc::new(JsonCollection::open(
                data_dir.join(LinkedInContent::FILE_NAME),
            )),
            contact: Arc::new(JsonDocument::open(data_dir.join(ContactInfo::FILE_NAME))),
            data_dir,
        })
    }

    /// Get the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Count the records held by each store.
    ///
    /// # Errors
    ///
    /// Returns an error if any data file exists but cannot be read or parsed.
    pub fn stats(&self) -> Result<ContentStats> {
        Ok(ContentStats {
            trainings: self.trainings.count()?,
            testimonials: self.testimonials.count()?,
            faqs: self.faqs.count()?,
            linkedin_contents: self.linkedin_contents.count()?,
            contact_present: self.contact.exists(),
        })
    }
}

/// Record counts per resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    /// Number of trainings.
    pub trainings: usize,
    /// Number of testimonials.
    pub testimonials: usize,
    /// Number of FAQs.
    pub faqs: usize,
    /// Number of LinkedIn contents.
    pub linkedin_contents: usize,
    /// Whether the contact document has been written.
    pub contact_present: bool,
}

impl ContentStats {
    /// Total number of collection records (the contact document excluded).
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.trainings + self.testimonials + self.faqs + self.linkedin_contents
    }
}

/// Create `dir` and its parents if missing.
fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Read and parse a JSON file.
///
/// Returns `Ok(None)` if the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} does not exist yet", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialise `value` and atomically replace the file at `path`.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let tmp = temp_path(path);
    let write_err = |source: std::io::Error| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(&tmp, json).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;

    debug!("Wrote {}", path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
