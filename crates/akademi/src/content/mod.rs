//! Content types for the website.
//!
//! Each editable resource is a flat record persisted as one JSON array in
//! the data directory. The [`Resource`] trait carries the small per-type
//! differences (file name, id scheme, update semantics) so the storage and
//! HTTP layers can stay generic.

pub mod contact;
pub mod faq;
pub mod linkedin;
pub mod testimonial;
pub mod training;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub use contact::{ContactInfo, WorkingHours};
pub use faq::Faq;
pub use linkedin::LinkedInContent;
pub use testimonial::Testimonial;
pub use training::Training;

/// How new record identifiers are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Current time in milliseconds, as a decimal string.
    Timestamp,
    /// One more than the largest numeric id already stored.
    Sequential,
}

/// How a PUT body is applied to the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    /// Fields present in the body overwrite the stored ones; the rest are kept.
    Merge,
    /// The body replaces the stored record entirely.
    Replace,
}

/// A record type stored as a JSON array in its own file.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular label used in messages, e.g. `Training`.
    const LABEL: &'static str;

    /// Plural noun used in messages, e.g. `trainings`.
    const PLURAL: &'static str;

    /// Name of the backing file inside the data directory.
    const FILE_NAME: &'static str;

    /// Id scheme for records created through the API.
    const ID_STRATEGY: IdStrategy;

    /// Update semantics for PUT requests.
    const UPDATE_MODE: UpdateMode;

    /// The record's identifier.
    fn id(&self) -> &str;

    /// Overwrite the record's identifier.
    fn set_id(&mut self, id: String);

    /// Clean up a record before it is written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the record cannot be stored.
    fn normalize(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The kinds of content the site manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Training programmes.
    Trainings,
    /// Client testimonials.
    Testimonials,
    /// Frequently asked questions.
    Faqs,
    /// LinkedIn posts embedded on the content page.
    LinkedInContents,
    /// The single contact information document.
    Contact,
}

impl ResourceKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 5] = [
        Self::Trainings,
        Self::Testimonials,
        Self::Faqs,
        Self::LinkedInContents,
        Self::Contact,
    ];

    /// Name of the backing file inside the data directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Trainings => Training::FILE_NAME,
            Self::Testimonials => Testimonial::FILE_NAME,
            Self::Faqs => Faq::FILE_NAME,
            Self::LinkedInContents => LinkedInContent::FILE_NAME,
            Self::Contact => ContactInfo::FILE_NAME,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trainings => write!(f, "trainings"),
            Self::Testimonials => write!(f, "testimonials"),
            Self::Faqs => write!(f, "faqs"),
            Self::LinkedInContents => write!(f, "linkedin-contents"),
            Self::Contact => write!(f, "contact"),
        }
    }
}
