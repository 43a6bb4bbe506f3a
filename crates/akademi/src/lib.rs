//! `akademi` - Content API for the Derin Akademi website
//!
//! This library provides the record types, flat-file JSON storage and HTTP
//! endpoints behind the site's trainings, testimonials, FAQs, LinkedIn posts
//! and contact details.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod storage;

pub use api::build_router;
pub use config::Config;
pub use content::{Resource, ResourceKind};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use storage::{ContentStats, ContentStore, JsonCollection, JsonDocument};
