//! LinkedIn posts embedded on the training content page.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{IdStrategy, Resource, UpdateMode};
use crate::error::{Error, Result};

/// Prefix of the iframe URL LinkedIn serves for a feed update.
const EMBED_PREFIX: &str = "https://www.linkedin.com/embed/feed/update/urn:li:activity:";

/// A LinkedIn post rendered as an embedded iframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInContent {
    /// Record identifier (assigned by the server).
    #[serde(default)]
    pub id: String,
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Public URL of the post.
    pub url: String,
    /// Iframe source; derived from `url` when left empty.
    #[serde(default)]
    pub embed_url: String,
    /// Optional preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

fn activity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"activity-(\d+)").expect("valid activity pattern"))
}

/// Build the embed URL for a public LinkedIn post URL.
///
/// Returns `None` when the URL carries no `activity-<digits>` segment.
#[must_use]
pub fn embed_url_for(post_url: &str) -> Option<String> {
    activity_pattern()
        .captures(post_url)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{EMBED_PREFIX}{}", id.as_str()))
}

impl Resource for LinkedInContent {
    const LABEL: &'static str = "Content";
    const PLURAL: &'static str = "contents";
    const FILE_NAME: &'static str = "linkedin-contents.json";
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;
    const UPDATE_MODE: UpdateMode = UpdateMode::Replace;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn normalize(&mut self) -> Result<()> {
        if !self.embed_url.trim().is_empty() {
            return Ok(());
        }
        match embed_url_for(&self.url) {
            Some(embed) => {
                self.embed_url = embed;
                Ok(())
            }
            None => Err(Error::invalid_input(
                "embedUrl is empty and could not be derived from url",
            )),
        }
    }
}
