//! Frequently asked questions.

use serde::{Deserialize, Serialize};

use super::{IdStrategy, Resource, UpdateMode};

/// A question and answer pair shown on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Record identifier (assigned by the server).
    #[serde(default)]
    pub id: String,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

impl Resource for Faq {
    const LABEL: &'static str = "FAQ";
    const PLURAL: &'static str = "FAQs";
    const FILE_NAME: &'static str = "faqs.json";
    const ID_STRATEGY: IdStrategy = IdStrategy::Timestamp;
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
