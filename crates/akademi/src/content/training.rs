//! Training programmes.

use serde::{Deserialize, Serialize};

use super::{IdStrategy, Resource, UpdateMode};
use crate::error::Result;

/// A training programme shown on the trainings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    /// Record identifier (assigned by the server).
    #[serde(default)]
    pub id: String,
    /// Programme title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Bullet points listed on the card.
    pub features: Vec<String>,
    /// Duration label, e.g. `16 Saat • Sertifikalı`.
    pub duration: String,
    /// Accent colour name used by the front end.
    pub icon_color: String,
}

impl Resource for Training {
    const LABEL: &'static str = "Training";
    const PLURAL: &'static str = "trainings";
    const FILE_NAME: &'static str = "trainings.json";
    const ID_STRATEGY: IdStrategy = IdStrategy::Timestamp;
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Drops blank feature entries left over from empty form rows.
    fn normalize(&mut self) -> Result<()> {
        self.features.retain(|f| !f.trim().is_empty());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Training {
        Training {
            id: String::new(),
            title: "Liderlik Eğitimleri".to_string(),
            description: "Etkili liderlik becerileri".to_string(),
            features: vec!["Stratejik Liderlik".to_string(), "Takım Yönetimi".to_string()],
            duration: "16 Saat • Sertifikalı".to_string(),
            icon_color: "blue".to_string(),
        }
    }

    #[test]
    fn test_normalize_drops_blank_features() {
        let mut training = sample();
        training.features = vec![
            "Stratejik Liderlik".to_string(),
            String::new(),
            "   ".to_string(),
            "Motivasyon".to_string(),
        ];
        training.normalize().unwrap();
        assert_eq!(training.features, vec!["Stratejik Liderlik", "Motivasyon"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["iconColor"], "blue");
        assert!(json.get("icon_color").is_none());
    }

    #[test]
    fn test_deserialize_without_id() {
        let json = r#"{
            "title": "İK Mevzuatı",
            "description": "İş hukuku",
            "features": ["İş Kanunu"],
            "duration": "24 Saat",
            "iconColor": "red"
        }"#;
        let training: Training = serde_json::from_str(json).unwrap();
        assert!(training.id.is_empty());
        assert_eq!(training.title, "İK Mevzuatı");
    }

    #[test]
    fn test_deserialize_missing_features_fails() {
        let json = r#"{"title": "x", "description": "y", "duration": "z", "iconColor": "red"}"#;
        assert!(serde_json::from_str::<Training>(json).is_err());
    }
}
