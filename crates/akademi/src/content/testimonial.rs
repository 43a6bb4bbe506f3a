//! Client testimonials.

use serde::{Deserialize, Serialize};

use super::{IdStrategy, Resource, UpdateMode};

/// A testimonial from a client company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Record identifier (assigned by the server).
    #[serde(default)]
    pub id: String,
    /// Client company name.
    pub company_name: String,
    /// Initials shown in the avatar circle.
    pub company_initials: String,
    /// Industry sector of the client.
    pub sector: String,
    /// The quote itself.
    pub testimonial_text: String,
    /// Name of the person quoted.
    pub author_name: String,
    /// Job title of the person quoted.
    pub author_title: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Avatar background colour name.
    pub bg_color: String,
}

impl Resource for Testimonial {
    const LABEL: &'static str = "Testimonial";
    const PLURAL: &'static str = "testimonials";
    const FILE_NAME: &'static str = "testimonials.json";
    const ID_STRATEGY: IdStrategy = IdStrategy::Timestamp;
    const UPDATE_MODE: UpdateMode = UpdateMode::Merge;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_field_names() {
        let json = r#"{
            "id": "1",
            "companyName": "ABC Şirketi A.Ş.",
            "companyInitials": "AŞ",
            "sector": "Teknoloji Sektörü",
            "testimonialText": "Harika",
            "authorName": "Ahmet Yılmaz",
            "authorTitle": "İK Müdürü",
            "rating": 5,
            "bgColor": "blue"
        }"#;
        let testimonial: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(testimonial.company_initials, "AŞ");
        assert_eq!(testimonial.rating, 5);

        let value = serde_json::to_value(&testimonial).unwrap();
        assert_eq!(value["testimonialText"], "Harika");
        assert_eq!(value["bgColor"], "blue");
    }

    #[test]
    fn test_rating_must_be_a_number() {
        let json = r#"{
            "companyName": "X", "companyInitials": "X", "sector": "X",
            "testimonialText": "X", "authorName": "X", "authorTitle": "X",
            "rating": "five", "bgColor": "blue"
        }"#;
        assert!(serde_json::from_str::<Testimonial>(json).is_err());
    }
}
