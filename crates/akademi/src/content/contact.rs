//! Contact information shown on the contact page.
//!
//! Unlike the other resources this is a single object, not a collection.

use serde::{Deserialize, Serialize};

/// Opening hours, one label per group of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Monday to Friday.
    pub weekdays: String,
    /// Saturday.
    pub saturday: String,
    /// Sunday.
    pub sunday: String,
}

/// Business contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Short address line.
    pub address: String,
    /// Additional address details.
    pub address_detail: String,
    /// Phone number.
    pub phone: String,
    /// When the phone line is staffed.
    pub phone_hours: String,
    /// Contact email address.
    pub email: String,
    /// Expected email response time.
    pub email_response: String,
    /// Office opening hours.
    pub working_hours: WorkingHours,
    /// WhatsApp click-to-chat link.
    pub whatsapp: String,
}

impl ContactInfo {
    /// Name of the backing file inside the data directory.
    pub const FILE_NAME: &'static str = "contact.json";
}
