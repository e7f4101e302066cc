use serde::{Deserialize, Serialize};
use validator::Validate;

/// A client's request to schedule a hiring consultation call. Deserialized
/// from the create endpoint's body and, once validated, stored verbatim as
/// the document body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Booking {
    #[validate(length(min = 2))]
    pub full_name: String,
    #[validate(length(min = 2))]
    pub company: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 2))]
    pub role_title: String,
    pub hiring_need: HiringNeed,
    #[validate(range(min = 1, max = 1000))]
    pub candidates_needed: Option<i32>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub timezone: Option<String>,
    #[validate(length(max = 2000))]
    pub message: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HiringNeed {
    #[serde(rename = "Single hire")]
    SingleHire,
    #[serde(rename = "Multiple hires")]
    MultipleHires,
    #[serde(rename = "Ongoing hiring")]
    OngoingHiring,
    #[serde(rename = "Exploratory call")]
    ExploratoryCall,
}

impl HiringNeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            HiringNeed::SingleHire => "Single hire",
            HiringNeed::MultipleHires => "Multiple hires",
            HiringNeed::OngoingHiring => "Ongoing hiring",
            HiringNeed::ExploratoryCall => "Exploratory call",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    New,
    Contacted,
    Scheduled,
    Closed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::Contacted => "contacted",
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Closed => "closed",
        }
    }
}
