//! Wire records mirrored from the backend, plus the request bodies the
//! dashboard sends. Field names follow the backend's camelCase JSON.

use serde::{Deserialize, Serialize};

pub mod blog;
pub mod booking;
pub mod college;
pub mod course;
pub mod faq;
pub mod lead;
pub mod refer_partner;
pub mod study_abroad;
pub mod testimonial;
pub mod trainer;
pub mod user;
pub mod video;

/// Publication status of editorial content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 3] = [Self::Draft, Self::Published, Self::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// On/off status of simple records (FAQs, testimonials, partners, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

impl ActiveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_spellings() {
        assert_eq!(ContentStatus::parse("published"), Some(ContentStatus::Published));
        assert_eq!(ContentStatus::parse("Published"), None);
        assert_eq!(
            serde_json::to_value(ActiveStatus::Inactive).unwrap(),
            "inactive"
        );
    }
}
