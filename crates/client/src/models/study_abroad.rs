use serde::{Deserialize, Serialize};

use eduadmin_core::types::Timestamp;

use super::ContentStatus;

/// A study-abroad destination page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyAbroad {
    #[serde(alias = "_id")]
    pub id: String,
    pub country: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub universities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
