use serde::{Deserialize, Serialize};

use eduadmin_core::types::Timestamp;

use super::ActiveStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub status: ActiveStatus,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub content: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub status: ActiveStatus,
}
