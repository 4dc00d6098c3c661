use serde::{Deserialize, Serialize};
use serde_json::Value;

use eduadmin_core::types::Timestamp;

use super::ContentStatus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurriculumModule {
    pub module_title: String,
    pub module_description: String,
    pub topics: Vec<String>,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mentor {
    pub name: String,
    pub designation: String,
    pub company: String,
    pub image: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseFaq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseTestimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrainingOption {
    pub title: String,
    pub description: String,
    /// Number or numeric string; absent means free.
    pub price: Option<Value>,
}

/// A course as returned by `/courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub curriculum: Vec<CurriculumModule>,
    #[serde(default)]
    pub mentors: Vec<Mentor>,
    #[serde(default)]
    pub faqs: Vec<CourseFaq>,
    #[serde(default)]
    pub testimonials: Vec<CourseTestimonial>,
    #[serde(default)]
    pub training_options: Vec<TrainingOption>,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Create/update body for a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub tags: Vec<String>,
    pub curriculum: Vec<CurriculumModule>,
    pub mentors: Vec<Mentor>,
    pub faqs: Vec<CourseFaq>,
    pub testimonials: Vec<CourseTestimonial>,
    pub training_options: Vec<TrainingOption>,
    pub status: ContentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_decodes_with_nested_sections() {
        let course: Course = serde_json::from_value(json!({
            "_id": "c1",
            "title": "Rust Basics",
            "slug": "rust-basics",
            "price": "499",
            "curriculum": [{"moduleTitle": "Ownership", "topics": ["moves"]}],
            "trainingOptions": [{"title": "Weekend"}],
            "status": "published"
        }))
        .unwrap();
        assert_eq!(course.curriculum[0].module_title, "Ownership");
        assert_eq!(course.curriculum[0].duration, "");
        assert_eq!(course.training_options[0].price, None);
        assert_eq!(course.status, ContentStatus::Published);
    }
}
