//! Read-only projections of records for view pages: dates localized,
//! prices with the "Free" fallback, nested arrays as badges or lists.

use serde_json::Value;

use eduadmin_client::models::blog::Blog;
use eduadmin_client::models::booking::TrainerBooking;
use eduadmin_client::models::college::College;
use eduadmin_client::models::course::Course;
use eduadmin_client::models::faq::Faq;
use eduadmin_client::models::lead::Lead;
use eduadmin_client::models::refer_partner::ReferPartner;
use eduadmin_client::models::study_abroad::StudyAbroad;
use eduadmin_client::models::testimonial::Testimonial;
use eduadmin_client::models::trainer::Trainer;
use eduadmin_client::models::user::User;
use eduadmin_client::models::video::Video;
use eduadmin_core::format::{
    format_amount, format_optional_date, format_price, format_time_range, EMPTY_PLACEHOLDER,
};
use eduadmin_core::types::Timestamp;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Text(String),
    Date(String),
    Price(String),
    Badges(Vec<String>),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: DetailValue,
}

impl DetailField {
    pub fn text(label: &'static str, value: Option<&str>) -> Self {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(EMPTY_PLACEHOLDER);
        Self {
            label,
            value: DetailValue::Text(value.to_string()),
        }
    }

    pub fn number(label: &'static str, value: Option<f64>) -> Self {
        Self::text(label, value.map(|v| v.to_string()).as_deref())
    }

    pub fn date(label: &'static str, value: Option<&Timestamp>) -> Self {
        Self {
            label,
            value: DetailValue::Date(format_optional_date(value)),
        }
    }

    pub fn price(label: &'static str, value: Option<&Value>) -> Self {
        Self {
            label,
            value: DetailValue::Price(format_price(value)),
        }
    }

    pub fn badges(label: &'static str, values: &[String]) -> Self {
        Self {
            label,
            value: DetailValue::Badges(values.to_vec()),
        }
    }

    pub fn list(label: &'static str, values: Vec<String>) -> Self {
        Self {
            label,
            value: DetailValue::List(values),
        }
    }

    /// Plain rendering used by logs and the binary.
    pub fn display(&self) -> String {
        match &self.value {
            DetailValue::Text(v) | DetailValue::Date(v) | DetailValue::Price(v) => v.clone(),
            DetailValue::Badges(v) | DetailValue::List(v) if v.is_empty() => {
                EMPTY_PLACEHOLDER.to_string()
            }
            DetailValue::Badges(v) | DetailValue::List(v) => v.join(", "),
        }
    }
}

/// A record that a view page can render.
pub trait Detail {
    /// Page heading.
    fn heading(&self) -> String;

    fn fields(&self) -> Vec<DetailField>;

    fn field(&self, label: &str) -> Option<DetailField> {
        self.fields().into_iter().find(|f| f.label == label)
    }
}

impl Detail for Course {
    fn heading(&self) -> String {
        self.title.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Slug", Some(self.slug.as_str())),
            DetailField::text("Category", self.category.as_deref()),
            DetailField::text("Level", self.level.as_deref()),
            DetailField::text("Duration", self.duration.as_deref()),
            DetailField::price("Price", self.price.as_ref()),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::badges("Tags", &self.tags),
            DetailField::list(
                "Curriculum",
                self.curriculum.iter().map(|m| m.module_title.clone()).collect(),
            ),
            DetailField::list(
                "Mentors",
                self.mentors.iter().map(|m| m.name.clone()).collect(),
            ),
            DetailField::list(
                "Training options",
                self.training_options
                    .iter()
                    .map(|o| format!("{} ({})", o.title, format_price(o.price.as_ref())))
                    .collect(),
            ),
            DetailField::list("FAQs", self.faqs.iter().map(|f| f.question.clone()).collect()),
            DetailField::date("Created", self.created_at.as_ref()),
            DetailField::date("Updated", self.updated_at.as_ref()),
        ]
    }
}

impl Detail for Video {
    fn heading(&self) -> String {
        self.title.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Video URL", Some(self.video_url.as_str())),
            DetailField::text("Category", self.category.as_deref()),
            DetailField::text("Duration", self.duration.as_deref()),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::badges("Tags", &self.tags),
            DetailField::date("Created", self.created_at.as_ref()),
        ]
    }
}

impl Detail for Faq {
    fn heading(&self) -> String {
        self.question.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Answer", Some(self.answer.as_str())),
            DetailField::text("Category", self.category.as_deref()),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::date("Created", self.created_at.as_ref()),
        ]
    }
}

impl Detail for Testimonial {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Designation", self.designation.as_deref()),
            DetailField::text("Company", self.company.as_deref()),
            DetailField::text("Content", Some(self.content.as_str())),
            DetailField::number("Rating", self.rating),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::date("Created", self.created_at.as_ref()),
        ]
    }
}

impl Detail for ReferPartner {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Contact person", self.contact_person.as_deref()),
            DetailField::text("Email", self.email.as_deref()),
            DetailField::text("Phone", self.phone.as_deref()),
            DetailField::text("Website", self.website.as_deref()),
            DetailField::text(
                "Commission",
                self.commission_rate.map(|r| format!("{r}%")).as_deref(),
            ),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::date("Created", self.created_at.as_ref()),
        ]
    }
}

impl Detail for Blog {
    fn heading(&self) -> String {
        self.title.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Slug", Some(self.slug.as_str())),
            DetailField::text("Author", self.author.as_deref()),
            DetailField::text("Category", self.category.as_deref()),
            DetailField::text("Excerpt", self.excerpt.as_deref()),
            DetailField::badges("Tags", &self.tags),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::date("Published", self.published_at.as_ref()),
        ]
    }
}

impl Detail for StudyAbroad {
    fn heading(&self) -> String {
        self.title.clone().unwrap_or_else(|| self.country.clone())
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Country", Some(self.country.as_str())),
            DetailField::text("Description", self.description.as_deref()),
            DetailField::list("Universities", self.universities.clone()),
            DetailField::list("Requirements", self.requirements.clone()),
            DetailField::text("Status", Some(self.status.as_str())),
        ]
    }
}

impl Detail for College {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Location", self.location.as_deref()),
            DetailField::text("Country", self.country.as_deref()),
            DetailField::text("Website", self.website.as_deref()),
            DetailField::text("Ranking", self.ranking.map(|r| r.to_string()).as_deref()),
            DetailField::list(
                "Courses",
                self.courses
                    .iter()
                    .map(|c| match c.fees {
                        Some(fees) if fees > 0.0 => format!("{} ({})", c.name, format_amount(fees)),
                        _ => c.name.clone(),
                    })
                    .collect(),
            ),
            DetailField::text("Status", Some(self.status.as_str())),
        ]
    }
}

impl Detail for Trainer {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Email", Some(self.email.as_str())),
            DetailField::text("Phone", self.phone.as_deref()),
            DetailField::text("Location", self.location.as_deref()),
            DetailField::text("Status", Some(self.status.label())),
            DetailField::badges("Specializations", &self.specializations),
            DetailField::badges(
                "Training modes",
                &self
                    .training_modes
                    .iter()
                    .map(|m| m.label().to_string())
                    .collect::<Vec<_>>(),
            ),
            DetailField::badges("Languages", &self.languages),
            DetailField::text(
                "Hourly rate",
                self.hourly_rate.map(format_amount).as_deref(),
            ),
            DetailField::number("Experience (years)", self.experience_years),
            DetailField::number("Rating", self.rating),
            DetailField::text("Bio", self.bio.as_deref()),
        ]
    }
}

impl Detail for TrainerBooking {
    fn heading(&self) -> String {
        self.title.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Trainer", Some(self.trainer_name())),
            DetailField::text(
                "When",
                Some(format_time_range(&self.start_time, &self.end_time).as_str()),
            ),
            DetailField::text("Status", Some(self.status.label())),
            DetailField::text("Description", self.description.as_deref()),
        ]
    }
}

impl Detail for Lead {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Email", self.email.as_deref()),
            DetailField::text("Phone", self.phone.as_deref()),
            DetailField::text("Interested in", self.course_interest.as_deref()),
            DetailField::text("Source", self.source.as_deref()),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::text("Notes", self.notes.as_deref()),
            DetailField::date("Created", self.created_at.as_ref()),
        ]
    }
}

impl Detail for User {
    fn heading(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("Email", Some(self.email.as_str())),
            DetailField::text("Role", Some(self.role.as_str())),
            DetailField::text("Status", Some(self.status.as_str())),
            DetailField::date("Last login", self.last_login_at.as_ref()),
        ]
    }
}
