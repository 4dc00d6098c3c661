//! Course form: the largest draft, with six repeatable sections.

use serde_json::Value;

use eduadmin_client::http::ApiClient;
use eduadmin_client::models::course::{
    Course, CourseFaq, CoursePayload, CourseTestimonial, CurriculumModule, Mentor, TrainingOption,
};
use eduadmin_client::models::ContentStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::nested::{BlankRow, Repeatable};
use eduadmin_core::slug::generate_slug;
use eduadmin_core::validation::{
    check_number, check_url, parse_number, require_text, FieldErrors, NumberRule,
};

use super::{check_slug, filled_strings, optional, split_list, FormSchema};

// ---------------------------------------------------------------------------
// Nested rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleDraft {
    pub module_title: String,
    pub module_description: String,
    /// Comma separated.
    pub topics: String,
    pub duration: String,
}

impl BlankRow for ModuleDraft {
    fn is_blank(&self) -> bool {
        self.module_title.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorDraft {
    pub name: String,
    pub designation: String,
    pub company: String,
    pub image: String,
    pub linkedin: String,
}

impl BlankRow for MentorDraft {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

impl BlankRow for FaqDraft {
    fn is_blank(&self) -> bool {
        self.question.trim().is_empty() || self.answer.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialDraft {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: String,
}

impl BlankRow for TestimonialDraft {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.content.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingOptionDraft {
    pub title: String,
    pub description: String,
    pub price: String,
}

impl BlankRow for TrainingOptionDraft {
    fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub price: String,
    pub thumbnail: String,
    pub tags: Repeatable<String>,
    pub curriculum: Repeatable<ModuleDraft>,
    pub mentors: Repeatable<MentorDraft>,
    pub faqs: Repeatable<FaqDraft>,
    pub testimonials: Repeatable<TestimonialDraft>,
    pub training_options: Repeatable<TrainingOptionDraft>,
    pub status: ContentStatus,
}

pub struct CourseForm;

impl FormSchema for CourseForm {
    type Record = Course;
    type Draft = CourseDraft;
    type Payload = CoursePayload;

    const ENTITY: &'static str = "Course";

    fn resource(client: &ApiClient) -> Resource<Course> {
        client.courses()
    }

    fn validate(draft: &CourseDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "Title", &draft.title);
        check_slug(&mut errors, &draft.slug);
        check_number(
            &mut errors,
            "price",
            "Price",
            &draft.price,
            NumberRule::optional().min(0.0),
        );
        check_url(&mut errors, "thumbnail", "Thumbnail", &draft.thumbnail, false);

        for (i, mentor) in draft.mentors.rows().iter().enumerate() {
            if mentor.is_blank() {
                continue;
            }
            check_url(&mut errors, &format!("mentors.{i}.image"), "Image", &mentor.image, false);
            check_url(
                &mut errors,
                &format!("mentors.{i}.linkedin"),
                "LinkedIn",
                &mentor.linkedin,
                false,
            );
        }
        for (i, testimonial) in draft.testimonials.rows().iter().enumerate() {
            if testimonial.is_blank() {
                continue;
            }
            check_number(
                &mut errors,
                &format!("testimonials.{i}.rating"),
                "Rating",
                &testimonial.rating,
                NumberRule::optional().min(0.0).max(5.0),
            );
        }
        for (i, option) in draft.training_options.rows().iter().enumerate() {
            if option.is_blank() {
                continue;
            }
            check_number(
                &mut errors,
                &format!("trainingOptions.{i}.price"),
                "Price",
                &option.price,
                NumberRule::optional().min(0.0),
            );
        }
        errors
    }

    fn to_payload(draft: &CourseDraft) -> CoursePayload {
        CoursePayload {
            title: draft.title.trim().to_string(),
            slug: draft.slug.trim().to_string(),
            short_description: optional(&draft.short_description),
            description: optional(&draft.description),
            category: optional(&draft.category),
            level: optional(&draft.level),
            duration: optional(&draft.duration),
            price: Some(parse_number(&draft.price).unwrap_or(0.0)),
            thumbnail: optional(&draft.thumbnail),
            tags: filled_strings(&draft.tags),
            curriculum: draft
                .curriculum
                .filled()
                .into_iter()
                .map(|m| CurriculumModule {
                    module_title: m.module_title.trim().to_string(),
                    module_description: m.module_description.trim().to_string(),
                    topics: split_list(&m.topics),
                    duration: m.duration.trim().to_string(),
                })
                .collect(),
            mentors: draft
                .mentors
                .filled()
                .into_iter()
                .map(|m| Mentor {
                    name: m.name.trim().to_string(),
                    designation: m.designation.trim().to_string(),
                    company: m.company.trim().to_string(),
                    image: m.image.trim().to_string(),
                    linkedin: m.linkedin.trim().to_string(),
                })
                .collect(),
            faqs: draft
                .faqs
                .filled()
                .into_iter()
                .map(|f| CourseFaq {
                    question: f.question.trim().to_string(),
                    answer: f.answer.trim().to_string(),
                })
                .collect(),
            testimonials: draft
                .testimonials
                .filled()
                .into_iter()
                .map(|t| CourseTestimonial {
                    name: t.name.trim().to_string(),
                    role: t.role.trim().to_string(),
                    content: t.content.trim().to_string(),
                    rating: parse_number(&t.rating),
                })
                .collect(),
            training_options: draft
                .training_options
                .filled()
                .into_iter()
                .map(|o| TrainingOption {
                    title: o.title.trim().to_string(),
                    description: o.description.trim().to_string(),
                    price: parse_number(&o.price).map(Value::from),
                })
                .collect(),
            status: draft.status,
        }
    }

    fn from_record(course: &Course) -> CourseDraft {
        CourseDraft {
            title: course.title.clone(),
            slug: course.slug.clone(),
            short_description: course.short_description.clone().unwrap_or_default(),
            description: course.description.clone().unwrap_or_default(),
            category: course.category.clone().unwrap_or_default(),
            level: course.level.clone().unwrap_or_default(),
            duration: course.duration.clone().unwrap_or_default(),
            price: price_text(course.price.as_ref()),
            thumbnail: course.thumbnail.clone().unwrap_or_default(),
            tags: Repeatable::from_rows(course.tags.clone()),
            curriculum: course
                .curriculum
                .iter()
                .map(|m| ModuleDraft {
                    module_title: m.module_title.clone(),
                    module_description: m.module_description.clone(),
                    topics: m.topics.join(", "),
                    duration: m.duration.clone(),
                })
                .collect::<Vec<_>>()
                .into(),
            mentors: course
                .mentors
                .iter()
                .map(|m| MentorDraft {
                    name: m.name.clone(),
                    designation: m.designation.clone(),
                    company: m.company.clone(),
                    image: m.image.clone(),
                    linkedin: m.linkedin.clone(),
                })
                .collect::<Vec<_>>()
                .into(),
            faqs: course
                .faqs
                .iter()
                .map(|f| FaqDraft {
                    question: f.question.clone(),
                    answer: f.answer.clone(),
                })
                .collect::<Vec<_>>()
                .into(),
            testimonials: course
                .testimonials
                .iter()
                .map(|t| TestimonialDraft {
                    name: t.name.clone(),
                    role: t.role.clone(),
                    content: t.content.clone(),
                    rating: t.rating.map(|r| r.to_string()).unwrap_or_default(),
                })
                .collect::<Vec<_>>()
                .into(),
            training_options: course
                .training_options
                .iter()
                .map(|o| TrainingOptionDraft {
                    title: o.title.clone(),
                    description: o.description.clone(),
                    price: price_text(o.price.as_ref()),
                })
                .collect::<Vec<_>>()
                .into(),
            status: course.status,
        }
    }

    fn after_edit(draft: &mut CourseDraft, field: &str) {
        if field == "title" {
            draft.slug = generate_slug(&draft.title);
        }
    }
}

/// Text for a price input from a number or numeric string.
fn price_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_modules(titles: &[&str]) -> CourseDraft {
        let mut draft = CourseDraft {
            title: "Rust".into(),
            slug: "rust".into(),
            ..CourseDraft::default()
        };
        for title in titles {
            let i = draft.curriculum.add();
            draft
                .curriculum
                .update(i, |m| m.module_title = title.to_string());
        }
        draft
    }

    #[test]
    fn blank_modules_are_dropped() {
        let payload = CourseForm::to_payload(&draft_with_modules(&["Ownership", "", "Traits"]));
        let titles: Vec<_> = payload.curriculum.iter().map(|m| m.module_title.as_str()).collect();
        assert_eq!(titles, vec!["Ownership", "Traits"]);
    }

    #[test]
    fn blank_price_defaults_to_zero() {
        let payload = CourseForm::to_payload(&draft_with_modules(&[]));
        assert_eq!(payload.price, Some(0.0));
    }

    #[test]
    fn validation_classes() {
        let mut draft = draft_with_modules(&[]);
        draft.title.clear();
        draft.price = "-1".into();
        draft.thumbnail = "not a url".into();
        let i = draft.testimonials.add();
        draft.testimonials.update(i, |t| {
            t.name = "Asha".into();
            t.content = "Great".into();
            t.rating = "7".into();
        });

        let errors = CourseForm::validate(&draft);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("price"), Some("Price must be at least 0"));
        assert_eq!(errors.get("thumbnail"), Some("Thumbnail must be a valid URL"));
        assert_eq!(errors.get("testimonials.0.rating"), Some("Rating must be between 0 and 5"));
    }

    #[test]
    fn title_derives_slug() {
        let mut draft = CourseDraft {
            title: "Intro to AI & ML!!".into(),
            ..CourseDraft::default()
        };
        CourseForm::after_edit(&mut draft, "title");
        assert_eq!(draft.slug, "intro-to-ai-ml");
        draft.slug = "custom".into();
        CourseForm::after_edit(&mut draft, "slug");
        assert_eq!(draft.slug, "custom");
    }
}
