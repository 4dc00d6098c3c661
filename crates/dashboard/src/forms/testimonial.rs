use eduadmin_client::http::ApiClient;
use eduadmin_client::models::testimonial::{Testimonial, TestimonialPayload};
use eduadmin_client::models::ActiveStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::validation::{
    check_number, check_url, parse_number, require_text, FieldErrors, NumberRule,
};

use super::{optional, FormSchema};

/// Rating used when the field is left blank.
pub const DEFAULT_RATING: f64 = 5.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialDraft {
    pub name: String,
    pub designation: String,
    pub company: String,
    pub content: String,
    pub rating: String,
    pub image: String,
    pub course: String,
    pub status: ActiveStatus,
}

pub struct TestimonialForm;

impl FormSchema for TestimonialForm {
    type Record = Testimonial;
    type Draft = TestimonialDraft;
    type Payload = TestimonialPayload;

    const ENTITY: &'static str = "Testimonial";

    fn resource(client: &ApiClient) -> Resource<Testimonial> {
        client.testimonials()
    }

    fn validate(draft: &TestimonialDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Name", &draft.name);
        require_text(&mut errors, "content", "Content", &draft.content);
        check_number(
            &mut errors,
            "rating",
            "Rating",
            &draft.rating,
            NumberRule::optional().min(0.0).max(5.0),
        );
        check_url(&mut errors, "image", "Image", &draft.image, false);
        errors
    }

    fn to_payload(draft: &TestimonialDraft) -> TestimonialPayload {
        TestimonialPayload {
            name: draft.name.trim().to_string(),
            designation: optional(&draft.designation),
            company: optional(&draft.company),
            content: draft.content.trim().to_string(),
            rating: parse_number(&draft.rating).unwrap_or(DEFAULT_RATING),
            image: optional(&draft.image),
            course: optional(&draft.course),
            status: draft.status,
        }
    }

    fn from_record(t: &Testimonial) -> TestimonialDraft {
        TestimonialDraft {
            name: t.name.clone(),
            designation: t.designation.clone().unwrap_or_default(),
            company: t.company.clone().unwrap_or_default(),
            content: t.content.clone(),
            rating: t.rating.map(|r| r.to_string()).unwrap_or_default(),
            image: t.image.clone().unwrap_or_default(),
            course: t.course.clone().unwrap_or_default(),
            status: t.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        let mut draft = TestimonialDraft {
            name: "Asha".into(),
            content: "Loved it".into(),
            rating: "5.5".into(),
            ..TestimonialDraft::default()
        };
        assert_eq!(
            TestimonialForm::validate(&draft).get("rating"),
            Some("Rating must be between 0 and 5")
        );
        draft.rating = "4.5".into();
        assert!(TestimonialForm::validate(&draft).is_empty());
        assert_eq!(TestimonialForm::to_payload(&draft).rating, 4.5);
    }

    #[test]
    fn blank_rating_defaults() {
        let draft = TestimonialDraft {
            name: "Asha".into(),
            content: "Loved it".into(),
            ..TestimonialDraft::default()
        };
        assert_eq!(TestimonialForm::to_payload(&draft).rating, DEFAULT_RATING);
    }
}
