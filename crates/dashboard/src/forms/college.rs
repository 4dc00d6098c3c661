use eduadmin_client::http::ApiClient;
use eduadmin_client::models::college::{College, CollegeCourse, CollegePayload};
use eduadmin_client::models::ActiveStatus;
use eduadmin_client::services::Resource;
use eduadmin_core::nested::{BlankRow, Repeatable};
use eduadmin_core::validation::{
    check_number, check_url, parse_number, require_text, FieldErrors, NumberRule,
};

use super::{optional, FormSchema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollegeCourseDraft {
    pub name: String,
    pub duration: String,
    pub fees: String,
}

impl BlankRow for CollegeCourseDraft {
    fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollegeDraft {
    pub name: String,
    pub location: String,
    pub country: String,
    pub website: String,
    pub logo: String,
    pub description: String,
    pub ranking: String,
    pub courses: Repeatable<CollegeCourseDraft>,
    pub status: ActiveStatus,
}

pub struct CollegeForm;

impl FormSchema for CollegeForm {
    type Record = College;
    type Draft = CollegeDraft;
    type Payload = CollegePayload;

    const ENTITY: &'static str = "College";

    fn resource(client: &ApiClient) -> Resource<College> {
        client.colleges()
    }

    fn validate(draft: &CollegeDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "name", "Name", &draft.name);
        check_url(&mut errors, "website", "Website", &draft.website, false);
        check_url(&mut errors, "logo", "Logo", &draft.logo, false);
        check_number(
            &mut errors,
            "ranking",
            "Ranking",
            &draft.ranking,
            NumberRule::optional().min(1.0),
        );
        for (i, course) in draft.courses.rows().iter().enumerate() {
            if course.is_blank() {
                continue;
            }
            check_number(
                &mut errors,
                &format!("courses.{i}.fees"),
                "Fees",
                &course.fees,
                NumberRule::optional().min(0.0),
            );
        }
        errors
    }

    fn to_payload(draft: &CollegeDraft) -> CollegePayload {
        CollegePayload {
            name: draft.name.trim().to_string(),
            location: optional(&draft.location),
            country: optional(&draft.country),
            website: optional(&draft.website),
            logo: optional(&draft.logo),
            description: optional(&draft.description),
            ranking: parse_number(&draft.ranking).map(|r| r as i64),
            courses: draft
                .courses
                .filled()
                .into_iter()
                .map(|c| CollegeCourse {
                    name: c.name.trim().to_string(),
                    duration: c.duration.trim().to_string(),
                    fees: parse_number(&c.fees),
                })
                .collect(),
            status: draft.status,
        }
    }

    fn from_record(c: &College) -> CollegeDraft {
        CollegeDraft {
            name: c.name.clone(),
            location: c.location.clone().unwrap_or_default(),
            country: c.country.clone().unwrap_or_default(),
            website: c.website.clone().unwrap_or_default(),
            logo: c.logo.clone().unwrap_or_default(),
            description: c.description.clone().unwrap_or_default(),
            ranking: c.ranking.map(|r| r.to_string()).unwrap_or_default(),
            courses: c
                .courses
                .iter()
                .map(|course| CollegeCourseDraft {
                    name: course.name.clone(),
                    duration: course.duration.clone(),
                    fees: course.fees.map(|f| f.to_string()).unwrap_or_default(),
                })
                .collect::<Vec<_>>()
                .into(),
            status: c.status,
        }
    }
}
