//! Generic list and view pages shared by every CRUD section.

pub mod confirm;
pub mod detail;
pub mod list;
pub mod scope;
pub mod view;

use eduadmin_client::models::{
    blog::Blog, booking::TrainerBooking, college::College, course::Course, faq::Faq, lead::Lead,
    refer_partner::ReferPartner, study_abroad::StudyAbroad, testimonial::Testimonial,
    trainer::Trainer, user::User, video::Video,
};

/// A record with a backend id.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(
    Blog,
    TrainerBooking,
    College,
    Course,
    Faq,
    Lead,
    ReferPartner,
    StudyAbroad,
    Testimonial,
    Trainer,
    User,
    Video,
);
