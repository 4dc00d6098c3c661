//! Domain logic shared by the education admin client and its view-models.
//!
//! This crate has no internal dependencies: it holds the rules the dashboard
//! applies before anything reaches the network (validation, slug derivation,
//! booking interval checks), the formatting used by read-only views, and the
//! state machines that drive forms, lists and the trainer booking screens.

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod datetime;
pub mod error;
pub mod form;
pub mod format;
pub mod nested;
pub mod pagination;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
