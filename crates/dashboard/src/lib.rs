//! View-models for the education admin dashboard.
//!
//! Every screen is a plain struct driven by async methods: it owns its draft
//! and loading flags, talks to the backend through
//! [`eduadmin_client::ApiClient`], and reports through the shared
//! [`context::PageContext`] (toasts, navigation, confirmation prompts).
//! [`app::App`] wires everything together once at startup.

pub mod app;
pub mod booking;
pub mod context;
pub mod forms;
pub mod pages;
pub mod shell;
