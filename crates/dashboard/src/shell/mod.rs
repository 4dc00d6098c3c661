//! Application shell: route table and guards, toasts, and the global error
//! handler.

pub mod error_handler;
pub mod routes;
pub mod toast;
