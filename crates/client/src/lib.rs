//! HTTP client layer and resource services for the education admin API.
//!
//! [`http::ApiClient`] attaches the bearer token, adds the GET cache buster,
//! retries once after a 429 and ends the session on a 401. The
//! [`services`] module maps each backend resource onto typed CRUD calls that
//! return decoded envelopes.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod models;
pub mod navigation;
pub mod services;
pub mod session;
pub mod storage;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::ApiError;
pub use http::ApiClient;
