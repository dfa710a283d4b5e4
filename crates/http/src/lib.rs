//! Panel HTTP module providing the API client used by the frontend
//!
//! All requests go to a single backend origin. Failures are logged and handed
//! back to the caller untouched.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, DEFAULT_BASE_URL, error::ClientError};
pub use reqwest::Method;
