//! Authentication endpoints

use super::{ApiClient, error::ClientError};
use crate::types::{AttemptResponse, Credentials};
use reqwest::Method;

/// Path of the credential exchange endpoint
pub const ATTEMPT_PATH: &str = "/api/auth/attempt";

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn attempt(&self, credentials: &Credentials) -> Result<AttemptResponse, ClientError> {
        let payload = serde_json::to_string(credentials)?;
        self.call(Method::POST, ATTEMPT_PATH, Some(payload)).await
    }
}
