use std::time::Duration;

/// Env var naming the URL submissions are POSTed to.
pub const ENDPOINT_VAR: &str = "CONTACT_ENDPOINT";
/// Env var bounding the outbound request, in whole seconds.
pub const TIMEOUT_VAR: &str = "CONTACT_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment-supplied settings for the submission endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    /// Target URL for the JSON POST. Empty when the deployment has not set
    /// one; submitting then fails as a normal transport error.
    pub endpoint: String,
    /// Upper bound on one submission request.
    pub timeout: Duration,
}

impl ContactConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_VAR).unwrap_or_default();
        let timeout_secs: u64 = std::env::var(TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
