use shared_types::{ContactForm, SubmitError};

use crate::config::ContactConfig;

/// Delivers submissions to the configured endpoint.
///
/// One fire-and-forget JSON POST per submission: no retry and no response
/// schema — the body is only logged. The request is bounded by the
/// configured timeout so a hung endpoint resolves as a failure instead of
/// pinning the form in its submitting state.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: std::time::Duration,
}

impl SubmitClient {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        }
    }

    /// Deliver one submission. Any failure to obtain a 2xx response is a
    /// [`SubmitError`].
    pub async fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let request = self.http.post(&self.endpoint).json(form);

        // RequestBuilder::timeout does not exist on wasm; the browser's
        // fetch imposes its own bound there.
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        match response.text().await {
            Ok(body) => tracing::debug!(%status, body = %body, "submission delivered"),
            Err(e) => tracing::debug!(%status, error = %e, "submission delivered, body unread"),
        }
        Ok(())
    }
}
