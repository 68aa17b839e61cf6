//! Contact submitter: the single outbound call the page makes.
//!
//! The controller only sees the `ContactSubmitter` trait, so the transport
//! can be swapped or faked without touching presentation code.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::contact::form::FormState;

/// Third-party function that forwards consultation requests by email.
pub const DEFAULT_CONTACT_ENDPOINT: &str =
    "https://functions.poehali.dev/500fe558-b65d-47b6-8a49-fb2684e11a67";

/// Any failure to deliver the form. The detail is for logs only; every
/// failure maps to the same user-facing notification.
#[derive(Debug, Error)]
#[error("submission failed: {detail}")]
pub struct SubmissionError {
    detail: String,
}

impl SubmissionError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        SubmissionError::new(format!("transport error: {e}"))
    }
}

impl From<StatusCode> for SubmissionError {
    fn from(status: StatusCode) -> Self {
        SubmissionError::new(format!("endpoint responded with {status}"))
    }
}

#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, form: &FormState) -> Result<(), SubmissionError>;
}

/// Posts the form as JSON to a fixed endpoint. Any 2xx is success and the
/// response body is ignored. No retries and no timeout beyond the client
/// default.
#[derive(Clone)]
pub struct HttpContactSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpContactSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ContactSubmitter for HttpContactSubmitter {
    async fn submit(&self, form: &FormState) -> Result<(), SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status.into());
        }

        debug!("Contact endpoint accepted submission ({status})");
        Ok(())
    }
}
