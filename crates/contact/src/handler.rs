//! Delivery seam for validated contact requests.

use std::time::Duration;

use async_trait::async_trait;

use crate::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("the delivery service is unavailable")]
    Unavailable,

    #[error("the delivery service rejected the message: {0}")]
    Rejected(String),

    #[error("the delivery service did not answer in time")]
    Timeout,
}

/// Delivers a contact request somewhere a human will read it.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError>;
}

/// Stand-in delivery: waits a fixed interval then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedHandler {
    delay: Duration,
}

impl SimulatedHandler {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedHandler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionHandler for SimulatedHandler {
    #[tracing::instrument(skip_all, fields(email = %submission.email))]
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            name = %submission.name,
            company = submission.company.as_deref().unwrap_or_default(),
            message_len = submission.message.chars().count(),
            "Contact form submitted"
        );

        Ok(())
    }
}

/// Always fails with the configured error once its delay has elapsed.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    delay: Duration,
    error: SubmissionError,
}

impl FailingHandler {
    pub fn new(error: SubmissionError) -> Self {
        Self {
            delay: Duration::ZERO,
            error,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl SubmissionHandler for FailingHandler {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;

        tracing::warn!(email = %submission.email, error = %self.error, "Contact delivery failed");

        Err(self.error.clone())
    }
}
