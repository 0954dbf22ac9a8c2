use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;

use crate::{ContactForm, SubmissionError, SubmissionHandler, SubmitAttempt};

/// Message sent by the delivery task once the handler returns.
#[derive(Debug)]
pub struct Completion(pub Result<(), SubmissionError>);

/// Runs a [`ContactForm`] against a [`SubmissionHandler`].
///
/// Accepted submissions are delivered on a spawned task which reports back
/// over a channel; the form only changes state when that message is applied.
/// The task owns the only sender, so a task that dies without reporting
/// closes the channel instead of leaving the form stuck in `Submitting`.
pub struct FormDriver {
    form: ContactForm,
    handler: Arc<dyn SubmissionHandler>,
    timeout: Option<Duration>,
    in_flight: Option<mpsc::Receiver<Completion>>,
}

impl FormDriver {
    pub fn new(handler: Arc<dyn SubmissionHandler>) -> Self {
        Self {
            form: ContactForm::new(),
            handler,
            timeout: None,
            in_flight: None,
        }
    }

    pub fn with_form(mut self, form: ContactForm) -> Self {
        self.form = form;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn into_form(self) -> ContactForm {
        self.form
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        let attempt = self.form.submit();

        if let SubmitAttempt::Accepted(submission) = &attempt {
            let submission = submission.clone();
            let handler = Arc::clone(&self.handler);
            let timeout = self.timeout;
            let (tx, rx) = mpsc::channel(1);
            self.in_flight = Some(rx);

            tokio::spawn(async move {
                let delivery = handler.submit(&submission);
                let outcome = match timeout {
                    Some(limit) => tokio::time::timeout(limit, delivery)
                        .await
                        .unwrap_or(Err(SubmissionError::Timeout)),
                    None => delivery.await,
                };

                if tx.send(Completion(outcome)).await.is_err() {
                    tracing::debug!("Contact form dropped before delivery completed");
                }
            });
        }

        attempt
    }

    /// Waits for the in-flight submission and applies its outcome.
    ///
    /// Returns `None` right away when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Result<(), SubmissionError>> {
        if !self.form.is_submitting() {
            return None;
        }

        let completion = match self.in_flight.take() {
            Some(mut rx) => rx.recv().await,
            None => None,
        };

        let outcome = match completion {
            Some(Completion(outcome)) => outcome,
            None => {
                tracing::error!("Contact delivery task ended without reporting an outcome");
                Err(SubmissionError::Unavailable)
            }
        };

        self.form.resolve(outcome.clone());

        Some(outcome)
    }

    pub async fn submit_and_wait(&mut self) -> SubmitAttempt {
        let attempt = self.submit();

        if matches!(attempt, SubmitAttempt::Accepted(_)) {
            self.next_completion().await;
        }

        attempt
    }
}
