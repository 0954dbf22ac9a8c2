//! Contact form controller.
//!
//! The form owns the typed values, the last validation result and the
//! submission lifecycle. A submit moves it from [`Lifecycle::Idle`] to
//! [`Lifecycle::Submitting`] only when every field passes the schema; the
//! handler's completion brings it back to idle with a one-time [`Notice`].

use strum::VariantArray;

use crate::{ContactFields, ContactSubmission, Field, FieldErrors, SubmissionError};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Submitting,
}

/// Feedback shown once after a submission resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed(SubmissionError),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Sent => SENT_MESSAGE.to_owned(),
            Notice::Failed(err) => {
                format!("Your message could not be sent: {err}. Please try again.")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A submission is already in flight.
    Ignored,
    Rejected(FieldErrors),
    Accepted(ContactSubmission),
}

/// Render state of one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInput<'a> {
    pub field: Field,
    pub label: &'static str,
    pub required: bool,
    pub input_type: &'static str,
    pub value: &'a str,
    pub error: Option<&'static str>,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    lifecycle: Lifecycle,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_submitting(&self) -> bool {
        self.lifecycle == Lifecycle::Submitting
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.lifecycle {
            Lifecycle::Idle => SUBMIT_LABEL,
            Lifecycle::Submitting => SUBMITTING_LABEL,
        }
    }

    /// Label the client swaps in while a request is pending.
    pub fn busy_label(&self) -> &'static str {
        SUBMITTING_LABEL
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn error_message(&self, field: Field) -> Option<&'static str> {
        self.errors.message(field)
    }

    /// Every input in schema order, with its current value and error.
    pub fn inputs(&self) -> Vec<FieldInput<'_>> {
        Field::VARIANTS
            .iter()
            .map(|&field| FieldInput {
                field,
                label: field.label(),
                required: field.is_required(),
                input_type: field.input_type(),
                value: self.value(field),
                error: self.error_message(field),
            })
            .collect()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitting() {
            return;
        }

        self.fields.set(field, value);
        self.errors.remove(field);
    }

    pub fn validate(&self) -> FieldErrors {
        self.fields.check()
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return SubmitAttempt::Ignored;
        }

        self.notice = None;

        match self.fields.clone().into_submission() {
            Ok(submission) => {
                self.errors.clear();
                self.lifecycle = Lifecycle::Submitting;
                SubmitAttempt::Accepted(submission)
            }
            Err(err) => {
                let errors = err.validation().map(FieldErrors::from).unwrap_or_default();
                tracing::debug!(fields = ?errors.fields(), "Contact form rejected");
                self.errors = errors.clone();
                SubmitAttempt::Rejected(errors)
            }
        }
    }

    /// Applies the handler's outcome. Returns `false` when nothing was in flight.
    pub fn resolve(&mut self, outcome: Result<(), SubmissionError>) -> bool {
        if !self.is_submitting() {
            tracing::debug!("Completion ignored, no submission in flight");
            return false;
        }

        self.lifecycle = Lifecycle::Idle;
        self.notice = Some(match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                Notice::Sent
            }
            Err(err) => Notice::Failed(err),
        });

        true
    }
}
