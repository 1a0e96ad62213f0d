use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the success message stays up before the form clears itself.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Message => "Your Message",
        }
    }
}

/// What the visitor typed, as handed to a [`SubmissionSink`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required field is empty: {0:?}")]
    MissingField(Field),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Delivers a contact submission somewhere. There is no backend behind the
/// site, so the stock implementation only logs.
pub trait SubmissionSink: Send + Sync {
    fn report(&self, submission: &ContactSubmission) -> Result<(), SinkError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn report(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
        log::info!("Form submitted: {submission:?}");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Identifies the submission a scheduled reset belongs to. Only the ticket
/// from the latest submission can clear the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactFormController {
    fields: ContactSubmission,
    phase: FormPhase,
    generation: u64,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// Edits are accepted in either phase and never touch a pending reset.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Same rule as the `required` attribute: empty fails, whitespace passes.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.fields.get(*field).is_empty())
    }

    /// Reports the current values and shows the success state. The returned
    /// ticket must be passed to [`reset`](Self::reset) after [`RESET_DELAY`];
    /// any ticket handed out earlier is invalidated.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<ResetTicket, SubmitError> {
        if let Some(field) = self.missing_field() {
            return Err(SubmitError::MissingField(field));
        }
        sink.report(&self.fields)?;
        self.generation += 1;
        self.phase = FormPhase::Submitted;
        Ok(ResetTicket(self.generation))
    }

    /// Clears the fields and hides the success state, unless a newer submission
    /// has superseded `ticket`. Returns whether anything was reset.
    pub fn reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation || self.phase != FormPhase::Submitted {
            return false;
        }
        self.fields = ContactSubmission::default();
        self.phase = FormPhase::Editing;
        true
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        seen: Mutex<Vec<ContactSubmission>>,
    }

    impl SubmissionSink for RecordingSink {
        fn report(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
            self.seen
                .lock()
                .expect("should be able to lock sink")
                .push(submission.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn report(&self, _submission: &ContactSubmission) -> Result<(), SinkError> {
            Err(SinkError::Rejected("offline".to_string()))
        }
    }

    fn filled() -> ContactFormController {
        let mut form = ContactFormController::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "Hello");
        form
    }

    #[test]
    fn test_starts_empty_and_editing() {
        let form = ContactFormController::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.fields(), &ContactSubmission::default());
        assert_eq!(form.missing_field(), Some(Field::Name));
    }

    #[test]
    fn test_submit_then_reset() {
        let sink = RecordingSink::default();
        let mut form = filled();

        let ticket = form.submit(&sink).expect("filled form should submit");
        assert!(form.is_submitted());
        // values stay visible until the reset fires
        assert_eq!(form.field(Field::Name), "Ada");

        let seen = sink.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![ContactSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }]
        );
        drop(seen);

        assert!(form.reset(ticket));
        assert!(!form.is_submitted());
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let sink = RecordingSink::default();
        for field in Field::ALL {
            let mut form = filled();
            form.set_field(field, "");
            assert_eq!(form.submit(&sink), Err(SubmitError::MissingField(field)));
            assert_eq!(form.phase(), FormPhase::Editing);
        }
        assert!(sink.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled();
        form.set_field(Field::Message, "  ");
        assert_eq!(form.missing_field(), None);
    }

    #[test]
    fn test_resubmit_restarts_reset() {
        let sink = RecordingSink::default();
        let mut form = filled();

        let first = form.submit(&sink).unwrap();
        form.set_field(Field::Message, "Hello again");
        let second = form.submit(&sink).unwrap();
        assert_ne!(first, second);

        // the first timer firing late must not clear anything
        assert!(!form.reset(first));
        assert!(form.is_submitted());
        assert_eq!(form.field(Field::Message), "Hello again");

        assert!(form.reset(second));
        assert_eq!(form.fields(), &ContactSubmission::default());
        assert_eq!(sink.seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_edits_during_submitted_are_cleared() {
        let sink = RecordingSink::default();
        let mut form = filled();
        let ticket = form.submit(&sink).unwrap();

        form.set_field(Field::Name, "Grace");
        form.set_field(Field::Email, "grace@example.com");
        assert!(form.is_submitted());

        assert!(form.reset(ticket));
        assert_eq!(form.field(Field::Name), "");
        assert_eq!(form.field(Field::Email), "");
    }

    #[test]
    fn test_reset_is_one_shot() {
        let sink = RecordingSink::default();
        let mut form = filled();
        let ticket = form.submit(&sink).unwrap();
        assert!(form.reset(ticket));

        form.set_field(Field::Name, "Typed after reset");
        assert!(!form.reset(ticket));
        assert_eq!(form.field(Field::Name), "Typed after reset");
    }

    #[test]
    fn test_sink_failure_keeps_editing() {
        let mut form = filled();
        let err = form.submit(&FailingSink).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Sink(SinkError::Rejected("offline".to_string()))
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.field(Field::Email), "ada@example.com");
    }

    #[test]
    fn test_log_sink_accepts() {
        let mut form = filled();
        assert!(form.submit(&LogSink).is_ok());
    }

    #[test]
    fn test_reset_delay() {
        assert_eq!(RESET_DELAY.as_millis(), 3000);
    }
}
