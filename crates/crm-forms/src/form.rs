// File: src/form.rs
// Purpose: Form-level submit orchestration over a set of field bindings

use std::collections::BTreeMap;
use std::future::Future;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::error_state::FormErrorState;
use crate::feedback::{ApiError, ErrorTranslator};
use crate::field::{ChangeOutcome, FieldBinding};

/// Field name → committed value, handed to the API call
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("{field}: {message}")]
    Invalid { field: String, message: String },

    #[error("{message}")]
    Rejected { message: String },

    #[error("submission outcome discarded")]
    Discarded,
}

/// How a submission ended
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    Completed(Result<T, ApiError>),
    Cancelled,
}

/// Outcome of [`PendingSubmit::run`], applied with [`Form::finish`]
#[derive(Debug)]
#[must_use = "a settled submission does nothing until passed to Form::finish"]
pub struct Settled<T> {
    id: u64,
    outcome: SubmitOutcome<T>,
}

impl<T> Settled<T> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn outcome(&self) -> &SubmitOutcome<T> {
        &self.outcome
    }
}

/// A validated submission waiting for its API call
#[derive(Debug)]
pub struct PendingSubmit {
    id: u64,
    values: FormValues,
    cancelled: watch::Receiver<bool>,
}

impl PendingSubmit {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Run the API call, racing it against cancellation of the form
    pub async fn run<T, F, Fut>(self, call: F) -> Settled<T>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let PendingSubmit {
            id,
            values,
            mut cancelled,
        } = self;

        if *cancelled.borrow() {
            return Settled {
                id,
                outcome: SubmitOutcome::Cancelled,
            };
        }

        let outcome = tokio::select! {
            result = call(values) => SubmitOutcome::Completed(result),
            _ = wait_cancelled(&mut cancelled) => SubmitOutcome::Cancelled,
        };
        Settled { id, outcome }
    }
}

// A dropped sender means the form is gone, which counts as cancelled
async fn wait_cancelled(cancelled: &mut watch::Receiver<bool>) {
    let _ = cancelled.wait_for(|cancelled| *cancelled).await;
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    cancel: watch::Sender<bool>,
}

/// An ordered set of field bindings plus a form-level error.
///
/// While a submission is in flight the form refuses to start another one.
/// Dropping the form cancels the in-flight submission, so its outcome can
/// never be applied.
#[derive(Debug)]
pub struct Form {
    name: String,
    fields: Vec<FieldBinding>,
    form_error: String,
    translator: ErrorTranslator,
    clear_on_failure: Vec<String>,
    in_flight: Option<InFlight>,
    next_id: u64,
}

impl Form {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            form_error: String::new(),
            translator: ErrorTranslator::plain("Submission failed"),
            clear_on_failure: Vec::new(),
            in_flight: None,
            next_id: 0,
        }
    }

    pub fn field(mut self, binding: FieldBinding) -> Self {
        self.fields.push(binding);
        self
    }

    pub fn translator(mut self, translator: ErrorTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Reset `field` when the API rejects a submission
    pub fn clear_on_failure(mut self, field: impl Into<String>) -> Self {
        self.clear_on_failure.push(field.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&FieldBinding> {
        self.fields.iter().find(|binding| binding.name() == field)
    }

    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldBinding> {
        self.fields.iter_mut().find(|binding| binding.name() == field)
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(FieldBinding::value)
    }

    /// Forward a change event; `None` for an unknown field
    pub fn change(&mut self, field: &str, raw: &str) -> Option<ChangeOutcome> {
        self.get_mut(field).map(|binding| binding.on_change(raw))
    }

    /// Forward a blur event; `false` for an unknown field
    pub fn blur(&mut self, field: &str) -> bool {
        self.get_mut(field).map(FieldBinding::on_blur).is_some()
    }

    pub fn errors(&self) -> FormErrorState {
        let mut state = FormErrorState::new();
        for binding in &self.fields {
            state.set(binding.name(), binding.error());
        }
        state
    }

    /// Message shown above the form after a failed submission
    pub fn form_error(&self) -> &str {
        &self.form_error
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|binding| (binding.name().to_string(), binding.value().to_string()))
            .collect()
    }

    /// `true` while the submit control should stay disabled
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate every field and start a submission.
    ///
    /// Fields are checked in order and the first failure aborts; fields
    /// after it keep their current state.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitError> {
        if self.in_flight.is_some() {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.form_error.clear();

        for binding in &mut self.fields {
            if let Err(message) = binding.check() {
                tracing::debug!(form = %self.name, field = %binding.name(), %message, "submit blocked");
                return Err(SubmitError::Invalid {
                    field: binding.name().to_string(),
                    message,
                });
            }
        }

        self.next_id += 1;
        let id = self.next_id;
        let (cancel, cancelled) = watch::channel(false);
        self.in_flight = Some(InFlight { id, cancel });
        info!(form = %self.name, submission = id, "submission started");

        Ok(PendingSubmit {
            id,
            values: self.values(),
            cancelled,
        })
    }

    /// Apply a settled submission.
    ///
    /// Success resets every field; failure keeps the values and stores the
    /// translated message as the form error. Outcomes that do not belong to
    /// the current submission are discarded untouched.
    pub fn finish<T>(&mut self, settled: Settled<T>) -> Result<T, SubmitError> {
        let current = self.in_flight.as_ref().map(|in_flight| in_flight.id);
        if current != Some(settled.id) {
            warn!(form = %self.name, submission = settled.id, "discarding stale submission outcome");
            return Err(SubmitError::Discarded);
        }
        self.in_flight = None;

        match settled.outcome {
            SubmitOutcome::Cancelled => {
                warn!(form = %self.name, submission = settled.id, "submission cancelled");
                Err(SubmitError::Discarded)
            }
            SubmitOutcome::Completed(Ok(value)) => {
                info!(form = %self.name, submission = settled.id, "submission succeeded");
                self.reset_fields();
                Ok(value)
            }
            SubmitOutcome::Completed(Err(error)) => {
                let message = self.translator.translate(&error);
                warn!(form = %self.name, submission = settled.id, %error, "submission rejected");
                for binding in &mut self.fields {
                    if self.clear_on_failure.iter().any(|field| field == binding.name()) {
                        binding.reset();
                    }
                }
                self.form_error = message.clone();
                Err(SubmitError::Rejected { message })
            }
        }
    }

    /// Validate, call the API and apply the outcome in one step
    pub async fn submit<T, F, Fut>(&mut self, call: F) -> Result<T, SubmitError>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let pending = self.begin_submit()?;
        let settled = pending.run(call).await;
        self.finish(settled)
    }

    /// Cancel the in-flight submission, if any
    pub fn cancel_pending(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            info!(form = %self.name, submission = in_flight.id, "submission cancelled");
            let _ = in_flight.cancel.send(true);
        }
    }

    /// Cancel anything in flight and return to the initial state
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.reset_fields();
    }

    fn reset_fields(&mut self) {
        for binding in &mut self.fields {
            binding.reset();
        }
        self.form_error.clear();
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
