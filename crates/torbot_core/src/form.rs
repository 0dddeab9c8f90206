use crate::{CoreError, Effect, Operation, RequestId};

/// Pending user input on the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub operation: Operation,
    pub target_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// A request is in flight; input is frozen until it resolves.
    Submitting { request_id: RequestId },
}

/// Owns the form input and decides when a submission reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormController {
    form: FormState,
    phase: FormPhase,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    /// Replaces the target URL verbatim. Returns `false` when input is frozen
    /// or the value is unchanged.
    pub fn set_target_url(&mut self, text: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        let text = text.into();
        if self.form.target_url == text {
            return false;
        }
        self.form.target_url = text;
        true
    }

    pub fn set_operation(&mut self, operation: Operation) -> bool {
        if self.is_submitting() || self.form.operation == operation {
            return false;
        }
        self.form.operation = operation;
        true
    }

    /// Selects an operation by its label. Unknown labels leave the form as is.
    pub fn select_operation(&mut self, label: &str) -> Result<bool, CoreError> {
        let operation = Operation::from_label(label)?;
        Ok(self.set_operation(operation))
    }

    /// Starts a submission under `request_id`.
    ///
    /// Returns the effect to run, or `None` when the operation is not backed
    /// by the service or a request is already in flight. In both cases the
    /// form is left untouched.
    pub fn submit(&mut self, request_id: RequestId) -> Option<Effect> {
        if self.is_submitting() || !self.form.operation.is_wired() {
            return None;
        }
        self.phase = FormPhase::Submitting { request_id };
        Some(Effect::SubmitRequest {
            request_id,
            operation: self.form.operation,
            website: self.form.target_url.clone(),
        })
    }

    /// Whether `request_id` is the request this form is waiting on.
    pub fn is_awaiting(&self, request_id: RequestId) -> bool {
        self.phase == FormPhase::Submitting { request_id }
    }

    /// Returns to editing after a failed request, keeping the input.
    pub(crate) fn finish_with_failure(&mut self) {
        self.phase = FormPhase::Editing;
    }
}
