#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStep {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the website input box (full text).
    TargetUrlChanged(String),
    /// User picked an operation by label.
    OperationSelected(String),
    /// User moved the operation selector one step.
    OperationStepped(OperationStep),
    /// User submitted the form.
    SubmitClicked,
    /// Transport finished a request.
    RequestResolved {
        request_id: crate::RequestId,
        outcome: crate::RequestOutcome,
    },
    /// User clicked Back on the results view.
    BackClicked,
    /// User acknowledged the blocking notification.
    NotificationDismissed,
}
