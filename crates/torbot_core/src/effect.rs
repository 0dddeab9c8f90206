use crate::{Operation, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one request to the crawler service.
    SubmitRequest {
        request_id: RequestId,
        operation: Operation,
        website: String,
    },
    /// Emitted exactly once per failed request. The modal itself is driven by
    /// `AppState::notification`; runners only record it.
    Notify { message: String },
}
