use client_logging::{client_debug, client_info, client_warn};

use crate::{AppState, Effect, Msg, OperationStep, RequestOutcome, ResultsPresenter, View};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // A raised notification is modal: only dismissal gets through, plus
    // transport outcomes, which are checked against the pending request anyway.
    if state.notification().is_some() && blocked_by_notification(&msg) {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::TargetUrlChanged(text) => {
            if state
                .form_mut()
                .is_some_and(|form| form.set_target_url(text))
            {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::OperationSelected(label) => {
            match state.form_mut().map(|form| form.select_operation(&label)) {
                Some(Ok(true)) => state.mark_dirty(),
                Some(Err(err)) => client_warn!("Rejected operation selection: {}", err),
                Some(Ok(false)) | None => {}
            }
            Vec::new()
        }
        Msg::OperationStepped(step) => {
            let changed = state.form_mut().is_some_and(|form| {
                let current = form.form().operation;
                let next = match step {
                    OperationStep::Next => current.next(),
                    OperationStep::Previous => current.previous(),
                };
                form.set_operation(next)
            });
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked => {
            let request_id = state.peek_request_id();
            match state.form_mut().and_then(|form| form.submit(request_id)) {
                Some(effect) => {
                    state.allocate_request_id();
                    state.mark_dirty();
                    if let Effect::SubmitRequest {
                        operation, website, ..
                    } = &effect
                    {
                        client_info!(
                            "Submitting request_id={} operation={} website_len={}",
                            request_id,
                            operation,
                            website.len()
                        );
                    }
                    vec![effect]
                }
                None => {
                    client_debug!("Submit ignored: operation not wired or request in flight");
                    Vec::new()
                }
            }
        }
        Msg::RequestResolved {
            request_id,
            outcome,
        } => {
            let awaiting = state
                .form()
                .is_some_and(|form| form.is_awaiting(request_id));
            if !awaiting {
                client_warn!("Discarding outcome for request_id={} with no pending form", request_id);
                return (state, Vec::new());
            }
            match outcome {
                RequestOutcome::Success(links) => {
                    client_info!(
                        "Request {} succeeded with {} link(s); showing results",
                        request_id,
                        links.len()
                    );
                    state.set_view(View::Results(ResultsPresenter::new(links)));
                    Vec::new()
                }
                RequestOutcome::Failure(reason) => {
                    client_warn!("Request {} failed: {}", request_id, reason);
                    if let Some(form) = state.form_mut() {
                        form.finish_with_failure();
                    }
                    state.set_notification(Some(reason.clone()));
                    vec![Effect::Notify { message: reason }]
                }
            }
        }
        Msg::BackClicked => {
            if state.results().is_some() {
                if let View::Results(results) = state.take_view() {
                    state.set_view(View::Form(results.go_back()));
                    client_info!("Results discarded; form reset");
                }
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            if state.notification().is_some() {
                state.set_notification(None);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn blocked_by_notification(msg: &Msg) -> bool {
    !matches!(msg, Msg::NotificationDismissed | Msg::RequestResolved { .. })
}
