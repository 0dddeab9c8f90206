use std::sync::Once;

use pretty_assertions::assert_eq;
use torbot_core::{
    update, AppState, Effect, FormState, LinkClass, LinkResultSet, Msg, Operation, OperationStep,
    RequestOutcome, ResultRow, ScreenView,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn fill_form(state: AppState, operation: Operation, url: &str) -> AppState {
    let (state, _) = update(state, Msg::OperationSelected(operation.label().to_string()));
    let (state, _) = update(state, Msg::TargetUrlChanged(url.to_string()));
    state
}

fn submit(state: AppState) -> (AppState, Vec<Effect>) {
    update(state, Msg::SubmitClicked)
}

fn resolve(state: AppState, request_id: u64, outcome: RequestOutcome) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::RequestResolved {
            request_id,
            outcome,
        },
    )
}

fn results_rows(state: &AppState) -> Vec<ResultRow> {
    match state.view().screen {
        ScreenView::Results(results) => results.rows,
        ScreenView::Form(_) => panic!("expected results view"),
    }
}

#[test]
fn placeholder_operations_submit_as_noop() {
    init_logging();
    for operation in [Operation::RetrieveEmails, Operation::RetrieveInfo] {
        let state = fill_form(AppState::new(), operation, "http://example.com");
        let before = state.form().unwrap().form().clone();

        let (mut next, effects) = submit(state);

        assert!(effects.is_empty());
        assert_eq!(next.form().unwrap().form(), &before);
        assert!(!next.form().unwrap().is_submitting());
        assert!(next.consume_dirty());
        let (mut again, effects) = submit(next);
        assert!(effects.is_empty());
        assert!(!again.consume_dirty());
    }
}

#[test]
fn url_retrieval_emits_request_and_freezes_form() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");

    let (state, effects) = submit(state);

    assert_eq!(
        effects,
        vec![Effect::SubmitRequest {
            request_id: 1,
            operation: Operation::RetrieveUrls,
            website: "http://example.com".to_string(),
        }]
    );
    let form = state.form().unwrap();
    assert!(form.is_submitting());
    match state.view().screen {
        ScreenView::Form(view) => assert!(view.submitting),
        ScreenView::Results(_) => panic!("still on the form while submitting"),
    }

    // Second submit while in flight is swallowed, input is frozen.
    let (state, effects) = submit(state);
    assert!(effects.is_empty());
    let (state, _) = update(state, Msg::TargetUrlChanged("http://other.com".to_string()));
    let (state, _) = update(state, Msg::OperationStepped(OperationStep::Next));
    assert_eq!(state.form().unwrap().form().target_url, "http://example.com");
    assert_eq!(state.form().unwrap().form().operation, Operation::RetrieveUrls);
}

#[test]
fn empty_target_url_still_submits() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "");

    let (_state, effects) = submit(state);

    assert_eq!(
        effects,
        vec![Effect::SubmitRequest {
            request_id: 1,
            operation: Operation::RetrieveUrls,
            website: String::new(),
        }]
    );
}

#[test]
fn success_switches_to_ordered_results() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");
    let (state, _) = submit(state);

    let links = LinkResultSet::from_pairs([("http://a.com", true), ("http://b.com", false)]);
    let (state, effects) = resolve(state, 1, RequestOutcome::Success(links));

    assert!(effects.is_empty());
    assert!(state.form().is_none());
    assert_eq!(
        results_rows(&state),
        vec![
            ResultRow {
                ordinal: 1,
                link: "http://a.com".to_string(),
                class: LinkClass::Good,
            },
            ResultRow {
                ordinal: 2,
                link: "http://b.com".to_string(),
                class: LinkClass::Bad,
            },
        ]
    );
    match state.view().screen {
        ScreenView::Results(view) => {
            assert_eq!(view.good, 1);
            assert_eq!(view.bad, 1);
        }
        ScreenView::Form(_) => unreachable!(),
    }
}

#[test]
fn repeated_links_render_once() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");
    let (state, _) = submit(state);

    let links = LinkResultSet::from_pairs([
        ("http://a.com", true),
        ("http://b.com", false),
        ("http://a.com", true),
    ]);
    let (state, _) = resolve(state, 1, RequestOutcome::Success(links));

    let rows: Vec<_> = results_rows(&state)
        .into_iter()
        .map(|row| (row.ordinal, row.link))
        .collect();
    assert_eq!(
        rows,
        vec![(1, "http://a.com".to_string()), (2, "http://b.com".to_string())]
    );
}

#[test]
fn back_always_restores_default_form() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");
    let (state, _) = submit(state);
    let (state, _) = resolve(
        state,
        1,
        RequestOutcome::Success(LinkResultSet::from_pairs([("http://a.com", true)])),
    );

    let (mut state, effects) = update(state, Msg::BackClicked);

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(state.results().is_none());
    let form = state.form().unwrap();
    assert_eq!(form.form(), &FormState::default());
    assert_eq!(form.form().operation, Operation::RetrieveEmails);
    assert_eq!(form.form().target_url, "");
    assert!(!form.is_submitting());
}

#[test]
fn failure_returns_to_editing_with_input_and_one_notification() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");
    let (state, _) = submit(state);

    let (state, effects) = resolve(
        state,
        1,
        RequestOutcome::Failure("network error: connection refused".to_string()),
    );

    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: "network error: connection refused".to_string(),
        }]
    );
    let form = state.form().unwrap();
    assert!(!form.is_submitting());
    assert_eq!(form.form().target_url, "http://example.com");
    assert_eq!(form.form().operation, Operation::RetrieveUrls);
    assert_eq!(
        state.view().notification.as_deref(),
        Some("network error: connection refused")
    );

    // A duplicate delivery of the same outcome raises nothing further.
    let (state, effects) = resolve(state, 1, RequestOutcome::Failure("again".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.notification(), Some("network error: connection refused"));
}

#[test]
fn notification_blocks_input_until_dismissed() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");
    let (state, _) = submit(state);
    let (state, _) = resolve(state, 1, RequestOutcome::Failure("boom".to_string()));

    let (state, effects) = submit(state);
    assert!(effects.is_empty());
    let (state, _) = update(state, Msg::TargetUrlChanged("http://x.com".to_string()));
    assert_eq!(state.form().unwrap().form().target_url, "http://example.com");

    let (state, _) = update(state, Msg::NotificationDismissed);
    assert_eq!(state.notification(), None);

    // Resubmitting after dismissal allocates a fresh request id.
    let (_state, effects) = submit(state);
    assert_eq!(
        effects,
        vec![Effect::SubmitRequest {
            request_id: 2,
            operation: Operation::RetrieveUrls,
            website: "http://example.com".to_string(),
        }]
    );
}

#[test]
fn stale_outcomes_are_discarded() {
    init_logging();
    let state = fill_form(AppState::new(), Operation::RetrieveUrls, "http://example.com");
    let (state, _) = submit(state);

    // Unknown id while submitting.
    let (mut state, effects) = resolve(
        state,
        99,
        RequestOutcome::Success(LinkResultSet::from_pairs([("http://late.com", true)])),
    );
    assert!(effects.is_empty());
    assert!(state.form().unwrap().is_awaiting(1));
    assert!(state.consume_dirty());
    let (mut state, _) = resolve(state, 99, RequestOutcome::Failure("late".to_string()));
    assert!(!state.consume_dirty());

    // Outcome arriving after the view already moved on to results and back.
    let (state, _) = resolve(
        state,
        1,
        RequestOutcome::Success(LinkResultSet::from_pairs([("http://a.com", true)])),
    );
    let (state, _) = update(state, Msg::BackClicked);
    let before = state.clone();
    let (state, effects) = resolve(
        state,
        1,
        RequestOutcome::Success(LinkResultSet::from_pairs([("http://b.com", true)])),
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn invalid_operation_label_is_rejected() {
    init_logging();
    let state = AppState::new();
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::OperationSelected("Analyze".to_string()));

    assert!(effects.is_empty());
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
}

#[test]
fn operation_selector_cycles_through_fixed_set() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::OperationStepped(OperationStep::Next));
    assert_eq!(state.form().unwrap().form().operation, Operation::RetrieveUrls);
    let (state, _) = update(state, Msg::OperationStepped(OperationStep::Previous));
    let (state, _) = update(state, Msg::OperationStepped(OperationStep::Previous));
    assert_eq!(state.form().unwrap().form().operation, Operation::RetrieveInfo);

    match state.view().screen {
        ScreenView::Form(view) => {
            let selected: Vec<_> = view
                .operations
                .iter()
                .filter(|option| option.selected)
                .map(|option| option.label)
                .collect();
            assert_eq!(selected, vec!["Retrieve Information"]);
            assert_eq!(view.operations.len(), 3);
        }
        ScreenView::Results(_) => panic!("expected form"),
    }
}
