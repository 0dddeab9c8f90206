use crate::{FormController, LinkClass, Operation, ResultsPresenter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: ScreenView,
    /// Blocking notification; the UI must show it above everything else.
    pub notification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Form(FormView),
    Results(ResultsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub target_url: String,
    pub operation: Operation,
    pub operations: Vec<OperationOption>,
    pub submitting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOption {
    pub operation: Operation,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub rows: Vec<ResultRow>,
    pub good: usize,
    pub bad: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based position in response order.
    pub ordinal: usize,
    pub link: String,
    pub class: LinkClass,
}

impl From<&FormController> for FormView {
    fn from(form: &FormController) -> Self {
        let selected = form.form().operation;
        Self {
            target_url: form.form().target_url.clone(),
            operation: selected,
            operations: Operation::ALL
                .into_iter()
                .map(|operation| OperationOption {
                    operation,
                    label: operation.label(),
                    selected: operation == selected,
                })
                .collect(),
            submitting: form.is_submitting(),
        }
    }
}

impl From<&ResultsPresenter> for ResultsView {
    fn from(results: &ResultsPresenter) -> Self {
        let good = results.links().reachable_count();
        Self {
            rows: results.render(),
            good,
            bad: results.links().len() - good,
        }
    }
}
