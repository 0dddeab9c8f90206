use crate::view_model::{AppViewModel, ScreenView};
use crate::{FormController, ResultsPresenter};

pub type RequestId = u64;

/// The single active view model. The form and a result set are never live
/// at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Form(FormController),
    Results(ResultsPresenter),
}

impl Default for View {
    fn default() -> Self {
        View::Form(FormController::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    view: View,
    notification: Option<String>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::default(),
            notification: None,
            next_request_id: 1,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> Option<&FormController> {
        match &self.view {
            View::Form(form) => Some(form),
            View::Results(_) => None,
        }
    }

    pub fn results(&self) -> Option<&ResultsPresenter> {
        match &self.view {
            View::Results(results) => Some(results),
            View::Form(_) => None,
        }
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.view {
            View::Form(form) => ScreenView::Form(form.into()),
            View::Results(results) => ScreenView::Results(results.into()),
        };
        AppViewModel {
            screen,
            notification: self.notification.clone(),
        }
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self) -> Option<&mut FormController> {
        match &mut self.view {
            View::Form(form) => Some(form),
            View::Results(_) => None,
        }
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub(crate) fn peek_request_id(&self) -> RequestId {
        self.next_request_id
    }

    pub(crate) fn set_view(&mut self, view: View) {
        self.view = view;
        self.mark_dirty();
    }

    /// Takes the current view out, leaving a default form in its place.
    pub(crate) fn take_view(&mut self) -> View {
        std::mem::take(&mut self.view)
    }

    pub(crate) fn set_notification(&mut self, message: Option<String>) {
        self.notification = message;
        self.mark_dirty();
    }
}
