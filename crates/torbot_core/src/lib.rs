//! TorBot core: pure view state machine and view-model helpers.
mod effect;
mod error;
mod form;
mod msg;
mod operation;
mod results;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::CoreError;
pub use form::{FormController, FormPhase, FormState};
pub use msg::{Msg, OperationStep};
pub use operation::Operation;
pub use results::{LinkClass, LinkEntry, LinkResultSet, RequestOutcome, ResultsPresenter};
pub use state::{AppState, RequestId, View};
pub use update::update;
pub use view_model::{AppViewModel, FormView, OperationOption, ResultRow, ResultsView, ScreenView};
