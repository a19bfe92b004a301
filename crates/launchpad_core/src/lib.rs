//! Launchpad core: pure provisioning-flow state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, AttemptId, AttemptOutcome, Phase, Stage, PLACEHOLDER_APP_URL};
pub use update::update;
pub use view_model::{AppViewModel, ViewMode, DOCS_URL};
