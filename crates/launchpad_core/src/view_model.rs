use crate::Phase;

/// Developer-tools page linked from the success instructions.
pub const DOCS_URL: &str = "https://farcaster.xyz/~/developers";

/// Which of the three mutually exclusive views the shell should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Idea entry form. Shown while `Idle` and again after `Failed`, with
    /// the error narration above it.
    #[default]
    EntryForm,
    /// Progress narration while the request is outstanding.
    ProgressNarration,
    /// Post-deployment instructions with the result URL.
    SuccessInstructions,
}

/// Read-only projection of the controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub idea: String,
    pub phase: Phase,
    pub progress_message: String,
    pub result_url: Option<String>,
    pub submit_enabled: bool,
    pub mode: ViewMode,
}
