use crate::view_model::{AppViewModel, ViewMode};

/// Identifier of one provisioning attempt. Counts up from 1; 0 means no
/// attempt has been started yet.
pub type AttemptId = u64;

/// Fallback location reported when the provisioning service answers success
/// without naming the deployed artifact.
pub const PLACEHOLDER_APP_URL: &str = "https://your-miniapp.example.app";

const LIVE_NARRATION: &str = "Your miniapp is live!";

/// Lifecycle stage of the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No attempt started, or state reset.
    #[default]
    Idle,
    /// The single provisioning request is outstanding.
    InFlight,
    /// The attempt resolved with a deployed artifact.
    Succeeded,
    /// The attempt resolved with an error narration.
    Failed,
}

/// Scripted narration checkpoints for one attempt.
///
/// These are client-side texts timed around the single provisioning request.
/// The service reports no real checkpoints, so the texts describe expected
/// stages rather than confirmed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Initializing,
    CreatingRepository,
    AwaitingDeployment,
}

impl Stage {
    /// Human-readable narration for this stage.
    pub fn narration(&self) -> &'static str {
        match self {
            Stage::Initializing => "Initializing... Preparing your miniapp for launch.",
            Stage::CreatingRepository => {
                "Creating the repository and pushing the template... This might take a moment."
            }
            Stage::AwaitingDeployment => {
                "Setting up the hosted project and awaiting deployment... \
                 This can take a few minutes."
            }
        }
    }
}

/// Resolution of one attempt as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The service accepted the request. `app_url` is absent when the
    /// response body carried no URL field.
    Deployed { app_url: Option<String> },
    /// The request failed; `message` is the best available narration.
    Failed { message: String },
}

/// All mutable state for one provisioning attempt. Owned exclusively by the
/// update loop; the shell only sees `AppViewModel` snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    idea: String,
    phase: Phase,
    progress_message: String,
    result_url: Option<String>,
    attempt: AttemptId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Id of the most recently started attempt.
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            idea: self.idea.clone(),
            phase: self.phase,
            progress_message: self.progress_message.clone(),
            result_url: self.result_url.clone(),
            submit_enabled: self.phase != Phase::InFlight,
            mode: match self.phase {
                Phase::Succeeded => ViewMode::SuccessInstructions,
                Phase::InFlight => ViewMode::ProgressNarration,
                Phase::Idle | Phase::Failed => ViewMode::EntryForm,
            },
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn set_idea(&mut self, text: String) {
        self.idea = text;
        self.mark_dirty();
    }

    /// Starts a fresh attempt. The caller must have ruled out `InFlight`.
    pub(crate) fn begin_attempt(&mut self) -> AttemptId {
        self.attempt += 1;
        self.phase = Phase::InFlight;
        self.result_url = None;
        self.progress_message = Stage::Initializing.narration().to_string();
        self.mark_dirty();
        self.attempt
    }

    /// Narration checkpoint for an attempt. Checkpoints from a superseded
    /// attempt, or arriving after resolution, are dropped.
    pub(crate) fn apply_progress(&mut self, attempt: AttemptId, stage: Stage) {
        if attempt != self.attempt || self.phase != Phase::InFlight {
            return;
        }
        self.progress_message = stage.narration().to_string();
        self.mark_dirty();
    }

    /// Terminal resolution for an attempt. The terminal phase and its result
    /// are written in one transition, so no snapshot can pair `InFlight`
    /// with a resolved outcome. Stale resolutions are dropped like stale
    /// progress.
    pub(crate) fn apply_outcome(&mut self, attempt: AttemptId, outcome: AttemptOutcome) {
        if attempt != self.attempt || self.phase != Phase::InFlight {
            return;
        }
        match outcome {
            AttemptOutcome::Deployed { app_url } => {
                self.result_url =
                    Some(app_url.unwrap_or_else(|| PLACEHOLDER_APP_URL.to_string()));
                self.progress_message = LIVE_NARRATION.to_string();
                self.phase = Phase::Succeeded;
            }
            AttemptOutcome::Failed { message } => {
                self.result_url = None;
                self.progress_message = format!("Error: {message}");
                self.phase = Phase::Failed;
            }
        }
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
