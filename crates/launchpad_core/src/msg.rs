#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the idea input box.
    IdeaChanged(String),
    /// User submitted the current idea for provisioning.
    SubmitClicked,
    /// Engine narration checkpoint for an attempt.
    ProvisionProgress {
        attempt: crate::AttemptId,
        stage: crate::Stage,
    },
    /// Engine resolution for an attempt.
    ProvisionDone {
        attempt: crate::AttemptId,
        outcome: crate::AttemptOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
