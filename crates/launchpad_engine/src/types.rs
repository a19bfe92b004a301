use std::fmt;

/// Identifier of one provisioning attempt, assigned by the flow controller.
pub type AttemptId = u64;

/// Scripted checkpoints emitted around the single provisioning request.
/// The service sends no incremental progress; these mark where the request
/// is in its one round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreatingRepository,
    AwaitingDeployment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptProgress {
    pub attempt: AttemptId,
    pub stage: Stage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(AttemptProgress),
    AttemptCompleted {
        attempt: AttemptId,
        result: Result<ProvisionOutcome, ProvisionError>,
    },
}

/// Successful provisioning response. `app_url` is absent when the service
/// omitted the URL field; substituting a fallback is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub app_url: Option<String>,
}

/// User-facing narration for failures with no better server-supplied text.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An unexpected error occurred while building your miniapp.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionError {
    pub kind: FailureKind,
    /// Narration-ready text: the server's error field when one was supplied,
    /// otherwise `GENERIC_FAILURE_MESSAGE`. Transport detail goes to the log.
    pub message: String,
}

impl ProvisionError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    HttpStatus(u16),
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}
