//! Launchpad engine: provisioning request execution and event plumbing.
mod engine;
mod provision;
mod types;

pub use engine::EngineHandle;
pub use provision::{
    ChannelProgressSink, HttpProvisioner, ProgressSink, ProvisionSettings, Provisioner,
    SettingsError, PROVISION_PATH,
};
pub use types::{
    AttemptId, AttemptProgress, EngineEvent, FailureKind, ProvisionError, ProvisionOutcome,
    Stage, GENERIC_FAILURE_MESSAGE,
};
