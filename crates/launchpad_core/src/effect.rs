#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the single outbound provisioning request for this attempt.
    StartProvision { attempt: crate::AttemptId },
}
