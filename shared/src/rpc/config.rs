use std::default::Default;

/// Contains Config properties which will be used by `RpcTargets`
#[derive(Clone, Debug)]
pub struct RpcTargetsConfig {
    /// Number of recipients the pooled group targets reserve room for up
    /// front, so that resolving a group with `RpcTargetUse::Temp` does not
    /// reallocate during play.
    pub group_capacity: usize,
    /// Determines whether targets report every sent RPC to the metrics
    /// collaborator of the `RpcSendContext` when dispatched through
    /// `RpcTargets::dispatch`.
    pub track_metrics: bool,
}

impl Default for RpcTargetsConfig {
    fn default() -> Self {
        Self {
            group_capacity: 64,
            track_metrics: true,
        }
    }
}
