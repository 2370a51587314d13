use thiserror::Error;

use crate::rpc::rpc_target::RpcTargetKind;

/// Errors that can occur while resolving or sending through an RPC target
///
/// Every variant is a usage error on the caller's side: recipient computation
/// is a pure function of the current session state, so none of these are
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcTargetError {
    /// Attempted to dispose a target owned by `RpcTargets`
    #[error("Cannot dispose {target:?} target - it is locked by RpcTargets. Targets resolved with RpcTargetUse::Temp belong to the pool and must not be disposed")]
    LockViolation { target: RpcTargetKind },

    /// Attempted to dispose a target twice
    #[error("{target:?} target was already disposed")]
    AlreadyDisposed { target: RpcTargetKind },

    /// Attempted to send through a target after it was disposed
    #[error("Cannot send through {target:?} target - it has been disposed")]
    TargetDisposed { target: RpcTargetKind },

    /// SendTo::SpecifiedInParams was used without supplying a target
    #[error("SendTo::SpecifiedInParams requires a target in RpcSendParams")]
    MissingSpecifiedTarget,
}
