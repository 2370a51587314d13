use log::warn;

use crate::{
    rpc::{
        error::RpcTargetError, group_target::GroupRpcTarget,
        individual_target::IndividualRpcTarget, rpc_message::RpcMessage,
        send_context::RpcSendContext,
    },
    types::NetworkDelivery,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RpcTargetKind {
    LocalSend,
    DirectSend,
    Proxy,
    DirectSendGroup,
    ProxyGroup,
    Server,
    NotServer,
    NotMe,
    Owner,
    NotOwner,
    Everyone,
    ClientsAndHost,
}

/// Lock and lifetime flags carried by every target
///
/// The lock is a usage guard rather than a synchronization primitive: a
/// locked target belongs to `RpcTargets` and refuses to be disposed by anyone
/// else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetState {
    locked: bool,
    disposed: bool,
}

impl TargetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }

    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }

    /// Marks the target disposed, unless it is locked or already disposed
    pub fn try_begin_dispose(&mut self, target: RpcTargetKind) -> Result<(), RpcTargetError> {
        if self.locked {
            warn!("refusing to dispose locked {:?} target", target);
            return Err(RpcTargetError::LockViolation { target });
        }
        if self.disposed {
            return Err(RpcTargetError::AlreadyDisposed { target });
        }
        self.disposed = true;
        Ok(())
    }

    pub fn try_check_live(&self, target: RpcTargetKind) -> Result<(), RpcTargetError> {
        if self.disposed {
            warn!("attempted to send through disposed {:?} target", target);
            return Err(RpcTargetError::TargetDisposed { target });
        }
        Ok(())
    }
}

/// A resolved set of RPC recipients
pub trait RpcTarget {
    fn kind(&self) -> RpcTargetKind;

    fn state(&self) -> &TargetState;

    fn state_mut(&mut self) -> &mut TargetState;

    /// Delivers `message` to every recipient of this target. Remote recipients
    /// get one transport send each; the local peer, if it is a recipient, runs
    /// the handler synchronously before this returns.
    fn send(
        &mut self,
        context: &mut RpcSendContext<'_>,
        message: &mut dyn RpcMessage,
        delivery: NetworkDelivery,
    ) -> Result<(), RpcTargetError>;

    /// Drops delegate targets and recipient lists. Called once by `dispose`.
    fn release(&mut self);

    /// Releases everything this target owns. Fails with
    /// `RpcTargetError::LockViolation` for targets owned by `RpcTargets`, and
    /// with `RpcTargetError::AlreadyDisposed` on a second call.
    fn dispose(&mut self) -> Result<(), RpcTargetError> {
        let kind = self.kind();
        self.state_mut().try_begin_dispose(kind)?;
        self.release();
        Ok(())
    }

    fn is_locked(&self) -> bool {
        self.state().is_locked()
    }

    fn is_disposed(&self) -> bool {
        self.state().is_disposed()
    }

    fn as_individual(&self) -> Option<&dyn IndividualRpcTarget> {
        None
    }

    fn as_group(&self) -> Option<&dyn GroupRpcTarget> {
        None
    }
}
