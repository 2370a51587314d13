use log::warn;

use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind},
        send_context::RpcSendContext,
    },
    types::{ClientId, NetworkDelivery},
};

/// A target borrowed from `RpcTargets`
///
/// The pool keeps ownership: the handle cannot dispose the target and only
/// hands out shared access to it. It is invalidated by the next resolution
/// call on the same `RpcTargets`, which the borrow checker enforces.
pub struct PooledRpcTarget<'a> {
    target: &'a mut dyn RpcTarget,
}

impl<'a> PooledRpcTarget<'a> {
    pub(crate) fn new(target: &'a mut dyn RpcTarget) -> Self {
        Self { target }
    }

    pub fn send(
        &mut self,
        context: &mut RpcSendContext<'_>,
        message: &mut dyn RpcMessage,
        delivery: NetworkDelivery,
    ) -> Result<(), RpcTargetError> {
        self.target.send(context, message, delivery)
    }

    pub fn kind(&self) -> RpcTargetKind {
        self.target.kind()
    }

    pub fn target(&self) -> &dyn RpcTarget {
        &*self.target
    }

    /// Recipient of an individual target
    pub fn client_id(&self) -> Option<ClientId> {
        self.target.as_individual().map(|target| target.client_id())
    }

    /// Members of a group target
    pub fn ids(&self) -> Option<&[ClientId]> {
        self.target.as_group().map(|target| target.ids())
    }
}

/// A target allocated for, and owned by, the caller
///
/// Must be disposed exactly once with `OwnedRpcTarget::dispose`, which
/// consumes the handle.
pub struct OwnedRpcTarget {
    target: Box<dyn RpcTarget>,
}

impl OwnedRpcTarget {
    pub fn new(target: Box<dyn RpcTarget>) -> Self {
        Self { target }
    }

    pub fn send(
        &mut self,
        context: &mut RpcSendContext<'_>,
        message: &mut dyn RpcMessage,
        delivery: NetworkDelivery,
    ) -> Result<(), RpcTargetError> {
        self.target.send(context, message, delivery)
    }

    pub fn kind(&self) -> RpcTargetKind {
        self.target.kind()
    }

    pub fn target(&self) -> &dyn RpcTarget {
        &*self.target
    }

    pub fn target_mut(&mut self) -> &mut dyn RpcTarget {
        &mut *self.target
    }

    pub fn client_id(&self) -> Option<ClientId> {
        self.target.as_individual().map(|target| target.client_id())
    }

    pub fn ids(&self) -> Option<&[ClientId]> {
        self.target.as_group().map(|target| target.ids())
    }

    pub fn dispose(mut self) -> Result<(), RpcTargetError> {
        self.target.dispose()
    }
}

impl Drop for OwnedRpcTarget {
    fn drop(&mut self) {
        if !self.target.is_disposed() {
            warn!(
                "{:?} target dropped without being disposed",
                self.target.kind()
            );
        }
    }
}

/// Result of resolving a target with a given `RpcTargetUse`
pub enum ResolvedRpcTarget<'a> {
    Pooled(PooledRpcTarget<'a>),
    Owned(OwnedRpcTarget),
}

impl<'a> ResolvedRpcTarget<'a> {
    pub fn send(
        &mut self,
        context: &mut RpcSendContext<'_>,
        message: &mut dyn RpcMessage,
        delivery: NetworkDelivery,
    ) -> Result<(), RpcTargetError> {
        match self {
            ResolvedRpcTarget::Pooled(target) => target.send(context, message, delivery),
            ResolvedRpcTarget::Owned(target) => target.send(context, message, delivery),
        }
    }

    pub fn kind(&self) -> RpcTargetKind {
        self.target().kind()
    }

    pub fn target(&self) -> &dyn RpcTarget {
        match self {
            ResolvedRpcTarget::Pooled(target) => target.target(),
            ResolvedRpcTarget::Owned(target) => target.target(),
        }
    }

    pub fn client_id(&self) -> Option<ClientId> {
        self.target().as_individual().map(|target| target.client_id())
    }

    pub fn ids(&self) -> Option<&[ClientId]> {
        self.target().as_group().map(|target| target.ids())
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, ResolvedRpcTarget::Pooled(_))
    }

    pub fn into_owned(self) -> Option<OwnedRpcTarget> {
        match self {
            ResolvedRpcTarget::Owned(target) => Some(target),
            ResolvedRpcTarget::Pooled(_) => None,
        }
    }

    pub fn into_pooled(self) -> Option<PooledRpcTarget<'a>> {
        match self {
            ResolvedRpcTarget::Pooled(target) => Some(target),
            ResolvedRpcTarget::Owned(_) => None,
        }
    }

    /// Disposes an owned target. Pooled targets are locked by `RpcTargets`,
    /// so disposing one fails with `RpcTargetError::LockViolation`.
    pub fn dispose(self) -> Result<(), RpcTargetError> {
        match self {
            ResolvedRpcTarget::Pooled(pooled) => pooled.target.dispose(),
            ResolvedRpcTarget::Owned(owned) => owned.dispose(),
        }
    }
}
