use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
    },
    types::NetworkDelivery,
};

/// Runs the RPC in-process on the local peer, without touching the transport
#[derive(Debug, Default)]
pub struct LocalSendRpcTarget {
    state: TargetState,
}

impl LocalSendRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for LocalSendRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::LocalSend
    }

    fn state(&self) -> &TargetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut TargetState {
        &mut self.state
    }

    fn send(
        &mut self,
        context: &mut RpcSendContext<'_>,
        message: &mut dyn RpcMessage,
        delivery: NetworkDelivery,
    ) -> Result<(), RpcTargetError> {
        self.state.try_check_live(RpcTargetKind::LocalSend)?;
        context.invoke_local(message, delivery);
        Ok(())
    }

    fn release(&mut self) {}
}
