use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{not_server::NotServerRpcTarget, server::ServerRpcTarget},
    },
    types::NetworkDelivery,
};

/// Sends to every peer: everyone but the server, then the server
#[derive(Debug, Default)]
pub struct EveryoneRpcTarget {
    state: TargetState,
    not_server: NotServerRpcTarget,
    server: ServerRpcTarget,
}

impl EveryoneRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for EveryoneRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::Everyone
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
        self.state.try_check_live(RpcTargetKind::Everyone)?;
        self.not_server.send(context, message, delivery)?;
        self.server.send(context, message, delivery)
    }

    fn release(&mut self) {
        self.not_server.release();
        self.server.release();
    }
}
