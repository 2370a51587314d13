use crate::{
    rpc::{
        error::RpcTargetError,
        individual_target::IndividualRpcTarget,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
    },
    types::{ClientId, NetworkDelivery},
};

/// Sends straight to one peer the local peer has a connection to
#[derive(Debug)]
pub struct DirectSendRpcTarget {
    state: TargetState,
    client_id: ClientId,
}

impl DirectSendRpcTarget {
    pub fn new(client_id: ClientId) -> Self {
        Self {
            state: TargetState::new(),
            client_id,
        }
    }
}

impl RpcTarget for DirectSendRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::DirectSend
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
        self.state.try_check_live(RpcTargetKind::DirectSend)?;
        context.send_direct(&*message, delivery, self.client_id);
        Ok(())
    }

    fn release(&mut self) {}

    fn as_individual(&self) -> Option<&dyn IndividualRpcTarget> {
        Some(self)
    }
}

impl IndividualRpcTarget for DirectSendRpcTarget {
    fn client_id(&self) -> ClientId {
        self.client_id
    }

    fn set_client_id(&mut self, client_id: ClientId) {
        self.client_id = client_id;
    }

    fn target(&mut self) -> &mut dyn RpcTarget {
        self
    }
}
