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

/// Sends to one peer by way of the server, for peers without a direct
/// connection to each other
#[derive(Debug)]
pub struct ProxyRpcTarget {
    state: TargetState,
    client_id: ClientId,
}

impl ProxyRpcTarget {
    pub fn new(client_id: ClientId) -> Self {
        Self {
            state: TargetState::new(),
            client_id,
        }
    }
}

impl RpcTarget for ProxyRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::Proxy
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
        self.state.try_check_live(RpcTargetKind::Proxy)?;
        context.send_proxy(&*message, delivery, &[self.client_id]);
        Ok(())
    }

    fn release(&mut self) {}

    fn as_individual(&self) -> Option<&dyn IndividualRpcTarget> {
        Some(self)
    }
}

impl IndividualRpcTarget for ProxyRpcTarget {
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
