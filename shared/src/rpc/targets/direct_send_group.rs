use crate::{
    rpc::{
        error::RpcTargetError,
        group_target::GroupRpcTarget,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{local_send::LocalSendRpcTarget, recipient_list::RecipientList},
    },
    types::{ClientId, NetworkDelivery},
};

/// Group of peers the local peer can reach directly. Only the server has a
/// connection to every peer, so this is the group used in the server role.
#[derive(Debug)]
pub struct DirectSendRpcTargetGroup {
    state: TargetState,
    recipients: RecipientList,
    local: LocalSendRpcTarget,
}

impl DirectSendRpcTargetGroup {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: TargetState::new(),
            recipients: RecipientList::with_capacity(capacity),
            local: LocalSendRpcTarget::new(),
        }
    }
}

impl Default for DirectSendRpcTargetGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcTarget for DirectSendRpcTargetGroup {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::DirectSendGroup
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
        self.state.try_check_live(RpcTargetKind::DirectSendGroup)?;

        let local_client_id = context.local_client_id();
        for client_id in self.recipients.as_slice() {
            if *client_id == local_client_id {
                self.local.send(context, message, delivery)?;
            } else {
                context.send_direct(&*message, delivery, *client_id);
            }
        }
        Ok(())
    }

    fn release(&mut self) {
        self.recipients.release();
        self.local.release();
    }

    fn as_group(&self) -> Option<&dyn GroupRpcTarget> {
        Some(self)
    }
}

impl GroupRpcTarget for DirectSendRpcTargetGroup {
    fn clear(&mut self) {
        self.recipients.clear();
    }

    fn add(&mut self, client_id: ClientId) {
        self.recipients.insert(client_id);
    }

    fn remove(&mut self, client_id: ClientId) {
        self.recipients.remove(client_id);
    }

    fn contains(&self, client_id: ClientId) -> bool {
        self.recipients.contains(client_id)
    }

    fn ids(&self) -> &[ClientId] {
        self.recipients.as_slice()
    }

    fn target(&mut self) -> &mut dyn RpcTarget {
        self
    }
}
