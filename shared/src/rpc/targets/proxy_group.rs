use crate::{
    rpc::{
        error::RpcTargetError,
        group_target::GroupRpcTarget,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{
            direct_send::DirectSendRpcTarget, local_send::LocalSendRpcTarget,
            recipient_list::RecipientList,
        },
    },
    types::{ClientId, NetworkDelivery, SERVER_CLIENT_ID},
};

/// Group of peers reached by way of the server
///
/// One proxy message carries every remote member except the server. The
/// server itself gets a direct send, and the local peer runs the handler
/// in-process.
#[derive(Debug)]
pub struct ProxyRpcTargetGroup {
    state: TargetState,
    recipients: RecipientList,
    // rebuilt on every send
    relayed: Vec<ClientId>,
    server: DirectSendRpcTarget,
    local: LocalSendRpcTarget,
}

impl ProxyRpcTargetGroup {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: TargetState::new(),
            recipients: RecipientList::with_capacity(capacity),
            relayed: Vec::with_capacity(capacity),
            server: DirectSendRpcTarget::new(SERVER_CLIENT_ID),
            local: LocalSendRpcTarget::new(),
        }
    }
}

impl Default for ProxyRpcTargetGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcTarget for ProxyRpcTargetGroup {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::ProxyGroup
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
        self.state.try_check_live(RpcTargetKind::ProxyGroup)?;

        let local_client_id = context.local_client_id();
        let mut includes_local = false;
        let mut includes_server = false;
        self.relayed.clear();
        for client_id in self.recipients.as_slice() {
            if *client_id == local_client_id {
                includes_local = true;
            } else if *client_id == SERVER_CLIENT_ID {
                includes_server = true;
            } else {
                self.relayed.push(*client_id);
            }
        }

        if !self.relayed.is_empty() {
            context.send_proxy(&*message, delivery, &self.relayed);
        }
        if includes_server {
            self.server.send(context, message, delivery)?;
        }
        if includes_local {
            self.local.send(context, message, delivery)?;
        }
        Ok(())
    }

    fn release(&mut self) {
        self.recipients.release();
        self.relayed = Vec::new();
        self.server.release();
        self.local.release();
    }

    fn as_group(&self) -> Option<&dyn GroupRpcTarget> {
        Some(self)
    }
}

impl GroupRpcTarget for ProxyRpcTargetGroup {
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
