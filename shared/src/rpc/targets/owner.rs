use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{
            delegates::IndividualDelegate, local_send::LocalSendRpcTarget,
            server::ServerRpcTarget,
        },
    },
    types::{NetworkDelivery, SERVER_CLIENT_ID},
};

/// Sends to the current owner of the object
#[derive(Debug, Default)]
pub struct OwnerRpcTarget {
    state: TargetState,
    local: Option<LocalSendRpcTarget>,
    server: Option<ServerRpcTarget>,
    remote: Option<IndividualDelegate>,
}

impl OwnerRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for OwnerRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::Owner
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
        self.state.try_check_live(RpcTargetKind::Owner)?;

        let session = context.session();
        let owner_client_id = context.object().owner_client_id();

        if owner_client_id == session.local_client_id() {
            return self
                .local
                .get_or_insert_with(LocalSendRpcTarget::new)
                .send(context, message, delivery);
        }

        // a session service holds SERVER_CLIENT_ID but never owns objects
        if owner_client_id == SERVER_CLIENT_ID && !session.uses_authority_as_server() {
            return self
                .server
                .get_or_insert_with(ServerRpcTarget::new)
                .send(context, message, delivery);
        }

        let remote = self
            .remote
            .get_or_insert_with(|| IndividualDelegate::for_role(session.is_server(), owner_client_id))
            .individual_mut();
        remote.set_client_id(owner_client_id);
        remote.send(context, message, delivery)
    }

    fn release(&mut self) {
        self.local = None;
        self.server = None;
        self.remote = None;
    }
}
