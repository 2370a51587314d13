use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{delegates::GroupDelegate, server::ServerRpcTarget},
    },
    types::{NetworkDelivery, SERVER_CLIENT_ID},
};

/// Sends to every peer except the local one
///
/// On a client the server never joins the group; it is reached through a
/// dedicated `ServerRpcTarget` send after the group send. Unlike
/// `NotServerRpcTarget`, the object's owner stays in the group when connected
/// to a session service, so the authority send is only made for an owner the
/// group does not already reach.
#[derive(Debug, Default)]
pub struct NotMeRpcTarget {
    state: TargetState,
    group: Option<GroupDelegate>,
    server: ServerRpcTarget,
}

impl NotMeRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for NotMeRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::NotMe
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
        self.state.try_check_live(RpcTargetKind::NotMe)?;

        let session = context.session();
        let local_client_id = session.local_client_id();
        let group = self
            .group
            .get_or_insert_with(|| GroupDelegate::for_role(session.is_server()))
            .group_mut();
        group.clear();

        if session.is_server() {
            for client_id in context.object().observers() {
                if *client_id == local_client_id {
                    continue;
                }
                group.add(*client_id);
            }
        } else {
            for client_id in session.connected_client_ids() {
                if *client_id == local_client_id || *client_id == SERVER_CLIENT_ID {
                    continue;
                }
                group.add(*client_id);
            }
        }

        group.send(context, message, delivery)?;

        if session.is_server() {
            return Ok(());
        }
        // the authority stands in for the server, and may be us or already grouped
        if session.uses_authority_as_server() {
            let owner_client_id = context.object().owner_client_id();
            if owner_client_id == local_client_id || group.contains(owner_client_id) {
                return Ok(());
            }
        }
        self.server.send(context, message, delivery)
    }

    fn release(&mut self) {
        self.group = None;
        self.server.release();
    }
}
