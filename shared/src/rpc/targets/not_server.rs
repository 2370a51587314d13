use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{delegates::GroupDelegate, local_send::LocalSendRpcTarget},
    },
    types::{NetworkDelivery, SERVER_CLIENT_ID},
};

/// Sends to every peer except the server. When connected to a distributed
/// authority session service the object's owner plays the server role and is
/// left out instead.
#[derive(Debug, Default)]
pub struct NotServerRpcTarget {
    state: TargetState,
    group: Option<GroupDelegate>,
    local: LocalSendRpcTarget,
}

impl NotServerRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for NotServerRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::NotServer
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
        self.state.try_check_live(RpcTargetKind::NotServer)?;

        let session = context.session();
        let group = self
            .group
            .get_or_insert_with(|| GroupDelegate::for_role(session.is_server()))
            .group_mut();
        group.clear();

        if session.is_server() {
            for client_id in context.object().observers() {
                if *client_id == SERVER_CLIENT_ID {
                    continue;
                }
                group.add(*client_id);
            }
        } else {
            let local_client_id = session.local_client_id();
            let owner_client_id = context.object().owner_client_id();
            let skip_owner = session.uses_authority_as_server();
            let mut local_invoked = false;
            for client_id in session.connected_client_ids() {
                if *client_id == SERVER_CLIENT_ID {
                    continue;
                }
                if skip_owner && *client_id == owner_client_id {
                    continue;
                }
                if *client_id == local_client_id {
                    // run locally right away, never through the group
                    if !local_invoked {
                        self.local.send(context, message, delivery)?;
                        local_invoked = true;
                    }
                    continue;
                }
                group.add(*client_id);
            }
        }

        group.send(context, message, delivery)
    }

    fn release(&mut self) {
        self.group = None;
        self.local.release();
    }
}
