use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{
            delegates::GroupDelegate, local_send::LocalSendRpcTarget, server::ServerRpcTarget,
        },
    },
    types::{NetworkDelivery, SERVER_CLIENT_ID},
};

/// Sends to every peer except the object's owner
#[derive(Debug, Default)]
pub struct NotOwnerRpcTarget {
    state: TargetState,
    group: Option<GroupDelegate>,
    local: LocalSendRpcTarget,
    server: ServerRpcTarget,
}

impl NotOwnerRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for NotOwnerRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::NotOwner
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
        self.state.try_check_live(RpcTargetKind::NotOwner)?;

        let session = context.session();
        let local_client_id = session.local_client_id();
        let owner_client_id = context.object().owner_client_id();
        let group = self
            .group
            .get_or_insert_with(|| GroupDelegate::for_role(session.is_server()))
            .group_mut();
        group.clear();

        let mut local_invoked = false;
        if session.is_server() {
            for client_id in context.object().observers() {
                if *client_id == owner_client_id {
                    continue;
                }
                if *client_id == local_client_id {
                    if !local_invoked {
                        self.local.send(context, message, delivery)?;
                        local_invoked = true;
                    }
                    continue;
                }
                group.add(*client_id);
            }
            // a dedicated server does not observe its own objects
            if !local_invoked && owner_client_id != local_client_id {
                self.local.send(context, message, delivery)?;
            }
        } else {
            for client_id in session.connected_client_ids() {
                if *client_id == owner_client_id {
                    continue;
                }
                if *client_id == local_client_id {
                    if !local_invoked {
                        self.local.send(context, message, delivery)?;
                        local_invoked = true;
                    }
                    continue;
                }
                // the server is reached below, and a session service is no peer
                if *client_id == SERVER_CLIENT_ID {
                    continue;
                }
                group.add(*client_id);
            }
        }

        group.send(context, message, delivery)?;

        if !session.is_server()
            && !session.connected_to_session_service()
            && owner_client_id != SERVER_CLIENT_ID
        {
            self.server.send(context, message, delivery)?;
        }
        Ok(())
    }

    fn release(&mut self) {
        self.group = None;
        self.local.release();
        self.server.release();
    }
}
