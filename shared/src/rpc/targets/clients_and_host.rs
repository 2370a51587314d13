use log::debug;

use crate::{
    rpc::{
        error::RpcTargetError,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{everyone::EveryoneRpcTarget, not_server::NotServerRpcTarget},
    },
    types::NetworkDelivery,
};

#[derive(Debug)]
enum ClientsAndHostRoute {
    Everyone(EveryoneRpcTarget),
    NotServer(NotServerRpcTarget),
}

/// Sends to every client, and to the server only when it is also a player
///
/// With a session service every peer is a client, so this behaves like
/// `EveryoneRpcTarget` there. The choice is made on first send.
#[derive(Debug, Default)]
pub struct ClientsAndHostRpcTarget {
    state: TargetState,
    route: Option<ClientsAndHostRoute>,
}

impl ClientsAndHostRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for ClientsAndHostRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::ClientsAndHost
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
        self.state.try_check_live(RpcTargetKind::ClientsAndHost)?;

        let session = context.session();
        let route = self.route.get_or_insert_with(|| {
            if session.server_is_host() || session.uses_authority_as_server() {
                debug!("clients and host target resolved to everyone");
                ClientsAndHostRoute::Everyone(EveryoneRpcTarget::new())
            } else {
                debug!("clients and host target resolved to not server");
                ClientsAndHostRoute::NotServer(NotServerRpcTarget::new())
            }
        });
        match route {
            ClientsAndHostRoute::Everyone(target) => target.send(context, message, delivery),
            ClientsAndHostRoute::NotServer(target) => target.send(context, message, delivery),
        }
    }

    fn release(&mut self) {
        self.route = None;
    }
}
