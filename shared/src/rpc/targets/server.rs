use log::debug;

use crate::{
    rpc::{
        error::RpcTargetError,
        individual_target::IndividualRpcTarget,
        rpc_message::RpcMessage,
        rpc_target::{RpcTarget, RpcTargetKind, TargetState},
        send_context::RpcSendContext,
        targets::{
            direct_send::DirectSendRpcTarget, local_send::LocalSendRpcTarget,
            proxy::ProxyRpcTarget,
        },
    },
    types::{NetworkDelivery, SERVER_CLIENT_ID},
};

#[derive(Debug)]
enum ServerRoute {
    Local(LocalSendRpcTarget),
    Direct(DirectSendRpcTarget),
}

/// Sends to the server, or to the object's authority when the session is
/// brokered by a distributed authority service
///
/// | topology                   | local peer    | delivery                        |
/// |----------------------------|---------------|---------------------------------|
/// | authority + session service | owner        | handler runs in-process         |
/// | authority + session service | not owner    | proxy to the current owner      |
/// | anything else              | server        | handler runs in-process         |
/// | anything else              | client        | direct send to `SERVER_CLIENT_ID` |
#[derive(Debug, Default)]
pub struct ServerRpcTarget {
    state: TargetState,
    route: Option<ServerRoute>,
    authority_proxy: Option<ProxyRpcTarget>,
}

impl ServerRpcTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcTarget for ServerRpcTarget {
    fn kind(&self) -> RpcTargetKind {
        RpcTargetKind::Server
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
        self.state.try_check_live(RpcTargetKind::Server)?;

        let session = context.session();
        if session.uses_authority_as_server() {
            if context.local_is_owner() {
                context.invoke_local(message, delivery);
                return Ok(());
            }

            let owner_client_id = context.object().owner_client_id();
            let proxy = self
                .authority_proxy
                .get_or_insert_with(|| ProxyRpcTarget::new(owner_client_id));
            proxy.set_client_id(owner_client_id);
            return proxy.send(context, message, delivery);
        }

        let route = self.route.get_or_insert_with(|| {
            if session.is_server() {
                debug!("server target resolved to local send");
                ServerRoute::Local(LocalSendRpcTarget::new())
            } else {
                debug!("server target resolved to direct send");
                ServerRoute::Direct(DirectSendRpcTarget::new(SERVER_CLIENT_ID))
            }
        });
        match route {
            ServerRoute::Local(target) => target.send(context, message, delivery),
            ServerRoute::Direct(target) => target.send(context, message, delivery),
        }
    }

    fn release(&mut self) {
        self.route = None;
        self.authority_proxy = None;
    }
}
