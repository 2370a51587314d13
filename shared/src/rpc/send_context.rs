use log::trace;

use crate::{
    rpc::{
        network_session::{NetworkObjectView, NetworkSession},
        rpc_message::{RpcMessage, RpcReceiveContext},
        transport::{MessageTransport, OutgoingRpc, RpcMetrics},
    },
    types::{ClientId, NetworkDelivery, SERVER_CLIENT_ID},
};

/// Everything a target needs to deliver one RPC
///
/// Targets do not keep references to the session: it owns `RpcTargets`, so
/// the collaborators are lent to each `send` call instead.
pub struct RpcSendContext<'a> {
    session: &'a dyn NetworkSession,
    object: &'a dyn NetworkObjectView,
    transport: &'a mut dyn MessageTransport,
    metrics: Option<&'a mut dyn RpcMetrics>,
    track_metrics: bool,
}

impl<'a> RpcSendContext<'a> {
    pub fn new(
        session: &'a dyn NetworkSession,
        object: &'a dyn NetworkObjectView,
        transport: &'a mut dyn MessageTransport,
    ) -> Self {
        Self {
            session,
            object,
            transport,
            metrics: None,
            track_metrics: true,
        }
    }

    pub fn with_metrics(mut self, metrics: &'a mut dyn RpcMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn session(&self) -> &'a dyn NetworkSession {
        self.session
    }

    pub fn object(&self) -> &'a dyn NetworkObjectView {
        self.object
    }

    pub fn local_client_id(&self) -> ClientId {
        self.session.local_client_id()
    }

    pub fn local_is_owner(&self) -> bool {
        self.object.has_authority(self.session.local_client_id())
    }

    pub(crate) fn set_track_metrics(&mut self, track_metrics: bool) {
        self.track_metrics = track_metrics;
    }

    /// Sends `message` straight to `recipient`
    pub(crate) fn send_direct(
        &mut self,
        message: &dyn RpcMessage,
        delivery: NetworkDelivery,
        recipient: ClientId,
    ) {
        trace!(
            "sending rpc {} directly to client {}",
            message.method_name(),
            recipient
        );
        let bytes = self
            .transport
            .send_message(OutgoingRpc::Direct(message), delivery, recipient);
        self.track_rpc_sent(recipient, message, bytes);
    }

    /// Sends `message` to the server, which relays it to `target_client_ids`
    pub(crate) fn send_proxy(
        &mut self,
        message: &dyn RpcMessage,
        delivery: NetworkDelivery,
        target_client_ids: &[ClientId],
    ) {
        trace!(
            "sending rpc {} through server to clients {:?}",
            message.method_name(),
            target_client_ids
        );
        let bytes = self.transport.send_message(
            OutgoingRpc::Proxy {
                target_client_ids,
                message,
            },
            delivery,
            SERVER_CLIENT_ID,
        );
        for client_id in target_client_ids {
            self.track_rpc_sent(*client_id, message, bytes);
        }
    }

    /// Runs the handler of `message` synchronously on this peer
    pub(crate) fn invoke_local(&mut self, message: &mut dyn RpcMessage, delivery: NetworkDelivery) {
        let local_client_id = self.session.local_client_id();
        trace!(
            "invoking rpc {} locally on client {}",
            message.method_name(),
            local_client_id
        );
        let receive_context = RpcReceiveContext {
            sender_client_id: local_client_id,
            server_is_host: self.session.server_is_host(),
            delivery,
        };
        message.handle(&receive_context);
        let bytes = message.byte_len();
        self.track_rpc_sent(local_client_id, &*message, bytes);
    }

    fn track_rpc_sent(&mut self, recipient: ClientId, message: &dyn RpcMessage, bytes: usize) {
        if !self.track_metrics {
            return;
        }
        let network_object_id = self.object.network_object_id();
        if let Some(metrics) = self.metrics.as_mut() {
            metrics.track_rpc_sent(recipient, network_object_id, message.method_name(), bytes);
        }
    }
}
