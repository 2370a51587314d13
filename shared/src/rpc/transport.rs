use crate::{
    rpc::rpc_message::RpcMessage,
    types::{ClientId, NetworkDelivery},
};

/// An RPC on its way to the transport
pub enum OutgoingRpc<'a> {
    /// Delivered to the recipient as is
    Direct(&'a dyn RpcMessage),
    /// Sent to the server, which forwards the wrapped message to every id in
    /// `target_client_ids`
    Proxy {
        target_client_ids: &'a [ClientId],
        message: &'a dyn RpcMessage,
    },
}

impl<'a> OutgoingRpc<'a> {
    pub fn message(&self) -> &'a dyn RpcMessage {
        match self {
            OutgoingRpc::Direct(message) => *message,
            OutgoingRpc::Proxy { message, .. } => *message,
        }
    }

    pub fn is_proxy(&self) -> bool {
        matches!(self, OutgoingRpc::Proxy { .. })
    }
}

/// Hands messages to the connection layer
pub trait MessageTransport {
    /// Queues `message` for `recipient`, returning the number of bytes written
    fn send_message(
        &mut self,
        message: OutgoingRpc<'_>,
        delivery: NetworkDelivery,
        recipient: ClientId,
    ) -> usize;
}

/// Receives a report for every RPC that leaves (or loops back into) this peer
pub trait RpcMetrics {
    fn track_rpc_sent(
        &mut self,
        recipient: ClientId,
        network_object_id: u64,
        method_name: &str,
        bytes: usize,
    );
}
