use crate::types::{ClientId, NetworkDelivery};

/// Describes where an RPC came from when it is handled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RpcReceiveContext {
    pub sender_client_id: ClientId,
    pub server_is_host: bool,
    pub delivery: NetworkDelivery,
}

/// An already serialized RPC invocation
///
/// The payload is opaque to this crate; all a target needs is a way to run the
/// handler in-process and a few facts to report to `RpcMetrics`.
pub trait RpcMessage {
    /// Runs the RPC body on this peer
    fn handle(&mut self, context: &RpcReceiveContext);

    fn method_name(&self) -> &str;

    /// Serialized size of the payload, in bytes
    fn byte_len(&self) -> usize;
}
