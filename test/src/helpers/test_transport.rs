use naia_rpc_shared::{ClientId, MessageTransport, NetworkDelivery, OutgoingRpc};

/// Bytes a proxy message adds per relayed recipient
pub const PROXY_HEADER_BYTES_PER_TARGET: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentRpc {
    pub recipient: ClientId,
    pub delivery: NetworkDelivery,
    pub method_name: String,
    /// Set for proxy messages: the ids the server relays to
    pub relayed_to: Option<Vec<ClientId>>,
}

impl SentRpc {
    pub fn is_proxy(&self) -> bool {
        self.relayed_to.is_some()
    }
}

/// Transport that only records what it is asked to send
#[derive(Debug, Default)]
pub struct TestTransport {
    pub sent: Vec<SentRpc>,
}

impl TestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direct_recipients(&self) -> Vec<ClientId> {
        self.sent
            .iter()
            .filter(|sent| !sent.is_proxy())
            .map(|sent| sent.recipient)
            .collect()
    }

    pub fn proxied(&self) -> Vec<&SentRpc> {
        self.sent.iter().filter(|sent| sent.is_proxy()).collect()
    }
}

impl MessageTransport for TestTransport {
    fn send_message(
        &mut self,
        message: OutgoingRpc<'_>,
        delivery: NetworkDelivery,
        recipient: ClientId,
    ) -> usize {
        let rpc = message.message();
        let (relayed_to, bytes) = match message {
            OutgoingRpc::Direct(_) => (None, rpc.byte_len()),
            OutgoingRpc::Proxy {
                target_client_ids, ..
            } => (
                Some(target_client_ids.to_vec()),
                rpc.byte_len() + PROXY_HEADER_BYTES_PER_TARGET * target_client_ids.len(),
            ),
        };
        self.sent.push(SentRpc {
            recipient,
            delivery,
            method_name: rpc.method_name().to_string(),
            relayed_to,
        });
        bytes
    }
}
