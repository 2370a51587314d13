use naia_rpc_shared::{ClientId, RpcMetrics};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedRpc {
    pub recipient: ClientId,
    pub network_object_id: u64,
    pub method_name: String,
    pub bytes: usize,
}

#[derive(Debug, Default)]
pub struct TestMetrics {
    pub tracked: Vec<TrackedRpc>,
}

impl TestMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RpcMetrics for TestMetrics {
    fn track_rpc_sent(
        &mut self,
        recipient: ClientId,
        network_object_id: u64,
        method_name: &str,
        bytes: usize,
    ) {
        self.tracked.push(TrackedRpc {
            recipient,
            network_object_id,
            method_name: method_name.to_string(),
            bytes,
        });
    }
}
