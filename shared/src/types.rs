pub type ClientId = u64;

/// Reserved id of the server peer in client-server topology
pub const SERVER_CLIENT_ID: ClientId = 0;

/// Delivery guarantee requested from the transport for a single send
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NetworkDelivery {
    Unreliable,
    UnreliableSequenced,
    #[default]
    Reliable,
    ReliableSequenced,
    ReliableFragmentedSequenced,
}

/// Whether a resolved target is borrowed from the pool or handed to the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RpcTargetUse {
    /// Reuses one of the `RpcTargets` scratch targets. The result is only
    /// valid until the next resolution call and must not be disposed.
    Temp,
    /// Allocates a fresh target which the caller owns and must dispose.
    Persistent,
}
