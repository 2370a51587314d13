/// Declarative recipient policy attached to an RPC
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SendTo {
    /// The current owner of the object
    Owner,
    /// Everyone observing the object, except its owner
    NotOwner,
    /// The server, or the object's authority when connected to a session service
    Server,
    /// Everyone except the server / authority
    NotServer,
    /// Only the local peer, invoked in-process
    Me,
    /// Everyone except the local peer
    NotMe,
    /// Every peer, including the server and the local peer
    Everyone,
    /// Every client, plus the server only when it is also a host
    ClientsAndHost,
    /// The target is supplied at the call site through `RpcSendParams`
    SpecifiedInParams,
}

impl SendTo {
    pub const ALL: [SendTo; 9] = [
        SendTo::Owner,
        SendTo::NotOwner,
        SendTo::Server,
        SendTo::NotServer,
        SendTo::Me,
        SendTo::NotMe,
        SendTo::Everyone,
        SendTo::ClientsAndHost,
        SendTo::SpecifiedInParams,
    ];

    pub fn requires_params(&self) -> bool {
        matches!(self, SendTo::SpecifiedInParams)
    }
}
