use crate::types::ClientId;

/// Read-only view of the local session that targets resolve recipients from
pub trait NetworkSession {
    /// Id of the local peer
    fn local_client_id(&self) -> ClientId;

    /// Whether the local peer is the server (dedicated or host)
    fn is_server(&self) -> bool;

    /// Whether the server is also a player. Known to clients as well.
    fn server_is_host(&self) -> bool;

    /// Whether the local peer is the server and also a player
    fn is_host(&self) -> bool {
        self.is_server() && self.server_is_host()
    }

    /// Ids of every connected client. When the server is a host, its own id
    /// appears here too.
    fn connected_client_ids(&self) -> &[ClientId];

    fn distributed_authority_mode(&self) -> bool;

    fn connected_to_session_service(&self) -> bool;

    /// Whether "the server" means the authority of the object being targeted,
    /// rather than `SERVER_CLIENT_ID`
    fn uses_authority_as_server(&self) -> bool {
        self.distributed_authority_mode() && self.connected_to_session_service()
    }
}

/// Read-only view of the networked object an RPC is sent on behalf of
pub trait NetworkObjectView {
    fn network_object_id(&self) -> u64;

    /// Current owner, which is also the authority in distributed authority mode
    fn owner_client_id(&self) -> ClientId;

    /// Whether `client_id` holds authority over this object
    fn has_authority(&self, client_id: ClientId) -> bool {
        self.owner_client_id() == client_id
    }

    /// Peers currently replicating this object
    fn observers(&self) -> &[ClientId];
}
