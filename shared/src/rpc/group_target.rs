use crate::{rpc::rpc_target::RpcTarget, types::ClientId};

/// A target addressed to an explicit set of peers, rebuilt before each use
pub trait GroupRpcTarget: RpcTarget {
    /// Removes every member, keeping allocated capacity
    fn clear(&mut self);

    /// Adds `client_id` unless it is already a member
    fn add(&mut self, client_id: ClientId);

    fn remove(&mut self, client_id: ClientId);

    fn contains(&self, client_id: ClientId) -> bool;

    /// Members in insertion order
    fn ids(&self) -> &[ClientId];

    fn len(&self) -> usize {
        self.ids().len()
    }

    fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    fn target(&mut self) -> &mut dyn RpcTarget;
}
