use crate::{rpc::rpc_target::RpcTarget, types::ClientId};

/// A target addressed to exactly one remote peer, retargetable in place
pub trait IndividualRpcTarget: RpcTarget {
    fn client_id(&self) -> ClientId;

    fn set_client_id(&mut self, client_id: ClientId);

    fn target(&mut self) -> &mut dyn RpcTarget;
}
