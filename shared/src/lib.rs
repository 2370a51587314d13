//! # Naia RPC Shared
//! Resolves the recipients of remote procedure calls and dispatches them,
//! shared between naia-server & naia-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod rpc;
mod types;

pub use rpc::{
    config::RpcTargetsConfig,
    error::RpcTargetError,
    group_target::GroupRpcTarget,
    individual_target::IndividualRpcTarget,
    network_session::{NetworkObjectView, NetworkSession},
    resolved_target::{OwnedRpcTarget, PooledRpcTarget, ResolvedRpcTarget},
    rpc_message::{RpcMessage, RpcReceiveContext},
    rpc_target::{RpcTarget, RpcTargetKind, TargetState},
    rpc_targets::{RpcSendParams, RpcTargets},
    send_context::RpcSendContext,
    send_to::SendTo,
    targets::{
        clients_and_host::ClientsAndHostRpcTarget, direct_send::DirectSendRpcTarget,
        direct_send_group::DirectSendRpcTargetGroup, everyone::EveryoneRpcTarget,
        local_send::LocalSendRpcTarget, not_me::NotMeRpcTarget, not_owner::NotOwnerRpcTarget,
        not_server::NotServerRpcTarget, owner::OwnerRpcTarget, proxy::ProxyRpcTarget,
        proxy_group::ProxyRpcTargetGroup, server::ServerRpcTarget,
    },
    transport::{MessageTransport, OutgoingRpc, RpcMetrics},
};
pub use types::{ClientId, NetworkDelivery, RpcTargetUse, SERVER_CLIENT_ID};
