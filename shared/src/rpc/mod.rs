pub mod config;
pub mod error;
pub mod group_target;
pub mod individual_target;
pub mod network_session;
pub mod resolved_target;
pub mod rpc_message;
pub mod rpc_target;
pub mod rpc_targets;
pub mod send_context;
pub mod send_to;
pub mod targets;
pub mod transport;
