pub mod clients_and_host;
pub mod direct_send;
pub mod direct_send_group;
pub mod everyone;
pub mod local_send;
pub mod not_me;
pub mod not_owner;
pub mod not_server;
pub mod owner;
pub mod proxy;
pub mod proxy_group;
pub mod server;

mod delegates;
mod recipient_list;
