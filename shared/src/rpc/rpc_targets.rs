use std::collections::HashSet;

use log::debug;

use crate::{
    rpc::{
        config::RpcTargetsConfig,
        error::RpcTargetError,
        group_target::GroupRpcTarget,
        individual_target::IndividualRpcTarget,
        network_session::NetworkSession,
        resolved_target::{OwnedRpcTarget, PooledRpcTarget, ResolvedRpcTarget},
        rpc_message::RpcMessage,
        rpc_target::RpcTarget,
        send_context::RpcSendContext,
        send_to::SendTo,
        targets::{
            clients_and_host::ClientsAndHostRpcTarget, direct_send::DirectSendRpcTarget,
            direct_send_group::DirectSendRpcTargetGroup, everyone::EveryoneRpcTarget,
            local_send::LocalSendRpcTarget, not_me::NotMeRpcTarget,
            not_owner::NotOwnerRpcTarget, not_server::NotServerRpcTarget,
            owner::OwnerRpcTarget, proxy::ProxyRpcTarget, proxy_group::ProxyRpcTargetGroup,
            server::ServerRpcTarget,
        },
    },
    types::{ClientId, NetworkDelivery, RpcTargetUse, SERVER_CLIENT_ID},
};

/// Per-call parameters of a dispatched RPC
#[derive(Default)]
pub struct RpcSendParams<'t> {
    /// Recipients for `SendTo::SpecifiedInParams`
    pub target: Option<&'t mut dyn RpcTarget>,
}

impl<'t> RpcSendParams<'t> {
    pub fn with_target(target: &'t mut dyn RpcTarget) -> Self {
        Self {
            target: Some(target),
        }
    }
}

/// Resolves RPC recipients for one session
///
/// Holds one target per `SendTo` policy, plus scratch targets that ad hoc
/// resolution (`single`, `not`, `not_any`, `group`) rewrites in place when
/// called with `RpcTargetUse::Temp`. Every target held here is locked, so
/// nothing but `RpcTargets::dispose` can dispose it.
#[cfg_attr(feature = "bevy_support", derive(bevy_ecs::prelude::Resource))]
pub struct RpcTargets {
    config: RpcTargetsConfig,
    // Policies
    owner: OwnerRpcTarget,
    not_owner: NotOwnerRpcTarget,
    server: ServerRpcTarget,
    not_server: NotServerRpcTarget,
    me: LocalSendRpcTarget,
    not_me: NotMeRpcTarget,
    everyone: EveryoneRpcTarget,
    clients_and_host: ClientsAndHostRpcTarget,
    // Scratch
    cached_direct_send_group: DirectSendRpcTargetGroup,
    cached_proxy_group: ProxyRpcTargetGroup,
    cached_direct_send: DirectSendRpcTarget,
    cached_proxy: ProxyRpcTarget,
    excluded_ids: HashSet<ClientId>,
}

impl RpcTargets {
    pub fn new(config: RpcTargetsConfig) -> Self {
        let group_capacity = config.group_capacity;
        let mut targets = Self {
            config,
            owner: OwnerRpcTarget::new(),
            not_owner: NotOwnerRpcTarget::new(),
            server: ServerRpcTarget::new(),
            not_server: NotServerRpcTarget::new(),
            me: LocalSendRpcTarget::new(),
            not_me: NotMeRpcTarget::new(),
            everyone: EveryoneRpcTarget::new(),
            clients_and_host: ClientsAndHostRpcTarget::new(),
            cached_direct_send_group: DirectSendRpcTargetGroup::with_capacity(group_capacity),
            cached_proxy_group: ProxyRpcTargetGroup::with_capacity(group_capacity),
            cached_direct_send: DirectSendRpcTarget::new(SERVER_CLIENT_ID),
            cached_proxy: ProxyRpcTarget::new(SERVER_CLIENT_ID),
            excluded_ids: HashSet::with_capacity(group_capacity),
        };

        for target in targets.owned_targets_mut() {
            target.state_mut().lock();
        }
        debug!(
            "rpc targets ready, pooled groups hold {} recipients",
            group_capacity
        );

        targets
    }

    pub fn config(&self) -> &RpcTargetsConfig {
        &self.config
    }

    /// Unlocks and disposes every target held by the session
    pub fn dispose(mut self) -> Result<(), RpcTargetError> {
        for target in self.owned_targets_mut() {
            target.state_mut().unlock();
            target.dispose()?;
        }
        debug!("rpc targets disposed");
        Ok(())
    }

    fn owned_targets_mut(&mut self) -> [&mut dyn RpcTarget; 12] {
        [
            &mut self.owner,
            &mut self.not_owner,
            &mut self.server,
            &mut self.not_server,
            &mut self.me,
            &mut self.not_me,
            &mut self.everyone,
            &mut self.clients_and_host,
            &mut self.cached_direct_send_group,
            &mut self.cached_proxy_group,
            &mut self.cached_direct_send,
            &mut self.cached_proxy,
        ]
    }

    // Policies

    pub fn owner(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.owner)
    }

    pub fn not_owner(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.not_owner)
    }

    pub fn server(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.server)
    }

    pub fn not_server(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.not_server)
    }

    pub fn me(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.me)
    }

    pub fn not_me(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.not_me)
    }

    pub fn everyone(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.everyone)
    }

    pub fn clients_and_host(&mut self) -> PooledRpcTarget<'_> {
        PooledRpcTarget::new(&mut self.clients_and_host)
    }

    /// Returns the target held for `send_to`. `SendTo::SpecifiedInParams` has
    /// no such target, its recipients come with the call.
    pub fn resolve(&mut self, send_to: SendTo) -> Result<PooledRpcTarget<'_>, RpcTargetError> {
        let target = match send_to {
            SendTo::Owner => self.owner(),
            SendTo::NotOwner => self.not_owner(),
            SendTo::Server => self.server(),
            SendTo::NotServer => self.not_server(),
            SendTo::Me => self.me(),
            SendTo::NotMe => self.not_me(),
            SendTo::Everyone => self.everyone(),
            SendTo::ClientsAndHost => self.clients_and_host(),
            SendTo::SpecifiedInParams => return Err(RpcTargetError::MissingSpecifiedTarget),
        };
        Ok(target)
    }

    /// Sends `message` to the recipients of `send_to`
    pub fn dispatch(
        &mut self,
        send_to: SendTo,
        context: &mut RpcSendContext<'_>,
        message: &mut dyn RpcMessage,
        delivery: NetworkDelivery,
        params: RpcSendParams<'_>,
    ) -> Result<(), RpcTargetError> {
        context.set_track_metrics(self.config.track_metrics);

        if send_to.requires_params() {
            let target = params
                .target
                .ok_or(RpcTargetError::MissingSpecifiedTarget)?;
            return target.send(context, message, delivery);
        }

        self.resolve(send_to)?.send(context, message, delivery)
    }

    // Ad hoc

    /// Targets one peer. The local peer resolves to `me` whatever `target_use`
    /// says, since no network send is involved.
    pub fn single(
        &mut self,
        session: &dyn NetworkSession,
        client_id: ClientId,
        target_use: RpcTargetUse,
    ) -> ResolvedRpcTarget<'_> {
        if client_id == session.local_client_id() {
            return ResolvedRpcTarget::Pooled(self.me());
        }

        // only the server is connected to every peer
        if session.is_server() || client_id == SERVER_CLIENT_ID {
            return match target_use {
                RpcTargetUse::Persistent => ResolvedRpcTarget::Owned(OwnedRpcTarget::new(
                    Box::new(DirectSendRpcTarget::new(client_id)),
                )),
                RpcTargetUse::Temp => {
                    self.cached_direct_send.set_client_id(client_id);
                    ResolvedRpcTarget::Pooled(PooledRpcTarget::new(
                        self.cached_direct_send.target(),
                    ))
                }
            };
        }

        match target_use {
            RpcTargetUse::Persistent => ResolvedRpcTarget::Owned(OwnedRpcTarget::new(Box::new(
                ProxyRpcTarget::new(client_id),
            ))),
            RpcTargetUse::Temp => {
                self.cached_proxy.set_client_id(client_id);
                ResolvedRpcTarget::Pooled(PooledRpcTarget::new(self.cached_proxy.target()))
            }
        }
    }

    /// Targets every connected peer, and the server, except `excluded_client_id`
    pub fn not(
        &mut self,
        session: &dyn NetworkSession,
        excluded_client_id: ClientId,
        target_use: RpcTargetUse,
    ) -> ResolvedRpcTarget<'_> {
        Self::resolve_group(
            &mut self.cached_direct_send_group,
            &mut self.cached_proxy_group,
            session,
            target_use,
            |group| add_all_except(group, session, |client_id| client_id == excluded_client_id),
        )
    }

    /// Targets every connected peer, and the server, except those in
    /// `excluded_client_ids`
    pub fn not_any<I: IntoIterator<Item = ClientId>>(
        &mut self,
        session: &dyn NetworkSession,
        excluded_client_ids: I,
        target_use: RpcTargetUse,
    ) -> ResolvedRpcTarget<'_> {
        self.excluded_ids.clear();
        self.excluded_ids.extend(excluded_client_ids);

        let excluded_ids = &self.excluded_ids;
        Self::resolve_group(
            &mut self.cached_direct_send_group,
            &mut self.cached_proxy_group,
            session,
            target_use,
            |group| add_all_except(group, session, |client_id| excluded_ids.contains(&client_id)),
        )
    }

    /// Targets exactly the peers in `client_ids`
    pub fn group<I: IntoIterator<Item = ClientId>>(
        &mut self,
        session: &dyn NetworkSession,
        client_ids: I,
        target_use: RpcTargetUse,
    ) -> ResolvedRpcTarget<'_> {
        Self::resolve_group(
            &mut self.cached_direct_send_group,
            &mut self.cached_proxy_group,
            session,
            target_use,
            |group| {
                for client_id in client_ids {
                    group.add(client_id);
                }
            },
        )
    }

    fn resolve_group<'a, F: FnOnce(&mut dyn GroupRpcTarget)>(
        cached_direct_send_group: &'a mut DirectSendRpcTargetGroup,
        cached_proxy_group: &'a mut ProxyRpcTargetGroup,
        session: &dyn NetworkSession,
        target_use: RpcTargetUse,
        fill: F,
    ) -> ResolvedRpcTarget<'a> {
        match (session.is_server(), target_use) {
            (true, RpcTargetUse::Temp) => {
                cached_direct_send_group.clear();
                fill(&mut *cached_direct_send_group);
                ResolvedRpcTarget::Pooled(PooledRpcTarget::new(cached_direct_send_group.target()))
            }
            (false, RpcTargetUse::Temp) => {
                cached_proxy_group.clear();
                fill(&mut *cached_proxy_group);
                ResolvedRpcTarget::Pooled(PooledRpcTarget::new(cached_proxy_group.target()))
            }
            (true, RpcTargetUse::Persistent) => {
                let mut group = DirectSendRpcTargetGroup::new();
                fill(&mut group);
                ResolvedRpcTarget::Owned(OwnedRpcTarget::new(Box::new(group)))
            }
            (false, RpcTargetUse::Persistent) => {
                let mut group = ProxyRpcTargetGroup::new();
                fill(&mut group);
                ResolvedRpcTarget::Owned(OwnedRpcTarget::new(Box::new(group)))
            }
        }
    }
}

impl Default for RpcTargets {
    fn default() -> Self {
        Self::new(RpcTargetsConfig::default())
    }
}

fn add_all_except(
    group: &mut dyn GroupRpcTarget,
    session: &dyn NetworkSession,
    is_excluded: impl Fn(ClientId) -> bool,
) {
    for client_id in session.connected_client_ids() {
        if !is_excluded(*client_id) {
            group.add(*client_id);
        }
    }

    // a host server is already among the connected ids
    if !session.server_is_host() && !is_excluded(SERVER_CLIENT_ID) {
        group.add(SERVER_CLIENT_ID);
    }
}
