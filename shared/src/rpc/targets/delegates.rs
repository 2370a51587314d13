use log::debug;

use crate::{
    rpc::{
        group_target::GroupRpcTarget,
        individual_target::IndividualRpcTarget,
        targets::{
            direct_send::DirectSendRpcTarget, direct_send_group::DirectSendRpcTargetGroup,
            proxy::ProxyRpcTarget, proxy_group::ProxyRpcTargetGroup,
        },
    },
    types::ClientId,
};

/// Group delegate of a composite target, picked once from the local role
#[derive(Debug)]
pub(crate) enum GroupDelegate {
    Direct(DirectSendRpcTargetGroup),
    Proxy(ProxyRpcTargetGroup),
}

impl GroupDelegate {
    pub(crate) fn for_role(is_server: bool) -> Self {
        if is_server {
            debug!("building direct send group delegate");
            GroupDelegate::Direct(DirectSendRpcTargetGroup::new())
        } else {
            debug!("building proxy group delegate");
            GroupDelegate::Proxy(ProxyRpcTargetGroup::new())
        }
    }

    pub(crate) fn group_mut(&mut self) -> &mut dyn GroupRpcTarget {
        match self {
            GroupDelegate::Direct(group) => group,
            GroupDelegate::Proxy(group) => group,
        }
    }
}

/// Single-recipient delegate of a composite target, picked once from the
/// local role and retargeted on every send
#[derive(Debug)]
pub(crate) enum IndividualDelegate {
    Direct(DirectSendRpcTarget),
    Proxy(ProxyRpcTarget),
}

impl IndividualDelegate {
    pub(crate) fn for_role(is_server: bool, client_id: ClientId) -> Self {
        if is_server {
            IndividualDelegate::Direct(DirectSendRpcTarget::new(client_id))
        } else {
            IndividualDelegate::Proxy(ProxyRpcTarget::new(client_id))
        }
    }

    pub(crate) fn individual_mut(&mut self) -> &mut dyn IndividualRpcTarget {
        match self {
            IndividualDelegate::Direct(target) => target,
            IndividualDelegate::Proxy(target) => target,
        }
    }
}
