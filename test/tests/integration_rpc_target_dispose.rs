//! Ownership of resolved targets: pooled targets refuse disposal, owned
//! targets are disposed exactly once.

use naia_rpc_shared::{
    NetworkDelivery, ResolvedRpcTarget, RpcSendContext, RpcTargetError, RpcTargetKind,
    RpcTargetUse, RpcTargets, SendTo,
};
use naia_rpc_test::{init_logger, TestMessage, TestObject, TestSession, TestTransport};

#[test]
fn temp_single_cannot_be_disposed() {
    init_logger();
    let session = TestSession::dedicated_server(&[5]);
    let mut targets = RpcTargets::default();

    let result = targets.single(&session, 5, RpcTargetUse::Temp).dispose();

    assert_eq!(
        result,
        Err(RpcTargetError::LockViolation {
            target: RpcTargetKind::DirectSend
        })
    );
}

#[test]
fn temp_single_proxy_cannot_be_disposed() {
    let session = TestSession::client(2, &[1, 2, 3]);
    let mut targets = RpcTargets::default();

    let result = targets.single(&session, 3, RpcTargetUse::Temp).dispose();

    assert_eq!(
        result,
        Err(RpcTargetError::LockViolation {
            target: RpcTargetKind::Proxy
        })
    );
}

#[test]
fn temp_groups_cannot_be_disposed() {
    let mut targets = RpcTargets::default();

    let server = TestSession::dedicated_server(&[1, 2]);
    assert_eq!(
        targets.not(&server, 1, RpcTargetUse::Temp).dispose(),
        Err(RpcTargetError::LockViolation {
            target: RpcTargetKind::DirectSendGroup
        })
    );

    let client = TestSession::client(2, &[1, 2]);
    assert_eq!(
        targets.group(&client, [1], RpcTargetUse::Temp).dispose(),
        Err(RpcTargetError::LockViolation {
            target: RpcTargetKind::ProxyGroup
        })
    );
}

#[test]
fn policy_targets_cannot_be_disposed() {
    let mut targets = RpcTargets::default();

    for send_to in SendTo::ALL {
        if send_to.requires_params() {
            continue;
        }
        let pooled = targets.resolve(send_to).unwrap();
        let kind = pooled.kind();
        let result = ResolvedRpcTarget::Pooled(pooled).dispose();
        assert_eq!(
            result,
            Err(RpcTargetError::LockViolation { target: kind }),
            "{:?} should be locked",
            send_to
        );
    }
}

#[test]
fn persistent_single_to_self_is_still_pooled() {
    let session = TestSession::client(2, &[1, 2]);
    let mut targets = RpcTargets::default();

    let target = targets.single(&session, 2, RpcTargetUse::Persistent);
    assert!(target.is_pooled());

    assert_eq!(
        target.dispose(),
        Err(RpcTargetError::LockViolation {
            target: RpcTargetKind::LocalSend
        })
    );
}

#[test]
fn persistent_targets_dispose_once() {
    let session = TestSession::client(2, &[1, 2, 3]);
    let mut targets = RpcTargets::default();

    let single = targets.single(&session, 3, RpcTargetUse::Persistent);
    assert!(!single.is_pooled());
    assert_eq!(single.dispose(), Ok(()));

    let group = targets.not(&session, 1, RpcTargetUse::Persistent);
    assert_eq!(group.dispose(), Ok(()));
}

#[test]
fn second_dispose_reports_already_disposed() {
    let session = TestSession::dedicated_server(&[1, 2]);
    let mut targets = RpcTargets::default();
    let mut owned = targets
        .group(&session, [1, 2], RpcTargetUse::Persistent)
        .into_owned()
        .unwrap();

    assert_eq!(owned.target_mut().dispose(), Ok(()));
    assert!(owned.target().is_disposed());
    assert_eq!(
        owned.target_mut().dispose(),
        Err(RpcTargetError::AlreadyDisposed {
            target: RpcTargetKind::DirectSendGroup
        })
    );
    assert_eq!(
        owned.dispose(),
        Err(RpcTargetError::AlreadyDisposed {
            target: RpcTargetKind::DirectSendGroup
        })
    );
}

#[test]
fn send_after_dispose_fails_without_sending() {
    let session = TestSession::dedicated_server(&[1, 2]);
    let object = TestObject::new(1, 1);
    let mut transport = TestTransport::new();
    let mut message = TestMessage::new("late");
    let mut targets = RpcTargets::default();
    let mut owned = targets
        .single(&session, 1, RpcTargetUse::Persistent)
        .into_owned()
        .unwrap();
    owned.target_mut().dispose().unwrap();

    let result = {
        let mut context = RpcSendContext::new(&session, &object, &mut transport);
        owned.send(&mut context, &mut message, NetworkDelivery::Reliable)
    };

    assert_eq!(
        result,
        Err(RpcTargetError::TargetDisposed {
            target: RpcTargetKind::DirectSend
        })
    );
    assert!(transport.sent.is_empty());
}

#[test]
fn pooled_target_survives_failed_dispose() {
    let session = TestSession::dedicated_server(&[5]);
    let object = TestObject::new(1, 5);
    let mut transport = TestTransport::new();
    let mut message = TestMessage::new("retry");
    let mut targets = RpcTargets::default();

    assert!(targets
        .single(&session, 5, RpcTargetUse::Temp)
        .dispose()
        .is_err());

    {
        let mut context = RpcSendContext::new(&session, &object, &mut transport);
        targets
            .single(&session, 5, RpcTargetUse::Temp)
            .send(&mut context, &mut message, NetworkDelivery::Reliable)
            .unwrap();
    }

    assert_eq!(transport.direct_recipients(), vec![5]);
}

#[test]
fn disposing_rpc_targets_releases_every_target() {
    let session = TestSession::client(2, &[1, 2, 3]);
    let object = TestObject::new(1, 3);
    let mut transport = TestTransport::new();
    let mut message = TestMessage::new("warmup");
    let mut targets = RpcTargets::default();

    // build the lazy delegates before tearing down
    {
        let mut context = RpcSendContext::new(&session, &object, &mut transport);
        for send_to in [SendTo::Owner, SendTo::NotMe, SendTo::Everyone] {
            targets
                .resolve(send_to)
                .unwrap()
                .send(&mut context, &mut message, NetworkDelivery::Reliable)
                .unwrap();
        }
    }

    assert_eq!(targets.dispose(), Ok(()));
}
