/// REGRESSION TEST: NotMe with a distributed authority session service
///
/// THE BUG: on a client, NotMe always finished with a send through its
/// ServerRpcTarget. With a session service that target means "the object's
/// authority", so:
/// - when the local peer owned the object, the handler ran locally, although
///   NotMe must never reach the local peer;
/// - when another peer owned it, that peer was already in the relayed group
///   and got the RPC a second time through the authority proxy.
///
/// THE FIX: NotMe keeps the owner in its group (unlike NotServer, which
/// leaves it out) and only makes the authority send for an owner that is
/// neither local nor already grouped.

use naia_rpc_shared::{
    ClientId, NetworkDelivery, RpcSendContext, RpcSendParams, RpcTargets, SendTo,
};
use naia_rpc_test::{
    assert_delivered_to, assert_no_duplicate_delivery, deliveries, init_logger, TestMessage,
    TestObject, TestSession, TestTransport,
};

fn dispatch_not_me(session: &TestSession, object: &TestObject) -> (TestTransport, TestMessage) {
    let mut transport = TestTransport::new();
    let mut message = TestMessage::new("broadcast");
    let mut targets = RpcTargets::default();

    {
        let mut context = RpcSendContext::new(session, object, &mut transport);
        targets
            .dispatch(
                SendTo::NotMe,
                &mut context,
                &mut message,
                NetworkDelivery::Reliable,
                RpcSendParams::default(),
            )
            .unwrap();
    }

    (transport, message)
}

#[test]
fn not_me_with_session_service_reaches_remote_owner_once() {
    init_logger();
    let session = TestSession::distributed_authority(3, &[1, 2, 3]);
    let object = TestObject::new(1, 2);

    let (transport, message) = dispatch_not_me(&session, &object);

    let proxied = transport.proxied();
    assert_eq!(proxied.len(), 1);
    assert_eq!(proxied[0].relayed_to, Some(vec![1, 2]));
    assert_eq!(message.handled_count(), 0);

    let delivered: Vec<ClientId> = deliveries(&transport, &message, session.local_client_id);
    assert_no_duplicate_delivery!(delivered);
    assert_delivered_to!(delivered, [1, 2]);
}

#[test]
fn not_me_with_session_service_skips_local_owner() {
    let session = TestSession::distributed_authority(3, &[1, 2, 3]);
    let object = TestObject::new(1, 3);

    let (transport, message) = dispatch_not_me(&session, &object);

    assert_eq!(message.handled_count(), 0);
    assert_eq!(transport.sent.len(), 1);
    assert_eq!(transport.sent[0].relayed_to, Some(vec![1, 2]));
}

#[test]
fn not_me_with_session_service_reaches_ungrouped_owner_through_authority() {
    let session = TestSession::distributed_authority(3, &[1, 2, 3]);
    let object = TestObject::new(1, 4);

    let (transport, message) = dispatch_not_me(&session, &object);

    let proxied = transport.proxied();
    assert_eq!(proxied.len(), 2);
    assert_eq!(proxied[0].relayed_to, Some(vec![1, 2]));
    assert_eq!(proxied[1].relayed_to, Some(vec![4]));
    assert_eq!(message.handled_count(), 0);
}

#[test]
fn not_server_with_session_service_skips_owner_unlike_not_me() {
    let session = TestSession::distributed_authority(3, &[1, 2, 3]);
    let object = TestObject::new(1, 2);
    let mut transport = TestTransport::new();
    let mut message = TestMessage::new("broadcast");
    let mut targets = RpcTargets::default();

    {
        let mut context = RpcSendContext::new(&session, &object, &mut transport);
        targets
            .dispatch(
                SendTo::NotServer,
                &mut context,
                &mut message,
                NetworkDelivery::Reliable,
                RpcSendParams::default(),
            )
            .unwrap();
    }

    let proxied = transport.proxied();
    assert_eq!(proxied.len(), 1);
    assert_eq!(proxied[0].relayed_to, Some(vec![1]));
    assert_eq!(message.handled_count(), 1);
}

#[test]
fn not_me_without_session_service_reaches_each_peer_once() {
    let session = TestSession::client(3, &[1, 2, 3]);
    let object = TestObject::new(1, 2);

    let (transport, message) = dispatch_not_me(&session, &object);

    let mut delivered = deliveries(&transport, &message, session.local_client_id);
    delivered.sort_unstable();
    assert_eq!(delivered, vec![0, 1, 2]);
}
