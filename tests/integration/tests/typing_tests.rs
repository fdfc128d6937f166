//! Typing indicator integration tests
//!
//! Timing-sensitive scenarios run on a paused tokio clock so the two second
//! quiet period elapses deterministically.
//!
//! Run with: cargo test -p integration-tests --test typing_tests

use std::time::Duration;

use integration_tests::{advance_ms, build_table, unique_table_id, SeatSpec, TestGateway};
use table_core::{TableId, TableRegistry, UserId};

fn alice_and_bob() -> [SeatSpec<'static>; 2] {
    [SeatSpec::Player(1, "Alice"), SeatSpec::Player(2, "Bob")]
}

// ============================================================================
// Debounce Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_keystroke_burst_single_start_single_stop() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    let table = build_table(gateway.state.tables(), id, false, &alice_and_bob());
    let alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");

    // t = 0.0s, 0.5s, 1.0s
    alice.type_at(id).await.unwrap();
    advance_ms(500).await;
    alice.type_at(id).await.unwrap();
    advance_ms(500).await;
    alice.type_at(id).await.unwrap();

    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), true)]);

    // Checks armed at 0.0s and 0.5s fire at 2.0s and 2.5s without effect.
    advance_ms(1900).await;
    assert!(bob.typing_events().is_empty());
    assert!(table.lock().players[0].typing);

    // The check armed at 1.0s fires at 3.0s.
    advance_ms(200).await;
    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), false)]);
    assert!(!table.lock().players[0].typing);

    advance_ms(5000).await;
    assert!(bob.typing_events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_refresh_just_before_deadline_postpones_stop() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    build_table(gateway.state.tables(), id, false, &alice_and_bob());
    let alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");

    alice.type_at(id).await.unwrap();
    advance_ms(1999).await;
    alice.type_at(id).await.unwrap();

    // Nothing before (t + D - e) + D
    advance_ms(1998).await;
    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), true)]);

    advance_ms(10).await;
    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), false)]);
}

#[tokio::test(start_paused = true)]
async fn test_two_typers_are_independent() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    build_table(
        gateway.state.tables(),
        id,
        false,
        &[
            SeatSpec::Player(1, "Alice"),
            SeatSpec::Player(2, "Bob"),
            SeatSpec::Spectator(3, "Carol"),
        ],
    );
    let alice = gateway.connect(1, "Alice");
    let bob = gateway.connect(2, "Bob");
    let mut carol = gateway.connect(3, "Carol");

    alice.type_at(id).await.unwrap();
    advance_ms(1000).await;
    bob.type_at(id).await.unwrap();

    advance_ms(1100).await;
    assert_eq!(
        carol.typing_events(),
        vec![
            ("Alice".to_string(), true),
            ("Bob".to_string(), true),
            ("Alice".to_string(), false),
        ]
    );

    advance_ms(1000).await;
    assert_eq!(carol.typing_events(), vec![("Bob".to_string(), false)]);
}

#[tokio::test(start_paused = true)]
async fn test_tables_do_not_interfere() {
    let gateway = TestGateway::start();
    let first = unique_table_id();
    let second = unique_table_id();
    let table_a = build_table(gateway.state.tables(), first, false, &alice_and_bob());
    let table_b = build_table(gateway.state.tables(), second, false, &alice_and_bob());
    let alice = gateway.connect(1, "Alice");

    alice.type_at(first).await.unwrap();
    advance_ms(1500).await;
    alice.type_at(second).await.unwrap();

    advance_ms(600).await;
    assert!(!table_a.lock().players[0].typing);
    assert!(table_b.lock().players[0].typing);
}

// ============================================================================
// Eligibility Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_outsider_gets_warning_and_no_broadcast() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    let table = build_table(gateway.state.tables(), id, false, &alice_and_bob());
    let mut mallory = gateway.connect(9, "Mallory");
    let mut bob = gateway.connect(2, "Bob");

    mallory.type_at(id).await.unwrap();

    assert_eq!(
        mallory.warnings(),
        vec![format!(
            "You are not playing or spectating at table {id}, so you cannot report that you are typing."
        )]
    );
    assert!(bob.typing_events().is_empty());
    assert!(table.lock().typing_names().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_replay_player_without_spectator_seat_rejected() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    let table = build_table(
        gateway.state.tables(),
        id,
        true,
        &[SeatSpec::Player(1, "Alice"), SeatSpec::Spectator(2, "Bob")],
    );
    let mut alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");

    alice.type_at(id).await.unwrap();

    assert_eq!(
        alice.warnings(),
        vec![format!(
            "You are not spectating replay {id}, so you cannot report that you are typing."
        )]
    );
    assert!(bob.typing_events().is_empty());
    assert!(!table.lock().players[0].typing);
}

#[tokio::test(start_paused = true)]
async fn test_replay_spectator_typing_reaches_other_spectators_only() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    let table = build_table(
        gateway.state.tables(),
        id,
        true,
        &[
            SeatSpec::Player(1, "Alice"),
            SeatSpec::Player(2, "Bob"),
            SeatSpec::Spectator(1, "Alice"),
            SeatSpec::Spectator(3, "Carol"),
        ],
    );
    let alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");
    let mut carol = gateway.connect(3, "Carol");

    alice.type_at(id).await.unwrap();

    {
        let state = table.lock();
        assert!(state.spectators[0].typing);
        assert!(!state.players[0].typing);
    }
    assert!(bob.typing_events().is_empty());
    assert_eq!(carol.typing_events(), vec![("Alice".to_string(), true)]);
}

#[tokio::test(start_paused = true)]
async fn test_absent_players_are_not_notified() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    build_table(
        gateway.state.tables(),
        id,
        false,
        &[SeatSpec::Player(1, "Alice"), SeatSpec::AbsentPlayer(2, "Bob")],
    );
    let alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");

    alice.type_at(id).await.unwrap();
    advance_ms(2100).await;

    assert!(bob.typing_events().is_empty());
}

// ============================================================================
// Teardown Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_table_destroyed_before_check() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    let table = build_table(gateway.state.tables(), id, false, &alice_and_bob());
    let alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");

    alice.type_at(id).await.unwrap();
    gateway.state.tables().remove(id);
    advance_ms(2100).await;

    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), true)]);
    // The orphaned table is left untouched
    assert!(table.lock().players[0].typing);
}

#[tokio::test(start_paused = true)]
async fn test_table_recreated_under_same_id() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    build_table(gateway.state.tables(), id, true, &[SeatSpec::Spectator(1, "Alice")]);
    let alice = gateway.connect(1, "Alice");

    alice.type_at(id).await.unwrap();

    // Replay discarded and recreated; Alice is typing there too.
    let successor = build_table(
        gateway.state.tables(),
        id,
        true,
        &[SeatSpec::Spectator(1, "Alice"), SeatSpec::Spectator(2, "Bob")],
    );
    advance_ms(1500).await;
    alice.type_at(id).await.unwrap();
    let mut bob = gateway.connect(2, "Bob");

    // The old table's check fires at 2.0s and must not clear the successor.
    advance_ms(600).await;
    assert!(successor.lock().spectators[0].typing);
    assert!(bob.typing_events().is_empty());

    advance_ms(1500).await;
    assert!(!successor.lock().spectators[0].typing);
    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), false)]);
}

#[tokio::test(start_paused = true)]
async fn test_participant_leaves_before_check() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    let table = build_table(
        gateway.state.tables(),
        id,
        false,
        &[SeatSpec::Spectator(1, "Alice"), SeatSpec::Spectator(2, "Bob")],
    );
    let alice = gateway.connect(1, "Alice");
    let mut bob = gateway.connect(2, "Bob");

    alice.type_at(id).await.unwrap();
    table.lock().remove_spectator(UserId::new(1));
    advance_ms(2100).await;

    assert_eq!(bob.typing_events(), vec![("Alice".to_string(), true)]);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

// Runs on the real clock: paused time needs a current-thread runtime and these
// keystrokes race on several workers. Keystrokes are 10ms apart against the
// default 2s delay.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_keystrokes_single_start_single_stop() {
    let gateway = TestGateway::start();
    let id = unique_table_id();
    build_table(gateway.state.tables(), id, false, &alice_and_bob());
    let mut bob = gateway.connect(2, "Bob");

    let mut handles = Vec::new();
    for _ in 0..8 {
        let alice = gateway.connect(1, "Alice");
        handles.push(tokio::spawn(async move {
            for _ in 0..10 {
                alice.type_at(id).await.unwrap();
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let events = bob.recv_typing_events(2, Duration::from_secs(10)).await;
    assert_eq!(
        events,
        vec![("Alice".to_string(), true), ("Alice".to_string(), false)]
    );

    // Leftover checks from the burst have all fired by now
    assert!(bob.recv_typing_events(1, Duration::from_millis(200)).await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_teardown_races_do_not_deadlock() {
    let gateway = TestGateway::with_delay(Duration::from_millis(50));
    let alice = gateway.connect(1, "Alice");

    for round in 0..20u64 {
        let id = TableId::new(10_000 + round % 3);
        let replay = round % 2 == 0;
        build_table(gateway.state.tables(), id, replay, &[SeatSpec::Spectator(1, "Alice")]);
        alice.type_at(id).await.unwrap();
        if round % 4 == 0 {
            gateway.state.tables().remove(id);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let done = tokio::time::timeout(Duration::from_secs(5), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        for round in 0..3u64 {
            if let Some(table) = gateway.state.tables().get_table(TableId::new(10_000 + round)) {
                let _state = table.lock();
            }
        }
    })
    .await;

    assert!(done.is_ok());
}
