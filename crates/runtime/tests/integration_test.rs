use battle_core::{
    ActionKind, BattleConfig, Boss, MatchState, RejectionKind, Roster, ScriptedPolicy, Side,
    TurnPhase, UnitId,
};
use battle_runtime::{BattleEvent, PacingConfig, Runtime, RuntimeConfig, RuntimeError};
use tokio::sync::broadcast;

fn instant_config() -> RuntimeConfig {
    RuntimeConfig {
        pacing: PacingConfig::instant(),
        ..RuntimeConfig::default()
    }
}

fn scripted_runtime(state: Option<MatchState>) -> Runtime {
    let builder = Runtime::builder()
        .config(instant_config())
        .policy(ScriptedPolicy::always_attack());
    match state {
        Some(state) => builder.initial_state(state).build(),
        None => builder.build(),
    }
}

async fn next_event(events: &mut broadcast::Receiver<BattleEvent>) -> BattleEvent {
    events.recv().await.expect("event stream open")
}

/// One full Player -> Enemy -> Boss cycle driven through the worker.
#[tokio::test]
async fn player_action_runs_automated_phases_until_player_turn() {
    let runtime = scripted_runtime(None);
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    let outcome = handle
        .submit_player_action(UnitId(1), Some(UnitId(12)), ActionKind::Attack)
        .await
        .expect("red attacks enemy yellow");
    assert_eq!(outcome.actor, UnitId(1));
    assert_eq!(outcome.phase, TurnPhase::Player);

    assert_eq!(next_event(&mut events).await, BattleEvent::ActionResolved(outcome));
    assert_eq!(
        next_event(&mut events).await,
        BattleEvent::PhaseChanged {
            phase: TurnPhase::Enemy,
            turn: 1
        }
    );

    let mut enemy_actors = Vec::new();
    for _ in 0..3 {
        match next_event(&mut events).await {
            BattleEvent::ActionResolved(outcome) => enemy_actors.push(outcome.actor),
            other => panic!("expected an enemy action, got {other:?}"),
        }
    }
    assert_eq!(enemy_actors, vec![UnitId(10), UnitId(11), UnitId(12)]);

    // The boss stays dormant while the enemy roster stands.
    assert_eq!(
        next_event(&mut events).await,
        BattleEvent::PhaseChanged {
            phase: TurnPhase::Boss,
            turn: 1
        }
    );
    assert_eq!(
        next_event(&mut events).await,
        BattleEvent::PhaseChanged {
            phase: TurnPhase::Player,
            turn: 2
        }
    );

    let state = handle.query_state().await.expect("state query");
    assert_eq!(state.phase(), TurnPhase::Player);
    assert_eq!(state.turn_number(), 2);
    assert_eq!(state.enemy().get(UnitId(12)).map(|unit| unit.hp()), Some(50));
    // Every enemy targeted Yellow, the weakest player unit: 80 - 30 - 5 - 10.
    assert_eq!(state.player().get(UnitId(3)).map(|unit| unit.hp()), Some(35));

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn rejected_intent_leaves_state_untouched() {
    let runtime = scripted_runtime(None);
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();
    let before = handle.query_state().await.expect("state query");

    let err = handle
        .submit_player_action(UnitId(1), Some(UnitId::BOSS), ActionKind::Attack)
        .await
        .expect_err("boss is shielded by its roster");
    assert!(matches!(err, RuntimeError::Rejected(_)));
    assert_eq!(
        err.rejection().map(|rejection| rejection.kind()),
        Some(RejectionKind::IllegalTarget)
    );
    assert_eq!(
        next_event(&mut events).await,
        BattleEvent::Rejected {
            kind: RejectionKind::IllegalTarget
        }
    );

    let after = handle.query_state().await.expect("state query");
    assert_eq!(before, after);

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn match_can_be_won_and_then_refuses_actions() {
    let weak = |roster: Roster| {
        Roster::from_units(roster.side(), roster.iter().map(|unit| unit.clone().with_hp(1)))
    };
    let state = MatchState::with_units(
        BattleConfig::default(),
        Roster::player(),
        weak(Roster::enemy()),
        Boss::new().with_hp(1),
    );
    let runtime = scripted_runtime(Some(state));
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    // Rage Burst clears the one-hp roster; the boss answers on its own phase.
    handle
        .submit_player_action(UnitId(1), None, ActionKind::Special)
        .await
        .expect("rage burst");
    let state = handle.query_state().await.expect("state query");
    assert!(state.enemy().all_dead());
    assert_eq!(state.phase(), TurnPhase::Player);
    assert_eq!(state.turn_number(), 2);

    handle
        .submit_player_action(UnitId(2), None, ActionKind::Attack)
        .await
        .expect("blue finishes the boss");

    // The worker replies before publishing follow-up events; the query is
    // queued behind them.
    let state = handle.query_state().await.expect("state query");
    let mut ended = None;
    while let Ok(event) = events.try_recv() {
        if let BattleEvent::MatchEnded { victory, turn } = event {
            ended = Some((victory, turn));
        }
    }
    assert_eq!(ended, Some((true, 2)));
    assert!(state.is_over());
    assert!(state.is_victory());

    let err = handle
        .submit_player_action(UnitId(3), None, ActionKind::Attack)
        .await
        .expect_err("match is over");
    assert_eq!(
        err.rejection().map(|rejection| rejection.kind()),
        Some(RejectionKind::IllegalPhase)
    );
    assert_eq!(handle.query_state().await.expect("state query"), state);

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn restart_replaces_the_match() {
    let config = RuntimeConfig {
        battle: BattleConfig::with_seed(7),
        ..instant_config()
    };
    let runtime = Runtime::builder()
        .config(config)
        .policy(ScriptedPolicy::always_special())
        .build();
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    handle
        .submit_player_action(UnitId(3), Some(UnitId(11)), ActionKind::Special)
        .await
        .expect("lightning dash");
    handle.restart().await.expect("restart");

    let mut saw_restart = false;
    while let Ok(event) = events.try_recv() {
        saw_restart |= event == BattleEvent::Restarted;
    }
    assert!(saw_restart);

    let state = handle.query_state().await.expect("state query");
    assert_eq!(state, MatchState::new(BattleConfig::with_seed(7)));
    assert!(state.player().iter().all(|unit| unit.side() == Side::Player));

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn events_round_trip_through_json() {
    let runtime = scripted_runtime(None);
    let handle = runtime.handle();
    let mut events = runtime.subscribe_events();

    handle
        .submit_player_action(UnitId(2), None, ActionKind::Special)
        .await
        .expect("empathy shield needs no target");
    let event = next_event(&mut events).await;

    let json = serde_json::to_string(&event).expect("serialize event");
    let decoded: BattleEvent = serde_json::from_str(&json).expect("deserialize event");
    assert_eq!(decoded, event);

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}
