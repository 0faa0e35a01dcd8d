use battle_core::{
    ActionKind, BattleConfig, BattleEngine, Boss, CombatUnit, HeuristicPolicy, MatchState,
    OpponentPolicy, RejectionKind, Roster, ScriptedPolicy, TurnPhase, UnitId,
};

fn run_automated(state: &mut MatchState, policy: &dyn OpponentPolicy) {
    while !state.is_over() && state.phase().is_automated() {
        BattleEngine::new(state)
            .advance_automated_phase(policy)
            .expect("automated phase")
            .for_each(drop);
    }
}

/// Attacks the first living enemy (or the boss) with the first living unit.
fn play_turn(state: &mut MatchState) {
    let unit = state
        .player()
        .living()
        .next()
        .map(CombatUnit::id)
        .expect("a living player unit");
    let target = state.enemy().living().next().map(CombatUnit::id);
    BattleEngine::new(state)
        .submit_player_action(unit, target, ActionKind::Attack)
        .expect("legal attack");
}

fn assert_invariants(state: &MatchState) {
    for unit in state.player().iter().chain(state.enemy().iter()) {
        assert_eq!(unit.is_alive(), unit.hp() > 0, "{unit:?}");
        assert!(unit.hp() <= unit.max_hp(), "{unit:?}");
        assert_eq!(unit.is_shielded(), unit.shield_duration() > 0, "{unit:?}");
    }
    let boss = state.boss();
    assert_eq!(boss.is_alive(), boss.hp() > 0);
    assert!(boss.hp() <= boss.max_hp());
    assert!(state.log().len() <= state.config().log_capacity);
}

#[test]
fn full_cycle_returns_to_player_on_turn_two() {
    let mut state = MatchState::default();
    let policy = ScriptedPolicy::always_attack();

    BattleEngine::new(&mut state)
        .submit_player_action(UnitId(2), Some(UnitId(10)), ActionKind::Attack)
        .expect("blue attacks enemy red");
    assert_eq!(state.phase(), TurnPhase::Enemy);

    run_automated(&mut state, &policy);
    assert_eq!(state.phase(), TurnPhase::Player);
    assert_eq!(state.turn_number(), 2);
    assert!(!state.is_over());
}

#[test]
fn clearing_every_enemy_wins_and_freezes_the_match() {
    let weak = Roster::from_units(
        battle_core::Side::Enemy,
        Roster::enemy().iter().map(|unit| unit.clone().with_hp(1)),
    );
    let mut state = MatchState::with_units(
        BattleConfig::default(),
        Roster::player(),
        weak,
        Boss::new().with_hp(40),
    );
    let policy = ScriptedPolicy::always_attack();

    for _ in 0..50 {
        if state.is_over() {
            break;
        }
        play_turn(&mut state);
        run_automated(&mut state, &policy);
        assert_invariants(&state);
    }

    assert!(state.is_over());
    assert!(state.is_victory());
    assert!(state.enemy().all_dead());
    assert!(!state.boss().is_alive());
    assert_eq!(
        state.log().iter().last().map(|entry| entry.message.as_str()),
        Some("Victory! The Dark Bubble is defeated!")
    );

    let frozen = state.clone();
    for action in [ActionKind::Attack, ActionKind::Special] {
        let err = BattleEngine::new(&mut state)
            .submit_player_action(UnitId(1), None, action)
            .expect_err("match is over");
        assert_eq!(err.kind(), RejectionKind::IllegalPhase);
    }
    let err = BattleEngine::new(&mut state)
        .advance_automated_phase(&policy)
        .err()
        .map(|err| err.kind());
    assert_eq!(err, Some(RejectionKind::IllegalPhase));
    assert_eq!(state, frozen);
}

#[test]
fn rejected_intents_never_change_state() {
    let mut state = MatchState::default();
    BattleEngine::new(&mut state)
        .submit_player_action(UnitId(1), None, ActionKind::Special)
        .expect("rage burst");
    run_automated(&mut state, &ScriptedPolicy::always_attack());
    let snapshot = state.clone();

    let intents = [
        (UnitId(1), Some(UnitId(99)), ActionKind::Attack),
        (UnitId(1), Some(UnitId::BOSS), ActionKind::Attack),
        (UnitId(1), None, ActionKind::Attack),
        (UnitId(1), Some(UnitId(3)), ActionKind::Attack),
        (UnitId(42), Some(UnitId(10)), ActionKind::Attack),
        (UnitId(11), Some(UnitId(1)), ActionKind::Attack),
    ];
    for (unit, target, action) in intents {
        let result = BattleEngine::new(&mut state).submit_player_action(unit, target, action);
        assert!(result.is_err(), "{unit} {target:?} {action} should be rejected");
        assert_eq!(state, snapshot);
    }
}

#[test]
fn seeded_matches_replay_identically() {
    let play = |seed: u64| {
        let mut state = MatchState::new(BattleConfig::with_seed(seed));
        let policy = HeuristicPolicy::new();
        for _ in 0..2_000 {
            if state.is_over() {
                break;
            }
            play_turn(&mut state);
            run_automated(&mut state, &policy);
            assert_invariants(&state);
        }
        state
    };

    let first = play(1234);
    assert!(first.is_over());
    assert_eq!(first, play(1234));
}

#[test]
fn cooldown_outlasts_a_short_cycle() {
    // With the enemy roster cleared the cycle is Player -> Boss, so a
    // three-turn cooldown only ticks twice before the player is up again.
    let cleared = Roster::from_units(
        battle_core::Side::Enemy,
        Roster::enemy().iter().map(|unit| unit.clone().with_hp(0)),
    );
    let mut state =
        MatchState::with_units(BattleConfig::default(), Roster::player(), cleared, Boss::new());

    BattleEngine::new(&mut state)
        .submit_player_action(UnitId(1), None, ActionKind::Special)
        .expect("rage burst on the boss");
    run_automated(&mut state, &ScriptedPolicy::always_attack());
    assert_eq!(state.phase(), TurnPhase::Player);

    let snapshot = state.clone();
    let err = BattleEngine::new(&mut state)
        .submit_player_action(UnitId(1), None, ActionKind::Special)
        .expect_err("cooldown still running");
    assert_eq!(err.kind(), RejectionKind::AbilityOnCooldown);
    assert_eq!(state, snapshot);

    BattleEngine::new(&mut state)
        .submit_player_action(UnitId(1), None, ActionKind::Attack)
        .expect("basic attack is always available");
}
