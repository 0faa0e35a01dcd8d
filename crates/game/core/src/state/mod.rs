//! Authoritative match state.
//!
//! [`MatchState`] exclusively owns both rosters, the boss, turn bookkeeping
//! and the battle log. Callers read it through the query methods below and
//! mutate it only through [`crate::engine::BattleEngine`].
pub mod types;

pub use types::{
    Boss, BossPhase, CombatUnit, Roster, Selection, Side, TurnPhase, TurnState, UnitId, UnitKind,
    UnitTemplate,
};

use crate::config::BattleConfig;
use crate::log::BattleLog;

/// Terminal result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchResult {
    Victory,
    Defeat,
}

/// Canonical snapshot of a running match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub(crate) config: BattleConfig,
    pub(crate) player: Roster,
    pub(crate) enemy: Roster,
    pub(crate) boss: Boss,
    pub(crate) turn: TurnState,
    pub(crate) selection: Selection,
    pub(crate) log: BattleLog,
    pub(crate) result: Option<MatchResult>,
}

impl MatchState {
    pub const START_MESSAGE: &'static str = "Battle started! Choose a bubble to attack!";

    /// Starts a standard 3v3 match plus boss, everyone at full health.
    pub fn new(config: BattleConfig) -> Self {
        Self::with_units(config, Roster::player(), Roster::enemy(), Boss::new())
    }

    /// Starts a match from explicit rosters and boss.
    ///
    /// Intended for scenarios and tests that need non-template stats.
    pub fn with_units(config: BattleConfig, player: Roster, enemy: Roster, boss: Boss) -> Self {
        let mut log = BattleLog::with_capacity(config.log_capacity);
        log.push(1, Self::START_MESSAGE);

        Self {
            config,
            player,
            enemy,
            boss,
            turn: TurnState::new(),
            selection: Selection::default(),
            log,
            result: None,
        }
    }

    /// Replaces the whole state with a fresh standard match.
    pub fn restart(&mut self) {
        *self = Self::new(self.config.clone());
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn turn_number(&self) -> u32 {
        self.turn.number
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Meaningful only once [`Self::is_over`] is true.
    pub fn is_victory(&self) -> bool {
        self.result == Some(MatchResult::Victory)
    }

    pub fn result(&self) -> Option<MatchResult> {
        self.result
    }

    pub fn player(&self) -> &Roster {
        &self.player
    }

    pub fn enemy(&self) -> &Roster {
        &self.enemy
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    /// The boss is targetable and acts only once the enemy roster is cleared.
    pub fn boss_is_active(&self) -> bool {
        self.boss.is_alive() && self.enemy.all_dead()
    }

    /// Looks up a roster unit on either side.
    pub fn unit(&self, id: UnitId) -> Option<&CombatUnit> {
        self.player.get(id).or_else(|| self.enemy.get(id))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Last `n` log lines formatted for display.
    pub fn recent_log(&self, n: usize) -> Vec<String> {
        self.log.last(n).map(ToString::to_string).collect()
    }

    pub(crate) fn narrate(&mut self, message: impl Into<String>) {
        self.log.push(self.turn.number, message);
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}
