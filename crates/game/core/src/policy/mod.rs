//! Opponent decision-making for automated phases.
//!
//! The turn controller asks an [`OpponentPolicy`] once per living automated
//! actor. Policies only read the match state; the controller validates and
//! applies whatever they return, so any policy can be swapped in without
//! touching the engine.

mod heuristic;
mod scripted;

pub use heuristic::HeuristicPolicy;
pub use scripted::{ScriptedMode, ScriptedPolicy};

use crate::config::BattleConfig;
use crate::state::{MatchState, UnitId, UnitKind};

/// What an automated actor wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decision {
    /// Basic attack against a player unit.
    Attack { target: UnitId },

    /// Try the actor's special. `target` is used by single-target specials
    /// and as the basic-attack fallback when the special is not viable.
    Special { target: UnitId },
}

impl Decision {
    pub fn target(&self) -> UnitId {
        match self {
            Decision::Attack { target } | Decision::Special { target } => *target,
        }
    }
}

/// Decision procedure for enemy-roster units and the boss.
pub trait OpponentPolicy: Send + Sync {
    /// Chooses an action for `actor`. `None` leaves the choice to the
    /// controller, which falls back to a basic attack on the weakest player
    /// unit.
    fn decide(&self, actor: UnitId, state: &MatchState) -> Option<Decision>;
}

/// Returns true when `actor`'s special would pass its gate and has
/// something to act on.
///
/// - Red and Yellow need a living player unit.
/// - Blue needs at least one other living ally to shield.
/// - The boss needs [`BattleConfig::DARK_WAVE_MIN_TARGETS`] living player units.
pub fn special_is_viable(actor: UnitId, state: &MatchState) -> bool {
    if actor.is_boss() {
        let boss = state.boss();
        return boss.is_alive()
            && boss.special_cooldown() == 0
            && state.player().living_count() >= BattleConfig::DARK_WAVE_MIN_TARGETS;
    }

    let Some(unit) = state.enemy().get(actor) else {
        return false;
    };
    if !unit.is_alive() || unit.special_cooldown() > 0 {
        return false;
    }
    match unit.kind() {
        UnitKind::Red | UnitKind::Yellow => state.player().any_alive(),
        UnitKind::Blue => state
            .enemy()
            .living()
            .any(|ally| ally.id() != unit.id()),
    }
}

/// First living player unit with the lowest hp, in roster order.
pub fn weakest_target(state: &MatchState) -> Option<UnitId> {
    state.player().weakest().first().map(|unit| unit.id())
}
