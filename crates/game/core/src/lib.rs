//! Deterministic combat rules for bubble battles.
//!
//! `battle-core` owns the canonical rules (unit model, combat resolver, turn
//! controller, opponent policy) and exposes a pure, synchronous API that any
//! presentation layer can drive. All state mutation flows through
//! [`engine::BattleEngine`]; everything else reads [`state::MatchState`]
//! through its query methods.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod policy;
pub mod rng;
pub mod state;

pub use combat::{DoubleStrike, Hit, Percent};
pub use config::BattleConfig;
pub use engine::{ActionEffect, ActionKind, ActionOutcome, AutomatedPhase, BattleEngine};
pub use error::{ErrorContext, ErrorSeverity, GameError, Rejection, RejectionKind};
pub use log::{BattleLog, LogEntry};
pub use policy::{Decision, HeuristicPolicy, OpponentPolicy, ScriptedMode, ScriptedPolicy};
pub use rng::{FixedRng, PcgRng, RngOracle, RollContext, compute_seed};
pub use state::{
    Boss, BossPhase, CombatUnit, MatchResult, MatchState, Roster, Selection, Side, TurnPhase,
    TurnState, UnitId, UnitKind, UnitTemplate,
};
