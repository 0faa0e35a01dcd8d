//! Notifications published by the simulation worker.
use serde::{Deserialize, Serialize};

use battle_core::{ActionOutcome, RejectionKind, TurnPhase};

/// Events emitted on the runtime's broadcast channel, in resolution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A player or automated action resolved.
    ActionResolved(ActionOutcome),

    /// The match entered a new phase.
    PhaseChanged { phase: TurnPhase, turn: u32 },

    /// A player intent was refused; the state is unchanged.
    Rejected { kind: RejectionKind },

    /// The match reached a terminal state.
    MatchEnded { victory: bool, turn: u32 },

    /// The match was replaced with a fresh one.
    Restarted,
}
