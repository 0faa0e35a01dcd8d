use crate::combat::{DoubleStrike, Hit};
use crate::state::{TurnPhase, UnitId};

/// What a resolved action did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    /// Single basic attack.
    Attack(Hit),

    /// Red special. A single boss hit when the enemy roster was cleared.
    RageBurst(Vec<Hit>),

    /// Blue special. Lists the *other* allies shielded; the caster always
    /// shields itself.
    EmpathyShield { shielded: Vec<UnitId> },

    /// Yellow special.
    LightningDash(DoubleStrike),

    /// Boss special.
    DarkWave(Vec<Hit>),
}

impl ActionEffect {
    /// Every hit in resolution order.
    pub fn hits(&self) -> Vec<Hit> {
        match self {
            ActionEffect::Attack(hit) => vec![*hit],
            ActionEffect::RageBurst(hits) | ActionEffect::DarkWave(hits) => hits.clone(),
            ActionEffect::EmpathyShield { .. } => Vec::new(),
            ActionEffect::LightningDash(strike) => {
                core::iter::once(strike.first).chain(strike.second).collect()
            }
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, ActionEffect::Attack(_))
    }
}

/// Result of one resolved action, player or automated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    /// Action nonce the action resolved under.
    pub nonce: u64,
    /// Turn number the action resolved in.
    pub turn: u32,
    pub phase: TurnPhase,
    pub actor: UnitId,
    pub effect: ActionEffect,
    /// The boss moved to its second phase during this action.
    pub boss_enraged: bool,
}

impl ActionOutcome {
    /// Units that died during this action.
    pub fn defeated(&self) -> Vec<UnitId> {
        self.effect
            .hits()
            .into_iter()
            .filter(|hit| hit.defeated)
            .map(|hit| hit.target)
            .collect()
    }
}
