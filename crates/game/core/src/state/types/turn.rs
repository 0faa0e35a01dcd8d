/// Whose turn is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    Player,
    Enemy,
    Boss,
}

impl TurnPhase {
    /// Returns true for phases driven by the opponent policy.
    pub const fn is_automated(self) -> bool {
        matches!(self, TurnPhase::Enemy | TurnPhase::Boss)
    }
}

/// Turn bookkeeping for a match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Active phase of the Player -> Enemy -> Boss cycle.
    pub phase: TurnPhase,

    /// Full cycles started so far. Starts at 1 and increments on the
    /// Boss -> Player edge.
    pub number: u32,

    /// Sequential identifier that increments with every resolved action.
    ///
    /// Feeds the opponent policy's seed so each decision draws independently.
    pub action_nonce: u64,

    /// Roster index of the next automated actor within the current phase.
    ///
    /// Lets an interrupted automated phase resume without repeating actors.
    pub cursor: usize,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::Player,
            number: 1,
            action_nonce: 0,
            cursor: 0,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
