use crate::state::{MatchState, UnitId};

use super::{Decision, OpponentPolicy, special_is_viable, weakest_target};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptedMode {
    AlwaysAttack,
    /// Special whenever it is viable, basic attack otherwise.
    AlwaysSpecial,
}

/// Deterministic policy for tests and scripted scenarios.
///
/// Always targets the first weakest player unit in roster order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptedPolicy {
    mode: ScriptedMode,
}

impl ScriptedPolicy {
    pub const fn new(mode: ScriptedMode) -> Self {
        Self { mode }
    }

    pub const fn always_attack() -> Self {
        Self::new(ScriptedMode::AlwaysAttack)
    }

    pub const fn always_special() -> Self {
        Self::new(ScriptedMode::AlwaysSpecial)
    }

    pub fn mode(&self) -> ScriptedMode {
        self.mode
    }
}

impl OpponentPolicy for ScriptedPolicy {
    fn decide(&self, actor: UnitId, state: &MatchState) -> Option<Decision> {
        let target = weakest_target(state)?;
        match self.mode {
            ScriptedMode::AlwaysSpecial if special_is_viable(actor, state) => {
                Some(Decision::Special { target })
            }
            _ => Some(Decision::Attack { target }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_attack_never_specials() {
        let state = MatchState::default();
        assert_eq!(
            ScriptedPolicy::always_attack().decide(UnitId::BOSS, &state),
            Some(Decision::Attack { target: UnitId(3) })
        );
    }

    #[test]
    fn always_special_requires_viability() {
        let state = MatchState::default();
        let policy = ScriptedPolicy::always_special();
        assert_eq!(
            policy.decide(UnitId(12), &state),
            Some(Decision::Special { target: UnitId(3) })
        );
        // Player ids are not automated actors, so their special is never viable.
        assert_eq!(
            policy.decide(UnitId(3), &state),
            Some(Decision::Attack { target: UnitId(3) })
        );
    }
}
