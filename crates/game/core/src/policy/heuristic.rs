use crate::rng::{PcgRng, RngOracle, RollContext, compute_seed};
use crate::state::{MatchState, UnitId};

use super::{Decision, OpponentPolicy, special_is_viable};

/// Default opponent behaviour.
///
/// Targets the living player unit with the lowest hp, breaking ties with a
/// seeded draw, then tries the special with the configured chance when the
/// cooldown is clear. Every roll is derived from the match seed, the action
/// nonce and the actor, so replays with the same seed make the same choices.
#[derive(Clone, Debug, Default)]
pub struct HeuristicPolicy<R: RngOracle = PcgRng> {
    rng: R,
}

impl HeuristicPolicy {
    pub fn new() -> Self {
        Self { rng: PcgRng }
    }
}

impl<R: RngOracle> HeuristicPolicy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn special_chance(actor: UnitId, state: &MatchState) -> u32 {
        if actor.is_boss() {
            state.config().boss_special_chance
        } else {
            state.config().enemy_special_chance
        }
    }
}

impl<R: RngOracle> OpponentPolicy for HeuristicPolicy<R> {
    fn decide(&self, actor: UnitId, state: &MatchState) -> Option<Decision> {
        let candidates = state.player().weakest();
        let last = u32::try_from(candidates.len().checked_sub(1)?).ok()?;

        let nonce = state.turn().action_nonce;
        let target_seed = compute_seed(state.seed(), nonce, actor.0, RollContext::Target);
        let pick = self.rng.range(target_seed, 0, last) as usize;
        let target = candidates.get(pick)?.id();

        let special_seed = compute_seed(state.seed(), nonce, actor.0, RollContext::Special);
        let wants_special =
            self.rng.roll_d100(special_seed) <= Self::special_chance(actor, state);

        if wants_special && special_is_viable(actor, state) {
            Some(Decision::Special { target })
        } else {
            Some(Decision::Attack { target })
        }
    }
}
