use core::iter::FusedIterator;

use crate::policy::{Decision, OpponentPolicy, special_is_viable, weakest_target};
use crate::state::{TurnPhase, UnitId};

use super::{ActionKind, ActionOutcome, BattleEngine, Target};

/// Lazy sequence of automated actions for one phase.
///
/// Each call to `next` asks the policy for one decision, resolves it and
/// returns the outcome. The turn advances as soon as the last actor has
/// resolved, or on the first poll when nobody can act. Progress lives in the
/// match state, so dropping the sequence early and starting a new one resumes
/// with the next actor.
pub struct AutomatedPhase<'a, P: OpponentPolicy + ?Sized> {
    engine: BattleEngine<'a>,
    policy: &'a P,
    phase: TurnPhase,
    finished: bool,
}

impl<'a, P: OpponentPolicy + ?Sized> AutomatedPhase<'a, P> {
    pub(super) fn new(engine: BattleEngine<'a>, policy: &'a P) -> Self {
        let phase = engine.state.phase();
        Self {
            engine,
            policy,
            phase,
            finished: false,
        }
    }

    /// Phase this sequence drives.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Next actor at or after the cursor, with the cursor value that marks
    /// it as done.
    fn next_actor(&self) -> Option<(UnitId, usize)> {
        let state = &*self.engine.state;
        match self.phase {
            TurnPhase::Enemy => {
                let index = state.enemy.next_living_from(state.turn.cursor)?;
                let unit = state.enemy.units().get(index)?;
                Some((unit.id(), index + 1))
            }
            TurnPhase::Boss if state.turn.cursor == 0 && state.boss_is_active() => {
                Some((UnitId::BOSS, 1))
            }
            TurnPhase::Boss | TurnPhase::Player => None,
        }
    }

    /// Replaces an unusable decision with a basic attack on the weakest
    /// player unit.
    fn correct(&self, actor: UnitId, decision: Option<Decision>) -> Option<(ActionKind, UnitId)> {
        let state = &*self.engine.state;
        let legal = |id: UnitId| state.player.get(id).is_some_and(|unit| unit.is_alive());

        let (kind, target) = match decision {
            Some(Decision::Special { target }) if special_is_viable(actor, state) => {
                (ActionKind::Special, target)
            }
            Some(decision) => (ActionKind::Attack, decision.target()),
            None => (ActionKind::Attack, weakest_target(state)?),
        };

        if legal(target) {
            Some((kind, target))
        } else {
            Some((kind, weakest_target(state)?))
        }
    }

    fn act(&mut self, actor: UnitId) -> Option<ActionOutcome> {
        let decision = self.policy.decide(actor, self.engine.state);
        let (kind, target) = self.correct(actor, decision)?;
        let target = Some(Target::Unit(target));

        let boss_phase = self.engine.state.boss.phase();
        let effect = self
            .engine
            .apply(actor, kind, target)
            .or_else(|| self.engine.apply(actor, ActionKind::Attack, target))?;
        Some(self.engine.commit(actor, effect, boss_phase))
    }
}

impl<'a, P: OpponentPolicy + ?Sized> Iterator for AutomatedPhase<'a, P> {
    type Item = ActionOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.engine.state.is_over() || self.engine.state.phase() != self.phase {
            self.finished = true;
            return None;
        }

        loop {
            let Some((actor, done)) = self.next_actor() else {
                self.engine.advance_turn();
                self.finished = true;
                return None;
            };
            self.engine.state.turn.cursor = done;

            // An actor with no legal action forfeits its slot.
            let Some(outcome) = self.act(actor) else {
                continue;
            };

            if self.engine.state.is_over() {
                self.finished = true;
            } else if self.next_actor().is_none() {
                self.engine.advance_turn();
                self.finished = true;
            }
            return Some(outcome);
        }
    }
}

impl<'a, P: OpponentPolicy + ?Sized> FusedIterator for AutomatedPhase<'a, P> {}
