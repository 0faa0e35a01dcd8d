use crate::state::{MatchResult, TurnPhase};

use super::{BattleEngine, narration};

/// Phase cycle and terminal detection.
impl<'a> BattleEngine<'a> {
    /// Ticks every counter, then moves to the next phase.
    ///
    /// The enemy phase is skipped when no enemy roster unit is alive. The turn
    /// number only increments on the Boss -> Player edge.
    pub(super) fn advance_turn(&mut self) {
        let state = &mut *self.state;
        state.player.advance_turn_counters();
        state.enemy.advance_turn_counters();
        state.boss.advance_turn_counters();

        state.turn.phase = match state.turn.phase {
            TurnPhase::Player if state.enemy.any_alive() => TurnPhase::Enemy,
            TurnPhase::Player | TurnPhase::Enemy => TurnPhase::Boss,
            TurnPhase::Boss => {
                state.turn.number += 1;
                TurnPhase::Player
            }
        };
        state.turn.cursor = 0;
        state.selection.clear();

        self.check_terminal();
    }

    /// Records the match result the first time a side is wiped out.
    ///
    /// Returns true once the match is over.
    pub(super) fn check_terminal(&mut self) -> bool {
        if self.state.result.is_some() {
            return true;
        }

        let result = if self.state.player.all_dead() {
            MatchResult::Defeat
        } else if self.state.enemy.all_dead() && !self.state.boss.is_alive() {
            MatchResult::Victory
        } else {
            return false;
        };

        self.state.result = Some(result);
        self.state.narrate(narration::result_line(result));
        true
    }
}
