//! Turn controller.
//!
//! The [`BattleEngine`] is the only writer of [`MatchState`]. It validates
//! player intents, dispatches them to the combat resolver, narrates the result,
//! and drives the Player -> Enemy -> Boss cycle. Automated phases are exposed
//! as a lazy [`AutomatedPhase`] sequence so the caller can pace them.
//!
//! Every public entry point either resolves completely or returns a
//! [`Rejection`] without touching the state.

mod automated;
mod narration;
mod outcome;
mod turns;

pub use automated::AutomatedPhase;
pub use outcome::{ActionEffect, ActionOutcome};

use crate::combat;
use crate::error::{ErrorContext, Rejection};
use crate::policy::OpponentPolicy;
use crate::state::{BossPhase, CombatUnit, MatchState, TurnPhase, UnitId, UnitKind};

/// Action a unit can take on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Attack,
    Special,
}

/// Resolved target of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    Unit(UnitId),
    Boss,
}

impl Target {
    fn id(self) -> UnitId {
        match self {
            Target::Unit(id) => id,
            Target::Boss => UnitId::BOSS,
        }
    }
}

/// Authoritative reducer for a [`MatchState`].
pub struct BattleEngine<'a> {
    state: &'a mut MatchState,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut MatchState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Resolves a player intent and, on success, advances the turn.
    ///
    /// Checks run in this order and stop at the first failure:
    /// 1. player turn and match not over (`IllegalPhase`)
    /// 2. `unit` is a living player unit (`UnknownUnit`)
    /// 3. target is legal for the action (`IllegalTarget`)
    /// 4. special cooldown is clear (`AbilityOnCooldown`)
    ///
    /// Red and Blue specials ignore `target`. Attacks and Yellow's special
    /// default to the boss when `target` is `None` and the enemy roster is
    /// cleared.
    pub fn submit_player_action(
        &mut self,
        unit: UnitId,
        target: Option<UnitId>,
        action: ActionKind,
    ) -> Result<ActionOutcome, Rejection> {
        self.ensure_player_turn(Some(unit))?;
        let kind = self.living_player(unit)?.kind();

        let target = match (action, kind) {
            (ActionKind::Attack, _) | (ActionKind::Special, UnitKind::Yellow) => {
                Some(self.resolve_target(unit, target)?)
            }
            (ActionKind::Special, UnitKind::Red) => {
                self.state.boss_is_active().then_some(Target::Boss)
            }
            (ActionKind::Special, UnitKind::Blue) => None,
        };

        if action == ActionKind::Special {
            let remaining = self.living_player(unit)?.special_cooldown();
            if remaining > 0 {
                return Err(Rejection::AbilityOnCooldown {
                    unit,
                    remaining,
                    context: self.context(Some(unit)),
                });
            }
        }

        let boss_phase = self.state.boss.phase();
        let effect = self.apply(unit, action, target).ok_or_else(|| {
            // Both gates were checked above; a refusal here still leaves the
            // state untouched.
            Rejection::IllegalTarget {
                actor: unit,
                target: target.map(Target::id),
                context: self.context(Some(unit)).with_message("resolver refused the action"),
            }
        })?;

        let outcome = self.commit(unit, effect, boss_phase);
        self.state.selection.clear();
        if !self.state.is_over() {
            self.advance_turn();
        }
        Ok(outcome)
    }

    /// Remembers the acting unit for [`Self::submit_selected`].
    pub fn select_unit(&mut self, unit: UnitId) -> Result<(), Rejection> {
        self.ensure_player_turn(Some(unit))?;
        self.living_player(unit)?;
        self.state.selection.unit = Some(unit);
        Ok(())
    }

    /// Remembers a target for the selected unit. Requires a selected unit.
    pub fn select_target(&mut self, target: UnitId) -> Result<(), Rejection> {
        self.ensure_player_turn(None)?;
        let unit = self.selected_unit()?;
        let resolved = self.resolve_target(unit, Some(target))?;
        self.state.selection.target = Some(resolved.id());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    /// Submits `action` with the stored selection.
    pub fn submit_selected(&mut self, action: ActionKind) -> Result<ActionOutcome, Rejection> {
        self.ensure_player_turn(None)?;
        let unit = self.selected_unit()?;
        let target = self.state.selection.target;
        self.submit_player_action(unit, target, action)
    }

    /// Starts (or resumes) the current automated phase.
    ///
    /// Fails with `IllegalPhase` during the player turn or after the match
    /// ended. The returned sequence yields one outcome per acting unit and
    /// advances the turn after the last one.
    pub fn advance_automated_phase<P>(self, policy: &'a P) -> Result<AutomatedPhase<'a, P>, Rejection>
    where
        P: OpponentPolicy + ?Sized,
    {
        if self.state.is_over() || !self.state.phase().is_automated() {
            return Err(Rejection::IllegalPhase {
                phase: self.state.phase(),
                over: self.state.is_over(),
                context: self.context(None),
            });
        }
        Ok(AutomatedPhase::new(self, policy))
    }

    fn context(&self, actor: Option<UnitId>) -> ErrorContext {
        let context = ErrorContext::new(self.state.turn.action_nonce, self.state.turn.number);
        match actor {
            Some(actor) => context.with_actor(actor),
            None => context,
        }
    }

    fn ensure_player_turn(&self, actor: Option<UnitId>) -> Result<(), Rejection> {
        if self.state.is_over() || self.state.phase() != TurnPhase::Player {
            return Err(Rejection::IllegalPhase {
                phase: self.state.phase(),
                over: self.state.is_over(),
                context: self.context(actor),
            });
        }
        Ok(())
    }

    fn living_player(&self, unit: UnitId) -> Result<&CombatUnit, Rejection> {
        self.state
            .player
            .get(unit)
            .filter(|candidate| candidate.is_alive())
            .ok_or_else(|| Rejection::UnknownUnit {
                unit: Some(unit),
                context: self.context(Some(unit)),
            })
    }

    fn selected_unit(&self) -> Result<UnitId, Rejection> {
        let unit = self.state.selection.unit.ok_or_else(|| Rejection::UnknownUnit {
            unit: None,
            context: self.context(None).with_message("no unit selected"),
        })?;
        self.living_player(unit)?;
        Ok(unit)
    }

    /// The boss is the only legal target once the enemy roster is cleared.
    fn resolve_target(&self, actor: UnitId, target: Option<UnitId>) -> Result<Target, Rejection> {
        let boss_active = self.state.boss_is_active();
        match target {
            None if boss_active => Ok(Target::Boss),
            Some(id) if id.is_boss() && boss_active => Ok(Target::Boss),
            Some(id) if self.state.enemy.get(id).is_some_and(CombatUnit::is_alive) => {
                Ok(Target::Unit(id))
            }
            _ => Err(Rejection::IllegalTarget {
                actor,
                target,
                context: self.context(Some(actor)),
            }),
        }
    }

    /// Dispatches an action to the combat resolver.
    ///
    /// `None` means the resolver refused and nothing changed.
    fn apply(&mut self, actor: UnitId, action: ActionKind, target: Option<Target>) -> Option<ActionEffect> {
        let state = &mut *self.state;

        if actor.is_boss() {
            return match action {
                ActionKind::Attack => {
                    let Target::Unit(id) = target? else {
                        return None;
                    };
                    combat::boss_basic_attack(&state.boss, state.player.get_mut(id)?)
                        .map(ActionEffect::Attack)
                }
                ActionKind::Special => {
                    combat::boss_dark_wave(&mut state.boss, state.player.units_mut())
                        .map(ActionEffect::DarkWave)
                }
            };
        }

        let (own, foes) = if state.player.position(actor).is_some() {
            (&mut state.player, &mut state.enemy)
        } else {
            (&mut state.enemy, &mut state.player)
        };
        let boss = &mut state.boss;
        let kind = own.get(actor)?.kind();

        match (action, kind) {
            (ActionKind::Attack, _) => {
                let attacker = own.get(actor)?;
                let hit = match target? {
                    Target::Unit(id) => combat::basic_attack(attacker, foes.get_mut(id)?),
                    Target::Boss => combat::basic_attack_boss(attacker, boss),
                };
                hit.map(ActionEffect::Attack)
            }
            (ActionKind::Special, UnitKind::Red) => {
                let attacker = own.get_mut(actor)?;
                match target {
                    Some(Target::Boss) => combat::red_special_vs_boss(attacker, boss)
                        .map(|hit| ActionEffect::RageBurst(vec![hit])),
                    _ => combat::red_special(attacker, foes.units_mut()).map(ActionEffect::RageBurst),
                }
            }
            (ActionKind::Special, UnitKind::Blue) => combat::blue_special(actor, own.units_mut())
                .map(|shielded| ActionEffect::EmpathyShield { shielded }),
            (ActionKind::Special, UnitKind::Yellow) => {
                let attacker = own.get_mut(actor)?;
                let strike = match target? {
                    Target::Unit(id) => combat::yellow_special(attacker, foes.get_mut(id)?),
                    Target::Boss => combat::yellow_special_vs_boss(attacker, boss),
                };
                strike.map(ActionEffect::LightningDash)
            }
        }
    }

    /// Books a resolved action: nonce, narration, enrage notice and the
    /// terminal check.
    fn commit(&mut self, actor: UnitId, effect: ActionEffect, boss_phase: BossPhase) -> ActionOutcome {
        let outcome = ActionOutcome {
            nonce: self.state.turn.action_nonce,
            turn: self.state.turn.number,
            phase: self.state.turn.phase,
            actor,
            boss_enraged: boss_phase == BossPhase::First
                && self.state.boss.phase() == BossPhase::Second,
            effect,
        };
        self.state.turn.action_nonce += 1;

        for line in narration::action_lines(self.state, actor, &outcome.effect) {
            self.state.narrate(line);
        }
        if outcome.boss_enraged {
            self.state.narrate(narration::ENRAGE);
        }
        self.check_terminal();
        outcome
    }
}
