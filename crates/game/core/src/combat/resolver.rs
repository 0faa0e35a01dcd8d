//! Attack and special-ability resolution.
//!
//! Damage arithmetic is always `floor(atk * multipliers)` handed to the
//! target's `take_damage`, so multipliers apply before defense or shields.

use crate::config::BattleConfig;
use crate::state::{Boss, CombatUnit, UnitId};

use super::damage::{Percent, scale};
use super::effectiveness::effectiveness;
use super::hit::{DoubleStrike, Hit};

fn strike_unit(target: &mut CombatUnit, raw: u32) -> Hit {
    let effective = target.take_damage(raw);
    Hit {
        target: target.id(),
        raw,
        effective,
        defeated: !target.is_alive(),
    }
}

fn strike_boss(boss: &mut Boss, raw: u32) -> Hit {
    let effective = boss.take_damage(raw);
    Hit {
        target: boss.id(),
        raw,
        effective,
        defeated: !boss.is_alive(),
    }
}

/// Roster unit against roster unit, scaled by the effectiveness table.
///
/// Returns `None` without side effects unless both units are alive.
pub fn basic_attack(attacker: &CombatUnit, target: &mut CombatUnit) -> Option<Hit> {
    if !attacker.is_alive() || !target.is_alive() {
        return None;
    }
    let raw = scale(
        attacker.atk(),
        &[effectiveness(attacker.kind(), target.kind())],
    );
    Some(strike_unit(target, raw))
}

/// Roster unit against the boss at a flat x1.1.
pub fn basic_attack_boss(attacker: &CombatUnit, boss: &mut Boss) -> Option<Hit> {
    if !attacker.is_alive() || !boss.is_alive() {
        return None;
    }
    let raw = scale(attacker.atk(), &[Percent::VS_BOSS]);
    Some(strike_boss(boss, raw))
}

/// Boss against a roster unit with its flat attack value.
pub fn boss_basic_attack(boss: &Boss, target: &mut CombatUnit) -> Option<Hit> {
    if !boss.is_alive() || !target.is_alive() {
        return None;
    }
    Some(strike_unit(target, boss.atk()))
}

/// Rage Burst: hits every living unit in `enemies` at x0.8 times effectiveness.
///
/// Hits are returned in the iteration order of `enemies`.
pub fn red_special(attacker: &mut CombatUnit, enemies: &mut [CombatUnit]) -> Option<Vec<Hit>> {
    if !attacker.is_alive() || !attacker.use_special_ability() {
        return None;
    }
    let hits = enemies
        .iter_mut()
        .filter(|enemy| enemy.is_alive())
        .map(|enemy| {
            let raw = scale(
                attacker.atk(),
                &[
                    Percent::RAGE_BURST,
                    effectiveness(attacker.kind(), enemy.kind()),
                ],
            );
            strike_unit(enemy, raw)
        })
        .collect();
    Some(hits)
}

/// Rage Burst against the boss: a single x1.2 hit.
pub fn red_special_vs_boss(attacker: &mut CombatUnit, boss: &mut Boss) -> Option<Hit> {
    if !attacker.is_alive() || !boss.is_alive() || !attacker.use_special_ability() {
        return None;
    }
    let raw = scale(attacker.atk(), &[Percent::RAGE_BURST_VS_BOSS]);
    Some(strike_boss(boss, raw))
}

/// Empathy Shield: the caster shields itself for three turns and every other
/// living ally for two.
///
/// Returns the ids of the *other* allies shielded. `None` if `caster` is not
/// in `allies`, is dead, or its gate is closed.
pub fn blue_special(caster: UnitId, allies: &mut [CombatUnit]) -> Option<Vec<UnitId>> {
    let caster_unit = allies.iter_mut().find(|unit| unit.id() == caster)?;
    if !caster_unit.is_alive() || !caster_unit.use_special_ability() {
        return None;
    }
    caster_unit.activate_shield(BattleConfig::SELF_SHIELD_TURNS);

    let shielded = allies
        .iter_mut()
        .filter(|ally| ally.id() != caster && ally.is_alive())
        .map(|ally| {
            ally.activate_shield(BattleConfig::ALLY_SHIELD_TURNS);
            ally.id()
        })
        .collect();
    Some(shielded)
}

/// Lightning Dash: two basic attacks for a single gate check.
///
/// The second strike is skipped when the first one kills.
pub fn yellow_special(attacker: &mut CombatUnit, target: &mut CombatUnit) -> Option<DoubleStrike> {
    if !attacker.is_alive() || !target.is_alive() || !attacker.use_special_ability() {
        return None;
    }
    let first = basic_attack(attacker, target)?;
    let second = basic_attack(attacker, target);
    Some(DoubleStrike { first, second })
}

/// Lightning Dash against the boss, using the boss multiplier for both hits.
pub fn yellow_special_vs_boss(attacker: &mut CombatUnit, boss: &mut Boss) -> Option<DoubleStrike> {
    if !attacker.is_alive() || !boss.is_alive() || !attacker.use_special_ability() {
        return None;
    }
    let first = basic_attack_boss(attacker, boss)?;
    let second = basic_attack_boss(attacker, boss);
    Some(DoubleStrike { first, second })
}

/// Dark Wave: flat `floor(atk * 0.7)` to every living unit in `enemies`.
pub fn boss_dark_wave(boss: &mut Boss, enemies: &mut [CombatUnit]) -> Option<Vec<Hit>> {
    if !boss.is_alive() || !boss.use_dark_ability() {
        return None;
    }
    let raw = scale(boss.atk(), &[Percent::DARK_WAVE]);
    let hits = enemies
        .iter_mut()
        .filter(|enemy| enemy.is_alive())
        .map(|enemy| strike_unit(enemy, raw))
        .collect();
    Some(hits)
}

/// Heals a living unit; dead units are left alone.
pub fn heal(target: &mut CombatUnit, amount: u32) {
    if target.is_alive() {
        target.heal(amount);
    }
}
