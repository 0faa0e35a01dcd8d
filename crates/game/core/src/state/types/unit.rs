//! Roster units and their per-kind stat templates.
//!
//! A [`CombatUnit`] only knows about itself: damage intake, healing, the
//! special-ability gate and per-turn counters. Cross-unit rules live in
//! [`crate::combat`].

use crate::config::BattleConfig;

use super::common::{Side, UnitId};

/// Closed set of roster unit kinds.
///
/// The kinds form a rock-paper-scissors relation described by
/// [`crate::combat::effectiveness`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum UnitKind {
    Red,
    Blue,
    Yellow,
}

/// Fixed starting stats for a unit kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitTemplate {
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
}

impl UnitKind {
    /// Starting stats for this kind.
    pub const fn template(self) -> UnitTemplate {
        match self {
            UnitKind::Red => UnitTemplate {
                max_hp: 100,
                atk: 30,
                def: 10,
            },
            UnitKind::Blue => UnitTemplate {
                max_hp: 120,
                atk: 20,
                def: 25,
            },
            UnitKind::Yellow => UnitTemplate {
                max_hp: 80,
                atk: 25,
                def: 15,
            },
        }
    }

    /// Display name of the kind's special ability.
    pub const fn special_name(self) -> &'static str {
        match self {
            UnitKind::Red => "Rage Burst",
            UnitKind::Blue => "Empathy Shield",
            UnitKind::Yellow => "Lightning Dash",
        }
    }
}

/// A player or enemy roster unit.
///
/// Invariants maintained by every mutator:
/// - `hp <= max_hp`
/// - `alive == (hp > 0)`
/// - `shielded` is cleared on the decrement that brings `shield_duration` to 0
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatUnit {
    id: UnitId,
    kind: UnitKind,
    side: Side,
    hp: u32,
    max_hp: u32,
    atk: u32,
    def: u32,
    alive: bool,
    special_cooldown: u32,
    shielded: bool,
    shield_duration: u32,
}

impl CombatUnit {
    /// Creates a unit at full health using the kind's template.
    pub fn new(id: UnitId, kind: UnitKind, side: Side) -> Self {
        let template = kind.template();
        Self {
            id,
            kind,
            side,
            hp: template.max_hp,
            max_hp: template.max_hp,
            atk: template.atk,
            def: template.def,
            alive: true,
            special_cooldown: 0,
            shielded: false,
            shield_duration: 0,
        }
    }

    /// Overrides attack and defense (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, atk: u32, def: u32) -> Self {
        self.atk = atk;
        self.def = def;
        self
    }

    /// Overrides current hp, clamped to `max_hp` (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self.alive = self.hp > 0;
        self
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn atk(&self) -> u32 {
        self.atk
    }

    pub fn def(&self) -> u32 {
        self.def
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn special_cooldown(&self) -> u32 {
        self.special_cooldown
    }

    pub fn is_shielded(&self) -> bool {
        self.shielded
    }

    pub fn shield_duration(&self) -> u32 {
        self.shield_duration
    }

    /// Name used in battle narration, e.g. `Red` or `Enemy Blue`.
    pub fn label(&self) -> String {
        match self.side {
            Side::Player => self.kind.to_string(),
            Side::Enemy => format!("Enemy {}", self.kind),
        }
    }

    /// Applies incoming damage and returns the hp loss before clamping.
    ///
    /// An active shield halves the incoming amount (rounded down) and ignores
    /// defense. Otherwise defense is subtracted with a floor of 1.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let loss = if self.shielded && self.shield_duration > 0 {
            amount / 2
        } else {
            amount.saturating_sub(self.def).max(1)
        };

        self.hp = self.hp.saturating_sub(loss);
        if self.hp == 0 {
            self.alive = false;
        }
        loss
    }

    /// Restores hp up to `max_hp`. Dead units stay dead.
    pub fn heal(&mut self, amount: u32) {
        if !self.alive {
            return;
        }
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Cooldown gate for every special ability.
    ///
    /// Returns false without touching state while the cooldown is running.
    pub fn use_special_ability(&mut self) -> bool {
        if self.special_cooldown > 0 {
            return false;
        }
        self.special_cooldown = BattleConfig::SPECIAL_COOLDOWN;
        true
    }

    pub fn activate_shield(&mut self, duration: u32) {
        self.shielded = true;
        self.shield_duration = duration;
    }

    pub fn advance_turn_counters(&mut self) {
        if self.special_cooldown > 0 {
            self.special_cooldown -= 1;
        }
        if self.shield_duration > 0 {
            self.shield_duration -= 1;
            if self.shield_duration == 0 {
                self.shielded = false;
            }
        }
    }

    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.alive = true;
        self.special_cooldown = 0;
        self.shielded = false;
        self.shield_duration = 0;
    }
}
