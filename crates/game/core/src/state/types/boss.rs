//! The boss singleton.

use crate::config::BattleConfig;

use super::common::UnitId;

/// Difficulty tier of the boss. Moves from `First` to `Second` once and
/// never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BossPhase {
    First,
    Second,
}

impl BossPhase {
    pub const fn number(self) -> u8 {
        match self {
            BossPhase::First => 1,
            BossPhase::Second => 2,
        }
    }
}

/// Multi-phase boss. Has no shield and sits outside the effectiveness table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    hp: u32,
    max_hp: u32,
    atk: u32,
    base_atk: u32,
    def: u32,
    alive: bool,
    phase: BossPhase,
    special_cooldown: u32,
}

impl Boss {
    pub const NAME: &'static str = "Dark Bubble";
    pub const BASE_HP: u32 = 300;
    pub const BASE_ATK: u32 = 35;
    pub const BASE_DEF: u32 = 20;

    pub fn new() -> Self {
        Self::with_stats(Self::BASE_HP, Self::BASE_ATK, Self::BASE_DEF)
    }

    pub fn with_stats(max_hp: u32, atk: u32, def: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            atk,
            base_atk: atk,
            def,
            alive: max_hp > 0,
            phase: BossPhase::First,
            special_cooldown: 0,
        }
    }

    /// Overrides current hp, clamped to `max_hp` (builder pattern).
    ///
    /// The phase is left untouched; only damage triggers the transition.
    #[must_use]
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self.alive = self.hp > 0;
        self
    }

    pub fn id(&self) -> UnitId {
        UnitId::BOSS
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

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn special_cooldown(&self) -> u32 {
        self.special_cooldown
    }

    /// Applies incoming damage and returns the hp loss before clamping.
    ///
    /// Crossing half of `max_hp` while in the first phase flips to the second
    /// phase and adds [`BattleConfig::BOSS_ENRAGE_BONUS`] to attack.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let loss = amount.saturating_sub(self.def).max(1);
        self.hp = self.hp.saturating_sub(loss);

        if self.phase == BossPhase::First && self.hp <= self.max_hp / 2 {
            self.phase = BossPhase::Second;
            self.atk = self.atk.saturating_add(BattleConfig::BOSS_ENRAGE_BONUS);
        }

        if self.hp == 0 {
            self.alive = false;
        }
        loss
    }

    /// Cooldown gate for Dark Wave.
    pub fn use_dark_ability(&mut self) -> bool {
        if self.special_cooldown > 0 {
            return false;
        }
        self.special_cooldown = BattleConfig::BOSS_SPECIAL_COOLDOWN;
        true
    }

    pub fn advance_turn_counters(&mut self) {
        if self.special_cooldown > 0 {
            self.special_cooldown -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.alive = true;
        self.phase = BossPhase::First;
        self.atk = self.base_atk;
        self.special_cooldown = 0;
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_half_hp_enrages_exactly_once() {
        let mut boss = Boss::new().with_hp(160);
        assert_eq!(boss.phase(), BossPhase::First);

        // 30 - 20 def = 10 loss: 160 -> 150 = max_hp / 2
        boss.take_damage(30);
        assert_eq!(boss.hp(), 150);
        assert_eq!(boss.phase(), BossPhase::Second);
        assert_eq!(boss.atk(), Boss::BASE_ATK + BattleConfig::BOSS_ENRAGE_BONUS);

        boss.take_damage(60);
        assert_eq!(boss.hp(), 110);
        assert_eq!(boss.phase(), BossPhase::Second);
        assert_eq!(boss.atk(), Boss::BASE_ATK + BattleConfig::BOSS_ENRAGE_BONUS);
    }

    #[test]
    fn enrage_bonus_saturates_huge_attack() {
        let mut boss = Boss::with_stats(100, u32::MAX - 3, 0);
        boss.take_damage(60);
        assert_eq!(boss.phase(), BossPhase::Second);
        assert_eq!(boss.atk(), u32::MAX);
    }

    #[test]
    fn stays_calm_above_threshold() {
        let mut boss = Boss::new();
        boss.take_damage(50);
        assert_eq!(boss.hp(), 270);
        assert_eq!(boss.phase(), BossPhase::First);
        assert_eq!(boss.atk(), Boss::BASE_ATK);
    }

    #[test]
    fn lethal_blow_kills_and_enrages() {
        let mut boss = Boss::new().with_hp(5);
        boss.take_damage(100);
        assert_eq!(boss.hp(), 0);
        assert!(!boss.is_alive());
        assert_eq!(boss.phase(), BossPhase::Second);
    }

    #[test]
    fn dark_ability_gate_uses_longer_cooldown() {
        let mut boss = Boss::new();
        assert!(boss.use_dark_ability());
        assert_eq!(boss.special_cooldown(), BattleConfig::BOSS_SPECIAL_COOLDOWN);
        assert!(!boss.use_dark_ability());
        boss.advance_turn_counters();
        assert_eq!(boss.special_cooldown(), BattleConfig::BOSS_SPECIAL_COOLDOWN - 1);
    }

    #[test]
    fn reset_restores_base_attack_and_phase() {
        let mut boss = Boss::new();
        boss.take_damage(200);
        boss.use_dark_ability();
        boss.reset();
        assert_eq!(boss, Boss::new());
    }
}
