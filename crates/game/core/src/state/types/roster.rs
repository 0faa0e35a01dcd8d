//! Fixed three-unit rosters.

use arrayvec::ArrayVec;
use strum::IntoEnumIterator;

use crate::config::BattleConfig;

use super::common::{Side, UnitId};
use super::unit::{CombatUnit, UnitKind};

/// Ordered units fighting for one side, one per [`UnitKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    side: Side,
    units: ArrayVec<CombatUnit, { BattleConfig::ROSTER_SIZE }>,
}

impl Roster {
    /// Builds a full-health roster in Red, Blue, Yellow order with
    /// consecutive ids starting at `first_id`.
    pub fn new(side: Side, first_id: UnitId) -> Self {
        let units = UnitKind::iter()
            .zip(first_id.0..)
            .map(|(kind, id)| CombatUnit::new(UnitId(id), kind, side))
            .collect();
        Self { side, units }
    }

    /// Standard player roster (ids 1, 2, 3).
    pub fn player() -> Self {
        Self::new(Side::Player, UnitId::PLAYER_BASE)
    }

    /// Standard enemy roster (ids 10, 11, 12).
    pub fn enemy() -> Self {
        Self::new(Side::Enemy, UnitId::ENEMY_BASE)
    }

    /// Builds a roster from explicit units, keeping at most
    /// [`BattleConfig::ROSTER_SIZE`] of them.
    pub fn from_units(side: Side, units: impl IntoIterator<Item = CombatUnit>) -> Self {
        let units = units
            .into_iter()
            .take(BattleConfig::ROSTER_SIZE)
            .collect();
        Self { side, units }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn get(&self, id: UnitId) -> Option<&CombatUnit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> Option<&mut CombatUnit> {
        self.units.iter_mut().find(|unit| unit.id() == id)
    }

    pub fn position(&self, id: UnitId) -> Option<usize> {
        self.units.iter().position(|unit| unit.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatUnit> {
        self.units.iter()
    }

    pub fn units(&self) -> &[CombatUnit] {
        &self.units
    }

    pub(crate) fn units_mut(&mut self) -> &mut [CombatUnit] {
        &mut self.units
    }

    pub fn living(&self) -> impl Iterator<Item = &CombatUnit> {
        self.units.iter().filter(|unit| unit.is_alive())
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    pub fn any_alive(&self) -> bool {
        self.units.iter().any(CombatUnit::is_alive)
    }

    pub fn all_dead(&self) -> bool {
        !self.any_alive()
    }

    /// Index of the first living unit at or after `start`.
    pub fn next_living_from(&self, start: usize) -> Option<usize> {
        self.units
            .iter()
            .enumerate()
            .skip(start)
            .find(|(_, unit)| unit.is_alive())
            .map(|(index, _)| index)
    }

    /// Living units sharing the lowest current hp, in roster order.
    pub fn weakest(&self) -> Vec<&CombatUnit> {
        let Some(min_hp) = self.living().map(CombatUnit::hp).min() else {
            return Vec::new();
        };
        self.living().filter(|unit| unit.hp() == min_hp).collect()
    }

    pub(crate) fn advance_turn_counters(&mut self) {
        self.units
            .iter_mut()
            .for_each(CombatUnit::advance_turn_counters);
    }
}
