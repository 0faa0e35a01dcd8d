use std::fmt;

/// Stable identifier for a combat unit, unique across both rosters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    /// Reserved identifier for the boss singleton.
    pub const BOSS: Self = Self(999);

    /// First identifier handed out to the player roster.
    pub const PLAYER_BASE: Self = Self(1);

    /// First identifier handed out to the enemy roster.
    pub const ENEMY_BASE: Self = Self(10);

    /// Returns true if this identifier refers to the boss.
    #[inline]
    pub const fn is_boss(self) -> bool {
        self.0 == Self::BOSS.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which roster a unit fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}
