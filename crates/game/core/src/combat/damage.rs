//! Fixed-point damage multipliers.

/// Damage multiplier expressed in percent (`150` = x1.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percent(pub u32);

impl Percent {
    pub const NEUTRAL: Self = Self(100);
    /// Type advantage.
    pub const STRONG: Self = Self(150);
    /// Blue's blunted strike against Red.
    pub const WEAK: Self = Self(70);
    /// Flat multiplier for roster attacks against the boss.
    pub const VS_BOSS: Self = Self(110);
    /// Rage Burst per-target scaling.
    pub const RAGE_BURST: Self = Self(80);
    /// Rage Burst against the boss.
    pub const RAGE_BURST_VS_BOSS: Self = Self(120);
    /// Dark Wave per-target scaling.
    pub const DARK_WAVE: Self = Self(70);
}

/// Scales `value` by every multiplier and rounds down once at the end.
///
/// # Formula
///
/// ```text
/// floor(value * m1/100 * m2/100 * ...)
/// ```
pub fn scale(value: u32, multipliers: &[Percent]) -> u32 {
    let (numerator, denominator) = multipliers.iter().fold(
        (u128::from(value), 1u128),
        |(num, den), m| (num * u128::from(m.0), den * 100),
    );
    u32::try_from(numerator / denominator).unwrap_or(u32::MAX)
}
