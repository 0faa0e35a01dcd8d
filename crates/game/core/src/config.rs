/// Battle rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Base seed for the opponent policy. Combined with the action nonce so
    /// every automated decision draws from its own stream.
    pub seed: u64,

    /// Chance (out of 100) that an enemy-roster unit tries its special.
    pub enemy_special_chance: u32,

    /// Chance (out of 100) that the boss tries its Dark Wave.
    pub boss_special_chance: u32,

    /// Number of narrated entries retained by the battle log.
    pub log_capacity: usize,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Units per roster (one per kind).
    pub const ROSTER_SIZE: usize = 3;

    // ===== rule constants =====
    /// Cooldown applied by a unit's special ability.
    pub const SPECIAL_COOLDOWN: u32 = 3;
    /// Cooldown applied by the boss's Dark Wave.
    pub const BOSS_SPECIAL_COOLDOWN: u32 = 4;
    /// Shield duration granted to allies by Empathy Shield.
    pub const ALLY_SHIELD_TURNS: u32 = 2;
    /// Shield duration the shield caster grants itself.
    pub const SELF_SHIELD_TURNS: u32 = 3;
    /// Attack bonus gained once when the boss enters its second phase.
    pub const BOSS_ENRAGE_BONUS: u32 = 10;
    /// Minimum living player units before the boss bothers with Dark Wave.
    pub const DARK_WAVE_MIN_TARGETS: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0;
    pub const DEFAULT_ENEMY_SPECIAL_CHANCE: u32 = 30;
    pub const DEFAULT_BOSS_SPECIAL_CHANCE: u32 = 40;
    pub const DEFAULT_LOG_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            enemy_special_chance: Self::DEFAULT_ENEMY_SPECIAL_CHANCE,
            boss_special_chance: Self::DEFAULT_BOSS_SPECIAL_CHANCE,
            log_capacity: Self::DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
