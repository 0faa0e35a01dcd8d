//! Combat resolution system.
//!
//! Pure functions that compute damage, apply shields and resolve special
//! abilities on units borrowed from the match state. Nothing here retains a
//! reference or reads turn bookkeeping.
//!
//! # Core Functions
//!
//! - `basic_attack`, `basic_attack_boss`, `boss_basic_attack`: single hits
//! - `red_special`, `blue_special`, `yellow_special`: roster specials
//! - `boss_dark_wave`: the boss special
//!
//! Every special passes through the attacker's cooldown gate before any side
//! effect; a closed gate returns `None` and leaves every unit untouched.

pub mod damage;
pub mod effectiveness;
pub mod hit;
pub mod resolver;

pub use damage::{Percent, scale};
pub use effectiveness::effectiveness;
pub use hit::{DoubleStrike, Hit};
pub use resolver::{
    basic_attack, basic_attack_boss, blue_special, boss_basic_attack, boss_dark_wave, heal,
    red_special, red_special_vs_boss, yellow_special, yellow_special_vs_boss,
};
