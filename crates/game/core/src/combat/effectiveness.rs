use crate::state::UnitKind;

use super::damage::Percent;

/// Type multiplier for a roster attacker against a roster defender.
///
/// Red beats Yellow, Yellow beats Blue, and Blue is blunted against Red.
/// Every other pairing, including same-kind and the reverse directions, is
/// neutral. The boss never appears in this table.
pub fn effectiveness(attacker: UnitKind, defender: UnitKind) -> Percent {
    use UnitKind::*;
    match (attacker, defender) {
        (Red, Yellow) => Percent::STRONG,
        (Yellow, Blue) => Percent::STRONG,
        (Blue, Red) => Percent::WEAK,
        _ => Percent::NEUTRAL,
    }
}
