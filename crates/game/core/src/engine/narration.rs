//! Battle log lines for resolved actions.

use crate::combat::Hit;
use crate::state::{Boss, MatchResult, MatchState, UnitId};

use super::ActionEffect;

const DARK_WAVE: &str = "Dark Wave";

pub(super) const ENRAGE: &str = "Dark Bubble enters its second phase! Attack increased!";

fn label(state: &MatchState, id: UnitId) -> String {
    if id.is_boss() {
        return Boss::NAME.to_owned();
    }
    state
        .unit(id)
        .map_or_else(|| id.to_string(), |unit| unit.label())
}

fn special_name(state: &MatchState, actor: UnitId) -> &'static str {
    if actor.is_boss() {
        return DARK_WAVE;
    }
    state.unit(actor).map_or("special", |unit| unit.kind().special_name())
}

fn defeat_line(state: &MatchState, hit: &Hit, indent: &str) -> Option<String> {
    hit.defeated
        .then(|| format!("{indent}{} is defeated!", label(state, hit.target)))
}

/// Lines describing one resolved action, in log order.
pub(super) fn action_lines(state: &MatchState, actor: UnitId, effect: &ActionEffect) -> Vec<String> {
    let name = label(state, actor);
    let mut lines = Vec::new();

    match effect {
        ActionEffect::Attack(hit) => {
            lines.push(format!(
                "{name} attacks {} for {} damage!",
                label(state, hit.target),
                hit.raw
            ));
            lines.extend(defeat_line(state, hit, "  "));
        }
        ActionEffect::RageBurst(hits) | ActionEffect::DarkWave(hits) => {
            let on_boss = hits.len() == 1 && hits[0].target.is_boss();
            let special = special_name(state, actor);
            if on_boss {
                lines.push(format!("{name} uses {special} on the boss!"));
            } else {
                lines.push(format!("{name} uses {special}!"));
            }
            for hit in hits {
                lines.push(format!(
                    "  -> {} takes {} damage",
                    label(state, hit.target),
                    hit.raw
                ));
                lines.extend(defeat_line(state, hit, "    "));
            }
        }
        ActionEffect::EmpathyShield { shielded } => {
            lines.push(format!("{name} uses {}!", special_name(state, actor)));
            lines.push(format!("  -> Shield raised for {} allies!", shielded.len()));
        }
        ActionEffect::LightningDash(strike) => {
            let special = special_name(state, actor);
            if strike.target().is_boss() {
                lines.push(format!("{name} uses {special} on the boss!"));
            } else {
                lines.push(format!("{name} uses {special}!"));
            }
            lines.push(format!(
                "  -> {} takes {} damage!",
                label(state, strike.target()),
                strike.raw_total()
            ));
            if strike.defeated() {
                lines.push(format!("    {} is defeated!", label(state, strike.target())));
            }
        }
    }

    lines
}

pub(super) fn result_line(result: MatchResult) -> &'static str {
    match result {
        MatchResult::Victory => "Victory! The Dark Bubble is defeated!",
        MatchResult::Defeat => "Defeat! All your bubbles have fallen...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DoubleStrike;

    fn hit(target: u32, raw: u32, defeated: bool) -> Hit {
        Hit {
            target: UnitId(target),
            raw,
            effective: raw,
            defeated,
        }
    }

    #[test]
    fn attack_line_names_both_sides() {
        let state = MatchState::default();
        let lines = action_lines(&state, UnitId(1), &ActionEffect::Attack(hit(12, 45, false)));
        assert_eq!(lines, vec!["Red attacks Enemy Yellow for 45 damage!"]);
    }

    #[test]
    fn rage_burst_lists_each_target_and_defeats() {
        let state = MatchState::default();
        let effect = ActionEffect::RageBurst(vec![hit(10, 24, false), hit(12, 36, true)]);
        let lines = action_lines(&state, UnitId(1), &effect);
        assert_eq!(
            lines,
            vec![
                "Red uses Rage Burst!",
                "  -> Enemy Red takes 24 damage",
                "  -> Enemy Yellow takes 36 damage",
                "    Enemy Yellow is defeated!",
            ]
        );
    }

    #[test]
    fn boss_variants_mention_the_boss() {
        let state = MatchState::default();
        let strike = DoubleStrike {
            first: hit(999, 27, false),
            second: Some(hit(999, 27, false)),
        };
        let lines = action_lines(&state, UnitId(3), &ActionEffect::LightningDash(strike));
        assert_eq!(
            lines,
            vec![
                "Yellow uses Lightning Dash on the boss!",
                "  -> Dark Bubble takes 54 damage!",
            ]
        );

        let wave = ActionEffect::DarkWave(vec![hit(1, 24, false), hit(2, 24, false)]);
        let lines = action_lines(&state, UnitId::BOSS, &wave);
        assert_eq!(lines[0], "Dark Bubble uses Dark Wave!");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn shield_line_counts_other_allies() {
        let state = MatchState::default();
        let effect = ActionEffect::EmpathyShield {
            shielded: vec![UnitId(10), UnitId(12)],
        };
        let lines = action_lines(&state, UnitId(11), &effect);
        assert_eq!(
            lines,
            vec!["Enemy Blue uses Empathy Shield!", "  -> Shield raised for 2 allies!"]
        );
    }
}
