use crate::state::UnitId;

/// A single resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    pub target: UnitId,
    /// Scaled attack before defense or shield; the number the log shows.
    pub raw: u32,
    /// Hp loss computed by the target before clamping at 0.
    pub effective: u32,
    /// The target died from this hit.
    pub defeated: bool,
}

/// Lightning Dash result: the second strike is skipped when the first kills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoubleStrike {
    pub first: Hit,
    pub second: Option<Hit>,
}

impl DoubleStrike {
    pub fn target(&self) -> UnitId {
        self.first.target
    }

    pub fn raw_total(&self) -> u32 {
        self.first
            .raw
            .saturating_add(self.second.map_or(0, |hit| hit.raw))
    }

    pub fn effective_total(&self) -> u32 {
        self.first
            .effective
            .saturating_add(self.second.map_or(0, |hit| hit.effective))
    }

    pub fn defeated(&self) -> bool {
        self.first.defeated || self.second.is_some_and(|hit| hit.defeated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(raw: u32, effective: u32, defeated: bool) -> Hit {
        Hit {
            target: UnitId(3),
            raw,
            effective,
            defeated,
        }
    }

    #[test]
    fn totals_skip_missing_second_strike() {
        let strike = DoubleStrike {
            first: hit(25, 10, true),
            second: None,
        };
        assert_eq!(strike.raw_total(), 25);
        assert_eq!(strike.effective_total(), 10);
        assert!(strike.defeated());
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let strike = DoubleStrike {
            first: hit(u32::MAX, u32::MAX - 1, false),
            second: Some(hit(u32::MAX, u32::MAX - 1, true)),
        };
        assert_eq!(strike.raw_total(), u32::MAX);
        assert_eq!(strike.effective_total(), u32::MAX);
    }
}
