use super::common::UnitId;

/// Ephemeral player selection, cleared on every phase transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub unit: Option<UnitId>,
    pub target: Option<UnitId>,
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_none() && self.target.is_none()
    }
}
