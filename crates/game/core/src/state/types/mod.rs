pub mod boss;
pub mod common;
pub mod roster;
pub mod selection;
pub mod turn;
pub mod unit;

pub use boss::{Boss, BossPhase};
pub use common::{Side, UnitId};
pub use roster::Roster;
pub use selection::Selection;
pub use turn::{TurnPhase, TurnState};
pub use unit::{CombatUnit, UnitKind, UnitTemplate};
