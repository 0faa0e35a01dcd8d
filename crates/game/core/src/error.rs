//! Rejection taxonomy for caller intents.
//!
//! The engine has no I/O, so nothing fails irrecoverably. Every error here is
//! a local rejection returned before any state is touched.

use crate::state::{TurnPhase, UnitId};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Retry may succeed later, e.g. once a cooldown expires.
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Contextual information captured when a rejection is created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Unit that submitted the intent (if known).
    pub actor: Option<UnitId>,

    /// Action nonce at the time of the rejection.
    pub nonce: u64,

    /// Turn number at the time of the rejection.
    pub turn: u32,

    /// Optional static message providing additional context.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub message: Option<&'static str>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(nonce: u64, turn: u32) -> Self {
        Self {
            actor: None,
            nonce,
            turn,
            message: None,
        }
    }

    #[must_use]
    pub const fn with_actor(mut self, actor: UnitId) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Common classification interface for battle-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Stable identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Fieldless mirror of [`Rejection`] for matching and UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RejectionKind {
    IllegalPhase,
    UnknownUnit,
    IllegalTarget,
    AbilityOnCooldown,
}

/// Reasons an intent is refused. A rejected call never mutates state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// Submitted outside the player turn, or after the match ended.
    #[error("action not allowed during {phase} phase (match over: {over})")]
    IllegalPhase {
        phase: TurnPhase,
        over: bool,
        context: ErrorContext,
    },

    /// No living player unit with this id (`None` when nothing is selected).
    #[error("unknown or defeated unit {unit:?}")]
    UnknownUnit {
        unit: Option<UnitId>,
        context: ErrorContext,
    },

    /// Target is dead, on the wrong side, missing, or the boss while the
    /// enemy roster still stands.
    #[error("illegal target {target:?} for unit {actor}")]
    IllegalTarget {
        actor: UnitId,
        target: Option<UnitId>,
        context: ErrorContext,
    },

    /// Special ability requested while its cooldown is still running.
    #[error("special ability of unit {unit} on cooldown for {remaining} more turns")]
    AbilityOnCooldown {
        unit: UnitId,
        remaining: u32,
        context: ErrorContext,
    },
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::IllegalPhase { .. } => RejectionKind::IllegalPhase,
            Self::UnknownUnit { .. } => RejectionKind::UnknownUnit,
            Self::IllegalTarget { .. } => RejectionKind::IllegalTarget,
            Self::AbilityOnCooldown { .. } => RejectionKind::AbilityOnCooldown,
        }
    }
}

impl GameError for Rejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IllegalPhase { .. } | Self::AbilityOnCooldown { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::UnknownUnit { .. } | Self::IllegalTarget { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::IllegalPhase { context, .. }
            | Self::UnknownUnit { context, .. }
            | Self::IllegalTarget { context, .. }
            | Self::AbilityOnCooldown { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IllegalPhase { .. } => "REJECT_ILLEGAL_PHASE",
            Self::UnknownUnit { .. } => "REJECT_UNKNOWN_UNIT",
            Self::IllegalTarget { .. } => "REJECT_ILLEGAL_TARGET",
            Self::AbilityOnCooldown { .. } => "REJECT_ABILITY_ON_COOLDOWN",
        }
    }
}
