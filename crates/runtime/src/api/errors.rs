//! Unified error types surfaced by the runtime API.
//!
//! Wraps worker coordination failures and engine rejections so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::Rejection;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("action rejected: {0}")]
    Rejected(#[from] Rejection),
}

impl RuntimeError {
    /// The engine rejection behind this error, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            RuntimeError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}
