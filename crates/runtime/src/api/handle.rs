//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! submitting player intents or streaming battle events.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{ActionKind, ActionOutcome, MatchState, UnitId};

use super::errors::{Result, RuntimeError};
use super::events::BattleEvent;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<BattleEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_tx: broadcast::Sender<BattleEvent>,
    ) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Submit a player intent.
    ///
    /// Resolves as soon as the player action is booked. Automated phases
    /// that follow are reported through [`Self::subscribe_events`].
    pub async fn submit_player_action(
        &self,
        unit: UnitId,
        target: Option<UnitId>,
        action: ActionKind,
    ) -> Result<ActionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::SubmitPlayerAction {
                unit,
                target,
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        let outcome = reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)??;
        Ok(outcome)
    }

    /// Query the current match state (read-only snapshot)
    ///
    /// Queued behind any automated phase still being paced.
    pub async fn query_state(&self) -> Result<MatchState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Discard the current match and start a fresh one with the same config.
    pub async fn restart(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Restart { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to battle events
    pub fn subscribe_events(&self) -> broadcast::Receiver<BattleEvent> {
        self.event_tx.subscribe()
    }
}
