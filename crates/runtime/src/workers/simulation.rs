//! Simulation worker that owns the authoritative [`battle_core::MatchState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], resolves them through
//! [`battle_core::BattleEngine`] one at a time, paces automated phases, and
//! publishes [`BattleEvent`] notifications. Commands that arrive while a
//! phase is being paced wait in the channel, so the engine never sees two
//! mutating calls at once.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info, warn};

use battle_core::{
    ActionKind, ActionOutcome, BattleEngine, GameError, MatchState, OpponentPolicy, Rejection,
    UnitId,
};

use crate::api::BattleEvent;
use crate::runtime::PacingConfig;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Resolve a player intent, then run the automated phases it unlocks.
    SubmitPlayerAction {
        unit: UnitId,
        target: Option<UnitId>,
        action: ActionKind,
        reply: oneshot::Sender<Result<ActionOutcome, Rejection>>,
    },
    /// Query the current match state (read-only).
    QueryState { reply: oneshot::Sender<MatchState> },
    /// Replace the match with a fresh one.
    Restart { reply: oneshot::Sender<()> },
}

/// Background task that processes battle commands.
pub struct SimulationWorker {
    state: MatchState,
    policy: Box<dyn OpponentPolicy>,
    pacing: PacingConfig,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<BattleEvent>,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: MatchState,
        policy: Box<dyn OpponentPolicy>,
        pacing: PacingConfig,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<BattleEvent>,
    ) -> Self {
        Self {
            state,
            policy,
            pacing,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop. Exits once every handle is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }
        debug!(target: "runtime::worker", "command channel closed, simulation worker stopping");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SubmitPlayerAction {
                unit,
                target,
                action,
                reply,
            } => {
                let result = self.submit_player_action(unit, target, action);
                let resolved = result.is_ok();
                let _ = reply.send(result);

                if resolved {
                    self.after_player_action().await;
                }
            }
            Command::QueryState { reply } => {
                let _ = reply.send(self.state.clone());
            }
            Command::Restart { reply } => {
                self.state.restart();
                info!(
                    target: "runtime::worker",
                    seed = self.state.seed(),
                    "match restarted"
                );
                let _ = self.event_tx.send(BattleEvent::Restarted);
                let _ = reply.send(());
            }
        }
    }

    fn submit_player_action(
        &mut self,
        unit: UnitId,
        target: Option<UnitId>,
        action: ActionKind,
    ) -> Result<ActionOutcome, Rejection> {
        let result =
            BattleEngine::new(&mut self.state).submit_player_action(unit, target, action);

        match &result {
            Ok(outcome) => {
                debug!(
                    target: "runtime::worker",
                    actor = %outcome.actor,
                    action = %action,
                    nonce = outcome.nonce,
                    "player action resolved"
                );
                let _ = self
                    .event_tx
                    .send(BattleEvent::ActionResolved(outcome.clone()));
            }
            Err(rejection) => {
                debug!(
                    target: "runtime::worker",
                    unit = %unit,
                    action = %action,
                    code = rejection.error_code(),
                    severity = rejection.severity().as_str(),
                    error = %rejection,
                    "player action rejected"
                );
                let _ = self.event_tx.send(BattleEvent::Rejected {
                    kind: rejection.kind(),
                });
            }
        }

        result
    }

    /// Announces the new phase and drives automated phases until the player
    /// is up again or the match ends.
    async fn after_player_action(&mut self) {
        if self.announce_match_end() {
            return;
        }
        self.announce_phase();

        while self.state.phase().is_automated() {
            pause(self.pacing.phase_delay).await;
            self.run_automated_phase().await;

            if self.announce_match_end() {
                return;
            }
            self.announce_phase();
        }
    }

    async fn run_automated_phase(&mut self) {
        let Self {
            state,
            policy,
            pacing,
            event_tx,
            ..
        } = self;

        let phase = state.phase();
        let turn = state.turn_number();
        debug!(target: "runtime::worker", phase = %phase, turn, "automated phase started");

        let sequence = match BattleEngine::new(state).advance_automated_phase(&**policy) {
            Ok(sequence) => sequence,
            Err(rejection) => {
                warn!(
                    target: "runtime::worker",
                    phase = %phase,
                    error = %rejection,
                    "automated phase refused"
                );
                return;
            }
        };

        for outcome in sequence {
            debug!(
                target: "runtime::worker",
                actor = %outcome.actor,
                nonce = outcome.nonce,
                special = outcome.effect.is_special(),
                "automated action resolved"
            );
            let _ = event_tx.send(BattleEvent::ActionResolved(outcome));
            pause(pacing.action_delay).await;
        }
    }

    fn announce_phase(&self) {
        let phase = self.state.phase();
        let turn = self.state.turn_number();
        debug!(target: "runtime::worker", phase = %phase, turn, "phase changed");
        let _ = self.event_tx.send(BattleEvent::PhaseChanged { phase, turn });
    }

    /// Publishes the terminal event. Returns true once the match is over.
    fn announce_match_end(&self) -> bool {
        if !self.state.is_over() {
            return false;
        }
        let victory = self.state.is_victory();
        let turn = self.state.turn_number();
        info!(target: "runtime::worker", victory, turn, "match ended");
        let _ = self.event_tx.send(BattleEvent::MatchEnded { victory, turn });
        true
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
