//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive a match.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use battle_core::{BattleConfig, HeuristicPolicy, MatchState, OpponentPolicy};

use crate::api::{BattleEvent, Result, RuntimeError, RuntimeHandle};
use crate::workers::{Command, SimulationWorker};

/// Delays inserted around automated actions so a viewer can follow them.
///
/// Purely presentational: the engine resolves the same outcomes with any
/// pacing, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Pause before each automated phase starts.
    pub phase_delay: Duration,
    /// Pause after each automated action resolves.
    pub action_delay: Duration,
}

impl PacingConfig {
    pub const DEFAULT_PHASE_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_ACTION_DELAY: Duration = Duration::from_millis(800);

    /// No pauses at all. Used by tests and headless simulations.
    pub const fn instant() -> Self {
        Self {
            phase_delay: Duration::ZERO,
            action_delay: Duration::ZERO,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            phase_delay: Self::DEFAULT_PHASE_DELAY,
            action_delay: Self::DEFAULT_ACTION_DELAY,
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub pacing: PacingConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            pacing: PacingConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that hosts one match.
///
/// Design: Runtime owns the worker and its join handle.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to battle events
    pub fn subscribe_events(&self) -> broadcast::Receiver<BattleEvent> {
        self.handle.subscribe_events()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the worker to drain its queue, which happens once every
    /// cloned [`RuntimeHandle`] has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<MatchState>,
    policy: Option<Box<dyn OpponentPolicy>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            policy: None,
        }
    }

    /// Set runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an explicit match instead of a fresh one built from
    /// [`RuntimeConfig::battle`].
    pub fn initial_state(mut self, state: MatchState) -> Self {
        self.state = Some(state);
        self
    }

    /// Opponent policy for automated phases. Defaults to [`HeuristicPolicy`].
    pub fn policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    /// Spawns the simulation worker. Must be called within a tokio runtime.
    pub fn build(self) -> Runtime {
        let state = self
            .state
            .unwrap_or_else(|| MatchState::new(self.config.battle.clone()));
        let policy = self
            .policy
            .unwrap_or_else(|| Box::new(HeuristicPolicy::new()));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (event_tx, _event_rx) =
            broadcast::channel::<BattleEvent>(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_tx.clone());

        let sim_worker =
            SimulationWorker::new(state, policy, self.config.pacing, command_rx, event_tx);

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        Runtime {
            handle,
            sim_worker_handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pacing_matches_presentation_delays() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.phase_delay, Duration::from_millis(500));
        assert_eq!(pacing.action_delay, Duration::from_millis(800));
        assert_eq!(PacingConfig::instant().action_delay, Duration::ZERO);
    }

    #[test]
    fn default_config_uses_standard_buffers() {
        let config = RuntimeConfig::default();
        assert_eq!(config.event_buffer_size, 100);
        assert_eq!(config.command_buffer_size, 32);
        assert_eq!(config.battle, BattleConfig::default());
    }
}
