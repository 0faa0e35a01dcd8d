//! Runtime orchestration for bubble battles.
//!
//! This crate wraps the synchronous [`battle_core`] engine in a single async
//! worker that owns the match. Consumers embed [`Runtime`] and talk to it
//! through a cloneable [`RuntimeHandle`]; every engine call is serialized
//! through the worker's command queue.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod runtime;

mod workers;

pub use api::{BattleEvent, Result, RuntimeError, RuntimeHandle};
pub use runtime::{PacingConfig, Runtime, RuntimeBuilder, RuntimeConfig};
