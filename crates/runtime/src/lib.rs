//! Runtime orchestration for the deterministic draw core.
//!
//! This crate wires the draw engine, oracle implementations, motion
//! playback, and the event bus into a cohesive runtime API. Consumers embed
//! [`DrawRuntime`] to trigger draws, subscribe to events, and read state
//! snapshots through [`DrawHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`events`] provides the topic-based event bus
//! - [`motion`] owns the playback seam between geometry and wall-clock time
//! - [`oracle`] provides the data adapters the core reads through
pub mod events;
pub mod motion;
pub mod oracle;
pub mod runtime;

mod error;
mod handle;

pub use error::RuntimeError;
pub use events::{DrawEvent, Event, EventBus, MotionEvent, Topic};
pub use handle::DrawHandle;
pub use motion::{InstantMotionPlayer, MotionPlayer, MotionSpec, TimerMotionPlayer};
pub use oracle::{CatalogOracleImpl, ConfigOracleImpl, OracleSet};
pub use runtime::{DrawRuntime, RuntimeBuilder};
