//! Deterministic selection and landing geometry shared across front ends.
//!
//! `draw-core` defines the canonical rules of a weighted prize draw: the
//! cumulative-distribution selector, the wheel and tape landing geometry,
//! and the phase machine guarding one draw surface. All state mutation
//! flows through [`engine::DrawEngine`], and supporting crates depend on
//! the types re-exported here.
pub mod catalog;
pub mod command;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod select;
pub mod state;

pub use catalog::{Catalog, CatalogError, Entry, EntryId};
pub use command::{
    DrawCommand, DrawTransition, FinishDraw, FinishError, ResetDraw, ResetError, StartDraw,
    StartError,
};
pub use config::{ConfigError, DrawConfig};
pub use engine::{
    CompletedDraw, DrawEngine, DrawOutcome, ExecuteError, ResetOutcome, StartOutcome, StartedDraw,
    TransitionPhase, TransitionPhaseError,
};
pub use env::{CatalogOracle, ConfigOracle, DrawEnv, Env, OracleError, PcgRng, RngOracle};
pub use error::{DrawError, ErrorSeverity};
pub use geometry::{GeometryError, TapeLayout, TapeTarget, WheelTarget};
pub use select::{Pick, select_entry, select_index, select_weighted};
pub use state::{DrawMode, DrawPhase, DrawState, MotionTarget, PendingDraw};
