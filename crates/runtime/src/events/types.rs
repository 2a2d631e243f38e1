//! Event types for each topic.

use chrono::{DateTime, Utc};
use draw_core::{DrawMode, Entry};
use serde::{Deserialize, Serialize};

/// Events describing the draw lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DrawEvent {
    /// A draw was locked in and motion is about to play.
    ///
    /// The winner is deliberately absent here: it is already decided, but
    /// presentation layers only learn it at completion.
    Started {
        mode: DrawMode,
        nonce: u64,
        destination: f64,
        duration_ms: u64,
        at: DateTime<Utc>,
    },

    /// Motion landed; exactly one of these per completed draw.
    Completed {
        mode: DrawMode,
        winner: Entry,
        winner_index: usize,
        at: DateTime<Utc>,
    },

    /// A trigger arrived while a draw was in flight and was dropped.
    Ignored { command: String, at: DateTime<Utc> },

    /// The surface returned to the canonical zero state.
    Reset { generation: u32, at: DateTime<Utc> },

    /// A command failed its transition pipeline.
    Failed {
        command: String,
        error: String,
        severity: String,
        at: DateTime<Utc>,
    },
}

/// Events describing motion playback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MotionEvent {
    Started {
        destination: f64,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    Finished {
        at: DateTime<Utc>,
    },
}
