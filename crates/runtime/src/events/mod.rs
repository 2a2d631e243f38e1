//! Topic-based event routing for runtime consumers.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{DrawEvent, MotionEvent};
