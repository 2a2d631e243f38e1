//! Cloneable API surface for a running draw session.

use draw_core::{DrawMode, DrawState};
use tokio::sync::{broadcast, mpsc, oneshot};

use crate::error::RuntimeError;
use crate::events::{Event, EventBus, Topic};
use crate::runtime::Command;

/// Handle through which front ends drive a [`DrawRuntime`].
///
/// Cloning is cheap; all clones talk to the same session. Triggers are
/// fire-and-forget: whether a start actually began a draw arrives as a
/// `Draw` event, mirroring how a UI button cannot know the outcome at
/// press time.
///
/// [`DrawRuntime`]: crate::runtime::DrawRuntime
#[derive(Clone)]
pub struct DrawHandle {
    tx: mpsc::Sender<Command>,
    bus: EventBus,
}

impl DrawHandle {
    pub(crate) fn new(tx: mpsc::Sender<Command>, bus: EventBus) -> Self {
        Self { tx, bus }
    }

    pub(crate) async fn send(&self, command: Command) -> Result<(), RuntimeError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Requests a draw in the given mode. Ignored if one is in flight.
    pub async fn start(&self, mode: DrawMode) -> Result<(), RuntimeError> {
        self.send(Command::Start { mode }).await
    }

    /// Requests a reset to the canonical zero state. Ignored mid-spin.
    pub async fn reset(&self) -> Result<(), RuntimeError> {
        self.send(Command::Reset).await
    }

    /// Reads a snapshot of the current draw state.
    pub async fn snapshot(&self) -> Result<DrawState, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| RuntimeError::ChannelClosed)?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Subscribes to one event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }
}
