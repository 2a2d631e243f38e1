//! Draw session orchestrator and builder.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use draw_core::{
    Catalog, DrawConfig, DrawEngine, DrawError, DrawMode, DrawState, ErrorSeverity, ResetOutcome,
    StartOutcome,
};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::RuntimeError;
use crate::events::{DrawEvent, Event, EventBus, MotionEvent};
use crate::handle::DrawHandle;
use crate::motion::{MotionPlayer, MotionSpec, TimerMotionPlayer};
use crate::oracle::OracleSet;

/// Messages processed by the session task.
#[derive(Debug)]
pub(crate) enum Command {
    Start { mode: DrawMode },
    Finish,
    Reset,
    Snapshot { reply: oneshot::Sender<DrawState> },
    Shutdown,
}

/// Builder for a [`DrawRuntime`].
pub struct RuntimeBuilder {
    catalog: Option<Catalog>,
    config: DrawConfig,
    seed: Option<u64>,
    player: Option<Arc<dyn MotionPlayer>>,
    event_capacity: usize,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            config: DrawConfig::default(),
            seed: None,
            player: None,
            event_capacity: 100,
        }
    }

    /// Entry list to draw from; defaults to the built-in sample table.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn config(mut self, config: DrawConfig) -> Self {
        self.config = config;
        self
    }

    /// Fixes the session seed; defaults to process entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Swaps the motion player; defaults to [`TimerMotionPlayer`].
    pub fn motion_player(mut self, player: Arc<dyn MotionPlayer>) -> Self {
        self.player = Some(player);
        self
    }

    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Validates the configuration and spawns the session task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<DrawRuntime, RuntimeError> {
        self.config.validate()?;

        let catalog = self
            .catalog
            .unwrap_or_else(draw_content::sample_catalog);
        let seed = self.seed.unwrap_or_else(rand::random);
        let player = self
            .player
            .unwrap_or_else(|| Arc::new(TimerMotionPlayer));

        let bus = EventBus::with_capacity(self.event_capacity);
        let (tx, rx) = mpsc::channel(32);
        let handle = DrawHandle::new(tx.clone(), bus.clone());

        let session = Session {
            state: DrawState::new(seed),
            oracles: OracleSet::new(catalog, self.config),
            player,
            bus: bus.clone(),
            tx,
        };

        tracing::info!(seed, "draw session started");
        let join = tokio::spawn(session.run(rx));

        Ok(DrawRuntime { handle, bus, join })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running draw session.
///
/// Owns the session task; dropping the runtime leaves the task running
/// until every handle is gone, while [`DrawRuntime::shutdown`] stops it
/// deterministically.
pub struct DrawRuntime {
    handle: DrawHandle,
    bus: EventBus,
    join: JoinHandle<()>,
}

impl DrawRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn handle(&self) -> DrawHandle {
        self.handle.clone()
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    /// Stops the session task after the current command.
    pub async fn shutdown(self) {
        // A closed channel means the task already exited.
        let _ = self.handle.send(Command::Shutdown).await;
        let _ = self.join.await;
    }
}

/// State owned by the session task.
struct Session {
    state: DrawState,
    oracles: OracleSet,
    player: Arc<dyn MotionPlayer>,
    bus: EventBus,
    /// Loopback sender used by motion tasks to land their draw.
    tx: mpsc::Sender<Command>,
}

impl Session {
    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        while let Some(command) = rx.recv().await {
            match command {
                Command::Start { mode } => self.handle_start(mode),
                Command::Finish => self.handle_finish(),
                Command::Reset => self.handle_reset(),
                Command::Snapshot { reply } => {
                    let _ = reply.send(self.state.clone());
                }
                Command::Shutdown => break,
            }
        }
        tracing::debug!("draw session task exited");
    }

    fn handle_start(&mut self, mode: DrawMode) {
        let env = self.oracles.env();
        let mut engine = DrawEngine::new(&mut self.state);

        match engine.start(&env, mode) {
            Ok(StartOutcome::Started(started)) => {
                let duration_ms = self.oracles.tuning().spin_duration_ms;
                let destination = started.target.destination();
                tracing::info!(%mode, nonce = started.nonce, destination, "draw started");

                self.bus.publish(Event::Draw(DrawEvent::Started {
                    mode,
                    nonce: started.nonce,
                    destination,
                    duration_ms,
                    at: Utc::now(),
                }));
                self.bus.publish(Event::Motion(MotionEvent::Started {
                    destination,
                    duration_ms,
                    at: Utc::now(),
                }));

                let player = Arc::clone(&self.player);
                let tx = self.tx.clone();
                let spec = MotionSpec {
                    mode,
                    destination,
                    duration: Duration::from_millis(duration_ms),
                };
                tokio::spawn(async move {
                    player.play(spec).await;
                    // Session gone means nobody is waiting for the landing.
                    let _ = tx.send(Command::Finish).await;
                });
            }
            Ok(StartOutcome::Ignored) => {
                tracing::debug!(%mode, "start ignored: draw already in flight");
                self.bus.publish(Event::Draw(DrawEvent::Ignored {
                    command: "start_draw".to_owned(),
                    at: Utc::now(),
                }));
            }
            Err(error) => self.publish_failure("start_draw", &error),
        }
    }

    fn handle_finish(&mut self) {
        let env = self.oracles.env();
        let mut engine = DrawEngine::new(&mut self.state);

        match engine.finish(&env) {
            Ok(completed) => {
                tracing::info!(
                    mode = %completed.mode,
                    winner = %completed.winner.id,
                    "draw completed"
                );
                self.bus.publish(Event::Motion(MotionEvent::Finished {
                    at: Utc::now(),
                }));
                self.bus.publish(Event::Draw(DrawEvent::Completed {
                    mode: completed.mode,
                    winner: completed.winner,
                    winner_index: completed.winner_index,
                    at: Utc::now(),
                }));
            }
            Err(error) => self.publish_failure("finish_draw", &error),
        }
    }

    fn handle_reset(&mut self) {
        let env = self.oracles.env();
        let mut engine = DrawEngine::new(&mut self.state);

        match engine.reset(&env) {
            Ok(ResetOutcome::Reset { generation }) => {
                tracing::info!(generation, "surface reset");
                self.bus.publish(Event::Draw(DrawEvent::Reset {
                    generation,
                    at: Utc::now(),
                }));
            }
            Ok(ResetOutcome::Ignored) => {
                tracing::debug!("reset ignored: draw in flight");
                self.bus.publish(Event::Draw(DrawEvent::Ignored {
                    command: "reset_draw".to_owned(),
                    at: Utc::now(),
                }));
            }
            Err(error) => self.publish_failure("reset_draw", &error),
        }
    }

    fn publish_failure(&self, command: &str, error: &draw_core::ExecuteError) {
        match error.severity() {
            ErrorSeverity::Internal => {
                tracing::error!(command, %error, "draw command failed")
            }
            ErrorSeverity::Validation => {
                tracing::warn!(command, %error, "draw command rejected")
            }
        }
        self.bus.publish(Event::Draw(DrawEvent::Failed {
            command: command.to_owned(),
            error: error.to_string(),
            severity: error.severity().as_str().to_owned(),
            at: Utc::now(),
        }));
    }
}
