// Simulation engine - owns the terminal, drives its ticks and fans out events
use crate::application::log_cue::LogCue;
use crate::application::schedule::{Schedule, Task};
use crate::application::terminal::{Submission, Terminal};
use crate::domain::snapshot::{TerminalEvent, TerminalSnapshot};
use futures::StreamExt;
use futures::stream::BoxStream;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, broadcast, mpsc, watch};
use tokio::task::JoinSet;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

const EVENT_CHANNEL_CAPACITY: usize = 64;
/// Pending cues beyond this are dropped.
const CUE_QUEUE_CAPACITY: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("simulation engine is already running")]
    AlreadyRunning,
    #[error("simulation engine is not running")]
    NotRunning,
}

enum Lifecycle {
    Stopped,
    Running(JoinSet<()>),
}

/// State shared between the engine handle and its tasks.
struct Core {
    terminal: Mutex<Terminal>,
    events: broadcast::Sender<TerminalEvent>,
    running: watch::Sender<bool>,
    cues: mpsc::Sender<()>,
    cue_queue: Arc<Mutex<mpsc::Receiver<()>>>,
    cue: Arc<dyn LogCue>,
}

impl Core {
    /// Callers hold the terminal lock so subscribers never see an event
    /// that is already part of their initial snapshot.
    fn publish(&self, event: TerminalEvent) {
        if matches!(event, TerminalEvent::Log { .. })
            && *self.running.borrow()
            && self.cues.try_send(()).is_err()
        {
            tracing::trace!("log cue queue full, dropping cue");
        }
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}

#[derive(Clone)]
pub struct SimulationEngine {
    core: Arc<Core>,
    lifecycle: Arc<Mutex<Lifecycle>>,
    schedule: Schedule,
}

impl SimulationEngine {
    pub fn new(terminal: Terminal, schedule: Schedule, cue: Arc<dyn LogCue>) -> Self {
        Self::with_event_capacity(terminal, schedule, cue, EVENT_CHANNEL_CAPACITY)
    }

    /// `capacity` is how many events a subscriber may fall behind before it
    /// is resynchronised with a snapshot.
    pub fn with_event_capacity(
        terminal: Terminal,
        schedule: Schedule,
        cue: Arc<dyn LogCue>,
        capacity: usize,
    ) -> Self {
        let (events, _) = broadcast::channel(capacity);
        let (running, _) = watch::channel(false);
        let (cues, cue_queue) = mpsc::channel(CUE_QUEUE_CAPACITY);

        Self {
            core: Arc::new(Core {
                terminal: Mutex::new(terminal),
                events,
                running,
                cues,
                cue_queue: Arc::new(Mutex::new(cue_queue)),
                cue,
            }),
            lifecycle: Arc::new(Mutex::new(Lifecycle::Stopped)),
            schedule,
        }
    }

    /// Spawns one periodic task per schedule entry plus the cue player.
    pub async fn start(&self) -> Result<(), EngineError> {
        let mut lifecycle = self.lifecycle.lock().await;
        if matches!(*lifecycle, Lifecycle::Running(_)) {
            return Err(EngineError::AlreadyRunning);
        }

        let mut tasks = JoinSet::new();
        for &(task, period) in self.schedule.entries() {
            tasks.spawn(drive(self.core.clone(), task, period));
        }
        tasks.spawn(play_cues(self.core.cue_queue.clone(), self.core.cue.clone()));
        tracing::info!(tasks = tasks.len(), "simulation engine started");

        *lifecycle = Lifecycle::Running(tasks);
        self.set_running(true).await;
        Ok(())
    }

    /// Aborts every task, waits until they are gone and ends all event streams.
    pub async fn stop(&self) -> Result<(), EngineError> {
        let mut lifecycle = self.lifecycle.lock().await;
        let Lifecycle::Running(mut tasks) = std::mem::replace(&mut *lifecycle, Lifecycle::Stopped)
        else {
            return Err(EngineError::NotRunning);
        };

        tasks.shutdown().await;
        // Cues queued before the stop are stale
        let mut cues = self.core.cue_queue.lock().await;
        while cues.try_recv().is_ok() {}
        drop(cues);
        tracing::info!("simulation engine stopped");

        self.set_running(false).await;
        Ok(())
    }

    async fn set_running(&self, running: bool) {
        let _terminal = self.core.terminal.lock().await;
        self.core.publish(TerminalEvent::Lifecycle { running });
        self.core.running.send_replace(running);
    }

    pub async fn is_running(&self) -> bool {
        matches!(*self.lifecycle.lock().await, Lifecycle::Running(_))
    }

    /// Handles one line of console input. Works whether or not the ticks run.
    pub async fn submit_command(&self, raw: &str) -> Option<Submission> {
        let mut terminal = self.core.terminal.lock().await;
        let submission = terminal.submit_command(raw)?;
        tracing::debug!(input = raw.trim(), hint = %submission.hint, "console command");

        self.core.publish(TerminalEvent::Log {
            entries: vec![submission.echo.clone()],
        });
        self.core
            .publish(TerminalEvent::Command(terminal.command().clone()));
        Some(submission)
    }

    pub async fn set_input(&self, input: &str) {
        let mut terminal = self.core.terminal.lock().await;
        terminal.set_input(input);
        self.core
            .publish(TerminalEvent::Command(terminal.command().clone()));
    }

    pub async fn snapshot(&self) -> TerminalSnapshot {
        let terminal = self.core.terminal.lock().await;
        terminal.snapshot(*self.core.running.borrow())
    }

    /// Event feed starting with a full snapshot. A subscriber that falls
    /// behind gets a fresh snapshot in place of the events it missed.
    /// The feed ends once the engine is stopped.
    pub async fn events(&self) -> BoxStream<'static, TerminalEvent> {
        let (mut updates, mut running, first) = {
            let terminal = self.core.terminal.lock().await;
            let updates = BroadcastStream::new(self.core.events.subscribe());
            let running = self.core.running.subscribe();
            let first = terminal.snapshot(*running.borrow());
            (updates, running, first)
        };
        let engine = self.clone();

        async_stream::stream! {
            yield TerminalEvent::Snapshot(first);

            loop {
                let update = tokio::select! {
                    biased;
                    update = updates.next() => update,
                    _ = stopped(&mut running) => None,
                };
                match update {
                    Some(Ok(event)) => yield event,
                    Some(Err(BroadcastStreamRecvError::Lagged(missed))) => {
                        tracing::warn!(missed, "event subscriber lagged, resending snapshot");
                        yield TerminalEvent::Snapshot(engine.snapshot().await);
                    }
                    None => break,
                }
            }
        }
        .boxed()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

async fn drive(core: Arc<Core>, task: Task, period: Duration) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let mut terminal = core.terminal.lock().await;
        let event = task.apply(&mut terminal);
        tracing::trace!(?task, "tick");
        core.publish(event);
    }
}

async fn stopped(running: &mut watch::Receiver<bool>) {
    // Err means the engine is gone, which ends the feed just the same
    let _ = running.wait_for(|running| !running).await;
}

async fn play_cues(queue: Arc<Mutex<mpsc::Receiver<()>>>, cue: Arc<dyn LogCue>) {
    let mut queue = queue.lock().await;
    while queue.recv().await.is_some() {
        if let Err(e) = cue.play().await {
            tracing::debug!(error = %e, "log cue failed");
        }
    }
}
