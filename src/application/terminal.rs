// Terminal state - every series, metric and console line of one session
use crate::application::clock::Clock;
use crate::domain::command::{Command, CommandState, echo_message};
use crate::domain::console::{LOG_CAPACITY, LogBuffer, LogEntry};
use crate::domain::metrics::{MetricSnapshot, Metrics};
use crate::domain::seed;
use crate::domain::series::{Sample, Series};
use crate::domain::snapshot::{ChartSet, TerminalSnapshot};
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of a non-blank console submission.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub echo: LogEntry,
    pub hint: String,
}

pub struct Terminal {
    charts: ChartSet,
    panels: Vec<Series>,
    metrics: Metrics,
    log: LogBuffer,
    command: CommandState,
    message_cursor: usize,
    command_cursor: usize,
    rng: StdRng,
    clock: Arc<dyn Clock>,
}

impl Terminal {
    /// Fresh session with the seed datasets and boot log.
    pub fn new(rng: StdRng, clock: Arc<dyn Clock>) -> Self {
        Self {
            charts: ChartSet {
                price: seed::price_series(),
                ignition: seed::ignition_series(),
                flow: seed::flow_series(),
                load: seed::load_series(),
                throughput_rx: seed::throughput_rx_series(),
                throughput_tx: seed::throughput_tx_series(),
            },
            panels: seed::static_panels(),
            metrics: seed::metrics(),
            log: LogBuffer::with_entries(LOG_CAPACITY, seed::boot_log()),
            command: CommandState::default(),
            message_cursor: 0,
            command_cursor: 0,
            rng,
            clock,
        }
    }

    pub fn tick_price(&mut self) -> Option<&Sample> {
        let label = self.clock.short_label();
        self.charts.price.advance(label, &mut self.rng)
    }

    pub fn tick_ignition(&mut self) {
        self.charts.ignition.jitter(&mut self.rng);
    }

    pub fn tick_flow(&mut self) {
        self.charts.flow.jitter(&mut self.rng);
    }

    pub fn tick_load(&mut self) {
        self.charts.load.jitter(&mut self.rng);
    }

    pub fn tick_throughput(&mut self) {
        self.charts.throughput_rx.jitter(&mut self.rng);
        self.charts.throughput_tx.jitter(&mut self.rng);
    }

    pub fn tick_metrics(&mut self) -> MetricSnapshot {
        self.metrics.perturb(&mut self.rng);
        self.metrics.snapshot()
    }

    /// Appends the next background message and returns it.
    pub fn tick_log_message(&mut self) -> LogEntry {
        let (message, accent) =
            seed::BACKGROUND_MESSAGES[self.message_cursor % seed::BACKGROUND_MESSAGES.len()];
        self.message_cursor += 1;

        let entry = LogEntry::new(self.clock.timestamp(), message, accent);
        self.log.push(entry.clone());
        entry
    }

    /// Appends a simulated command and its response as one batch.
    pub fn tick_log_command(&mut self) -> [LogEntry; 2] {
        let message = seed::SIMULATED_COMMANDS[self.command_cursor % seed::SIMULATED_COMMANDS.len()];
        self.command_cursor += 1;

        let timestamp = self.clock.timestamp();
        let pair = [
            LogEntry::new(timestamp.clone(), message, true),
            LogEntry::new(timestamp, seed::COMMAND_RESPONSE, false),
        ];
        self.log.extend(pair.clone());
        pair
    }

    /// Echoes and classifies console input. Blank input changes nothing.
    pub fn submit_command(&mut self, raw: &str) -> Option<Submission> {
        let raw = raw.trim();
        let command = Command::parse(raw)?;

        let echo = LogEntry::new(self.clock.timestamp(), echo_message(raw), true);
        self.log.push(echo.clone());

        self.command.hint = command.hint();
        self.command.input.clear();

        Some(Submission {
            echo,
            hint: self.command.hint.clone(),
        })
    }

    pub fn set_input(&mut self, input: &str) {
        self.command.input = input.to_string();
    }

    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn command(&self) -> &CommandState {
        &self.command
    }

    pub fn snapshot(&self, running: bool) -> TerminalSnapshot {
        TerminalSnapshot {
            running,
            charts: self.charts.clone(),
            panels: self.panels.clone(),
            metrics: self.metrics.snapshot(),
            log: self.log.to_vec(),
            command: self.command.clone(),
        }
    }
}
