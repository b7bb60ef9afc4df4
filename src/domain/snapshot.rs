// Read-only views handed to the presentation layer
use super::command::CommandState;
use super::console::LogEntry;
use super::metrics::MetricSnapshot;
use super::series::Series;
use serde::Serialize;

/// Every chart dataset the core interface panel draws.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSet {
    pub price: Series,
    pub ignition: Series,
    pub flow: Series,
    pub load: Series,
    pub throughput_rx: Series,
    pub throughput_tx: Series,
}

impl ChartSet {
    pub fn all(&self) -> [&Series; 6] {
        [
            &self.price,
            &self.ignition,
            &self.flow,
            &self.load,
            &self.throughput_rx,
            &self.throughput_tx,
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TerminalSnapshot {
    pub running: bool,
    pub charts: ChartSet,
    pub panels: Vec<Series>,
    pub metrics: MetricSnapshot,
    pub log: Vec<LogEntry>,
    pub command: CommandState,
}

/// Pushed to subscribers after each mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminalEvent {
    Snapshot(TerminalSnapshot),
    Series { series: Vec<Series> },
    Metrics(MetricSnapshot),
    Log { entries: Vec<LogEntry> },
    Command(CommandState),
    Lifecycle { running: bool },
}
