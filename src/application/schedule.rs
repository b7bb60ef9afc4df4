// Periodic task table
use crate::application::terminal::Terminal;
use crate::domain::snapshot::TerminalEvent;
use crate::infrastructure::config::ScheduleSettings;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Price,
    Charts,
    Metrics,
    LogMessage,
    LogCommand,
}

impl Task {
    /// Runs one tick against the terminal and describes what changed.
    pub fn apply(self, terminal: &mut Terminal) -> TerminalEvent {
        match self {
            Task::Price => {
                terminal.tick_price();
                TerminalEvent::Series {
                    series: vec![terminal.charts().price.clone()],
                }
            }
            Task::Charts => {
                terminal.tick_ignition();
                terminal.tick_flow();
                terminal.tick_load();
                terminal.tick_throughput();

                let charts = terminal.charts();
                TerminalEvent::Series {
                    series: vec![
                        charts.ignition.clone(),
                        charts.flow.clone(),
                        charts.load.clone(),
                        charts.throughput_rx.clone(),
                        charts.throughput_tx.clone(),
                    ],
                }
            }
            Task::Metrics => TerminalEvent::Metrics(terminal.tick_metrics()),
            Task::LogMessage => TerminalEvent::Log {
                entries: vec![terminal.tick_log_message()],
            },
            Task::LogCommand => TerminalEvent::Log {
                entries: terminal.tick_log_command().to_vec(),
            },
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{0:?} task has a zero period")]
    ZeroPeriod(Task),
}

#[derive(Debug, Clone)]
pub struct Schedule {
    entries: Vec<(Task, Duration)>,
}

impl Schedule {
    /// Tickers cannot run on a zero period, so those are refused here.
    pub fn new(entries: Vec<(Task, Duration)>) -> Result<Self, ScheduleError> {
        if let Some(&(task, _)) = entries.iter().find(|(_, period)| period.is_zero()) {
            return Err(ScheduleError::ZeroPeriod(task));
        }
        Ok(Self { entries })
    }

    pub fn from_settings(settings: &ScheduleSettings) -> Result<Self, ScheduleError> {
        Self::new(vec![
            (Task::Price, Duration::from_millis(settings.price_ms)),
            (Task::Charts, Duration::from_millis(settings.charts_ms)),
            (Task::Metrics, Duration::from_millis(settings.metrics_ms)),
            (Task::LogMessage, Duration::from_millis(settings.log_message_ms)),
            (Task::LogCommand, Duration::from_millis(settings.log_command_ms)),
        ])
    }

    pub fn entries(&self) -> &[(Task, Duration)] {
        &self.entries
    }

    pub fn longest(&self) -> Duration {
        self.entries
            .iter()
            .map(|(_, period)| *period)
            .max()
            .unwrap_or_default()
    }
}
