use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TerminalConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub schedule: ScheduleSettings,
    #[serde(default)]
    pub console: ConsoleSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Tick periods in milliseconds.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleSettings {
    pub price_ms: u64,
    pub charts_ms: u64,
    pub metrics_ms: u64,
    pub log_message_ms: u64,
    pub log_command_ms: u64,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            price_ms: 2500,
            charts_ms: 2500,
            metrics_ms: 1500,
            log_message_ms: 4500,
            log_command_ms: 8000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleSettings {
    /// Ring the terminal bell whenever the console gains lines
    #[serde(default = "default_cue")]
    pub cue: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self { cue: default_cue() }
    }
}

fn default_cue() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SimulationSettings {
    /// Fixed RNG seed for a reproducible walk
    pub seed: Option<u64>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("schedule.{0} must be greater than zero")]
    ZeroPeriod(&'static str),
    #[error("server.bind is not a socket address: {0}")]
    InvalidBind(String),
}

impl TerminalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let schedule = &self.schedule;
        for (name, period) in [
            ("price_ms", schedule.price_ms),
            ("charts_ms", schedule.charts_ms),
            ("metrics_ms", schedule.metrics_ms),
            ("log_message_ms", schedule.log_message_ms),
            ("log_command_ms", schedule.log_command_ms),
        ] {
            if period == 0 {
                return Err(ConfigError::ZeroPeriod(name));
            }
        }
        self.bind_addr()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }
}

/// Reads `config/terminal.toml` (optional) and `TERMINAL__*` overrides.
pub fn load_terminal_config() -> anyhow::Result<TerminalConfig> {
    let builder = config::Config::builder()
        .add_source(File::with_name("config/terminal").required(false))
        .add_source(
            Environment::with_prefix("TERMINAL")
                .separator("__")
                .try_parsing(true),
        );

    from_sources(builder)
}

fn from_sources(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<TerminalConfig> {
    let settings = builder.build()?;
    let config: TerminalConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(source: &str) -> anyhow::Result<TerminalConfig> {
        from_sources(config::Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config.schedule, ScheduleSettings::default());
        assert!(config.console.cue);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_partial_schedule_keeps_other_defaults() {
        let config = parse(
            r#"
            [schedule]
            metrics_ms = 500

            [simulation]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.schedule.metrics_ms, 500);
        assert_eq!(config.schedule.log_command_ms, 8000);
        assert_eq!(config.simulation.seed, Some(7));
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let err = parse("[schedule]\nprice_ms = 0\n").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ZeroPeriod("price_ms"))
        );
    }

    #[test]
    fn test_bad_bind_is_rejected() {
        let config: TerminalConfig = toml::from_str("[server]\nbind = \"not-an-addr\"\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBind("not-an-addr".to_string()))
        );
    }

    #[test]
    fn test_shipped_config_file_parses() {
        let config: TerminalConfig =
            toml::from_str(include_str!("../../config/terminal.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.schedule, ScheduleSettings::default());
    }
}
