// Seed data and message catalogs for a fresh terminal session
use super::console::LogEntry;
use super::metrics::{Metric, MetricStep, Metrics};
use super::series::{ClampRange, Drift, Series};

pub const PRICE_RANGE: ClampRange = ClampRange::new(0.8, 1.2);
pub const IGNITION_RANGE: ClampRange = ClampRange::new(70.0, 95.0);
pub const FLOW_RANGE: ClampRange = ClampRange::new(40.0, 100.0);
pub const LOAD_RANGE: ClampRange = ClampRange::new(30.0, 100.0);
pub const THROUGHPUT_RANGE: ClampRange = ClampRange::new(0.0, 100.0);

pub fn price_series() -> Series {
    Series::window(
        "price",
        PRICE_RANGE,
        Drift::symmetric(0.03),
        &[
            ("12:00", 0.91),
            ("12:30", 0.94),
            ("13:00", 0.89),
            ("13:30", 0.93),
            ("14:00", 0.95),
            ("14:30", 0.97),
            ("15:00", 0.98),
        ],
    )
}

pub fn ignition_series() -> Series {
    Series::categorical(
        "ignition",
        IGNITION_RANGE,
        Drift::symmetric(1.5),
        &[("Mon", 72.0), ("Tue", 76.0), ("Wed", 81.0), ("Thu", 84.0), ("Fri", 87.0)],
    )
}

pub fn flow_series() -> Series {
    Series::categorical(
        "flow",
        FLOW_RANGE,
        Drift::symmetric(8.0),
        &[
            ("Core", 95.0),
            ("Matrix", 75.0),
            ("Fork", 88.0),
            ("Staking", 92.0),
            ("Archive", 60.0),
            ("Gateway", 78.0),
        ],
    )
}

pub fn load_series() -> Series {
    Series::categorical(
        "load",
        LOAD_RANGE,
        Drift::biased(5.0, 0.45),
        &[
            ("CPU", 78.0),
            ("RAM", 64.0),
            ("Bandwidth", 78.0),
            ("Disk I/O", 45.0),
            ("GPU", 91.0),
        ],
    )
}

pub fn throughput_rx_series() -> Series {
    Series::categorical(
        "throughput_rx",
        THROUGHPUT_RANGE,
        Drift::symmetric(10.0),
        &[("00", 40.0), ("04", 30.0), ("08", 20.0), ("12", 27.0), ("16", 18.0), ("20", 23.0)],
    )
}

pub fn throughput_tx_series() -> Series {
    Series::categorical(
        "throughput_tx",
        THROUGHPUT_RANGE,
        Drift::symmetric(10.0),
        &[("00", 24.0), ("04", 13.0), ("08", 58.0), ("12", 39.0), ("16", 48.0), ("20", 38.0)],
    )
}

pub fn metrics() -> Metrics {
    Metrics {
        price: Metric::new(
            0.98,
            ClampRange::new(0.9, 1.5),
            MetricStep::Drift(Drift::biased(0.01, 0.45)),
        ),
        power: Metric::new(
            87.4,
            ClampRange::new(80.0, 100.0),
            MetricStep::Drift(Drift::biased(0.2, 0.4)),
        ),
        latency: Metric::new(42.0, ClampRange::new(30.0, 60.0), MetricStep::Unit),
        uptime: Metric::new(
            99.97,
            ClampRange::new(99.90, 99.99),
            MetricStep::Drift(Drift::biased(0.005, 0.45)),
        ),
    }
}

/// Panels that never tick: token distribution, fork pipelines and staking yield.
pub fn static_panels() -> Vec<Series> {
    let fixed = Drift::symmetric(0.0);
    vec![
        Series::categorical(
            "token_distribution",
            ClampRange::new(0.0, 1000.0),
            fixed,
            &[("Treasury", 400.0), ("Staking", 300.0), ("Public", 300.0), ("Team", 100.0)],
        ),
        Series::categorical(
            "fork_pipelines",
            ClampRange::new(0.0, 100.0),
            fixed,
            &[("Active", 72.0), ("Upcoming", 45.0), ("Completed", 91.0)],
        ),
        Series::categorical(
            "staking_yield",
            ClampRange::new(0.0, 100.0),
            fixed,
            &[("M1", 11.2), ("M2", 12.4), ("M3", 13.8), ("M4", 15.9), ("M5", 18.4)],
        ),
    ]
}

pub fn boot_log() -> Vec<LogEntry> {
    [
        ("21:08:01", "BOOTSTRAP › Core interface loaded.", false),
        ("21:08:03", "SYNAPSE › Flow stabilised at 97.2%.", false),
        ("21:08:04", "FORK › 3 IDO pipelines in active crucible.", false),
        ("21:08:05", "MATRIX › Cognitive layer on standby (wallet not bound).", false),
        (
            "21:08:07",
            "HEATMAP › Telemetry stream attached. Rendering neural activity.",
            true,
        ),
        ("21:08:09", "HEATMAP › Spike detected in Cortex region (14.3σ).", false),
        ("21:08:11", "ORBIT-01 › Liquidity lock checksum verified.", false),
        ("21:08:14", "ORBIT-02 › Whitelist snapshot cached (2,184 wallets).", false),
        ("21:08:17", "MATRIX › User session heartbeat OK.", false),
        ("21:08:21", "TELEMETRY › Cold storage sync deferred (low priority).", false),
        ("21:08:25", "ALERT › No anomalies across nodes · rolling 5 min window.", false),
    ]
    .into_iter()
    .map(|(ts, msg, accent)| LogEntry::new(ts, msg, accent))
    .collect()
}

/// Background messages as `(message, accent)`.
pub const BACKGROUND_MESSAGES: &[(&str, bool)] = &[
    ("PING › External RPC latency within threshold.", false),
    ("ANALYTICS › Background indexer flushed cache (24 shards).", false),
    ("SECURITY › No abnormal patterns in last 256 calls.", true),
    ("SCHEDULER › Next IDO snapshot scheduled in 300 seconds.", false),
    ("ARCHIVE › Historical heatmaps compressed without data loss.", false),
    ("GOVERNANCE › New proposal draft detected in staging queue.", false),
];

pub const SIMULATED_COMMANDS: &[&str] = &[
    "EXEC › anomaly_scan --deep",
    "EXEC › sync_heatmap --region=Cortex",
    "QUERY › get_ido_status --orbit=ORBIT-01",
    "AUTH › validate_session --user=0x12a9…89ab",
];

pub const COMMAND_RESPONSE: &str = "RESPONSE › OK_200: Operation successful.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::SeriesKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_boot_log_fits_console() {
        let log = boot_log();
        assert_eq!(log.len(), 11);
        assert_eq!(log.iter().filter(|e| e.accent).count(), 1);
    }

    #[test]
    fn test_seed_series_start_inside_their_ranges() {
        for series in [
            price_series(),
            ignition_series(),
            flow_series(),
            load_series(),
            throughput_rx_series(),
            throughput_tx_series(),
        ] {
            assert!(!series.is_empty(), "{} is empty", series.name);
            assert!(series.samples().all(|s| series.range.contains(s.value)));
        }
    }

    #[test]
    fn test_throughput_channels_share_labels() {
        assert_eq!(throughput_rx_series().labels(), throughput_tx_series().labels());
    }

    #[test]
    fn test_chart_step_bounds() {
        let bounds = [
            (price_series(), 0.015),
            (ignition_series(), 0.75),
            (flow_series(), 4.0),
            (load_series(), 2.75),
            (throughput_rx_series(), 5.0),
            (throughput_tx_series(), 5.0),
        ];

        let mut rng = StdRng::seed_from_u64(3);
        for (mut series, bound) in bounds {
            let max_step = series.drift().max_step();
            assert!((max_step - bound).abs() < 1e-9, "{} steps by {max_step}", series.name);

            // clamping can only shorten a step
            for _ in 0..200 {
                let before: Vec<f64> = series.samples().map(|s| s.value).collect();
                match series.kind {
                    SeriesKind::Window => {
                        let last = before[before.len() - 1];
                        let next = series.advance("00:00".to_string(), &mut rng).unwrap().value;
                        assert!((next - last).abs() <= max_step + 1e-9);
                    }
                    SeriesKind::Categorical => {
                        series.jitter(&mut rng);
                        for (old, new) in before.iter().zip(series.samples()) {
                            assert!((new.value - old).abs() <= max_step + 1e-9);
                        }
                    }
                }
            }
        }
    }
}
