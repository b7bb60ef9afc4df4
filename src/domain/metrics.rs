// Scalar metric domain model
use super::series::{ClampRange, Drift};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricStep {
    Drift(Drift),
    /// Moves exactly one unit up or down with equal probability.
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub value: f64,
    pub range: ClampRange,
    pub step: MetricStep,
}

impl Metric {
    pub fn new(seed: f64, range: ClampRange, step: MetricStep) -> Self {
        Self {
            value: range.clamp(seed),
            range,
            step,
        }
    }

    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let delta = match self.step {
            MetricStep::Drift(drift) => drift.step(rng),
            MetricStep::Unit if rng.random_bool(0.5) => 1.0,
            MetricStep::Unit => -1.0,
        };
        self.value = self.range.clamp(self.value + delta);
    }
}

/// Point-in-time values handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub price: f64,
    pub power: f64,
    pub latency: f64,
    pub uptime: f64,
}

#[derive(Debug, Clone)]
pub struct Metrics {
    pub price: Metric,
    pub power: Metric,
    pub latency: Metric,
    pub uptime: Metric,
}

impl Metrics {
    pub fn perturb<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.price.perturb(rng);
        self.power.perturb(rng);
        self.latency.perturb(rng);
        self.uptime.perturb(rng);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            price: self.price.value,
            power: self.power.value,
            latency: self.latency.value,
            uptime: self.uptime.value,
        }
    }

    pub fn all(&self) -> [&Metric; 4] {
        [&self.price, &self.power, &self.latency, &self.uptime]
    }
}
