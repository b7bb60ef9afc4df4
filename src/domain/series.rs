// Series domain model - labeled samples drifting inside a clamp range
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;

/// Inclusive `[min, max]` bound applied after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Random perturbation `(r - bias) * span` with `r` uniform in `[0, 1)`.
///
/// A bias of 0.5 gives a symmetric walk of `±span / 2`; lower values lean upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub span: f64,
    pub bias: f64,
}

impl Drift {
    pub const fn symmetric(span: f64) -> Self {
        Self { span, bias: 0.5 }
    }

    pub const fn biased(span: f64, bias: f64) -> Self {
        Self { span, bias }
    }

    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        (rng.random::<f64>() - self.bias) * self.span
    }

    /// Largest move a single step can make, in either direction.
    pub fn max_step(&self) -> f64 {
        self.span * self.bias.max(1.0 - self.bias)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// Sliding window: every append evicts the oldest sample.
    Window,
    /// Fixed label set: only values move.
    Categorical,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub range: ClampRange,
    #[serde(skip)]
    drift: Drift,
    samples: VecDeque<Sample>,
}

impl Series {
    /// Window series; the seed length becomes the fixed window length.
    pub fn window(name: &str, range: ClampRange, drift: Drift, seed: &[(&str, f64)]) -> Self {
        Self::seeded(name, SeriesKind::Window, range, drift, seed)
    }

    pub fn categorical(name: &str, range: ClampRange, drift: Drift, seed: &[(&str, f64)]) -> Self {
        Self::seeded(name, SeriesKind::Categorical, range, drift, seed)
    }

    fn seeded(
        name: &str,
        kind: SeriesKind,
        range: ClampRange,
        drift: Drift,
        seed: &[(&str, f64)],
    ) -> Self {
        let samples = seed
            .iter()
            .map(|(label, value)| Sample::new(*label, range.clamp(*value)))
            .collect();

        Self {
            name: name.to_string(),
            kind,
            range,
            drift,
            samples,
        }
    }

    /// Append the next random-walk value after the last sample and slide the window.
    ///
    /// Categorical series ignore this; use [`Series::jitter`] instead.
    pub fn advance<R: Rng + ?Sized>(&mut self, label: String, rng: &mut R) -> Option<&Sample> {
        if self.kind != SeriesKind::Window {
            return None;
        }
        let last = self.samples.back()?.value;
        let next = self.range.clamp(last + self.drift.step(rng));

        self.samples.push_back(Sample { label, value: next });
        self.samples.pop_front();
        self.samples.back()
    }

    /// Perturb every sample independently, keeping labels and length.
    pub fn jitter<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for sample in self.samples.iter_mut() {
            sample.value = self.range.clamp(sample.value + self.drift.step(rng));
        }
    }

    pub fn drift(&self) -> Drift {
        self.drift
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.samples.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn price() -> Series {
        Series::window(
            "price",
            ClampRange::new(0.8, 1.2),
            Drift::symmetric(0.03),
            &[("12:00", 0.91), ("12:30", 0.94), ("13:00", 0.89)],
        )
    }

    #[test]
    fn test_window_keeps_length_and_drops_oldest() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut series = price();

        series.advance("15:01".to_string(), &mut rng);

        assert_eq!(series.len(), 3);
        assert_eq!(series.labels(), vec!["12:30", "13:00", "15:01"]);
    }

    #[test]
    fn test_window_step_is_bounded_by_half_span() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut series = price();

        for i in 0..500 {
            let before = series.last().unwrap().value;
            let after = series.advance(format!("{i}"), &mut rng).unwrap().value;
            assert!((after - before).abs() <= 0.015 + 1e-9);
            assert!(series.range.contains(after));
        }
    }

    #[test]
    fn test_clamp_holds_under_extreme_drift() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut series = Series::categorical(
            "flow",
            ClampRange::new(40.0, 100.0),
            Drift::symmetric(500.0),
            &[("Core", 95.0), ("Matrix", 75.0)],
        );

        for _ in 0..200 {
            series.jitter(&mut rng);
            assert!(series.samples().all(|s| series.range.contains(s.value)));
        }
    }

    #[test]
    fn test_categorical_keeps_labels() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut series = Series::categorical(
            "load",
            ClampRange::new(30.0, 100.0),
            Drift::biased(5.0, 0.45),
            &[("CPU", 78.0), ("RAM", 64.0), ("GPU", 91.0)],
        );

        for _ in 0..50 {
            series.jitter(&mut rng);
        }

        assert_eq!(series.labels(), vec!["CPU", "RAM", "GPU"]);
        assert!(series.advance("x".to_string(), &mut rng).is_none());
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_seed_values_are_clamped() {
        let series = Series::categorical(
            "ignition",
            ClampRange::new(70.0, 95.0),
            Drift::symmetric(1.5),
            &[("Mon", 10.0), ("Tue", 120.0)],
        );

        let values: Vec<f64> = series.samples().map(|s| s.value).collect();
        assert_eq!(values, vec![70.0, 95.0]);
    }
}
