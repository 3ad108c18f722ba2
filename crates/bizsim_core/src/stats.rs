//! Descriptive statistics over simulated samples

/// Standard percentiles reported by the Monte Carlo engine
pub mod standard {
    pub const P5: f64 = 0.05;
    pub const P95: f64 = 0.95;
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation (n - 1 denominator), 0 for fewer than two samples
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let sum_sq: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

/// Linearly interpolated quantile of an ascending-sorted slice.
///
/// `q` is clamped to `[0, 1]`. Position `q * (n - 1)` is interpolated between
/// its neighbouring order statistics. Returns 0 for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let frac = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}

/// Fraction of samples strictly greater than `threshold`
pub fn fraction_above(samples: &[f64], threshold: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().filter(|&&x| x > threshold).count() as f64 / samples.len() as f64
}

/// Summary of one sample distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub mean: f64,
    pub std_dev: f64,
    pub p5: f64,
    pub p95: f64,
}

impl SampleStats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_unstable_by(|a, b| a.total_cmp(b));
        Self {
            mean: mean(samples),
            std_dev: sample_std_dev(samples),
            p5: quantile_sorted(&sorted, standard::P5),
            p95: quantile_sorted(&sorted, standard::P95),
        }
    }
}
