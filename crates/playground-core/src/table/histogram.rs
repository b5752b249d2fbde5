//! Equal-width histogram bucketing of a numeric column.
//!
//! # Algorithm
//!
//! Bins span `[min, max]` of the values. Every bin is half-open
//! `[edge[i], edge[i + 1])` except the last, which also includes `max`.
//! When all values are equal the range is widened to `[v - 0.5, v + 0.5]`
//! so the bins keep a non-zero width.

use serde::{Deserialize, Serialize};

/// Number of bins used when the caller does not choose one.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Histogram settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramOptions {
    /// Number of equal-width bins (values below 1 are treated as 1).
    pub bins: usize,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl HistogramOptions {
    pub fn with_bins(bins: usize) -> Self {
        Self { bins }
    }
}

/// Bin edges and per-bin counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramData {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    /// `bins` counts.
    pub counts: Vec<u32>,
}

impl HistogramData {
    /// Number of values bucketed.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Largest bin count, for scaling the chart.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bucket finite values. Returns `None` if there are none.
pub(super) fn compute(values: &[f64], options: &HistogramOptions) -> Option<HistogramData> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < values.len() {
        log::debug!(
            "histogram: ignoring {} non-finite value(s)",
            values.len() - finite.len()
        );
    }

    let (mut lo, mut hi) = finite.iter().fold(None, |acc: Option<(f64, f64)>, &v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    })?;

    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let bins = options.bins.max(1);
    let bins_f = bins as f64;
    // Halved so the span of values near f64::MAX stays finite
    let half_span = hi / 2.0 - lo / 2.0;

    let mut edges: Vec<f64> = (0..=bins)
        .map(|i| {
            let t = i as f64 / bins_f;
            lo * (1.0 - t) + hi * t
        })
        .collect();
    edges[0] = lo;
    edges[bins] = hi;

    let mut counts = vec![0u32; bins];
    for v in finite {
        let mut idx = ((v / 2.0 - lo / 2.0) / half_span * bins_f) as usize;
        idx = idx.min(bins - 1);
        // Correct for rounding at the edges
        if idx > 0 && v < edges[idx] {
            idx -= 1;
        } else if idx + 1 < bins && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }

    Some(HistogramData { edges, counts })
}
