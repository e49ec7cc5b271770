use std::fmt;

use tracing::debug;

use crate::constants::{AXIS_MARGIN_SIGMAS, SIGMA_DIVISOR};
use crate::transmitter::Transmitter;

/// Evenly spaced frequency samples, Hz, in increasing order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyAxis {
    samples: Vec<f64>,
}

impl fmt::Display for FrequencyAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "FrequencyAxis {{ start: {}, stop: {}, samples: {} }}",
            self.start_hz(),
            self.stop_hz(),
            self.len()
        )
    }
}

impl FrequencyAxis {
    /// `samples` points from `start_hz` to `stop_hz`, both ends included.
    ///
    /// A single sample sits at `start_hz`; zero samples is an empty axis.
    pub fn linspace(start_hz: f64, stop_hz: f64, samples: usize) -> FrequencyAxis {
        let samples = match samples {
            0 => Vec::new(),
            1 => vec![start_hz],
            n => {
                let step = (stop_hz - start_hz) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            stop_hz
                        } else {
                            start_hz + step * i as f64
                        }
                    })
                    .collect()
            }
        };
        FrequencyAxis { samples }
    }

    /// Axis covering every active transmitter.
    ///
    /// Spans from the lowest lower band edge to the highest upper band edge,
    /// widened on both sides by `6 × (widest bandwidth / 2.5)`.
    /// Returns `None` when no transmitter is active.
    pub fn for_transmitters(transmitters: &[Transmitter], samples: usize) -> Option<FrequencyAxis> {
        let active: Vec<&Transmitter> = transmitters.iter().filter(|tx| tx.active).collect();
        if active.is_empty() {
            return None;
        }

        let lowest_edge = active
            .iter()
            .map(|tx| tx.lower_edge_hz())
            .fold(f64::INFINITY, f64::min);
        let highest_edge = active
            .iter()
            .map(|tx| tx.upper_edge_hz())
            .fold(f64::NEG_INFINITY, f64::max);
        let widest_bandwidth = active
            .iter()
            .map(|tx| tx.bandwidth_hz)
            .fold(0.0, f64::max);

        let margin = AXIS_MARGIN_SIGMAS * (widest_bandwidth / SIGMA_DIVISOR);
        let start = lowest_edge - margin;
        let stop = highest_edge + margin;

        debug!(start, stop, margin, samples, "built frequency axis");

        Some(FrequencyAxis::linspace(start, stop, samples))
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start_hz(&self) -> f64 {
        self.samples.first().copied().unwrap_or(0.0)
    }

    pub fn stop_hz(&self) -> f64 {
        self.samples.last().copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Index of the sample closest to `frequency_hz`, `None` on an empty axis.
    pub fn nearest_index(&self, frequency_hz: f64) -> Option<usize> {
        self.samples
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (*a - frequency_hz)
                    .abs()
                    .total_cmp(&(*b - frequency_hz).abs())
            })
            .map(|(i, _)| i)
    }
}

impl From<Vec<f64>> for FrequencyAxis {
    fn from(samples: Vec<f64>) -> Self {
        FrequencyAxis { samples }
    }
}
