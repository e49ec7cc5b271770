//! Individual and combined power spectra.
//!
//! Every spectrum is a dBm value per sample of a [`FrequencyAxis`], clamped so
//! that nothing is reported below the thermal noise floor. Transmitters are
//! combined incoherently: powers add in the linear domain, not in dB.

use std::fmt;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::axis::FrequencyAxis;
use crate::chain::SystemChain;
use crate::constants::SIGMA_DIVISOR;
use crate::conversions::{db_to_linear, linear_to_db};
use crate::transmitter::Transmitter;

/// Shape of a single transmitter's power density around its center frequency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpectralShape {
    /// `exp(-0.5·((f - Fc)/σ)²)` with `σ = Bw / 2.5`.
    #[default]
    Gaussian,
    /// Falls 3 dB from the center to each band edge, nothing outside `Fc ± Bw/2`.
    LinearFalloff,
    /// Flat at the peak inside `Fc ± Bw/2`, nothing outside.
    FlatTop,
}

impl fmt::Display for SpectralShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SpectralShape::Gaussian => "Gaussian",
            SpectralShape::LinearFalloff => "Linear Falloff",
            SpectralShape::FlatTop => "Flat Top",
        };
        write!(f, "{}", name)
    }
}

impl SpectralShape {
    /// Power at `frequency_hz` relative to the peak, dB (`<= 0`, `-inf` outside a hard band).
    pub fn relative_power_db(&self, frequency_hz: f64, center_hz: f64, bandwidth_hz: f64) -> f64 {
        let offset = frequency_hz - center_hz;
        let half_bandwidth = bandwidth_hz / 2.0;
        match self {
            SpectralShape::Gaussian => {
                let sigma = bandwidth_hz / SIGMA_DIVISOR;
                let relative_power = (-0.5 * (offset / sigma).powi(2)).exp();
                linear_to_db(relative_power)
            }
            SpectralShape::LinearFalloff => {
                if offset.abs() <= half_bandwidth {
                    -3.0 * (offset.abs() / half_bandwidth)
                } else {
                    f64::NEG_INFINITY
                }
            }
            SpectralShape::FlatTop => {
                if offset.abs() <= half_bandwidth {
                    0.0
                } else {
                    f64::NEG_INFINITY
                }
            }
        }
    }
}

/// Power in dBm at each sample of the frequency axis it was computed on.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    pub label: String,
    pub power_dbm: Vec<f64>,
}

impl fmt::Display for Spectrum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.peak() {
            Some((_, peak)) => write!(
                f,
                "Spectrum {{ label: {}, samples: {}, peak: {:.2} dBm }}",
                self.label,
                self.len(),
                peak
            ),
            None => write!(f, "Spectrum {{ label: {}, samples: 0 }}", self.label),
        }
    }
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.power_dbm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power_dbm.is_empty()
    }

    /// Sample index and level of the highest point.
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.power_dbm
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Level at the sample closest to `frequency_hz`.
    pub fn level_at(&self, axis: &FrequencyAxis, frequency_hz: f64) -> Option<f64> {
        axis.nearest_index(frequency_hz)
            .and_then(|i| self.power_dbm.get(i).copied())
    }
}

/// Gaussian spectrum of one transmitter, clamped to the noise floor.
///
/// `peak_dbm` is the radiated peak, with the chain gain already applied.
/// At `f = center_hz` the result equals `peak_dbm` (to within `10·log10(1 + 1e-10)`).
/// The ε floor stops the skirt 100 dB under the peak, so it only reaches the
/// noise floor when the peak is less than 100 dB above it.
pub fn compute_individual_spectrum(
    axis: &FrequencyAxis,
    center_hz: f64,
    bandwidth_hz: f64,
    peak_dbm: f64,
    noise_floor_dbm: f64,
) -> Spectrum {
    individual_spectrum_with_shape(
        axis,
        SpectralShape::Gaussian,
        center_hz,
        bandwidth_hz,
        peak_dbm,
        noise_floor_dbm,
    )
}

/// [`compute_individual_spectrum`] for any [`SpectralShape`].
pub fn individual_spectrum_with_shape(
    axis: &FrequencyAxis,
    shape: SpectralShape,
    center_hz: f64,
    bandwidth_hz: f64,
    peak_dbm: f64,
    noise_floor_dbm: f64,
) -> Spectrum {
    let power_dbm = axis
        .iter()
        .map(|&f| {
            let level = peak_dbm + shape.relative_power_db(f, center_hz, bandwidth_hz);
            level.max(noise_floor_dbm)
        })
        .collect();

    Spectrum {
        label: String::new(),
        power_dbm,
    }
}

/// Spectrum of one transmitter as radiated through `chain`, labelled with the transmitter's label.
pub fn transmitter_spectrum(
    axis: &FrequencyAxis,
    shape: SpectralShape,
    transmitter: &Transmitter,
    chain: &SystemChain,
    noise_floor_dbm: f64,
) -> Spectrum {
    let peak_dbm = transmitter.radiated_peak_dbm(chain);
    trace!(label = %transmitter.label, peak_dbm, "transmitter radiated peak");

    let mut spectrum = individual_spectrum_with_shape(
        axis,
        shape,
        transmitter.center_frequency_hz,
        transmitter.bandwidth_hz,
        peak_dbm,
        noise_floor_dbm,
    );
    spectrum.label = transmitter.label.clone();
    spectrum
}

/// Combined radiated spectrum of all active transmitters, Gaussian shape.
///
/// Starts at the noise floor and adds each radiating transmitter's individual
/// spectrum in the linear domain. Inactive and zero-power transmitters are
/// skipped, and the sum does not depend on the order of `transmitters`.
///
/// Each individual spectrum is itself clamped to the floor, so where `k`
/// transmitters are silent the floor is counted `k + 1` times.
pub fn compute_combined_spectrum(
    axis: &FrequencyAxis,
    transmitters: &[Transmitter],
    chain: &SystemChain,
    noise_floor_dbm: f64,
) -> Spectrum {
    combined_spectrum_with_shape(axis, SpectralShape::Gaussian, transmitters, chain, noise_floor_dbm)
}

/// [`compute_combined_spectrum`] for any [`SpectralShape`].
pub fn combined_spectrum_with_shape(
    axis: &FrequencyAxis,
    shape: SpectralShape,
    transmitters: &[Transmitter],
    chain: &SystemChain,
    noise_floor_dbm: f64,
) -> Spectrum {
    // sum power ratios relative to the floor, so the ε floor sits far below
    // anything being summed instead of near the noise floor in absolute mW
    let reference_dbm = if noise_floor_dbm.is_finite() {
        noise_floor_dbm
    } else {
        0.0
    };

    let mut linear_sum: Vec<f64> = vec![db_to_linear(noise_floor_dbm - reference_dbm); axis.len()];

    for transmitter in transmitters {
        if !transmitter.is_radiating() {
            debug!(label = %transmitter.label, "skipping transmitter, inactive or zero power");
            continue;
        }

        let individual = transmitter_spectrum(axis, shape, transmitter, chain, noise_floor_dbm);
        for (total, level_dbm) in linear_sum.iter_mut().zip(individual.power_dbm.iter()) {
            *total += db_to_linear(level_dbm - reference_dbm);
        }
    }

    let power_dbm = linear_sum
        .into_iter()
        .map(|ratio| reference_dbm + linear_to_db(ratio))
        .collect();

    Spectrum {
        label: String::from("Total"),
        power_dbm,
    }
}
