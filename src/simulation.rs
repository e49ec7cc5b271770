//! One complete run: validate, noise floor, axis, spectra, summary.

use std::fmt;

use tracing::{debug, info};

use crate::axis::FrequencyAxis;
use crate::chain::SystemChain;
use crate::config::SimulationConfig;
use crate::constants::MAX_TRANSMITTERS;
use crate::conversions::power_uw_to_dbm;
use crate::error::SimulationError;
use crate::noise::{compute_noise_floor, noise_spectral_density};
use crate::spectrum::{combined_spectrum_with_shape, transmitter_spectrum, SpectralShape, Spectrum};
use crate::transmitter::Transmitter;

/// Markers for one transmitter on a spectrum plot.
///
/// Edges follow the rectangular `Fc ± Bw/2` convention even though the curve
/// is Gaussian, so they land near ±1.25σ and not on the -3 dB points.
#[derive(Clone, Debug, PartialEq)]
pub struct BandAnnotation {
    pub label: String,
    pub center_hz: f64,
    pub lower_edge_hz: f64,
    pub upper_edge_hz: f64,
    pub peak_dbm: f64, // radiated
}

impl BandAnnotation {
    pub fn for_transmitter(transmitter: &Transmitter, chain: &SystemChain) -> BandAnnotation {
        BandAnnotation {
            label: transmitter.label.clone(),
            center_hz: transmitter.center_frequency_hz,
            lower_edge_hz: transmitter.lower_edge_hz(),
            upper_edge_hz: transmitter.upper_edge_hz(),
            peak_dbm: transmitter.radiated_peak_dbm(chain),
        }
    }
}

/// Aggregate power of the active transmitters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerSummary {
    pub total_power_uw: f64,     // µW, sum of active transmitter powers
    pub combined_power_dbm: f64, // dBm, at the combiner output
    pub radiated_peak_dbm: f64,  // dBm, combined power through the whole chain
}

impl PowerSummary {
    pub fn for_transmitters(transmitters: &[Transmitter], chain: &SystemChain) -> PowerSummary {
        let total_power_uw: f64 = transmitters
            .iter()
            .filter(|tx| tx.active)
            .map(|tx| tx.power_uw)
            .sum();
        let combined_power_dbm = power_uw_to_dbm(total_power_uw) - chain.combiner_loss_db;

        PowerSummary {
            total_power_uw,
            combined_power_dbm,
            radiated_peak_dbm: combined_power_dbm + chain.total_gain_db(),
        }
    }
}

/// Everything computed in one run, ready for a report or a plot.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub temperature_k: f64,
    pub measurement_bandwidth_hz: f64,
    pub noise_floor_dbm: f64,
    pub noise_spectral_density_dbm_per_hz: f64,
    pub shape: SpectralShape,
    pub chain: SystemChain,
    pub transmitters: Vec<Transmitter>, // all configured, labels filled in
    pub axis: FrequencyAxis,
    pub individual: Vec<Spectrum>, // one per active transmitter, in configured order
    pub annotations: Vec<BandAnnotation>,
    pub combined: Spectrum,
    pub summary: PowerSummary,
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Simulation {{ transmitters: {}, active: {}, noise_floor: {:.2} dBm, axis: {} }}",
            self.transmitters.len(),
            self.individual.len(),
            self.noise_floor_dbm,
            self.axis
        )
    }
}

fn validate(config: &SimulationConfig) -> Result<(), SimulationError> {
    if config.transmitters.len() > MAX_TRANSMITTERS {
        return Err(SimulationError::TooManyTransmitters {
            count: config.transmitters.len(),
            max: MAX_TRANSMITTERS,
        });
    }

    let positive = |value: f64| value.is_finite() && value > 0.0;
    if !positive(config.temperature_k) || !positive(config.measurement_bandwidth_hz) {
        return Err(SimulationError::InvalidNoiseParameters {
            temperature_k: config.temperature_k,
            bandwidth_hz: config.measurement_bandwidth_hz,
        });
    }

    if config.samples < 2 {
        return Err(SimulationError::InvalidSampleCount(config.samples));
    }

    for tx in config.transmitters.iter().filter(|tx| tx.active) {
        let reason = if !tx.power_uw.is_finite() || tx.power_uw < 0.0 {
            Some(format!("power must be finite and non-negative, got {} µW", tx.power_uw))
        } else if !positive(tx.center_frequency_hz) {
            Some(format!(
                "center frequency must be positive, got {} Hz",
                tx.center_frequency_hz
            ))
        } else if !positive(tx.bandwidth_hz) {
            Some(format!("bandwidth must be positive, got {} Hz", tx.bandwidth_hz))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(SimulationError::InvalidTransmitter {
                label: tx.label.clone(),
                reason,
            });
        }
    }

    if !config.transmitters.iter().any(|tx| tx.is_radiating()) {
        return Err(SimulationError::NoActiveTransmitter);
    }

    Ok(())
}

// unlabelled transmitters are named by their position, Tx1, Tx2, ...
fn labelled(transmitters: &[Transmitter]) -> Vec<Transmitter> {
    transmitters
        .iter()
        .enumerate()
        .map(|(i, tx)| {
            let mut tx = tx.clone();
            if tx.label.is_empty() {
                tx.label = format!("Tx{}", i + 1);
            }
            tx
        })
        .collect()
}

/// Runs the full simulation for `config`.
///
/// Refuses the run (rather than plotting a bare noise floor) when no
/// transmitter is both active and powered.
pub fn simulate(config: &SimulationConfig) -> Result<Simulation, SimulationError> {
    validate(config)?;

    let transmitters = labelled(&config.transmitters);
    let chain = config.chain;

    let noise_floor_dbm = compute_noise_floor(config.temperature_k, config.measurement_bandwidth_hz);
    let axis = FrequencyAxis::for_transmitters(&transmitters, config.samples)
        .ok_or(SimulationError::NoActiveTransmitter)?;

    let active: Vec<&Transmitter> = transmitters.iter().filter(|tx| tx.active).collect();

    let individual: Vec<Spectrum> = active
        .iter()
        .map(|tx| transmitter_spectrum(&axis, config.shape, tx, &chain, noise_floor_dbm))
        .collect();
    let annotations: Vec<BandAnnotation> = active
        .iter()
        .map(|tx| BandAnnotation::for_transmitter(tx, &chain))
        .collect();

    let combined =
        combined_spectrum_with_shape(&axis, config.shape, &transmitters, &chain, noise_floor_dbm);
    let summary = PowerSummary::for_transmitters(&transmitters, &chain);

    debug!(?summary, "power summary");
    info!(
        active = active.len(),
        noise_floor_dbm,
        radiated_peak_dbm = summary.radiated_peak_dbm,
        "simulation complete"
    );

    Ok(Simulation {
        temperature_k: config.temperature_k,
        measurement_bandwidth_hz: config.measurement_bandwidth_hz,
        noise_floor_dbm,
        noise_spectral_density_dbm_per_hz: noise_spectral_density(config.temperature_k),
        shape: config.shape,
        chain,
        transmitters,
        axis,
        individual,
        annotations,
        combined,
        summary,
    })
}
