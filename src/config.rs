use std::fs;

use serde::Deserialize;
use tracing::{debug, info};

use crate::chain::SystemChain;
use crate::constants::{
    DEFAULT_MEASUREMENT_BANDWIDTH_HZ, DEFAULT_SAMPLES, DEFAULT_TEMPERATURE_K, MAX_TRANSMITTERS,
};
use crate::spectrum::SpectralShape;
use crate::transmitter::Transmitter;

// everything one simulation run needs, replaces module level constants
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub temperature_k: f64,            // K, ambient temperature for the noise floor
    pub measurement_bandwidth_hz: f64, // Hz, resolution bandwidth of the noise floor
    pub samples: usize,                // points on the frequency axis
    pub shape: SpectralShape,
    pub chain: SystemChain,
    pub transmitters: Vec<Transmitter>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let transmitters = (0..MAX_TRANSMITTERS)
            .map(|i| Transmitter {
                label: format!("Tx{}", i + 1),
                active: true,
                power_uw: 1000.0,
                center_frequency_hz: 100.0e6 + 100.0e6 * i as f64,
                bandwidth_hz: 20.0e6,
            })
            .collect();

        Self {
            temperature_k: DEFAULT_TEMPERATURE_K,
            measurement_bandwidth_hz: DEFAULT_MEASUREMENT_BANDWIDTH_HZ,
            samples: DEFAULT_SAMPLES,
            shape: SpectralShape::default(),
            chain: SystemChain::default(),
            transmitters,
        }
    }
}

impl SimulationConfig {
    /// Defaults with the given transmitters in place of the built-in three.
    pub fn with_transmitters(transmitters: Vec<Transmitter>) -> SimulationConfig {
        SimulationConfig {
            transmitters,
            ..SimulationConfig::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let config: SimulationConfig = toml::from_str(content)?;
    debug!(?config, "parsed config");
    Ok(config)
}

pub fn load_config(path: &str) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    info!(path, "loading config");
    let config_content = fs::read_to_string(path)?;
    parse_config(&config_content)
}
