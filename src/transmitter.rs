use std::default::Default;
use std::fmt;

use serde::Deserialize;

use crate::chain::SystemChain;
use crate::constants::SIGMA_DIVISOR;

// one transmitter feeding a port of the shared combiner
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transmitter {
    #[serde(default)]
    pub label: String, // name or plot colour, never interpreted by the spectrum model
    #[serde(default = "default_active")]
    pub active: bool,
    pub power_uw: f64,            // µW, transmit power into the combiner
    pub center_frequency_hz: f64, // Hz
    pub bandwidth_hz: f64,        // Hz, nominal occupied bandwidth
}

fn default_active() -> bool {
    true
}

impl fmt::Display for Transmitter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Transmitter {{ label: {}, active: {}, power_uw: {}, center_frequency_hz: {}, bandwidth_hz: {} }}",
            self.label, self.active, self.power_uw, self.center_frequency_hz, self.bandwidth_hz
        )
    }
}

impl Default for Transmitter {
    fn default() -> Self {
        Self {
            label: String::from("Tx"),
            active: true,
            power_uw: 1000.0,             // 1 mW, 0 dBm
            center_frequency_hz: 100.0e6, // placeholder value, you should change this
            bandwidth_hz: 20.0e6,         // placeholder value, you should change this
        }
    }
}

impl Transmitter {
    pub fn new(
        label: &str,
        power_uw: f64,
        center_frequency_hz: f64,
        bandwidth_hz: f64,
    ) -> Transmitter {
        Transmitter {
            label: label.to_string(),
            active: true,
            power_uw,
            center_frequency_hz,
            bandwidth_hz,
        }
    }

    /// Same transmitter, switched off.
    pub fn inactive(mut self) -> Transmitter {
        self.active = false;
        self
    }

    /// Active with positive power, i.e. it adds energy to the combined spectrum.
    pub fn is_radiating(&self) -> bool {
        self.active && self.power_uw > 0.0
    }

    /// Lower annotated band edge, `Fc - Bw/2`.
    ///
    /// The edges use the rectangular convention even for the Gaussian shape,
    /// so they sit near ±1.25σ rather than on the -3 dB points.
    pub fn lower_edge_hz(&self) -> f64 {
        self.center_frequency_hz - self.bandwidth_hz / 2.0
    }

    /// Upper annotated band edge, `Fc + Bw/2`.
    pub fn upper_edge_hz(&self) -> f64 {
        self.center_frequency_hz + self.bandwidth_hz / 2.0
    }

    /// Standard deviation of the Gaussian spectral shape, `Bw / 2.5`.
    pub fn sigma_hz(&self) -> f64 {
        self.bandwidth_hz / SIGMA_DIVISOR
    }

    pub fn radiated_peak_dbm(&self, chain: &SystemChain) -> f64 {
        chain.radiated_peak_dbm(self.power_uw)
    }
}
