use std::default::Default;
use std::fmt;

use serde::Deserialize;

use crate::conversions::power_uw_to_dbm;

// the shared transmit chain after the combiner, every transmitter sees the same
// combiner loss and the same amplifier -> line -> antenna gain
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemChain {
    pub combiner_loss_db: f64,  // dB, positive number is a loss
    pub amplifier_gain_db: f64, // dB
    pub line_loss_db: f64,      // dB, transmit line (cable) loss, positive number is a loss
    pub antenna_gain_dbi: f64,  // dBi
}

impl fmt::Display for SystemChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SystemChain {{ combiner_loss_db: {}, amplifier_gain_db: {}, line_loss_db: {}, antenna_gain_dbi: {} }}",
            self.combiner_loss_db, self.amplifier_gain_db, self.line_loss_db, self.antenna_gain_dbi
        )
    }
}

impl Default for SystemChain {
    fn default() -> Self {
        Self {
            combiner_loss_db: 0.0,
            amplifier_gain_db: 20.0,
            line_loss_db: 7.5,
            antenna_gain_dbi: 24.0,
        }
    }
}

impl SystemChain {
    pub fn new(
        combiner_loss_db: f64,
        amplifier_gain_db: f64,
        line_loss_db: f64,
        antenna_gain_dbi: f64,
    ) -> SystemChain {
        SystemChain {
            combiner_loss_db,
            amplifier_gain_db,
            line_loss_db,
            antenna_gain_dbi,
        }
    }

    /// Amplifier gain minus line loss plus antenna gain, dB.
    pub fn total_gain_db(&self) -> f64 {
        self.amplifier_gain_db - self.line_loss_db + self.antenna_gain_dbi
    }

    /// Power at the combiner output for a transmitter power in µW, dBm.
    pub fn combiner_output_dbm(&self, power_uw: f64) -> f64 {
        power_uw_to_dbm(power_uw) - self.combiner_loss_db
    }

    /// Radiated peak power (EIRP) for a transmitter power in µW, dBm.
    pub fn radiated_peak_dbm(&self, power_uw: f64) -> f64 {
        self.combiner_output_dbm(power_uw) + self.total_gain_db()
    }
}
