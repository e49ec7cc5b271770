//! Thermal (Johnson-Nyquist) noise floor.

use tracing::debug;

use crate::constants::BOLTZMANN;

/// Thermal noise power in dBm for a temperature (K) and measurement bandwidth (Hz).
///
/// `N = 10·log10(k·T·B) + 30`
///
/// A zero temperature or bandwidth yields `-inf`; nothing is raised.
pub fn compute_noise_floor(temperature_k: f64, bandwidth_hz: f64) -> f64 {
    let noise_power_watts = BOLTZMANN * temperature_k * bandwidth_hz;
    let noise_floor_dbm = rfconversions::power::watts_to_dbm(noise_power_watts);

    debug!(
        temperature_k,
        bandwidth_hz,
        noise_floor_dbm,
        "computed thermal noise floor"
    );

    noise_floor_dbm
}

/// Thermal noise spectral density in dBm/Hz, `10·log10(k·T) + 30`.
pub fn noise_spectral_density(temperature_k: f64) -> f64 {
    rfconversions::power::watts_to_dbm(BOLTZMANN * temperature_k)
}
