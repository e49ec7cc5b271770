mod axis;
mod chain;
pub mod cli;
mod config;
pub mod constants;
pub mod conversions;
mod error;
mod noise;
#[cfg(feature = "plot")]
pub mod plot;
pub mod report;
mod simulation;
mod spectrum;
mod transmitter;

pub use axis::FrequencyAxis;
pub use chain::SystemChain;
pub use config::{load_config, parse_config, SimulationConfig};
pub use conversions::{power_dbm_to_uw, power_uw_to_dbm};
pub use error::SimulationError;
pub use noise::{compute_noise_floor, noise_spectral_density};
pub use simulation::{simulate, BandAnnotation, PowerSummary, Simulation};
pub use spectrum::{
    combined_spectrum_with_shape, compute_combined_spectrum, compute_individual_spectrum,
    individual_spectrum_with_shape, transmitter_spectrum, SpectralShape, Spectrum,
};
pub use transmitter::Transmitter;
