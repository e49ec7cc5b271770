use thiserror::Error;

/// Reasons a simulation run is refused before any spectrum is computed.
///
/// The spectrum functions themselves never fail; these come from the
/// validation gate in [`crate::simulate`].
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("no active transmitter with positive power, activate at least one transmitter")]
    NoActiveTransmitter,
    #[error("{count} transmitters configured, the combiner has {max} ports")]
    TooManyTransmitters { count: usize, max: usize },
    #[error("transmitter {label}: {reason}")]
    InvalidTransmitter { label: String, reason: String },
    #[error("noise floor needs positive temperature and bandwidth, got {temperature_k} K and {bandwidth_hz} Hz")]
    InvalidNoiseParameters { temperature_k: f64, bandwidth_hz: f64 },
    #[error("frequency axis needs at least 2 samples, got {0}")]
    InvalidSampleCount(usize),
}
