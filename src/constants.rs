/// Boltzmann constant in J/K (SI units).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Numerical floor added to linear ratios before taking a logarithm,
/// so a zero ratio maps to -100 dB instead of -inf.
pub const EPSILON: f64 = 1e-10;

/// Ambient temperature used for the thermal noise floor, K.
pub const DEFAULT_TEMPERATURE_K: f64 = 300.0;

/// Resolution bandwidth of the simulated spectrum analyzer, Hz.
pub const DEFAULT_MEASUREMENT_BANDWIDTH_HZ: f64 = 1.0e6;

/// Number of points on the frequency axis.
pub const DEFAULT_SAMPLES: usize = 2000;

/// Gaussian standard deviation is the nominal bandwidth divided by this.
pub const SIGMA_DIVISOR: f64 = 2.5;

/// Frequency axis margin past the outermost band edges, in multiples of the widest sigma.
pub const AXIS_MARGIN_SIGMAS: f64 = 6.0;

/// The shared combiner has three input ports.
pub const MAX_TRANSMITTERS: usize = 3;
