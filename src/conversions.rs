//! Power unit conversions between µW, dBm and linear ratios.
//!
//! Transmitter powers are entered in µW, everything downstream works in dBm,
//! and the combiner sums in the linear domain.

use crate::constants::EPSILON;

const MICROWATTS_PER_MILLIWATT: f64 = 1000.0;
const WATTS_PER_MICROWATT: f64 = 1.0e-6;

/// Converts a power in µW to dBm.
///
/// `dBm = 10·log10(P_µW / 1000)`
///
/// Non-positive (and NaN) powers return `f64::NEG_INFINITY` rather than NaN.
/// Negative infinity dBm is zero linear power, so it passes through `max`
/// and the linear-domain combine without disturbing either.
pub fn power_uw_to_dbm(power_uw: f64) -> f64 {
    if power_uw.is_nan() || power_uw <= 0.0 {
        return f64::NEG_INFINITY;
    }
    rfconversions::power::watts_to_dbm(power_uw * WATTS_PER_MICROWATT)
}

/// Converts a power in dBm to µW. Defined for every finite input.
pub fn power_dbm_to_uw(power_dbm: f64) -> f64 {
    db_to_linear(power_dbm) * MICROWATTS_PER_MILLIWATT
}

/// dB to linear power ratio. `-inf` maps to exactly `0.0`.
pub fn db_to_linear(value_db: f64) -> f64 {
    rfconversions::power::db_to_linear(value_db)
}

/// Linear power ratio to dB with the [`EPSILON`] floor, so zero maps to -100 dB.
pub fn linear_to_db(ratio: f64) -> f64 {
    10.0 * (ratio + EPSILON).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_milliwatt_is_zero_dbm() {
        assert!((power_uw_to_dbm(1000.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn one_microwatt_is_minus_thirty_dbm() {
        assert!((power_uw_to_dbm(1.0) - -30.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_power_is_negative_infinity() {
        assert_eq!(power_uw_to_dbm(0.0), f64::NEG_INFINITY);
        assert_eq!(power_uw_to_dbm(-5.0), f64::NEG_INFINITY);
        assert_eq!(power_uw_to_dbm(f64::NAN), f64::NEG_INFINITY);
    }

    #[test]
    fn dbm_to_uw() {
        assert!((power_dbm_to_uw(0.0) - 1000.0).abs() < 1e-9);
        assert!((power_dbm_to_uw(10.0) - 10_000.0).abs() < 1e-6);
        assert!((power_dbm_to_uw(-30.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn uw_dbm_inverse() {
        for p in [0.5, 12.0, 1000.0, 250_000.0] {
            let back = power_dbm_to_uw(power_uw_to_dbm(p));
            assert!((back - p).abs() / p < 1e-12, "{} -> {}", p, back);
        }
    }

    #[test]
    fn negative_infinity_db_is_zero_linear() {
        assert_eq!(db_to_linear(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn unity_ratio_is_zero_db() {
        assert!(linear_to_db(1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_ratio_hits_epsilon_floor() {
        assert!((linear_to_db(0.0) - -100.0).abs() < 1e-9);
    }
}
