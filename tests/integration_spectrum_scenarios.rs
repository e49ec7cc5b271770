//! Integration tests: realistic shared-combiner transmit scenarios.
//!
//! These tests check the combined spectrum invariants against transmitter
//! sets that overlap, nest and straddle each other.

use rand::seq::SliceRandom;
use rand::SeedableRng;

use txspectrum::{
    combined_spectrum_with_shape, compute_combined_spectrum, compute_noise_floor, simulate,
    FrequencyAxis, SimulationConfig, SpectralShape, SystemChain, Transmitter,
};

/// Helper: assert float equality within tolerance
fn assert_approx(actual: f64, expected: f64, tol: f64, msg: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{msg}: expected {expected:.4}, got {actual:.4}"
    );
}

fn overlapping_set() -> Vec<Transmitter> {
    vec![
        Transmitter::new("wideband", 4000.0, 150.0e6, 60.0e6),
        Transmitter::new("narrow", 50.0, 160.0e6, 2.0e6),
        Transmitter::new("adjacent", 800.0, 185.0e6, 20.0e6),
    ]
}

/// Any permutation of the transmitter list gives the same combined spectrum.
#[test]
fn permutations_give_the_same_spectrum() {
    let chain = SystemChain::new(4.8, 20.0, 7.5, 24.0);
    let noise_floor = compute_noise_floor(300.0, 1.0e6);
    let transmitters = overlapping_set();
    let axis = FrequencyAxis::for_transmitters(&transmitters, 2000).unwrap();
    let reference = compute_combined_spectrum(&axis, &transmitters, &chain, noise_floor);

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let mut shuffled = transmitters.clone();
        shuffled.shuffle(&mut rng);
        let combined = compute_combined_spectrum(&axis, &shuffled, &chain, noise_floor);
        for (a, b) in reference.power_dbm.iter().zip(combined.power_dbm.iter()) {
            assert!(
                (a - b).abs() <= 1e-9 * a.abs().max(1.0),
                "order changed the result: {} vs {}",
                a,
                b
            );
        }
    }
}

/// Removing a silent or switched-off transmitter leaves the spectrum untouched.
#[test]
fn dead_transmitters_are_invisible() {
    let chain = SystemChain::default();
    let noise_floor = compute_noise_floor(300.0, 1.0e6);
    let live = overlapping_set();
    let axis = FrequencyAxis::for_transmitters(&live, 1000).unwrap();
    let baseline = compute_combined_spectrum(&axis, &live, &chain, noise_floor);

    let mut with_dead = live.clone();
    with_dead.insert(1, Transmitter::new("off", 1.0e6, 170.0e6, 40.0e6).inactive());
    with_dead.push(Transmitter::new("unpowered", 0.0, 150.0e6, 10.0e6));

    let combined = compute_combined_spectrum(&axis, &with_dead, &chain, noise_floor);
    assert_eq!(combined, baseline);
}

/// The clamp holds for every shape, including the hard-edged legacy ones.
#[test]
fn every_shape_respects_the_noise_floor() {
    let chain = SystemChain::default();
    let noise_floor = compute_noise_floor(300.0, 1.0e6);
    let transmitters = overlapping_set();
    let axis = FrequencyAxis::for_transmitters(&transmitters, 2000).unwrap();

    for shape in [
        SpectralShape::Gaussian,
        SpectralShape::LinearFalloff,
        SpectralShape::FlatTop,
    ] {
        let combined =
            combined_spectrum_with_shape(&axis, shape, &transmitters, &chain, noise_floor);
        assert!(
            combined.power_dbm.iter().all(|&p| p >= noise_floor),
            "{} dipped below the floor",
            shape
        );
    }
}

/// A strong wideband carrier swamps a weak narrowband one sitting inside it.
#[test]
fn weak_carrier_inside_strong_one() {
    let chain = SystemChain::default();
    let noise_floor = compute_noise_floor(300.0, 1.0e6);
    let transmitters = vec![
        Transmitter::new("strong", 10_000.0, 100.0e6, 40.0e6),
        Transmitter::new("weak", 1.0, 100.0e6, 1.0e6),
    ];
    let axis = FrequencyAxis::linspace(60.0e6, 140.0e6, 801);
    let combined = compute_combined_spectrum(&axis, &transmitters, &chain, noise_floor);

    // strong: 10 dBm + 36.5 = 46.5 dBm, weak: -30 dBm + 36.5 = 6.5 dBm
    let peak = combined.level_at(&axis, 100.0e6).unwrap();
    assert_approx(peak, 46.5, 1e-3, "weak carrier is 40 dB down and barely moves the peak");
}

/// Radiated power levels and noise floor for the default three-transmitter set.
#[test]
fn default_three_transmitter_run() {
    let simulation = simulate(&SimulationConfig::default()).unwrap();

    assert_approx(simulation.chain.total_gain_db(), 36.5, 1e-12, "total gain");
    assert_approx(simulation.noise_floor_dbm, -113.828, 1e-3, "noise floor");
    for annotation in simulation.annotations.iter() {
        assert_approx(annotation.peak_dbm, 36.5, 1e-9, "radiated peak");
    }
    for (spectrum, annotation) in simulation.individual.iter().zip(simulation.annotations.iter()) {
        let level = spectrum.level_at(&simulation.axis, annotation.center_hz).unwrap();
        // axis samples do not land exactly on the centers
        assert_approx(level, 36.5, 0.01, "individual peak near center");
    }
    assert_approx(simulation.summary.total_power_uw, 3000.0, 1e-9, "total power");
}
