//! README example: 6. Run a Whole Simulation

use txspectrum::{parse_config, simulate, SimulationConfig, SimulationError, Transmitter};

#[test]
fn simulate_from_toml() {
    let config = parse_config(
        r#"
        [[transmitters]]
        label = "Tx1"
        power_uw = 1000.0
        center_frequency_hz = 100.0e6
        bandwidth_hz = 20.0e6

        [[transmitters]]
        label = "Tx2"
        active = false
        power_uw = 1000.0
        center_frequency_hz = 200.0e6
        bandwidth_hz = 20.0e6
        "#,
    )
    .unwrap();

    let simulation = simulate(&config).unwrap();

    assert_eq!(simulation.individual.len(), 1);
    assert_eq!(simulation.annotations[0].lower_edge_hz, 90.0e6);
    assert_eq!(simulation.annotations[0].upper_edge_hz, 110.0e6);
    assert!((simulation.summary.radiated_peak_dbm - 36.5).abs() < 1e-9);
    assert!((simulation.noise_floor_dbm - -113.83).abs() < 0.01);

    // the axis follows only the active transmitter: 90 - 48 .. 110 + 48 MHz
    assert!((simulation.axis.start_hz() - 42.0e6).abs() < 1.0);
    assert!((simulation.axis.stop_hz() - 158.0e6).abs() < 1.0);
}

#[test]
fn simulate_refuses_without_active_transmitters() {
    let config = SimulationConfig::with_transmitters(vec![
        Transmitter::new("Tx1", 1000.0, 100.0e6, 20.0e6).inactive(),
        Transmitter::new("Tx2", 1000.0, 200.0e6, 20.0e6).inactive(),
    ]);
    let err = simulate(&config).unwrap_err();
    assert_eq!(err, SimulationError::NoActiveTransmitter);
    assert!(err.to_string().contains("activate at least one transmitter"));
}
