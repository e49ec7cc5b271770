//! README example: 1. Define Your Transmitters

use txspectrum::Transmitter;

#[test]
fn transmitter_construction() {
    let tx = Transmitter {
        label: "Tx1".to_string(),
        active: true,
        power_uw: 1000.0,            // 1 mW into the combiner
        center_frequency_hz: 100.0e6, // 100 MHz
        bandwidth_hz: 20.0e6,        // 20 MHz channel
    };

    assert_eq!(tx.power_uw, 1000.0);
    assert_eq!(tx.center_frequency_hz, 100.0e6);
    assert_eq!(tx.bandwidth_hz, 20.0e6);
    assert_eq!(tx.lower_edge_hz(), 90.0e6);
    assert_eq!(tx.upper_edge_hz(), 110.0e6);
    assert!(tx.is_radiating());
}

#[test]
fn switched_off_transmitter() {
    let tx = Transmitter::new("Tx2", 1000.0, 200.0e6, 20.0e6).inactive();
    assert!(!tx.active);
    assert!(!tx.is_radiating());
}
