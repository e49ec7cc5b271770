//! README example: 2. Define the Shared Transmit Chain

use txspectrum::{Transmitter, SystemChain};

#[test]
fn chain_total_gain() {
    let chain = SystemChain {
        combiner_loss_db: 0.0,
        amplifier_gain_db: 20.0,
        line_loss_db: 7.5,
        antenna_gain_dbi: 24.0,
    };

    // 20 - 7.5 + 24
    assert_eq!(chain.total_gain_db(), 36.5);
    assert_eq!(chain, SystemChain::default());
}

#[test]
fn radiated_peak_of_one_milliwatt() {
    let chain = SystemChain::default();
    let tx = Transmitter::new("Tx1", 1000.0, 100.0e6, 20.0e6);

    // 1000 µW = 0 dBm, then + 36.5 dB
    assert!((tx.radiated_peak_dbm(&chain) - 36.5).abs() < 1e-12);
}

#[test]
fn combiner_loss_applies_before_the_amplifier() {
    let chain = SystemChain::new(4.8, 20.0, 7.5, 24.0);
    let tx = Transmitter::new("Tx1", 1000.0, 100.0e6, 20.0e6);
    assert!((tx.radiated_peak_dbm(&chain) - 31.7).abs() < 1e-9);
}
