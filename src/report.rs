use std::fmt::Write;

use crate::simulation::Simulation;

const MHZ: f64 = 1.0e6;

/// Plain text summary of a run: transmitters, chain, powers and noise.
pub fn format_report(simulation: &Simulation) -> String {
    let mut text = String::new();
    // writing into a String cannot fail
    let _ = write_report(&mut text, simulation);
    text
}

pub fn print_report(simulation: &Simulation) {
    println!();
    print!("{}", format_report(simulation));
    println!();
}

fn write_report(out: &mut String, simulation: &Simulation) -> std::fmt::Result {
    let chain = &simulation.chain;
    let summary = &simulation.summary;

    writeln!(
        out,
        "=== SYSTEM OF {} TRANSMITTERS ===",
        simulation.transmitters.len()
    )?;
    writeln!(out)?;
    writeln!(out, "--- Transmitters ---")?;
    for tx in simulation.transmitters.iter() {
        if tx.active {
            // the formatting `{:>8.2}` aligns positive and negative numbers on the decimal,
            // with two digits after the decimal (hundredths place)
            writeln!(
                out,
                "{}: {} µW, Fc: {:.0} MHz, BW: {:.0} MHz",
                tx.label,
                tx.power_uw,
                tx.center_frequency_hz / MHZ,
                tx.bandwidth_hz / MHZ
            )?;
            writeln!(
                out,
                "     Peak: {:>8.2} dBm, Fmin: {:.1} MHz, Fmax: {:.1} MHz",
                tx.radiated_peak_dbm(chain),
                tx.lower_edge_hz() / MHZ,
                tx.upper_edge_hz() / MHZ
            )?;
        } else {
            writeln!(out, "{}: INACTIVE", tx.label)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "--- Transmit Chain ---")?;
    writeln!(out, "Combiner Loss:\t\t{:>8.2} dB", chain.combiner_loss_db)?;
    writeln!(out, "Amplifier Gain:\t\t{:>8.2} dB", chain.amplifier_gain_db)?;
    writeln!(out, "Tx Line Loss:\t\t{:>8.2} dB", chain.line_loss_db)?;
    writeln!(out, "Antenna Gain:\t\t{:>8.2} dBi", chain.antenna_gain_dbi)?;
    writeln!(out, "Total System Gain:\t{:>8.2} dB", chain.total_gain_db())?;

    writeln!(out)?;
    writeln!(out, "--- Powers ---")?;
    writeln!(
        out,
        "Total Combined Power:\t{:.1} µW = {:.2} dBm",
        summary.total_power_uw, summary.combined_power_dbm
    )?;
    writeln!(
        out,
        "Total Radiated Peak:\t{:>8.2} dBm",
        summary.radiated_peak_dbm
    )?;

    writeln!(out)?;
    writeln!(out, "--- Noise ---")?;
    writeln!(out, "Spectral Shape:\t\t{}", simulation.shape)?;
    writeln!(
        out,
        "Temperature:\t\t{:>8.2} K",
        simulation.temperature_k
    )?;
    writeln!(
        out,
        "Measurement Bandwidth:\t{:>8.2} MHz",
        simulation.measurement_bandwidth_hz / MHZ
    )?;
    writeln!(
        out,
        "Noise Spectral Density:\t{:>8.2} dBm/Hz",
        simulation.noise_spectral_density_dbm_per_hz
    )?;
    writeln!(
        out,
        "Thermal Noise Floor:\t{:>8.2} dBm",
        simulation.noise_floor_dbm
    )?;
    writeln!(out, "{}", "-".repeat(60))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::simulation::simulate;
    use crate::transmitter::Transmitter;

    #[test]
    fn default_report_contents() {
        let simulation = simulate(&SimulationConfig::default()).unwrap();
        let text = format_report(&simulation);

        assert!(text.starts_with("=== SYSTEM OF 3 TRANSMITTERS ==="));
        assert!(text.contains("Tx1: 1000 µW, Fc: 100 MHz, BW: 20 MHz"));
        assert!(text.contains("Peak:    36.50 dBm, Fmin: 90.0 MHz, Fmax: 110.0 MHz"));
        assert!(text.contains("Total System Gain:\t   36.50 dB"));
        assert!(text.contains("Total Combined Power:\t3000.0 µW = 4.77 dBm"));
        assert!(text.contains("Total Radiated Peak:\t   41.27 dBm"));
        assert!(text.contains("Thermal Noise Floor:\t -113.83 dBm"));
    }

    #[test]
    fn inactive_transmitter_is_reported() {
        let config = SimulationConfig::with_transmitters(vec![
            Transmitter::new("Tx1", 1000.0, 100.0e6, 20.0e6),
            Transmitter::new("Tx2", 1000.0, 200.0e6, 20.0e6).inactive(),
        ]);
        let simulation = simulate(&config).unwrap();
        let text = format_report(&simulation);
        assert!(text.contains("Tx2: INACTIVE"));
        assert!(text.contains("Total Combined Power:\t1000.0 µW = "));
    }
}
