use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::simulation::Simulation;

const PALETTE: [&str; 3] = ["blue", "green", "orange"];

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 50.0;

// divisor and unit name for displaying a frequency in Hz
fn frequency_unit(frequency: f64) -> (f64, &'static str) {
    if frequency >= 1e12 {
        (1e12, "THz")
    } else if frequency >= 1e9 {
        (1e9, "GHz")
    } else if frequency >= 1e6 {
        (1e6, "MHz")
    } else if frequency >= 1e3 {
        (1e3, "kHz")
    } else {
        (1.0, "Hz")
    }
}

pub fn format_frequency(frequency: f64) -> (f64, &'static str) {
    let (scale, unit) = frequency_unit(frequency);
    (frequency / scale, unit)
}

fn colour(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

// maps frequency (Hz) and power (dBm) into svg pixel coordinates
struct Canvas {
    f_min: f64,
    f_max: f64,
    p_min: f64,
    p_max: f64,
}

impl Canvas {
    fn for_simulation(simulation: &Simulation) -> Canvas {
        let peak = simulation
            .combined
            .peak()
            .map(|(_, p)| p)
            .unwrap_or(simulation.noise_floor_dbm);
        Canvas {
            f_min: simulation.axis.start_hz(),
            f_max: simulation.axis.stop_hz(),
            // room under the floor for the frequency labels
            p_min: simulation.noise_floor_dbm - 20.0,
            p_max: peak + 10.0,
        }
    }

    fn x(&self, frequency: f64) -> f64 {
        let span = (self.f_max - self.f_min).max(f64::MIN_POSITIVE);
        MARGIN_LEFT + (frequency - self.f_min) / span * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn y(&self, power_dbm: f64) -> f64 {
        let span = (self.p_max - self.p_min).max(f64::MIN_POSITIVE);
        let clamped = power_dbm.clamp(self.p_min, self.p_max);
        HEIGHT - MARGIN_BOTTOM - (clamped - self.p_min) / span * (HEIGHT - MARGIN_TOP - MARGIN_BOTTOM)
    }

    fn polyline(&self, frequencies: &[f64], powers: &[f64]) -> String {
        frequencies
            .iter()
            .zip(powers.iter())
            .map(|(&f, &p)| format!("{:.1},{:.1}", self.x(f), self.y(p)))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

fn write_chart(file: &mut File, simulation: &Simulation) -> Result<(), std::io::Error> {
    let canvas = Canvas::for_simulation(simulation);
    let frequencies = simulation.axis.samples();
    let (scale, unit) = frequency_unit(canvas.f_max);

    writeln!(
        file,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" font-family=\"sans-serif\">",
        WIDTH, HEIGHT
    )?;
    writeln!(
        file,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"white\" stroke=\"#ccc\"/>",
        MARGIN_LEFT,
        MARGIN_TOP,
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    )?;

    // individual spectra and their band markers
    for (i, (spectrum, annotation)) in simulation
        .individual
        .iter()
        .zip(simulation.annotations.iter())
        .enumerate()
    {
        let colour = colour(i);
        writeln!(
            file,
            "<polyline fill=\"none\" stroke=\"{}\" stroke-dasharray=\"6,4\" stroke-opacity=\"0.7\" points=\"{}\"/>",
            colour,
            canvas.polyline(frequencies, &spectrum.power_dbm)
        )?;

        let marker_top = canvas.y(canvas.p_max);
        let marker_bottom = canvas.y(canvas.p_min);
        writeln!(
            file,
            "<line x1=\"{x:.1}\" x2=\"{x:.1}\" y1=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\"/>",
            marker_top,
            marker_bottom,
            colour,
            x = canvas.x(annotation.center_hz)
        )?;
        for edge in [annotation.lower_edge_hz, annotation.upper_edge_hz] {
            writeln!(
                file,
                "<line x1=\"{x:.1}\" x2=\"{x:.1}\" y1=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-dasharray=\"2,3\"/>",
                marker_top,
                marker_bottom,
                colour,
                x = canvas.x(edge)
            )?;
            writeln!(
                file,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" fill=\"{}\" text-anchor=\"middle\">{:.1} {}</text>",
                canvas.x(edge),
                canvas.y(simulation.noise_floor_dbm - 10.0),
                colour,
                edge / scale,
                unit
            )?;
        }
        writeln!(
            file,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"{}\" text-anchor=\"middle\">Fc: {:.1} {}</text>",
            canvas.x(annotation.center_hz),
            canvas.y(simulation.noise_floor_dbm - 15.0),
            colour,
            annotation.center_hz / scale,
            unit
        )?;
        writeln!(
            file,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"{}\">{}: {:.2} dBm</text>",
            MARGIN_LEFT + 8.0,
            canvas.y(annotation.peak_dbm),
            colour,
            annotation.label,
            annotation.peak_dbm
        )?;
    }

    writeln!(
        file,
        "<polyline fill=\"none\" stroke=\"black\" stroke-width=\"3\" stroke-opacity=\"0.8\" points=\"{}\"/>",
        canvas.polyline(frequencies, &simulation.combined.power_dbm)
    )?;

    let floor_y = canvas.y(simulation.noise_floor_dbm);
    writeln!(
        file,
        "<line x1=\"{:.1}\" x2=\"{:.1}\" y1=\"{y:.1}\" y2=\"{y:.1}\" stroke=\"red\" stroke-dasharray=\"2,3\"/>",
        MARGIN_LEFT,
        WIDTH - MARGIN_RIGHT,
        y = floor_y
    )?;
    writeln!(
        file,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"red\">Noise: {:.2} dBm</text>",
        MARGIN_LEFT + 8.0,
        floor_y - 4.0,
        simulation.noise_floor_dbm
    )?;

    writeln!(
        file,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">Frequency ({})</text>",
        MARGIN_LEFT + (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
        HEIGHT - 12.0,
        unit
    )?;
    writeln!(
        file,
        "<text x=\"16\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\" transform=\"rotate(-90 16 {:.1})\">Power (dBm)</text>",
        HEIGHT / 2.0,
        HEIGHT / 2.0
    )?;
    writeln!(
        file,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"start\">{:.1}</text>",
        MARGIN_LEFT,
        HEIGHT - MARGIN_BOTTOM + 14.0,
        canvas.f_min / scale
    )?;
    writeln!(
        file,
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"end\">{:.1}</text>",
        WIDTH - MARGIN_RIGHT,
        HEIGHT - MARGIN_BOTTOM + 14.0,
        canvas.f_max / scale
    )?;
    writeln!(file, "</svg>")?;

    Ok(())
}

pub fn generate_html_report(simulation: &Simulation, output_path_str: &str) -> Result<(), std::io::Error> {
    let path = Path::new(output_path_str);
    let mut file = File::create(path)?;

    writeln!(file, "<!DOCTYPE html>")?;
    writeln!(file, "<html>")?;
    writeln!(file, "<head>")?;
    writeln!(file, "<meta charset=\"utf-8\">")?;
    writeln!(file, "<title>Transmitter Power Spectrum</title>")?;
    writeln!(file, "<style>")?;
    writeln!(file, "table {{ border-collapse: collapse; }}")?;
    writeln!(file, ".transmitters {{ width: 100%; }}")?;
    writeln!(file, ".parameters {{ width: auto; }}")?;
    writeln!(file, ".parameters td:nth-child(2) {{ text-align: right; }}")?;
    writeln!(
        file,
        "th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}"
    )?;
    writeln!(file, "th {{ background-color: #f2f2f2; }}")?;
    writeln!(file, "tr:nth-child(even) {{ background-color: #f9f9f9; }}")?;
    writeln!(file, "</style>")?;
    writeln!(file, "</head>")?;
    writeln!(file, "<body>")?;
    writeln!(file, "<h1>Transmitter Power Spectrum</h1>")?;

    write_chart(&mut file, simulation)?;

    writeln!(file, "<h2>System Parameters</h2>")?;
    writeln!(file, "<table class=\"parameters\">")?;
    writeln!(file, "<tr>")?;
    writeln!(file, "<th>Parameter</th>")?;
    writeln!(file, "<th>Value</th>")?;
    writeln!(file, "<th>Unit</th>")?;
    writeln!(file, "</tr>")?;
    let chain = &simulation.chain;
    let (bw_val, bw_unit) = format_frequency(simulation.measurement_bandwidth_hz);
    let rows: [(&str, f64, &str); 11] = [
        ("Combiner Loss", chain.combiner_loss_db, "dB"),
        ("Amplifier Gain", chain.amplifier_gain_db, "dB"),
        ("Tx Line Loss", chain.line_loss_db, "dB"),
        ("Antenna Gain", chain.antenna_gain_dbi, "dBi"),
        ("Total System Gain", chain.total_gain_db(), "dB"),
        ("Total Combined Power", simulation.summary.combined_power_dbm, "dBm"),
        ("Total Radiated Peak", simulation.summary.radiated_peak_dbm, "dBm"),
        ("Temperature", simulation.temperature_k, "K"),
        ("Measurement Bandwidth", bw_val, bw_unit),
        ("Noise Spectral Density", simulation.noise_spectral_density_dbm_per_hz, "dBm/Hz"),
        ("Thermal Noise Floor", simulation.noise_floor_dbm, "dBm"),
    ];
    for (name, value, unit) in rows.iter() {
        writeln!(file, "<tr>")?;
        writeln!(file, "<td>{}</td>", name)?;
        writeln!(file, "<td>{:.2}</td>", value)?;
        writeln!(file, "<td>{}</td>", unit)?;
        writeln!(file, "</tr>")?;
    }
    writeln!(file, "</table>")?;
    writeln!(file, "<br>")?;

    writeln!(file, "<h2>Transmitters</h2>")?;
    writeln!(file, "<table class=\"transmitters\">")?;
    writeln!(file, "<tr>")?;
    writeln!(file, "<th>Name</th>")?;
    writeln!(file, "<th>Active</th>")?;
    writeln!(file, "<th>Power (µW)</th>")?;
    writeln!(file, "<th>Center Frequency</th>")?;
    writeln!(file, "<th>Bandwidth</th>")?;
    writeln!(file, "<th>Fmin</th>")?;
    writeln!(file, "<th>Fmax</th>")?;
    writeln!(file, "<th>Radiated Peak (dBm)</th>")?;
    writeln!(file, "</tr>")?;

    for tx in simulation.transmitters.iter() {
        writeln!(file, "<tr>")?;
        writeln!(file, "<td>{}</td>", tx.label)?;
        writeln!(file, "<td>{}</td>", if tx.active { "yes" } else { "no" })?;
        writeln!(file, "<td>{:.1}</td>", tx.power_uw)?;
        for frequency in [
            tx.center_frequency_hz,
            tx.bandwidth_hz,
            tx.lower_edge_hz(),
            tx.upper_edge_hz(),
        ] {
            let (val, unit) = format_frequency(frequency);
            writeln!(file, "<td>{:.2} {}</td>", val, unit)?;
        }
        if tx.active {
            writeln!(file, "<td>{:.2}</td>", tx.radiated_peak_dbm(chain))?;
        } else {
            writeln!(file, "<td>-</td>")?;
        }
        writeln!(file, "</tr>")?;
    }

    writeln!(file, "</table>")?;
    writeln!(file, "</body>")?;
    writeln!(file, "</html>")?;

    Ok(())
}
