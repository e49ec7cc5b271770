use std::path::Path;
use std::process;

use tracing::{error, info};

// this cannot be crate::Simulation because of how Cargo works,
// since cargo/rust treats lib.rs and main.rs as separate crates
use crate::load_config;
use crate::report;
use crate::simulate;

pub struct Config {}

impl Config {
    pub fn run(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
        if args.len() < 2 {
            return Err("not enough arguments".into());
        }

        if args.len() > 2 {
            return Err(
                "too many arguments, expecting only 2, such as `txspectrum filepath`".into(),
            );
        }

        // Check for special flags
        match args[1].as_str() {
            "--version" | "-v" => {
                print_version();
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }

        let cwd = std::env::current_dir()?;
        // cargo run arg[1], such as cargo run files/three_transmitters.toml
        // txspectrum arg[1], such as txspectrum files/three_transmitters.toml
        let file_path = args[1].clone();
        let full_path_to_config = cwd.join(&file_path);
        info!(config = %full_path_to_config.display(), "config path");

        let config = load_config(&full_path_to_config.display().to_string())?;

        let simulation = match simulate(&config) {
            Ok(simulation) => simulation,
            Err(e) => {
                error!(%e, "simulation refused");
                return Err(e.into());
            }
        };

        report::print_report(&simulation);

        #[cfg(feature = "plot")]
        {
            let output_html_path = html_output_path(&full_path_to_config);
            info!(path = %output_html_path, "generating html report");
            if let Err(e) = crate::plot::generate_html_report(&simulation, &output_html_path) {
                error!(%e, "error generating html report");
            }
        }

        Ok(Config {})
    }
}

// basename.toml -> basename.html, next to the config file
pub fn html_output_path(config_path: &Path) -> String {
    let html_path = config_path.with_extension("html");
    let mut html_path = html_path.display().to_string();
    // Remove the UNC prefix on Windows if present
    if cfg!(target_os = "windows") && html_path.starts_with(r"\\?\") {
        html_path = html_path[4..].to_string();
    }
    html_path
}

pub fn print_version() {
    println!("txspectrum {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_error(error: &str) {
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";
    println!("{}Problem running simulation: {error}{}", RED, RESET);
}

pub fn print_help() {
    // ANSI color codes
    const BOLD: &str = "\x1b[1m";
    const CYAN: &str = "\x1b[36m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const RESET: &str = "\x1b[0m";

    println!("📡 Transmitter power spectrum simulator{}", RESET);
    println!();
    println!("{}{}VERSION:{}", BOLD, YELLOW, RESET);
    println!("    {}{}{}", GREEN, env!("CARGO_PKG_VERSION"), RESET);
    println!();
    println!("{}{}USAGE:{}", BOLD, YELLOW, RESET);
    println!("    {} txspectrum <FILE_PATH>{}", GREEN, RESET);
    println!();
    println!("     FILE_PATH: path to a toml config file");
    println!();
    println!("     The transmitters, transmit chain and noise parameters are read from the");
    println!("     toml file, a text report is printed, and an html report with the");
    println!("     spectrum plot is written next to the source file.");
    println!();
    println!("{}{}OPTIONS:{}", BOLD, YELLOW, RESET);
    println!(
        "    {}  -v, --version{}{}    Print version information",
        GREEN, RESET, RESET
    );
    println!(
        "    {}  -h, --help{}{}       Print help information",
        GREEN, RESET, RESET
    );
    println!();
    println!("{}{}EXAMPLES:{}", BOLD, YELLOW, RESET);
    println!("    {} # Single file (Relative path){}", CYAN, RESET);
    println!("    {} txspectrum files/three_transmitters.toml{}", GREEN, RESET);
    println!();
}
