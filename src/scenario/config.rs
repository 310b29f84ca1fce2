//! Scenario configuration

use serde::{Deserialize, Serialize};

/// Configuration for a headless match run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of fixed ticks to simulate
    pub ticks: u64,
    /// Simulation rate in ticks per second
    pub fps: f64,
    /// Directory for event logs
    pub log_dir: String,
    /// Whether to write an event log
    pub log_enabled: bool,
    /// Suppress the stdout summary
    pub quiet: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            ticks: 3600,
            fps: 60.0,
            log_dir: "logs".to_string(),
            log_enabled: true,
            quiet: false,
        }
    }
}

impl ScenarioConfig {
    /// Load configuration from a JSON settings file
    pub fn from_file(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
    }

    /// Parse configuration from command line arguments
    pub fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--settings" => {
                    if let Some(path) = args.get(i + 1) {
                        match Self::from_file(path) {
                            Ok(loaded) => config = loaded,
                            Err(e) => eprintln!("Warning: {}", e),
                        }
                    }
                    i += 2;
                }
                "--ticks" => {
                    if let Some(v) = args.get(i + 1).and_then(|s| s.parse().ok()) {
                        config.ticks = v;
                    }
                    i += 2;
                }
                "--fps" => {
                    if let Some(v) = args.get(i + 1).and_then(|s| s.parse().ok()) {
                        config.fps = v;
                    }
                    i += 2;
                }
                "--log-dir" => {
                    if let Some(dir) = args.get(i + 1) {
                        config.log_dir = dir.clone();
                    }
                    i += 2;
                }
                "--no-log" => {
                    config.log_enabled = false;
                    i += 1;
                }
                "--quiet" => {
                    config.quiet = true;
                    i += 1;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        config
    }
}

fn print_usage() {
    println!("headball - headless exhibition match runner");
    println!();
    println!("Options:");
    println!("  --ticks N        Fixed ticks to simulate (default 3600)");
    println!("  --fps N          Simulation rate in ticks per second (default 60)");
    println!("  --log-dir DIR    Event log directory (default logs)");
    println!("  --no-log         Skip writing an event log");
    println!("  --quiet          Suppress the stdout summary");
    println!("  --settings FILE  Load a JSON settings file");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let config = ScenarioConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScenarioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ticks, config.ticks);
        assert_eq!(parsed.log_dir, config.log_dir);
    }
}
