// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::OutputFormat;

// Runtime settings for the generator CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Output
    pub output_format: OutputFormat,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset values keep their
    /// defaults; unparsable ones also keep their defaults and are returned
    /// as warnings, since the logger is not installed yet.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut rejected = Vec::new();

        // Output
        if let Some(format) = lookup("OUTPUT_FORMAT") {
            match format.to_lowercase().as_str() {
                "text" => config.output_format = OutputFormat::Text,
                "plain" => config.output_format = OutputFormat::Plain,
                "json" => config.output_format = OutputFormat::Json,
                _ => rejected.push(format!("Unknown OUTPUT_FORMAT '{}', using text", format)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => rejected.push(format!(
                    "Unknown LOG_LEVEL '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, rejected)
    }
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
