use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::errors::AnalyzerError;

#[derive(Parser, Debug, Default)]
#[command(version, about = "Tally access-log requests per IPv4 address", long_about = None)]
#[command(ignore_errors = true)]
pub struct Cli {
    /// Access log to analyze
    #[arg(long, value_name = "PATH")]
    pub file_log: Option<String>,

    /// Destination for the per-address report
    #[arg(long, value_name = "PATH")]
    pub file_output: Option<String>,

    /// Range start; on its own selects exactly this address
    #[arg(long, value_name = "IPV4")]
    pub address_start: Option<String>,

    /// Bitmask applied to both sides of the range comparison
    #[arg(long, value_name = "IPV4")]
    pub address_mask: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Key/value configuration source, second in precedence after the CLI.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileConfig {
    pub log_file_path: Option<String>,
    pub output_file_path: Option<String>,
    pub address_start: Option<String>,
    pub address_mask: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, AnalyzerError> {
        let shown = path.display().to_string();
        let text =
            std::fs::read_to_string(path).map_err(|source| AnalyzerError::from_io(&shown, source))?;
        serde_json::from_str(&text).map_err(|source| AnalyzerError::InvalidConfig {
            path: shown,
            source,
        })
    }
}

/// Snapshot of environment variables, last in precedence. Injected rather
/// than read ambiently so resolution stays deterministic under test.
#[derive(Debug, Default)]
pub struct Environment(HashMap<String, String>);

impl Environment {
    pub fn from_process() -> Self {
        Self(std::env::vars().collect())
    }

    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Final parameter set. `log_file` and `output_file` are non-empty, and a
/// present mask implies a present start address.
#[derive(Debug)]
pub struct Settings {
    pub log_file: String,
    pub output_file: String,
    pub address_start: Option<Ipv4Addr>,
    pub address_mask: Option<String>,
}

impl Settings {
    /// Merges the three sources field by field; the first non-empty value
    /// wins, in the order command line, configuration file, environment.
    pub fn resolve(
        cli: &Cli,
        file: &FileConfig,
        env: &Environment,
    ) -> Result<Self, AnalyzerError> {
        let log_file = pick([
            cli.file_log.as_deref(),
            file.log_file_path.as_deref(),
            env.get("LOG_FILE_PATH"),
        ])
        .ok_or(AnalyzerError::MissingRequiredParameter { name: "--file-log" })?;
        let output_file = pick([
            cli.file_output.as_deref(),
            file.output_file_path.as_deref(),
            env.get("OUTPUT_FILE_PATH"),
        ])
        .ok_or(AnalyzerError::MissingRequiredParameter {
            name: "--file-output",
        })?;
        let address_start = pick([
            cli.address_start.as_deref(),
            file.address_start.as_deref(),
            env.get("ADDRESS_START"),
        ])
        .map(|literal| {
            literal
                .parse::<Ipv4Addr>()
                .map_err(|source| AnalyzerError::InvalidAddress {
                    literal: literal.to_string(),
                    source,
                })
        })
        .transpose()?;
        let address_mask = pick([
            cli.address_mask.as_deref(),
            file.address_mask.as_deref(),
            env.get("ADDRESS_MASK"),
        ]);

        if address_mask.is_some() && address_start.is_none() {
            return Err(AnalyzerError::InconsistentFilter);
        }

        Ok(Self {
            log_file: log_file.to_string(),
            output_file: output_file.to_string(),
            address_start,
            address_mask: address_mask.map(str::to_string),
        })
    }
}

fn pick(sources: [Option<&str>; 3]) -> Option<&str> {
    sources.into_iter().flatten().find(|v| !v.is_empty())
}
