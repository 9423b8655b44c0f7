use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::errors::AnalyzerError;
use crate::models::LogRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Dotted quad followed by a timestamp, e.g. "203.0.113.5 2024-01-01 10:00:00"
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) ([\d-]+\s[\d:]+)").expect("valid pattern")
});

/// Streams `path` line by line and extracts records in file order. Lines
/// that do not match the pattern are skipped; a line that matches but does
/// not parse aborts the read.
pub fn read_records(path: &str) -> Result<Vec<LogRecord>, AnalyzerError> {
    let file = File::open(path).map_err(|source| AnalyzerError::from_io(path, source))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AnalyzerError::from_io(path, source))?;
        if let Some(record) = parse_line(&line, index + 1)? {
            records.push(record);
        }
    }
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        tracing::debug!(from = %first.timestamp, to = %last.timestamp, "observed time span");
    }
    tracing::debug!(path, records = records.len(), "log ingest finished");
    Ok(records)
}

fn parse_line(line: &str, number: usize) -> Result<Option<LogRecord>, AnalyzerError> {
    let Some(captures) = ENTRY_PATTERN.captures(line) else {
        return Ok(None);
    };
    let addr = captures[1].parse().map_err(|_| AnalyzerError::Parse {
        line: number,
        field: "address",
        value: captures[1].to_string(),
    })?;
    let timestamp =
        NaiveDateTime::parse_from_str(&captures[2], TIMESTAMP_FORMAT).map_err(|_| {
            AnalyzerError::Parse {
                line: number,
                field: "timestamp",
                value: captures[2].to_string(),
            }
        })?;
    Ok(Some(LogRecord { addr, timestamp }))
}
