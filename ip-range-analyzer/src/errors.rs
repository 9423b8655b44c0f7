use std::io;
use std::net::AddrParseError;

use derive_more::{Display, Error};

/// Everything that can stop a run. Each variant surfaces unchanged at the
/// top level; no stage retries or recovers.
#[derive(Debug, Display, Error)]
pub enum AnalyzerError {
    #[display("missing required parameter: {name}")]
    MissingRequiredParameter { name: &'static str },

    #[display("invalid IPv4 address '{literal}': {source}")]
    InvalidAddress {
        literal: String,
        source: AddrParseError,
    },

    #[display("an address mask was supplied without an address start")]
    InconsistentFilter,

    #[display("invalid address mask '{literal}': {source}")]
    InvalidMask {
        literal: String,
        source: AddrParseError,
    },

    #[display("malformed configuration file '{path}': {source}")]
    InvalidConfig {
        path: String,
        source: serde_json::Error,
    },

    #[display("permission denied on '{path}': {source}")]
    Permission { path: String, source: io::Error },

    #[display("i/o error on '{path}': {source}")]
    Io { path: String, source: io::Error },

    #[display("line {line}: matched {field} '{value}' does not parse")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl AnalyzerError {
    /// Classifies an OS failure on `path`, splitting out access denials.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::Permission {
                path: path.to_string(),
                source,
            }
        } else {
            Self::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_splits_out_permission_denials() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            AnalyzerError::from_io("out.txt", denied),
            AnalyzerError::Permission { .. }
        ));

        let missing = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(matches!(
            AnalyzerError::from_io("in.txt", missing),
            AnalyzerError::Io { .. }
        ));
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = AnalyzerError::Parse {
            line: 7,
            field: "timestamp",
            value: "2024-13-01 10:00:00".into(),
        };
        assert_eq!(
            err.to_string(),
            "line 7: matched timestamp '2024-13-01 10:00:00' does not parse"
        );
    }
}
