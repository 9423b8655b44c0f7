use std::net::Ipv4Addr;

use chrono::NaiveDateTime;

/// One extracted log entry. Immutable once parsed; the filter and the
/// aggregator only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    pub addr: Ipv4Addr,
    pub timestamp: NaiveDateTime,
}
