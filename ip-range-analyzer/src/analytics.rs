use std::collections::HashMap;
use std::net::Ipv4Addr;

use crate::models::LogRecord;

/// Tallies requests per address. Pure; input order does not matter.
pub fn count_requests(records: &[LogRecord]) -> HashMap<Ipv4Addr, u64> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.addr).or_default() += 1;
    }
    counts
}
