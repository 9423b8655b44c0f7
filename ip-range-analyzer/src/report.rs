use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::net::Ipv4Addr;

use crate::errors::AnalyzerError;

/// Writes one `<address> - <count>` line per entry, most requests first.
/// The output is created fresh on every run; the handle flushes and closes
/// on all exit paths.
pub fn write_report(path: &str, counts: &HashMap<Ipv4Addr, u64>) -> Result<(), AnalyzerError> {
    let file = File::create(path).map_err(|source| AnalyzerError::from_io(path, source))?;
    let mut writer = BufWriter::new(file);
    for (addr, count) in sorted_entries(counts) {
        writeln!(writer, "{addr} - {count}")
            .map_err(|source| AnalyzerError::from_io(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| AnalyzerError::from_io(path, source))
}

// Equal counts order by ascending address so repeated runs stay
// byte-identical.
fn sorted_entries(counts: &HashMap<Ipv4Addr, u64>) -> Vec<(Ipv4Addr, u64)> {
    let mut entries: Vec<_> = counts.iter().map(|(addr, count)| (*addr, *count)).collect();
    entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
