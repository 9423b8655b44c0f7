use std::net::Ipv4Addr;

use crate::errors::AnalyzerError;
use crate::models::LogRecord;

/// Restricts `records` to the configured address range.
///
/// With only a start address, admission is exact equality. With a mask, a
/// record is admitted when its masked address is numerically at or above
/// the masked start in network byte order. That is a lower bound, not a
/// subnet-membership test: everything above the masked start passes, even
/// outside the start's subnet.
pub fn filter_by_range(
    records: Vec<LogRecord>,
    start: Option<Ipv4Addr>,
    mask: Option<&str>,
) -> Result<Vec<LogRecord>, AnalyzerError> {
    match (start, mask) {
        (None, None) => Ok(records),
        (start, Some(literal)) => {
            let mask: Ipv4Addr =
                literal
                    .parse()
                    .map_err(|source| AnalyzerError::InvalidMask {
                        literal: literal.to_string(),
                        source,
                    })?;
            let start = start.ok_or(AnalyzerError::InconsistentFilter)?;
            let mask = u32::from(mask);
            let floor = u32::from(start) & mask;
            Ok(records
                .into_iter()
                .filter(|record| u32::from(record.addr) & mask >= floor)
                .collect())
        }
        (Some(start), None) => Ok(records
            .into_iter()
            .filter(|record| record.addr == start)
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(addr: &str) -> LogRecord {
        LogRecord {
            addr: addr.parse().unwrap(),
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        }
    }

    fn sample() -> Vec<LogRecord> {
        vec![
            record("203.0.113.5"),
            record("203.0.113.5"),
            record("198.51.100.2"),
        ]
    }

    #[test]
    fn no_range_is_identity() {
        let records = sample();
        let filtered = filter_by_range(records.clone(), None, None).unwrap();
        assert_eq!(filtered, records);
    }

    #[test]
    fn start_alone_matches_exactly() {
        let filtered =
            filter_by_range(sample(), Some("198.51.100.2".parse().unwrap()), None).unwrap();
        assert_eq!(filtered, vec![record("198.51.100.2")]);
    }

    #[test]
    fn start_alone_can_match_nothing() {
        let filtered =
            filter_by_range(sample(), Some("192.0.2.1".parse().unwrap()), None).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn masked_comparison_is_a_lower_bound() {
        // 203.0.113.0 and 198.51.100.0 both sit at or above the masked
        // start, so the whole sample passes despite spanning two subnets.
        let filtered = filter_by_range(
            sample(),
            Some("198.51.100.0".parse().unwrap()),
            Some("255.255.255.0"),
        )
        .unwrap();
        assert_eq!(filtered, sample());
    }

    #[test]
    fn masked_comparison_drops_addresses_below_the_floor() {
        let mut records = sample();
        records.push(record("10.0.0.1"));
        let filtered = filter_by_range(
            records,
            Some("198.51.100.0".parse().unwrap()),
            Some("255.255.255.0"),
        )
        .unwrap();
        assert_eq!(filtered, sample());
    }

    #[test]
    fn unparsable_mask_is_rejected() {
        let err = filter_by_range(
            sample(),
            Some("198.51.100.0".parse().unwrap()),
            Some("not-a-mask"),
        )
        .unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidMask { .. }));
    }

    #[test]
    fn mask_without_start_is_inconsistent() {
        let err = filter_by_range(sample(), None, Some("255.255.255.0")).unwrap_err();
        assert!(matches!(err, AnalyzerError::InconsistentFilter));
    }
}
