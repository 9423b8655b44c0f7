use chrono::NaiveDateTime;
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 12), ("POST", 4), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 5] = [
    ("/", 15),
    ("/login", 8),
    ("/api/v1/items", 40),
    ("/healthz", 25),
    ("/static/app.js", 12),
];
const STATUS: [(u16, u8); 5] = [
    (200, 60),
    (301, 8),
    (403, 6),
    (404, 20),
    (500, 3),
];
// Skewed pool so per-address tallies come out uneven.
const HOT_ADDRS: [(&str, u8); 4] = [
    ("203.0.113.5", 40),
    ("203.0.113.17", 15),
    ("192.0.2.9", 25),
    ("198.51.100.2", 10),
];
const NOISE: [(&str, u8); 5] = [
    ("worker heartbeat ok", 50),
    ("cache miss for session store", 10),
    ("permission denied", 10),
    ("token refreshed", 8),
    ("db pool exhausted, retrying", 5),
];

pub fn generate_access_line<R: Rng + ?Sized>(rng: &mut R, timestamp: NaiveDateTime) -> String {
    let addr = pick_addr(rng);
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!(
        "{addr} {} {method} {path} {status}",
        timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}

pub fn generate_json_line<R: Rng + ?Sized>(rng: &mut R, timestamp: NaiveDateTime) -> String {
    let msg = NOISE.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!(
        "{{\"ts\":\"{}\",\"msg\":\"{msg}\"}}",
        timestamp.format("%Y-%m-%dT%H:%M:%S")
    )
}

pub fn generate_noise_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let msg = NOISE.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    format!("[warn] {msg}")
}

fn pick_addr<R: Rng + ?Sized>(rng: &mut R) -> String {
    if rng.random_bool(0.2) {
        format!("198.51.100.{}", rng.random_range(0..256))
    } else {
        HOT_ADDRS.choose_weighted(rng, |(_, w)| *w).unwrap().0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::{SeedableRng, rngs::StdRng};
    use std::net::Ipv4Addr;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn access_lines_carry_an_extractable_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let line = generate_access_line(&mut rng, base());
            let mut parts = line.split(' ');
            let addr = parts.next().unwrap();
            let date = parts.next().unwrap();
            let time = parts.next().unwrap();

            addr.parse::<Ipv4Addr>().unwrap();
            NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap();
        }
    }

    #[test]
    fn noise_lines_have_no_address_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let line = generate_noise_line(&mut rng);
            assert!(line.split(' ').next().unwrap().parse::<Ipv4Addr>().is_err());
        }
    }

    #[test]
    fn json_lines_have_no_address_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        let line = generate_json_line(&mut rng, base());
        assert!(line.starts_with('{'));
        assert!(line.split(' ').next().unwrap().parse::<Ipv4Addr>().is_err());
    }

    #[test]
    fn same_seed_same_lines() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                generate_access_line(&mut a, base()),
                generate_access_line(&mut b, base())
            );
        }
    }
}
