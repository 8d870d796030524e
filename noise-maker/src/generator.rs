use chrono::{DateTime, FixedOffset};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
];
const STATUS: [(u16, u8); 7] = [
    (200, 50),
    (201, 10),
    (304, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const USERS: [(&str, u8); 3] = [("-", 20), ("frank", 2), ("alice", 1)];

/// Knobs for a single generated line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineShape {
    pub dash_ratio: f64,
    pub malformed_ratio: f64,
}

pub fn generate_access_log<R: Rng + ?Sized>(
    rng: &mut R,
    timestamp: DateTime<FixedOffset>,
    shape: LineShape,
) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..4),
        rng.random_range(0..256)
    );
    let user = USERS.choose_weighted(rng, |(_, w)| *w).map_or("-", |u| u.0);
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).map_or("GET", |m| m.0);
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).map_or("/", |p| p.0);
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).map_or(200, |s| s.0);
    let size = if rng.random_bool(shape.dash_ratio) {
        "-".to_string()
    } else {
        rng.random_range(100..2000).to_string()
    };
    let timestamp = timestamp.format("%d/%b/%Y:%H:%M:%S %z");

    if rng.random_bool(shape.malformed_ratio) {
        return format!("{ip} - {user} [{timestamp}] \"{method} {path}");
    }
    format!("{ip} - {user} [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {size}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;
    use chrono::TimeZone;
    use rand::{SeedableRng, rngs::StdRng};

    fn at() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(1995, 6, 1, 0, 0, 59)
            .unwrap()
    }

    #[test]
    fn formats_timestamp_like_apache() {
        let mut rng = StdRng::seed_from_u64(7);
        let line = generate_access_log(&mut rng, at(), LineShape::default());
        assert_that!(line.contains("[01/Jun/1995:00:00:59 -0600]")).is_true();
        assert_that!(line.contains(" HTTP/1.1\" ")).is_true();
    }

    #[test]
    fn dash_ratio_one_always_dashes() {
        let mut rng = StdRng::seed_from_u64(7);
        let shape = LineShape {
            dash_ratio: 1.0,
            malformed_ratio: 0.0,
        };
        for _ in 0..50 {
            assert_that!(generate_access_log(&mut rng, at(), shape).ends_with(" -")).is_true();
        }
    }

    #[test]
    fn malformed_lines_lack_closing_quote() {
        let mut rng = StdRng::seed_from_u64(7);
        let shape = LineShape {
            dash_ratio: 0.0,
            malformed_ratio: 1.0,
        };
        let line = generate_access_log(&mut rng, at(), shape);
        assert_that!(line.matches('"').count()).is_equal_to(1);
    }

    #[test]
    fn same_seed_same_line() {
        let a = generate_access_log(&mut StdRng::seed_from_u64(42), at(), LineShape::default());
        let b = generate_access_log(&mut StdRng::seed_from_u64(42), at(), LineShape::default());
        assert_that!(a).is_equal_to(b);
    }
}
