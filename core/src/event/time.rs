use chrono::{DateTime, NaiveDateTime, Utc};

/// Sort key assigned to timestamps that cannot be parsed; such events sort last.
pub const MALFORMED_TS: i64 = i64::MAX;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp into Unix milliseconds.
///
/// Accepts RFC 3339 (with offset) and naive date-times, which are read as UTC.
/// Anything else yields [`MALFORMED_TS`].
pub fn parse_ts_millis(raw: &str) -> i64 {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis();
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive.and_utc().timestamp_millis();
        }
    }
    tracing::trace!(timestamp = %s, "unparsable timestamp, sorting last");
    MALFORMED_TS
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(parse_ts_millis("1970-01-01T00:00:01Z"), 1_000);
        assert_eq!(parse_ts_millis("1970-01-01T01:00:00+01:00"), 0);
        assert_eq!(parse_ts_millis("2025-01-01T00:00:00.250Z") % 1_000, 250);
    }

    #[test]
    fn naive_timestamps_are_utc() {
        assert_eq!(parse_ts_millis("1970-01-01T00:00:02.5"), 2_500);
        assert_eq!(parse_ts_millis("1970-01-01 00:00:03"), 3_000);
    }

    #[test]
    fn malformed_timestamps_sort_last() {
        assert_eq!(parse_ts_millis("yesterday"), MALFORMED_TS);
        assert_eq!(parse_ts_millis(""), MALFORMED_TS);
        assert!(parse_ts_millis("2030-01-01T00:00:00Z") < parse_ts_millis("nope"));
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn malformed_timestamp_is_traced() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        let ts = tracing::subscriber::with_default(subscriber, || parse_ts_millis("soon"));
        assert_eq!(ts, MALFORMED_TS);

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("unparsable timestamp"));
        assert!(logged.contains("timestamp=soon"));
    }
}
