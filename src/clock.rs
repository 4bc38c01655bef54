//! Process start time and uptime rendering.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Start-of-process reference used to compute uptime.
///
/// Captured once during initialization and copied into the router state.
/// Uptime is measured against the monotonic clock so wall-clock adjustments
/// never make it go backwards.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl ProcessClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Wall-clock time the process started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn uptime(&self) -> Duration {
        self.uptime_at(Instant::now())
    }

    /// Uptime as of `now`; saturates to zero for instants before the start.
    pub fn uptime_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }
}

/// Render a duration in compact unit notation: `1h2m3.5s`, `250ms`, `1.5µs`, `0s`.
///
/// Sub-second durations use the largest unit that keeps the integer part
/// non-zero. From one second up, hours and minutes are prefixed as needed and
/// minutes are always shown once hours are.
pub fn format_uptime(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < NANOS_PER_MICRO {
        return format!("{}ns", nanos);
    }
    if nanos < NANOS_PER_MILLI {
        return format!("{}µs", with_fraction(nanos, NANOS_PER_MICRO, 3));
    }
    if nanos < NANOS_PER_SEC {
        return format!("{}ms", with_fraction(nanos, NANOS_PER_MILLI, 6));
    }

    let secs = duration.as_secs();
    let hours = secs / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = u128::from(secs % SECS_PER_MINUTE) * NANOS_PER_SEC
        + u128::from(duration.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&with_fraction(seconds, NANOS_PER_SEC, 9));
    out.push('s');
    out
}

/// `value / unit` with the remainder as a decimal fraction, trailing zeros trimmed.
fn with_fraction(value: u128, unit: u128, digits: usize) -> String {
    let whole = value / unit;
    let rem = value % unit;
    if rem == 0 {
        return whole.to_string();
    }
    let fraction = format!("{:0width$}", rem, width = digits);
    format!("{}.{}", whole, fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
    }

    #[test]
    fn test_format_sub_second_units() {
        assert_eq!(format_uptime(Duration::from_nanos(450)), "450ns");
        assert_eq!(format_uptime(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(format_uptime(Duration::from_micros(12)), "12µs");
        assert_eq!(format_uptime(Duration::from_millis(250)), "250ms");
        assert_eq!(format_uptime(Duration::from_nanos(1_234_567)), "1.234567ms");
    }

    #[test]
    fn test_format_seconds_and_above() {
        assert_eq!(format_uptime(Duration::from_secs(1)), "1s");
        assert_eq!(format_uptime(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(format_uptime(Duration::from_secs(120)), "2m0s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "1h2m5s");
        assert_eq!(
            format_uptime(Duration::new(3 * 3600 + 25 * 60 + 7, 1)),
            "3h25m7.000000001s"
        );
    }

    #[test]
    fn test_format_large_hours() {
        assert_eq!(format_uptime(Duration::from_secs(100 * 3600 + 61)), "100h1m1s");
    }

    #[test]
    fn test_uptime_never_decreases() {
        let clock = ProcessClock::start();
        let first = clock.uptime();
        let second = clock.uptime();
        assert!(second >= first);
    }

    #[test]
    fn test_uptime_strictly_increases_over_a_second() {
        let clock = ProcessClock::start();
        let now = Instant::now();
        let later = now + Duration::from_millis(1_100);

        let earlier_uptime = clock.uptime_at(now);
        let later_uptime = clock.uptime_at(later);

        assert!(later_uptime > earlier_uptime);
        assert!(later_uptime - earlier_uptime >= Duration::from_secs(1));
        assert_ne!(format_uptime(earlier_uptime), format_uptime(later_uptime));
    }

    #[test]
    fn test_uptime_before_start_saturates() {
        let before = Instant::now();
        let clock = ProcessClock::start();
        assert_eq!(clock.uptime_at(before), Duration::ZERO);
    }
}
