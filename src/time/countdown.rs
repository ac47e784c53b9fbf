//! Remaining-time countdown for a market's trading window.

use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// How a countdown is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownStyle {
    /// `2d 4h 10m`, used on market cards.
    #[default]
    Compact,
    /// `2 days, 4 hours, 10 minutes`, used on the detail view.
    Long,
}

/// Time left, split into calendar-free units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Decompose a positive millisecond difference.
    pub fn from_millis(diff: i64) -> Self {
        Self {
            days: diff / MS_PER_DAY,
            hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }
}

/// State of a countdown at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Running(Remaining),
    Expired,
}

impl Countdown {
    /// Compute the countdown towards `end` as seen at `now`.
    pub fn between(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = (end - now).num_milliseconds();
        if diff <= 0 {
            Self::Expired
        } else {
            Self::Running(Remaining::from_millis(diff))
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Render the two or three coarsest units.
    pub fn label(&self, style: CountdownStyle) -> String {
        let r = match self {
            Self::Expired => {
                return match style {
                    CountdownStyle::Compact => "Closed".to_string(),
                    CountdownStyle::Long => "Market Closed".to_string(),
                };
            }
            Self::Running(r) => r,
        };

        match style {
            CountdownStyle::Compact => {
                if r.days > 0 {
                    format!("{}d {}h {}m", r.days, r.hours, r.minutes)
                } else if r.hours > 0 {
                    format!("{}h {}m {}s", r.hours, r.minutes, r.seconds)
                } else if r.minutes > 0 {
                    format!("{}m {}s", r.minutes, r.seconds)
                } else {
                    format!("{}s", r.seconds)
                }
            }
            CountdownStyle::Long => {
                if r.days > 0 {
                    format!("{} days, {} hours, {} minutes", r.days, r.hours, r.minutes)
                } else if r.hours > 0 {
                    format!(
                        "{} hours, {} minutes, {} seconds",
                        r.hours, r.minutes, r.seconds
                    )
                } else if r.minutes > 0 {
                    format!("{} minutes, {} seconds", r.minutes, r.seconds)
                } else {
                    format!("{} seconds", r.seconds)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_past_end_is_expired() {
        let countdown = Countdown::between(now() - Duration::hours(3), now());
        assert!(countdown.is_expired());
        assert_eq!(countdown.label(CountdownStyle::Compact), "Closed");
        assert_eq!(countdown.label(CountdownStyle::Long), "Market Closed");
    }

    #[test]
    fn test_end_equal_to_now_is_expired() {
        assert!(Countdown::between(now(), now()).is_expired());
    }

    #[test]
    fn test_ninety_seconds_shows_minutes_and_seconds() {
        let countdown = Countdown::between(now() + Duration::milliseconds(90_000), now());
        let label = countdown.label(CountdownStyle::Compact);
        assert_eq!(label, "1m 30s");
        assert!(!label.contains('d') && !label.contains('h'));
    }

    #[test]
    fn test_days_drop_seconds() {
        let end = now()
            + Duration::days(1)
            + Duration::hours(2)
            + Duration::minutes(3)
            + Duration::seconds(4);
        let countdown = Countdown::between(end, now());
        assert_eq!(countdown.label(CountdownStyle::Compact), "1d 2h 3m");
        assert_eq!(
            countdown.label(CountdownStyle::Long),
            "1 days, 2 hours, 3 minutes"
        );
    }

    #[test]
    fn test_hours_keep_seconds() {
        let end = now() + Duration::hours(5) + Duration::seconds(7);
        assert_eq!(
            Countdown::between(end, now()).label(CountdownStyle::Compact),
            "5h 0m 7s"
        );
    }

    #[test]
    fn test_sub_second_remainder_rounds_down() {
        let countdown = Countdown::between(now() + Duration::milliseconds(999), now());
        assert!(!countdown.is_expired());
        assert_eq!(countdown.label(CountdownStyle::Compact), "0s");
        assert_eq!(countdown.label(CountdownStyle::Long), "0 seconds");
    }
}
