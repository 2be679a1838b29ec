use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Seoul;
use chrono_tz::Tz;

/// Which view a run renders: the full grouped digest on odd days of the month,
/// the focused target-only list on even days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestMode {
    Full,
    TargetsOnly,
}

impl DigestMode {
    pub fn for_date(now: DateTime<Tz>) -> Self {
        if now.day() % 2 == 1 {
            DigestMode::Full
        } else {
            DigestMode::TargetsOnly
        }
    }
}

/// Per-invocation state. Created once in main and handed into the pipeline so
/// the deep logic never touches the system clock.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub now: DateTime<Tz>,
    pub mode: DigestMode,
}

impl RunContext {
    pub fn from_now(now: DateTime<Tz>) -> Self {
        Self {
            now,
            mode: DigestMode::for_date(now),
        }
    }

    /// Context for the current wall clock, or for 09:00 KST on an overridden date.
    pub fn for_run(date_override: Option<NaiveDate>) -> Self {
        let now = match date_override {
            Some(date) => Seoul
                .from_local_datetime(&date.and_hms_opt(9, 0, 0).unwrap())
                .single()
                .unwrap_or_else(|| Utc::now().with_timezone(&Seoul)),
            None => Utc::now().with_timezone(&Seoul),
        };
        Self::from_now(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_day_selects_full_digest() {
        let now = Seoul.with_ymd_and_hms(2026, 3, 11, 9, 0, 0).unwrap();
        assert_eq!(DigestMode::for_date(now), DigestMode::Full);
    }

    #[test]
    fn even_day_selects_targets_only() {
        let now = Seoul.with_ymd_and_hms(2026, 3, 12, 9, 0, 0).unwrap();
        assert_eq!(DigestMode::for_date(now), DigestMode::TargetsOnly);
    }
}
