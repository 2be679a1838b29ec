use chrono::DateTime;
use chrono_tz::Tz;

/// One named milestone inside a conference's yearly record, already in KST.
#[derive(Debug, Clone)]
pub struct SubDeadline {
    pub label: String,
    pub at: DateTime<Tz>,
}

/// A conference's deadlines for a single year. Built fresh on every run from the
/// fetched document; all timestamps are KST by the time a record exists.
#[derive(Debug, Clone)]
pub struct DeadlineRecord {
    pub conference_id: String,
    pub year: i32,
    pub deadlines: Vec<SubDeadline>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTier {
    Urgent,
    Upcoming,
    Plenty,
}

impl UrgencyTier {
    pub fn from_days(days_remaining: i64) -> Self {
        if days_remaining <= 30 {
            UrgencyTier::Urgent
        } else if days_remaining <= 180 {
            UrgencyTier::Upcoming
        } else {
            UrgencyTier::Plenty
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            UrgencyTier::Urgent => "🔴",
            UrgencyTier::Upcoming => "🟠",
            UrgencyTier::Plenty => "🟢",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(UrgencyTier::from_days(0), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::from_days(30), UrgencyTier::Urgent);
        assert_eq!(UrgencyTier::from_days(31), UrgencyTier::Upcoming);
        assert_eq!(UrgencyTier::from_days(180), UrgencyTier::Upcoming);
        assert_eq!(UrgencyTier::from_days(181), UrgencyTier::Plenty);
    }
}
