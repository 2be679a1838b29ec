use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use chrono_tz::Asia::Seoul;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::models::deadline::{DeadlineRecord, SubDeadline};

#[derive(Debug, Deserialize)]
struct RawYearEntry {
    year: i32,
    timezone: String,
    deadlines: Vec<RawSubDeadline>,
}

#[derive(Debug, Deserialize)]
struct RawSubDeadline {
    label: String,
    date: String,
}

/// Parse an upstream offset string ("UTC", "UTC+8", "UTC-12", "AoE") into a
/// fixed offset. AoE (Anywhere on Earth) is the UTC-12 convention.
pub fn parse_utc_offset(tz: &str) -> Option<FixedOffset> {
    let tz = tz.trim();
    if tz.eq_ignore_ascii_case("aoe") {
        return FixedOffset::west_opt(12 * 3600);
    }
    let rest = tz.strip_prefix("UTC")?;
    if rest.is_empty() {
        return FixedOffset::east_opt(0);
    }
    let hours: i32 = rest.parse().ok()?;
    FixedOffset::east_opt(hours * 3600)
}

/// The single timezone rule of the pipeline: interpret a naive timestamp in its
/// source offset and convert it to KST.
pub fn to_kst(local: NaiveDateTime, source: FixedOffset) -> Option<DateTime<Tz>> {
    source
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Seoul))
}

// Upstream documents use a handful of timestamp shapes; a bare date means end
// of that day.
fn parse_deadline_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
}

fn normalize_entry(conference_id: &str, entry: RawYearEntry) -> Result<DeadlineRecord, String> {
    let offset = parse_utc_offset(&entry.timezone)
        .ok_or_else(|| format!("unrecognized timezone '{}'", entry.timezone))?;
    let mut deadlines = Vec::new();
    for sub in entry.deadlines {
        let local = parse_deadline_date(&sub.date)
            .ok_or_else(|| format!("unparseable date '{}' for '{}'", sub.date, sub.label))?;
        let at = to_kst(local, offset)
            .ok_or_else(|| format!("unrepresentable timestamp '{}'", sub.date))?;
        deadlines.push(SubDeadline {
            label: sub.label,
            at,
        });
    }
    if deadlines.is_empty() {
        return Err("entry has no deadlines".to_string());
    }
    Ok(DeadlineRecord {
        conference_id: conference_id.to_string(),
        year: entry.year,
        deadlines,
    })
}

/// Parse one conference's YAML document into KST deadline records, keeping only
/// the current and next year. Malformed entries are skipped with a warning so
/// valid siblings still pass through; a document that is not a sequence yields
/// nothing.
pub fn normalize_document(
    conference_id: &str,
    raw_yaml: &str,
    current_year: i32,
) -> Vec<DeadlineRecord> {
    let values: Vec<serde_yaml::Value> = match serde_yaml::from_str(raw_yaml) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Skipping document for {}: {}", conference_id, e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for value in values {
        let entry: RawYearEntry = match serde_yaml::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("Skipping malformed entry for {}: {}", conference_id, e);
                continue;
            }
        };
        if entry.year != current_year && entry.year != current_year + 1 {
            continue;
        }
        match normalize_entry(conference_id, entry) {
            Ok(record) => records.push(record),
            Err(e) => eprintln!("Skipping entry for {}: {}", conference_id, e),
        }
    }
    records
}
