use std::collections::HashMap;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::models::conference::{Category, ConferenceSpec};
use crate::models::deadline::{DeadlineRecord, SubDeadline, UrgencyTier};
use crate::models::run_context::{DigestMode, RunContext};

/// One rendered row: a conference with its nearest still-future sub-deadline.
struct DigestLine<'a> {
    spec: &'a ConferenceSpec,
    year: i32,
    next: &'a SubDeadline,
    days_remaining: i64,
}

/// Whole days until the earliest sub-deadline still ahead of `now`. None when
/// every sub-deadline has passed, which excludes the record from the digest.
pub fn days_remaining<'a>(
    record: &'a DeadlineRecord,
    now: DateTime<Tz>,
) -> Option<(i64, &'a SubDeadline)> {
    record
        .deadlines
        .iter()
        .filter(|d| d.at > now)
        .min_by_key(|d| d.at)
        .map(|d| ((d.at.date_naive() - now.date_naive()).num_days(), d))
}

fn collect_lines<'a>(
    specs: &'a [ConferenceSpec],
    records: &'a [DeadlineRecord],
    ctx: &RunContext,
) -> Vec<DigestLine<'a>> {
    let by_id: HashMap<&str, &ConferenceSpec> =
        specs.iter().map(|s| (s.id.as_str(), s)).collect();

    let mut lines: Vec<DigestLine> = records
        .iter()
        .filter_map(|record| {
            let spec = *by_id.get(record.conference_id.as_str())?;
            let (days, next) = days_remaining(record, ctx.now)?;
            Some(DigestLine {
                spec,
                year: record.year,
                next,
                days_remaining: days,
            })
        })
        .collect();

    if ctx.mode == DigestMode::TargetsOnly {
        lines.retain(|line| line.spec.is_target);
    }
    // Soonest first; ties broken by conference id.
    lines.sort_by(|a, b| {
        a.days_remaining
            .cmp(&b.days_remaining)
            .then_with(|| a.spec.id.cmp(&b.spec.id))
    });
    lines
}

fn render_line(line: &DigestLine) -> String {
    let tier = UrgencyTier::from_days(line.days_remaining);
    format!(
        "{} *{} {}* | ⏰ D-{}\n    📆 {}: {} KST",
        tier.emoji(),
        line.spec.name,
        line.year,
        line.days_remaining,
        line.next.label,
        line.next.at.format("%Y-%m-%d %H:%M"),
    )
}

/// Render the digest for this run, or None when no conference has a future
/// sub-deadline to show.
pub fn build_digest(
    specs: &[ConferenceSpec],
    records: &[DeadlineRecord],
    ctx: &RunContext,
) -> Option<String> {
    let lines = collect_lines(specs, records, ctx);
    if lines.is_empty() {
        return None;
    }

    let mut body = String::from("📅 *Conference Deadline Alert*\n");
    match ctx.mode {
        DigestMode::Full => {
            for category in Category::ordered() {
                let in_category: Vec<&DigestLine> = lines
                    .iter()
                    .filter(|line| line.spec.category == category)
                    .collect();
                if in_category.is_empty() {
                    continue;
                }
                body.push_str(&format!("\n*{}*\n", category.display_name()));
                for line in in_category {
                    body.push_str(&render_line(line));
                    body.push('\n');
                }
            }
        }
        DigestMode::TargetsOnly => {
            body.push_str("\n*Focus conferences*\n");
            for line in &lines {
                body.push_str(&render_line(line));
                body.push('\n');
            }
        }
    }
    body.push_str(&format!(
        "\nUpdated: {} KST",
        ctx.now.format("%Y-%m-%d %H:%M")
    ));
    Some(body)
}
