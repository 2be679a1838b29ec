use chrono::Datelike;

use crate::clients::deadline_source::DeadlineSource;
use crate::clients::slack::MessageSender;
use crate::models::conference::ConferenceSpec;
use crate::models::deadline::DeadlineRecord;
use crate::models::run_context::RunContext;
use crate::service::digest;
use crate::service::normalizer;

#[derive(Debug)]
pub enum AlertError {
    /// Nothing worth delivering: no document fetched, nothing parsed, or every
    /// deadline already past. Distinct from a webhook failure.
    NoDeliverableContent(String),
    Delivery(String),
}

impl std::fmt::Display for AlertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertError::NoDeliverableContent(reason) => {
                write!(f, "no deliverable content: {}", reason)
            }
            AlertError::Delivery(reason) => write!(f, "delivery failed: {}", reason),
        }
    }
}

impl std::error::Error for AlertError {}

#[derive(Debug)]
pub struct AlertSummary {
    pub fetched: usize,
    pub records: usize,
}

/// One full run: fetch every tracked conference, normalize, render the digest
/// for this run's mode, send it. Per-conference failures are logged and
/// dropped; only an empty run or a failed send is fatal.
pub async fn run_alert<D: DeadlineSource + ?Sized, S: MessageSender + ?Sized>(
    specs: &[ConferenceSpec],
    source: &D,
    sender: &S,
    ctx: &RunContext,
) -> Result<AlertSummary, AlertError> {
    let current_year = ctx.now.year();
    let mut fetched = 0usize;
    let mut records: Vec<DeadlineRecord> = Vec::new();

    for spec in specs {
        match source.fetch_document(&spec.id).await {
            Ok(raw) => {
                fetched += 1;
                records.extend(normalizer::normalize_document(&spec.id, &raw, current_year));
            }
            Err(e) => {
                eprintln!("Failed to fetch deadlines for {}: {}", spec.name, e);
            }
        }
    }

    if fetched == 0 {
        return Err(AlertError::NoDeliverableContent(
            "every fetch failed".to_string(),
        ));
    }
    if records.is_empty() {
        return Err(AlertError::NoDeliverableContent(
            "no usable deadline entries in fetched documents".to_string(),
        ));
    }

    let digest = digest::build_digest(specs, &records, ctx).ok_or_else(|| {
        AlertError::NoDeliverableContent("no upcoming deadlines to report".to_string())
    })?;

    sender
        .send_message(&digest)
        .await
        .map_err(AlertError::Delivery)?;

    Ok(AlertSummary {
        fetched,
        records: records.len(),
    })
}
