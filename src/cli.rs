use chrono::NaiveDate;
use clap::Parser;

/// Daily conference deadline digest for Slack. Normally invoked with no
/// arguments by the scheduler; the flags exist for on-demand runs.
#[derive(Parser)]
pub struct Cli {
    /// Run as if today were this KST date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the digest to stdout instead of posting to Slack.
    #[arg(long)]
    pub dry_run: bool,
}
