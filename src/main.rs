#![allow(non_snake_case)]

mod cli;
mod clients;
mod config;
mod models;
mod service;

use clap::Parser;

use crate::cli::Cli;
use crate::clients::deadline_source::{HttpDeadlineSource, DEFAULT_SOURCE_URL};
use crate::clients::slack::{MessageSender, SlackSender, StdoutSender};
use crate::config::AppConfig;
use crate::models::conference::tracked_conferences;
use crate::models::run_context::RunContext;
use crate::service::alert_flow;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    let config = AppConfig::load();

    let sender: Box<dyn MessageSender> = if args.dry_run {
        Box::new(StdoutSender)
    } else {
        let webhook_url = config
            .prop("SLACK_WEBHOOK_URL")
            .expect("SLACK_WEBHOOK_URL environment variable not set");
        Box::new(SlackSender::new(webhook_url))
    };

    let source_url = config
        .prop("DEADLINE_SOURCE_URL")
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
    let source = HttpDeadlineSource::new(source_url);

    let specs = tracked_conferences();
    let ctx = RunContext::for_run(args.date);

    println!("Fetching deadlines for {} conferences...", specs.len());
    match alert_flow::run_alert(&specs, &source, sender.as_ref(), &ctx).await {
        Ok(summary) => {
            println!(
                "Digest delivered ({} documents fetched, {} deadline records).",
                summary.fetched, summary.records
            );
        }
        Err(e) => {
            eprintln!("Run failed: {}", e);
            std::process::exit(1);
        }
    }
}
