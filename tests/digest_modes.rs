use std::collections::HashMap;

use chrono::TimeZone;
use chrono_tz::Asia::Seoul;
use deadlineBot::clients::deadline_source::DeadlineSource;
use deadlineBot::clients::slack::MessageSender;
use deadlineBot::models::conference::{Category, ConferenceSpec};
use deadlineBot::models::run_context::{DigestMode, RunContext};
use deadlineBot::service::alert_flow::run_alert;
use tokio::sync::Mutex as TokioMutex;

struct FakeSource {
    documents: HashMap<String, String>,
}

#[async_trait::async_trait]
impl DeadlineSource for FakeSource {
    async fn fetch_document(
        &self,
        conference_id: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.documents
            .get(conference_id)
            .cloned()
            .ok_or_else(|| format!("unknown conference {}", conference_id).into())
    }
}

struct RecordingSender {
    sent: TokioMutex<Vec<String>>,
}

#[async_trait::async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        self.sent.lock().await.push(content.to_string());
        Ok(())
    }
}

fn roster() -> Vec<ConferenceSpec> {
    vec![
        ConferenceSpec {
            id: "cvpr".to_string(),
            name: "CVPR".to_string(),
            category: Category::AiVision,
            is_target: true,
        },
        ConferenceSpec {
            id: "ccs".to_string(),
            name: "CCS".to_string(),
            category: Category::Security,
            is_target: false,
        },
    ]
}

fn documents() -> HashMap<String, String> {
    let mut documents = HashMap::new();
    documents.insert(
        "cvpr".to_string(),
        "- year: 2026\n  timezone: UTC-12\n  deadlines:\n    - label: abstract\n      date: \"2026-11-07 23:59:59\"\n    - label: paper\n      date: \"2026-11-14 23:59:59\"\n"
            .to_string(),
    );
    documents.insert(
        "ccs".to_string(),
        "- year: 2026\n  timezone: AoE\n  deadlines:\n    - label: paper\n      date: \"2026-04-20\"\n"
            .to_string(),
    );
    documents
}

#[tokio::test]
async fn odd_day_renders_every_category() {
    let ctx = RunContext::from_now(Seoul.with_ymd_and_hms(2026, 3, 11, 9, 0, 0).unwrap());
    assert_eq!(ctx.mode, DigestMode::Full);

    let source = FakeSource {
        documents: documents(),
    };
    let sender = RecordingSender {
        sent: TokioMutex::new(Vec::new()),
    };

    run_alert(&roster(), &source, &sender, &ctx)
        .await
        .expect("full digest run should succeed");

    let sent = sender.sent.lock().await;
    let digest = &sent[0];
    assert!(digest.contains("*AI/Vision*"));
    assert!(digest.contains("*Security*"));
    assert!(digest.contains("CVPR"));
    assert!(digest.contains("CCS"));
    // Nearest sub-deadline for CVPR is the abstract, not the paper.
    assert!(digest.contains("abstract"));
    assert!(digest.contains("KST"));
}

#[tokio::test]
async fn even_day_renders_targets_only() {
    let ctx = RunContext::from_now(Seoul.with_ymd_and_hms(2026, 3, 12, 9, 0, 0).unwrap());
    assert_eq!(ctx.mode, DigestMode::TargetsOnly);

    let source = FakeSource {
        documents: documents(),
    };
    let sender = RecordingSender {
        sent: TokioMutex::new(Vec::new()),
    };

    run_alert(&roster(), &source, &sender, &ctx)
        .await
        .expect("focused digest run should succeed");

    let sent = sender.sent.lock().await;
    let digest = &sent[0];
    assert!(digest.contains("CVPR"));
    assert!(!digest.contains("CCS"));
    assert!(!digest.contains("*Security*"));
}
