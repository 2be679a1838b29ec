use async_trait::async_trait;

#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, content: &str) -> Result<(), String>;
}

/// Posts the digest to a Slack incoming webhook. One attempt per run; the daily
/// schedule is the retry mechanism.
pub struct SlackSender {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackSender {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessageSender for SlackSender {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        let payload = serde_json::json!({ "text": content });
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("Failed to reach webhook: {}", e))?;
        if !response.status().is_success() {
            return Err(format!("Webhook returned {}", response.status()));
        }
        Ok(())
    }
}

/// Prints the digest instead of posting it. Backs the --dry-run flag.
pub struct StdoutSender;

#[async_trait]
impl MessageSender for StdoutSender {
    async fn send_message(&self, content: &str) -> Result<(), String> {
        println!("{}", content);
        Ok(())
    }
}
