use async_trait::async_trait;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/ccfddl/ccf-deadlines/main/conference";

#[async_trait]
pub trait DeadlineSource: Send + Sync {
    async fn fetch_document(
        &self,
        conference_id: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

/// Fetches `{base_url}/{id}.yml` from the upstream deadline repository.
pub struct HttpDeadlineSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDeadlineSource {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DeadlineSource for HttpDeadlineSource {
    async fn fetch_document(
        &self,
        conference_id: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/{}.yml", self.base_url, conference_id);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("GET {} returned {}", url, response.status()).into());
        }
        Ok(response.text().await?)
    }
}
