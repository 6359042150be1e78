use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::Result;

/// Delivers a serialized form body and returns the raw response text
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn post(&self, endpoint: &str, body: String) -> Result<String>;
}

/// Transport backed by `reqwest`
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn post(&self, endpoint: &str, body: String) -> Result<String> {
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)
            .send()
            .await?;
        Ok(response.text().await?)
    }
}
