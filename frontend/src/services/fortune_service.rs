use futures::future::{FutureExt, LocalBoxFuture};
use log::{error, info};
use reqwest::Client;
use shared::fortune::{self, GenerateContentRequest};
use shared::{FortuneError, FortuneTeller};

use crate::config;

/// Asks the generative text API for a congratulatory message.
#[derive(Debug, Clone)]
pub struct GeminiTeller {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl GeminiTeller {
    pub fn new(url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            api_key,
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::fortune_url(), config::fortune_api_key())
    }
}

impl FortuneTeller for GeminiTeller {
    fn fortune(&self, prize_label: &str) -> LocalBoxFuture<'static, Result<String, FortuneError>> {
        let client = self.client.clone();
        let url = self.url.clone();
        let api_key = self.api_key.clone();
        let prize_label = prize_label.to_string();

        async move { request_fortune(&client, &url, api_key, &prize_label).await }.boxed_local()
    }
}

async fn request_fortune(
    client: &Client,
    url: &str,
    api_key: Option<String>,
    prize_label: &str,
) -> Result<String, FortuneError> {
    let api_key = api_key.ok_or(FortuneError::MissingApiKey)?;

    let response = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .json(&GenerateContentRequest::for_prize(prize_label))
        .send()
        .await
        .map_err(|e| {
            error!("Failed to send request to fortune API: {}", e);
            FortuneError::Network(e.to_string())
        })?;

    let status = response.status();
    if status.as_u16() == 429 {
        error!("Rate limit exceeded: Too many requests");
        return Err(FortuneError::RateLimited);
    } else if !status.is_success() {
        error!("Fortune API returned error status: {}", status);
        return Err(FortuneError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read fortune response: {}", e);
        FortuneError::Network(e.to_string())
    })?;

    let text = fortune::decode_response(&body)?;
    info!("Fortune received for {}", prize_label);
    Ok(text)
}
