use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use routesync_ports::{ClientResult, TokenProvider};
use serde::Deserialize;

use crate::error::{HttpError, read_body};

/// Credentials and endpoint of the UAA token service
#[derive(Debug, Clone)]
pub struct UaaConfig {
    pub uaa_url: String,
    pub client_name: String,
    pub client_secret: String,
}

impl UaaConfig {
    pub fn new(
        uaa_url: impl Into<String>,
        client_name: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        UaaConfig {
            uaa_url: uaa_url.into(),
            client_name: client_name.into(),
            client_secret: client_secret.into(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client-credentials token client for UAA
#[derive(Clone)]
pub struct UaaClient {
    client: Client,
    config: UaaConfig,
}

impl UaaClient {
    pub fn new(client: Client, config: UaaConfig) -> Self {
        UaaClient { client, config }
    }

    async fn request_token(&self) -> Result<String, HttpError> {
        let url = format!("{}/oauth/token", self.config.uaa_url.trim_end_matches('/'));
        debug!("Requesting token from {} as {}", url, self.config.client_name);

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.config.client_name, Some(&self.config.client_secret))
            .header("Accept", "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let body = read_body(resp).await?;
        let token: TokenResponse = serde_json::from_str(&body)?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl TokenProvider for UaaClient {
    async fn get_token(&self) -> ClientResult<String> {
        Ok(self.request_token().await?)
    }
}
