// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;
use crate::models::Observation;

#[async_trait]
pub trait RatesSource {
    async fn fetch_observations(&self) -> Result<Vec<Observation>, FetchError>;
}

/// Client for the exchange-rate endpoint. The endpoint takes no parameters
/// and answers with a JSON array of observations.
#[derive(Clone)]
pub struct RatesClient {
    client: Client,
    url: String,
}

impl RatesClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RatesSource for RatesClient {
    async fn fetch_observations(&self) -> Result<Vec<Observation>, FetchError> {
        debug!(url = %self.url, "requesting observations");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: text });
        }

        let observations: Vec<Observation> = serde_json::from_str(&text)?;
        debug!(count = observations.len(), "observations received");
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const BODY: &str = r#"[
        {"indicator": "Курс доллара", "month": "Jan", "value": 90},
        {"indicator": "Курс евро", "month": "Jan", "value": 100.5}
    ]"#;

    #[tokio::test]
    async fn test_fetch_observations() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/currencyData"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RatesClient::new(format!("{}/api/v1/currencyData", mock_server.uri()));
        let observations = client.fetch_observations().await.unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0], Observation::new("Курс доллара", "Jan", 90.0));
        assert_eq!(observations[1].value, 100.5);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mock_server = MockServer::start().await;
        Mock::given(path("/rates"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = RatesClient::new(format!("{}/rates", mock_server.uri()));
        match client.fetch_observations().await {
            Err(FetchError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let mock_server = MockServer::start().await;
        Mock::given(path("/rates"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not": "an array"}"#))
            .mount(&mock_server)
            .await;

        let client = RatesClient::new(format!("{}/rates", mock_server.uri()));
        let result = client.fetch_observations().await;
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = RatesClient::new("http://127.0.0.1:1/rates");
        let result = client.fetch_observations().await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
