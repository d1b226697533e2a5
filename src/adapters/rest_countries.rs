use crate::domain::ports::{ConfigProvider, CountrySource};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the restcountries.com `/all` endpoint.
pub struct RestCountriesClient {
    client: Client,
    endpoint: String,
}

impl RestCountriesClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("country-service/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.source_url(),
            Duration::from_secs(config.request_timeout_secs()),
        )
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Option<Vec<serde_json::Value>>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ServiceError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        // 先讀成文字，讓格式錯誤回報為序列化錯誤
        let body = response.text().await?;
        let countries: Option<Vec<serde_json::Value>> = serde_json::from_str(&body)?;

        Ok(countries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> RestCountriesClient {
        RestCountriesClient::new(server.url("/v3.1/all"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_returns_raw_elements() {
        let server = MockServer::start_async().await;
        let mock_data = serde_json::json!([
            {"name": {"common": "Egypt"}, "capital": ["Cairo"], "population": 97000000},
            {"name": {"common": "Nigeria"}, "capital": ["Abuja"], "population": 70000000}
        ]);

        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v3.1/all");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(mock_data);
            })
            .await;

        let result = client_for(&server).fetch_all().await.unwrap().unwrap();

        api_mock.assert_async().await;
        assert_eq!(result.len(), 2);
        assert_eq!(result[1]["name"]["common"], "Nigeria");
    }

    #[tokio::test]
    async fn test_fetch_all_null_body_is_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v3.1/all");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body("null");
            })
            .await;

        let result = client_for(&server).fetch_all().await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fetch_all_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v3.1/all");
                then.status(500);
            })
            .await;

        let result = client_for(&server).fetch_all().await;
        assert!(matches!(
            result,
            Err(ServiceError::UpstreamStatus { status: 500 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_malformed_payload_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v3.1/all");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"status": 400, "message": "Bad Request"}));
            })
            .await;

        let result = client_for(&server).fetch_all().await;
        assert!(matches!(result, Err(ServiceError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_unreachable_host_is_error() {
        let client =
            RestCountriesClient::new("http://127.0.0.1:1/all", Duration::from_secs(2)).unwrap();

        let result = client.fetch_all().await;
        assert!(matches!(result, Err(ServiceError::HttpError(_))));
    }
}
