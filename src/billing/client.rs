//! Typed client for the Customer Directory.

use std::time::Duration;

use tracing::{debug, instrument};

use crate::config::Config;
use crate::customer::{CustomerId, CustomerRecord};
use crate::error::BillingError;

/// HTTP client for the Customer Directory's customers endpoint.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    /// HTTP client for directory requests.
    http: reqwest::Client,
    /// Base URL of the customers endpoint.
    base_url: String,
}

impl DirectoryClient {
    /// Create a new directory client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(Duration::from_millis(500))
            .tcp_nodelay(true)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.customer_service_url.clone(),
        }
    }

    /// Create a client pointed at an explicit base URL (used in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = Config {
            customer_service_url: base_url.into(),
            ..Config::default()
        };
        Self::new(&config)
    }

    /// Get the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a customer record by id.
    ///
    /// Any non-success directory response is treated as the customer being
    /// absent; a success response must decode into a [`CustomerRecord`] or
    /// the lookup fails closed.
    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<CustomerRecord, BillingError> {
        let url = format!("{}/{}", self.base_url, id);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, id, "directory lookup returned non-success");
            return Err(BillingError::CustomerNotFound { id });
        }

        let record: CustomerRecord = response
            .json()
            .await
            .map_err(|e| BillingError::Decode(e.to_string()))?;

        debug!(id, name = %record.name, status = %record.status, "directory lookup succeeded");

        Ok(record)
    }
}
