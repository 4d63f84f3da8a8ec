//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Listen port for the Customer Directory.
    #[serde(default = "default_directory_port")]
    pub directory_port: u16,

    /// Listen port for the Billing Service.
    #[serde(default = "default_billing_port")]
    pub billing_port: u16,

    // === Billing Service ===
    /// Base URL of the Customer Directory's customers endpoint.
    #[serde(default = "default_customer_service_url")]
    pub customer_service_url: String,

    /// Outbound HTTP timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_directory_port() -> u16 {
    5000
}

fn default_billing_port() -> u16 {
    5001
}

fn default_customer_service_url() -> String {
    "http://localhost:5000/customers".to_string()
}

fn default_http_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.directory_port == 0 {
            return Err("DIRECTORY_PORT must be non-zero".to_string());
        }

        if self.billing_port == 0 {
            return Err("BILLING_PORT must be non-zero".to_string());
        }

        let url = Url::parse(&self.customer_service_url)
            .map_err(|e| format!("CUSTOMER_SERVICE_URL is not a valid URL: {}", e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("CUSTOMER_SERVICE_URL must use http or https".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be non-zero".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_port: default_directory_port(),
            billing_port: default_billing_port(),
            customer_service_url: default_customer_service_url(),
            http_timeout_ms: default_http_timeout_ms(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
