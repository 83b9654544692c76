use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::form::ContactMessage;
use crate::config::{ContactConfig, EndpointKind};
use crate::{Error, Result};

/// Destination of contact form submissions
#[async_trait::async_trait]
pub trait ContactEndpoint: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Deliver one message
    async fn send(&self, message: &ContactMessage) -> Result<()>;
}

/// POSTs the message as JSON to a configured URL
pub struct HttpEndpoint {
    client: Client,
    url: Url,
}

impl HttpEndpoint {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| Error::Config(format!("Invalid contact endpoint URL '{}': {}", url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(Error::Http)?;

        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl ContactEndpoint for HttpEndpoint {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, message: &ContactMessage) -> Result<()> {
        tracing::debug!("POST {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Submission(format!(
                "Endpoint responded with {}",
                status
            )));
        }

        Ok(())
    }
}

/// Waits a fixed delay and reports success, or failure when built with
/// [`SimulatedEndpoint::failing`]
pub struct SimulatedEndpoint {
    delay: Duration,
    fail: bool,
    sent: AtomicUsize,
}

impl SimulatedEndpoint {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail: false,
            sent: AtomicUsize::new(0),
        }
    }

    pub fn failing(delay: Duration) -> Self {
        Self {
            fail: true,
            ..Self::new(delay)
        }
    }

    /// Number of messages received so far
    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl ContactEndpoint for SimulatedEndpoint {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn send(&self, message: &ContactMessage) -> Result<()> {
        self.sent.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(Error::Submission("Simulated endpoint failure".to_string()));
        }

        tracing::info!(
            "Simulated delivery of '{}' from {}",
            message.subject,
            message.email
        );
        Ok(())
    }
}

/// Build the endpoint selected in the configuration
pub fn create_endpoint(config: &ContactConfig) -> Result<Arc<dyn ContactEndpoint>> {
    match config.endpoint {
        EndpointKind::Simulated => Ok(Arc::new(SimulatedEndpoint::new(Duration::from_millis(
            config.simulated_delay_ms,
        )))),
        EndpointKind::Http => {
            let url = config.url.as_deref().ok_or_else(|| {
                Error::Config("contact.url is required for the http endpoint".to_string())
            })?;
            Ok(Arc::new(HttpEndpoint::new(url, config.timeout_secs)?))
        }
    }
}
