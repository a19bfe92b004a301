use async_trait::async_trait;
use flow_logging::flow_warn;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::{
    AttemptId, AttemptProgress, EngineEvent, FailureKind, ProvisionError, ProvisionOutcome,
    Stage, GENERIC_FAILURE_MESSAGE,
};

/// Path of the provisioning endpoint on the service host.
pub const PROVISION_PATH: &str = "/api/create-repo";

/// Connection details for the provisioning service.
#[derive(Debug, Clone)]
pub struct ProvisionSettings {
    endpoint: Url,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid service url: {0}")]
    InvalidServiceUrl(#[from] url::ParseError),
}

impl ProvisionSettings {
    /// Parses the service base URL and resolves the provisioning endpoint.
    pub fn new(service_url: &str) -> Result<Self, SettingsError> {
        let base = Url::parse(service_url)?;
        let endpoint = base.join(PROVISION_PATH)?;
        Ok(Self { endpoint })
    }

    /// Fully resolved endpoint the request is POSTed to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait]
pub trait Provisioner: Send + Sync {
    async fn provision(
        &self,
        attempt: AttemptId,
        sink: &dyn ProgressSink,
    ) -> Result<ProvisionOutcome, ProvisionError>;
}

/// Wire shape of the provisioning response. Success carries an optional
/// `url`; rejections carry an optional `error` narration. Unknown fields
/// are ignored.
#[derive(Debug, Deserialize)]
struct ResponseBody {
    url: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpProvisioner {
    settings: ProvisionSettings,
}

impl HttpProvisioner {
    pub fn new(settings: ProvisionSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ProvisionError> {
        // No explicit timeout: the transport's defaults apply.
        reqwest::Client::builder().build().map_err(|err| {
            flow_warn!("failed to build http client: {err}");
            ProvisionError::new(FailureKind::Network, GENERIC_FAILURE_MESSAGE)
        })
    }
}

#[async_trait]
impl Provisioner for HttpProvisioner {
    async fn provision(
        &self,
        attempt: AttemptId,
        sink: &dyn ProgressSink,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        let client = self.build_client()?;

        // The stage checkpoints around this request are scripted narration;
        // the service reports nothing until the response lands.
        sink.emit(EngineEvent::Progress(AttemptProgress {
            attempt,
            stage: Stage::CreatingRepository,
        }));

        // No request body: the service works from its own template
        // configuration.
        let response = client
            .post(self.settings.endpoint().clone())
            .send()
            .await
            .map_err(|err| map_transport_error(attempt, err))?;

        sink.emit(EngineEvent::Progress(AttemptProgress {
            attempt,
            stage: Stage::AwaitingDeployment,
        }));

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| map_transport_error(attempt, err))?;
        let parsed: Option<ResponseBody> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            // Any non-success status is a failed attempt regardless of body
            // content; the body only contributes the narration.
            let message = parsed
                .and_then(|b| b.error)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            flow_warn!("attempt {attempt}: service rejected request with {status}");
            return Err(ProvisionError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let Some(parsed) = parsed else {
            flow_warn!(
                "attempt {attempt}: unparsable success body ({} bytes)",
                body.len()
            );
            return Err(ProvisionError::new(
                FailureKind::MalformedBody,
                GENERIC_FAILURE_MESSAGE,
            ));
        };

        Ok(ProvisionOutcome {
            app_url: parsed.url,
        })
    }
}

fn map_transport_error(attempt: AttemptId, err: reqwest::Error) -> ProvisionError {
    flow_warn!("attempt {attempt}: transport error: {err}");
    ProvisionError::new(FailureKind::Network, GENERIC_FAILURE_MESSAGE)
}
