use crate::app_config::AppConfig;
use crate::domain::LightState;
use crate::domain::controller::{Controller, ControllerError};
use crate::keylight::lights_request::LightsRequest;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{instrument, warn};

#[derive(Debug)]
pub struct KeyLightController {
    client: Client,
    config: Arc<AppConfig>,
}

pub const CONTROLLER_ID: &str = "key-light";

const LIGHTS_PATH: &str = "/elgato/lights";

#[async_trait]
impl Controller for KeyLightController {
    fn id(&self) -> &'static str {
        CONTROLLER_ID
    }

    #[instrument(skip_all)]
    async fn apply(&self, state: &LightState) -> Result<(), ControllerError> {
        let request = LightsRequest::from(state);
        let response = self
            .client
            .put(format!("{}{}", self.config.light().url(), LIGHTS_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|e| ControllerError::Transport(Box::new(e)))?;

        // Any response settles the write; the body is not parsed.
        if !response.status().is_success() {
            warn!(status_code = %response.status(), "⚠️ The light rejected the update");
        }

        Ok(())
    }
}

impl KeyLightController {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        KeyLightController { client, config }
    }
}
