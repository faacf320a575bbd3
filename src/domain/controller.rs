use crate::domain::LightState;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::Debug;
use thiserror::Error;

/// Translates a desired light state into the physical device protocol.
#[async_trait]
pub trait Controller: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    async fn apply(&self, state: &LightState) -> Result<(), ControllerError>;
}

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("could not reach the light: {0}")]
    Transport(#[source] Box<dyn Error + Send + Sync>),
}
