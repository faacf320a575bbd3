use crate::domain::controller::{Controller, ControllerError};
use crate::domain::device::{Device, DeviceType};
use crate::domain::events::Event;
use crate::domain::property::{BooleanProperty, NumberProperty, Property, PropertyError, PropertyType, PropertyValue, Unit};
use crate::keylight::{KELVIN_MAX, KELVIN_MIN};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::sync::mpsc::Sender;
use tracing::{info, instrument};

pub const DEVICE_ID: &str = "key-light-air";

/// Owns the device table and routes property writes to the controller.
///
/// A write commits the accepted value to the cache first (the requested
/// value may be clamped to the property's declared range), then sends the
/// full merged light state in one request. On transport failure the write
/// fails and no notification is emitted; the cache keeps what the base
/// behavior already applied.
#[derive(Debug)]
pub struct Adapter {
    devices: HashMap<String, Arc<RwLock<Device>>>,
    controller: Arc<dyn Controller>,
    events_tx: Sender<Event>,
}

impl Adapter {
    pub async fn new(controller: Arc<dyn Controller>, events_tx: Sender<Event>) -> Self {
        let mut adapter = Adapter {
            devices: HashMap::new(),
            controller,
            events_tx,
        };

        if !adapter.devices.contains_key(DEVICE_ID) {
            adapter.handle_device_added(key_light_air_device()).await;
        }

        adapter
    }

    pub fn device(&self, device_id: &str) -> Option<Arc<RwLock<Device>>> {
        self.devices.get(device_id).cloned()
    }

    pub async fn add_device(&mut self, device: Device) -> Result<(), AdapterError> {
        if self.devices.contains_key(&device.id) {
            return Err(AdapterError::DeviceAlreadyExists(device.id));
        }

        self.handle_device_added(device).await;
        Ok(())
    }

    pub async fn remove_device(&mut self, device_id: &str) -> Result<(), AdapterError> {
        if !self.devices.contains_key(device_id) {
            return Err(AdapterError::DeviceNotFound(device_id.to_string()));
        }

        self.handle_device_removed(device_id).await;
        Ok(())
    }

    /// Writes one property and pushes the resulting full state to the light.
    /// Returns the accepted value, which may differ from the requested one.
    #[instrument(skip(self))]
    pub async fn set_property(&self, device_id: &str, property_id: &str, value: PropertyValue) -> Result<PropertyValue, AdapterError> {
        let device = self
            .devices
            .get(device_id)
            .ok_or_else(|| AdapterError::DeviceNotFound(device_id.to_string()))?;

        let (accepted, state) = {
            let mut guard = device.write().await;

            let property = guard
                .properties
                .get_mut(property_id)
                .ok_or_else(|| AdapterError::UnknownProperty {
                    device_id: device_id.to_string(),
                    property_id: property_id.to_string(),
                })?;

            let previous_value = property.value_string();
            let accepted = match value {
                PropertyValue::Boolean(value) => {
                    let boolean_property = property.as_any_mut().downcast_mut::<BooleanProperty>().ok_or_else(|| {
                        AdapterError::PropertyTypeMismatch {
                            property_id: property_id.to_string(),
                            expected: "boolean",
                        }
                    })?;
                    PropertyValue::Boolean(boolean_property.request_change(value)?)
                }
                PropertyValue::Integer(value) => {
                    let number_property = property.as_any_mut().downcast_mut::<NumberProperty>().ok_or_else(|| {
                        AdapterError::PropertyTypeMismatch {
                            property_id: property_id.to_string(),
                            expected: "integer",
                        }
                    })?;
                    PropertyValue::Integer(number_property.request_change(value)?)
                }
            };

            info!(
                device_id,
                "🟢 Updated device '{}', set '{}' to '{}', was '{}'", guard.name, property_id, accepted, previous_value
            );

            let state = guard
                .light_state()
                .ok_or_else(|| AdapterError::IncompleteDevice(device_id.to_string()))?;
            (accepted, state)
        };

        self.controller.apply(&state).await?;

        self.events_tx
            .send(Event::PropertyChanged {
                device_id: device_id.to_string(),
                property_id: property_id.to_string(),
                value: accepted.clone(),
            })
            .await
            .unwrap_or_default();

        Ok(accepted)
    }

    // The key light is static, there is no discovery protocol to drive.
    pub fn start_pairing(&self, timeout: Duration) {
        info!("Pairing started with a timeout of {:?}, nothing to discover", timeout);
    }

    pub fn cancel_pairing(&self) {
        info!("Pairing cancelled");
    }

    pub fn unpair(&self, device_id: &str) {
        info!(device_id, "Unpairing requested for device '{}', the device is static", device_id);
    }

    pub fn cancel_unpair(&self, device_id: &str) {
        info!(device_id, "Unpairing cancelled for device '{}'", device_id);
    }

    async fn handle_device_added(&mut self, device: Device) {
        let device_id = device.id.clone();
        info!(device_id, "🟢 Added device '{}'", device.name);
        self.devices.insert(device_id.clone(), Arc::new(RwLock::new(device)));

        self.events_tx.send(Event::DeviceAdded { device_id }).await.unwrap_or_default();
    }

    async fn handle_device_removed(&mut self, device_id: &str) {
        self.devices.remove(device_id);
        info!(device_id, "🔵 Removed device '{}'", device_id);

        self.events_tx
            .send(Event::DeviceRemoved {
                device_id: device_id.to_string(),
            })
            .await
            .unwrap_or_default();
    }
}

pub fn key_light_air_device() -> Device {
    let mut properties: HashMap<String, Box<dyn Property>> = HashMap::new();
    properties.insert(
        "on".to_string(),
        Box::new(BooleanProperty::new("on".to_string(), PropertyType::On, false, false)),
    );
    properties.insert(
        "brightness".to_string(),
        Box::new(
            NumberProperty::builder("brightness".to_string(), PropertyType::Brightness, false)
                .unit(Unit::Percentage)
                .value(50, Some(3), Some(100))
                .build(),
        ),
    );
    properties.insert(
        "temperature".to_string(),
        Box::new(
            NumberProperty::builder("temperature".to_string(), PropertyType::ColorTemperature, false)
                .unit(Unit::Kelvin)
                .value(4950, Some(KELVIN_MIN), Some(KELVIN_MAX))
                .build(),
        ),
    );

    Device {
        id: DEVICE_ID.to_string(),
        r#type: DeviceType::Light,
        name: "Key Light Air".to_string(),
        description: "Elgato Key Light Air".to_string(),
        properties,
    }
}

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("device '{0}' already exists")]
    DeviceAlreadyExists(String),
    #[error("device '{0}' not found")]
    DeviceNotFound(String),
    #[error("device '{device_id}' has no property '{property_id}'")]
    UnknownProperty { device_id: String, property_id: String },
    #[error("property '{property_id}' expects a {expected} value")]
    PropertyTypeMismatch { property_id: String, expected: &'static str },
    #[error("device '{0}' does not expose a full light state")]
    IncompleteDevice(String),
    #[error(transparent)]
    Property(#[from] PropertyError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
}
