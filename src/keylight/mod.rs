mod client;
mod controller;
mod lights_request;
mod temperature;

pub use client::{KeyLightClientError, new_client};
pub use controller::{CONTROLLER_ID, KeyLightController};
pub use temperature::{KELVIN_MAX, KELVIN_MIN, kelvin_to_device_scale};
