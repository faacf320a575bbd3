pub mod controller;
pub mod device;
pub mod events;
mod light_state;
pub mod property;

pub use light_state::LightState;
