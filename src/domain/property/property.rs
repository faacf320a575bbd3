use std::any::Any;
use std::fmt::{Debug, Display};
use thiserror::Error;

pub trait Property: Debug + Send + Sync {
    fn name(&self) -> &str;
    fn property_type(&self) -> PropertyType;
    fn readonly(&self) -> bool;
    fn value_string(&self) -> String;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn eq_dyn(&self, other: &dyn Property) -> bool;
}

impl PartialEq for dyn Property {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}

// Semantic property type
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum PropertyType {
    On,
    Brightness,
    ColorTemperature,
}

/// A value as written by, or reported to, the host.
#[derive(PartialEq, Debug, Clone)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(u64),
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Boolean(value) => write!(f, "{}", value),
            PropertyValue::Integer(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Error, PartialEq, Debug)]
pub enum PropertyError {
    #[error("property is readonly")]
    ReadOnly,
    #[error("value is smaller than the property minimum")]
    ValueTooSmall,
    #[error("value is larger than the property maximum")]
    ValueTooLarge,
}
