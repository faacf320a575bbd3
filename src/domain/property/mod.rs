mod boolean_property;
mod number_property;
mod property;

pub use boolean_property::BooleanProperty;
pub use number_property::{NumberProperty, Unit, ValidatedValue};
pub use property::{Property, PropertyError, PropertyType, PropertyValue};
