use crate::domain::property::{Property, PropertyError, PropertyType};
use std::any::Any;

#[derive(PartialEq, Debug)]
pub struct BooleanProperty {
    name: String,
    property_type: PropertyType,
    readonly: bool,
    value: bool,
}

impl BooleanProperty {
    pub fn new(name: String, property_type: PropertyType, readonly: bool, value: bool) -> Self {
        BooleanProperty {
            name,
            property_type,
            readonly,
            value,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn set_value(&mut self, value: bool) -> Result<(), PropertyError> {
        if self.readonly {
            return Err(PropertyError::ReadOnly);
        }

        self.value = value;
        Ok(())
    }

    /// Commits a write requested by the host and returns the accepted value.
    pub fn request_change(&mut self, value: bool) -> Result<bool, PropertyError> {
        self.set_value(value)?;
        Ok(value)
    }
}

impl Property for BooleanProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn property_type(&self) -> PropertyType {
        self.property_type
    }

    fn readonly(&self) -> bool {
        self.readonly
    }

    fn value_string(&self) -> String {
        self.value.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Property) -> bool {
        other.as_any().downcast_ref::<BooleanProperty>().map_or(false, |o| self == o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_updates_the_value_if_property_is_editable() {
        let mut property = BooleanProperty {
            name: "on".to_string(),
            property_type: PropertyType::On,
            readonly: false,
            value: false,
        };

        let result = property.set_value(true);

        assert!(result.is_ok());
        assert_eq!(property.value, true);
    }

    #[test]
    fn set_value_returns_an_error_if_property_is_readonly() {
        let mut property = BooleanProperty {
            name: "on".to_string(),
            property_type: PropertyType::On,
            readonly: true,
            value: false,
        };

        let result = property.set_value(true);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), PropertyError::ReadOnly);
        assert_eq!(property.value, false);
    }

    #[test]
    fn request_change_returns_the_accepted_value() {
        let mut property = BooleanProperty::new("on".to_string(), PropertyType::On, false, false);

        let accepted = property.request_change(true);

        assert_eq!(accepted, Ok(true));
        assert_eq!(property.value(), true);
    }
}
