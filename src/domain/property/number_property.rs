use crate::domain::property::{Property, PropertyError, PropertyType};
use std::any::Any;

#[derive(PartialEq, Debug)]
pub struct NumberProperty {
    name: String,
    property_type: PropertyType,
    readonly: bool,
    unit: Unit,
    value: u64,
    minimum: Option<u64>,
    maximum: Option<u64>,
}

impl NumberProperty {
    pub fn builder(name: String, property_type: PropertyType, readonly: bool) -> NumberPropertyBuilder {
        NumberPropertyBuilder::new(name, property_type, readonly)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn validate_value(&self, value: u64) -> ValidatedValue {
        if self.readonly {
            return ValidatedValue::Invalid(PropertyError::ReadOnly);
        }

        if let Some(minimum) = self.minimum {
            if value < minimum {
                return ValidatedValue::Clamped(minimum, PropertyError::ValueTooSmall);
            }
        }

        if let Some(maximum) = self.maximum {
            if value > maximum {
                return ValidatedValue::Clamped(maximum, PropertyError::ValueTooLarge);
            }
        }

        ValidatedValue::Valid(value)
    }

    // This function does not validate the value as the value comes from an observer and the system
    // must be in sync with the observed system.
    pub fn set_value(&mut self, value: u64) -> Result<(), PropertyError> {
        if self.readonly {
            return Err(PropertyError::ReadOnly);
        }

        self.value = value;
        Ok(())
    }

    /// Commits a write requested by the host and returns the accepted value,
    /// which is clamped to the declared range and may differ from the
    /// requested value.
    pub fn request_change(&mut self, value: u64) -> Result<u64, PropertyError> {
        let accepted = match self.validate_value(value) {
            ValidatedValue::Valid(value) => value,
            ValidatedValue::Clamped(value, _) => value,
            ValidatedValue::Invalid(e) => return Err(e),
        };

        self.value = accepted;
        Ok(accepted)
    }
}

#[derive(PartialEq, Debug)]
pub enum ValidatedValue {
    Valid(u64),
    Clamped(u64, PropertyError),
    Invalid(PropertyError),
}

impl Property for NumberProperty {
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
        other.as_any().downcast_ref::<NumberProperty>().map_or(false, |o| self == o)
    }
}

pub struct NumberPropertyBuilder {
    name: String,
    property_type: PropertyType,
    readonly: bool,
    unit: Unit,
    value: u64,
    minimum: Option<u64>,
    maximum: Option<u64>,
}

impl NumberPropertyBuilder {
    pub fn new(name: String, property_type: PropertyType, readonly: bool) -> Self {
        NumberPropertyBuilder {
            name,
            property_type,
            readonly,
            unit: Unit::Percentage,
            value: 0,
            minimum: None,
            maximum: None,
        }
    }

    pub fn unit(mut self, value: Unit) -> Self {
        self.unit = value;
        self
    }

    pub fn value(mut self, value: u64, minimum: Option<u64>, maximum: Option<u64>) -> Self {
        self.value = value;
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    pub fn build(self) -> NumberProperty {
        NumberProperty {
            name: self.name,
            property_type: self.property_type,
            readonly: self.readonly,
            unit: self.unit,
            value: self.value,
            minimum: self.minimum,
            maximum: self.maximum,
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum Unit {
    Percentage,
    Kelvin,
}

impl Unit {
    pub fn symbol(&self) -> &str {
        match self {
            Unit::Percentage => "%",
            Unit::Kelvin => "K",
        }
    }
}
