use crate::domain::LightState;
use crate::domain::property::{BooleanProperty, NumberProperty, Property, PropertyType};
use std::collections::HashMap;

#[derive(PartialEq, Debug)]
pub struct Device {
    pub id: String,
    pub r#type: DeviceType,
    pub name: String,
    pub description: String,
    pub properties: HashMap<String, Box<dyn Property>>,
}

#[derive(PartialEq, Debug)]
pub enum DeviceType {
    Light,
}

impl Device {
    pub fn get_property_of_type<T: Property + 'static>(&self, property_type: PropertyType) -> Option<&T> {
        self.properties
            .values()
            .find(|property| property.property_type() == property_type)
            .and_then(|property| property.as_any().downcast_ref::<T>())
    }

    /// Snapshot of the cached light state, or `None` if the device does not
    /// expose all three light properties.
    pub fn light_state(&self) -> Option<LightState> {
        let on = self.get_property_of_type::<BooleanProperty>(PropertyType::On)?;
        let brightness = self.get_property_of_type::<NumberProperty>(PropertyType::Brightness)?;
        let temperature = self.get_property_of_type::<NumberProperty>(PropertyType::ColorTemperature)?;

        Some(LightState {
            on: on.value(),
            brightness: brightness.value(),
            temperature: temperature.value(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::Unit;
    use pretty_assertions::assert_eq;

    fn device(properties: HashMap<String, Box<dyn Property>>) -> Device {
        Device {
            id: "desk-lamp".to_string(),
            r#type: DeviceType::Light,
            name: "Desk lamp".to_string(),
            description: "A lamp on a desk".to_string(),
            properties,
        }
    }

    fn light_properties() -> HashMap<String, Box<dyn Property>> {
        let mut properties: HashMap<String, Box<dyn Property>> = HashMap::new();
        properties.insert(
            "on".to_string(),
            Box::new(BooleanProperty::new("on".to_string(), PropertyType::On, false, true)),
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
                    .value(4950, Some(2900), Some(7000))
                    .build(),
            ),
        );
        properties
    }

    #[test]
    fn get_property_of_type_returns_the_typed_property() {
        let device = device(light_properties());

        let property = device.get_property_of_type::<NumberProperty>(PropertyType::Brightness);

        assert!(property.is_some());
        assert_eq!(property.unwrap().value(), 50);
    }

    #[test]
    fn get_property_of_type_returns_none_for_a_mismatched_type() {
        let device = device(light_properties());

        let property = device.get_property_of_type::<NumberProperty>(PropertyType::On);

        assert!(property.is_none());
    }

    #[test]
    fn light_state_reads_all_three_properties() {
        let device = device(light_properties());

        assert_eq!(
            device.light_state(),
            Some(LightState {
                on: true,
                brightness: 50,
                temperature: 4950,
            })
        );
    }

    #[test]
    fn light_state_is_none_if_a_property_is_missing() {
        let mut properties = light_properties();
        properties.remove("temperature");
        let device = device(properties);

        assert_eq!(device.light_state(), None);
    }
}
