use crate::domain::LightState;
use crate::keylight::temperature::kelvin_to_device_scale;
use serde::Serialize;

// The device accepts only full-state updates; every request describes all
// lights it drives, which for this fixture is exactly one.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LightsRequest {
    lights: Vec<Light>,
    number_of_lights: u8,
}

#[derive(Serialize, Debug)]
struct Light {
    brightness: u64,
    temperature: u64,
    on: u8,
}

impl From<&LightState> for LightsRequest {
    fn from(state: &LightState) -> Self {
        LightsRequest {
            lights: vec![Light {
                brightness: state.brightness,
                temperature: kelvin_to_device_scale(state.temperature),
                on: u8::from(state.on),
            }],
            number_of_lights: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_the_full_state_in_the_device_wire_format() {
        let request = LightsRequest::from(&LightState {
            on: true,
            brightness: 50,
            temperature: 4950,
        });

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"lights":[{"brightness":50,"temperature":244,"on":1}],"numberOfLights":1}"#
        );
    }

    #[test]
    fn serializes_off_as_zero() {
        let request = LightsRequest::from(&LightState {
            on: false,
            brightness: 3,
            temperature: 7000,
        });

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"lights":[{"brightness":3,"temperature":143,"on":0}],"numberOfLights":1}"#
        );
    }
}
