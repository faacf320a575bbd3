pub const KELVIN_MIN: u64 = 2900;
pub const KELVIN_MAX: u64 = 7000;

// The device's internal temperature scale runs inverted: 344 is the warmest
// setting (2900 K) and 143 the coolest (7000 K).
const SCALE_WARMEST: u64 = 344;
const SCALE_COOLEST: u64 = 143;

/// Maps a Kelvin value in [`KELVIN_MIN`, `KELVIN_MAX`] onto the device's
/// inverted integer scale. Range validation is the property's concern; this
/// mapping assumes an in-range value.
pub fn kelvin_to_device_scale(kelvin: u64) -> u64 {
    let fraction = (kelvin - KELVIN_MIN) as f64 / (KELVIN_MAX - KELVIN_MIN) as f64;
    ((SCALE_WARMEST - SCALE_COOLEST) as f64 * (1.0 - fraction) + SCALE_COOLEST as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2900, 344)]
    #[case(3000, 339)]
    #[case(4000, 290)]
    #[case(4950, 244)]
    #[case(5000, 241)]
    #[case(6000, 192)]
    #[case(7000, 143)]
    fn maps_kelvin_onto_the_device_scale(#[case] kelvin: u64, #[case] expected: u64) {
        assert_eq!(kelvin_to_device_scale(kelvin), expected);
    }

    #[test]
    fn the_mapping_is_monotonically_decreasing_over_the_full_range() {
        for kelvin in KELVIN_MIN..KELVIN_MAX {
            assert!(kelvin_to_device_scale(kelvin) >= kelvin_to_device_scale(kelvin + 1));
        }
    }

    #[test]
    fn the_mapping_is_linear() {
        // A fixed Kelvin step far from the endpoints moves the scale by a
        // fixed amount, within rounding.
        let deltas = (KELVIN_MIN..KELVIN_MAX)
            .step_by(100)
            .map(|kelvin| kelvin_to_device_scale(kelvin) - kelvin_to_device_scale(kelvin + 100))
            .collect::<Vec<_>>();

        assert!(deltas.iter().all(|delta| (4..=6).contains(delta)));
    }
}
