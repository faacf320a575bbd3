/// The cached state of the light as last accepted from the host. A write to
/// any one property sends the whole snapshot, as the device protocol has no
/// partial-update form.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct LightState {
    pub on: bool,
    /// Percentage.
    pub brightness: u64,
    /// Kelvin.
    pub temperature: u64,
}
