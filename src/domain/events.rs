use crate::domain::property::PropertyValue;

/// Notifications for the host, emitted on the adapter's event channel.
#[derive(PartialEq, Debug, Clone)]
pub enum Event {
    DeviceAdded {
        device_id: String,
    },
    DeviceRemoved {
        device_id: String,
    },
    PropertyChanged {
        device_id: String,
        property_id: String,
        value: PropertyValue,
    },
}
