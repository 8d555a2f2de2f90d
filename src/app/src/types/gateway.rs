use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// A device registered under a gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub uid: u64,
    pub vendor: String,
    #[serde(default)]
    pub created_at: String,
}

/// A registered gateway with its devices, as delivered by the registry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub serial_number: String,
    pub name: String,
    pub ip_address: String,
    pub status: bool,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Result of a serial-number lookup in the cached list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SearchOutcome {
    Found { gateway: Gateway },
    NotFound { serial_number: String },
}

/// Gateway registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterGatewayRequest {
    #[validate(min_length = 1)]
    pub serial_number: String,
    #[validate(min_length = 1)]
    pub name: String,
    #[validate(min_length = 1)]
    pub ipv4_address: String,
}

/// Save-device request; the owning gateway travels as its serial number
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveDeviceRequest {
    #[validate(min_length = 1)]
    pub serial_number: String,
    pub uid: u64,
    #[validate(min_length = 1)]
    pub vendor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_parses_registry_payload() {
        let json = r#"{
            "_id": "6530a1",
            "serialNumber": "GW-100",
            "name": "warehouse",
            "ipAddress": "10.0.0.7",
            "status": true,
            "devices": [
                { "_id": "6530a2", "uid": 42, "vendor": "acme", "createdAt": "2024-01-02T03:04:05Z" }
            ],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T03:04:05Z"
        }"#;

        let gateway: Gateway = serde_json::from_str(json).unwrap();

        assert_eq!(gateway.serial_number, "GW-100");
        assert_eq!(gateway.ip_address, "10.0.0.7");
        assert!(gateway.status);
        assert_eq!(gateway.devices.len(), 1);
        assert_eq!(gateway.devices[0].uid, 42);
        assert_eq!(gateway.devices[0].vendor, "acme");
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterGatewayRequest {
            serial_number: "GW-100".to_string(),
            name: "warehouse".to_string(),
            ipv4_address: "10.0.0.7".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["serialNumber"], "GW-100");
        assert_eq!(json["ipv4Address"], "10.0.0.7");
    }

    #[test]
    fn empty_fields_fail_request_validation() {
        let request = RegisterGatewayRequest::default();
        assert!(request.validate().is_err());

        let request = SaveDeviceRequest {
            serial_number: "GW-100".to_string(),
            uid: 1,
            vendor: "acme".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
