use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Validate IPv4 address format
pub fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }

    parts.iter().all(|part| {
        if part.is_empty() || part.len() > 3 {
            return false;
        }
        if let Ok(num) = part.parse::<u32>() {
            num <= 255
        } else {
            false
        }
    })
}

/// Form data for gateway registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFormData {
    pub serial_number: String,
    pub name: String,
    pub ip_address: String,
}

/// Form data for adding a device; uid stays text until validated
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceFormData {
    pub serial_number: String,
    pub uid: String,
    pub vendor: String,
}

/// Registration form state with per-field errors
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFormState {
    pub form_data: RegisterFormData,
    pub errors: HashMap<String, String>,
    /// Set on the first submit attempt; the shell shows errors only after it
    pub submitted: bool,
}

/// Add-device form state with per-field errors
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddDeviceFormState {
    pub form_data: AddDeviceFormData,
    pub errors: HashMap<String, String>,
    pub submitted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_ipv4_accepts_valid_addresses() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("10.0.0.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
    }

    #[test]
    fn is_valid_ipv4_rejects_out_of_range_octets() {
        assert!(!is_valid_ipv4("999.1.1.1"));
        assert!(!is_valid_ipv4("1.2.3.256"));
    }

    #[test]
    fn is_valid_ipv4_rejects_wrong_shape() {
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4(""));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4("1..2.3"));
    }
}
