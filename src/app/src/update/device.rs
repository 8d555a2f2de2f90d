use crux_core::Command;
use serde_valid::Validate;
use std::collections::HashMap;

use crate::api_post;
use crate::events::{DeviceEvent, Event};
use crate::handle_response;
use crate::model::Model;
use crate::types::{AddDeviceFormData, AddDeviceFormState, SaveDeviceRequest};
use crate::Effect;

/// Handle add-device events
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::AddDeviceFormUpdate { form_data } => {
            match serde_json::from_str::<AddDeviceFormData>(&form_data) {
                Ok(form_data) => {
                    model.add_device_form = AddDeviceFormState {
                        errors: validate_add_device_form(&form_data),
                        form_data,
                        submitted: model.add_device_form.submitted,
                    };
                    crux_core::render::render()
                }
                Err(e) => model.set_error_and_render(format!("Invalid form data: {e}")),
            }
        }

        DeviceEvent::SubmitDevice => {
            model.add_device_form.submitted = true;
            model.add_device_form.errors =
                validate_add_device_form(&model.add_device_form.form_data);

            if !model.add_device_form.errors.is_empty() {
                return crux_core::render::render();
            }

            // The uid passed validation above, so the parse cannot fail here
            let Ok(uid) = model.add_device_form.form_data.uid.parse::<u64>() else {
                return crux_core::render::render();
            };

            let request = SaveDeviceRequest {
                serial_number: model.add_device_form.form_data.serial_number.clone(),
                uid,
                vendor: model.add_device_form.form_data.vendor.clone(),
            };

            if let Err(e) = request.validate() {
                return model.set_error_and_render(format!("Invalid device request: {e}"));
            }

            api_post!(Device, DeviceEvent, model, "/savedevice", SaveDeviceResponse, "Add device",
                body_json: &request
            )
        }

        DeviceEvent::SaveDeviceResponse(result) => handle_response!(model, result, {
            on_success: |model, _| {
                model.add_device_form = AddDeviceFormState::default();
                model.pending_redirect = Some("/".to_string());
            },
            success_message: "Device added successfully",
        }),
    }
}

/// Per-field checks; all fields required, the uid must be numeric
fn validate_add_device_form(form_data: &AddDeviceFormData) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if form_data.serial_number.is_empty() {
        errors.insert(
            "serialNumber".to_string(),
            "Please enter a serial number".to_string(),
        );
    }

    if form_data.uid.is_empty() {
        errors.insert("uid".to_string(), "Please enter a UID".to_string());
    } else if form_data.uid.parse::<u64>().is_err() {
        errors.insert("uid".to_string(), "UID must be a number".to_string());
    }

    if form_data.vendor.is_empty() {
        errors.insert("vendor".to_string(), "Please enter a vendor".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(serial: &str, uid: &str, vendor: &str) -> AddDeviceFormData {
        AddDeviceFormData {
            serial_number: serial.to_string(),
            uid: uid.to_string(),
            vendor: vendor.to_string(),
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn complete_form_has_no_errors() {
            let errors = validate_add_device_form(&form("GW-1", "42", "acme"));
            assert!(errors.is_empty());
        }

        #[test]
        fn missing_fields_are_reported_per_field() {
            let errors = validate_add_device_form(&form("", "", ""));

            assert_eq!(errors.len(), 3);
            assert_eq!(errors["serialNumber"], "Please enter a serial number");
            assert_eq!(errors["uid"], "Please enter a UID");
            assert_eq!(errors["vendor"], "Please enter a vendor");
        }

        #[test]
        fn non_numeric_uid_is_rejected() {
            let errors = validate_add_device_form(&form("GW-1", "abc", "acme"));
            assert_eq!(errors["uid"], "UID must be a number");
        }
    }

    mod submission {
        use super::*;
        use crate::types::ApiError;

        #[test]
        fn submit_with_errors_stays_local() {
            let mut model = Model {
                add_device_form: AddDeviceFormState {
                    form_data: form("GW-1", "not-a-number", "acme"),
                    ..Default::default()
                },
                ..Default::default()
            };

            let _ = handle(DeviceEvent::SubmitDevice, &mut model);

            assert!(model.add_device_form.submitted);
            assert!(model.add_device_form.errors.contains_key("uid"));
            assert!(!model.is_loading);
        }

        #[test]
        fn submit_with_valid_form_starts_loading() {
            let mut model = Model {
                add_device_form: AddDeviceFormState {
                    form_data: form("GW-1", "42", "acme"),
                    ..Default::default()
                },
                ..Default::default()
            };

            let _ = handle(DeviceEvent::SubmitDevice, &mut model);

            assert!(model.add_device_form.errors.is_empty());
            assert!(model.is_loading);
        }

        #[test]
        fn success_resets_form_and_requests_redirect() {
            let mut model = Model {
                add_device_form: AddDeviceFormState {
                    form_data: form("GW-1", "42", "acme"),
                    submitted: true,
                    ..Default::default()
                },
                is_loading: true,
                ..Default::default()
            };

            let _ = handle(DeviceEvent::SaveDeviceResponse(Ok(())), &mut model);

            assert!(!model.is_loading);
            assert_eq!(model.add_device_form, AddDeviceFormState::default());
            assert_eq!(model.pending_redirect, Some("/".to_string()));
            assert_eq!(
                model.success_message,
                Some("Device added successfully".to_string())
            );
        }

        #[test]
        fn unknown_gateway_rejection_surfaces_registry_message() {
            let mut model = Model {
                is_loading: true,
                ..Default::default()
            };

            let _ = handle(
                DeviceEvent::SaveDeviceResponse(Err(ApiError::Validation {
                    message: "gateway not found".to_string(),
                })),
                &mut model,
            );

            assert!(!model.is_loading);
            assert_eq!(model.error_message, Some("gateway not found".to_string()));
        }
    }
}
