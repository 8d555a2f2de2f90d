use crux_core::Command;
use serde_valid::Validate;
use std::collections::HashMap;

use crate::api_post;
use crate::events::{Event, GatewayEvent};
use crate::handle_response;
use crate::model::Model;
use crate::types::{is_valid_ipv4, RegisterFormData, RegisterFormState, RegisterGatewayRequest};
use crate::Effect;

/// Handle gateway registration events
pub fn handle(event: GatewayEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        GatewayEvent::RegisterFormUpdate { form_data } => {
            match serde_json::from_str::<RegisterFormData>(&form_data) {
                Ok(form_data) => {
                    model.register_form = RegisterFormState {
                        errors: validate_register_form(&form_data),
                        form_data,
                        submitted: model.register_form.submitted,
                    };
                    crux_core::render::render()
                }
                Err(e) => model.set_error_and_render(format!("Invalid form data: {e}")),
            }
        }

        GatewayEvent::SubmitRegistration => {
            model.register_form.submitted = true;
            model.register_form.errors = validate_register_form(&model.register_form.form_data);

            if !model.register_form.errors.is_empty() {
                return crux_core::render::render();
            }

            let request = RegisterGatewayRequest {
                serial_number: model.register_form.form_data.serial_number.clone(),
                name: model.register_form.form_data.name.clone(),
                ipv4_address: model.register_form.form_data.ip_address.clone(),
            };

            if let Err(e) = request.validate() {
                return model.set_error_and_render(format!("Invalid registration request: {e}"));
            }

            api_post!(Gateway, GatewayEvent, model, "/register", RegisterResponse, "Register gateway",
                body_json: &request
            )
        }

        GatewayEvent::RegisterResponse(result) => handle_response!(model, result, {
            on_success: |model, _| {
                model.register_form = RegisterFormState::default();
                model.pending_redirect = Some("/".to_string());
            },
            success_message: "Registration successful",
        }),
    }
}

/// Per-field checks; all fields required, the address must be IPv4
fn validate_register_form(form_data: &RegisterFormData) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    if form_data.serial_number.is_empty() {
        errors.insert(
            "serialNumber".to_string(),
            "Please enter a serial number".to_string(),
        );
    }

    if form_data.name.is_empty() {
        errors.insert("name".to_string(), "Please enter a name".to_string());
    }

    if !is_valid_ipv4(&form_data.ip_address) {
        errors.insert(
            "ipAddress".to_string(),
            "Please enter a valid IP address".to_string(),
        );
    }

    errors
}
