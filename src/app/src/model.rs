use serde::{Deserialize, Serialize};

use crate::types::*;

/// Number of gateways shown per page in the list view.
pub const PAGE_SIZE: usize = 5;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Gateway list state
    pub gateways: Vec<Gateway>,
    pub page: usize,
    pub search_result: Option<SearchOutcome>,

    // Form state
    pub register_form: RegisterFormState,
    pub add_device_form: AddDeviceFormState,

    // Navigation requested by the core, consumed by the shell
    pub pending_redirect: Option<String>,

    // UI state
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    /// Number of pages for the current list, never zero
    pub fn page_count(&self) -> usize {
        self.gateways.len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The gateways on the current (clamped) page
    pub fn visible_page(&self) -> &[Gateway] {
        let start = self.page.min(self.page_count() - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.gateways.len());
        &self.gateways[start..end]
    }

    /// Replace the list and keep the page index in range
    pub fn apply_gateways(&mut self, gateways: Vec<Gateway>) {
        self.gateways = gateways;
        self.page = self.page.min(self.page_count() - 1);
    }

    /// Start a loading operation (sets is_loading=true, clears error)
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Stop loading and clear error
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.error_message = None;
    }

    /// Set an error message and stop loading
    pub fn set_error(&mut self, error: String) {
        self.is_loading = false;
        self.error_message = Some(error);
    }

    /// Set an error message, stop loading, and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    /// Clear the error message without affecting the loading state.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(serial: &str) -> Gateway {
        Gateway {
            serial_number: serial.to_string(),
            name: format!("gateway {serial}"),
            ..Default::default()
        }
    }

    #[test]
    fn page_count_is_never_zero() {
        let model = Model::default();
        assert_eq!(model.page_count(), 1);
    }

    #[test]
    fn twelve_records_page_three_holds_two() {
        let model = Model {
            gateways: (0..12).map(|i| gateway(&format!("SN-{i}"))).collect(),
            page: 2,
            ..Default::default()
        };

        assert_eq!(model.page_count(), 3);
        assert_eq!(model.visible_page().len(), 2);
        assert_eq!(model.visible_page()[0].serial_number, "SN-10");
    }

    #[test]
    fn apply_gateways_clamps_page_when_list_shrinks() {
        let mut model = Model {
            gateways: (0..12).map(|i| gateway(&format!("SN-{i}"))).collect(),
            page: 2,
            ..Default::default()
        };

        model.apply_gateways(vec![gateway("SN-0")]);

        assert_eq!(model.page, 0);
        assert_eq!(model.visible_page().len(), 1);
    }
}
