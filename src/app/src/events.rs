use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app, grouped by domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Gateway(GatewayEvent),
    Device(DeviceEvent),
    List(ListEvent),
    Ui(UiEvent),
}

/// Gateway registration form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    /// Shell pushes the whole form as JSON on every input change
    RegisterFormUpdate {
        form_data: String,
    },
    SubmitRegistration,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    RegisterResponse(Result<(), ApiError>),
}

/// Add-device form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    AddDeviceFormUpdate {
        form_data: String,
    },
    SubmitDevice,

    #[serde(skip)]
    SaveDeviceResponse(Result<(), ApiError>),
}

/// Gateway list, cache, refresh and search events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// List view mounted: read the cache and arm the refresh timer
    Mount,
    /// List view unmounted: cancel the refresh timer
    Unmount,
    FetchGateways,

    // Search and pagination
    Search {
        serial_number: String,
    },
    ClearSearch,
    SetPage {
        page: usize,
    },
    NextPage,
    PrevPage,

    // Cache, timer and HTTP responses (internal events)
    #[serde(skip)]
    CacheLoaded(Option<String>),
    #[serde(skip)]
    CacheWritten,
    #[serde(skip)]
    CacheCleared,
    #[serde(skip)]
    FetchGatewaysResponse(Result<Vec<Gateway>, ApiError>),
    #[serde(skip)]
    RefreshFired,
    #[serde(skip)]
    RefreshCancelled,
}

/// UI actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
    /// Shell confirms it navigated to `pending_redirect`
    RedirectHandled,
}
