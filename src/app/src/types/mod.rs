//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - api: registry wire types and error classification
//! - gateway: gateway and device records, search outcome
//! - form: form data, form state and field validation

pub mod api;
pub mod form;
pub mod gateway;

// Re-export all types for backward compatibility
pub use api::*;
pub use form::*;
pub use gateway::*;
