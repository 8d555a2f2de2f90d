//! Key-value store command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! local cache. The browser shell resolves them against `localStorage`.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyValueOperation {
    Get { key: String },
    Set { key: String, value: String },
    Clear { key: String },
}

// The output from store operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyValueOutput {
    /// Result of a Get; None when the key is absent
    Value { value: Option<String> },
    Written,
    Cleared,
    Error { message: String },
}

impl Operation for KeyValueOperation {
    type Output = KeyValueOutput;
}

/// Command-based key-value API
pub struct KeyValue<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> KeyValue<Effect, Event>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read a key from the store
    pub fn get(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(KeyValueOperation::Get { key: key.into() })
    }

    /// Write a key to the store
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(KeyValueOperation::Set {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Remove a key from the store
    pub fn clear(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(KeyValueOperation::Clear { key: key.into() })
    }
}

/// Request builder for key-value operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: KeyValueOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: KeyValueOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = KeyValueOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
