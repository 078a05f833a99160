//! In-memory [`Api`] implementation for service tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use taskboard_client::{Api, Error};

/// One request the fake saw, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

/// Canned-response [`Api`] that records every call.
///
/// Routes are keyed by method + path. Unmatched requests answer 404 so a
/// missing stub fails the test loudly. Re-registering a route replaces the
/// previous response, which lets lifecycle tests re-stub between steps.
#[derive(Debug, Default)]
pub struct FakeApi {
    routes: Mutex<HashMap<(String, String), Result<Value, Error>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub a successful response for `method` + `path`.
    pub fn on(&self, method: &str, path: &str, value: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), Ok(value));
    }

    /// Stub a failure for `method` + `path`.
    pub fn on_error(&self, method: &str, path: &str, error: Error) {
        self.routes
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), Err(error));
    }

    /// Every request seen so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn dispatch(&self, method: &str, path: &str, body: Option<Value>) -> Result<Value, Error> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
        self.routes
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
            .unwrap_or_else(|| {
                Err(Error::Api {
                    status: 404,
                    message: format!("no stub for {} {}", method, path),
                })
            })
    }
}

#[async_trait]
impl Api for FakeApi {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        self.dispatch("GET", path, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, Error> {
        self.dispatch("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, Error> {
        self.dispatch("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        self.dispatch("DELETE", path, None).map(|_| ())
    }
}
