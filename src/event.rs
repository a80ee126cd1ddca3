//! Wire types exchanged with the host runtime.
//!
//! [`InboundEvent`] mirrors the API Gateway WebSocket event, [`Response`]
//! mirrors the proxy result the gateway expects back. Only the body is
//! interpreted here; everything else is carried through to handlers.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DispatchError;

/// Event delivered by the gateway for one WebSocket message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InboundEvent {
    pub body: Option<String>,
    pub is_base64_encoded: bool,
    pub headers: Option<HashMap<String, String>>,
    pub request_context: Option<RequestContext>,
}

/// Gateway metadata about the connection and route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    pub connection_id: Option<String>,
    pub route_key: Option<String>,
    pub event_type: Option<String>,
    pub request_id: Option<String>,
    pub domain_name: Option<String>,
    pub stage: Option<String>,
}

/// Per-invocation metadata from the function runtime. Never inspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationContext {
    pub request_id: Option<String>,
    pub function_name: Option<String>,
    pub invoked_function_arn: Option<String>,
    pub deadline_ms: Option<u64>,
}

/// Proxy result returned to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: Value,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl Response {
    pub fn new(status_code: u16, body: impl Into<Value>) -> Self {
        Self {
            status_code,
            body: body.into(),
            headers: HashMap::new(),
        }
    }

    /// 200 with the given body.
    pub fn ok(body: impl Into<Value>) -> Self {
        Self::new(200, body)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl InboundEvent {
    /// Event whose body is the given JSON payload, serialized.
    pub fn with_payload(payload: &Value) -> Self {
        Self {
            body: Some(payload.to_string()),
            ..Self::default()
        }
    }

    /// Decode and parse the body as JSON.
    pub fn payload(&self) -> Result<Value, DispatchError> {
        let raw = self
            .body
            .as_deref()
            .ok_or_else(|| DispatchError::MalformedPayload("event has no body".to_string()))?;

        if self.is_base64_encoded {
            let bytes = STANDARD
                .decode(raw)
                .map_err(|e| DispatchError::MalformedPayload(format!("invalid base64 body: {e}")))?;
            serde_json::from_slice(&bytes)
                .map_err(|e| DispatchError::MalformedPayload(e.to_string()))
        } else {
            serde_json::from_str(raw).map_err(|e| DispatchError::MalformedPayload(e.to_string()))
        }
    }

    /// The requested action name. `Ok(None)` when the payload parses but
    /// carries no string `action`. A `null` payload cannot carry one at all
    /// and is malformed.
    pub fn action(&self) -> Result<Option<String>, DispatchError> {
        let payload = self.payload()?;
        if payload.is_null() {
            return Err(DispatchError::MalformedPayload(
                "payload is null".to_string(),
            ));
        }
        Ok(payload
            .get("action")
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}
