//! Dispatch error types

use thiserror::Error;

use crate::consts::{NO_ACTION_BODY, NO_ACTION_STATUS};
use crate::event::Response;

/// Everything that can end a dispatch without a handler response.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Body missing, not base64 when flagged, or not JSON.
    #[error("malformed event payload: {0}")]
    MalformedPayload(String),

    /// No action matched and no fallback is configured.
    #[error("{}", NO_ACTION_BODY)]
    NoAction,

    /// A middleware failed. Later steps did not run.
    #[error(transparent)]
    Middleware(anyhow::Error),

    /// The selected handler failed.
    #[error(transparent)]
    Handler(anyhow::Error),
}

impl DispatchError {
    /// The gateway response for errors that have one.
    /// Only `NoAction` does: `{statusCode: 400, body: "No action specified"}`.
    pub fn response(&self) -> Option<Response> {
        match self {
            Self::NoAction => Some(Response::new(NO_ACTION_STATUS, NO_ACTION_BODY)),
            _ => None,
        }
    }

    /// Unwrap a middleware or handler failure for downcasting.
    pub fn into_inner(self) -> Result<anyhow::Error, Self> {
        match self {
            Self::Middleware(e) | Self::Handler(e) => Ok(e),
            other => Err(other),
        }
    }
}
