//! The dispatch pipeline: parse, fold middleware, pick a handler, call it.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument};

use crate::config::Configuration;
use crate::consts::UNDEFINED_ACTION;
use crate::error::DispatchError;
use crate::event::{InboundEvent, InvocationContext, Response};
use crate::handler::{Handler, Middleware, RunData};

/// Route one event through `config`.
///
/// Middleware runs strictly in order and each result replaces the run
/// data. At most one handler is called. With no matching action and no
/// fallback the result is [`DispatchError::NoAction`].
#[instrument(name = "dispatch", skip_all)]
pub async fn dispatch(
    event: &InboundEvent,
    context: &InvocationContext,
    config: &Configuration,
) -> Result<Response, DispatchError> {
    let action = event.action()?;

    let mut run_data = RunData::new();
    for middleware in &config.middlewares {
        run_data = middleware
            .call(event, context, run_data)
            .await
            .map_err(DispatchError::Middleware)?;
    }

    let handler = match config.find_action(action.as_deref()) {
        Some(entry) => {
            if config.enable_logging {
                info!("Executing action {}", entry.name);
            }
            &entry.handler
        }
        None => match &config.fallback {
            Some(fallback) => {
                if config.enable_logging {
                    info!(
                        "Executing fallback as there were no {}",
                        action.as_deref().unwrap_or(UNDEFINED_ACTION)
                    );
                }
                fallback
            }
            None => return Err(DispatchError::NoAction),
        },
    };

    handler
        .call(event, context, &run_data)
        .await
        .map_err(DispatchError::Handler)
}

/// A shareable front for one [`Configuration`], suited to a runtime loop.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Arc<Configuration>,
}

impl Dispatcher {
    pub fn new(config: Configuration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Same as [`dispatch`] with this dispatcher's configuration.
    pub async fn dispatch(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
    ) -> Result<Response, DispatchError> {
        dispatch(event, context, &self.config).await
    }

    /// Host entry point. The no-action case resolves to its 400 response
    /// instead of failing; every other error is returned as is.
    pub async fn handle(
        &self,
        event: InboundEvent,
        context: InvocationContext,
    ) -> Result<Response, DispatchError> {
        match self.dispatch(&event, &context).await {
            Err(err) => match err.response() {
                Some(response) => Ok(response),
                None => Err(err),
            },
            ok => ok,
        }
    }

    /// [`Dispatcher::handle`] for a raw event as delivered by the runtime.
    pub async fn handle_json(
        &self,
        event: Value,
        context: InvocationContext,
    ) -> Result<Response, DispatchError> {
        let event: InboundEvent = serde_json::from_value(event)
            .map_err(|e| DispatchError::MalformedPayload(e.to_string()))?;
        self.handle(event, context).await
    }
}

impl From<Configuration> for Dispatcher {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}
