//! Action router for WebSocket serverless endpoints.
//!
//! An inbound gateway event carries `{"action": "<name>"}` in its body.
//! [`dispatch`] runs the configured middleware chain, then calls the
//! handler registered under that name, or the fallback.

pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod handler;
pub mod logging;

pub use config::{Action, Configuration, MatchPolicy};
pub use dispatch::{Dispatcher, dispatch};
pub use error::DispatchError;
pub use event::{InboundEvent, InvocationContext, RequestContext, Response};
pub use handler::{Handler, Middleware, RunData, handler_fn, middleware_fn};
