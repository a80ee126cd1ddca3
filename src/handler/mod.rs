pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

use crate::event::{InboundEvent, InvocationContext, Response};

/// Data accumulated by the middleware chain for one dispatch.
pub type RunData = serde_json::Map<String, serde_json::Value>;

/// Produces the response for an action (or the fallback).
#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
        run_data: &RunData,
    ) -> Result<Response>;
}

/// A pre-processing step. Whatever it returns replaces the run data
/// seen by the next step; carrying earlier keys forward is its own job.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn call(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
        run_data: RunData,
    ) -> Result<RunData>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
    async fn call(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
        run_data: &RunData,
    ) -> Result<Response> {
        (**self).call(event, context, run_data).await
    }
}

#[async_trait]
impl<T: Middleware + ?Sized> Middleware for Arc<T> {
    async fn call(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
        run_data: RunData,
    ) -> Result<RunData> {
        (**self).call(event, context, run_data).await
    }
}

/// Handler backed by an async closure. See [`handler_fn`].
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap an async closure as a [`Handler`]. The closure gets owned
/// copies of the event, context, and run data.
pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(InboundEvent, InvocationContext, RunData) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    HandlerFn { f }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(InboundEvent, InvocationContext, RunData) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    async fn call(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
        run_data: &RunData,
    ) -> Result<Response> {
        (self.f)(event.clone(), context.clone(), run_data.clone()).await
    }
}

/// Middleware backed by an async closure. See [`middleware_fn`].
pub struct MiddlewareFn<F> {
    f: F,
}

/// Wrap an async closure as a [`Middleware`].
pub fn middleware_fn<F, Fut>(f: F) -> MiddlewareFn<F>
where
    F: Fn(InboundEvent, InvocationContext, RunData) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RunData>> + Send + 'static,
{
    MiddlewareFn { f }
}

#[async_trait]
impl<F, Fut> Middleware for MiddlewareFn<F>
where
    F: Fn(InboundEvent, InvocationContext, RunData) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<RunData>> + Send + 'static,
{
    async fn call(
        &self,
        event: &InboundEvent,
        context: &InvocationContext,
        run_data: RunData,
    ) -> Result<RunData> {
        (self.f)(event.clone(), context.clone(), run_data).await
    }
}
