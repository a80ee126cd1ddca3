use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Handler, Middleware, RunData};
use crate::event::{InboundEvent, InvocationContext, Response};

/// A canned handler for tests. Returns the same response every call and
/// remembers the run data it was given.
pub struct MockHandler {
    response: std::result::Result<Response, String>,
    calls: AtomicUsize,
    last_run_data: Mutex<Option<RunData>>,
}

impl MockHandler {
    pub fn new(response: Response) -> Self {
        Self {
            response: Ok(response),
            calls: AtomicUsize::new(0),
            last_run_data: Mutex::new(None),
        }
    }

    /// A handler that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: AtomicUsize::new(0),
            last_run_data: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_run_data(&self) -> Option<RunData> {
        self.last_run_data.lock().unwrap().clone()
    }
}

#[async_trait]
impl Handler for MockHandler {
    async fn call(
        &self,
        _event: &InboundEvent,
        _context: &InvocationContext,
        run_data: &RunData,
    ) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_run_data.lock().unwrap() = Some(run_data.clone());
        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

/// A middleware for tests that inserts fixed entries, either on top of the
/// incoming run data or in place of it.
pub struct MockMiddleware {
    entries: RunData,
    keep_incoming: bool,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockMiddleware {
    /// Returns exactly `entries`, dropping whatever came in.
    pub fn replacing(entries: RunData) -> Self {
        Self {
            entries,
            keep_incoming: false,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns the incoming run data with `entries` added.
    pub fn extending(entries: RunData) -> Self {
        Self {
            keep_incoming: true,
            ..Self::replacing(entries)
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::replacing(RunData::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Middleware for MockMiddleware {
    async fn call(
        &self,
        _event: &InboundEvent,
        _context: &InvocationContext,
        run_data: RunData,
    ) -> Result<RunData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{message}");
        }
        let mut next = if self.keep_incoming {
            run_data
        } else {
            RunData::new()
        };
        next.extend(self.entries.clone());
        Ok(next)
    }
}
