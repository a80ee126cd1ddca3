//! Route table and dispatch options.
//!
//! A [`Configuration`] is built once, typically at cold start, and then
//! shared by every invocation. It is never mutated by dispatch.

use std::fmt;
use std::sync::Arc;

use crate::handler::{Handler, Middleware};

/// Which entry wins when several actions share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// The first matching entry in list order.
    #[default]
    First,
    /// The last matching entry in list order.
    Last,
}

/// A named action and the handler that serves it.
#[derive(Clone)]
pub struct Action {
    pub name: String,
    pub handler: Arc<dyn Handler>,
}

impl Action {
    pub fn new(name: impl Into<String>, handler: impl Handler + 'static) -> Self {
        Self {
            name: name.into(),
            handler: Arc::new(handler),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// Everything the dispatcher needs to route an event.
#[derive(Clone, Default)]
pub struct Configuration {
    pub actions: Vec<Action>,
    pub middlewares: Vec<Arc<dyn Middleware>>,
    pub fallback: Option<Arc<dyn Handler>>,
    pub enable_logging: bool,
    pub match_policy: MatchPolicy,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action. Order matters for duplicate names.
    pub fn action(mut self, name: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.actions.push(Action::new(name, handler));
        self
    }

    /// Append a middleware. They run in the order added.
    pub fn middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn fallback(mut self, handler: impl Handler + 'static) -> Self {
        self.fallback = Some(Arc::new(handler));
        self
    }

    pub fn enable_logging(mut self, enabled: bool) -> Self {
        self.enable_logging = enabled;
        self
    }

    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Configured action names, in list order, duplicates included.
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name.as_str()).collect()
    }

    /// The action entry selected for `action` under the match policy.
    /// `None` never matches.
    pub fn find_action(&self, action: Option<&str>) -> Option<&Action> {
        let action = action?;
        let mut matches = self.actions.iter().filter(|a| a.name == action);
        match self.match_policy {
            MatchPolicy::First => matches.next(),
            MatchPolicy::Last => matches.last(),
        }
    }

    /// The handler that would serve `action`: the matching action's, else
    /// the fallback. Does not invoke anything.
    pub fn resolve(&self, action: Option<&str>) -> Option<&Arc<dyn Handler>> {
        self.find_action(action)
            .map(|a| &a.handler)
            .or(self.fallback.as_ref())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("actions", &self.action_names())
            .field("middlewares", &self.middlewares.len())
            .field("fallback", &self.fallback.is_some())
            .field("enable_logging", &self.enable_logging)
            .field("match_policy", &self.match_policy)
            .finish()
    }
}
