use std::collections::HashMap;
use std::sync::Arc;

use http::Method;

/// A registered pattern together with its per-method handlers.
///
/// The pattern never changes once the route lives in a [`Tree`](crate::Tree);
/// inserting the same pattern again merges the handler maps instead.
#[derive(Debug, Clone)]
pub struct Route<H> {
    pattern: Arc<str>,
    handlers: HashMap<Method, H>,
}

impl<H> Route<H> {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.into(),
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `method`, replacing any previous one.
    pub fn add_handler(&mut self, method: Method, handler: H) -> &mut Self {
        self.handlers.insert(method, handler);
        self
    }

    pub fn with_handler(mut self, method: Method, handler: H) -> Self {
        self.add_handler(method, handler);
        self
    }

    pub fn has_handler(&self, method: &Method) -> bool {
        self.handlers.contains_key(method)
    }

    pub fn handler(&self, method: &Method) -> Option<&H> {
        self.handlers.get(method)
    }

    pub fn handlers(&self) -> &HashMap<Method, H> {
        &self.handlers
    }

    pub fn methods(&self) -> impl Iterator<Item = &Method> + '_ {
        self.handlers.keys()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn shared_pattern(&self) -> Arc<str> {
        Arc::clone(&self.pattern)
    }

    /// Unions `other`'s handlers into `self`. Handlers of `other` win on
    /// method collisions.
    pub fn merge(&mut self, other: Route<H>) -> &mut Self {
        self.handlers.extend(other.handlers);
        self
    }
}
