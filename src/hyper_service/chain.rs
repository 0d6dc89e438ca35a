use super::{Handler, SharedHandler};

use std::fmt;
use std::sync::Arc;

/// Wraps a handler into another handler.
pub type Middleware = Arc<dyn Fn(SharedHandler) -> SharedHandler + Send + Sync>;

pub fn middleware<F>(f: F) -> Middleware
where
    F: Fn(SharedHandler) -> SharedHandler + Send + Sync + 'static,
{
    Arc::new(f)
}

/// An ordered list of middleware.
///
/// A chain never changes once built. `Chain::new([m1, m2, m3]).then(h)` is
/// `m1(m2(m3(h)))`: requests pass m1 first, responses leave through m1 last.
/// `then` may be called any number of times; each call wraps anew.
#[derive(Clone, Default)]
pub struct Chain {
    middleware: Vec<Middleware>,
}

impl Chain {
    pub fn new<I>(middleware: I) -> Self
    where
        I: IntoIterator<Item = Middleware>,
    {
        Self {
            middleware: middleware.into_iter().collect(),
        }
    }

    /// A new chain running `more` after the middleware of `self`.
    pub fn append<I>(&self, more: I) -> Self
    where
        I: IntoIterator<Item = Middleware>,
    {
        let mut middleware = self.middleware.clone();
        middleware.extend(more);
        Self { middleware }
    }

    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    pub fn then(&self, endpoint: SharedHandler) -> SharedHandler {
        self.middleware
            .iter()
            .rev()
            .fold(endpoint, |next, mw| (**mw)(next))
    }

    pub fn then_fn<F>(&self, endpoint: F) -> SharedHandler
    where
        F: Handler + Send + Sync + 'static,
    {
        self.then(Arc::new(endpoint))
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.middleware.len())
            .finish()
    }
}
