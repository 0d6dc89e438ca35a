use crate::route::Route;

use http::Method;

/// Collects the handlers of one pattern for [`HttpRouter::path`](super::HttpRouter::path).
#[derive(Debug)]
pub struct RouteBuilder<H> {
    route: Route<H>,
}

impl<H> RouteBuilder<H> {
    pub(super) fn new(pattern: &str) -> Self {
        Self {
            route: Route::new(pattern),
        }
    }

    pub fn insert(&mut self, method: Method, data: H) -> &mut Self {
        self.route.add_handler(method, data);
        self
    }

    pub fn pattern(&self) -> &str {
        self.route.pattern()
    }

    pub(super) fn into_route(self) -> Route<H> {
        self.route
    }
}
