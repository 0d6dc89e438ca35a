//! Request-scoped values.
//!
//! Setters take the request by value and hand back the request carrying the
//! new value, so a value is only ever visible to the request it was attached
//! to. Values live in the request's [`http::Extensions`].

use crate::params::Params;
use crate::route::Route;

use std::sync::Arc;

use http::{Method, Request};
use url::form_urlencoded;

/// The route that matched the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    pattern: Arc<str>,
    method: Method,
}

impl CurrentRoute {
    pub fn new<H>(route: &Route<H>, method: Method) -> Self {
        Self {
            pattern: route.shared_pattern(),
            method,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

pub fn set_current_route<B>(mut req: Request<B>, route: CurrentRoute) -> Request<B> {
    req.extensions_mut().insert(route);
    req
}

/// Only set while the matched route's handler chain runs.
pub fn current_route<B>(req: &Request<B>) -> Option<&CurrentRoute> {
    req.extensions().get::<CurrentRoute>()
}

pub fn set_route_parameters<B>(mut req: Request<B>, params: Params) -> Request<B> {
    req.extensions_mut().insert(params);
    req
}

pub fn route_parameters<B>(req: &Request<B>) -> Option<&Params> {
    req.extensions().get::<Params>()
}

/// Decoded query string pairs, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queries {
    pairs: Vec<(String, String)>,
}

impl Queries {
    pub fn parse(query: &str) -> Self {
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find_map(|(k, v)| if k == key { Some(v.as_str()) } else { None })
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

pub fn set_queries<B>(mut req: Request<B>, queries: Queries) -> Request<B> {
    req.extensions_mut().insert(queries);
    req
}

pub fn queries<B>(req: &Request<B>) -> Option<&Queries> {
    req.extensions().get::<Queries>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_and_params() {
        let route: Route<()> = Route::new("/api/:number");
        let req = Request::new(());
        assert!(current_route(&req).is_none());
        assert!(route_parameters(&req).is_none());

        let req = set_current_route(req, CurrentRoute::new(&route, Method::GET));
        let req = set_route_parameters(req, vec!["api", "7"].into_iter().collect());

        let current = current_route(&req).unwrap();
        assert_eq!(current.pattern(), "/api/:number");
        assert_eq!(*current.method(), Method::GET);
        assert_eq!(route_parameters(&req).unwrap().get("seg1"), Some("7"));
    }

    #[test]
    fn query_pairs() {
        let q = Queries::parse("limit=10&tag=a&tag=b%20c&empty=");
        assert_eq!(q.get("limit"), Some("10"));
        assert_eq!(q.get_all("tag").collect::<Vec<_>>(), ["a", "b c"]);
        assert_eq!(q.get("empty"), Some(""));
        assert_eq!(q.get("missing"), None);
        assert_eq!(q.len(), 4);

        let req = set_queries(Request::new(()), q.clone());
        assert_eq!(queries(&req), Some(&q));
    }
}
