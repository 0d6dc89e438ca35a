//! A URL router built on a segment trie.
//!
//! Patterns are split on `/` into segments of three kinds:
//!
//! - literal segments, matched verbatim;
//! - `:string` and `:number`, matching a segment that contains ASCII letters
//!   or digits (the whole segment with [`RouterOptions::anchor_params`]);
//! - `#<regex>`, matching when the regex is found in the request segment.
//!
//! At every level a lookup tries regex children first, then literals, then
//! parameters, so `/api/#^v[0-9]+$` overrides `/api/:string` for `v1`.
//! Matched segments are exposed positionally as `seg0`, `seg1`, ...
//!
//! ```
//! use segment_mux::{HttpRouter, Method};
//!
//! let mut router: HttpRouter<u32> = HttpRouter::new();
//! router
//!     .insert(Method::GET, "/api/user/:number/comments", 1)
//!     .insert(Method::GET, "/api/user/donutloop", 2);
//!
//! let m = router.find(&Method::GET, "/api/user/42/comments").unwrap();
//! assert_eq!(*m.data, 1);
//! assert_eq!(m.params.get("seg2"), Some("42"));
//! ```
#![deny(unsafe_code)]

pub mod context;
mod error;
mod http_router;
mod params;
mod route;
pub mod tree;
pub mod validator;

#[cfg(feature = "hyper-service")]
mod hyper_service;

pub use crate::error::{InsertError, MatchError};
pub use crate::http_router::{
    clean_path, HttpRouter, Lookup, Match, Method, Methods, RouteBuilder, RouterOptions,
};
pub use crate::params::Params;
pub use crate::route::Route;
pub use crate::tree::{Captures, Tree};

#[cfg(feature = "hyper-service")]
pub use crate::hyper_service::{
    logger, middleware, not_found, url_query, BoxError, BoxFuture, Chain, Handler, Middleware,
    Request, Response, RouterService, SharedHandler,
};
