#![forbid(unsafe_code)]

mod builtin;
mod chain;
mod handler;
mod service;
mod service_macro;

pub use self::builtin::{logger, url_query};
pub use self::chain::{middleware, Chain, Middleware};
pub use self::handler::{Handler, SharedHandler};
pub use self::service::{not_found, RouterService};

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

pub type Request = hyper::Request<hyper::Body>;
pub type Response = hyper::Response<hyper::Body>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;
