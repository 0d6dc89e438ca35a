use super::chain::Chain;
use super::handler::{Handler, SharedHandler};
use super::{BoxError, BoxFuture, Request, Response};

use crate::context::{set_current_route, set_route_parameters, CurrentRoute};
use crate::http_router::{HttpRouter, Lookup, Method, RouteBuilder};

use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::header::LOCATION;
use hyper::service::Service;
use hyper::{Body, StatusCode};

/// The default not-found handler: `404 page not found`.
pub async fn not_found(_: Request) -> Result<Response, hyper::http::Error> {
    hyper::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("404 page not found\n"))
}

fn redirect(location: &str) -> Result<Response, BoxError> {
    let res = hyper::Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(LOCATION, location)
        .body(Body::empty())?;
    Ok(res)
}

/// Dispatches requests through an [`HttpRouter`].
///
/// A matched request gets its [`CurrentRoute`] and route parameters attached
/// and runs through the middleware chain into the method's handler. Every
/// other outcome goes straight to the not-found handler, except a non-canonical
/// path, which is answered with `301 Moved Permanently`.
///
/// Cloning is cheap; all clones share the router.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<HttpRouter<SharedHandler>>,
    chain: Chain,
    not_found: SharedHandler,
}

impl RouterService {
    pub fn new(router: HttpRouter<SharedHandler>) -> Self {
        Self {
            router: Arc::new(router),
            chain: Chain::default(),
            not_found: Arc::new(not_found),
        }
    }

    pub fn with_not_found(mut self, handler: impl Handler + Send + Sync + 'static) -> Self {
        self.not_found = Arc::new(handler);
        self
    }

    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chain = chain;
        self
    }

    pub fn router(&self) -> &HttpRouter<SharedHandler> {
        &self.router
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn dispatch(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let lookup = self.router.lookup(req.method(), req.uri());
        match lookup {
            Lookup::Found(m) => {
                let current = CurrentRoute::new(m.route, req.method().clone());
                let handler = self.chain.then(Arc::clone(m.data));
                let req = set_route_parameters(set_current_route(req, current), m.params);
                handler.call(req)
            }
            Lookup::Redirect(location) => {
                let fut: BoxFuture<'static, Result<Response, BoxError>> =
                    Box::pin(async move { redirect(&location) });
                fut
            }
            Lookup::NotFound(_) => self.not_found.call(req),
        }
    }
}

impl Service<Request> for RouterService {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.dispatch(req)
    }
}

impl HttpRouter<SharedHandler> {
    pub fn handle(
        &mut self,
        method: Method,
        path: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> &mut Self {
        self.insert(method, path, Arc::new(h))
    }

    pub fn try_handle(
        &mut self,
        method: Method,
        path: &str,
        h: impl Handler + Send + Sync + 'static,
    ) -> Result<&mut Self, crate::InsertError> {
        self.try_insert(method, path, Arc::new(h))
    }

    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }

    pub fn with_default(self, default: impl Handler + Send + Sync + 'static) -> RouterService {
        RouterService::new(self).with_not_found(default)
    }
}

impl RouteBuilder<SharedHandler> {
    pub fn handle(&mut self, method: Method, h: impl Handler + Send + Sync + 'static) -> &mut Self {
        self.insert(method, Arc::new(h))
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, path: &str, h: impl Handler + Send + Sync + 'static) -> &mut Self {
            self.handle(Method::$method, path, h)
        }
    };
}

macro_rules! define_builder_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&mut self, h: impl Handler + Send + Sync + 'static) -> &mut Self {
            self.handle(Method::$method, h)
        }
    };
}

impl HttpRouter<SharedHandler> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(patch, PATCH);
    define_method!(options, OPTIONS);
    define_method!(head, HEAD);
}

impl RouteBuilder<SharedHandler> {
    define_builder_method!(get, GET);
    define_builder_method!(post, POST);
    define_builder_method!(put, PUT);
    define_builder_method!(delete, DELETE);
    define_builder_method!(patch, PATCH);
    define_builder_method!(options, OPTIONS);
    define_builder_method!(head, HEAD);
}
