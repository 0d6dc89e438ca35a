use super::{BoxError, BoxFuture, Future, Request, Response};

use std::sync::Arc;

pub trait Handler {
    fn call(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>>;
}

/// A handler that can be stored in a router and wrapped by middleware.
pub type SharedHandler = Arc<dyn Handler + Send + Sync>;

impl<F, E, Fut> Handler for F
where
    F: Fn(Request) -> Fut,
    E: Into<BoxError>,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let fut = (self)(req);
        Box::pin(async move {
            match fut.await {
                Ok(r) => Ok(r),
                Err(e) => Err(e.into()),
            }
        })
    }
}
