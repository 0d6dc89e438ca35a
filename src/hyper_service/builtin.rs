use super::{middleware, Middleware, Request, SharedHandler};

use crate::context::{set_queries, Queries};

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

/// Parses the query string into [`Queries`], readable through
/// [`context::queries`](crate::context::queries).
pub fn url_query() -> Middleware {
    middleware(|next: SharedHandler| {
        let handler: SharedHandler = Arc::new(move |req: Request| {
            let queries = Queries::parse(req.uri().query().unwrap_or(""));
            next.call(set_queries(req, queries))
        });
        handler
    })
}

/// Logs method, path, status and latency of every request.
pub fn logger() -> Middleware {
    middleware(|next: SharedHandler| {
        let handler: SharedHandler = Arc::new(move |req: Request| {
            let method = req.method().clone();
            let path = req.uri().path().to_owned();
            let start = Instant::now();
            let fut = next.call(req);
            async move {
                let ret = fut.await;
                match &ret {
                    Ok(res) => info!(
                        "{} {} -> {} ({:?})",
                        method,
                        path,
                        res.status(),
                        start.elapsed()
                    ),
                    Err(e) => warn!("{} {} -> error: {} ({:?})", method, path, e, start.elapsed()),
                }
                ret
            }
        });
        handler
    })
}
