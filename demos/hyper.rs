use segment_mux::context::{current_route, queries, route_parameters};
use segment_mux::{logger, router_service, url_query, Chain, Request, Response};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, StatusCode};
use tracing_subscriber::EnvFilter;

async fn not_found(req: Request) -> Result<Response, Never> {
    let res = hyper::Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from(format!("no route for {}\n", req.uri().path())))
        .unwrap();
    Ok(res)
}

async fn user(req: Request) -> Result<Response, Never> {
    let id = route_parameters(&req)
        .and_then(|p| p.parse::<u64>("seg2"))
        .and_then(|r| r.ok())
        .unwrap_or_default();
    let pattern = current_route(&req).map(|r| r.pattern()).unwrap_or("-");
    Ok(Response::new(Body::from(format!("user {} via {}\n", id, pattern))))
}

async fn comments(req: Request) -> Result<Response, Never> {
    let limit = queries(&req).and_then(|q| q.get("limit")).unwrap_or("20");
    Ok(Response::new(Body::from(format!("comments, limit {}\n", limit))))
}

async fn version(req: Request) -> Result<Response, Never> {
    let v = route_parameters(&req).and_then(|p| p.get("seg1")).unwrap_or("?");
    Ok(Response::new(Body::from(format!("api version {}\n", v))))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let service = router_service! {
        GET "/api/user/:number" => user,
        GET "/api/user/:number/comments" => comments,
        GET "/api/#^v[0-9]+$" => version;
        _ => not_found
    }
    .with_chain(Chain::new(vec![logger(), url_query()]));

    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("user: http://{}/api/user/42", addr);
    println!("comments: http://{}/api/user/42/comments?limit=5", addr);
    println!("version: http://{}/api/v2", addr);
    println!("redirect: http://{}/api//user/42", addr);
    println!();

    server.await.unwrap();
}
