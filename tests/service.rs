#![cfg(feature = "hyper-service")]

use segment_mux::context::{current_route, queries, route_parameters};
use segment_mux::{
    logger, middleware, router_service, url_query, Chain, Handler, HttpRouter, Middleware,
    Request, Response, RouterService, SharedHandler,
};

use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use hyper::header::LOCATION;
use hyper::service::Service;
use hyper::{Body, Method, StatusCode};

fn request(method: Method, uri: &str) -> Request {
    hyper::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(res: Response) -> String {
    let bytes = hyper::body::to_bytes(res.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn hello(_: Request) -> Result<Response, Infallible> {
    Ok(Response::new(Body::from("hello")))
}

async fn echo_method(req: Request) -> Result<Response, Infallible> {
    Ok(Response::new(Body::from(req.method().to_string())))
}

async fn describe(req: Request) -> Result<Response, Infallible> {
    let route = current_route(&req).unwrap();
    let params = route_parameters(&req).unwrap();
    let body = format!(
        "{} {} {}",
        route.method(),
        route.pattern(),
        params.get("seg2").unwrap_or("-")
    );
    Ok(Response::new(Body::from(body)))
}

async fn custom_not_found(req: Request) -> Result<Response, Infallible> {
    let body = if current_route(&req).is_none() {
        "nothing here"
    } else {
        "route leaked"
    };
    let mut res = Response::new(Body::from(body));
    *res.status_mut() = StatusCode::NOT_FOUND;
    Ok(res)
}

type Log = Arc<Mutex<Vec<String>>>;

fn tag(name: &'static str, log: Log) -> Middleware {
    middleware(move |next: SharedHandler| {
        let log = Arc::clone(&log);
        let handler: SharedHandler = Arc::new(move |req: Request| {
            log.lock().unwrap().push(format!("{} in", name));
            let fut = next.call(req);
            let log = Arc::clone(&log);
            async move {
                let ret = fut.await;
                log.lock().unwrap().push(format!("{} out", name));
                ret
            }
        });
        handler
    })
}

fn recording_endpoint(log: Log) -> impl Handler + Send + Sync + 'static {
    move |_: Request| {
        log.lock().unwrap().push("handler".to_owned());
        async { Ok::<_, Infallible>(Response::new(Body::from("ok"))) }
    }
}

#[tokio::test]
async fn service_dispatch() {
    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.get("/hello", hello);
    let service = router.into_service();

    let res = service.dispatch(request(Method::GET, "/hello")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "hello");

    let res = service.dispatch(request(Method::GET, "/nope")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(res).await, "404 page not found\n");

    let res = service.dispatch(request(Method::POST, "/hello")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let patchx = Method::from_bytes(b"PATCHX").unwrap();
    let res = service.dispatch(request(patchx, "/hello")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_custom_not_found() {
    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.get("/hello", hello);
    let service = router.with_default(custom_not_found);

    let res = service.dispatch(request(Method::GET, "/nope")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(res).await, "nothing here");
}

#[tokio::test]
async fn service_redirect() {
    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.get("/api/user", hello);
    let service = router.into_service();

    let res = service
        .dispatch(request(Method::GET, "/api//user?x=1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/api/user?x=1");
}

#[tokio::test]
async fn service_context() {
    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.get("/api/user/:number", describe);
    let service = router.into_service();

    let res = service
        .dispatch(request(Method::GET, "/api/user/42"))
        .await
        .unwrap();
    assert_eq!(body_string(res).await, "GET /api/user/:number 42");
}

#[tokio::test]
async fn service_chain_order() {
    let log: Log = Arc::default();
    let chain = Chain::new(vec![tag("m1", Arc::clone(&log)), tag("m2", Arc::clone(&log))]);

    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.handle(Method::GET, "/", recording_endpoint(Arc::clone(&log)));
    let service = router.into_service().with_chain(chain);

    let res = service.dispatch(request(Method::GET, "/")).await.unwrap();
    assert_eq!(body_string(res).await, "ok");
    assert_eq!(
        *log.lock().unwrap(),
        ["m1 in", "m2 in", "handler", "m2 out", "m1 out"]
    );
}

#[tokio::test]
async fn chain_reuse() {
    let log: Log = Arc::default();
    let base = Chain::new(vec![tag("base", Arc::clone(&log))]);
    let extended = base.append(vec![tag("extra", Arc::clone(&log))]);
    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);
    assert!(Chain::default().is_empty());

    let first = base.then_fn(hello);
    let second = base.then_fn(echo_method);
    let res = first.call(request(Method::GET, "/")).await.unwrap();
    assert_eq!(body_string(res).await, "hello");
    let res = second.call(request(Method::PUT, "/")).await.unwrap();
    assert_eq!(body_string(res).await, "PUT");

    log.lock().unwrap().clear();
    let res = extended
        .then_fn(hello)
        .call(request(Method::GET, "/"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        *log.lock().unwrap(),
        ["base in", "extra in", "extra out", "base out"]
    );
}

#[tokio::test]
async fn service_url_query() {
    async fn limit(req: Request) -> Result<Response, Infallible> {
        let limit = queries(&req).and_then(|q| q.get("limit")).unwrap_or("none");
        Ok(Response::new(Body::from(limit.to_owned())))
    }

    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.get("/items", limit);
    let service = router
        .into_service()
        .with_chain(Chain::new(vec![url_query(), logger()]));

    let res = service
        .dispatch(request(Method::GET, "/items?limit=10&tag=a"))
        .await
        .unwrap();
    assert_eq!(body_string(res).await, "10");

    let res = service.dispatch(request(Method::GET, "/items")).await.unwrap();
    assert_eq!(body_string(res).await, "none");
}

#[tokio::test]
async fn service_path_builder() {
    let mut router: HttpRouter<SharedHandler> = HttpRouter::new();
    router.path("/echo", |route| {
        route.get(echo_method).post(echo_method);
    });
    let service = router.into_service();

    for method in vec![Method::GET, Method::POST] {
        let res = service.dispatch(request(method.clone(), "/echo")).await.unwrap();
        assert_eq!(body_string(res).await, method.as_str());
    }
    let res = service.dispatch(request(Method::PUT, "/echo")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn service_macro() {
    let service: RouterService = router_service! {
        GET "/hello" => hello,
        DELETE "/hello" => echo_method;
        _ => custom_not_found
    };

    let res = service.dispatch(request(Method::DELETE, "/hello")).await.unwrap();
    assert_eq!(body_string(res).await, "DELETE");

    let res = service.dispatch(request(Method::GET, "/other")).await.unwrap();
    assert_eq!(body_string(res).await, "nothing here");

    let plain = router_service! {
        GET "/hello" => hello,
    };
    let res = plain.dispatch(request(Method::GET, "/hello")).await.unwrap();
    assert_eq!(body_string(res).await, "hello");
}

#[tokio::test]
async fn service_trait() {
    let mut service = router_service! {
        GET "/hello" => hello
    };
    let mut clone = service.clone();

    let res = Service::call(&mut service, request(Method::GET, "/hello"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = Service::call(&mut clone, request(Method::GET, "/missing"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
