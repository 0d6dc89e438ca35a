#[macro_export]
macro_rules! router_service {
    {$($method:ident $pattern:expr => $handler:expr),+ ; _ => $default:expr $(,)?} => {{
        let mut __router: $crate::HttpRouter<$crate::SharedHandler> = $crate::HttpRouter::new();
        $(__router.handle($crate::Method::$method, $pattern, $handler);)+
        __router.with_default($default)
    }};

    {$($method:ident $pattern:expr => $handler:expr),+ $(,)?} => {{
        let mut __router: $crate::HttpRouter<$crate::SharedHandler> = $crate::HttpRouter::new();
        $(__router.handle($crate::Method::$method, $pattern, $handler);)+
        __router.into_service()
    }};
}
