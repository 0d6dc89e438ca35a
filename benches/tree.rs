use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use segment_mux::{HttpRouter, Method, Route, Tree};

const PATTERNS: &[&str] = &[
    "/api/user/:number/comment/:number",
    "/api/user/donutloop",
    "/api/user/:number/comments",
    "/api/user/:number/likes",
    "/api/article/golang",
    "/api/article/:number/questions/:number",
    "/api/article/:number/comment/:number/subcomment/:number",
    "/api/#^v[0-9]+$/status",
];

fn build_tree() -> Tree<usize> {
    let mut tree = Tree::new();
    for (i, p) in PATTERNS.iter().enumerate() {
        tree.insert(Route::new(p).with_handler(Method::GET, i));
    }
    tree
}

fn tree_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree-find");
    let tree = build_tree();

    group.bench_function("literal", |b| {
        b.iter(|| tree.find("/api/user/donutloop"))
    });

    group.bench_function("parameters", |b| {
        b.iter(|| tree.find("/api/article/3/comment/5/subcomment/5"))
    });

    group.bench_function("regex", |b| b.iter(|| tree.find("/api/v2/status")));

    group.bench_function("miss", |b| b.iter(|| tree.find("/api/user/42/unknown")));
}

fn router_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("router-lookup");
    let mut router: HttpRouter<usize> = HttpRouter::new();
    for (i, p) in PATTERNS.iter().enumerate() {
        router.insert(Method::GET, p, i);
    }
    let uri = "/API/User/42/Comments".parse().unwrap();

    group.bench_function("normalized", |b| {
        b.iter(|| router.lookup(&Method::GET, &uri))
    });
}

fn tree_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree-insert");

    group.bench_function("all-routes", |b| {
        b.iter_batched(Tree::new, |mut tree: Tree<usize>| {
            for (i, p) in PATTERNS.iter().enumerate() {
                tree.insert(Route::new(p).with_handler(Method::GET, i));
            }
            tree
        }, BatchSize::SmallInput)
    });
}

criterion_group!(benches, tree_find, router_lookup, tree_insert);
criterion_main!(benches);
