use super::node::Node;
use super::{Captures, Tree};

use crate::error::{InsertError, MatchError};
use crate::route::Route;

impl<H> Tree<H> {
    pub fn new() -> Self {
        Self::with_anchored_regex(false)
    }

    /// With `anchored` set, every `#<regex>` segment must match the whole
    /// request segment instead of any part of it.
    pub fn with_anchored_regex(anchored: bool) -> Self {
        Self::with_anchoring(anchored, false)
    }

    /// `regex` anchors `#<regex>` segments. `params` makes `:string` and
    /// `:number` match only segments made entirely of letters or digits;
    /// by default a single letter or digit anywhere in the segment is enough.
    pub fn with_anchoring(regex: bool, params: bool) -> Self {
        Self {
            root: Node::root(),
            anchored_regex: regex,
            anchored_params: params,
        }
    }

    pub fn root(&self) -> &Node<H> {
        &self.root
    }

    pub fn anchored_regex(&self) -> bool {
        self.anchored_regex
    }

    pub fn anchored_params(&self) -> bool {
        self.anchored_params
    }

    /// Inserts `route`, merging it into the route already registered under
    /// the same pattern. Returns the route that now lives in the tree.
    ///
    /// # Panics
    /// Panics if the pattern does not start with `/` or holds a malformed
    /// regex segment.
    pub fn insert(&mut self, route: Route<H>) -> &mut Route<H> {
        let pattern = route.shared_pattern();
        match self.insert_route(route) {
            Ok(route) => route,
            Err(e) => panic!("{}: pattern = {:?}", e, &*pattern),
        }
    }

    pub fn try_insert(&mut self, route: Route<H>) -> Result<&mut Route<H>, InsertError> {
        self.insert_route(route)
    }

    /// Finds the route for a concrete request path.
    pub fn find<'s, 'p>(
        &'s self,
        path: &'p str,
    ) -> Result<(&'s Route<H>, Captures<'p>), MatchError> {
        self.find_route(path)
    }
}

impl<H> Default for Tree<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_simple() {
    use http::Method;

    let mut tree: Tree<usize> = Tree::new();
    tree.insert(Route::new("/api/user/:number/comments").with_handler(Method::GET, 1));
    tree.insert(Route::new("/api/user/donutloop").with_handler(Method::GET, 2));
    tree.insert(Route::new("/").with_handler(Method::GET, 3));

    let cases: &[(&str, usize, &[&str])] = &[
        ("/api/user/42/comments", 1, &["api", "user", "42", "comments"]),
        ("/api/user/donutloop", 2, &["api", "user", "donutloop"]),
        ("/", 3, &[]),
    ];

    for &(path, data, captures) in cases {
        let (route, caps) = tree.find(path).unwrap();
        assert_eq!(route.handler(&Method::GET), Some(&data));
        assert_eq!(&*caps, captures);
    }

    assert_eq!(tree.find("").unwrap_err(), MatchError::NotFound);
    assert_eq!(tree.find("/api/user").unwrap_err(), MatchError::NotFound);
}
