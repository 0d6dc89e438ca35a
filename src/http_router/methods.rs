use http::Method;

use std::collections::HashSet;

/// The method allow-list of a router.
///
/// Defaults to `GET, POST, PUT, DELETE, PATCH, OPTIONS, HEAD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Methods {
    set: HashSet<Method>,
}

impl Methods {
    pub fn empty() -> Self {
        Self {
            set: HashSet::new(),
        }
    }

    pub fn insert(&mut self, method: Method) -> bool {
        self.set.insert(method)
    }

    pub fn remove(&mut self, method: &Method) -> bool {
        self.set.remove(method)
    }

    pub fn contains(&self, method: &Method) -> bool {
        self.set.contains(method)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> + '_ {
        self.set.iter()
    }
}

impl Default for Methods {
    fn default() -> Self {
        let set = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
            Method::HEAD,
        ]
        .iter()
        .cloned()
        .collect();
        Self { set }
    }
}
