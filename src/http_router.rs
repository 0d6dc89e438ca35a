#![forbid(unsafe_code)]

mod builder;
mod lookup;
mod methods;
mod options;
mod router_macro;

pub use self::builder::RouteBuilder;
pub use self::lookup::{clean_path, Lookup, Match};
pub use self::methods::Methods;
pub use self::options::RouterOptions;

pub use http::Method;

use crate::error::{InsertError, MatchError};
use crate::route::Route;
use crate::tree::Tree;
use crate::validator::{PathValidator, Registration, Validator};

use std::fmt;

use tracing::{debug, error};

/// Routes requests by path and method.
///
/// Registration (`insert`, `path`, ...) runs the validator set and then
/// inserts into the segment tree; failures there are configuration errors.
/// Lookups only need `&self`.
pub struct HttpRouter<H> {
    tree: Tree<H>,
    methods: Methods,
    validators: Vec<Box<dyn Validator>>,
    options: RouterOptions,
}

impl<H> HttpRouter<H> {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            tree: Tree::with_anchoring(options.anchor_regex, options.anchor_params),
            methods: Methods::default(),
            validators: vec![Box::new(PathValidator)],
            options,
        }
    }

    pub fn router_options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    /// The allow-list can only change through an exclusive borrow, so
    /// callers that mutate it while serving must hold their own lock.
    pub fn methods_mut(&mut self) -> &mut Methods {
        &mut self.methods
    }

    pub fn add_validator(&mut self, validator: impl Validator + 'static) -> &mut Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn tree(&self) -> &Tree<H> {
        &self.tree
    }

    pub fn insert(&mut self, method: Method, pattern: &str, data: H) -> &mut Self {
        self.insert_route(Route::new(pattern).with_handler(method, data))
    }

    pub fn try_insert(
        &mut self,
        method: Method,
        pattern: &str,
        data: H,
    ) -> Result<&mut Self, InsertError> {
        self.try_insert_route(Route::new(pattern).with_handler(method, data))
    }

    /// Registers several methods on one pattern in a single call.
    pub fn path(&mut self, pattern: &str, f: impl FnOnce(&mut RouteBuilder<H>)) -> &mut Self {
        let mut builder = RouteBuilder::new(pattern);
        f(&mut builder);
        self.insert_route(builder.into_route())
    }

    pub fn try_path(
        &mut self,
        pattern: &str,
        f: impl FnOnce(&mut RouteBuilder<H>),
    ) -> Result<&mut Self, InsertError> {
        let mut builder = RouteBuilder::new(pattern);
        f(&mut builder);
        self.try_insert_route(builder.into_route())
    }

    /// # Panics
    /// Panics if any validator rejects the route or the tree refuses it.
    pub fn insert_route(&mut self, route: Route<H>) -> &mut Self {
        let pattern = route.shared_pattern();
        if let Err(e) = self.try_insert_route(route) {
            panic!("{}: pattern = {:?}", e, &*pattern);
        }
        self
    }

    pub fn try_insert_route(&mut self, route: Route<H>) -> Result<&mut Self, InsertError> {
        {
            let registration = Registration::new(route.pattern(), route.methods(), &self.methods);
            for validator in &self.validators {
                if let Err(e) = validator.validate(&registration) {
                    error!("route {:?} rejected: {}", route.pattern(), e);
                    return Err(e);
                }
            }
        }

        let merged = self.tree.try_insert(route)?;
        debug!(
            "registered route {:?} with methods {:?}",
            merged.pattern(),
            merged.methods().collect::<Vec<_>>()
        );
        Ok(self)
    }

    /// Looks up `path` as given, without any normalization.
    pub fn find<'r>(&'r self, method: &Method, path: &str) -> Result<Match<'r, H>, MatchError> {
        if !self.methods.contains(method) {
            return Err(MatchError::UnknownMethod(method.clone()));
        }
        let (route, captures) = self.tree.find(path)?;
        let data = route
            .handler(method)
            .ok_or_else(|| MatchError::MethodNotRegistered(method.clone()))?;
        Ok(Match {
            route,
            data,
            params: captures.to_params(),
        })
    }
}

impl<H> Default for HttpRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: fmt::Debug> fmt::Debug for HttpRouter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRouter")
            .field("tree", &self.tree)
            .field("methods", &self.methods)
            .field("validators", &self.validators.len())
            .field("options", &self.options)
            .finish()
    }
}
