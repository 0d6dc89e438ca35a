//! Registration-time checks run before a route enters the tree.

use crate::error::InsertError;
use crate::http_router::Methods;

use http::Method;
use smallvec::SmallVec;

/// What a [`Validator`] gets to see about a route being registered.
#[derive(Debug)]
pub struct Registration<'a> {
    pattern: &'a str,
    methods: SmallVec<[&'a Method; 4]>,
    allowed: &'a Methods,
}

impl<'a> Registration<'a> {
    pub(crate) fn new(
        pattern: &'a str,
        methods: impl IntoIterator<Item = &'a Method>,
        allowed: &'a Methods,
    ) -> Self {
        Self {
            pattern,
            methods: methods.into_iter().collect(),
            allowed,
        }
    }

    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    /// Methods the route registers handlers for.
    pub fn methods(&self) -> &[&'a Method] {
        &self.methods
    }

    /// The router's method allow-list.
    pub fn allowed(&self) -> &'a Methods {
        self.allowed
    }
}

pub trait Validator: Send + Sync {
    fn validate(&self, registration: &Registration<'_>) -> Result<(), InsertError>;
}

impl<F> Validator for F
where
    F: Fn(&Registration<'_>) -> Result<(), InsertError> + Send + Sync,
{
    fn validate(&self, registration: &Registration<'_>) -> Result<(), InsertError> {
        (self)(registration)
    }
}

/// Requires a non-empty pattern starting with `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathValidator;

impl Validator for PathValidator {
    fn validate(&self, registration: &Registration<'_>) -> Result<(), InsertError> {
        InsertError::check_path(registration.pattern())
    }
}

/// Requires every registered method to be in the allow-list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodValidator;

impl Validator for MethodValidator {
    fn validate(&self, registration: &Registration<'_>) -> Result<(), InsertError> {
        match registration
            .methods()
            .iter()
            .find(|m| !registration.allowed().contains(m))
        {
            Some(m) => Err(InsertError::BadMethod((*m).clone())),
            None => Ok(()),
        }
    }
}
