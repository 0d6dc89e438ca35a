use http::Method;

/// Represents errors that can occur when registering a route.
///
/// These are configuration errors: the panicking registration methods abort
/// with them, the `try_*` family hands them back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// The pattern is empty or does not start with `/`.
    #[error("path is invalid ({0})")]
    BadPath(String),

    /// The method is not part of the router's allow-list.
    #[error("method is not allowed ({0})")]
    BadMethod(Method),

    /// A `#<regex>` segment failed to compile.
    #[error("regex segment {segment:?} is malformed: {source}")]
    BadRegex {
        segment: String,
        #[source]
        source: regex::Error,
    },
}

impl InsertError {
    pub(crate) fn bad_path(msg: impl Into<String>) -> Self {
        Self::BadPath(msg.into())
    }

    /// A pattern must be non-empty and start with `/`.
    pub(crate) fn check_path(pattern: &str) -> Result<(), Self> {
        if pattern.is_empty() {
            return Err(Self::bad_path("path is empty"));
        }
        if !pattern.starts_with('/') {
            return Err(Self::bad_path("path does not start with a /"));
        }
        Ok(())
    }
}

/// A failed match attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// No registered pattern matches the path.
    #[error("matching route not found")]
    NotFound,

    /// The request method is not part of the allow-list.
    #[error("unknown method: {0}")]
    UnknownMethod(Method),

    /// A route matched the path but has no handler for the method.
    #[error("route has no handler for method {0}")]
    MethodNotRegistered(Method),
}
