use super::HttpRouter;

use crate::error::MatchError;
use crate::params::Params;
use crate::route::Route;

use std::borrow::Cow;

use http::{Method, Uri};
use smallvec::SmallVec;
use tracing::{debug, trace};

/// A successful lookup.
#[derive(Debug)]
pub struct Match<'r, H> {
    pub route: &'r Route<H>,
    pub data: &'r H,
    pub params: Params,
}

/// Outcome of [`HttpRouter::lookup`].
#[derive(Debug)]
pub enum Lookup<'r, H> {
    Found(Match<'r, H>),
    /// The path is not canonical; the client should retry at this location.
    Redirect(String),
    NotFound(MatchError),
}

impl<H> HttpRouter<H> {
    /// Resolves a request: method check, decoding, path clean-up and case
    /// folding as configured, then the tree lookup.
    pub fn lookup<'r>(&'r self, method: &Method, uri: &Uri) -> Lookup<'r, H> {
        if !self.methods().contains(method) {
            debug!("unknown method {} for {}", method, uri);
            return Lookup::NotFound(MatchError::UnknownMethod(method.clone()));
        }

        let options = self.router_options();
        let raw = uri.path();

        let path = if options.use_encoded_path {
            Cow::Borrowed(raw)
        } else {
            decode_path(raw)
        };

        if !options.skip_clean {
            let cleaned = clean_path(&path);
            if cleaned != path {
                let location = match uri.query() {
                    Some(query) => format!("{}?{}", cleaned, query),
                    None => cleaned.into_owned(),
                };
                debug!("redirecting {} to {}", raw, location);
                return Lookup::Redirect(location);
            }
        }

        let path = if options.case_sensitive_url {
            path
        } else {
            fold_case(path)
        };

        trace!("lookup {} {}", method, path);

        match self.find(method, &path) {
            Ok(m) => Lookup::Found(m),
            Err(e) => {
                debug!("no route for {} {}: {}", method, path, e);
                Lookup::NotFound(e)
            }
        }
    }
}

fn decode_path(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!("path {:?} is not valid utf-8 once decoded: {}", raw, e);
            Cow::Borrowed(raw)
        }
    }
}

fn fold_case(path: Cow<'_, str>) -> Cow<'_, str> {
    if path.chars().any(char::is_uppercase) {
        Cow::Owned(path.to_lowercase())
    } else {
        path
    }
}

/// Returns the canonical form of `p`: a leading `/`, no empty, `.` or `..`
/// elements, and the trailing slash kept unless the result is `/`.
pub fn clean_path(p: &str) -> Cow<'_, str> {
    if p.is_empty() {
        return Cow::Borrowed("/");
    }

    let mut stack: SmallVec<[&str; 8]> = SmallVec::new();
    for seg in p.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            s => stack.push(s),
        }
    }

    let mut out = String::with_capacity(p.len() + 1);
    for seg in &stack {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    } else if p.ends_with('/') {
        out.push('/');
    }

    if out == p {
        Cow::Borrowed(p)
    } else {
        Cow::Owned(out)
    }
}
