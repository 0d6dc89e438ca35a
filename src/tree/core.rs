use super::node::{Matcher, Node};
use super::{Captures, Tree};

use crate::error::{InsertError, MatchError};
use crate::route::Route;

use smallvec::SmallVec;
use tracing::debug;

const SLASH: char = '/';

impl<H> Tree<H> {
    pub(super) fn insert_route(&mut self, route: Route<H>) -> Result<&mut Route<H>, InsertError> {
        let pattern = route.shared_pattern();
        InsertError::check_path(&pattern)?;

        let parts: SmallVec<[&str; 8]> = split_segments(&pattern).collect();

        // compile every segment up front so a bad regex leaves the tree untouched
        let matchers = parts
            .iter()
            .map(|part| Matcher::compile(part, self.anchored_regex, self.anchored_params))
            .collect::<Result<SmallVec<[Matcher; 8]>, _>>()?;

        let mut node: &mut Node<H> = &mut self.root;
        for (&part, matcher) in parts.iter().zip(matchers) {
            node = node.child_or_insert(part, matcher);
        }

        if node.is_leaf() {
            debug!("merging handlers into route {:?}", &*pattern);
        }
        Ok(node.merge_leaf(route))
    }

    pub(super) fn find_route<'s, 'p>(
        &'s self,
        path: &'p str,
    ) -> Result<(&'s Route<H>, Captures<'p>), MatchError> {
        if path.is_empty() {
            return Err(MatchError::NotFound);
        }

        let parts: SmallVec<[&'p str; 8]> = split_segments(path).collect();

        let mut node: &Node<H> = &self.root;
        for &part in parts.iter() {
            node = node.match_child(part).ok_or(MatchError::NotFound)?;
        }

        let route = node.leaf().ok_or(MatchError::NotFound)?;
        Ok((route, Captures::new(parts)))
    }
}

#[inline]
pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SLASH).filter(|s| !s.is_empty())
}
