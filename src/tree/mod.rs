//! The segment trie.
//!
//! Each [`Node`] stands for one whole path segment. Children are partitioned
//! into literal, parameter and regex collections and kept in insertion
//! order; lookup tries regex children first, then literal, then parameter,
//! and commits to the first match at every level.
//!
//! `insert` requires `&mut self` and `find` only `&self`, so a tree that has
//! been fully built can be shared between threads and searched without
//! locking. Registering routes after serving has started needs an outer
//! lock chosen by the caller.

mod captures;
mod core;
mod imp;
mod node;

pub use self::captures::Captures;
pub use self::node::{classify, Node, SegmentKind};

#[derive(Debug)]
pub struct Tree<H> {
    root: Node<H>,
    anchored_regex: bool,
    anchored_params: bool,
}
