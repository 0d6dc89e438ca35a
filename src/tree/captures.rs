use crate::params::{segment_index, segment_key, Params};

use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Segments of a matched path, borrowed from the path itself.
#[derive(Debug)]
pub struct Captures<'p> {
    buf: SmallVec<[&'p str; 8]>,
}

impl<'p> Captures<'p> {
    pub(super) fn new(buf: SmallVec<[&'p str; 8]>) -> Self {
        Self { buf }
    }

    /// Looks up a positional key such as `"seg2"`.
    pub fn get(&self, key: &str) -> Option<&'p str> {
        segment_index(key).and_then(|i| self.get_index(i))
    }

    pub fn get_index(&self, index: usize) -> Option<&'p str> {
        self.buf.get(index).copied()
    }

    pub fn parse<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, &'p str)> + '_ {
        self.buf.iter().enumerate().map(|(i, &v)| (segment_key(i), v))
    }

    pub fn to_params(&self) -> Params {
        self.buf.iter().copied().collect()
    }
}

impl<'p> Deref for Captures<'p> {
    type Target = [&'p str];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}
