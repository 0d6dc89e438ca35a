use std::collections::HashMap;
use std::iter::{FromIterator, FusedIterator};
use std::str::FromStr;

const KEY_PREFIX: &str = "seg";

#[inline]
pub(crate) fn segment_key(index: usize) -> String {
    format!("{}{}", KEY_PREFIX, index)
}

/// Parses `"segN"` back into `N`. Leading zeros are rejected so that every
/// index has exactly one key.
pub(crate) fn segment_index(key: &str) -> Option<usize> {
    let digits = key.strip_prefix(KEY_PREFIX)?;
    if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Owned route parameters of a matched request.
///
/// Every segment of the request path is recorded under its positional key
/// `"seg0"`, `"seg1"`, ...; placeholders are not named.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<String>,
}

impl Params {
    pub fn get(&self, key: &str) -> Option<&str> {
        segment_index(key).and_then(|i| self.get_index(i))
    }

    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn parse<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.values.iter().enumerate(),
        }
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        self.iter().map(|(k, v)| (k, v.to_owned())).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Params {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct Iter<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (String, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (i, v) = self.inner.next()?;
        Some((segment_key(i), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
