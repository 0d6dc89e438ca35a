use crate::error::InsertError;
use crate::route::Route;

use regex::Regex;

const PARAM_STRING: &str = ":string";
const PARAM_NUMBER: &str = ":number";
const REGEX_PREFIX: char = '#';

/// The three kinds of pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Matches byte-for-byte.
    Literal,
    /// `:string` or `:number`.
    Parameter,
    /// `#<regex>`.
    Regex,
}

impl SegmentKind {
    /// Lookup order within one level.
    pub(super) const PRIORITY: [SegmentKind; 3] =
        [SegmentKind::Regex, SegmentKind::Literal, SegmentKind::Parameter];

    #[inline]
    fn index(self) -> usize {
        match self {
            SegmentKind::Literal => 0,
            SegmentKind::Parameter => 1,
            SegmentKind::Regex => 2,
        }
    }
}

/// Classifies one pattern segment by its text.
pub fn classify(segment: &str) -> SegmentKind {
    if segment == PARAM_STRING || segment == PARAM_NUMBER {
        SegmentKind::Parameter
    } else if segment.starts_with(REGEX_PREFIX) {
        SegmentKind::Regex
    } else {
        SegmentKind::Literal
    }
}

/// `whole` makes a typed parameter match only segments made entirely of its
/// character class; otherwise one such character anywhere is enough.
#[derive(Debug)]
pub(super) enum Matcher {
    Literal,
    Alpha { whole: bool },
    Digit { whole: bool },
    Pattern(Regex),
}

impl Matcher {
    pub(super) fn compile(
        segment: &str,
        anchor_regex: bool,
        anchor_params: bool,
    ) -> Result<Self, InsertError> {
        let matcher = match classify(segment) {
            SegmentKind::Literal => Matcher::Literal,
            SegmentKind::Parameter if segment == PARAM_STRING => Matcher::Alpha {
                whole: anchor_params,
            },
            SegmentKind::Parameter => Matcher::Digit {
                whole: anchor_params,
            },
            SegmentKind::Regex => {
                let expr = &segment[REGEX_PREFIX.len_utf8()..];
                let compiled = if anchor_regex {
                    Regex::new(&format!("^(?:{})$", expr))
                } else {
                    Regex::new(expr)
                };
                let regex = compiled.map_err(|source| InsertError::BadRegex {
                    segment: segment.to_owned(),
                    source,
                })?;
                Matcher::Pattern(regex)
            }
        };
        Ok(matcher)
    }

    fn kind(&self) -> SegmentKind {
        match self {
            Matcher::Literal => SegmentKind::Literal,
            Matcher::Alpha { .. } | Matcher::Digit { .. } => SegmentKind::Parameter,
            Matcher::Pattern(_) => SegmentKind::Regex,
        }
    }
}

/// One path segment of a [`Tree`](super::Tree).
#[derive(Debug)]
pub struct Node<H> {
    segment: Box<str>,
    matcher: Matcher,
    is_root: bool,
    leaf: Option<Route<H>>,
    children: [Vec<Node<H>>; 3],
}

impl<H> Node<H> {
    pub(super) fn root() -> Self {
        Self {
            segment: "".into(),
            matcher: Matcher::Literal,
            is_root: true,
            leaf: None,
            children: Default::default(),
        }
    }

    pub(super) fn new(segment: &str, matcher: Matcher) -> Self {
        Self {
            segment: segment.into(),
            matcher,
            is_root: false,
            leaf: None,
            children: Default::default(),
        }
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    pub fn kind(&self) -> SegmentKind {
        classify(&self.segment)
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }

    pub fn leaf(&self) -> Option<&Route<H>> {
        self.leaf.as_ref()
    }

    /// Children of one kind, in insertion order.
    pub fn children(&self, kind: SegmentKind) -> &[Node<H>] {
        &self.children[kind.index()]
    }

    /// Appends `child` to the collection selected by its kind.
    pub(super) fn add_child(&mut self, child: Node<H>) -> &mut Node<H> {
        let children = &mut self.children[child.matcher.kind().index()];
        let idx = children.len();
        children.push(child);
        &mut children[idx]
    }

    /// Descends into the child whose segment text equals `segment`,
    /// creating it when absent.
    pub(super) fn child_or_insert(&mut self, segment: &str, matcher: Matcher) -> &mut Node<H> {
        let kind = matcher.kind();
        let pos = self.children[kind.index()]
            .iter()
            .position(|n| &*n.segment == segment);
        match pos {
            Some(i) => &mut self.children[kind.index()][i],
            None => self.add_child(Node::new(segment, matcher)),
        }
    }

    /// First child matching `part`, searching kinds by priority and
    /// children by insertion order.
    pub(super) fn match_child(&self, part: &str) -> Option<&Node<H>> {
        SegmentKind::PRIORITY.iter().find_map(|&kind| {
            self.children[kind.index()]
                .iter()
                .find(|n| n.matches(part))
        })
    }

    pub(super) fn merge_leaf(&mut self, route: Route<H>) -> &mut Route<H> {
        match self.leaf.take() {
            Some(mut existing) => {
                existing.merge(route);
                self.leaf.insert(existing)
            }
            None => self.leaf.insert(route),
        }
    }

    fn matches(&self, part: &str) -> bool {
        match &self.matcher {
            Matcher::Literal => &*self.segment == part,
            Matcher::Alpha { whole } => class_match(part, *whole, |b| b.is_ascii_alphabetic()),
            Matcher::Digit { whole } => class_match(part, *whole, |b| b.is_ascii_digit()),
            Matcher::Pattern(regex) => regex.is_match(part),
        }
    }
}

fn class_match(part: &str, whole: bool, class: impl Fn(u8) -> bool) -> bool {
    if whole {
        !part.is_empty() && part.bytes().all(&class)
    } else {
        part.bytes().any(class)
    }
}
