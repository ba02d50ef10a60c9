//! Token storage for the tree
//!
//! All appended sub-sequences are concatenated into one buffer, each
//! capped with a terminal that is minted here and never reused. The
//! boundaries recorded per sub-sequence map global positions back to
//! `(sequence, offset)` pairs.

use super::types::{Position, SequenceId};
use std::fmt;
use std::ops::Range;

/// Element of the concatenated sequence
///
/// Terminals compare unequal to every token and to each other; the
/// derived ordering places every terminal after every token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Item<T> {
    Token(T),
    Terminal(SequenceId),
}

impl<T> Item<T> {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Item::Terminal(_))
    }

    /// The wrapped token, `None` for terminals
    #[inline]
    pub fn token(&self) -> Option<&T> {
        match self {
            Item::Token(token) => Some(token),
            Item::Terminal(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Token(token) => token.fmt(f),
            Item::Terminal(id) => write!(f, "${}", id),
        }
    }
}

/// Sub-sequence boundary in the concatenated sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceBoundary {
    pub id: SequenceId,
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive, before the terminal)
    pub end: Position,
}

impl SequenceBoundary {
    /// Position of this sub-sequence's terminal
    #[inline]
    pub fn terminal(&self) -> Position {
        self.end
    }

    /// Number of tokens, terminal excluded
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Growable storage for tokens and terminals of every sub-sequence
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    items: Vec<Item<T>>,
    boundaries: Vec<SequenceBoundary>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            boundaries: Vec::new(),
        }
    }

    /// Append a sub-sequence followed by a freshly minted terminal
    pub fn add<I>(&mut self, tokens: I) -> SequenceId
    where
        I: IntoIterator<Item = T>,
    {
        let id = SequenceId(self.boundaries.len() as u32);
        let start = self.items.len();

        self.items.extend(tokens.into_iter().map(Item::Token));
        let end = self.items.len();

        self.items.push(Item::Terminal(id));
        self.boundaries.push(SequenceBoundary { id, start, end });

        id
    }

    /// Total number of items, terminals included
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Item<T>> {
        self.items.get(pos)
    }

    /// Items covered by a half-open range of global positions
    #[inline]
    pub fn items(&self, range: Range<Position>) -> &[Item<T>] {
        &self.items[range]
    }

    pub fn boundaries(&self) -> &[SequenceBoundary] {
        &self.boundaries
    }

    pub fn boundary(&self, id: SequenceId) -> Option<&SequenceBoundary> {
        self.boundaries.get(id.index())
    }

    pub fn sequence_count(&self) -> usize {
        self.boundaries.len()
    }

    /// The tokens of one sub-sequence, terminal excluded
    pub fn tokens(&self, id: SequenceId) -> Option<&[Item<T>]> {
        self.boundary(id).map(|b| &self.items[b.start..b.end])
    }

    /// Map a global position to the sub-sequence containing it
    ///
    /// Terminal positions belong to the sub-sequence they close.
    pub fn position_to_sequence(&self, pos: Position) -> Option<(SequenceId, usize)> {
        let idx = self
            .boundaries
            .binary_search_by(|b| {
                if pos < b.start {
                    std::cmp::Ordering::Greater
                } else if pos > b.terminal() {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()?;

        let boundary = &self.boundaries[idx];
        Some((boundary.id, pos - boundary.start))
    }
}

impl<T> std::ops::Index<Position> for Sequence<T> {
    type Output = Item<T>;

    #[inline]
    fn index(&self, pos: Position) -> &Item<T> {
        &self.items[pos]
    }
}
