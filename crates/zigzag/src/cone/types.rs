//! Cone filtration entries and the link-aware face lookup.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::Index;

use crate::simplex::ConeSimplex;

/// One appearance of a simplex in the cone filtration.
#[derive(Clone, Debug, PartialEq)]
pub struct ConeEntry {
    pub simplex: ConeSimplex,
    /// Insertion time for plain entries, removal time for coned ones.
    pub time: f64,
    /// Position of the previous appearance of the same geometric simplex
    /// (its own position for plain entries).
    pub link: usize,
}

impl ConeEntry {
    /// Ordering key: cone vertex first, plain before coned, plain by
    /// increasing time, coned by decreasing time, then simplex identity.
    pub fn cone_cmp(&self, other: &ConeEntry) -> Ordering {
        let key = |e: &ConeEntry| (!e.simplex.is_cone_vertex(), e.simplex.contains_cone_vertex());
        key(self)
            .cmp(&key(other))
            .then_with(|| self.signed_time().total_cmp(&other.signed_time()))
            .then_with(|| self.simplex.base().cmp(other.simplex.base()))
    }

    #[inline]
    fn signed_time(&self) -> f64 {
        if self.simplex.contains_cone_vertex() {
            -self.time
        } else {
            self.time
        }
    }
}

/// Ordinary filtration encoding a zigzag through the cone vertex.
///
/// Invariants:
/// - Entry 0 is the cone vertex.
/// - Every face of an entry appears at an earlier position.
/// - Immutable after `build`; shared read-only by reduction and lifting.
#[derive(Clone, Debug)]
pub struct ConeFiltration {
    pub(super) entries: Vec<ConeEntry>,
    /// Positions of each simplex, increasing.
    pub(super) positions: HashMap<ConeSimplex, Vec<usize>>,
}

impl ConeFiltration {
    pub(super) fn from_sorted(entries: Vec<ConeEntry>) -> Self {
        let mut positions: HashMap<ConeSimplex, Vec<usize>> = HashMap::new();
        for (i, e) in entries.iter().enumerate() {
            positions.entry(e.simplex.clone()).or_default().push(i);
        }
        Self { entries, positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&ConeEntry> {
        self.entries.get(i)
    }

    #[inline]
    pub fn entries(&self) -> &[ConeEntry] {
        &self.entries
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ConeEntry> {
        self.entries.iter()
    }

    #[inline]
    pub fn is_cone_vertex(&self, i: usize) -> bool {
        self.entries
            .get(i)
            .is_some_and(|e| e.simplex.is_cone_vertex())
    }

    /// Position of `face` as seen from the entry at `upper`.
    ///
    /// The linked appearance wins if it holds `face` (the base of a coned
    /// entry); otherwise the latest appearance strictly before `upper`.
    ///
    /// Nothing checks that this appearance is still present at `upper`'s
    /// time. A zigzag that inserts a coface while one of its faces is
    /// removed resolves the face to its stale earlier appearance, and the
    /// reduction then yields wrong pairs without an error.
    pub fn index_of(&self, face: &ConeSimplex, upper: usize) -> Option<usize> {
        let link = self.entries.get(upper)?.link;
        if self.entries[link].simplex == *face {
            return Some(link);
        }
        let positions = self.positions.get(face)?;
        let k = positions.partition_point(|&p| p < upper);
        k.checked_sub(1).map(|k| positions[k])
    }
}

impl Index<usize> for ConeFiltration {
    type Output = ConeEntry;

    #[inline]
    fn index(&self, i: usize) -> &ConeEntry {
        &self.entries[i]
    }
}

impl<'a> IntoIterator for &'a ConeFiltration {
    type Item = &'a ConeEntry;
    type IntoIter = std::slice::Iter<'a, ConeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
