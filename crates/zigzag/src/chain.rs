//! Sparse chains over a field: `(coefficient, index)` entries sorted by index.

use crate::cone::ConeFiltration;
use crate::field::Field;

/// One chain term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainEntry<E> {
    pub coeff: E,
    pub index: usize,
}

/// Chain with strictly increasing indices and no zero coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<E> {
    entries: Vec<ChainEntry<E>>,
}

impl<E> Default for Chain<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Copy> Chain<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from unordered terms, summing repeated indices and dropping zeros.
    pub fn from_terms<F: Field<Elem = E>>(
        terms: impl IntoIterator<Item = (E, usize)>,
        field: &F,
    ) -> Self {
        let mut raw: Vec<ChainEntry<E>> = terms
            .into_iter()
            .map(|(coeff, index)| ChainEntry { coeff, index })
            .collect();
        raw.sort_by_key(|e| e.index);
        let mut entries: Vec<ChainEntry<E>> = Vec::with_capacity(raw.len());
        for e in raw {
            match entries.last_mut() {
                Some(last) if last.index == e.index => {
                    last.coeff = field.add(last.coeff, e.coeff);
                }
                _ => entries.push(e),
            }
        }
        entries.retain(|e| !field.is_zero(e.coeff));
        Self { entries }
    }

    /// Single term `coeff * e_index`.
    pub fn unit(coeff: E, index: usize) -> Self {
        Self {
            entries: vec![ChainEntry { coeff, index }],
        }
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
    pub fn iter(&self) -> std::slice::Iter<'_, ChainEntry<E>> {
        self.entries.iter()
    }

    /// Entry with the largest index (the pivot).
    #[inline]
    pub fn low(&self) -> Option<&ChainEntry<E>> {
        self.entries.last()
    }

    /// `self += m * other`, merging two sorted streams.
    pub fn add_scaled<F: Field<Elem = E>>(&mut self, m: E, other: &Chain<E>, field: &F) {
        let mut out = Vec::with_capacity(self.entries.len() + other.entries.len());
        let (mut a, mut b) = (0usize, 0usize);
        while a < self.entries.len() && b < other.entries.len() {
            let x = self.entries[a];
            let y = other.entries[b];
            if x.index < y.index {
                out.push(x);
                a += 1;
            } else if y.index < x.index {
                out.push(ChainEntry {
                    coeff: field.mul(m, y.coeff),
                    index: y.index,
                });
                b += 1;
            } else {
                let c = field.add(x.coeff, field.mul(m, y.coeff));
                if !field.is_zero(c) {
                    out.push(ChainEntry {
                        coeff: c,
                        index: x.index,
                    });
                }
                a += 1;
                b += 1;
            }
        }
        out.extend_from_slice(&self.entries[a..]);
        out.extend(other.entries[b..].iter().map(|y| ChainEntry {
            coeff: field.mul(m, y.coeff),
            index: y.index,
        }));
        out.retain(|e| !field.is_zero(e.coeff));
        self.entries = out;
    }

    /// Drop every term whose simplex contains the cone vertex.
    pub fn restrict_to_base(&self, cone: &ConeFiltration) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .copied()
                .filter(|e| !cone[e.index].simplex.contains_cone_vertex())
                .collect(),
        }
    }

    pub fn negate<F: Field<Elem = E>>(&self, field: &F) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| ChainEntry {
                    coeff: field.neg(e.coeff),
                    index: e.index,
                })
                .collect(),
        }
    }
}

impl<'a, E> IntoIterator for &'a Chain<E> {
    type Item = &'a ChainEntry<E>;
    type IntoIter = std::slice::Iter<'a, ChainEntry<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
