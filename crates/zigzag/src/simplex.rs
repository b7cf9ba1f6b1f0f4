//! Simplices and their coned counterparts.
//!
//! A `Simplex` is a sorted, duplicate-free vertex set. A `ConeSimplex` is a
//! simplex that is either plain or joined with the cone vertex `w`. The cone
//! vertex itself is the coned empty simplex, so `w` never collides with a
//! real vertex id.
//!
//! Boundary convention
//! - `w` is ordered before every real vertex, so the faces of `σ * w` are
//!   enumerated as `σ` first, then `(σ \ v_k) * w` for each vertex `v_k`.
//! - Callers attach alternating signs in enumeration order (`+, -, +, ...`).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertex label of the base complex.
pub type Vertex = u32;

/// Sorted vertex set.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Vertex>", into = "Vec<Vertex>")]
pub struct Simplex {
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Build from any vertex list; sorts and removes duplicates.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices minus one (0 for the empty simplex).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Codimension-1 faces in removal order (drop `v_0`, then `v_1`, ...).
    /// Vertices have no faces.
    pub fn faces(&self) -> impl Iterator<Item = Simplex> + '_ {
        let n = if self.vertices.len() > 1 {
            self.vertices.len()
        } else {
            0
        };
        (0..n).map(move |k| self.without(k))
    }

    /// Join with the cone vertex.
    #[inline]
    pub fn join_cone(&self) -> ConeSimplex {
        ConeSimplex::coned(self.clone())
    }

    fn without(&self, k: usize) -> Simplex {
        let mut vertices = self.vertices.clone();
        vertices.remove(k);
        Simplex { vertices }
    }
}

impl From<Vec<Vertex>> for Simplex {
    fn from(v: Vec<Vertex>) -> Self {
        Simplex::new(v)
    }
}

impl From<Simplex> for Vec<Vertex> {
    fn from(s: Simplex) -> Self {
        s.vertices
    }
}

/// Dimension first, then lexicographic on vertices.
impl Ord for Simplex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertices
            .len()
            .cmp(&other.vertices.len())
            .then_with(|| self.vertices.cmp(&other.vertices))
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (k, v) in self.vertices.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ">")
    }
}

/// A simplex of the cone complex: `base` or `base * w`.
///
/// Invariant: `base` is empty only for the cone vertex (`coned == true`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConeSimplex {
    base: Simplex,
    coned: bool,
}

impl ConeSimplex {
    /// The cone vertex `w`.
    pub fn cone_vertex() -> Self {
        Self {
            base: Simplex {
                vertices: Vec::new(),
            },
            coned: true,
        }
    }

    #[inline]
    pub fn plain(base: Simplex) -> Self {
        Self { base, coned: false }
    }

    #[inline]
    pub fn coned(base: Simplex) -> Self {
        Self { base, coned: true }
    }

    /// Geometric simplex without `w`.
    #[inline]
    pub fn base(&self) -> &Simplex {
        &self.base
    }

    #[inline]
    pub fn contains_cone_vertex(&self) -> bool {
        self.coned
    }

    #[inline]
    pub fn is_cone_vertex(&self) -> bool {
        self.coned && self.base.is_empty()
    }

    pub fn dimension(&self) -> usize {
        (self.base.len() + usize::from(self.coned)).saturating_sub(1)
    }

    /// Codimension-1 faces in signed enumeration order.
    ///
    /// Plain: faces of `base`. Coned: `base` itself, then each face of
    /// `base` joined with `w`; a coned vertex `v * w` has faces `v`, `w`.
    pub fn boundary(&self) -> Vec<ConeSimplex> {
        if !self.coned {
            return self.base.faces().map(ConeSimplex::plain).collect();
        }
        if self.base.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.base.len() + 1);
        out.push(ConeSimplex::plain(self.base.clone()));
        if self.base.len() == 1 {
            out.push(ConeSimplex::cone_vertex());
        } else {
            out.extend(self.base.faces().map(ConeSimplex::coned));
        }
        out
    }
}

impl fmt::Display for ConeSimplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.coned {
            return write!(f, "{}", self.base);
        }
        write!(f, "<w")?;
        for v in self.base.vertices() {
            write!(f, ",{v}")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_and_dedups() {
        let s = Simplex::new([3, 1, 3, 2]);
        assert_eq!(s.vertices(), &[1, 2, 3]);
        assert_eq!(s.dimension(), 2);
    }

    #[test]
    fn order_is_dimension_then_lexicographic() {
        let v = Simplex::new([5]);
        let e = Simplex::new([0, 1]);
        let e2 = Simplex::new([0, 2]);
        assert!(v < e);
        assert!(e < e2);
    }

    #[test]
    fn plain_boundary_drops_each_vertex_in_order() {
        let t = ConeSimplex::plain(Simplex::new([0, 1, 2]));
        let faces = t.boundary();
        assert_eq!(
            faces,
            vec![
                ConeSimplex::plain(Simplex::new([1, 2])),
                ConeSimplex::plain(Simplex::new([0, 2])),
                ConeSimplex::plain(Simplex::new([0, 1])),
            ]
        );
        assert!(ConeSimplex::plain(Simplex::new([4])).boundary().is_empty());
    }

    #[test]
    fn coned_boundary_starts_with_base() {
        let e = Simplex::new([0, 1]).join_cone();
        assert_eq!(e.dimension(), 2);
        assert_eq!(
            e.boundary(),
            vec![
                ConeSimplex::plain(Simplex::new([0, 1])),
                ConeSimplex::coned(Simplex::new([1])),
                ConeSimplex::coned(Simplex::new([0])),
            ]
        );
        let v = Simplex::new([7]).join_cone();
        assert_eq!(
            v.boundary(),
            vec![
                ConeSimplex::plain(Simplex::new([7])),
                ConeSimplex::cone_vertex()
            ]
        );
    }

    #[test]
    fn cone_vertex_predicates() {
        let w = ConeSimplex::cone_vertex();
        assert!(w.is_cone_vertex());
        assert!(w.contains_cone_vertex());
        assert_eq!(w.dimension(), 0);
        assert!(w.boundary().is_empty());
        let v = Simplex::new([0]).join_cone();
        assert!(!v.is_cone_vertex());
        assert!(v.contains_cone_vertex());
        assert_eq!(format!("{v}"), "<w,0>");
    }
}
