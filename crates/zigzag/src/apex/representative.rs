//! Container for a lifted representative and its point queries.

use std::collections::BTreeMap;

use serde::Serialize;

/// Coefficient of one simplex on `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment<E> {
    pub start: f64,
    pub end: f64,
    pub coeff: E,
}

impl<E> Segment<E> {
    #[inline]
    fn covers(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// One stored piece, as exposed by `ApexRepresentative::iter`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum ApexCell<E> {
    Horizontal {
        start: f64,
        end: f64,
        index: usize,
        coeff: E,
    },
    /// Zero-width contribution of a seed term at its own time.
    Vertical { time: f64, index: usize, coeff: E },
}

/// Lifted representative of one diagram point.
///
/// Invariants:
/// - Per index, segments are disjoint, ordered by `start`, and never carry
///   a zero coefficient.
/// - `changes` is sorted and free of duplicates; it holds every segment
///   endpoint and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct ApexRepresentative<E> {
    direction: (f64, f64),
    horizontal: BTreeMap<usize, Vec<Segment<E>>>,
    vertical: Vec<(f64, usize, E)>,
    changes: Vec<f64>,
}

impl<E: Copy> ApexRepresentative<E> {
    /// Empty representative for a sweep from `direction.0` to `direction.1`.
    pub fn new(direction: (f64, f64)) -> Self {
        Self {
            direction,
            horizontal: BTreeMap::new(),
            vertical: Vec::new(),
            changes: Vec::new(),
        }
    }

    /// Store `segment` under `index`. The caller keeps segments of one index
    /// disjoint.
    pub fn add(&mut self, index: usize, segment: Segment<E>) {
        let segs = self.horizontal.entry(index).or_default();
        let at = segs.partition_point(|s| s.start < segment.start);
        segs.insert(at, segment);
        self.mark(segment.start);
        self.mark(segment.end);
    }

    /// Record a zero-width cell; it does not move changepoint queries.
    pub fn add_vertical(&mut self, time: f64, index: usize, coeff: E) {
        self.vertical.push((time, index, coeff));
    }

    fn mark(&mut self, t: f64) {
        if let Err(at) = self.changes.binary_search_by(|c| c.total_cmp(&t)) {
            self.changes.insert(at, t);
        }
    }

    /// Sweep endpoints `(start, finish)` used by the lift.
    #[inline]
    pub fn direction(&self) -> (f64, f64) {
        self.direction
    }

    /// All segment endpoints, increasing.
    #[inline]
    pub fn changepoints(&self) -> &[f64] {
        &self.changes
    }

    /// Segments stored for one simplex index (empty if none).
    pub fn segments(&self, index: usize) -> &[Segment<E>] {
        self.horizontal
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Indices that carry at least one segment, increasing.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.horizontal.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    /// Representative cycle at `time`: `(index, coeff)` pairs sorted by index.
    ///
    /// A time equal to a changepoint is first moved to the midpoint with its
    /// predecessor, or with its successor when it is the first changepoint.
    /// Times covered by no segment give an empty vector.
    pub fn representative(&self, time: f64) -> Vec<(usize, E)> {
        let t = self.perturb(time);
        self.horizontal
            .iter()
            .filter_map(|(&index, segs)| {
                let k = segs.partition_point(|s| s.start <= t);
                let s = segs.get(k.checked_sub(1)?)?;
                s.covers(t).then_some((index, s.coeff))
            })
            .collect()
    }

    /// Query time after the changepoint rule; unchanged off changepoints or
    /// when the changepoint has no neighbour.
    pub fn perturb(&self, time: f64) -> f64 {
        let Ok(k) = self.changes.binary_search_by(|c| c.total_cmp(&time)) else {
            return time;
        };
        let neighbour = if k > 0 {
            self.changes.get(k - 1)
        } else {
            self.changes.get(k + 1)
        };
        neighbour.map_or(time, |&n| (n + time) / 2.0)
    }

    /// Horizontal segments (by index, then time) followed by vertical cells.
    pub fn iter(&self) -> impl Iterator<Item = ApexCell<E>> + '_ {
        let horizontal = self.horizontal.iter().flat_map(|(&index, segs)| {
            segs.iter().map(move |s| ApexCell::Horizontal {
                start: s.start,
                end: s.end,
                index,
                coeff: s.coeff,
            })
        });
        let vertical = self
            .vertical
            .iter()
            .map(|&(time, index, coeff)| ApexCell::Vertical { time, index, coeff });
        horizontal.chain(vertical)
    }
}
