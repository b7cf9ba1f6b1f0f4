//! Zigzag diagrams from a reduced cone filtration.
//!
//! Every positive index `i` with partner `j > i` becomes one point, typed by
//! which of the two simplices contains the cone vertex:
//!
//! | i coned | j coned | type            | dim       | (birth, death)   |
//! |---------|---------|-----------------|-----------|------------------|
//! | no      | no      | ordinary  (co)  | dim f[i]  | (t_i, t_j)       |
//! | yes     | yes     | relative  (oc)  | dim f[i]-1| (t_j, t_i)       |
//! | no      | yes     | open–open (oo)  | dim f[i]-1| (t_j, t_i), t_i > t_j |
//! | no      | yes     | closed–closed   | dim f[i]  | (t_i, t_j), otherwise |
//!
//! An unpaired positive index is reported against a virtual coned partner
//! at +∞.

use serde::Serialize;
use tracing::{debug, trace};

use crate::cone::ConeFiltration;
use crate::error::{Result, ZigzagError};
use crate::reduction::ReducedMatrix;

/// Interval type of a zigzag point (which endpoints are closed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PointType {
    /// closed–open
    Ordinary,
    /// open–closed
    Relative,
    /// open–open
    ExtendedOpen,
    /// closed–closed
    ExtendedClosed,
}

impl PointType {
    pub const ALL: [PointType; 4] = [
        PointType::Ordinary,
        PointType::Relative,
        PointType::ExtendedOpen,
        PointType::ExtendedClosed,
    ];

    /// Short endpoint label: `co`, `oc`, `oo`, `cc`.
    pub fn label(self) -> &'static str {
        match self {
            PointType::Ordinary => "co",
            PointType::Relative => "oc",
            PointType::ExtendedOpen => "oo",
            PointType::ExtendedClosed => "cc",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// One point of a zigzag diagram; `origin` is the positive cone index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DiagramPoint {
    pub birth: f64,
    pub death: f64,
    pub dim: usize,
    pub kind: PointType,
    pub origin: usize,
}

/// Classification settings.
#[derive(Clone, Copy, Debug)]
pub struct ClassifyCfg {
    /// Keep zero-length points (`birth == death`).
    pub include_diagonal: bool,
}

impl Default for ClassifyCfg {
    fn default() -> Self {
        Self {
            include_diagonal: true,
        }
    }
}

/// Points bucketed by dimension, then by `PointType`.
#[derive(Clone, Debug, Default)]
pub struct ZigzagDiagrams {
    dims: Vec<[Vec<DiagramPoint>; 4]>,
}

impl ZigzagDiagrams {
    fn push(&mut self, p: DiagramPoint) {
        while self.dims.len() <= p.dim {
            self.dims.push(Default::default());
        }
        self.dims[p.dim][p.kind.slot()].push(p);
    }

    /// Number of dimension buckets (highest dimension + 1).
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims.len()
    }

    pub fn get(&self, dim: usize, kind: PointType) -> &[DiagramPoint] {
        self.dims
            .get(dim)
            .map(|d| d[kind.slot()].as_slice())
            .unwrap_or(&[])
    }

    /// All points, by dimension then type.
    pub fn iter(&self) -> impl Iterator<Item = &DiagramPoint> + '_ {
        self.dims.iter().flat_map(|d| d.iter().flatten())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Which of the four types the pair `(i, j)` belongs to. `j == None` is a
/// virtual coned partner at +∞.
pub(crate) fn pair_type(cone: &ConeFiltration, i: usize, j: Option<usize>) -> PointType {
    let i_cone = cone[i].simplex.contains_cone_vertex();
    let (j_cone, j_time) = match j {
        Some(j) => (cone[j].simplex.contains_cone_vertex(), cone[j].time),
        None => (true, f64::INFINITY),
    };
    match (i_cone, j_cone) {
        (false, false) => PointType::Ordinary,
        (true, true) => PointType::Relative,
        _ if cone[i].time > j_time => PointType::ExtendedOpen,
        _ => PointType::ExtendedClosed,
    }
}

/// Classify every pair of the reduction into per-dimension, per-type diagrams.
pub fn classify<R: ReducedMatrix>(
    reduced: &R,
    cone: &ConeFiltration,
    cfg: ClassifyCfg,
) -> Result<ZigzagDiagrams> {
    if reduced.len() != cone.len() {
        return Err(ZigzagError::inconsistent(format!(
            "reduction has {} columns, filtration has {} entries",
            reduced.len(),
            cone.len()
        )));
    }
    let mut out = ZigzagDiagrams::default();
    let mut skipped = 0usize;
    for i in 1..cone.len() {
        let j = reduced.pair(i);
        if let Some(j) = j {
            if j >= cone.len() || reduced.pair(j) != Some(i) {
                return Err(ZigzagError::inconsistent(format!(
                    "pairing is not an involution at {i} -> {j}"
                )));
            }
            if j < i {
                continue;
            }
        }
        let ti = cone[i].time;
        let tj = j.map_or(f64::INFINITY, |j| cone[j].time);
        let dim = cone[i].simplex.dimension();
        let kind = pair_type(cone, i, j);
        let (dim, birth, death) = match kind {
            PointType::Ordinary | PointType::ExtendedClosed => (dim, ti, tj),
            PointType::Relative | PointType::ExtendedOpen => (dim.saturating_sub(1), tj, ti),
        };
        if !cfg.include_diagonal && birth == death {
            skipped += 1;
            continue;
        }
        trace!(i, j = ?j, kind = kind.label(), dim, birth, death, "point");
        out.push(DiagramPoint {
            birth,
            death,
            dim,
            kind,
            origin: i,
        });
    }
    debug!(points = out.len(), skipped, "zigzag diagrams classified");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Chain;
    use crate::field::Zp;
    use crate::fixtures::scenario;
    use crate::reduction::StandardReduction;

    fn scenario_diagrams(cfg: ClassifyCfg) -> ZigzagDiagrams {
        let cone = ConeFiltration::build(&scenario());
        let red = StandardReduction::reduce(&cone, Zp::default()).unwrap();
        classify(&red, &cone, cfg).unwrap()
    }

    fn points(d: &ZigzagDiagrams, dim: usize, kind: PointType) -> Vec<(f64, f64, usize)> {
        let mut v: Vec<_> = d
            .get(dim, kind)
            .iter()
            .map(|p| (p.birth, p.death, p.origin))
            .collect();
        v.sort_by(|a, b| a.0.total_cmp(&b.0));
        v
    }

    #[test]
    fn scenario_classification() {
        let d = scenario_diagrams(ClassifyCfg::default());
        assert_eq!(d.dims(), 2);
        assert_eq!(
            points(&d, 0, PointType::Ordinary),
            vec![(0.5, 0.8, 4), (0.7, 0.8, 5)]
        );
        assert_eq!(
            points(&d, 0, PointType::ExtendedClosed),
            vec![(0.1, 0.2, 1), (0.3, f64::INFINITY, 2), (0.4, 0.6, 3)]
        );
        assert_eq!(
            points(&d, 0, PointType::Relative),
            vec![(1.0, 1.0, 10), (1.0, 1.0, 11)]
        );
        assert_eq!(points(&d, 1, PointType::ExtendedClosed), vec![(0.9, 0.95, 8)]);
        assert!(d.get(1, PointType::Ordinary).is_empty());
        assert!(d.get(0, PointType::ExtendedOpen).is_empty());
        assert!(d.get(7, PointType::Ordinary).is_empty());
        assert_eq!(d.len(), 8);
    }

    #[test]
    fn diagonal_points_can_be_dropped() {
        let d = scenario_diagrams(ClassifyCfg {
            include_diagonal: false,
        });
        assert!(d.get(0, PointType::Relative).is_empty());
        assert_eq!(d.len(), 6);
    }

    #[test]
    fn labels_match_endpoint_types() {
        let labels: Vec<&str> = PointType::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["co", "oc", "oo", "cc"]);
    }

    /// Pairing stub for exercising the classifier without a real reduction.
    struct Pairs {
        field: Zp,
        pairs: Vec<Option<usize>>,
        empty: Chain<u32>,
    }

    impl ReducedMatrix for Pairs {
        type Field = Zp;
        fn field(&self) -> &Zp {
            &self.field
        }
        fn len(&self) -> usize {
            self.pairs.len()
        }
        fn pair(&self, i: usize) -> Option<usize> {
            self.pairs[i]
        }
        fn r_column(&self, _i: usize) -> &Chain<u32> {
            &self.empty
        }
        fn v_column(&self, _i: usize) -> &Chain<u32> {
            &self.empty
        }
    }

    #[test]
    fn extended_types_split_on_time_order() {
        // order: w, <1>@1, <0>@5, <w,0>@6, <w,1>@2
        let cone = ConeFiltration::from_parts(vec![vec![0], vec![1]], vec![
            vec![5.0, 6.0],
            vec![1.0, 2.0],
        ])
        .unwrap();
        let stub = Pairs {
            field: Zp::default(),
            pairs: vec![None, Some(3), Some(4), Some(1), Some(2)],
            empty: Chain::new(),
        };
        let d = classify(&stub, &cone, ClassifyCfg::default()).unwrap();
        // <1>@1 against <w,0>@6
        assert_eq!(points(&d, 0, PointType::ExtendedClosed), vec![(1.0, 6.0, 1)]);
        // <0>@5 against <w,1>@2 is inserted after the removal: open–open
        assert_eq!(points(&d, 0, PointType::ExtendedOpen), vec![(2.0, 5.0, 2)]);
    }

    #[test]
    fn equal_times_are_closed_closed() {
        // order: w, <1>@.5, <0>@1, <w,0>@inf, <w,1>@1
        let cone = ConeFiltration::from_parts(vec![vec![0], vec![1]], vec![
            vec![1.0],
            vec![0.5, 1.0],
        ])
        .unwrap();
        assert_eq!(pair_type(&cone, 2, Some(4)), PointType::ExtendedClosed);
        let stub = Pairs {
            field: Zp::default(),
            pairs: vec![None, Some(3), Some(4), Some(1), Some(2)],
            empty: Chain::new(),
        };
        let d = classify(&stub, &cone, ClassifyCfg::default()).unwrap();
        assert_eq!(
            points(&d, 0, PointType::ExtendedClosed),
            vec![(0.5, f64::INFINITY, 1), (1.0, 1.0, 2)]
        );
        assert!(d.get(0, PointType::ExtendedOpen).is_empty());
    }

    #[test]
    fn unpaired_index_dies_at_infinity() {
        let cone = ConeFiltration::from_parts(vec![vec![0]], vec![vec![1.0, 2.0]]).unwrap();
        let stub = Pairs {
            field: Zp::default(),
            pairs: vec![None, None, None],
            empty: Chain::new(),
        };
        let d = classify(&stub, &cone, ClassifyCfg::default()).unwrap();
        assert_eq!(
            points(&d, 0, PointType::ExtendedClosed),
            vec![(1.0, f64::INFINITY, 1)]
        );
        // the coned entry is unpaired too: relative with the virtual partner
        assert_eq!(
            points(&d, 0, PointType::Relative),
            vec![(f64::INFINITY, 2.0, 2)]
        );
    }

    #[test]
    fn non_involutive_pairing_is_rejected() {
        let cone = ConeFiltration::from_parts(vec![vec![0]], vec![vec![1.0, 2.0]]).unwrap();
        let stub = Pairs {
            field: Zp::default(),
            pairs: vec![None, Some(2), None],
            empty: Chain::new(),
        };
        let err = classify(&stub, &cone, ClassifyCfg::default()).unwrap_err();
        assert!(matches!(err, ZigzagError::InconsistentReduction(_)));
    }
}
