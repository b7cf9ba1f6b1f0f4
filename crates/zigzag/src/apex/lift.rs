//! Seed selection and the boundary sweep.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::cone::ConeFiltration;
use crate::diagram::{pair_type, DiagramPoint, PointType, ZigzagDiagrams};
use crate::error::{Result, ZigzagError};
use crate::field::Field;
use crate::reduction::ReducedMatrix;

use super::representative::{ApexRepresentative, Segment};

/// Coefficient type of a reduction's field.
type Elem<R> = <<R as ReducedMatrix>::Field as Field>::Elem;

/// Lift one diagram point into its apex representative.
///
/// | type            | seed           | sweep            | correction     |
/// |-----------------|----------------|------------------|----------------|
/// | ordinary        | `V[j]`         | death → birth    | none           |
/// | relative        | `R[j]` on base | birth → death    | none           |
/// | open–open       | `R[j]`         | death → birth    | none           |
/// | closed–closed   | `V[j]` on base | birth → death    | `-R[j]` on base|
///
/// `j` is the partner of `point.origin`. Fails with `InconsistentReduction`
/// if the origin is unpaired or its pair no longer classifies as
/// `point.kind`.
pub fn lift<R: ReducedMatrix>(
    point: &DiagramPoint,
    reduced: &R,
    cone: &ConeFiltration,
) -> Result<ApexRepresentative<Elem<R>>> {
    let i = point.origin;
    if i == 0 || i >= cone.len() || reduced.len() != cone.len() {
        return Err(ZigzagError::inconsistent(format!(
            "origin {i} is outside the reduction ({} columns, {} entries)",
            reduced.len(),
            cone.len()
        )));
    }
    let j = reduced
        .pair(i)
        .ok_or_else(|| ZigzagError::inconsistent(format!("origin {i} is unpaired")))?;
    if j <= i || j >= cone.len() || reduced.pair(j) != Some(i) {
        return Err(ZigzagError::inconsistent(format!(
            "origin {i} is not the positive end of a pair (partner {j})"
        )));
    }
    let kind = pair_type(cone, i, Some(j));
    if kind != point.kind {
        return Err(ZigzagError::inconsistent(format!(
            "pair ({i}, {j}) classifies as {}, point says {}",
            kind.label(),
            point.kind.label()
        )));
    }

    let field = reduced.field();
    let (birth, death) = (point.birth, point.death);
    trace!(i, j, kind = kind.label(), birth, death, "lifting point");
    match kind {
        PointType::Ordinary => lift_cycle(reduced.v_column(j), (death, birth), None, cone, field),
        PointType::Relative => lift_cycle(
            &reduced.r_column(j).restrict_to_base(cone),
            (birth, death),
            None,
            cone,
            field,
        ),
        PointType::ExtendedOpen => {
            lift_cycle(reduced.r_column(j), (death, birth), None, cone, field)
        }
        PointType::ExtendedClosed => {
            // the w row is dropped, so a 0-dimensional R[j] loses its w term here
            let correction = reduced.r_column(j).restrict_to_base(cone).negate(field);
            lift_cycle(
                &reduced.v_column(j).restrict_to_base(cone),
                (birth, death),
                Some(&correction),
                cone,
                field,
            )
        }
    }
}

/// Sweep the boundary of `seed` from `start` to `finish`.
///
/// Seed terms whose time lies in the closed window between the endpoints
/// contribute their signed boundary faces at that time (faces equal to the
/// cone vertex are skipped) and are kept as vertical cells. `correction`
/// terms enter at `start`. Per face, contributions are summed in sweep
/// order; equal times collapse to the last running total, and a face whose
/// total is still nonzero at the end is closed at `finish`. Between two
/// consecutive events the total after the earlier event (in sweep order)
/// holds; zero totals store nothing.
pub fn lift_cycle<F: Field>(
    seed: &Chain<F::Elem>,
    (start, finish): (f64, f64),
    correction: Option<&Chain<F::Elem>>,
    cone: &ConeFiltration,
    field: &F,
) -> Result<ApexRepresentative<F::Elem>> {
    let forward = start <= finish;
    let (lo, hi) = if forward {
        (start, finish)
    } else {
        (finish, start)
    };
    let mut rep = ApexRepresentative::new((start, finish));

    let mut events: BTreeMap<usize, Vec<(f64, F::Elem)>> = BTreeMap::new();
    if let Some(correction) = correction {
        for term in correction {
            events
                .entry(term.index)
                .or_default()
                .push((start, term.coeff));
        }
    }

    let mut cofaces: BTreeMap<usize, Vec<(f64, F::Elem)>> = BTreeMap::new();
    for term in seed {
        let entry = cone.get(term.index).ok_or_else(|| {
            ZigzagError::inconsistent(format!("seed index {} is not in the filtration", term.index))
        })?;
        if !(lo <= entry.time && entry.time <= hi) {
            continue;
        }
        rep.add_vertical(entry.time, term.index, term.coeff);
        let mut sign = field.id();
        for face in entry.simplex.boundary() {
            let idx = cone.index_of(&face, term.index).ok_or_else(|| {
                ZigzagError::inconsistent(format!(
                    "face {face} of seed index {} is not in the filtration",
                    term.index
                ))
            })?;
            if idx == 0 {
                if !face.is_cone_vertex() {
                    return Err(ZigzagError::inconsistent(format!(
                        "face {face} resolved to the cone vertex"
                    )));
                }
            } else {
                cofaces
                    .entry(idx)
                    .or_default()
                    .push((entry.time, field.mul(sign, term.coeff)));
            }
            sign = field.neg(sign);
        }
    }
    for (idx, mut list) in cofaces {
        if forward {
            list.sort_by(|a, b| a.0.total_cmp(&b.0));
        } else {
            list.sort_by(|a, b| b.0.total_cmp(&a.0));
        }
        events.entry(idx).or_default().extend(list);
    }

    for (idx, deltas) in events {
        let mut total = field.zero();
        let mut runs: Vec<(f64, F::Elem)> = Vec::with_capacity(deltas.len() + 1);
        for (t, d) in deltas {
            total = field.add(total, d);
            record(&mut runs, t, total);
        }
        if !field.is_zero(total) {
            record(&mut runs, finish, field.zero());
        }
        for w in runs.windows(2) {
            let ((t1, c), (t2, _)) = (w[0], w[1]);
            if field.is_zero(c) {
                continue;
            }
            let (a, b) = if forward { (t1, t2) } else { (t2, t1) };
            rep.add(
                idx,
                Segment {
                    start: a,
                    end: b,
                    coeff: c,
                },
            );
        }
    }
    Ok(rep)
}

/// Append a running total, replacing the previous one at the same time.
fn record<E>(runs: &mut Vec<(f64, E)>, t: f64, total: E) {
    match runs.last_mut() {
        Some(last) if last.0 == t => last.1 = total,
        _ => runs.push((t, total)),
    }
}

/// Lift every point of `diagrams` in parallel, paired with its point.
pub fn lift_all<R: ReducedMatrix>(
    diagrams: &ZigzagDiagrams,
    reduced: &R,
    cone: &ConeFiltration,
) -> Result<Vec<(DiagramPoint, ApexRepresentative<Elem<R>>)>> {
    let points: Vec<DiagramPoint> = diagrams.iter().copied().collect();
    let lifted: Vec<_> = points
        .par_iter()
        .map(|p| lift(p, reduced, cone).map(|rep| (*p, rep)))
        .collect::<Result<_>>()?;
    debug!(points = lifted.len(), "apex representatives lifted");
    Ok(lifted)
}
