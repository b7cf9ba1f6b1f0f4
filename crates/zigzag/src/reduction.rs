//! Boundary-matrix reduction of a cone filtration (R = D·V).
//!
//! `ReducedMatrix` is everything the classifier and the lifter read from a
//! reduction engine. `StandardReduction` is the textbook column algorithm
//! with V tracked alongside R; any other engine can stand in for it.

use tracing::debug;

use crate::chain::Chain;
use crate::cone::ConeFiltration;
use crate::error::{Result, ZigzagError};
use crate::field::Field;

/// Column access to a reduced boundary matrix.
pub trait ReducedMatrix: Sync {
    type Field: Field;

    fn field(&self) -> &Self::Field;

    /// Number of columns (equals the filtration length).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Matched index, or `None` for an unpaired column.
    fn pair(&self, i: usize) -> Option<usize>;

    fn r_column(&self, i: usize) -> &Chain<<Self::Field as Field>::Elem>;

    fn v_column(&self, i: usize) -> &Chain<<Self::Field as Field>::Elem>;
}

/// Standard left-to-right column reduction.
#[derive(Clone, Debug)]
pub struct StandardReduction<F: Field> {
    field: F,
    r: Vec<Chain<F::Elem>>,
    v: Vec<Chain<F::Elem>>,
    pairs: Vec<Option<usize>>,
}

impl<F: Field> StandardReduction<F> {
    /// Reduce the signed boundary matrix of `cone`.
    pub fn reduce(cone: &ConeFiltration, field: F) -> Result<Self> {
        let n = cone.len();
        let mut r: Vec<Chain<F::Elem>> = Vec::with_capacity(n);
        let mut v: Vec<Chain<F::Elem>> = Vec::with_capacity(n);
        let mut pairs: Vec<Option<usize>> = vec![None; n];
        // column whose pivot is the given row
        let mut low_owner: Vec<Option<usize>> = vec![None; n];

        for (i, entry) in cone.iter().enumerate() {
            let mut sign = field.id();
            let mut terms = Vec::new();
            for face in entry.simplex.boundary() {
                let idx = cone.index_of(&face, i).ok_or_else(|| {
                    ZigzagError::inconsistent(format!(
                        "face {face} of {} (entry {i}) is not in the filtration",
                        entry.simplex
                    ))
                })?;
                terms.push((sign, idx));
                sign = field.neg(sign);
            }
            let mut column = Chain::from_terms(terms, &field);
            let mut ops = Chain::unit(field.id(), i);

            while let Some(low) = column.low().copied() {
                let Some(owner) = low_owner[low.index] else {
                    break;
                };
                let pivot = r[owner]
                    .low()
                    .map(|e| e.coeff)
                    .ok_or_else(|| ZigzagError::inconsistent("pivot column is empty"))?;
                let m = field.neg(field.div(low.coeff, pivot));
                column.add_scaled(m, &r[owner], &field);
                ops.add_scaled(m, &v[owner], &field);
            }

            if let Some(low) = column.low() {
                low_owner[low.index] = Some(i);
                pairs[low.index] = Some(i);
                pairs[i] = Some(low.index);
            }
            r.push(column);
            v.push(ops);
        }

        let paired = pairs.iter().filter(|p| p.is_some()).count() / 2;
        debug!(columns = n, pairs = paired, "reduction finished");
        Ok(Self { field, r, v, pairs })
    }
}

impl<F: Field> ReducedMatrix for StandardReduction<F> {
    type Field = F;

    #[inline]
    fn field(&self) -> &F {
        &self.field
    }

    #[inline]
    fn len(&self) -> usize {
        self.r.len()
    }

    #[inline]
    fn pair(&self, i: usize) -> Option<usize> {
        self.pairs.get(i).copied().flatten()
    }

    #[inline]
    fn r_column(&self, i: usize) -> &Chain<F::Elem> {
        &self.r[i]
    }

    #[inline]
    fn v_column(&self, i: usize) -> &Chain<F::Elem> {
        &self.v[i]
    }
}
