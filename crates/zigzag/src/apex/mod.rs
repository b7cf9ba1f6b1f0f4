//! Apex representatives: time-indexed cycles for zigzag diagram points.
//!
//! Purpose
//! - Turn the algebraic chain the reduction attaches to a pair into a family
//!   of cycles, one per instant of the point's lifetime. Each piece is a
//!   (simplex index, coefficient) pair valid on a half-open time interval.
//!
//! Model
//! - The seed chain and the sweep direction depend on the point type (see
//!   `lift`). Every seed term inside the sweep window contributes its signed
//!   boundary at the term's time; running sums along the sweep give the
//!   coefficient of each face between consecutive events.
//!
//! Layout
//! - `representative.rs`: the `ApexRepresentative` container and queries.
//! - `lift.rs`: seed selection, the boundary sweep, parallel lifting.

mod lift;
mod representative;

pub use lift::{lift, lift_all, lift_cycle};
pub use representative::{ApexCell, ApexRepresentative, Segment};
