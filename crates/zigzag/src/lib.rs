//! Zigzag persistence with apex representatives.
//!
//! Pipeline
//! - `Zigzag` (validated input) → `ConeFiltration::build` → a reduction engine
//!   implementing `ReducedMatrix` (`StandardReduction` ships here) →
//!   `classify` into `ZigzagDiagrams` → `lift` a point into an
//!   `ApexRepresentative` → `representative(t)` at any instant.
//!
//! Conventions
//! - Cone filtration indices are plain `usize` positions; chains store them
//!   with coefficients from a `Field` (`Zp` by default).
//! - Library code logs through `tracing` and never installs a subscriber.

pub mod api;
pub mod apex;
pub mod chain;
pub mod cone;
pub mod diagram;
pub mod error;
pub mod field;
pub mod rand;
pub mod reduction;
pub mod simplex;
pub mod zigzag;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use apex::{lift, lift_all, lift_cycle, ApexRepresentative, Segment};
pub use cone::{ConeEntry, ConeFiltration};
pub use diagram::{classify, ClassifyCfg, DiagramPoint, PointType, ZigzagDiagrams};
pub use error::{Result, ZigzagError};
pub use reduction::{ReducedMatrix, StandardReduction};
pub use zigzag::{Zigzag, ZigzagEntry, ZigzagInput};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::apex::{lift, lift_all, ApexRepresentative};
    pub use crate::chain::Chain;
    pub use crate::cone::ConeFiltration;
    pub use crate::diagram::{classify, ClassifyCfg, DiagramPoint, PointType, ZigzagDiagrams};
    pub use crate::field::{Field, Zp};
    pub use crate::reduction::{ReducedMatrix, StandardReduction};
    pub use crate::simplex::{ConeSimplex, Simplex};
    pub use crate::zigzag::Zigzag;
}
