//! Curated surface for callers (UNSTABLE).
//!
//! Prefer these re-exports over deep module paths; names may move between
//! modules without notice.

// Input and cone construction
pub use crate::cone::{ConeEntry, ConeFiltration};
pub use crate::simplex::{ConeSimplex, Simplex, Vertex};
pub use crate::zigzag::{Zigzag, ZigzagEntry, ZigzagInput};
// Coefficients and reduction
pub use crate::chain::{Chain, ChainEntry};
pub use crate::field::{Field, Zp};
pub use crate::reduction::{ReducedMatrix, StandardReduction};
// Diagrams
pub use crate::diagram::{classify, ClassifyCfg, DiagramPoint, PointType, ZigzagDiagrams};
// Apex representatives
pub use crate::apex::{lift, lift_all, lift_cycle, ApexCell, ApexRepresentative, Segment};
// Random zigzags
pub use crate::rand::{draw_zigzag, ReplayToken as ZigzagReplay, ZigzagCfg};
// Errors
pub use crate::error::{Result, ZigzagError};
