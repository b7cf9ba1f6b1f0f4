//! Cone filtration: a zigzag re-encoded as one ordinary filtration.
//!
//! Purpose
//! - Turn a sequence of complexes that both grow and shrink into a monotone
//!   filtration that a standard reduction can process. Every removal of a
//!   simplex `σ` becomes the insertion of `σ * w`, where `w` is the cone vertex.
//!
//! Layout
//! - `types.rs`: `ConeEntry`, `ConeFiltration`, ordering key, face lookup.
//! - `build.rs`: construction from a validated `Zigzag`.

mod build;
mod types;

pub use types::{ConeEntry, ConeFiltration};

#[cfg(test)]
mod tests;
