//! Random zigzags (toggle walks + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of valid zigzags for property
//!   tests and benchmarks. Every complex along the walk is closed under
//!   faces, so the cone filtration always resolves its boundaries.
//!
//! Model
//! - The universe is every simplex on `vertices` vertices up to `max_dim`.
//! - At each integer step `1..=steps` one simplex is drawn and toggled:
//!   inserted if absent with all faces present, removed if present with no
//!   present cofaces, left alone otherwise. Anything still present at the
//!   end is removed at +∞ by the cone construction.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::simplex::{Simplex, Vertex};
use crate::zigzag::{Zigzag, ZigzagEntry};

/// Toggle-walk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ZigzagCfg {
    pub vertices: u32,
    /// Largest simplex dimension in the universe.
    pub max_dim: usize,
    /// Number of walk steps; step `k` happens at time `k`.
    pub steps: usize,
}

impl Default for ZigzagCfg {
    fn default() -> Self {
        Self {
            vertices: 5,
            max_dim: 2,
            steps: 40,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Simplices on `0..n` with at most `max_dim + 1` vertices, by dimension
/// then lexicographically.
fn universe(n: u32, max_dim: usize) -> Vec<Simplex> {
    let mut layer: Vec<Vec<Vertex>> = (0..n).map(|v| vec![v]).collect();
    let mut out: Vec<Simplex> = Vec::new();
    for _ in 0..=max_dim {
        if layer.is_empty() {
            break;
        }
        out.extend(layer.iter().cloned().map(Simplex::from));
        layer = layer
            .iter()
            .flat_map(|vs| {
                let last = vs.last().copied().unwrap_or(0);
                (last + 1..n).map(move |v| {
                    let mut next = vs.clone();
                    next.push(v);
                    next
                })
            })
            .collect();
    }
    out
}

/// Draw a random valid zigzag.
pub fn draw_zigzag(cfg: ZigzagCfg, tok: ReplayToken) -> Result<Zigzag> {
    let mut rng = tok.to_std_rng();
    let all = universe(cfg.vertices.max(1), cfg.max_dim);
    let slot: HashMap<&Simplex, usize> = all.iter().enumerate().map(|(k, s)| (s, k)).collect();
    let faces: Vec<Vec<usize>> = all
        .iter()
        .map(|s| s.faces().filter_map(|f| slot.get(&f).copied()).collect())
        .collect();
    let mut cofaces: Vec<Vec<usize>> = vec![Vec::new(); all.len()];
    for (k, fs) in faces.iter().enumerate() {
        for &f in fs {
            cofaces[f].push(k);
        }
    }

    let mut present = vec![false; all.len()];
    let mut times: Vec<Vec<f64>> = vec![Vec::new(); all.len()];
    for step in 1..=cfg.steps {
        let k = rng.gen_range(0..all.len());
        let toggle = if present[k] {
            cofaces[k].iter().all(|&c| !present[c])
        } else {
            faces[k].iter().all(|&f| present[f])
        };
        if toggle {
            present[k] = !present[k];
            times[k].push(step as f64);
        }
    }

    let entries = all
        .into_iter()
        .zip(times)
        .filter(|(_, ts)| !ts.is_empty())
        .map(|(simplex, times)| ZigzagEntry { simplex, times })
        .collect();
    Zigzag::new(entries)
}
