//! Validated zigzag input.
//!
//! Each entry pairs a simplex with its event times: even positions insert,
//! odd positions remove. An odd-length list leaves the simplex in place
//! until +∞. Validation rejects what the cone builder cannot proceed with;
//! it does not check that faces are present whenever a coface is.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZigzagError};
use crate::simplex::{Simplex, Vertex};

/// One simplex with its alternating insertion/removal times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZigzagEntry {
    pub simplex: Simplex,
    pub times: Vec<f64>,
}

/// Serialized shape: two parallel lists.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZigzagInput {
    pub simplices: Vec<Vec<Vertex>>,
    pub times: Vec<Vec<f64>>,
}

/// A validated zigzag.
#[derive(Clone, Debug, PartialEq)]
pub struct Zigzag {
    entries: Vec<ZigzagEntry>,
}

impl Zigzag {
    pub fn new(entries: Vec<ZigzagEntry>) -> Result<Self> {
        for (k, e) in entries.iter().enumerate() {
            validate_entry(k, e)?;
        }
        Ok(Self { entries })
    }

    /// Build from parallel simplex and time lists.
    pub fn from_parts(simplices: Vec<Vec<Vertex>>, times: Vec<Vec<f64>>) -> Result<Self> {
        if simplices.len() != times.len() {
            return Err(ZigzagError::invalid(
                simplices.len().min(times.len()),
                format!(
                    "{} simplices but {} time lists",
                    simplices.len(),
                    times.len()
                ),
            ));
        }
        let entries = simplices
            .into_iter()
            .zip(times)
            .map(|(vs, times)| ZigzagEntry {
                simplex: Simplex::new(vs),
                times,
            })
            .collect();
        Self::new(entries)
    }

    #[inline]
    pub fn entries(&self) -> &[ZigzagEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<ZigzagInput> for Zigzag {
    type Error = ZigzagError;

    fn try_from(input: ZigzagInput) -> Result<Self> {
        Zigzag::from_parts(input.simplices, input.times)
    }
}

fn validate_entry(k: usize, e: &ZigzagEntry) -> Result<()> {
    if e.simplex.is_empty() {
        return Err(ZigzagError::invalid(k, "empty simplex"));
    }
    if e.times.is_empty() {
        return Err(ZigzagError::invalid(k, "no event times"));
    }
    if let Some(t) = e.times.iter().find(|t| t.is_nan()) {
        return Err(ZigzagError::invalid(k, format!("event time {t} is NaN")));
    }
    if let Some(w) = e.times.windows(2).find(|w| w[0] >= w[1]) {
        return Err(ZigzagError::invalid(
            k,
            format!("event times not strictly increasing ({} then {})", w[0], w[1]),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alternating_times() {
        let zz = Zigzag::from_parts(vec![vec![0], vec![1], vec![0, 1]], vec![
            vec![0.1, 0.5, 0.7],
            vec![0.2],
            vec![0.3, 0.4],
        ])
        .unwrap();
        assert_eq!(zz.len(), 3);
        assert_eq!(zz.entries()[2].simplex.vertices(), &[0, 1]);
    }

    #[test]
    fn rejects_non_increasing_times() {
        let err = Zigzag::from_parts(vec![vec![0], vec![1]], vec![vec![0.1], vec![0.4, 0.4]])
            .unwrap_err();
        assert!(matches!(
            err,
            ZigzagError::InvalidZigzagInput { entry: 1, .. }
        ));
    }

    #[test]
    fn rejects_empty_and_nan() {
        assert!(Zigzag::from_parts(vec![vec![0]], vec![vec![]]).is_err());
        assert!(Zigzag::from_parts(vec![vec![]], vec![vec![0.0]]).is_err());
        assert!(Zigzag::from_parts(vec![vec![0]], vec![vec![f64::NAN]]).is_err());
        assert!(Zigzag::from_parts(vec![vec![0]], vec![]).is_err());
    }

    #[test]
    fn input_deserializes_from_parallel_lists() {
        let input = ZigzagInput {
            simplices: vec![vec![2, 1]],
            times: vec![vec![1.0, 2.0]],
        };
        let zz = Zigzag::try_from(input).unwrap();
        assert_eq!(zz.entries()[0].simplex.vertices(), &[1, 2]);
    }
}
