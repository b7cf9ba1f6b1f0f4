//! Error taxonomy shared by cone construction, reduction, and lifting.
//!
//! Nothing here is retried: the computation is deterministic, so an error
//! means either bad input or a broken upstream contract.

/// Errors surfaced by the library.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZigzagError {
    /// Malformed zigzag: empty or non-increasing event times, NaN times,
    /// an empty simplex, or mismatched simplex/time lists.
    #[error("invalid zigzag input at entry {entry}: {reason}")]
    InvalidZigzagInput { entry: usize, reason: String },

    /// The reduction output violates an invariant the classifier or lifter
    /// relies on (missing face, non-involutive pairing, unpaired seed).
    #[error("inconsistent reduction: {0}")]
    InconsistentReduction(String),

    /// Field modulus is not a prime >= 2.
    #[error("field modulus {0} is not a prime")]
    InvalidField(u32),
}

impl ZigzagError {
    pub(crate) fn invalid(entry: usize, reason: impl Into<String>) -> Self {
        Self::InvalidZigzagInput {
            entry,
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentReduction(reason.into())
    }
}

/// Library result alias.
pub type Result<T, E = ZigzagError> = std::result::Result<T, E>;
