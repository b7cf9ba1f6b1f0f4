//! Coefficient fields.
//!
//! `Field` is the arithmetic surface the reduction and the lifter need;
//! `Zp` is the prime field used by default (Z/2 unless told otherwise).

use std::fmt::Debug;

use crate::error::{Result, ZigzagError};

/// Field arithmetic. Implementations must be read-only so lifts can share
/// one instance across threads.
pub trait Field: Clone + Debug + Send + Sync {
    type Elem: Copy + Debug + PartialEq + Send + Sync;

    fn id(&self) -> Self::Elem;
    fn zero(&self) -> Self::Elem;
    fn add(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;
    fn neg(&self, a: Self::Elem) -> Self::Elem;
    fn mul(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem;
    /// Multiplicative inverse; `a` must be nonzero.
    fn inv(&self, a: Self::Elem) -> Self::Elem;
    fn is_zero(&self, a: Self::Elem) -> bool;

    #[inline]
    fn div(&self, a: Self::Elem, b: Self::Elem) -> Self::Elem {
        self.mul(a, self.inv(b))
    }
}

/// Integers modulo a prime `p`; elements are canonical residues in `[0, p)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zp {
    p: u32,
}

impl Zp {
    pub fn new(p: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(ZigzagError::InvalidField(p));
        }
        Ok(Self { p })
    }

    #[inline]
    pub fn prime(&self) -> u32 {
        self.p
    }

    /// Residue of a signed integer.
    pub fn element(&self, x: i64) -> u32 {
        x.rem_euclid(i64::from(self.p)) as u32
    }
}

impl Default for Zp {
    fn default() -> Self {
        Self { p: 2 }
    }
}

impl Field for Zp {
    type Elem = u32;

    #[inline]
    fn id(&self) -> u32 {
        1
    }
    #[inline]
    fn zero(&self) -> u32 {
        0
    }
    #[inline]
    fn add(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) + u64::from(b)) % u64::from(self.p)) as u32
    }
    #[inline]
    fn neg(&self, a: u32) -> u32 {
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }
    #[inline]
    fn mul(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) * u64::from(b)) % u64::from(self.p)) as u32
    }
    /// Fermat: a^(p-2).
    fn inv(&self, a: u32) -> u32 {
        debug_assert!(a % self.p != 0, "inverse of zero");
        let mut base = u64::from(a % self.p);
        let modulus = u64::from(self.p);
        let mut exp = self.p - 2;
        let mut acc = 1u64;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % modulus;
            }
            base = base * base % modulus;
            exp >>= 1;
        }
        acc as u32
    }
    #[inline]
    fn is_zero(&self, a: u32) -> bool {
        a == 0
    }
}

fn is_prime(p: u32) -> bool {
    if p < 2 {
        return false;
    }
    let mut d = 2u32;
    while u64::from(d) * u64::from(d) <= u64::from(p) {
        if p % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
