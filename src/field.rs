//! Numeric fields the reduction engine can work over.
//!
//! Any type with additive and multiplicative identities, the four field
//! operations and negation qualifies, so `f64` and `f32` work out of the box.
//! [`Gf`] provides an exact prime field for callers that need reductions
//! without rounding.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Element of a field, as required by the row reduction engine.
pub trait Field:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Field for T where
    T: Clone
        + Debug
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// The prime field Z/PZ.
///
/// `P` must be prime for division to be well defined. Dividing by zero
/// yields zero rather than panicking; the engine never divides by a zero
/// pivot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Gf<const P: u32>(u32);

impl<const P: u32> Gf<P> {
    /// Create an element, reducing `value` modulo P
    pub const fn new(value: u32) -> Self {
        Self(value % P)
    }

    /// Create an element from a signed value
    pub fn from_signed(value: i64) -> Self {
        Self(value.rem_euclid(i64::from(P)) as u32)
    }

    /// Canonical representative in `0..P`
    pub const fn value(self) -> u32 {
        self.0
    }

    fn pow(self, mut exp: u32) -> Self {
        let mut base = u64::from(self.0);
        let mut acc = 1u64;
        let modulus = u64::from(P);
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * base % modulus;
            }
            base = base * base % modulus;
            exp >>= 1;
        }
        Self(acc as u32)
    }

    /// Multiplicative inverse by Fermat's little theorem
    pub fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(self.pow(P - 2))
        }
    }
}

impl<const P: u32> Zero for Gf<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u32> One for Gf<P> {
    fn one() -> Self {
        Self(1 % P)
    }
}

impl<const P: u32> Add for Gf<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(((u64::from(self.0) + u64::from(rhs.0)) % u64::from(P)) as u32)
    }
}

impl<const P: u32> Sub for Gf<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const P: u32> Mul for Gf<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self((u64::from(self.0) * u64::from(rhs.0) % u64::from(P)) as u32)
    }
}

impl<const P: u32> Div for Gf<P> {
    type Output = Self;

    /// # Panics
    /// If `rhs` is zero, like integer division.
    fn div(self, rhs: Self) -> Self {
        match rhs.inv() {
            Some(inverse) => self * inverse,
            None => panic!("attempt to divide by zero in GF({P})"),
        }
    }
}

impl<const P: u32> Neg for Gf<P> {
    type Output = Self;

    fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u32> From<u32> for Gf<P> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const P: u32> Display for Gf<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
