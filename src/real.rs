//! The arithmetic the escape-time iteration needs from a number type.

use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use crate::fixed::Fixed;

pub trait Real:
    Copy + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Send + Sync
{
    const ZERO: Self;

    /// Squared escape radius, `4` in this type's encoding.
    const ESCAPE_THRESHOLD: Self;

    fn times(self, rhs: Self) -> Self;

    fn square(self) -> Self {
        self.times(self)
    }

    fn double(self) -> Self;

    fn to_f64(self) -> f64;

    fn escapes(norm_sqr: Self) -> bool {
        norm_sqr > Self::ESCAPE_THRESHOLD
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ESCAPE_THRESHOLD: Self = 4.0;

    fn times(self, rhs: Self) -> Self {
        self * rhs
    }

    fn double(self) -> Self {
        2.0 * self
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for Fixed {
    const ZERO: Self = Fixed::ZERO;
    const ESCAPE_THRESHOLD: Self = Fixed::from_int(4);

    fn times(self, rhs: Self) -> Self {
        self.mul(rhs)
    }

    fn square(self) -> Self {
        Fixed::square(self)
    }

    fn double(self) -> Self {
        Fixed::double(self)
    }

    fn to_f64(self) -> f64 {
        Fixed::to_f64(self)
    }
}
