/*!
Q7.24 fixed-point numbers.

A [`Fixed`] is an `i32` whose real value is `raw / 2^24`: 7 integer bits, 24
fractional bits and a sign. 24 fractional bits give about 7 significant
decimal digits, which is what an `f32` delivers, and the integer part holds
magnitudes up to 128. The escape-time iteration never needs more than 64.

Addition and subtraction work on the raw values directly. Multiplication
widens both operands to `i64`, multiplies, and shifts right by 24 to get back
to Q7.24. `>>` on a signed integer is an arithmetic shift in Rust, so the
result is the floor of the scaled product for negative products too.

All operations wrap on overflow, like 32-bit two's complement integers. Inside
the sample window nothing overflows; outside it a diverging orbit may wrap,
which changes the count but never panics.
*/

use std::{
    fmt,
    ops::{Add, Neg, Sub},
};

pub const FRACTIONAL_BITS: u32 = 24;

const SCALE: f64 = (1u32 << FRACTIONAL_BITS) as f64;

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Self = Fixed(0);
    pub const ONE: Self = Fixed::from_int(1);

    /// Smallest positive value, `2^-24`.
    pub const EPSILON: Self = Fixed(1);

    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }

    pub const fn from_int(value: i32) -> Self {
        Fixed(value << FRACTIONAL_BITS)
    }

    /// Round to the nearest representable value. Out-of-range input saturates.
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    pub fn from_f64(value: f64) -> Self {
        // `as` saturates at the i32 bounds and maps NaN to 0.
        Fixed((value * SCALE).round() as i32)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / SCALE
    }

    /// `(self * rhs) >> 24`, computed in 64 bits.
    ///
    /// The narrowing back to 32 bits wraps; the product is exact while both
    /// operands stay below `sqrt(128)` in magnitude.
    pub fn mul(self, rhs: Self) -> Self {
        let product = i64::from(self.0) * i64::from(rhs.0);
        Fixed((product >> FRACTIONAL_BITS) as i32)
    }

    pub fn square(self) -> Self {
        self.mul(self)
    }

    /// Multiply by two. Exact: a shift, not a fixed-point multiply.
    pub fn double(self) -> Self {
        Fixed(self.0.wrapping_shl(1))
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Fixed(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Fixed(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Fixed(self.0.wrapping_neg())
    }
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({:#x} = {})", self.0, self.to_f64())
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}
