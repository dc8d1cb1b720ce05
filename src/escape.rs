//! Escape-time iteration.

use crate::{complex::Complex, real::Real};

/**
Count the iterations of `z = z^2 + c`, starting from `z = 0`, before `|z|^2`
exceeds 4.

Returns `cap` when `c` hasn't escaped after `cap` iterations, i.e. when it is
treated as a member of the set. The result is always in `0..=cap`.

The loop computes `zr^2` and `zi^2` once per iteration and reuses them for both
the escape check and the next `zr`. The cross term is `2 * (zr * zi)`: the
doubling is applied to the product, which keeps fixed-point rounding identical
to the integer formulation (`2 * mul(zr, zi)`).

For [`Fixed`](crate::fixed::Fixed) samples with `|cr|, |ci| <= 2`,
`|z^2 + c| <= 4 + 2 * sqrt(2)` on the step before an escape is detected, and
every intermediate stays inside the Q7.24 range. Larger samples wrap rather
than overflow.
*/
pub fn escape_time<R: Real>(c: Complex<R>, cap: u16) -> u16 {
    let mut z = Complex::<R>::ZERO;
    let mut count = 0;

    while count < cap {
        let real_squared = z.real.square();
        let imaginary_squared = z.imaginary.square();
        if R::escapes(real_squared + imaginary_squared) {
            break;
        }
        count += 1;

        z = Complex {
            real: real_squared - imaginary_squared + c.real,
            imaginary: z.real.times(z.imaginary).double() + c.imaginary,
        };
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::Fixed;

    fn float(real: f32, imaginary: f32) -> Complex<f32> {
        Complex::new(real, imaginary)
    }

    fn fixed(real: f32, imaginary: f32) -> Complex<Fixed> {
        Complex::new(Fixed::from_f32(real), Fixed::from_f32(imaginary))
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(float(0.0, 0.0), 1000), 1000);
        assert_eq!(escape_time(fixed(0.0, 0.0), 4096), 4096);
    }

    #[test]
    fn test_period_two_points_never_escape() {
        // -1 cycles 0, -1, 0, ...; -2 lands on the fixed point 2 with |z|^2 == 4.
        for c in [(-1.0, 0.0), (-2.0, 0.0)] {
            assert_eq!(escape_time(float(c.0, c.1), 1000), 1000);
            assert_eq!(escape_time(fixed(c.0, c.1), 4096), 4096);
        }
    }

    #[test]
    fn test_two_escapes_on_second_check() {
        // z1 = 2 sits exactly on the threshold, z2 = 6 is past it.
        assert_eq!(escape_time(float(2.0, 0.0), 1000), 2);
        assert_eq!(escape_time(fixed(2.0, 0.0), 4096), 2);
    }

    #[test]
    fn test_known_counts() {
        let cases = [
            ((-0.75, 0.1), 33),
            ((0.5, 0.5), 5),
            ((-1.5, 0.5), 3),
            ((1.0, 1.0), 2),
            ((-1.2, 0.2), 18),
            ((-1.0, 0.3), 35),
        ];
        for ((real, imaginary), expected) in cases {
            assert_eq!(escape_time(float(real, imaginary), 1000), expected);
            assert_eq!(escape_time(fixed(real, imaginary), 4096), expected);
        }
    }

    #[test]
    fn test_zero_cap() {
        assert_eq!(escape_time(float(0.0, 0.0), 0), 0);
        assert_eq!(escape_time(fixed(2.0, 2.0), 0), 0);
    }

    #[test]
    fn test_far_point_escapes_after_one_iteration() {
        // z0 = 0 never escapes, so the count is at least 1 for any c.
        assert_eq!(escape_time(float(2.0, 2.0), 1000), 1);
        assert_eq!(escape_time(fixed(-2.0, 2.0), 4096), 1);
    }
}
