//! Mapping grid indices to sample points in the complex plane.

use crate::{complex::Complex, fixed::Fixed};

/// An affine map from grid indices to the complex plane.
///
/// Cell `(i, j)` samples the centre of its cell:
/// `cr = x_min + x_step * i + x_step / 2`, `ci = y_min + y_step * j + y_step / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window<T> {
    pub x_min: T,
    pub x_step: T,
    pub y_min: T,
    pub y_step: T,
}

impl Window<f64> {
    /// The affine arithmetic happens in `f64` and only the result is narrowed
    /// to `f32`, so cell positions don't accumulate single-precision error.
    pub fn sample(&self, i: u32, j: u32) -> Complex<f32> {
        let real = self.x_min + self.x_step * f64::from(i) + self.x_step * 0.5;
        let imaginary = self.y_min + self.y_step * f64::from(j) + self.y_step * 0.5;
        Complex::new(real as f32, imaginary as f32)
    }
}

impl Window<Fixed> {
    /// Steps must be even so the half step is exact.
    ///
    /// Indices must stay below `2^16`: with a `0x8000` step that keeps
    /// `step * index` inside `i32`.
    pub fn sample(&self, i: u32, j: u32) -> Complex<Fixed> {
        let axis = |min: Fixed, step: Fixed, index: u32| {
            debug_assert!(index < 1 << 16, "grid index {} out of range", index);
            Fixed::from_raw(min.raw() + step.raw() * index as i32 + step.raw() / 2)
        };
        Complex::new(
            axis(self.x_min, self.x_step, i),
            axis(self.y_min, self.y_step, j),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOAT: Window<f64> = Window {
        x_min: -2.0,
        x_step: 0.0025,
        y_min: -1.25,
        y_step: 0.0025,
    };

    const FIXED: Window<Fixed> = Window {
        x_min: Fixed::from_raw(-(2 << 24)),
        x_step: Fixed::from_raw(0x8000),
        y_min: Fixed::from_raw(-(5 << 22)),
        y_step: Fixed::from_raw(0x8000),
    };

    #[test]
    fn test_float_samples_cell_centres() {
        assert_eq!(FLOAT.sample(0, 0), Complex::new(-1.99875, -1.24875));
        assert_eq!(FLOAT.sample(400, 500), Complex::new(-0.99875, 0.00125));
        assert_eq!(FLOAT.sample(999, 999), Complex::new(0.49875, 1.24875));
    }

    #[test]
    fn test_fixed_samples_cell_centres() {
        assert_eq!(
            FIXED.sample(0, 0),
            Complex::new(
                Fixed::from_raw(-(2 << 24) + 0x4000),
                Fixed::from_raw(-(5 << 22) + 0x4000)
            )
        );
        // 512 steps of 2^-9 is exactly 1.
        assert_eq!(
            FIXED.sample(512, 640),
            Complex::new(
                Fixed::from_raw(-(1 << 24) + 0x4000),
                Fixed::from_raw(0x4000)
            )
        );
        let last = FIXED.sample(1279, 1279);
        assert_eq!(
            FIXED.sample(u16::MAX.into(), 0).real.to_f64(),
            -2.0 + f64::from(u16::MAX) / 512.0 + 1.0 / 1024.0
        );
        assert_eq!(last.real.to_f64(), 0.5 - 1.0 / 1024.0);
        assert_eq!(last.imaginary.to_f64(), 1.25 - 1.0 / 1024.0);
    }
}
