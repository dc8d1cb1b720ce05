/*!
The two numeric backends and their compile-time configuration.

| backend        | numbers | grid        | cap  |
|----------------|---------|-------------|------|
| [`Float`]      | `f32`   | 1000 x 1000 | 1000 |
| [`FixedPoint`] | Q7.24   | 1280 x 1280 | 4096 |

Both cover roughly `[-2, 0.5] x [-1.25, 1.25]`. The fixed-point backend
samples more finely and iterates longer to make up for its narrower range.
*/

use crate::{complex::Complex, fixed::Fixed, grid::Size, real::Real, window::Window};

pub trait Backend {
    type Real: Real;

    const NAME: &'static str;
    const SIZE: Size;
    const CAP: u16;

    /// The sample point for grid cell `(i, j)`.
    fn sample(i: u32, j: u32) -> Complex<Self::Real>;
}

pub struct Float;

impl Float {
    pub const WINDOW: Window<f64> = Window {
        x_min: -2.0,
        x_step: 0.0025,
        y_min: -1.25,
        y_step: 0.0025,
    };
}

impl Backend for Float {
    type Real = f32;

    const NAME: &'static str = "float";
    const SIZE: Size = Size {
        width: 1000,
        height: 1000,
    };
    const CAP: u16 = 1000;

    fn sample(i: u32, j: u32) -> Complex<f32> {
        Self::WINDOW.sample(i, j)
    }
}

pub struct FixedPoint;

impl FixedPoint {
    /// Steps of `0x8000` are `2^-9`; 1280 of them span 2.5.
    pub const WINDOW: Window<Fixed> = Window {
        x_min: Fixed::from_int(-2),
        x_step: Fixed::from_raw(0x8000),
        y_min: Fixed::from_raw(-(5 << 22)),
        y_step: Fixed::from_raw(0x8000),
    };
}

impl Backend for FixedPoint {
    type Real = Fixed;

    const NAME: &'static str = "fixed-point";
    const SIZE: Size = Size {
        width: 1280,
        height: 1280,
    };
    const CAP: u16 = 4096;

    fn sample(i: u32, j: u32) -> Complex<Fixed> {
        Self::WINDOW.sample(i, j)
    }
}
