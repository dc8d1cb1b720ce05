use crate::real::Real;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<R> {
    pub real: R,
    pub imaginary: R,
}

impl<R: Real> Complex<R> {
    pub const ZERO: Self = Complex {
        real: R::ZERO,
        imaginary: R::ZERO,
    };

    pub fn new(real: R, imaginary: R) -> Self {
        Self { real, imaginary }
    }
}
