/*!
Mandelbrot escape-time counts over a fixed grid, in `f32` or Q7.24 fixed-point
arithmetic, written to stdout as raw `u16`s.

The `mandel` binary runs the [`Float`](backend::Float) backend and `mandint`
runs [`FixedPoint`](backend::FixedPoint).
*/

pub mod backend;
pub mod complex;
pub mod error;
pub mod escape;
pub mod fixed;
pub mod grid;
pub mod output;
pub mod real;
pub mod window;

use std::io;

pub use error::{Error, Result};

use crate::{backend::Backend, grid::Sweep};

/// Sweep `B`'s grid and write every count to stdout.
pub fn run<B: Backend>() -> Result<()> {
    let counts = Sweep::<B>::new().run();
    output::write_counts(io::stdout().lock(), &counts)
}
