//! Sweeping a backend's sample grid.

use std::marker::PhantomData;

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::{backend::Backend, escape::escape_time};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Evaluate row `j` of `B`'s grid into `row`, one count per column.
pub fn fill_row<B: Backend>(j: u32, cap: u16, row: &mut [u16]) {
    debug_assert!(row.len() <= B::SIZE.width as usize);

    for (i, count) in row.iter_mut().enumerate() {
        *count = escape_time(B::sample(i as u32, j), cap);
    }
}

/// A full pass over a backend's grid.
pub struct Sweep<B> {
    size: Size,
    cap: u16,
    phantom_data: PhantomData<B>,
}

impl<B: Backend> Sweep<B> {
    pub fn new() -> Self {
        Self {
            size: B::SIZE,
            cap: B::CAP,
            phantom_data: PhantomData,
        }
    }

    pub fn with_cap(mut self, cap: u16) -> Self {
        self.cap = cap;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn cap(&self) -> u16 {
        self.cap
    }

    /**
    Compute every count in row-major order: `counts[j * width + i]` is cell `(i, j)`.

    Rows are handed to the rayon thread pool. Each worker writes only to its
    own row's slice, so the layout doesn't depend on scheduling.
    */
    pub fn run(&self) -> Vec<u16> {
        trace!("begin sweep");
        debug!(
            "sweeping {} grid: {}x{}, cap {}, {} threads",
            B::NAME,
            self.size.width,
            self.size.height,
            self.cap,
            rayon::current_num_threads()
        );

        let cap = self.cap;
        let mut counts = vec![0; self.size.cells()];
        if self.size.width > 0 {
            counts
                .par_chunks_mut(self.size.width as usize)
                .enumerate()
                .for_each(|(j, row)| fill_row::<B>(j as u32, cap, row));
        }

        trace!("end sweep");
        counts
    }
}

impl<B: Backend> Default for Sweep<B> {
    fn default() -> Self {
        Self::new()
    }
}
