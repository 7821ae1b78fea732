use ndarray::{Array2, ArrayView1, ArrayView2};
use num_traits::{ToPrimitive, Zero};
use rayon::prelude::*;
use std::ops::Mul;
use tracing::debug;

use crate::{Error, Result};

/// Left operands with at least this many elements are multiplied in parallel
pub const PARALLEL_THRESHOLD: usize = 100;

/// Largest element-wise difference tolerated by [approx_eq]
pub const EPSILON: f64 = 1e-7;

/// Same shape and every pair of elements within [EPSILON] of each other.
pub fn approx_eq<T: ToPrimitive>(a: ArrayView2<T>, b: ArrayView2<T>) -> bool {
    a.dim() == b.dim()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| match (x.to_f64(), y.to_f64()) {
                (Some(x), Some(y)) => (x - y).abs() <= EPSILON,
                _ => false,
            })
}

/// Matrix product of `a` and `b`.
///
/// Once `a` reaches [PARALLEL_THRESHOLD] elements, the output rows are split into
/// one contiguous range per worker (at most one worker per output column) and each
/// range is filled by its own rayon task. Ranges never overlap, so the tasks write
/// straight into the shared buffer and the call returns once all of them have joined.
pub fn multiply<T>(a: ArrayView2<T>, b: ArrayView2<T>) -> Result<Array2<T>>
where
    T: Copy + Zero + Mul<Output = T> + Send + Sync,
{
    if a.ncols() != b.nrows() {
        return Err(Error::ShapeMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    let (rows, cols) = (a.nrows(), b.ncols());
    let mut product = vec![T::zero(); rows * cols];

    if rows > 0 && cols > 0 {
        if a.len() >= PARALLEL_THRESHOLD {
            let workers = cols.min(rayon::current_num_threads()).max(1);
            let rows_per_worker = rows.div_ceil(workers);
            debug!(workers, rows_per_worker, "Parallel multiplication");
            product
                .par_chunks_mut(rows_per_worker * cols)
                .enumerate()
                .for_each(|(worker, range)| {
                    let first_row = worker * rows_per_worker;
                    for (offset, out) in range.chunks_mut(cols).enumerate() {
                        multiply_row(a.row(first_row + offset), b, out);
                    }
                });
        } else {
            for (i, out) in product.chunks_mut(cols).enumerate() {
                multiply_row(a.row(i), b, out);
            }
        }
    }

    Ok(Array2::from_shape_vec((rows, cols), product)?)
}

fn multiply_row<T>(row: ArrayView1<T>, b: ArrayView2<T>, out: &mut [T])
where
    T: Copy + Zero + Mul<Output = T>,
{
    for (j, cell) in out.iter_mut().enumerate() {
        *cell = row
            .iter()
            .zip(b.column(j).iter())
            .fold(T::zero(), |acc, (x, y)| acc + *x * *y);
    }
}
