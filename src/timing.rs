//! Timed `trace()` runs over growing matrix sizes
//!
//! Computing the trace through element access costs the same for every kind,
//! while the triangular and diagonal kinds can walk their own storage. This
//! module measures that difference.

use std::time::{Duration, Instant};

use tracing::{info, instrument};

use crate::matrix::{
    DenseMatrix, DiagonalMatrix, Matrix, MatrixKind, TraceTimingConfig, UpperTriangularMatrix,
};

/// One timed `trace()` call
#[derive(Debug, Clone, PartialEq)]
pub struct TraceTiming<T> {
    /// Storage kind of the timed matrix
    pub kind: MatrixKind,
    /// Matrix dimensions as (height, width)
    pub dimensions: (usize, usize),
    /// The computed trace
    pub trace: T,
    /// Wall-clock time spent in `trace()`
    pub elapsed: Duration,
}

/// Times a single `trace()` call on `matrix`
pub fn time_trace<M: Matrix>(kind: MatrixKind, matrix: &M) -> TraceTiming<M::Element> {
    let start = Instant::now();
    let trace = matrix.trace();
    let elapsed = start.elapsed();

    TraceTiming {
        kind,
        dimensions: matrix.dimensions(),
        trace,
        elapsed,
    }
}

/// Times `trace()` on dense, triangular and diagonal matrices of every configured size
///
/// Each matrix is dropped before the next one is built, so only one is alive
/// at a time.
#[instrument(skip_all, fields(min = config.min_exponent, max = config.max_exponent))]
pub fn run_trace_timings(config: &TraceTimingConfig) -> Vec<TraceTiming<i64>> {
    let mut timings = Vec::new();

    for size in config.sizes() {
        for kind in MatrixKind::ALL {
            let timing = match kind {
                MatrixKind::Dense => {
                    time_trace(kind, &DenseMatrix::filled(size, size, config.fill))
                }
                MatrixKind::UpperTriangular => {
                    let matrix =
                        UpperTriangularMatrix::from_fn(size, size, config.fill, |_, _| config.fill);
                    time_trace(kind, &matrix)
                }
                MatrixKind::Diagonal => {
                    let matrix = DiagonalMatrix::from_diagonal(
                        size,
                        size,
                        vec![config.fill; size],
                        config.fill,
                    );
                    time_trace(kind, &matrix)
                }
            };

            info!(
                size,
                kind = %timing.kind,
                trace = timing.trace,
                elapsed_us = timing.elapsed.as_micros() as u64,
                "trace computed"
            );
            timings.push(timing);
        }
    }

    timings
}
