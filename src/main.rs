use polymat::{
    add, run_trace_timings, AnyMatrix, DenseMatrix, DiagonalMatrix, Matrix, MatrixError,
    TraceTimingConfig, UpperTriangularMatrix,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> Result<(), MatrixError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("polymat {}: dense, upper triangular and diagonal matrices", polymat::VERSION);

    // Optional first argument: largest size exponent to time
    let mut config = TraceTimingConfig::default();
    if let Some(max_exponent) = std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        config.max_exponent = max_exponent;
    }

    let mut current_size = 0;
    for timing in run_trace_timings(&config) {
        if timing.dimensions.0 != current_size {
            current_size = timing.dimensions.0;
            println!("\n======SIZE {}x{}========", current_size, current_size);
        }
        println!(
            "Trace of {} matrix: {}, calculated in {} µs",
            timing.kind,
            timing.trace,
            timing.elapsed.as_micros()
        );
    }

    // Sample matrices
    let dense: AnyMatrix<i32> = DenseMatrix::from_row_major(4, 4, (1..=16).collect()).into();

    let mut triangular = UpperTriangularMatrix::<i32>::new(4, 4, 0);
    let mut value = 1;
    for row in 0..4 {
        for col in row..4 {
            triangular.set(row, col, value)?;
            value += 1;
        }
    }
    let triangular: AnyMatrix<i32> = triangular.into();

    let diagonal: AnyMatrix<i32> = DiagonalMatrix::from_diagonal(4, 4, vec![1, 2, 3, 4], 0).into();

    let pairs = [
        (&dense, &dense),
        (&dense, &triangular),
        (&dense, &diagonal),
        (&triangular, &triangular),
        (&triangular, &diagonal),
        (&diagonal, &diagonal),
    ];

    for (a, b) in pairs {
        let sum = add(a, b)?;
        println!("\n==={} + {}=== ({} result)", a.kind(), b.kind(), sum.kind());
        a.print();
        println!("\t+");
        b.print();
        println!("\t=");
        sum.print();
    }

    Ok(())
}
