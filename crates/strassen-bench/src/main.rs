//! Strassen versus conventional multiplication benchmark.
//!
//! Inverts a square matrix through LU decomposition, multiplies it by its
//! inverse in both orders with both engines, checks every product against
//! the identity and reports the timings.
//!
//! # Usage
//!
//! ```bash
//! # Fixed 4x4 input, validation and timings only
//! strassen-bench
//!
//! # Print every intermediate matrix
//! strassen-bench --verbose
//!
//! # Custom input, rows separated by ';'
//! strassen-bench --matrix "4,1,0;1,3,1;0,1,2" --leaf-size 2
//!
//! # Norm-based identity check, JSON timings for charting
//! strassen-bench --norm max-row-sum --json
//! ```
//!
//! Set `RUST_LOG=strassen_linalg=debug` to see the phase events.

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use strassen_bench::{default_matrix, parse_matrix, BenchHarness, HarnessConfig};
use strassen_linalg::{IdentityCheck, MatrixNorm, StrassenConfig, DEFAULT_TOLERANCE};

/// Norm used by `--norm`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum NormArg {
    Frobenius,
    MaxRowSum,
}

impl From<NormArg> for MatrixNorm {
    fn from(arg: NormArg) -> Self {
        match arg {
            NormArg::Frobenius => MatrixNorm::Frobenius,
            NormArg::MaxRowSum => MatrixNorm::MaxRowSum,
        }
    }
}

/// Compare Strassen and conventional matrix multiplication
#[derive(Parser, Debug)]
#[command(name = "strassen-bench")]
#[command(about = "Compare Strassen and conventional matrix multiplication on M and its inverse")]
#[command(version)]
struct Args {
    /// Input matrix, rows separated by ';' and entries by ',' or spaces
    ///
    /// Defaults to the fixed 4x4 benchmark matrix
    #[arg(short, long)]
    matrix: Option<String>,

    /// Maximum tolerated deviation from the identity
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Block side at which the Strassen recursion switches to the triple loop
    #[arg(short, long, default_value_t = 1)]
    leaf_size: usize,

    /// Validate with a matrix norm instead of element-wise deviation
    #[arg(short, long, value_enum)]
    norm: Option<NormArg>,

    /// Print the input, LU factors, inverse and all products
    #[arg(short, long)]
    verbose: bool,

    /// Print the timing summary as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let matrix = match &args.matrix {
        Some(text) => parse_matrix(text).context("invalid --matrix")?,
        None => default_matrix(),
    };

    let config = HarnessConfig {
        tolerance: args.tolerance,
        identity_check: args
            .norm
            .map_or(IdentityCheck::ElementWise, |norm| IdentityCheck::Norm(norm.into())),
        strassen: StrassenConfig::with_leaf_size(args.leaf_size),
        verbose: args.verbose,
    };
    tracing::info!(
        size = matrix.num_rows(),
        leaf_size = config.strassen.leaf_size,
        tolerance = config.tolerance,
        "starting benchmark"
    );

    let harness = BenchHarness::new(config).context("invalid configuration")?;
    let report = harness.run(&matrix).context("benchmark failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report.timing_summary())
            .context("failed to serialize timings")?;
        println!("{json}");
    } else {
        print!("{report}");
    }

    ensure!(
        report.all_identity(),
        "at least one product is not the identity within {}",
        report.config.tolerance
    );
    Ok(())
}
