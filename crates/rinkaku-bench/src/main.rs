//! rinkaku-bench: CLI tool for filter parameter experimentation.
//!
//! Runs one edge-detection filter over a given image file with
//! configurable parameters, timing each run and writing the result as
//! a PNG. Useful for:
//!
//! - Comparing the three filters on the same input
//! - Tuning thresholds, kernel sizes, and sigma without a UI in the way
//! - Measuring how parameter changes affect runtime
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin rinkaku-bench -- <IMAGE_PATH> [OPTIONS] [FILTER]
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rinkaku_pipeline::{
    CannyParams, FilterRequest, LaplacianParams, SobelDirection, SobelParams, color,
};

/// Filter parameter experimentation for rinkaku.
///
/// Runs one edge-detection filter over an image with configurable
/// parameters, prints per-run timing, and writes the filtered output
/// as a PNG.
#[derive(Parser)]
#[command(name = "rinkaku-bench", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Write the filtered output to this PNG file.
    #[arg(long, default_value = "edges.png")]
    out: PathBuf,

    /// Number of runs for averaging.
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Full filter request as a JSON string.
    ///
    /// When provided, the filter subcommand and its flags are ignored.
    /// The JSON must be a valid `FilterRequest` serialization.
    #[arg(long)]
    request_json: Option<String>,

    /// Which filter to run. Defaults to Canny with its default
    /// parameters when omitted.
    #[command(subcommand)]
    filter: Option<Filter>,
}

/// Filter selection with that filter's parameter flags.
#[derive(Subcommand)]
enum Filter {
    /// Two-threshold hysteresis edge detection with optional pre-blur.
    Canny {
        /// Gaussian pre-blur kernel size (normalized to odd).
        #[arg(long, default_value_t = CannyParams::DEFAULT_KERNEL_SIZE)]
        kernel_size: u32,

        /// Gaussian pre-blur sigma.
        #[arg(long, default_value_t = CannyParams::DEFAULT_SIGMA)]
        sigma: f32,

        /// Hysteresis low threshold.
        #[arg(long, default_value_t = CannyParams::DEFAULT_LOW_THRESHOLD)]
        low: u8,

        /// Hysteresis high threshold.
        #[arg(long, default_value_t = CannyParams::DEFAULT_HIGH_THRESHOLD)]
        high: u8,
    },

    /// First-order directional gradients.
    Sobel {
        /// Gradient window size (normalized to odd).
        #[arg(long, default_value_t = SobelParams::DEFAULT_KERNEL_SIZE)]
        kernel_size: u32,

        /// Gradient direction: X, Y, or Both. Matched
        /// case-insensitively; unrecognized values fall back to Both.
        #[arg(long, default_value = "Both")]
        direction: String,
    },

    /// Second-order derivative response.
    Laplacian {
        /// Aperture size (normalized to odd).
        #[arg(long, default_value_t = LaplacianParams::DEFAULT_KERNEL_SIZE)]
        kernel_size: u32,
    },
}

/// Build a [`FilterRequest`] from CLI arguments.
///
/// If `--request-json` is provided, the JSON is parsed directly and the
/// filter subcommand is ignored. Otherwise the request is assembled
/// from the subcommand's flags.
fn request_from_cli(cli: &Cli) -> Result<FilterRequest, String> {
    if let Some(ref json) = cli.request_json {
        return serde_json::from_str(json)
            .map_err(|e| format!("Error parsing --request-json: {e}"));
    }

    Ok(match cli.filter {
        Some(Filter::Canny {
            kernel_size,
            sigma,
            low,
            high,
        }) => FilterRequest::Canny(CannyParams {
            kernel_size,
            sigma,
            low_threshold: low,
            high_threshold: high,
        }),
        Some(Filter::Sobel {
            kernel_size,
            ref direction,
        }) => FilterRequest::Sobel(SobelParams {
            kernel_size,
            direction: SobelDirection::from_name(direction),
        }),
        Some(Filter::Laplacian { kernel_size }) => {
            FilterRequest::Laplacian(LaplacianParams { kernel_size })
        }
        None => FilterRequest::default(),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let request = match request_from_cli(&cli) {
        Ok(r) => r,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let image_bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Image: {} ({} bytes)",
        cli.image_path.display(),
        image_bytes.len(),
    );
    eprintln!("Request: {request:#?}");
    eprintln!("Runs: {}", cli.runs);
    eprintln!();

    let mut durations_ms = Vec::with_capacity(cli.runs);

    for run in 0..cli.runs {
        let started = Instant::now();
        match rinkaku_pipeline::process(&image_bytes, &request) {
            Ok(result) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
                durations_ms.push(elapsed_ms);
                println!(
                    "run {}/{}: {}x{} in {elapsed_ms:.3}ms",
                    run + 1,
                    cli.runs,
                    result.dimensions.width,
                    result.dimensions.height,
                );

                // Write the output PNG on the first run only.
                if run == 0 {
                    let display = color::gray_to_rgb(&result.edges);
                    match display.save(&cli.out) {
                        Ok(()) => eprintln!("Output written to {}", cli.out.display()),
                        Err(e) => {
                            eprintln!("Error writing {}: {e}", cli.out.display());
                            return ExitCode::FAILURE;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("Pipeline error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.runs > 1 {
        print_summary(&durations_ms);
    }

    ExitCode::SUCCESS
}

/// Print aggregated timing statistics across multiple runs.
#[allow(clippy::cast_precision_loss)]
fn print_summary(durations_ms: &[f64]) {
    debug_assert!(!durations_ms.is_empty(), "no durations to summarize");
    if durations_ms.is_empty() {
        return;
    }

    let min = durations_ms.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = durations_ms.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let mean = durations_ms.iter().sum::<f64>() / durations_ms.len() as f64;

    println!();
    println!(
        "Summary ({} runs): min={min:.3}ms  mean={mean:.3}ms  max={max:.3}ms",
        durations_ms.len(),
    );
}
