use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tflite_inspect::{Interpreter, OutputFormat, Report};

#[derive(Parser)]
#[command(name = "tflite-inspect")]
#[command(about = "Print the input and output tensor details of a TensorFlow Lite model", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the .tflite model file
    #[arg(env = "TFLITE_MODEL")]
    model: PathBuf,

    /// Output format (debug, pretty, json)
    #[arg(short, long, default_value = "debug")]
    format: OutputFormat,

    /// Also print the details of every tensor
    #[arg(long)]
    all_tensors: bool,

    /// Also print the model's signatures
    #[arg(long)]
    signatures: bool,

    /// Resize an input before allocation, e.g. `--resize 0=1,320,320,3`
    #[arg(long, value_name = "INDEX=DIMS", value_parser = parse_resize)]
    resize: Vec<Resize>,

    /// Only allow resizing dimensions that are dynamic (-1) in the shape signature
    #[arg(long, requires = "resize")]
    strict: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
struct Resize {
    index: usize,
    dims: Vec<i32>,
}

fn parse_resize(s: &str) -> Result<Resize, String> {
    let (index, dims) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=DIMS, got '{}'", s))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid tensor index '{}': {}", index, e))?;
    let dims = dims
        .split(',')
        .map(|d| {
            d.trim()
                .parse::<i32>()
                .map_err(|e| format!("invalid dimension '{}': {}", d, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Resize { index, dims })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "tflite_inspect=debug"
    } else {
        "tflite_inspect=warn"
    };

    // stdout carries the report; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = inspect(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn inspect(cli: &Cli) -> tflite_inspect::Result<()> {
    let mut interpreter = Interpreter::from_path(&cli.model)?;

    let model = interpreter.model();
    tracing::debug!(
        version = model.data().version,
        description = model.data().description.as_deref().unwrap_or(""),
        min_runtime_version = model.min_runtime_version().unwrap_or("unknown"),
        operator_codes = model.data().operator_codes.len(),
        operators = model.data().primary_subgraph().operator_count,
        "model metadata"
    );

    for resize in &cli.resize {
        interpreter.resize_tensor_input(resize.index, &resize.dims, cli.strict)?;
    }
    interpreter.allocate_tensors()?;

    let input_details = interpreter.input_details()?;
    let output_details = interpreter.output_details()?;

    // Render everything before writing so a failure leaves stdout empty
    let mut report = Report::new(cli.format);
    report
        .section("Input Details", &input_details)?
        .section("Output Details", &output_details)?;
    if cli.all_tensors {
        report.section("Tensor Details", &interpreter.tensor_details()?)?;
    }
    if cli.signatures {
        report.section("Signatures", &interpreter.signature_list())?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.finish().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
