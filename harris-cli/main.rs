use clap::Parser;
use harris_cli::cli::{Args, Mode};
use harris_cli::{run_filter, FilterMode, HarrisPipeline, PipelineResult};
use harris_detect::DetectorConfig;
use log::warn;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors print clap's message and exit with status 2
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> PipelineResult<()> {
    let filter = match args.mode {
        Mode::Harris => return run_harris(args),
        Mode::Correlate => FilterMode::Correlate,
        Mode::Convolve => FilterMode::Convolve,
    };

    if let Some(path) = &args.config {
        warn!("ignoring detector config {} in filter mode", path.display());
    }

    let t0 = Instant::now();
    let field = run_filter(filter, &args.input, &args.output)?;
    println!("Time taken: {:.2?}", t0.elapsed());
    println!("Filtered to {}x{}", field.width(), field.height());
    println!("Saved result image as {}", args.output.display());
    Ok(())
}

fn run_harris(args: &Args) -> PipelineResult<()> {
    let config = match &args.config {
        Some(path) => DetectorConfig::load_toml(path)?,
        None => DetectorConfig::default(),
    };
    let pipeline = HarrisPipeline::from_config(&config)?;

    // Time the full pipeline
    let t0 = Instant::now();
    let corners = pipeline.run(&args.input, &args.output)?;
    println!("Time taken: {:.2?}", t0.elapsed());
    println!("Detected {} corners", corners.len());
    println!("Saved result image as {}", args.output.display());
    Ok(())
}
