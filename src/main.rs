mod cli;

use clap::Parser;
use log::*;
use std::process::ExitCode;

type AnyResult<T = ()> = anyhow::Result<T>;

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .format_timestamp(None)
        .filter_level(LevelFilter::Info)
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_default())
        .init();

    let args = cli::Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> AnyResult {
    use anyhow::Context;

    let scene = raycast::load_scene_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        "Loaded {} objects from {} for a {}x{} image",
        scene.len(),
        args.input.display(),
        args.width,
        args.height
    );
    scene.log_summary();

    // Image output is the rendering stage's job.
    warn!("Rendering is not part of raycast; {} was not written", args.output.display());
    Ok(())
}
