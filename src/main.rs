//! Offline fold demo.
//!
//! Runs an unfold followed by a fold against the recording surface with the
//! deterministic driver, logging every step. Run with `RUST_LOG=debug` to
//! see per-step panel geometry.

use std::path::PathBuf;

use clap::Parser;
use paperfold::driver::Driver;
use paperfold::geometry::{step_style, unfold_style_at, Action, Dimensions};
use paperfold::surface::RecordingSurface;
use paperfold::{FoldError, FoldOptions, PaperFold};

#[derive(Parser, Debug)]
#[command(name = "paperfold", about = "Simulate a paper fold sequence")]
struct Args {
    /// Options preset (TOML). Missing keys use defaults.
    #[arg(short, long)]
    options: Option<PathBuf>,
    /// Width of the closed element, in px.
    #[arg(long, default_value_t = 300.0)]
    width: f64,
    /// Height of the closed element, in px.
    #[arg(long, default_value_t = 200.0)]
    height: f64,
    /// Log the eased footprint of each unfolding step every MS ms.
    #[arg(long, value_name = "MS")]
    trace: Option<u64>,
    /// Write the effective options to this TOML file.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,
    /// Simulate a host without transition support.
    #[arg(long)]
    no_transitions: bool,
}

/// Log the paper's footprint as each unfolding step eases in.
fn trace_unfold(options: &FoldOptions, initial: &Dimensions, every_ms: u64) {
    let every = every_ms.max(1);
    for step in 0..options.folds {
        let from = unfold_style_at(initial, &options.fold_direction, step);
        let to = step_style(Action::Unfold, options.direction(step), &from);
        let mut t = 0;
        loop {
            let progress = options
                .easing
                .evaluate(t as f64 / options.speed.max(1) as f64);
            let rect = from.lerp(&to, progress);
            log::info!(
                "  step {step} +{t}ms: {:.1}x{:.1} at ({:.1}, {:.1})",
                rect.width,
                rect.height,
                rect.left,
                rect.top
            );
            if t >= options.speed {
                break;
            }
            t = (t + every).min(options.speed);
        }
    }
}

fn run(args: &Args) -> Result<(), FoldError> {
    let options = match &args.options {
        Some(path) => FoldOptions::load(path)?,
        None => FoldOptions::default(),
    };

    let mut surface = RecordingSurface::new(args.width, args.height);
    if args.no_transitions {
        surface = surface.without_transitions();
    }
    let mut fold = PaperFold::new(options, &mut surface)
        .on_end_unfolding(|| log::info!("onEndUnfolding"))
        .on_end_folding(|| log::info!("onEndFolding"));
    log::info!(
        "{}x{} element opens to {}x{}",
        args.width,
        args.height,
        fold.final_size().width,
        fold.final_size().height
    );

    let mut driver = Driver::new();
    if let Some(wake) = fold.unfold(&mut surface) {
        let translation = fold.container_translation();
        log::info!("container moves by ({}, {})", translation.x, translation.y);
        let _ = driver.run(&mut fold, &mut surface, wake);
    }
    log::info!("status after unfold: {} at {:?}", fold.status(), driver.now());

    if let Some(every) = args.trace {
        trace_unfold(fold.options(), fold.initial(), every);
    }

    if let Some(wake) = fold.fold(&mut surface) {
        let _ = driver.run(&mut fold, &mut surface, wake);
    }
    log::info!("status after fold: {} at {:?}", fold.status(), driver.now());

    log::info!(
        "{} surface operations, {} panel mounts, {} scheduler events",
        surface.ops().len(),
        surface.mount_count(),
        driver.ticks().len()
    );

    if let Some(path) = &args.save {
        fold.options().save(path)?;
        log::info!("options saved to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
