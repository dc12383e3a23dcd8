use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use lux_core::{load_config, load_scene_graph};
use lux_renderer::{render, save_image, Camera, RenderSettings, World};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn run(args: &Args) -> Result<()> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let mut config = load_config(&args.config).with_context(|| format!("Failed to load config {}", args.config.display()))?;
    if let Some(output) = &args.output {
        config.output_file = output.clone();
    }

    let graph = load_scene_graph(&args.graph).with_context(|| format!("Failed to load scene graph {}", args.graph.display()))?;
    let world = World::bake(&graph, config.scene.clone()).context("Failed to build the scene")?;

    let camera = Camera::from_config(&config.camera);
    let settings = RenderSettings::from_config(&config).with_progress(!args.quiet);

    log::info!(
        "Rendering {}x{} image, {} samples per pixel, max depth {}, {} threads",
        camera.width(),
        camera.height(),
        settings.samples_per_pixel,
        settings.max_depth,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let image = render(&camera, &world, &settings).context("Render failed")?;
    log::info!("HDR image is finished");

    save_image(&image, &config.output_file).with_context(|| format!("Failed to save {}", config.output_file.display()))?;
    log::info!("Done in {}ms", start.elapsed().as_millis());

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level.into());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
