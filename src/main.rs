#![warn(clippy::all)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use sparse_life::{render, Config, Coord, DefaultEngine, Engine, GenerationPacer};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sparse_life=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let seed = config.seed().context("failed to build the seed")?;

    let mut engine = DefaultEngine::new(seed);
    let (rows, cols) = engine.dimensions();
    info!(
        rows,
        cols,
        population = engine.population(),
        "starting simulation"
    );

    let mut pacer = GenerationPacer::new(Duration::from_millis(config.delay_ms));
    let mut reported_extinction = false;
    loop {
        if config.render {
            let frame = match config.viewport {
                Some(v) => render::render_viewport(
                    engine.live_cells(),
                    Coord::new(v.top, v.left),
                    v.rows,
                    v.cols,
                ),
                None => render::render(&engine),
            };
            println!("{frame}");
        }
        if config
            .max_generations
            .is_some_and(|max| engine.generation() >= max)
        {
            break;
        }

        engine.advance();
        if engine.live_cells().is_empty() && !reported_extinction {
            info!(generation = engine.generation(), "population died out");
            reported_extinction = true;
        }
        pacer.wait();
    }

    info!(
        generations_per_second = pacer.rate(),
        "finished\n{}",
        engine.statistics()
    );
    Ok(())
}
