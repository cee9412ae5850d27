//! Map lint tool: loads a generated `map.json`, builds the world, and
//! reports structural diagnostics.

use std::fs::File;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use lingomap::constants::DEFAULT_CELL_SIZE;
use lingomap::map::data::WorldMapData;
use lingomap::map::layout;
use lingomap::world::World;

pub fn main() -> ExitCode {
    // Setup tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).expect("Could not set global default");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path = std::env::args().nth(1).context("usage: lingomap <map.json>")?;
    let file = File::open(&path).with_context(|| format!("could not open {path}"))?;

    let data = WorldMapData::from_reader(file).context("could not decode map data")?;
    let world = World::new(data).context("world failed to load")?;

    let graph = world.graph();
    let bounds = graph.bounds();
    let size = layout::pixel_size(bounds, DEFAULT_CELL_SIZE);

    if let Some(metadata) = &world.map().metadata {
        println!("map: {}", metadata.name.native_language);
    }
    println!("locations: {}", graph.len());
    println!("connections: {}", graph.unique_edges().count());
    println!(
        "bounds: ({}, {}) .. ({}, {})",
        bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
    );
    println!("diagram size at {DEFAULT_CELL_SIZE}px cells: {}x{}", size.x, size.y);
    println!("starting location: {}", world.map().starting_location);

    let dangling = graph.dangling_edges().count();
    if dangling > 0 {
        println!("dangling edges: {dangling}");
    }
    if !world.map().unreachable().is_empty() {
        println!("unreachable locations: {}", world.map().unreachable().join(", "));
    }

    Ok(())
}
