//! Headless one-shot generator: build the city, print the report, exit.

use bevy::app::{App, AppExit, Startup};
use bevy::log::{error, info, LogPlugin};
use bevy::prelude::EventWriter;

use generation::{generate_city, GenContext};

fn main() -> AppExit {
    App::new()
        .add_plugins(LogPlugin::default())
        .add_systems(Startup, run_generation)
        .run()
}

fn run_generation(mut exit: EventWriter<AppExit>) {
    let mut ctx = match std::env::var("CITYGEN_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
    {
        Some(seed) => GenContext::with_seed(seed),
        None => GenContext::new(),
    };

    match generate_city(&mut ctx) {
        Ok(report) => {
            info!(
                "generated {} objects in {} groups ({} material graphs, {} skips)",
                report.object_count,
                report.group_count,
                report.material_count,
                report.skipped
            );
            for log in &report.building_logs {
                info!(
                    "  {}: {:?}, {} slabs, {} corridors",
                    log.building,
                    log.state(),
                    log.slab_count,
                    log.corridor_count
                );
            }
            exit.send(AppExit::Success);
        }
        Err(err) => {
            error!("generation failed: {err}");
            exit.send(AppExit::error());
        }
    }
}
