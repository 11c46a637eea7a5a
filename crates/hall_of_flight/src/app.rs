use crate::ui::cameras::defaults::GalleryDefaults;
use anyhow::Context;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::{log::LogPlugin, prelude::*};
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::filter_fn, fmt, prelude::*};

const APP_ID: &str = "hall_of_flight";
const DEFAULTS_FILE: &str = "config/defaults.ron";
const LOGS_DIR: &str = "logs";

/// Keeps the non-blocking log writer alive for the lifetime of the app.
#[derive(Resource)]
struct LogWriterGuard(#[allow(dead_code)] tracing_appender::non_blocking::WorkerGuard);

pub fn init() -> anyhow::Result<App> {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .build()
            .disable::<LogPlugin>()
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Hall of Flight".to_string(),
                    ..default()
                }),
                ..default()
            }),
    );
    // Click-to-focus uses the built-in mesh picking backend.
    app.add_plugins(MeshPickingPlugin);

    app.insert_resource(GalleryDefaults::load_or_default(Path::new(DEFAULTS_FILE)));

    let catalog = catalog::builtin().context("embedded catalog is invalid")?;
    app.insert_resource(catalog);

    app.add_systems(Startup, setup_logging);
    Ok(app)
}

fn setup_logging(world: &mut World) {
    #[cfg(debug_assertions)]
    let level = LevelFilter::INFO;

    #[cfg(not(debug_assertions))]
    let level = LevelFilter::WARN;

    let console_layer = fmt::Layer::default()
        .with_target(true)
        .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

    // File layer is best-effort: an unwritable logs directory degrades to
    // console-only logging instead of aborting.
    match std::fs::create_dir_all(LOGS_DIR) {
        Ok(()) => {
            let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
            let file_appender =
                tracing_appender::rolling::never(LOGS_DIR, format!("{APP_ID}.{timestamp}.log"));
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::Layer::default()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

            tracing_subscriber::registry()
                .with(file_layer)
                .with(console_layer)
                .init();

            world.insert_resource(LogWriterGuard(guard));
        }
        Err(err) => {
            tracing_subscriber::registry().with(console_layer).init();
            warn!("could not create {LOGS_DIR}/, logging to console only: {err}");
        }
    }
}
