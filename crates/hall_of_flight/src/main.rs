mod app;
mod input;
mod ui;
mod utils;

use crate::input::InputPlugin;
use crate::ui::UIPlugin;

use bevy::prelude::*;

/// Application state tracking where we are in the startup flow.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Boot,
    Gallery,
}

fn main() -> anyhow::Result<()> {
    let mut app = app::init()?;

    app.init_state::<AppState>();

    app.add_plugins((InputPlugin, UIPlugin));
    app.add_systems(Update, enter_gallery.run_if(in_state(AppState::Boot)));

    app.run();
    Ok(())
}

/// The catalog is embedded, so boot has nothing to wait for.
fn enter_gallery(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::Gallery);
}
