pub mod gallery;

use bevy::prelude::*;

pub use gallery::GalleryScenePlugin;

/// Main scene plugin that coordinates all scene sub-plugins
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GalleryScenePlugin);
    }
}
