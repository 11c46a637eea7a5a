pub mod cameras;
pub mod focus;
pub mod hud;
pub mod scenes;
pub mod tour;

use crate::AppState;
use bevy::prelude::*;

/// Per-frame execution order of the gallery core.
///
/// Everything here runs on the single main-world schedule; event handlers
/// write messages that the later sets consume in the same frame, so a click
/// can start easing the camera on the frame it happened.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GallerySet {
    /// User intents: keyboard and UI buttons.
    Intents,
    /// Auto-tour toggle and timer advancement.
    Tour,
    /// Focus requests: focus / step / return-to-room messages.
    FocusIntents,
    /// Room navigation: request handling, then the transition tick.
    Navigation,
    /// Focus motion: pending-focus settling and the locked glide.
    FocusMotion,
    /// Orbit-control handoff and camera pose bookkeeping.
    ControlSync,
    /// Presentation updates: panel, highlights, button labels.
    Present,
}

/// Main UI plugin that coordinates cameras, scenes, the HUD and the
/// interaction state machines.
pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GallerySet::Intents,
                GallerySet::Tour,
                GallerySet::FocusIntents,
                GallerySet::Navigation,
                GallerySet::FocusMotion,
                GallerySet::ControlSync,
                GallerySet::Present,
            )
                .chain()
                .run_if(in_state(AppState::Gallery)),
        )
        .add_plugins((
            cameras::CameraPlugin,
            focus::FocusPlugin,
            tour::TourPlugin,
            scenes::ScenePlugin,
            hud::HudPlugin,
        ));
    }
}
