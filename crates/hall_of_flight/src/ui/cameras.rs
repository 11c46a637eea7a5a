pub mod defaults;
mod navigator;
mod orbit;

use crate::ui::GallerySet;
use bevy::prelude::*;

pub use navigator::{ActiveRoomChanged, NavFrame, NavigateToRoom, RoomNavigator};

/// Marker component for the single gallery camera.
#[derive(Component)]
pub struct GalleryCamera;

/// The camera pose the core animates: eye position plus look-at target.
///
/// This is the single source of truth while the navigator or the focus
/// glide drives the camera; while the visitor free-looks it is refreshed
/// from the orbit camera instead.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        // Placeholder in front of the lobby; overwritten on the first frame
        // from the spawned orbit camera.
        Self {
            eye: Vec3::new(0.0, 6.0, 44.0),
            target: Vec3::new(0.0, 2.5, 20.0),
        }
    }
}

pub(super) fn apply_pose(transform: &mut Transform, pose: &CameraPose) {
    *transform = Transform::from_translation(pose.eye).looking_at(pose.target, Vec3::Y);
}

/// Main camera plugin: room navigation plus the orbit free-look camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(orbit::OrbitCameraPlugin)
            .init_resource::<RoomNavigator>()
            .init_resource::<CameraPose>()
            .add_message::<NavigateToRoom>()
            .add_message::<ActiveRoomChanged>()
            .add_systems(
                Update,
                (
                    navigator::handle_navigation_requests,
                    navigator::drive_navigation,
                )
                    .chain()
                    .in_set(GallerySet::Navigation),
            );
    }
}
