//! Free-look orbit camera for the time between interactions.
//!
//! While an exhibit is focused or a room transition is in flight the orbit
//! controls are disabled and the core drives the camera transform directly;
//! whenever control returns to the visitor the orbit parameters are
//! re-seeded from the final pose so the handoff does not jump.

use super::defaults::GalleryDefaults;
use super::{CameraPose, GalleryCamera, RoomNavigator};
use crate::ui::focus::FocusController;
use crate::ui::GallerySet;
use crate::AppState;
use bevy::prelude::*;
use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin, TouchControls};
use catalog::Catalog;

pub(super) struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanOrbitCameraPlugin)
            .add_systems(OnEnter(AppState::Gallery), spawn_camera)
            .add_systems(
                Update,
                (sync_camera_lock, refresh_pose_from_orbit)
                    .chain()
                    .in_set(GallerySet::ControlSync),
            );
    }
}

fn spawn_camera(mut commands: Commands, defaults: Res<GalleryDefaults>, catalog: Res<Catalog>) {
    let orbit = &defaults.orbit;
    let focus = catalog
        .room(catalog.entrance())
        .map(|lobby| lobby.anchor_at(orbit.focus_height))
        .unwrap_or(Vec3::new(0.0, orbit.focus_height, 0.0));

    commands.spawn((
        Camera3d::default(),
        Transform::default(),
        PanOrbitCamera {
            focus,
            yaw: Some(orbit.yaw),
            pitch: Some(orbit.pitch),
            radius: Some(orbit.radius),

            // Limits
            pitch_upper_limit: Some(orbit.pitch_max),
            pitch_lower_limit: Some(orbit.pitch_min),
            zoom_upper_limit: Some(orbit.zoom_max),
            zoom_lower_limit: orbit.zoom_min,

            // Sensitivities
            orbit_sensitivity: orbit.orbit_sensitivity,
            pan_sensitivity: orbit.pan_sensitivity,
            zoom_sensitivity: orbit.zoom_sensitivity,

            button_orbit: MouseButton::Left,
            button_pan: MouseButton::Right,
            allow_upside_down: false,
            touch_controls: TouchControls::TwoFingerOrbit,
            ..default()
        },
        GalleryCamera,
        Name::new("Gallery Camera"),
    ));
}

/// Orbit/pan/zoom are enabled iff no exhibit is focused and no navigation is
/// in flight. On the release edge the orbit state is re-seeded so the camera
/// does not snap back to stale parameters.
fn sync_camera_lock(
    focus: Res<FocusController>,
    navigator: Res<RoomNavigator>,
    pose: Res<CameraPose>,
    mut cameras: Query<&mut PanOrbitCamera, With<GalleryCamera>>,
) {
    let Ok(mut orbit_camera) = cameras.single_mut() else {
        return;
    };
    let enabled = !focus.is_locked() && !navigator.is_navigating();
    if orbit_camera.enabled != enabled {
        if enabled {
            seed_from_pose(&mut orbit_camera, &pose);
        }
        orbit_camera.enabled = enabled;
    }
}

/// While the visitor free-looks, the shared pose follows the orbit camera so
/// the next navigation or focus starts from the right place.
fn refresh_pose_from_orbit(
    focus: Res<FocusController>,
    navigator: Res<RoomNavigator>,
    mut pose: ResMut<CameraPose>,
    cameras: Query<(&Transform, &PanOrbitCamera), With<GalleryCamera>>,
) {
    if focus.is_locked() || navigator.is_navigating() {
        return;
    }
    let Ok((transform, orbit_camera)) = cameras.single() else {
        return;
    };
    pose.eye = transform.translation;
    pose.target = orbit_camera.focus;
}

/// Rebuilds yaw/pitch/radius/focus from an eye + target pose. Inverse of the
/// orbit geometry: offset = (h·sin yaw, r·sin pitch, h·cos yaw), h = r·cos pitch.
pub(super) fn seed_from_pose(camera: &mut PanOrbitCamera, pose: &CameraPose) {
    let offset = pose.eye - pose.target;
    let radius = offset.length().max(0.1);
    let yaw = offset.x.atan2(offset.z);
    let pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

    camera.focus = pose.target;
    camera.target_focus = pose.target;
    camera.yaw = Some(yaw);
    camera.target_yaw = yaw;
    camera.pitch = Some(pitch);
    camera.target_pitch = pitch;
    camera.radius = Some(radius);
    camera.target_radius = radius;
}
