use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Tuning knobs for the gallery, grouped per concern. Compiled defaults can
/// be overridden by an optional RON file (see
/// [`load_or_default`](Self::load_or_default)); a missing file is the normal
/// case, an unreadable one falls back with a warning.
#[derive(Resource, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GalleryDefaults {
    pub navigation: NavigationDefaults,
    pub focus: FocusDefaults,
    pub tour: TourDefaults,
    pub orbit: OrbitDefaults,
}

impl GalleryDefaults {
    pub fn load_or_default(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match ron::from_str(&text) {
            Ok(defaults) => defaults,
            Err(err) => {
                tracing::warn!("ignoring invalid defaults file {}: {err}", path.display());
                Self::default()
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavigationDefaults {
    /// Camera distance from the room anchor along the room's viewing normal.
    pub approach_distance: f32,
    /// Camera height while viewing a room or traversing the corridor.
    pub eye_height: f32,
    /// Height of the look-at point on the room anchor.
    pub look_height: f32,
    /// Fixed progress increment per rendered frame, not wall-clock based;
    /// perceived duration scales with frame rate.
    pub progress_per_frame: f32,
}

impl Default for NavigationDefaults {
    fn default() -> Self {
        Self {
            approach_distance: 7.0,
            eye_height: 4.0,
            look_height: 2.6,
            progress_per_frame: 0.012, // ~1.4s at 60fps
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FocusDefaults {
    /// Camera distance from a focused exhibit along its viewing normal.
    pub view_distance: f32,
    /// Per-frame exponential-decay factor of the focus glide.
    pub glide_factor: f32,
    /// Delay in seconds between a room arrival and applying a pending focus.
    pub settle_delay: f32,
    /// Proximity radius for resolving the room that owns an exhibit. Rooms
    /// anchored closer together than twice this radius would resolve
    /// ambiguously (first declaration wins).
    pub room_match_radius: f32,
}

impl Default for FocusDefaults {
    fn default() -> Self {
        Self {
            view_distance: 4.5,
            glide_factor: 0.08,
            settle_delay: 0.25,
            room_match_radius: 8.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TourDefaults {
    /// Dwell time per exhibit in seconds.
    pub period: f32,
}

impl Default for TourDefaults {
    fn default() -> Self {
        Self { period: 6.0 }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OrbitDefaults {
    /// Height of the initial orbit focus above the lobby floor.
    pub focus_height: f32,
    /// yaw = 0 looks along -Z; positive pitch looks down.
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    /// Limits
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Input sensitivities
    pub orbit_sensitivity: f32,
    pub pan_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for OrbitDefaults {
    fn default() -> Self {
        Self {
            focus_height: 2.0,
            yaw: 0.0,
            pitch: 0.3, // slightly above the horizon, looking down
            radius: 14.0,
            zoom_min: 2.0,
            zoom_max: 60.0,
            pitch_min: -0.15,
            pitch_max: 1.3,
            orbit_sensitivity: 1.5,
            pan_sensitivity: 0.5,
            zoom_sensitivity: 0.5,
        }
    }
}
