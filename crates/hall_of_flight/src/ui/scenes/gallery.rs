mod lighting;
mod monument;
mod portraits;
mod world;

use bevy::prelude::*;
use catalog::{Catalog, Facing, Room};

pub use lighting::LightingPlugin;
pub use monument::MonumentPlugin;
pub use portraits::PortraitsPlugin;
pub use world::GalleryWorldPlugin;

/// Coordinates the static gallery: architecture, portraits, the memorial
/// monument and the lighting rig.
pub struct GalleryScenePlugin;

impl Plugin for GalleryScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            GalleryWorldPlugin,
            PortraitsPlugin,
            MonumentPlugin,
            LightingPlugin,
        ));
    }
}

/// Yaw rotation that turns a mesh's local +Z onto the facing's viewing
/// normal, so fronts point at the visitor.
pub(super) fn yaw_towards(facing: Facing) -> Quat {
    match facing {
        Facing::Front => Quat::IDENTITY,
        Facing::Right => Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Facing::Left => Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2),
    }
}

/// Whether any exhibit resolves to this room, using the same proximity match
/// the focus controller uses.
pub(super) fn room_owns_exhibits(catalog: &Catalog, room: &Room, radius: f32) -> bool {
    catalog.exhibits().iter().any(|exhibit| {
        catalog
            .owning_room(exhibit.anchor, radius)
            .is_some_and(|owner| owner.id == room.id)
    })
}
