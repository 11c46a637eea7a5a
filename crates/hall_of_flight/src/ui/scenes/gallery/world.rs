//! Museum architecture: floors, walls, the lobby arch and corridor benches.
//! Plain primitive meshes laid out from the catalog's room anchors.

use super::{room_owns_exhibits, yaw_towards};
use crate::ui::cameras::defaults::GalleryDefaults;
use crate::utils::cleanup;
use crate::AppState;
use bevy::prelude::*;
use catalog::Catalog;

const WING_SIZE: f32 = 18.0;
const WALL_HEIGHT: f32 = 6.0;
const WALL_THICKNESS: f32 = 0.4;
const CORRIDOR_WIDTH: f32 = 8.0;
const CORRIDOR_LENGTH: f32 = 72.0;

/// Plugin for the gallery's static architecture
pub struct GalleryWorldPlugin;

impl Plugin for GalleryWorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Gallery), spawn_world)
            .add_systems(OnExit(AppState::Gallery), cleanup::<GalleryWorld>);
    }
}

/// Marker component for architecture entities
#[derive(Component)]
struct GalleryWorld;

fn spawn_world(
    mut commands: Commands,
    catalog: Res<Catalog>,
    defaults: Res<GalleryDefaults>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.32, 0.29, 0.26),
        perceptual_roughness: 0.9,
        ..default()
    });
    let carpet_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.12, 0.14),
        perceptual_roughness: 1.0,
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.78, 0.74, 0.66),
        perceptual_roughness: 0.95,
        ..default()
    });
    let wood_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.26, 0.15),
        perceptual_roughness: 0.7,
        ..default()
    });

    // Corridor floor with a carpet runner down the spine.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(CORRIDOR_WIDTH, 0.2, CORRIDOR_LENGTH))),
        MeshMaterial3d(floor_material.clone()),
        Transform::from_xyz(0.0, -0.1, 0.0),
        GalleryWorld,
        Name::new("Corridor Floor"),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.4, 0.22, CORRIDOR_LENGTH - 4.0))),
        MeshMaterial3d(carpet_material),
        Transform::from_xyz(0.0, -0.08, 0.0),
        GalleryWorld,
        Name::new("Carpet Runner"),
    ));

    // One floor patch and three walls per room; the corridor side stays
    // open, and the entrance is an open portico with no walls at all.
    for room in catalog.rooms() {
        let anchor = room.anchor;
        let rotation = yaw_towards(room.facing);
        let normal = room.facing.normal();
        let tangent = room.facing.tangent();

        // Floor reaches one unit past the room towards the corridor so the
        // slabs meet without a seam.
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(WING_SIZE, 0.2, WING_SIZE + 2.0))),
            MeshMaterial3d(floor_material.clone()),
            Transform::from_translation(Vec3::new(anchor.x, -0.1, anchor.y) + normal)
                .with_rotation(rotation),
            GalleryWorld,
            Name::new(format!("Floor: {}", room.id)),
        ));

        if &room.id == catalog.entrance() {
            continue;
        }

        // Back wall, behind the exhibits.
        let back_center =
            Vec3::new(anchor.x, WALL_HEIGHT / 2.0, anchor.y) - normal * (WING_SIZE / 2.0);
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(WING_SIZE, WALL_HEIGHT, WALL_THICKNESS))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(back_center).with_rotation(rotation),
            GalleryWorld,
            Name::new(format!("Back Wall: {}", room.id)),
        ));

        // Side walls.
        for side in [-1.0f32, 1.0] {
            let side_center =
                Vec3::new(anchor.x, WALL_HEIGHT / 2.0, anchor.y) + tangent * (side * WING_SIZE / 2.0);
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(WALL_THICKNESS, WALL_HEIGHT, WING_SIZE))),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_translation(side_center).with_rotation(rotation),
                GalleryWorld,
                Name::new(format!("Side Wall: {}", room.id)),
            ));
        }

        // Display partition the portraits hang on, a short way behind the
        // exhibit anchors.
        if room_owns_exhibits(&catalog, room, defaults.focus.room_match_radius) {
            let partition_center =
                Vec3::new(anchor.x, 2.25, anchor.y) - normal * 3.3;
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(WING_SIZE - 4.0, 4.5, 0.3))),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_translation(partition_center).with_rotation(rotation),
                GalleryWorld,
                Name::new(format!("Display Partition: {}", room.id)),
            ));
        }
    }

    // Lobby arch over the entrance.
    if let Some(lobby) = catalog.room(catalog.entrance()) {
        let base = Vec3::new(lobby.anchor.x, 0.0, lobby.anchor.y);
        for side in [-3.0f32, 3.0] {
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.8, 5.0, 0.8))),
                MeshMaterial3d(wall_material.clone()),
                Transform::from_translation(base + Vec3::new(side, 2.5, 0.0)),
                GalleryWorld,
                Name::new("Lobby Pillar"),
            ));
        }
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(7.6, 0.8, 0.8))),
            MeshMaterial3d(wall_material),
            Transform::from_translation(base + Vec3::new(0.0, 5.4, 0.0)),
            GalleryWorld,
            Name::new("Lobby Lintel"),
        ));
    }

    // Benches along the corridor.
    for z in [-16.0f32, 0.0, 16.0] {
        for side in [-1.0f32, 1.0] {
            commands.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.6, 0.5, 2.4))),
                MeshMaterial3d(wood_material.clone()),
                Transform::from_xyz(side * (CORRIDOR_WIDTH / 2.0 - 1.0), 0.25, z),
                GalleryWorld,
                Name::new("Bench"),
            ));
        }
    }
}
