//! Memorial monument: a plinth with a bronze eagle silhouette that turns
//! slowly. It lives in the first non-entrance room that owns no exhibits
//! (the memorial hall in the shipped catalog); a catalog without such a
//! room simply has no monument.

use super::room_owns_exhibits;
use crate::ui::cameras::defaults::GalleryDefaults;
use crate::utils::cleanup;
use crate::AppState;
use bevy::prelude::*;
use catalog::Catalog;

/// Plugin for the memorial centerpiece
pub struct MonumentPlugin;

impl Plugin for MonumentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Gallery), spawn_monument)
            .add_systems(OnExit(AppState::Gallery), cleanup::<Monument>)
            .add_systems(
                Update,
                rotate_monument.run_if(in_state(AppState::Gallery)),
            );
    }
}

/// Marker component for monument entities
#[derive(Component)]
struct Monument;

/// Component for the slowly turning eagle
#[derive(Component)]
struct MonumentRotator {
    /// Radians per second.
    speed: f32,
}

fn spawn_monument(
    mut commands: Commands,
    catalog: Res<Catalog>,
    defaults: Res<GalleryDefaults>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = defaults.focus.room_match_radius;
    let Some(hall) = catalog
        .rooms()
        .iter()
        .find(|room| &room.id != catalog.entrance() && !room_owns_exhibits(&catalog, room, radius))
    else {
        return;
    };
    let base = Vec3::new(hall.anchor.x, 0.0, hall.anchor.y);

    let stone_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.6, 0.62),
        perceptual_roughness: 0.8,
        ..default()
    });
    let bronze_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.32, 0.16),
        metallic: 0.8,
        perceptual_roughness: 0.35,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(1.8, 1.2))),
        MeshMaterial3d(stone_material.clone()),
        Transform::from_translation(base + Vec3::Y * 0.6),
        Monument,
        Name::new("Monument Plinth"),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(0.5, 2.6))),
        MeshMaterial3d(stone_material),
        Transform::from_translation(base + Vec3::Y * 2.5),
        Monument,
        Name::new("Monument Column"),
    ));

    // The eagle: body plus two swept wings, all turning as one.
    commands
        .spawn((
            Transform::from_translation(base + Vec3::Y * 4.2),
            Visibility::default(),
            MonumentRotator { speed: 0.25 },
            Monument,
            Name::new("Monument Eagle"),
        ))
        .with_children(|eagle| {
            eagle.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.5, 0.9, 1.4))),
                MeshMaterial3d(bronze_material.clone()),
                Transform::default(),
                Name::new("Eagle Body"),
            ));
            for side in [-1.0f32, 1.0] {
                eagle.spawn((
                    Mesh3d(meshes.add(Cuboid::new(2.4, 0.1, 0.8))),
                    MeshMaterial3d(bronze_material.clone()),
                    Transform::from_xyz(side * 1.4, 0.35, 0.0)
                        .with_rotation(Quat::from_rotation_z(side * 0.35)),
                    Name::new("Eagle Wing"),
                ));
            }
        });
}

fn rotate_monument(time: Res<Time>, mut query: Query<(&mut Transform, &MonumentRotator)>) {
    for (mut transform, rotator) in &mut query {
        transform.rotate_y(rotator.speed * time.delta_secs());
    }
}
