//! Framed portraits, one per catalog exhibit. The canvas and frame are
//! click targets: a pointer click requests focus for that exhibit through
//! the same message the tour uses.

use super::yaw_towards;
use crate::ui::focus::FocusExhibit;
use crate::utils::cleanup;
use crate::AppState;
use bevy::prelude::*;

const FRAME_WIDTH: f32 = 2.0;
const FRAME_HEIGHT: f32 = 2.6;
const CANVAS_INSET: f32 = 0.3;

/// Muted canvas tints so neighboring portraits read as distinct.
const CANVAS_TINTS: [Color; 6] = [
    Color::srgb(0.55, 0.48, 0.38),
    Color::srgb(0.42, 0.47, 0.54),
    Color::srgb(0.5, 0.42, 0.46),
    Color::srgb(0.44, 0.52, 0.44),
    Color::srgb(0.52, 0.46, 0.36),
    Color::srgb(0.4, 0.44, 0.5),
];

/// Plugin for the portrait exhibits
pub struct PortraitsPlugin;

impl Plugin for PortraitsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Gallery), spawn_portraits)
            .add_systems(OnExit(AppState::Gallery), cleanup::<ExhibitPortrait>);
    }
}

/// Marker component carrying the exhibit's sequence position.
#[derive(Component)]
pub struct ExhibitPortrait {
    #[allow(dead_code)]
    pub position: usize,
}

fn spawn_portraits(
    mut commands: Commands,
    catalog: Res<catalog::Catalog>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let frame_mesh = meshes.add(Cuboid::new(FRAME_WIDTH, FRAME_HEIGHT, 0.15));
    let canvas_mesh = meshes.add(Cuboid::new(
        FRAME_WIDTH - CANVAS_INSET,
        FRAME_HEIGHT - CANVAS_INSET,
        0.06,
    ));
    let plaque_mesh = meshes.add(Cuboid::new(0.9, 0.35, 0.06));

    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.42, 0.2),
        metallic: 0.4,
        perceptual_roughness: 0.4,
        ..default()
    });
    let plaque_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.65, 0.5),
        metallic: 0.6,
        perceptual_roughness: 0.3,
        ..default()
    });

    for (position, exhibit) in catalog.exhibits().iter().enumerate() {
        let rotation = yaw_towards(exhibit.facing);
        let normal = exhibit.facing.normal();
        let canvas_material = materials.add(StandardMaterial {
            base_color: CANVAS_TINTS[position % CANVAS_TINTS.len()],
            perceptual_roughness: 0.8,
            ..default()
        });

        commands
            .spawn((
                Mesh3d(frame_mesh.clone()),
                MeshMaterial3d(frame_material.clone()),
                Transform::from_translation(exhibit.anchor).with_rotation(rotation),
                ExhibitPortrait { position },
                Name::new(format!("Portrait: {}", exhibit.info.label)),
            ))
            .observe(
                move |_click: On<Pointer<Click>>, mut requests: MessageWriter<FocusExhibit>| {
                    requests.write(FocusExhibit {
                        position,
                        tour_hint: false,
                    });
                },
            )
            .with_children(|portrait| {
                portrait.spawn((
                    Mesh3d(canvas_mesh.clone()),
                    MeshMaterial3d(canvas_material),
                    Transform::from_xyz(0.0, 0.0, 0.09),
                    Name::new("Canvas"),
                ));
            });

        // Plaque below the frame, slightly off the wall.
        commands.spawn((
            Mesh3d(plaque_mesh.clone()),
            MeshMaterial3d(plaque_material.clone()),
            Transform::from_translation(
                exhibit.anchor + Vec3::new(0.0, -(FRAME_HEIGHT / 2.0 + 0.35), 0.0) + normal * 0.05,
            )
            .with_rotation(rotation),
            ExhibitPortrait { position },
            Name::new(format!("Plaque: {}", exhibit.info.label)),
        ));
    }
}
