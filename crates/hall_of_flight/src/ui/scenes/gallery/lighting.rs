use crate::utils::cleanup;
use crate::AppState;
use bevy::prelude::*;
use catalog::Catalog;

/// Plugin for managing scene lighting
pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Gallery), setup_lighting)
            .add_systems(OnExit(AppState::Gallery), cleanup::<LightingEntity>);
    }
}

/// Marker component for lighting entities
#[derive(Component)]
struct LightingEntity;

fn setup_lighting(
    mut commands: Commands,
    catalog: Res<Catalog>,
    ambient_light: Option<ResMut<AmbientLight>>,
) {
    if let Some(mut ambient_light) = ambient_light {
        ambient_light.brightness = 250.0;
        ambient_light.color = Color::srgb(1.0, 0.98, 0.92);
    }

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_xyz(-14.0, 24.0, 18.0).looking_at(Vec3::ZERO, Vec3::Y),
        LightingEntity,
        Name::new("Main Directional Light"),
    ));

    // A warm ceiling light over every room.
    for room in catalog.rooms() {
        commands.spawn((
            PointLight {
                color: Color::srgb(1.0, 0.93, 0.82),
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(room.anchor_at(5.5)),
            LightingEntity,
            Name::new(format!("Room Light: {}", room.id)),
        ));
    }
}
