use bevy::prelude::{Commands, Component, Entity, Query, With};

/// Despawns every entity carrying the marker component.
pub fn cleanup<C: Component>(mut commands: Commands, query: Query<Entity, With<C>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
