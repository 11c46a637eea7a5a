use crate::model::{Exhibit, ExhibitInfo, Facing, Room, RoomId};
use crate::registry::Catalog;
use bevy::math::{Vec2, Vec3};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// The catalog document shipped with the application.
pub const BUILTIN_CATALOG: &str = include_str!("../data/hall_of_flight.ron");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("duplicate room id `{0}`")]
    DuplicateRoom(RoomId),
    #[error("entrance `{0}` is not a declared room")]
    UnknownEntrance(RoomId),
    #[error("entrance `{0}` must not declare exhibits")]
    EntranceWithExhibits(RoomId),
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    entrance: String,
    /// Height exhibits hang at, shared by the whole gallery.
    portrait_height: f32,
    rooms: Vec<RawRoom>,
}

#[derive(Debug, Deserialize)]
struct RawRoom {
    id: String,
    label: String,
    /// (x, z) anchor in world units.
    anchor: (f32, f32),
    facing: Facing,
    #[serde(default)]
    exhibits: Vec<RawExhibit>,
}

#[derive(Debug, Deserialize)]
struct RawExhibit {
    /// (x, z) offset from the room anchor.
    slot: (f32, f32),
    label: String,
    era: String,
    achievement: String,
    quote: String,
    reference: String,
}

/// Builds the catalog shipped with the application.
pub fn builtin() -> Result<Catalog, CatalogError> {
    from_ron(BUILTIN_CATALOG)
}

/// Parses and validates a RON catalog document.
///
/// Exhibits are flattened room by room in declaration order; that order is
/// the navigation order and never changes afterwards.
pub fn from_ron(text: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = ron::from_str(text)?;
    let entrance = RoomId::new(raw.entrance);

    let mut seen = HashSet::new();
    let mut rooms = Vec::with_capacity(raw.rooms.len());
    let mut exhibits = Vec::new();

    for raw_room in raw.rooms {
        let id = RoomId::new(raw_room.id);
        if !seen.insert(id.clone()) {
            return Err(CatalogError::DuplicateRoom(id));
        }
        if id == entrance && !raw_room.exhibits.is_empty() {
            return Err(CatalogError::EntranceWithExhibits(id));
        }

        let anchor = Vec2::new(raw_room.anchor.0, raw_room.anchor.1);
        for raw_exhibit in raw_room.exhibits {
            exhibits.push(Exhibit {
                anchor: Vec3::new(
                    anchor.x + raw_exhibit.slot.0,
                    raw.portrait_height,
                    anchor.y + raw_exhibit.slot.1,
                ),
                facing: raw_room.facing,
                info: ExhibitInfo {
                    label: raw_exhibit.label,
                    era: raw_exhibit.era,
                    achievement: raw_exhibit.achievement,
                    quote: raw_exhibit.quote,
                    reference: raw_exhibit.reference,
                },
            });
        }

        rooms.push(Room {
            id,
            label: raw_room.label,
            anchor,
            facing: raw_room.facing,
        });
    }

    if !seen.contains(&entrance) {
        return Err(CatalogError::UnknownEntrance(entrance));
    }

    Ok(Catalog::new(rooms, exhibits, entrance))
}
