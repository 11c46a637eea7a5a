use crate::model::{Exhibit, Room, RoomId};
use bevy::ecs::resource::Resource;
use bevy::math::{Vec2, Vec3};

/// Direction for index-based exhibit stepping (arrow keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Next,
    Previous,
}

impl StepDirection {
    fn delta(self) -> isize {
        match self {
            StepDirection::Next => 1,
            StepDirection::Previous => -1,
        }
    }
}

/// The immutable registry built from the catalog file.
///
/// Rooms keep their declaration order; exhibits are flattened room by room,
/// and their position in [`exhibits`](Self::exhibits) is the navigation
/// order for both the arrow keys and the auto tour.
#[derive(Debug, Clone, Resource)]
pub struct Catalog {
    rooms: Vec<Room>,
    exhibits: Vec<Exhibit>,
    entrance: RoomId,
}

impl Catalog {
    pub(crate) fn new(rooms: Vec<Room>, exhibits: Vec<Exhibit>, entrance: RoomId) -> Self {
        Self {
            rooms,
            exhibits,
            entrance,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    /// The designated entrance room (the lobby). It owns no exhibits and is
    /// skipped by [`owning_room`](Self::owning_room).
    pub fn entrance(&self) -> &RoomId {
        &self.entrance
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| &room.id == id)
    }

    /// Room by declaration position (drives the numeric room shortcuts).
    pub fn room_at(&self, position: usize) -> Option<&Room> {
        self.rooms.get(position)
    }

    pub fn exhibit(&self, position: usize) -> Option<&Exhibit> {
        self.exhibits.get(position)
    }

    pub fn exhibit_count(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    /// Resolves the room owning a world-space anchor by proximity: the first
    /// declared room whose anchor lies within `radius` of the point in the
    /// XZ plane. The entrance never owns exhibits and is excluded. Returns
    /// `None` when nothing matches; callers treat that as "no room".
    pub fn owning_room(&self, anchor: Vec3, radius: f32) -> Option<&Room> {
        let flat = Vec2::new(anchor.x, anchor.z);
        self.rooms
            .iter()
            .filter(|room| room.id != self.entrance)
            .find(|room| room.anchor.distance(flat) < radius)
    }

    /// Steps a 1-based display index one exhibit forward or backward,
    /// wrapping modulo the sequence length, and returns the new 0-based
    /// sequence position. `Next` walks the sequence in ascending order,
    /// `Previous` in descending order.
    pub fn step_position(&self, display_index: usize, direction: StepDirection) -> Option<usize> {
        let len = self.exhibits.len() as isize;
        if len == 0 {
            return None;
        }
        let current = display_index as isize - 1;
        Some((current + direction.delta()).rem_euclid(len) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExhibitInfo, Facing};

    fn info(label: &str) -> ExhibitInfo {
        ExhibitInfo {
            label: label.to_owned(),
            era: String::new(),
            achievement: String::new(),
            quote: String::new(),
            reference: String::new(),
        }
    }

    fn room(id: &str, x: f32, z: f32, facing: Facing) -> Room {
        Room {
            id: id.into(),
            label: id.to_owned(),
            anchor: Vec2::new(x, z),
            facing,
        }
    }

    fn catalog(exhibit_count: usize) -> Catalog {
        let rooms = vec![
            room("lobby", 0.0, 26.0, Facing::Front),
            room("west", -14.0, 10.0, Facing::Right),
            room("east", 14.0, 10.0, Facing::Left),
        ];
        let exhibits = (0..exhibit_count)
            .map(|n| Exhibit {
                anchor: Vec3::new(-14.0, 3.0, 10.0 + n as f32),
                facing: Facing::Right,
                info: info(&format!("exhibit {n}")),
            })
            .collect();
        Catalog::new(rooms, exhibits, "lobby".into())
    }

    #[test]
    fn step_wraps_forward_at_the_last_index() {
        for len in [1, 2, 5] {
            let catalog = catalog(len);
            // display index of the last exhibit is `len`
            assert_eq!(catalog.step_position(len, StepDirection::Next), Some(0));
        }
    }

    #[test]
    fn step_wraps_backward_at_index_zero() {
        for len in [1, 2, 5] {
            let catalog = catalog(len);
            // display index 1 is the first exhibit
            assert_eq!(
                catalog.step_position(1, StepDirection::Previous),
                Some(len - 1)
            );
        }
    }

    #[test]
    fn next_then_previous_returns_to_the_start() {
        let catalog = catalog(5);
        for start in 0..5usize {
            let display = start + 1;
            let forward = catalog.step_position(display, StepDirection::Next).unwrap();
            let back = catalog
                .step_position(forward + 1, StepDirection::Previous)
                .unwrap();
            assert_eq!(back, start);
        }
    }

    #[test]
    fn step_on_an_empty_sequence_is_none() {
        let catalog = catalog(0);
        assert_eq!(catalog.step_position(1, StepDirection::Next), None);
    }

    #[test]
    fn owning_room_skips_the_entrance() {
        let catalog = catalog(1);
        // A point right on the lobby anchor resolves to no room at all.
        let at_lobby = Vec3::new(0.0, 3.0, 26.0);
        assert!(catalog.owning_room(at_lobby, 8.0).is_none());
    }

    #[test]
    fn owning_room_matches_within_radius_only() {
        let catalog = catalog(1);
        let near_west = Vec3::new(-16.0, 3.0, 12.0);
        assert_eq!(
            catalog.owning_room(near_west, 8.0).map(|r| r.id.as_str()),
            Some("west")
        );
        assert!(catalog.owning_room(near_west, 1.0).is_none());
    }

    #[test]
    fn owning_room_prefers_the_first_declared_match() {
        let rooms = vec![
            room("lobby", 0.0, 26.0, Facing::Front),
            room("a", -14.0, 10.0, Facing::Right),
            room("b", -14.0, 6.0, Facing::Right),
        ];
        let catalog = Catalog::new(rooms, Vec::new(), "lobby".into());
        let between = Vec3::new(-14.0, 3.0, 8.0);
        assert_eq!(
            catalog.owning_room(between, 8.0).map(|r| r.id.as_str()),
            Some("a")
        );
    }
}
