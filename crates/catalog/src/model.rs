use bevy::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Identifier of a room, as declared in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Which way a room (and every exhibit in it) is viewed from.
///
/// The viewing normal points from the room anchor towards the visitor:
/// a `Right`-facing room sits on the west side of the building and is
/// entered from the corridor to its east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Facing {
    Front,
    Left,
    Right,
}

impl Facing {
    /// Unit viewing normal in the XZ plane.
    pub fn normal(self) -> Vec3 {
        match self {
            Facing::Front => Vec3::Z,
            Facing::Left => Vec3::NEG_X,
            Facing::Right => Vec3::X,
        }
    }

    /// Unit direction along the wall the exhibits hang on.
    pub fn tangent(self) -> Vec3 {
        self.normal().cross(Vec3::Y)
    }
}

/// A named exhibition space. Rooms are static: defined once at startup,
/// never mutated or destroyed.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub label: String,
    /// Anchor position in world units, `x` across the building, `y` = depth (world z).
    pub anchor: Vec2,
    pub facing: Facing,
}

impl Room {
    /// The anchor lifted into world space at the given height.
    pub fn anchor_at(&self, height: f32) -> Vec3 {
        Vec3::new(self.anchor.x, height, self.anchor.y)
    }
}

/// Display payload shown in the exhibit panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitInfo {
    pub label: String,
    pub era: String,
    pub achievement: String,
    pub quote: String,
    /// External reference URL.
    pub reference: String,
}

/// A focusable item in the gallery. The sequence position of an exhibit in
/// [`Catalog::exhibits`](crate::Catalog::exhibits) is its tour and arrow-key
/// order.
#[derive(Debug, Clone)]
pub struct Exhibit {
    /// World-space anchor, derived from the owning room's anchor plus the
    /// in-room slot offset at portrait height.
    pub anchor: Vec3,
    /// Inherited from the owning room.
    pub facing: Facing,
    pub info: ExhibitInfo,
}
