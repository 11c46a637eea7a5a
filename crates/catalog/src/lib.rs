//! Museum catalog for Hall of Flight.
//!
//! The catalog is the single source of truth for the gallery's content: the
//! rooms (wings) of the building, and the flat, ordered exhibit sequence that
//! drives arrow-key stepping and the auto tour. It is built once at startup
//! from an embedded RON document and never mutated afterwards.

mod loader;
mod model;
mod registry;

pub use loader::{builtin, from_ron, CatalogError, BUILTIN_CATALOG};
pub use model::{Exhibit, ExhibitInfo, Facing, Room, RoomId};
pub use registry::{Catalog, StepDirection};
