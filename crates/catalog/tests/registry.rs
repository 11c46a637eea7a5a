//! Integration tests for the catalog loader and lookup helpers.
//!
//! NOTE: std-only assertions, no extra dev-dependencies.

use catalog::{from_ron, CatalogError, StepDirection};
use bevy::math::Vec3;

const MINIMAL: &str = r#"
(
    entrance: "lobby",
    portrait_height: 3.0,
    rooms: [
        (id: "lobby", label: "Lobby", anchor: (0.0, 26.0), facing: Front),
        (
            id: "west",
            label: "West Wing",
            anchor: (-14.0, 10.0),
            facing: Right,
            exhibits: [
                (slot: (-3.0, -2.0), label: "A", era: "", achievement: "", quote: "", reference: ""),
                (slot: (-3.0, 2.0), label: "B", era: "", achievement: "", quote: "", reference: ""),
            ],
        ),
        (
            id: "east",
            label: "East Wing",
            anchor: (14.0, 10.0),
            facing: Left,
            exhibits: [
                (slot: (3.0, 0.0), label: "C", era: "", achievement: "", quote: "", reference: ""),
            ],
        ),
    ],
)
"#;

#[test]
fn exhibits_flatten_in_room_declaration_order() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    let labels: Vec<&str> = catalog
        .exhibits()
        .iter()
        .map(|e| e.info.label.as_str())
        .collect();
    assert_eq!(labels, ["A", "B", "C"]);
}

#[test]
fn exhibit_anchors_derive_from_room_anchor_and_slot() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    let first = &catalog.exhibits()[0];
    assert_eq!(first.anchor, Vec3::new(-17.0, 3.0, 8.0));
    let last = &catalog.exhibits()[2];
    assert_eq!(last.anchor, Vec3::new(17.0, 3.0, 10.0));
}

#[test]
fn exhibits_inherit_the_room_facing() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    assert_eq!(catalog.exhibits()[0].facing, catalog::Facing::Right);
    assert_eq!(catalog.exhibits()[2].facing, catalog::Facing::Left);
}

#[test]
fn owning_room_resolves_across_wings() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    let west = catalog
        .owning_room(catalog.exhibits()[0].anchor, 8.0)
        .expect("west exhibit resolves");
    assert_eq!(west.id.as_str(), "west");
    let east = catalog
        .owning_room(catalog.exhibits()[2].anchor, 8.0)
        .expect("east exhibit resolves");
    assert_eq!(east.id.as_str(), "east");
}

#[test]
fn stepping_visits_the_sequence_in_order() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    // Starting at display index 1 ("A"), Next walks B, C, then wraps to A.
    let mut position = 0usize;
    let mut visited = Vec::new();
    for _ in 0..4 {
        position = catalog
            .step_position(position + 1, StepDirection::Next)
            .unwrap();
        visited.push(position);
    }
    assert_eq!(visited, [1, 2, 0, 1]);
}

#[test]
fn unknown_room_ids_resolve_to_nothing() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    assert!(catalog.room(&"atrium".into()).is_none());
    assert!(catalog.room_at(99).is_none());
}

#[test]
fn rooms_are_listed_in_declaration_order() {
    let catalog = from_ron(MINIMAL).expect("minimal catalog parses");
    let ids: Vec<&str> = catalog.rooms().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["lobby", "west", "east"]);
    assert_eq!(catalog.room_at(1).map(|r| r.id.as_str()), Some("west"));
}

#[test]
fn duplicate_room_ids_are_rejected() {
    let text = r#"
    (
        entrance: "lobby",
        portrait_height: 3.0,
        rooms: [
            (id: "lobby", label: "Lobby", anchor: (0.0, 0.0), facing: Front),
            (id: "lobby", label: "Lobby again", anchor: (1.0, 0.0), facing: Front),
        ],
    )
    "#;
    match from_ron(text) {
        Err(CatalogError::DuplicateRoom(id)) => assert_eq!(id.as_str(), "lobby"),
        other => panic!("expected DuplicateRoom, got {other:?}"),
    }
}

#[test]
fn unknown_entrance_is_rejected() {
    let text = r#"
    (
        entrance: "atrium",
        portrait_height: 3.0,
        rooms: [
            (id: "lobby", label: "Lobby", anchor: (0.0, 0.0), facing: Front),
        ],
    )
    "#;
    assert!(matches!(
        from_ron(text),
        Err(CatalogError::UnknownEntrance(_))
    ));
}

#[test]
fn entrance_with_exhibits_is_rejected() {
    let text = r#"
    (
        entrance: "lobby",
        portrait_height: 3.0,
        rooms: [
            (
                id: "lobby",
                label: "Lobby",
                anchor: (0.0, 0.0),
                facing: Front,
                exhibits: [
                    (slot: (0.0, 0.0), label: "X", era: "", achievement: "", quote: "", reference: ""),
                ],
            ),
        ],
    )
    "#;
    assert!(matches!(
        from_ron(text),
        Err(CatalogError::EntranceWithExhibits(_))
    ));
}

#[test]
fn garbage_input_is_a_parse_error() {
    assert!(matches!(from_ron("not ron at all"), Err(CatalogError::Parse(_))));
}

#[test]
fn builtin_catalog_is_valid_and_non_empty() {
    let catalog = catalog::builtin().expect("builtin catalog must parse");
    assert!(!catalog.is_empty());
    assert!(catalog.room(catalog.entrance()).is_some());
    // Every exhibit must resolve to a non-entrance owning room.
    for exhibit in catalog.exhibits() {
        let room = catalog
            .owning_room(exhibit.anchor, 8.0)
            .unwrap_or_else(|| panic!("unresolvable exhibit {:?}", exhibit.info.label));
        assert_ne!(&room.id, catalog.entrance());
    }
}
