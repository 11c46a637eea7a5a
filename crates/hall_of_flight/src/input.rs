//! Keyboard navigation: arrow keys step through the exhibit sequence, ESC
//! returns to the room, `T` toggles the tour, digits jump to a room.

use crate::ui::cameras::NavigateToRoom;
use crate::ui::focus::{ReturnToRoom, StepFocus};
use crate::ui::tour::ToggleTour;
use crate::ui::GallerySet;
use bevy::prelude::*;
use catalog::{Catalog, StepDirection};

const ROOM_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, gallery_keyboard.in_set(GallerySet::Intents));
    }
}

fn gallery_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    catalog: Res<Catalog>,
    mut steps: MessageWriter<StepFocus>,
    mut returns: MessageWriter<ReturnToRoom>,
    mut tour_toggles: MessageWriter<ToggleTour>,
    mut nav_requests: MessageWriter<NavigateToRoom>,
) {
    if keys.just_pressed(KeyCode::ArrowRight) {
        steps.write(StepFocus {
            direction: StepDirection::Next,
        });
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        steps.write(StepFocus {
            direction: StepDirection::Previous,
        });
    }
    if keys.just_pressed(KeyCode::Escape) {
        returns.write(ReturnToRoom);
    }
    if keys.just_pressed(KeyCode::KeyT) {
        tour_toggles.write(ToggleTour);
    }
    for (position, key) in ROOM_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            if let Some(room) = catalog.room_at(position) {
                nav_requests.write(NavigateToRoom {
                    room: room.id.clone(),
                });
            }
        }
    }
}
