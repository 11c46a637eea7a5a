//! Gallery HUD: the exhibit panel, the room selector bar and the tour
//! toggle. Rendering only: every state change arrives as a message from
//! the core, and every press leaves as one.

use crate::ui::cameras::{ActiveRoomChanged, NavigateToRoom};
use crate::ui::focus::PanelUpdate;
use crate::ui::tour::{TourStateChanged, ToggleTour};
use crate::ui::GallerySet;
use crate::utils::cleanup;
use crate::AppState;
use bevy::prelude::*;
use catalog::{Catalog, RoomId};

/// UI color constants for buttons
pub const NORMAL_BUTTON: Color = Color::srgb(0.15, 0.15, 0.15);
pub const HOVERED_BUTTON: Color = Color::srgb(0.25, 0.25, 0.25);
pub const PRESSED_BUTTON: Color = Color::srgb(0.35, 0.75, 0.35);

const ACTIVE_ROOM_BORDER: Color = Color::srgb(0.85, 0.7, 0.3);
const PANEL_BACKGROUND: Color = Color::srgba(0.07, 0.07, 0.09, 0.92);

const STANDALONE_HINT: &str = "\u{2190} \u{2192} browse exhibits  \u{b7}  ESC back to the room";
const TOUR_HINT: &str = "Tour running  \u{b7}  ESC to stop";

/// Marker component for HUD entities
#[derive(Component)]
struct GalleryHud;

#[derive(Component)]
struct RoomButton {
    room: RoomId,
}

#[derive(Component)]
struct TourButton;

#[derive(Component)]
struct TourButtonLabel;

#[derive(Component)]
struct PanelRoot;

/// Which line of the exhibit panel a text entity renders.
#[derive(Component, Clone, Copy)]
enum PanelField {
    Title,
    Era,
    Achievement,
    Quote,
    Reference,
    Counter,
    Hint,
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Gallery), spawn_hud)
            .add_systems(OnExit(AppState::Gallery), cleanup::<GalleryHud>)
            .add_systems(
                Update,
                (handle_room_buttons, handle_tour_button).in_set(GallerySet::Intents),
            )
            .add_systems(
                Update,
                (apply_panel_updates, apply_room_highlight, apply_tour_label)
                    .in_set(GallerySet::Present),
            );
    }
}

fn spawn_hud(mut commands: Commands, catalog: Res<Catalog>) {
    // Tour toggle, top right.
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                right: Val::Px(16.0),
                width: Val::Px(140.0),
                height: Val::Px(44.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::all(Color::WHITE),
            BorderRadius::all(Val::Px(8.0)),
            BackgroundColor(NORMAL_BUTTON),
            TourButton,
            GalleryHud,
            Name::new("Tour Toggle"),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("Start tour"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                TourButtonLabel,
            ));
        });

    // Room selector bar, bottom center.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(10.0),
                ..default()
            },
            GalleryHud,
            Name::new("Room Bar"),
        ))
        .with_children(|bar| {
            for room in catalog.rooms() {
                bar.spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(10.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BorderColor::all(Color::NONE),
                    BorderRadius::all(Val::Px(8.0)),
                    BackgroundColor(NORMAL_BUTTON),
                    RoomButton {
                        room: room.id.clone(),
                    },
                    Name::new(format!("Room Button: {}", room.id)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(room.label.clone()),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    ));
                });
            }
        });

    // Exhibit panel, right side, hidden until something is focused.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(80.0),
                right: Val::Px(16.0),
                width: Val::Px(340.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                padding: UiRect::all(Val::Px(18.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(10.0)),
            PanelRoot,
            GalleryHud,
            Name::new("Exhibit Panel"),
        ))
        .with_children(|panel| {
            spawn_panel_line(panel, PanelField::Title, 26.0, Color::srgb(0.95, 0.9, 0.8));
            spawn_panel_line(panel, PanelField::Era, 16.0, Color::srgb(0.7, 0.7, 0.7));
            spawn_panel_line(
                panel,
                PanelField::Achievement,
                17.0,
                Color::srgb(0.9, 0.9, 0.9),
            );
            spawn_panel_line(panel, PanelField::Quote, 16.0, Color::srgb(0.8, 0.75, 0.6));
            spawn_panel_line(
                panel,
                PanelField::Reference,
                13.0,
                Color::srgb(0.5, 0.65, 0.85),
            );
            spawn_panel_line(panel, PanelField::Counter, 14.0, Color::srgb(0.6, 0.6, 0.6));
            spawn_panel_line(panel, PanelField::Hint, 13.0, Color::srgb(0.55, 0.55, 0.55));
        });
}

fn spawn_panel_line(
    panel: &mut ChildSpawnerCommands,
    field: PanelField,
    font_size: f32,
    color: Color,
) {
    panel.spawn((
        Text::new(""),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        field,
    ));
}

fn handle_room_buttons(
    mut interactions: Query<
        (&Interaction, &RoomButton, &mut BackgroundColor),
        Changed<Interaction>,
    >,
    mut nav_requests: MessageWriter<NavigateToRoom>,
) {
    for (interaction, button, mut color) in &mut interactions {
        match *interaction {
            Interaction::Pressed => {
                *color = PRESSED_BUTTON.into();
                nav_requests.write(NavigateToRoom {
                    room: button.room.clone(),
                });
            }
            Interaction::Hovered => *color = HOVERED_BUTTON.into(),
            Interaction::None => *color = NORMAL_BUTTON.into(),
        }
    }
}

fn handle_tour_button(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<TourButton>),
    >,
    mut toggles: MessageWriter<ToggleTour>,
) {
    for (interaction, mut color) in &mut interactions {
        match *interaction {
            Interaction::Pressed => {
                *color = PRESSED_BUTTON.into();
                toggles.write(ToggleTour);
            }
            Interaction::Hovered => *color = HOVERED_BUTTON.into(),
            Interaction::None => *color = NORMAL_BUTTON.into(),
        }
    }
}

fn apply_panel_updates(
    mut updates: MessageReader<PanelUpdate>,
    mut panels: Query<&mut Node, With<PanelRoot>>,
    mut fields: Query<(&PanelField, &mut Text)>,
) {
    for update in updates.read() {
        match update {
            PanelUpdate::Show(content) => {
                for (field, mut text) in &mut fields {
                    text.0 = match field {
                        PanelField::Title => content.info.label.clone(),
                        PanelField::Era => content.info.era.clone(),
                        PanelField::Achievement => content.info.achievement.clone(),
                        PanelField::Quote => {
                            format!("\u{201c}{}\u{201d}", content.info.quote)
                        }
                        PanelField::Reference => content.info.reference.clone(),
                        PanelField::Counter => {
                            format!("Exhibit {} of {}", content.index, content.total)
                        }
                        PanelField::Hint => if content.tour_hint {
                            TOUR_HINT
                        } else {
                            STANDALONE_HINT
                        }
                        .to_owned(),
                    };
                }
                for mut node in &mut panels {
                    node.display = Display::Flex;
                }
            }
            PanelUpdate::Hide => {
                for mut node in &mut panels {
                    node.display = Display::None;
                }
            }
        }
    }
}

fn apply_room_highlight(
    mut changes: MessageReader<ActiveRoomChanged>,
    mut buttons: Query<(&RoomButton, &mut BorderColor)>,
) {
    for change in changes.read() {
        for (button, mut border) in &mut buttons {
            let active = change.room.as_ref() == Some(&button.room);
            *border = if active {
                BorderColor::all(ACTIVE_ROOM_BORDER)
            } else {
                BorderColor::all(Color::NONE)
            };
        }
    }
}

fn apply_tour_label(
    mut changes: MessageReader<TourStateChanged>,
    mut labels: Query<&mut Text, With<TourButtonLabel>>,
) {
    for change in changes.read() {
        for mut text in &mut labels {
            text.0 = if change.touring {
                "Stop tour"
            } else {
                "Start tour"
            }
            .to_owned();
        }
    }
}
