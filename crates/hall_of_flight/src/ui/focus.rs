//! Exhibit focus: the "currently examined exhibit" state machine.
//!
//! Three states: idle (free look), locked on an exhibit, and locked-awaiting
//! a room change. Stepping to an exhibit in another room first navigates
//! there and parks the target as a pending focus; a polled edge detector
//! (`was_navigating && !is_navigating`) applies it once the camera settles.
//! While locked, the camera converges on the exhibit with an exponential-
//! decay lerp that has no defined end.

use crate::ui::cameras::{
    apply_pose, ActiveRoomChanged, CameraPose, GalleryCamera, NavigateToRoom, RoomNavigator,
};
use crate::ui::cameras::defaults::{FocusDefaults, GalleryDefaults};
use crate::ui::GallerySet;
use bevy::prelude::*;
use catalog::{Catalog, ExhibitInfo, RoomId, StepDirection};
use std::time::Duration;

/// Focus the exhibit at a sequence position (portrait click, tour).
#[derive(Message)]
pub struct FocusExhibit {
    pub position: usize,
    /// Show the tour help text instead of the standalone hint.
    pub tour_hint: bool,
}

/// Step the focus to the neighboring exhibit in sequence order (arrow keys).
#[derive(Message)]
pub struct StepFocus {
    pub direction: StepDirection,
}

/// ESC: drop the focus and return the camera to the exhibit's room.
#[derive(Message)]
pub struct ReturnToRoom;

/// Presentation port for the exhibit panel.
#[derive(Message)]
pub enum PanelUpdate {
    Show(PanelContent),
    Hide,
}

/// Everything the panel needs to render one exhibit.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    pub info: ExhibitInfo,
    /// 1-based position in the sequence, for the "exhibit i of N" line.
    pub index: usize,
    pub total: usize,
    pub tour_hint: bool,
}

/// An exhibit queued to receive focus once the in-flight room navigation
/// completes. Applied exactly once, then cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFocus {
    pub position: usize,
    pub tour_hint: bool,
}

/// Outcome of a [`FocusController::step`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing focused, or the sequence is empty.
    Ignored,
    /// Target lives in the same room (or a room could not be resolved):
    /// focus it directly.
    Focused { position: usize },
    /// Target lives in another room: the focus was cleared, the target is
    /// pending, and the caller must issue this navigation.
    Navigating { room: RoomId },
}

#[derive(Resource, Default)]
pub struct FocusController {
    /// 0-based sequence position of the focused exhibit.
    focused: Option<usize>,
    /// 1-based display index while focused; the step arithmetic subtracts 1
    /// before the modulo, reproducing the shared click/tour index base.
    display_index: usize,
    locked: bool,
    pending: Option<PendingFocus>,
    settle: Option<Timer>,
    was_navigating: bool,
}

impl FocusController {
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn focused_position(&self) -> Option<usize> {
        self.focused
    }

    /// Locks the camera onto an exhibit and returns the panel content to
    /// present. Out-of-range positions (impossible through normal flow)
    /// leave the state untouched.
    pub fn focus(
        &mut self,
        catalog: &Catalog,
        position: usize,
        tour_hint: bool,
    ) -> Option<PanelContent> {
        let exhibit = catalog.exhibit(position)?;
        self.focused = Some(position);
        self.display_index = position + 1;
        self.locked = true;
        Some(PanelContent {
            info: exhibit.info.clone(),
            index: position + 1,
            total: catalog.exhibit_count(),
            tour_hint,
        })
    }

    /// Releases the focus. Returns whether anything was released (callers
    /// hide the panel on `true`); a no-op when not locked.
    pub fn clear(&mut self) -> bool {
        if !self.locked {
            return false;
        }
        self.focused = None;
        self.display_index = 0;
        self.locked = false;
        true
    }

    /// ESC semantics: release the focus and name the room to return the
    /// camera to. When not locked this is exactly `clear()`, with no
    /// navigation side effect. An unresolvable room skips the navigation but
    /// the release still happens.
    pub fn clear_and_return(&mut self, catalog: &Catalog, radius: f32) -> (bool, Option<RoomId>) {
        if !self.locked {
            return (false, None);
        }
        let room = self
            .focused
            .and_then(|position| catalog.exhibit(position))
            .and_then(|exhibit| catalog.owning_room(exhibit.anchor, radius))
            .map(|room| room.id.clone());
        self.clear();
        (true, room)
    }

    /// Arrow-key stepping. Same-room (or unresolved) targets are focused
    /// directly by the caller; a cross-room target clears the focus, parks
    /// the target as pending, and asks for one navigation.
    pub fn step(
        &mut self,
        catalog: &Catalog,
        radius: f32,
        direction: StepDirection,
    ) -> StepOutcome {
        if !self.locked {
            return StepOutcome::Ignored;
        }
        let Some(target) = catalog.step_position(self.display_index, direction) else {
            return StepOutcome::Ignored;
        };

        let room_of = |position: usize| {
            catalog
                .exhibit(position)
                .and_then(|exhibit| catalog.owning_room(exhibit.anchor, radius))
                .map(|room| room.id.clone())
        };
        let current_room = self.focused.and_then(|position| room_of(position));
        let target_room = room_of(target);

        match (current_room, target_room) {
            (Some(current), Some(next)) if current != next => {
                self.clear();
                self.pending = Some(PendingFocus {
                    position: target,
                    tour_hint: false,
                });
                StepOutcome::Navigating { room: next }
            }
            _ => StepOutcome::Focused { position: target },
        }
    }

    /// Per-frame edge detector for the pending focus. Returns the pending
    /// focus to apply once the navigation has ended and the settle delay has
    /// elapsed; the pending slot is cleared in the same call.
    pub fn tick_pending(
        &mut self,
        navigating: bool,
        settle_delay: f32,
        delta: Duration,
    ) -> Option<PendingFocus> {
        let just_finished = self.was_navigating && !navigating;
        self.was_navigating = navigating;

        if just_finished && self.pending.is_some() {
            self.settle = Some(Timer::from_seconds(settle_delay, TimerMode::Once));
        }

        let timer = self.settle.as_mut()?;
        timer.tick(delta);
        if timer.just_finished() {
            self.settle = None;
            return self.pending.take();
        }
        None
    }

    /// Exponential-decay convergence towards the focused exhibit's viewing
    /// pose. Runs every frame while locked and never "finishes": the camera
    /// keeps tracking the anchor asymptotically.
    pub fn glide(
        &self,
        catalog: &Catalog,
        defaults: &FocusDefaults,
        current: CameraPose,
    ) -> Option<CameraPose> {
        if !self.locked {
            return None;
        }
        let exhibit = catalog.exhibit(self.focused?)?;
        // The viewing normal is horizontal, so the eye stays at the
        // exhibit's own height.
        let goal_eye = exhibit.anchor + exhibit.facing.normal() * defaults.view_distance;
        Some(CameraPose {
            eye: current.eye.lerp(goal_eye, defaults.glide_factor),
            target: current.target.lerp(exhibit.anchor, defaults.glide_factor),
        })
    }
}

pub struct FocusPlugin;

impl Plugin for FocusPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FocusController>()
            .add_message::<FocusExhibit>()
            .add_message::<StepFocus>()
            .add_message::<ReturnToRoom>()
            .add_message::<PanelUpdate>()
            .add_systems(
                Update,
                handle_focus_requests.in_set(GallerySet::FocusIntents),
            )
            .add_systems(
                Update,
                (settle_pending_focus, glide_towards_focus)
                    .chain()
                    .in_set(GallerySet::FocusMotion),
            );
    }
}

fn handle_focus_requests(
    mut return_requests: MessageReader<ReturnToRoom>,
    mut step_requests: MessageReader<StepFocus>,
    mut focus_requests: MessageReader<FocusExhibit>,
    mut focus: ResMut<FocusController>,
    mut navigator: ResMut<RoomNavigator>,
    catalog: Res<Catalog>,
    defaults: Res<GalleryDefaults>,
    mut nav_requests: MessageWriter<NavigateToRoom>,
    mut active_changed: MessageWriter<ActiveRoomChanged>,
    mut panel: MessageWriter<PanelUpdate>,
) {
    let radius = defaults.focus.room_match_radius;

    for _ in return_requests.read() {
        let (was_locked, room) = focus.clear_and_return(&catalog, radius);
        if was_locked {
            panel.write(PanelUpdate::Hide);
            if let Some(room) = room {
                nav_requests.write(NavigateToRoom { room });
            }
        } else if navigator.is_navigating() {
            // ESC with nothing focused abandons the in-flight transition.
            navigator.cancel();
            active_changed.write(ActiveRoomChanged { room: None });
        }
    }

    for step in step_requests.read() {
        match focus.step(&catalog, radius, step.direction) {
            StepOutcome::Ignored => {}
            StepOutcome::Focused { position } => {
                if let Some(content) = focus.focus(&catalog, position, false) {
                    panel.write(PanelUpdate::Show(content));
                }
            }
            StepOutcome::Navigating { room } => {
                panel.write(PanelUpdate::Hide);
                nav_requests.write(NavigateToRoom { room });
            }
        }
    }

    for request in focus_requests.read() {
        if let Some(content) = focus.focus(&catalog, request.position, request.tour_hint) {
            panel.write(PanelUpdate::Show(content));
        }
    }
}

fn settle_pending_focus(
    mut focus: ResMut<FocusController>,
    navigator: Res<RoomNavigator>,
    catalog: Res<Catalog>,
    defaults: Res<GalleryDefaults>,
    time: Res<Time>,
    mut panel: MessageWriter<PanelUpdate>,
) {
    let pending = focus.tick_pending(
        navigator.is_navigating(),
        defaults.focus.settle_delay,
        time.delta(),
    );
    if let Some(pending) = pending {
        if let Some(content) = focus.focus(&catalog, pending.position, pending.tour_hint) {
            panel.write(PanelUpdate::Show(content));
        }
    }
}

fn glide_towards_focus(
    focus: Res<FocusController>,
    catalog: Res<Catalog>,
    defaults: Res<GalleryDefaults>,
    mut pose: ResMut<CameraPose>,
    mut cameras: Query<&mut Transform, With<GalleryCamera>>,
) {
    let Some(next) = focus.glide(&catalog, &defaults.focus, *pose) else {
        return;
    };
    *pose = next;
    if let Ok(mut transform) = cameras.single_mut() {
        apply_pose(&mut transform, &next);
    }
}
