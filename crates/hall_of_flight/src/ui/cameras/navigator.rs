//! Animated camera navigation between rooms.
//!
//! The navigator owns at most one transition at a time. Progress advances by
//! a fixed amount per rendered frame and is shaped by a quadratic in/out
//! curve; when the start and end eye positions sit on opposite sides of the
//! building's central spine, the path detours through a waypoint in the open
//! corridor instead of cutting through the room walls.

use super::defaults::{GalleryDefaults, NavigationDefaults};
use super::{apply_pose, orbit, CameraPose, GalleryCamera};
use crate::ui::focus::{FocusController, PanelUpdate};
use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use catalog::{Catalog, Room, RoomId};

/// Request an animated transition to a room. Unknown identifiers are
/// silently ignored by the handling system.
#[derive(Message)]
pub struct NavigateToRoom {
    pub room: RoomId,
}

/// Presentation port: the active room selection changed (drives the room
/// selector highlight). `None` clears the highlight.
#[derive(Message)]
pub struct ActiveRoomChanged {
    pub room: Option<RoomId>,
}

/// One in-flight transition. A new request replaces it; nothing queues.
#[derive(Debug, Clone)]
struct RoomTransition {
    from: CameraPose,
    to: CameraPose,
    progress: f32,
    crosses_spine: bool,
}

/// Outcome of one navigator tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavFrame {
    Idle,
    Moving(CameraPose),
    /// Final frame: the pose is the exact destination, with no residual
    /// interpolation drift.
    Arrived(CameraPose),
}

#[derive(Resource, Default)]
pub struct RoomNavigator {
    transition: Option<RoomTransition>,
}

impl RoomNavigator {
    pub fn is_navigating(&self) -> bool {
        self.transition.is_some()
    }

    /// Starts a transition from the current pose to the room's viewing pose,
    /// replacing any transition already in flight.
    pub fn request(&mut self, room: &Room, from: CameraPose, defaults: &NavigationDefaults) {
        let to = CameraPose {
            eye: room.anchor_at(defaults.eye_height)
                + room.facing.normal() * defaults.approach_distance,
            target: room.anchor_at(defaults.look_height),
        };
        // Strictly opposite signs only: a start or end on the spine itself
        // can take the direct path.
        let crosses_spine = (from.eye.x < 0.0 && to.eye.x > 0.0)
            || (from.eye.x > 0.0 && to.eye.x < 0.0);
        self.transition = Some(RoomTransition {
            from,
            to,
            progress: 0.0,
            crosses_spine,
        });
    }

    /// Abandons the transition; the camera stays wherever it was.
    pub fn cancel(&mut self) {
        self.transition = None;
    }

    /// Advances the transition by one frame and returns the pose to apply.
    /// Once arrived, further ticks return [`NavFrame::Idle`] and leave the
    /// camera untouched.
    pub fn tick(&mut self, defaults: &NavigationDefaults) -> NavFrame {
        let Some(transition) = self.transition.as_mut() else {
            return NavFrame::Idle;
        };

        transition.progress = (transition.progress + defaults.progress_per_frame).min(1.0);
        if transition.progress >= 1.0 {
            let destination = transition.to;
            self.transition = None;
            return NavFrame::Arrived(destination);
        }

        let eased = EasingCurve::new(0.0, 1.0, EaseFunction::QuadraticInOut)
            .sample_clamped(transition.progress);
        let pose = if transition.crosses_spine {
            corridor_path(transition, eased, defaults)
        } else {
            CameraPose {
                eye: transition.from.eye.lerp(transition.to.eye, eased),
                target: transition.from.target.lerp(transition.to.target, eased),
            }
        };
        NavFrame::Moving(pose)
    }
}

/// Two-phase path through the corridor center. The first half converges on a
/// waypoint above the spine (x = 0) at the midpoint depth, collapsing the
/// horizontal look component proportionally; the second half continues from
/// the waypoint to the destination pose.
fn corridor_path(
    transition: &RoomTransition,
    eased: f32,
    defaults: &NavigationDefaults,
) -> CameraPose {
    let mid_z = (transition.from.eye.z + transition.to.eye.z) * 0.5;
    let waypoint = Vec3::new(0.0, defaults.eye_height, mid_z);
    let mid_target = Vec3::new(0.0, defaults.look_height, mid_z);

    if eased < 0.5 {
        let s = eased * 2.0;
        CameraPose {
            eye: transition.from.eye.lerp(waypoint, s),
            target: transition.from.target.lerp(mid_target, s),
        }
    } else {
        let s = (eased - 0.5) * 2.0;
        CameraPose {
            eye: waypoint.lerp(transition.to.eye, s),
            target: mid_target.lerp(transition.to.target, s),
        }
    }
}

pub(super) fn handle_navigation_requests(
    mut requests: MessageReader<NavigateToRoom>,
    mut navigator: ResMut<RoomNavigator>,
    mut focus: ResMut<FocusController>,
    defaults: Res<GalleryDefaults>,
    catalog: Res<Catalog>,
    pose: Res<CameraPose>,
    mut active_changed: MessageWriter<ActiveRoomChanged>,
    mut panel: MessageWriter<PanelUpdate>,
) {
    for request in requests.read() {
        let Some(room) = catalog.room(&request.room) else {
            debug!("ignoring navigation request to unknown room `{}`", request.room);
            continue;
        };
        // A still-focused exhibit would glide against the transition every
        // frame; release it before the camera starts moving.
        if focus.clear() {
            panel.write(PanelUpdate::Hide);
        }
        navigator.request(room, *pose, &defaults.navigation);
        info!("navigating to {} (facing {})", room.id, room.facing);
        active_changed.write(ActiveRoomChanged {
            room: Some(room.id.clone()),
        });
    }
}

pub(super) fn drive_navigation(
    mut navigator: ResMut<RoomNavigator>,
    defaults: Res<GalleryDefaults>,
    mut pose: ResMut<CameraPose>,
    mut cameras: Query<(&mut Transform, &mut PanOrbitCamera), With<GalleryCamera>>,
) {
    let frame = navigator.tick(&defaults.navigation);
    let Ok((mut transform, mut orbit_camera)) = cameras.single_mut() else {
        return;
    };
    match frame {
        NavFrame::Idle => {}
        NavFrame::Moving(next) => {
            *pose = next;
            apply_pose(&mut transform, &next);
        }
        NavFrame::Arrived(destination) => {
            *pose = destination;
            apply_pose(&mut transform, &destination);
            // Hand the free-look camera a consistent view of where it ended up.
            orbit::seed_from_pose(&mut orbit_camera, &destination);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use catalog::Facing;

    fn defaults() -> NavigationDefaults {
        NavigationDefaults::default()
    }

    fn room(id: &str, x: f32, z: f32, facing: Facing) -> Room {
        Room {
            id: id.into(),
            label: id.to_owned(),
            anchor: Vec2::new(x, z),
            facing,
        }
    }

    fn pose(eye: Vec3, target: Vec3) -> CameraPose {
        CameraPose { eye, target }
    }

    fn run_to_completion(navigator: &mut RoomNavigator, defaults: &NavigationDefaults) -> CameraPose {
        for _ in 0..10_000 {
            match navigator.tick(defaults) {
                NavFrame::Arrived(destination) => return destination,
                NavFrame::Moving(_) => {}
                NavFrame::Idle => panic!("went idle before arriving"),
            }
        }
        panic!("transition never completed");
    }

    #[test]
    fn request_targets_the_room_viewing_pose() {
        let defaults = defaults();
        let mut navigator = RoomNavigator::default();
        let west = room("west", -14.0, 10.0, Facing::Right);
        navigator.request(&west, pose(Vec3::new(-7.0, 4.0, 30.0), Vec3::ZERO), &defaults);

        let destination = run_to_completion(&mut navigator, &defaults);
        assert_eq!(
            destination.eye,
            Vec3::new(-14.0 + defaults.approach_distance, defaults.eye_height, 10.0)
        );
        assert_eq!(destination.target, Vec3::new(-14.0, defaults.look_height, 10.0));
    }

    #[test]
    fn same_side_rooms_take_the_direct_path() {
        let defaults = defaults();
        let mut navigator = RoomNavigator::default();
        let west = room("west", -14.0, -8.0, Facing::Right);
        let from = pose(Vec3::new(-7.0, 4.0, 10.0), Vec3::new(-14.0, 2.6, 10.0));
        navigator.request(&west, from, &defaults);

        // The direct path never leaves the segment between the two eye
        // positions, so x stays at -7 the whole way.
        loop {
            match navigator.tick(&defaults) {
                NavFrame::Moving(p) => assert!((p.eye.x + 7.0).abs() < 1e-4),
                NavFrame::Arrived(_) => break,
                NavFrame::Idle => panic!("went idle before arriving"),
            }
        }
    }

    #[test]
    fn opposite_side_rooms_route_through_the_corridor_center() {
        let defaults = defaults();
        let mut navigator = RoomNavigator::default();
        let east = room("east", 14.0, -8.0, Facing::Left);
        let from = pose(Vec3::new(-7.0, 4.0, 10.0), Vec3::new(-14.0, 2.6, 10.0));
        navigator.request(&east, from, &defaults);

        // Sample the halfway point of the eased timeline: the eye must sit on
        // the spine (x = 0) at the midpoint depth.
        let mut nearest_to_half = None;
        loop {
            let progress_before = navigator.transition.as_ref().unwrap().progress;
            match navigator.tick(&defaults) {
                NavFrame::Moving(p) => {
                    let progress = progress_before + defaults.progress_per_frame;
                    if (progress - 0.5).abs() < defaults.progress_per_frame {
                        nearest_to_half = Some(p);
                    }
                }
                NavFrame::Arrived(_) => break,
                NavFrame::Idle => panic!("went idle before arriving"),
            }
        }
        let halfway = nearest_to_half.expect("passed the midpoint");
        assert!(
            halfway.eye.x.abs() < 0.5,
            "midpoint eye x = {}, expected on the spine",
            halfway.eye.x
        );
        assert!((halfway.eye.z - 1.0).abs() < 0.5, "midpoint depth off: {}", halfway.eye.z);
    }

    #[test]
    fn ticks_after_arrival_are_idle_and_driftless() {
        let defaults = defaults();
        let mut navigator = RoomNavigator::default();
        let east = room("east", 14.0, 10.0, Facing::Left);
        navigator.request(&east, pose(Vec3::new(-7.0, 4.0, 10.0), Vec3::ZERO), &defaults);

        let destination = run_to_completion(&mut navigator, &defaults);
        assert!(!navigator.is_navigating());
        for _ in 0..100 {
            assert_eq!(navigator.tick(&defaults), NavFrame::Idle);
        }
        // The destination pose is exact, not accumulated.
        assert_eq!(destination.eye, Vec3::new(7.0, defaults.eye_height, 10.0));
    }

    #[test]
    fn a_new_request_replaces_the_transition_in_flight() {
        let defaults = defaults();
        let mut navigator = RoomNavigator::default();
        let west = room("west", -14.0, 10.0, Facing::Right);
        let east = room("east", 14.0, 10.0, Facing::Left);

        navigator.request(&west, pose(Vec3::new(0.0, 4.0, 30.0), Vec3::ZERO), &defaults);
        let _ = navigator.tick(&defaults);
        navigator.request(&east, pose(Vec3::new(-3.0, 4.0, 20.0), Vec3::ZERO), &defaults);

        let destination = run_to_completion(&mut navigator, &defaults);
        assert_eq!(destination.eye.x, 7.0);
    }

    #[test]
    fn cancel_goes_idle_without_snapping() {
        let defaults = defaults();
        let mut navigator = RoomNavigator::default();
        let west = room("west", -14.0, 10.0, Facing::Right);
        navigator.request(&west, pose(Vec3::new(0.0, 4.0, 30.0), Vec3::ZERO), &defaults);
        let _ = navigator.tick(&defaults);

        navigator.cancel();
        assert!(!navigator.is_navigating());
        assert_eq!(navigator.tick(&defaults), NavFrame::Idle);
    }
}
