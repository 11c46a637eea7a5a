//! Auto tour: drives the focus controller through every exhibit in sequence
//! order on a fixed dwell timer.
//!
//! The tour always uses the direct focus path, never the room-gated arrow
//! stepping, so between rooms the camera glides straight instead of routing
//! through the corridor. After the last exhibit the stop is deferred by one
//! more interval so it keeps its full dwell time.

use crate::ui::focus::{FocusController, FocusExhibit, PanelUpdate, ReturnToRoom};
use crate::ui::cameras::defaults::GalleryDefaults;
use crate::ui::GallerySet;
use bevy::prelude::*;
use catalog::Catalog;

/// Toggle the tour (HUD button, `T` key).
#[derive(Message, Default)]
pub struct ToggleTour;

/// Presentation port: the tour started or stopped (drives the toggle label).
#[derive(Message)]
pub struct TourStateChanged {
    pub touring: bool,
}

/// What the sequencer wants done after one timer interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourTick {
    Idle,
    Focus(usize),
    Stop,
}

/// The tour state machine. The repeating timer is the one resource the tour
/// holds; `stop()` pauses and resets it.
#[derive(Resource)]
pub struct TourSequencer {
    touring: bool,
    /// Next sequence position the timer will focus.
    index: usize,
    /// Set once the index has wrapped: the cycle is complete and the next
    /// interval stops the tour instead of focusing.
    cycle_complete: bool,
    timer: Timer,
}

impl Default for TourSequencer {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(1.0, TimerMode::Repeating);
        timer.pause();
        Self {
            touring: false,
            index: 0,
            cycle_complete: false,
            timer,
        }
    }
}

impl TourSequencer {
    pub fn is_touring(&self) -> bool {
        self.touring
    }

    /// Starts the tour and returns the sequence position to focus right away
    /// (always 0). Guarded: an empty sequence leaves the tour stopped and
    /// returns `None`.
    pub fn start(&mut self, exhibit_count: usize, period: f32) -> Option<usize> {
        if exhibit_count == 0 {
            return None;
        }
        self.touring = true;
        self.index = 1 % exhibit_count;
        self.cycle_complete = exhibit_count == 1;
        self.timer = Timer::from_seconds(period, TimerMode::Repeating);
        Some(0)
    }

    /// One timer interval elapsed: focus the next exhibit, or stop if the
    /// full cycle already completed an interval ago.
    pub fn advance(&mut self, exhibit_count: usize) -> TourTick {
        if !self.touring || exhibit_count == 0 {
            return TourTick::Idle;
        }
        if self.cycle_complete {
            self.stop();
            return TourTick::Stop;
        }
        let position = self.index;
        self.index = (self.index + 1) % exhibit_count;
        if self.index == 0 {
            self.cycle_complete = true;
        }
        TourTick::Focus(position)
    }

    /// Stops the tour and releases the timer. Idempotent.
    pub fn stop(&mut self) {
        self.touring = false;
        self.index = 0;
        self.cycle_complete = false;
        self.timer.pause();
        self.timer.reset();
    }

    fn timer_mut(&mut self) -> &mut Timer {
        &mut self.timer
    }
}

pub struct TourPlugin;

impl Plugin for TourPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TourSequencer>()
            .add_message::<ToggleTour>()
            .add_message::<TourStateChanged>()
            .add_systems(
                Update,
                (handle_tour_toggle, stop_tour_on_escape, advance_tour)
                    .chain()
                    .in_set(GallerySet::Tour),
            );
    }
}

fn handle_tour_toggle(
    mut toggles: MessageReader<ToggleTour>,
    mut tour: ResMut<TourSequencer>,
    catalog: Res<Catalog>,
    defaults: Res<GalleryDefaults>,
    mut focus_requests: MessageWriter<FocusExhibit>,
    mut state_changed: MessageWriter<TourStateChanged>,
) {
    for _ in toggles.read() {
        if tour.is_touring() {
            tour.stop();
            state_changed.write(TourStateChanged { touring: false });
            info!("tour stopped");
        } else if let Some(first) = tour.start(catalog.exhibit_count(), defaults.tour.period) {
            focus_requests.write(FocusExhibit {
                position: first,
                tour_hint: true,
            });
            state_changed.write(TourStateChanged { touring: true });
            info!("tour started over {} exhibits", catalog.exhibit_count());
        }
    }
}

/// ESC cancels a running tour; the focus release itself is handled by the
/// focus controller reading the same message.
fn stop_tour_on_escape(
    mut returns: MessageReader<ReturnToRoom>,
    mut tour: ResMut<TourSequencer>,
    mut state_changed: MessageWriter<TourStateChanged>,
) {
    for _ in returns.read() {
        if tour.is_touring() {
            tour.stop();
            state_changed.write(TourStateChanged { touring: false });
            info!("tour cancelled");
        }
    }
}

fn advance_tour(
    time: Res<Time>,
    mut tour: ResMut<TourSequencer>,
    catalog: Res<Catalog>,
    mut focus: ResMut<FocusController>,
    mut focus_requests: MessageWriter<FocusExhibit>,
    mut state_changed: MessageWriter<TourStateChanged>,
    mut panel: MessageWriter<PanelUpdate>,
) {
    if !tour.is_touring() {
        return;
    }
    if !tour.timer_mut().tick(time.delta()).just_finished() {
        return;
    }
    match tour.advance(catalog.exhibit_count()) {
        TourTick::Idle => {}
        TourTick::Focus(position) => {
            focus_requests.write(FocusExhibit {
                position,
                tour_hint: true,
            });
        }
        TourTick::Stop => {
            state_changed.write(TourStateChanged { touring: false });
            // Natural completion also releases the last exhibit.
            if focus.clear() {
                panel.write(PanelUpdate::Hide);
            }
            info!("tour completed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: f32 = 6.0;

    /// Runs start + timer callbacks to completion, returning every focused
    /// sequence position in order.
    fn full_cycle(exhibit_count: usize) -> Vec<usize> {
        let mut tour = TourSequencer::default();
        let mut focused = Vec::new();

        if let Some(first) = tour.start(exhibit_count, PERIOD) {
            focused.push(first);
        }
        for _ in 0..exhibit_count + 8 {
            match tour.advance(exhibit_count) {
                TourTick::Focus(position) => focused.push(position),
                TourTick::Stop => break,
                TourTick::Idle => break,
            }
        }
        focused
    }

    #[test]
    fn start_on_an_empty_sequence_is_refused() {
        let mut tour = TourSequencer::default();
        assert_eq!(tour.start(0, PERIOD), None);
        assert!(!tour.is_touring());
        assert_eq!(tour.advance(0), TourTick::Idle);
    }

    #[test]
    fn a_full_cycle_focuses_every_exhibit_once_in_ascending_order() {
        for count in [1usize, 4, 8] {
            let focused = full_cycle(count);
            let expected: Vec<usize> = (0..count).collect();
            assert_eq!(focused, expected, "cycle over {count} exhibits");
        }
    }

    #[test]
    fn the_final_exhibit_keeps_its_dwell_interval() {
        let mut tour = TourSequencer::default();
        tour.start(3, PERIOD);
        assert_eq!(tour.advance(3), TourTick::Focus(1));
        assert_eq!(tour.advance(3), TourTick::Focus(2));
        // The cycle is complete, but the stop lands one interval later.
        assert!(tour.is_touring());
        assert_eq!(tour.advance(3), TourTick::Stop);
        assert!(!tour.is_touring());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut tour = TourSequencer::default();
        tour.start(4, PERIOD);
        tour.stop();
        tour.stop();
        assert!(!tour.is_touring());
        assert_eq!(tour.advance(4), TourTick::Idle);
    }

    #[test]
    fn restarting_begins_at_the_first_exhibit_again() {
        let mut tour = TourSequencer::default();
        tour.start(4, PERIOD);
        tour.advance(4);
        tour.stop();
        assert_eq!(tour.start(4, PERIOD), Some(0));
        assert_eq!(tour.advance(4), TourTick::Focus(1));
    }

    #[test]
    fn a_single_exhibit_tour_focuses_once_then_stops() {
        let mut tour = TourSequencer::default();
        assert_eq!(tour.start(1, PERIOD), Some(0));
        assert_eq!(tour.advance(1), TourTick::Stop);
        assert!(!tour.is_touring());
    }
}
