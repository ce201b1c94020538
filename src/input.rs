/*
 * Input Module
 *
 * This module turns the host's discrete input events into simulation state
 * changes. Events are applied between ticks, so a tick always sees either
 * the old or the new repulsor, never a mix.
 *
 * Features:
 * - Toggle the repulsor at a point on the field
 * - Toggle force decoration, which only the renderer reads
 */

use glam::Vec2;

use crate::flock::Flock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Place the repulsor at this field position, or remove it if present.
    ToggleRepulsor(Vec2),
    ToggleDecoration,
}

/// Display-only state. The simulation never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub decorate: bool,
    pub paused: bool,
}

pub fn handle_event(event: InputEvent, flock: &mut Flock, display: &mut DisplayState) {
    match event {
        InputEvent::ToggleRepulsor(point) => {
            flock.toggle_repulsor(point);
        }
        InputEvent::ToggleDecoration => display.decorate = !display.decorate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParams;

    #[test]
    fn repulsor_event_toggles_flock_state() {
        let mut flock = Flock::new(SimulationParams::default()).unwrap();
        let mut display = DisplayState::default();

        handle_event(InputEvent::ToggleRepulsor(Vec2::new(40.0, 50.0)), &mut flock, &mut display);
        assert_eq!(flock.repulsor(), Some(Vec2::new(40.0, 50.0)));
        assert_eq!(display, DisplayState::default());

        handle_event(InputEvent::ToggleRepulsor(Vec2::new(1.0, 1.0)), &mut flock, &mut display);
        assert_eq!(flock.repulsor(), None);
    }

    #[test]
    fn decoration_event_leaves_simulation_alone() {
        let mut flock = Flock::new(SimulationParams::default()).unwrap();
        let mut display = DisplayState::default();

        handle_event(InputEvent::ToggleDecoration, &mut flock, &mut display);
        assert!(display.decorate);
        assert_eq!(flock.repulsor(), None);

        handle_event(InputEvent::ToggleDecoration, &mut flock, &mut display);
        assert!(!display.decorate);
    }
}
