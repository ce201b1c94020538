/*
 * Application Module
 *
 * This module defines the viewer's model and update loop. The flock is
 * advanced on a fixed timestep (the configured tick rate) independent of
 * the display frame rate; input events land between ticks.
 */

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use log::info;
use nannou::prelude::*;
use nannou::winit::event::WindowEvent;
use nannou_egui::Egui;

use crate::config::{Config, ViewerSettings};
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input::{handle_event, DisplayState, InputEvent};
use crate::renderer::{view, FieldView};
use crate::spawn::spawn_flock;
use crate::ui;

/// Configuration handed over from `main` before the nannou app starts.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

// Upper bound on catch-up ticks after a stall
const MAX_TICKS_PER_FRAME: usize = 5;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub display: DisplayState,
    pub viewer: ViewerSettings,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Fixed timestep physics variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
    pub last_update_time: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = CONFIG.get().cloned().unwrap_or_default();
    let params = &config.simulation;

    let window_id = app
        .new_window()
        .title("Flocking")
        .size(params.width as u32, params.height as u32)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window was just created");
    let egui = Egui::from_window(&window);

    // Params were validated when the config was loaded
    let flock = spawn_flock(params.clone(), &config.spawn).expect("invalid simulation parameters");
    info!("spawned {} boids ({:?})", flock.len(), config.spawn.pattern);

    let physics_step_size = Duration::from_secs_f32(1.0 / config.viewer.tick_rate.max(1.0));

    Model {
        debug_info: DebugInfo::from_flock(&flock),
        flock,
        display: DisplayState::default(),
        viewer: config.viewer,
        egui,
        physics_accumulator: Duration::ZERO,
        physics_step_size,
        last_update_time: Instant::now(),
    }
}

// Update the model
pub fn update(_app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);
    ui::update_ui(&mut model.egui, model.flock.params(), &mut model.display, &model.debug_info);

    let current_time = Instant::now();
    let frame_time = current_time.duration_since(model.last_update_time);
    model.last_update_time = current_time;

    if model.display.paused {
        model.physics_accumulator = Duration::ZERO;
        return;
    }

    model.physics_accumulator += frame_time;

    let mut ticks = 0;
    while model.physics_accumulator >= model.physics_step_size {
        model.physics_accumulator -= model.physics_step_size;
        if ticks == MAX_TICKS_PER_FRAME {
            // Drop the backlog instead of spiralling
            model.physics_accumulator = Duration::ZERO;
            break;
        }
        model.flock.step();
        ticks += 1;
    }

    if ticks > 0 {
        model.debug_info = DebugInfo::from_flock(&model.flock);
    }
}

// Left click toggles the repulsor, right click toggles decoration
fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let event = match button {
        MouseButton::Left => {
            let field = FieldView::new(model.flock.params(), app.window_rect());
            InputEvent::ToggleRepulsor(field.screen_to_field(app.mouse.position()))
        }
        MouseButton::Right => InputEvent::ToggleDecoration,
        _ => return,
    };

    handle_event(event, &mut model.flock, &mut model.display);
    model.debug_info.repulsor = model.flock.repulsor();
}

// Pass window events to egui
fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
