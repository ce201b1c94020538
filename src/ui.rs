/*
 * UI Module
 *
 * This module builds the egui side panel: the (read-only) simulation
 * parameters, live flock statistics, and the display toggles.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::input::DisplayState;
use crate::params::SimulationParams;

pub fn update_ui(
    egui: &mut Egui,
    params: &SimulationParams,
    display: &mut DisplayState,
    debug_info: &DebugInfo,
) {
    let ctx = egui.begin_frame();

    egui::Window::new("Flock")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Parameters", |ui| {
                ui.label(format!("Field: {:.0} x {:.0}", params.width, params.height));
                ui.label(format!("Neighbor radius: {:.1}", params.neighbor_radius));
                ui.label(format!("Desired separation: {:.1}", params.desired_separation));
                ui.label(format!("Repulsor radius: {:.1}", params.repulsor_radius));
                ui.label(format!("Max speed: {:.2}", params.max_speed));
                ui.label(format!("Max force: {:.3}", params.max_force));
                ui.label(format!(
                    "Weights: sep {:.2}, align {:.2}, coh {:.2}, rep {:.2}",
                    params.separation_weight,
                    params.alignment_weight,
                    params.cohesion_weight,
                    params.repulsor_weight
                ));
                ui.label(format!("Cohesion: {:?}", params.cohesion_mode));
            });

            ui.collapsing("Statistics", |ui| {
                ui.label(format!("Tick: {}", debug_info.tick));
                ui.label(format!("Boids: {}", debug_info.boids));
                ui.label(format!("Mean speed: {:.3}", debug_info.mean_speed));
                ui.label(format!("Max speed: {:.3}", debug_info.max_speed));
                ui.label(format!("Mean neighbors: {:.1}", debug_info.mean_neighbors));
                match debug_info.repulsor {
                    Some(p) => ui.label(format!("Repulsor: ({:.0}, {:.0})", p.x, p.y)),
                    None => ui.label("Repulsor: off"),
                };
            });

            ui.separator();
            ui.label("Left click: toggle repulsor. Right click: toggle decoration.");
            ui.checkbox(&mut display.decorate, "Show forces");
            ui.checkbox(&mut display.paused, "Pause simulation");
        });
}
