/*
 * Renderer Module
 *
 * This module draws the flock. It reads the simulation and never changes it.
 * The field is y-down with its origin in the top-left corner; nannou is
 * y-up and centred, so every point goes through FieldView.
 */

use log::error;
use nannou::prelude::*;

use crate::app::Model;
use crate::boid::{Boid, BoidId};
use crate::params::SimulationParams;

// Screen length of the velocity and force indicators per unit
const VELOCITY_SCALE: f32 = 20.0;
const FORCE_SCALE: f32 = 100.0;

/// Maps field coordinates onto the window, scaled to fit.
#[derive(Debug, Clone, Copy)]
pub struct FieldView {
    width: f32,
    height: f32,
    scale: f32,
}

impl FieldView {
    pub fn new(params: &SimulationParams, window_rect: Rect) -> Self {
        let scale = f32::min(window_rect.w() / params.width, window_rect.h() / params.height);
        Self {
            width: params.width,
            height: params.height,
            scale,
        }
    }

    pub fn field_to_screen(&self, p: ::glam::Vec2) -> Point2 {
        pt2(
            (p.x - self.width / 2.0) * self.scale,
            (self.height / 2.0 - p.y) * self.scale,
        )
    }

    pub fn screen_to_field(&self, p: Point2) -> ::glam::Vec2 {
        ::glam::Vec2::new(
            p.x / self.scale + self.width / 2.0,
            self.height / 2.0 - p.y / self.scale,
        )
    }

    // Field vectors flip their y component on screen
    fn vector_to_screen(&self, v: ::glam::Vec2) -> Vec2 {
        vec2(v.x, -v.y) * self.scale
    }

    fn length(&self, d: f32) -> f32 {
        d * self.scale
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let params = model.flock.params();
    let field = FieldView::new(params, app.window_rect());

    // Field border
    draw.rect()
        .xy(field.field_to_screen(::glam::Vec2::new(params.width / 2.0, params.height / 2.0)))
        .w_h(field.length(params.width - 1.0), field.length(params.height - 1.0))
        .no_fill()
        .stroke_weight(1.0)
        .stroke(BLACK);

    let size = field.length(model.viewer.boid_size / 2.0);
    for boid in model.flock.boids() {
        draw_boid(&draw, &field, boid, size);
    }

    if model.display.decorate {
        if let Some(boid) = model.flock.boid(BoidId(model.viewer.tracked_boid)) {
            draw_decoration(&draw, &field, boid, params);
        }
    }

    if let Some(repulsor) = model.flock.repulsor() {
        draw.ellipse()
            .xy(field.field_to_screen(repulsor))
            .radius(field.length(params.repulsor_radius))
            .no_fill()
            .stroke_weight(1.0)
            .stroke(rgb8(128, 0, 128));
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!("failed to draw frame: {err:?}");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!("failed to draw ui: {err:?}");
    }
}

// Triangle pointing along the heading
fn draw_boid(draw: &Draw, field: &FieldView, boid: &Boid, size: f32) {
    let points = [
        pt2(size, 0.0),
        pt2(-size, size / 2.0),
        pt2(-size, -size / 2.0),
    ];

    // Headings turn clockwise on the y-down field
    draw.polygon()
        .color(rgb8(40, 40, 40))
        .points(points)
        .xy(field.field_to_screen(boid.position))
        .rotate(-boid.heading);
}

// Radii, velocity and the three flocking forces of one boid
fn draw_decoration(draw: &Draw, field: &FieldView, boid: &Boid, params: &SimulationParams) {
    let centre = field.field_to_screen(boid.position);

    for (radius, color) in [
        (params.neighbor_radius, rgb8(0, 0, 0)),
        (params.desired_separation, rgb8(255, 0, 0)),
    ] {
        draw.ellipse()
            .xy(centre)
            .radius(field.length(radius))
            .no_fill()
            .stroke_weight(1.0)
            .stroke(color);
    }

    let forces = boid.forces();
    let lines = [
        (boid.velocity * VELOCITY_SCALE, rgb8(255, 0, 255)),
        (forces.alignment * FORCE_SCALE, rgb8(255, 0, 0)),
        (forces.cohesion * FORCE_SCALE, rgb8(0, 255, 0)),
        (forces.separation * FORCE_SCALE, rgb8(0, 0, 255)),
    ];
    for (vector, color) in lines {
        draw.line()
            .start(centre)
            .end(centre + field.vector_to_screen(vector))
            .weight(1.0)
            .color(color);
    }
}
