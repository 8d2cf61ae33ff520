// Everything the frame loop mutates lives here: the live control points and the drag selection.
// Visual: one `render` call paints one complete frame (background, curve, dots, HUD).

use crate::bezier::{curve_segments, sample_curve};
use crate::binomial::BinomialTable;
use crate::draw::{draw_circle_outline, draw_segment, draw_text_5x7, fill_circle};
use crate::scene::Scene;
use crate::selection::Selection;
use crate::types::{FrameBuffer, Point2, Pointer};

pub const BACKGROUND: u32 = 0x00_F5_F5_F5;  // raywhite
pub const CURVE_COLOR: u32 = 0x00_00_00_00; // black
pub const POINT_COLOR: u32 = 0x00_E6_29_37; // red
pub const SELECTED_RING: u32 = 0x00_74_10_18;
pub const HUD_COLOR: u32 = 0x00_50_50_50;

const POINT_RADIUS: i32 = 8;

pub struct Editor {
    num_steps: usize,
    table: BinomialTable,
    initial_points: Vec<Point2>,
    control_points: Vec<Point2>,
    selection: Selection,
    pick_radius: f32,
}

impl Editor {
    /// The binomial table is built here, once; every frame reuses it.
    pub fn new(scene: Scene, pick_radius: f32) -> Self {
        let table = BinomialTable::new(scene.degree);
        log::debug!("pascal row {}: {:?}", scene.degree, table.row(scene.degree));
        Self {
            num_steps: scene.num_steps,
            table,
            initial_points: scene.control_points.clone(),
            control_points: scene.control_points,
            selection: Selection::default(),
            pick_radius,
        }
    }

    pub fn degree(&self) -> usize {
        self.table.degree()
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Pick / drag / release for this frame.
    pub fn handle_pointer(&mut self, pointer: &Pointer) {
        self.selection
            .update(pointer, &mut self.control_points, self.pick_radius);
    }

    /// Put every control point back where it started and drop any drag.
    pub fn reset(&mut self) {
        self.control_points.clone_from(&self.initial_points);
        self.selection = Selection::default();
        log::info!("control points reset");
    }

    /// `num_steps + 1` points along the curve for the current control points.
    pub fn curve_polyline(&self) -> Vec<Point2> {
        sample_curve(&self.control_points, self.degree(), self.num_steps, &self.table)
    }

    /// Paint the whole scene into `fb`. `hud` is drawn top-left as-is.
    pub fn render(&self, fb: &mut FrameBuffer, hud: &str) {
        fb.clear(BACKGROUND);

        // Curve first so the dots sit on top of it
        for (a, b) in curve_segments(&self.control_points, self.degree(), self.num_steps, &self.table) {
            draw_segment(fb, a, b, CURVE_COLOR);
        }

        for (i, p) in self.control_points.iter().enumerate() {
            let (cx, cy) = (p.x as i32, p.y as i32);
            fill_circle(fb, cx, cy, POINT_RADIUS, POINT_COLOR);
            if self.selected() == Some(i) {
                draw_circle_outline(fb, cx, cy, POINT_RADIUS, 2, SELECTED_RING);
            }
        }

        draw_text_5x7(fb, 8, 8, hud, HUD_COLOR);
    }
}
