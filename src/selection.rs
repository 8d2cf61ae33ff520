// Which control point (if any) the mouse is dragging.
// Visual: press on a red dot, hold, and the dot follows the cursor.

use crate::types::{Point2, Pointer};

/// First point (lowest index) whose center is within `radius` of `pos`.
pub fn hit_test(points: &[Point2], pos: Point2, radius: f32) -> Option<usize> {
    points
        .iter()
        .position(|p| p.distance_squared(pos) <= radius * radius)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Run one frame of drag handling.
    /// - press with nothing selected: pick the point under the cursor
    /// - held with a selection: move that point to the cursor
    /// - anything else: drop the selection
    pub fn update(&mut self, pointer: &Pointer, points: &mut [Point2], radius: f32) {
        if pointer.pressed && self.index.is_none() {
            if let Some(pos) = pointer.pos {
                self.index = hit_test(points, pos, radius);
                if let Some(i) = self.index {
                    log::debug!("picked control point {i} at ({:.1}, {:.1})", pos.x, pos.y);
                }
            }
        }

        match (pointer.down, self.index) {
            (true, Some(i)) => {
                // Cursor outside the window: keep holding the point where it is
                if let Some(pos) = pointer.pos {
                    points[i] = pos;
                }
            }
            (_, Some(i)) => {
                log::debug!("released control point {i}");
                self.index = None;
            }
            (_, None) => {}
        }
    }
}
