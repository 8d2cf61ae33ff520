// Window + software drawing utilities.
// Visual effects provided here:
// 1) A fixed-size window that shows the framebuffer we paint every frame.
// 2) Lines (curve segments) and filled discs (control points).
// 3) A tiny 5x7 bitmap font to render HUD text on top of the scene.

use crate::error::Error;
use crate::types::{FrameBuffer, Point2, Pointer};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,       // the on-screen window you see
    left_was_down: bool,  // last frame's button state, to detect the press edge
}

impl Drawer {
    /// Create a window and cap its update rate.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // update_with_buffer sleeps as needed to hold this rate
        window.set_target_fps(fps);
        Ok(Self { window, left_was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new curve.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Sample the mouse once for this frame.
    /// Visual: `pos` is where a dragged point will land; `pressed` fires once per click.
    pub fn poll_pointer(&mut self) -> Pointer {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pressed = down && !self.left_was_down;
        self.left_was_down = down;

        let pos = self
            .window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point2::new(x, y));

        Pointer { pos, down, pressed }
    }

    /// Visual: when pressed, the control points jump back to where they were typed in.
    pub fn r_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }

    /// Visual: nothing changes on screen; a PNG of this frame lands on disk.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, lines, circles, tiny bitmap font ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line; many short ones make the curve.
/// Error terms run in i64 so even a full i32-wide span cannot overflow.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        // x0/y0 never leave the [start, end] range, so they still fit in i32
        put_pixel(fb, x0 as i32, y0 as i32, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

fn outcode(p: Point2, max_x: f32, max_y: f32) -> u8 {
    let mut code = INSIDE;
    if p.x < 0.0 { code |= LEFT } else if p.x > max_x { code |= RIGHT }
    if p.y < 0.0 { code |= TOP } else if p.y > max_y { code |= BOTTOM }
    code
}

/// Cohen-Sutherland: cut segment a-b down to the rectangle [0,max_x] x [0,max_y].
/// None when no part of it is inside.
pub fn clip_segment(a: Point2, b: Point2, max_x: f32, max_y: f32) -> Option<(Point2, Point2)> {
    let (mut a, mut b) = (a, b);
    let mut code_a = outcode(a, max_x, max_y);
    let mut code_b = outcode(b, max_x, max_y);
    loop {
        if code_a | code_b == INSIDE {
            return Some((a, b));
        }
        if code_a & code_b != INSIDE {
            return None;
        }

        // Move whichever endpoint is outside onto the edge it crosses
        let out = if code_a != INSIDE { code_a } else { code_b };
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let p = if out & TOP != 0 {
            Point2::new(a.x + dx * (0.0 - a.y) / dy, 0.0)
        } else if out & BOTTOM != 0 {
            Point2::new(a.x + dx * (max_y - a.y) / dy, max_y)
        } else if out & RIGHT != 0 {
            Point2::new(max_x, a.y + dy * (max_x - a.x) / dx)
        } else {
            Point2::new(0.0, a.y + dy * (0.0 - a.x) / dx)
        };

        if out == code_a {
            a = p;
            code_a = outcode(a, max_x, max_y);
        } else {
            b = p;
            code_b = outcode(b, max_x, max_y);
        }
    }
}

/// Float endpoints are truncated to whole pixels, like the integer draw calls
/// of most immediate-mode toolkits. The segment is clipped to the framebuffer
/// first, so points far off-screen cost nothing to draw.
pub fn draw_segment(fb: &mut FrameBuffer, a: Point2, b: Point2, color: u32) {
    if let Some((a, b)) = clip_segment(a, b, fb.width as f32, fb.height as f32) {
        draw_line(fb, a.x as i32, a.y as i32, b.x as i32, b.y as i32, color);
    }
}

/// True when the square around (cx,cy) can touch at least one pixel.
fn disc_visible(fb: &FrameBuffer, cx: i32, cy: i32, radius: i32) -> bool {
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    cx + r >= 0 && cy + r >= 0 && cx - r < fb.width as i64 && cy - r < fb.height as i64
}

/// Solid disc centered at (cx,cy).
/// Visual: a round marker; this is what each control point looks like.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    if !disc_visible(fb, cx, cy, radius) {
        return;
    }
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Ring of the given thickness just inside `radius`.
/// Visual: highlights the control point you are currently dragging.
pub fn draw_circle_outline(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, thickness: i32, color: u32) {
    if !disc_visible(fb, cx, cy, radius) {
        return;
    }
    let outer = radius * radius;
    let inner_r = (radius - thickness).max(0);
    let inner = inner_r * inner_r;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = dx * dx + dy * dy;
            if d2 <= outer && d2 > inner {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

/* ---------- 5x7 bitmap font ----------
   Only the characters of the HUD line "DEG: 3 | STEPS: 50 | FPS: 60.0 | R: RESET  S: SAVE".
   Anything else (lowercase, '?', ...) is skipped and leaves a blank cell. */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters: DEG, STEPS, FPS, RESET, SAVE
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),

        // Punctuation: space, vertical bar, colon, dot
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph in the chosen color; unknown characters leave a gap.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
