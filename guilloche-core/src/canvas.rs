//! Software canvas over a caller-provided RGB565 buffer
//!
//! The off-screen buffer the frame scheduler composes into. Storage is
//! loaned in (a `static_cell` allocation in firmware, plain arrays in
//! tests) so the core stays allocation-free. All drawing clips to the
//! canvas bounds; out-of-range pixels are silently dropped.

use heapless::Vec;
use libm::{ceilf, floorf, sqrtf};

use crate::color::Rgb565;
use crate::font::{glyph, GLYPH_WIDTH};
use crate::geometry::Point;

/// Fill style for polygons and rectangles
#[derive(Debug, Clone, Copy)]
pub enum Fill {
    /// Single flat color
    Solid(Rgb565),
    /// Two-stop gradient left-to-right across the shape's bounding box
    GradientX { from: Rgb565, to: Rgb565 },
}

impl Fill {
    /// Color at horizontal position `t` in 0.0..=1.0
    fn at(&self, t: f32) -> Rgb565 {
        match *self {
            Fill::Solid(c) => c,
            Fill::GradientX { from, to } => from.lerp(to, t),
        }
    }
}

/// Row-major RGB565 pixel canvas
pub struct Canvas<'a> {
    buf: &'a mut [Rgb565],
    width: u16,
    height: u16,
}

/// Maximum scanline/polygon crossings; the hand outline has 7 edges
const MAX_CROSSINGS: usize = 16;

impl<'a> Canvas<'a> {
    /// Wrap a pixel buffer; `buf.len()` must equal `width * height`
    pub fn new(buf: &'a mut [Rgb565], width: u16, height: u16) -> Self {
        debug_assert_eq!(buf.len(), width as usize * height as usize);
        Self { buf, width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The composed frame, row-major, ready for the panel flush
    pub fn pixels(&self) -> &[Rgb565] {
        self.buf
    }

    /// Fill the whole canvas with one color
    pub fn fill(&mut self, color: Rgb565) {
        self.buf.fill(color);
    }

    /// Set one pixel; out-of-bounds coordinates are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            self.buf[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Read one pixel back (tests and blending)
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32 {
            Some(self.buf[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Blend `color` over the existing pixel at the given opacity
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb565, opacity: u8) {
        if let Some(bg) = self.pixel(x, y) {
            self.set_pixel(x, y, color.over(bg, opacity));
        }
    }

    /// Fill an axis-aligned rectangle, corners inclusive
    pub fn fill_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb565) {
        for y in y1.max(0)..=y2.min(self.height as i32 - 1) {
            for x in x1.max(0)..=x2.min(self.width as i32 - 1) {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// 1-pixel rectangle outline, corners inclusive
    pub fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb565) {
        for x in x1..=x2 {
            self.set_pixel(x, y1, color);
            self.set_pixel(x, y2, color);
        }
        for y in y1..=y2 {
            self.set_pixel(x1, y, color);
            self.set_pixel(x2, y, color);
        }
    }

    /// Scanline-fill a closed polygon
    ///
    /// Even-odd rule; a repeated closing vertex (zero-length edge) is
    /// tolerated. Gradient fills span the polygon's bounding box.
    pub fn fill_polygon(&mut self, pts: &[Point], fill: Fill) {
        if pts.len() < 3 {
            return;
        }

        let mut min_x = pts[0].x;
        let mut max_x = pts[0].x;
        let mut min_y = pts[0].y;
        let mut max_y = pts[0].y;
        for p in pts {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        let span_x = (max_x - min_x).max(1.0);

        let y_start = (floorf(min_y) as i32).max(0);
        let y_end = (ceilf(max_y) as i32).min(self.height as i32 - 1);

        for y in y_start..=y_end {
            let yc = y as f32 + 0.5;
            let mut crossings: Vec<f32, MAX_CROSSINGS> = Vec::new();

            for i in 0..pts.len() {
                let a = pts[i];
                let b = pts[(i + 1) % pts.len()];
                if (a.y <= yc) == (b.y <= yc) {
                    continue;
                }
                let x = a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y);
                let _ = crossings.push(x);
            }

            // Insertion sort; crossing counts here are tiny
            for i in 1..crossings.len() {
                let mut j = i;
                while j > 0 && crossings[j - 1] > crossings[j] {
                    crossings.swap(j - 1, j);
                    j -= 1;
                }
            }

            for pair in crossings.chunks_exact(2) {
                let x_start = ceilf(pair[0] - 0.5) as i32;
                let x_end = floorf(pair[1] - 0.5) as i32;
                for x in x_start..=x_end {
                    let t = (x as f32 + 0.5 - min_x) / span_x;
                    self.set_pixel(x, y, fill.at(t));
                }
            }
        }
    }

    /// Blend a 1-pixel ring at the given opacity (midpoint circle)
    pub fn blend_ring(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb565, opacity: u8) {
        if radius <= 0 {
            return;
        }
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while y <= x {
            // Skip the mirror plots that land on the same pixel, so no
            // pixel is blended twice in one ring
            let pts = [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ];
            for (i, &(px, py)) in pts.iter().enumerate() {
                if pts[..i].contains(&(px, py)) {
                    continue;
                }
                self.blend_pixel(px, py, color, opacity);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Fill a solid disc (the center hub)
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb565) {
        for dy in -radius..=radius {
            let half = sqrtf((radius * radius - dy * dy) as f32) as i32;
            for dx in -half..=half {
                self.set_pixel(cx + dx, cy + dy, color);
            }
        }
    }

    /// Blit text with the fixed 6x8 font, top-left anchored
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Rgb565) {
        let mut cx = x;
        for ch in text.chars() {
            let columns = glyph(ch);
            for (col, bits) in columns.iter().enumerate() {
                for row in 0..8 {
                    if bits & (1 << row) != 0 {
                        self.set_pixel(cx + col as i32, y + row, color);
                    }
                }
            }
            cx += GLYPH_WIDTH as i32;
        }
    }
}
