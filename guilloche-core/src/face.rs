//! Clock face composition
//!
//! Draws one complete dial into the canvas, back-to-front: base color,
//! guilloché ripples, hour markers, dial label, hands, date window,
//! center hub. Pure composition over the geometry engine; the scheduler
//! owns when this runs and the driver owns how it reaches the panel.

use core::fmt::Write;

use heapless::String;
use libm::roundf;

use crate::canvas::{Canvas, Fill};
use crate::color::{
    BLACK, ROSE_GOLD_DARK, ROSE_GOLD_LIGHT, SILVER_DARK, SILVER_LIGHT, SILVER_MID, WHITE,
};
use crate::font::{text_width, GLYPH_HEIGHT};
use crate::geometry::{
    hand_polygon, hour_angle, marker_wedge, minute_angle, ripples, second_angle, HandStyle, Point,
    HOUR_HAND, MINUTE_HAND, SECOND_HAND,
};
use crate::time::{month_abbrev, TimeSample};

/// Radius of the hub dot covering the hand tails
const HUB_RADIUS: i32 = 4;

/// Label offset above center, in pixels
const LABEL_RAISE: f32 = 30.0;

/// Gap between the month and day boxes, in pixels
const DATE_GAP: f32 = 3.0;

/// The fixed dial layout
///
/// One face per panel; center and radius are set once at startup.
#[derive(Debug, Clone, Copy)]
pub struct ClockFace {
    center: Point,
    radius: f32,
}

impl ClockFace {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Compose one full frame for the given time sample
    pub fn render(&self, canvas: &mut Canvas<'_>, time: &TimeSample) {
        canvas.fill(ROSE_GOLD_LIGHT);
        self.draw_ripples(canvas);
        self.draw_markers(canvas);
        self.draw_label(canvas);
        self.draw_hands(canvas, time);
        self.draw_date_window(canvas, time.day, time.month);
        self.draw_hub(canvas);
    }

    fn draw_ripples(&self, canvas: &mut Canvas<'_>) {
        let cx = roundf(self.center.x) as i32;
        let cy = roundf(self.center.y) as i32;
        for ripple in ripples(self.radius) {
            canvas.blend_ring(cx, cy, roundf(ripple.radius) as i32, BLACK, ripple.opacity);
        }
    }

    fn draw_markers(&self, canvas: &mut Canvas<'_>) {
        for index in 0..12 {
            let wedge = marker_wedge(self.center, self.radius, index);
            canvas.fill_polygon(
                &wedge,
                Fill::GradientX {
                    from: SILVER_MID,
                    to: SILVER_LIGHT,
                },
            );
        }
    }

    fn draw_label(&self, canvas: &mut Canvas<'_>) {
        let text = "GUILLOCHE";
        let x = roundf(self.center.x - text_width(text) as f32 / 2.0) as i32;
        let y = roundf(self.center.y - LABEL_RAISE) as i32;
        canvas.draw_text(x, y, text, ROSE_GOLD_DARK);
    }

    fn draw_hands(&self, canvas: &mut Canvas<'_>, time: &TimeSample) {
        let hands = [
            (hour_angle(time.hour, time.minute), HOUR_HAND),
            (minute_angle(time.minute, time.second), MINUTE_HAND),
            (second_angle(time.second), SECOND_HAND),
        ];
        for (angle, style) in hands {
            self.draw_hand(canvas, angle, style);
        }
    }

    fn draw_hand(&self, canvas: &mut Canvas<'_>, angle: f32, style: HandStyle) {
        let poly = hand_polygon(
            self.center,
            angle,
            self.radius * style.length_frac,
            style.width,
        );
        canvas.fill_polygon(
            &poly,
            Fill::GradientX {
                from: SILVER_DARK,
                to: SILVER_LIGHT,
            },
        );
    }

    /// Month and day boxes below center
    ///
    /// Skipped entirely when the month index fails the 1-12 guard; a
    /// torn RTC read must not index the abbreviation table.
    fn draw_date_window(&self, canvas: &mut Canvas<'_>, day: u8, month: u8) {
        let Some(month_text) = month_abbrev(month) else {
            return;
        };

        let window_w = self.radius * 0.3 * 1.1;
        let window_h = self.radius * 0.12 * 1.1;
        let y_pos = self.center.y + self.radius * 0.35 + 20.0;
        let month_w = window_w * 0.67;
        let day_w = window_w * 0.33;

        let month_x2 = self.center.x - (day_w + DATE_GAP) / 2.0 - 1.0;
        let month_box = (
            roundf(month_x2 - month_w) as i32,
            roundf(y_pos - window_h / 2.0) as i32,
            roundf(month_x2) as i32,
            roundf(y_pos + window_h / 2.0) as i32,
        );
        let day_x1 = self.center.x + (month_w + DATE_GAP) / 2.0;
        let day_box = (
            roundf(day_x1) as i32,
            month_box.1,
            roundf(day_x1 + day_w) as i32,
            month_box.3,
        );

        for b in [month_box, day_box] {
            canvas.fill_rect(b.0, b.1, b.2, b.3, WHITE);
            canvas.draw_rect(b.0, b.1, b.2, b.3, ROSE_GOLD_DARK);
        }

        let mut day_text: String<4> = String::new();
        // Write to a 4-byte heapless string cannot fail for "{:02}" of a u8
        let _ = write!(day_text, "{:02}", day);

        self.draw_centered(canvas, month_box, month_text);
        self.draw_centered(canvas, day_box, &day_text);
    }

    fn draw_centered(&self, canvas: &mut Canvas<'_>, bx: (i32, i32, i32, i32), text: &str) {
        let x = (bx.0 + bx.2) / 2 - text_width(text) as i32 / 2;
        let y = (bx.1 + bx.3) / 2 - GLYPH_HEIGHT as i32 / 2;
        canvas.draw_text(x, y, text, ROSE_GOLD_DARK);
    }

    fn draw_hub(&self, canvas: &mut Canvas<'_>) {
        canvas.fill_circle(
            roundf(self.center.x) as i32,
            roundf(self.center.y) as i32,
            HUB_RADIUS,
            SILVER_DARK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb565;
    use std::vec;

    const W: u16 = 240;
    const H: u16 = 240;

    fn render_at(time: TimeSample) -> vec::Vec<Rgb565> {
        let mut buf = vec::Vec::new();
        buf.resize(W as usize * H as usize, Rgb565(0));
        let mut canvas = Canvas::new(&mut buf, W, H);
        let face = ClockFace::new(Point::new(120.0, 120.0), 120.0);
        face.render(&mut canvas, &time);
        buf
    }

    fn at(buf: &[Rgb565], x: usize, y: usize) -> Rgb565 {
        buf[y * W as usize + x]
    }

    #[test]
    fn test_background_and_hub() {
        let buf = render_at(TimeSample::MIDNIGHT);
        // Dial corner carries the base color
        assert_eq!(at(&buf, 2, 2), ROSE_GOLD_LIGHT);
        // Hub covers the exact center
        assert_eq!(at(&buf, 120, 120), SILVER_DARK);
    }

    #[test]
    fn test_midnight_hands_point_up() {
        let buf = render_at(TimeSample::MIDNIGHT);
        // All three hands overlap straight up; a pixel a little above
        // the hub must be hand metal, not dial base
        let p = at(&buf, 120, 100);
        assert_ne!(p, ROSE_GOLD_LIGHT);
        // Opposite direction is bare dial
        assert_eq!(at(&buf, 120, 150), ROSE_GOLD_LIGHT);
    }

    #[test]
    fn test_marker_at_three_oclock() {
        let buf = render_at(TimeSample::MIDNIGHT);
        // Marker band sits between 0.75r and 0.95r to the right of
        // center; probe the middle of the 3 o'clock wedge
        let p = at(&buf, 120 + 102, 120);
        assert_ne!(p, ROSE_GOLD_LIGHT);
    }

    #[test]
    fn test_date_window_drawn_for_valid_month() {
        let mut t = TimeSample::MIDNIGHT;
        t.day = 24;
        t.month = 12;
        let buf = render_at(t);
        // Date boxes are filled white below center (y ~ 120+42+20)
        let y = 182;
        assert!(
            (0..W as usize).any(|x| at(&buf, x, y) == WHITE),
            "no white date box pixels found"
        );
    }

    #[test]
    fn test_date_window_skipped_for_invalid_month() {
        let mut t = TimeSample::MIDNIGHT;
        t.month = 13;
        let buf = render_at(t);
        let y = 182;
        assert!(
            (0..W as usize).all(|x| at(&buf, x, y) != WHITE),
            "date box drawn despite invalid month"
        );
    }
}
