//! Pure clock-face geometry
//!
//! Maps a time value to angles and polygon vertices for hands, hour
//! markers and the decorative ripple rings. Referentially transparent
//! given a time sample plus the fixed layout constants; never touches
//! the transport.
//!
//! Angle convention: `hand_angle` returns the dial angle where a zero
//! value is 12 o'clock and the angle increases clockwise. The screen
//! direction vector for an angle `a` is `(cos a, sin a)` for every
//! element on the dial, so a zero-valued hand and the 12 o'clock marker
//! line up exactly.

use core::f32::consts::{FRAC_PI_2, TAU};

use libm::{cosf, expf, powf, sinf};

/// A point in panel coordinates (sub-pixel precision)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fixed length/width pair for one hand
#[derive(Debug, Clone, Copy)]
pub struct HandStyle {
    /// Hand length as a fraction of the face radius
    pub length_frac: f32,
    /// Base width in pixels
    pub width: f32,
}

/// Hour hand: short and wide
pub const HOUR_HAND: HandStyle = HandStyle {
    length_frac: 0.45,
    width: 6.0,
};

/// Minute hand
pub const MINUTE_HAND: HandStyle = HandStyle {
    length_frac: 0.65,
    width: 4.0,
};

/// Second hand: longest and narrowest, still inside the dial edge
pub const SECOND_HAND: HandStyle = HandStyle {
    length_frac: 0.80,
    width: 2.0,
};

/// Marker wedge tip sits at this fraction of the radius
pub const MARKER_INNER_FRAC: f32 = 0.75;

/// Marker wedge base sits at this fraction of the radius
pub const MARKER_OUTER_FRAC: f32 = 0.95;

/// Angular half-width of a marker wedge in radians
///
/// Small enough that adjacent markers at 30 degree spacing never touch.
pub const MARKER_HALF_WIDTH: f32 = 0.026;

/// Number of decorative ripple rings
pub const RIPPLE_COUNT: usize = 4;

/// Dial angle for a hand value over its period
///
/// `2*pi*(value + fraction)/period - pi/2`: zero points to 12 o'clock,
/// increasing clockwise.
pub fn hand_angle(value: f32, fraction: f32, period: f32) -> f32 {
    TAU * (value + fraction) / period - FRAC_PI_2
}

/// Hour hand angle; drifts with the minute over a 12-hour period
pub fn hour_angle(hour: u8, minute: u8) -> f32 {
    hand_angle((hour % 12) as f32, minute as f32 / 60.0, 12.0)
}

/// Minute hand angle; drifts with the second
pub fn minute_angle(minute: u8, second: u8) -> f32 {
    hand_angle(minute as f32, second as f32 / 60.0, 60.0)
}

/// Second hand angle, stepped per whole second (no sub-second sweep)
pub fn second_angle(second: u8) -> f32 {
    hand_angle(second as f32, 0.0, 60.0)
}

/// Tapered 7-vertex polygon for one hand
///
/// Tail sits `width/2` behind the center, two shoulder pairs widen the
/// base, the tip sits `length` out along the hand direction. The final
/// vertex closes the outline back onto the tail.
pub fn hand_polygon(center: Point, angle: f32, length: f32, width: f32) -> [Point; 7] {
    let dir = (cosf(angle), sinf(angle));
    let perp = (-dir.1, dir.0);

    let at = |along: f32, across: f32| -> Point {
        Point::new(
            center.x + dir.0 * along + perp.0 * across,
            center.y + dir.1 * along + perp.1 * across,
        )
    };

    let tail = at(-width / 2.0, 0.0);
    [
        tail,
        at(-width / 3.0, width / 4.0),
        at(-width / 6.0, width / 2.0),
        at(length, 0.0),
        at(-width / 6.0, -width / 2.0),
        at(-width / 3.0, -width / 4.0),
        tail,
    ]
}

/// Triangular wedge for the hour marker at `index` (0 = 12 o'clock)
///
/// Tip points inward at `0.75r`; the two base vertices sit at `0.95r`,
/// offset by the angular half-width either side.
pub fn marker_wedge(center: Point, radius: f32, index: u8) -> [Point; 3] {
    let angle = hand_angle(index as f32, 0.0, 12.0);
    let inner = radius * MARKER_INNER_FRAC;
    let outer = radius * MARKER_OUTER_FRAC;

    let polar = |a: f32, r: f32| -> Point {
        Point::new(center.x + cosf(a) * r, center.y + sinf(a) * r)
    };

    [
        polar(angle, inner),
        polar(angle - MARKER_HALF_WIDTH, outer),
        polar(angle + MARKER_HALF_WIDTH, outer),
    ]
}

/// One decorative ripple ring
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    /// Ring radius in pixels
    pub radius: f32,
    /// Blend opacity, 0-255
    pub opacity: u8,
}

/// The four concentric guilloché ripple rings
///
/// Radius grows as `r*(0.45 + progress^0.6 * 0.5)`; opacity decays
/// near-linearly over the first quarter and exponentially after.
pub fn ripples(radius: f32) -> [Ripple; RIPPLE_COUNT] {
    let mut out = [Ripple {
        radius: 0.0,
        opacity: 0,
    }; RIPPLE_COUNT];

    for (i, ripple) in out.iter_mut().enumerate() {
        let progress = i as f32 / RIPPLE_COUNT as f32;
        let intensity = if progress < 0.25 {
            0.04 * (1.0 - progress * 2.0)
        } else {
            0.1 * expf(-2.5 * progress)
        };
        *ripple = Ripple {
            radius: radius * (0.45 + powf(progress, 0.6) * 0.5),
            opacity: (intensity * 255.0) as u8,
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_noon_points_up() {
        assert!(close(hour_angle(0, 0), -FRAC_PI_2));
        assert!(close(minute_angle(0, 0), -FRAC_PI_2));
        assert!(close(second_angle(0), -FRAC_PI_2));
        // 24h clock: hour 12 wraps to the same place
        assert!(close(hour_angle(12, 0), -FRAC_PI_2));
    }

    #[test]
    fn test_reference_time_031530() {
        // 03:15:30, the worked example from the bring-up notes
        assert!(close(hour_angle(3, 15), -FRAC_PI_2 + 3.25 * PI / 6.0));
        assert!(close(minute_angle(15, 30), -FRAC_PI_2 + 15.5 * PI / 30.0));
        assert!(close(second_angle(30), FRAC_PI_2));
    }

    #[test]
    fn test_second_hand_steps_per_whole_second() {
        assert!(close(second_angle(10), -FRAC_PI_2 + 10.0 * PI / 30.0));
        // Discrete sweep: same second always maps to the same angle
        assert_eq!(second_angle(10), second_angle(10));
    }

    #[test]
    fn test_hands_coincide_only_at_noon() {
        // Over every whole minute of the 12-hour cycle the hour and
        // minute hands share an angle (mod 2*pi) only at 12:00:00.
        let mut coincidences = 0;
        for hour in 0..12u8 {
            for minute in 0..60u8 {
                let h = hour_angle(hour, minute);
                let m = minute_angle(minute, 0);
                let diff = (h - m).rem_euclid(TAU);
                if diff < 1e-4 || diff > TAU - 1e-4 {
                    coincidences += 1;
                    assert_eq!((hour, minute), (0, 0));
                }
            }
        }
        assert_eq!(coincidences, 1);
    }

    #[test]
    fn test_hand_polygon_tip_and_closure() {
        let c = Point::new(120.0, 120.0);
        let poly = hand_polygon(c, -FRAC_PI_2, 54.0, 6.0);
        // Tip straight up from center
        assert!(close(poly[3].x, 120.0));
        assert!(close(poly[3].y, 120.0 - 54.0));
        // Outline closes on the tail
        assert_eq!(poly[0], poly[6]);
    }

    #[test]
    fn test_marker_zero_at_twelve() {
        let c = Point::new(120.0, 120.0);
        let wedge = marker_wedge(c, 120.0, 0);
        // Tip on the vertical axis at 0.75r above center
        assert!(close(wedge[0].x, 120.0));
        assert!(close(wedge[0].y, 120.0 - 90.0));
    }

    #[test]
    fn test_ripple_radii_and_decay() {
        let r = ripples(120.0);
        // Radii strictly increase and stay inside the dial
        for w in r.windows(2) {
            assert!(w[0].radius < w[1].radius);
        }
        assert!(r[RIPPLE_COUNT - 1].radius < 120.0);
        // First ring uses the linear regime, later rings the exponential
        assert_eq!(r[0].opacity, (0.04 * 255.0) as u8);
        assert!(r[1].opacity >= r[2].opacity);
    }

    proptest! {
        #[test]
        fn prop_angle_stays_in_dial_range(value in 0u8..60) {
            let a = second_angle(value);
            prop_assert!(a >= -FRAC_PI_2 - 1e-5);
            prop_assert!(a < 3.0 * FRAC_PI_2);
        }

        #[test]
        fn prop_hand_tip_length(angle in -3.2f32..3.2, length in 10.0f32..110.0) {
            let c = Point::new(120.0, 120.0);
            let poly = hand_polygon(c, angle, length, 4.0);
            let dx = poly[3].x - c.x;
            let dy = poly[3].y - c.y;
            let tip_len = libm::sqrtf(dx * dx + dy * dy);
            prop_assert!((tip_len - length).abs() < 1e-3);
        }

        #[test]
        fn prop_marker_base_radius(index in 0u8..12) {
            let c = Point::new(120.0, 120.0);
            let wedge = marker_wedge(c, 120.0, index);
            for p in &wedge[1..] {
                let dx = p.x - c.x;
                let dy = p.y - c.y;
                let r = libm::sqrtf(dx * dx + dy * dy);
                prop_assert!((r - 114.0).abs() < 1e-3);
            }
        }
    }
}
