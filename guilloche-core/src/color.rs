//! RGB565 color handling and the dial palette
//!
//! The GC9A01 is driven in 16-bit packed color (`COLMOD = 0x05`), so
//! everything downstream of the geometry engine works in RGB565. The
//! palette reproduces the original rose-gold/silver dial colors.

/// A 16-bit packed RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    /// Pack an 8-bit-per-channel color into RGB565
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self((((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3))
    }

    /// Wire representation: high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Red channel expanded back to 8 bits
    pub const fn r(self) -> u8 {
        let r5 = (self.0 >> 11) & 0x1F;
        ((r5 << 3) | (r5 >> 2)) as u8
    }

    /// Green channel expanded back to 8 bits
    pub const fn g(self) -> u8 {
        let g6 = (self.0 >> 5) & 0x3F;
        ((g6 << 2) | (g6 >> 4)) as u8
    }

    /// Blue channel expanded back to 8 bits
    pub const fn b(self) -> u8 {
        let b5 = self.0 & 0x1F;
        ((b5 << 3) | (b5 >> 2)) as u8
    }

    /// Composite `self` over `bg` at the given opacity (0 = transparent,
    /// 255 = opaque)
    pub fn over(self, bg: Rgb565, alpha: u8) -> Rgb565 {
        let a = alpha as u16;
        let na = 255 - a;
        let r = ((self.r() as u16 * a + bg.r() as u16 * na) / 255) as u8;
        let g = ((self.g() as u16 * a + bg.g() as u16 * na) / 255) as u8;
        let b = ((self.b() as u16 * a + bg.b() as u16 * na) / 255) as u8;
        Rgb565::from_rgb888(r, g, b)
    }

    /// Linear interpolation from `self` to `to`, `t` in 0.0..=1.0
    pub fn lerp(self, to: Rgb565, t: f32) -> Rgb565 {
        let t = if t < 0.0 {
            0.0
        } else if t > 1.0 {
            1.0
        } else {
            t
        };
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t) as u8 };
        Rgb565::from_rgb888(
            mix(self.r(), to.r()),
            mix(self.g(), to.g()),
            mix(self.b(), to.b()),
        )
    }
}

pub const WHITE: Rgb565 = Rgb565::from_rgb888(255, 255, 255);
pub const BLACK: Rgb565 = Rgb565::from_rgb888(0, 0, 0);

// Rose gold dial base (#f7e8e3 / #f2dcd4 / #e8cec7)
pub const ROSE_GOLD_LIGHT: Rgb565 = Rgb565::from_rgb888(247, 232, 227);
pub const ROSE_GOLD_MID: Rgb565 = Rgb565::from_rgb888(242, 220, 212);
pub const ROSE_GOLD_DARK: Rgb565 = Rgb565::from_rgb888(232, 206, 199);

// Metallic silver for markers and hands (#e8e8e8 / #999999 / #666666)
pub const SILVER_LIGHT: Rgb565 = Rgb565::from_rgb888(232, 232, 232);
pub const SILVER_MID: Rgb565 = Rgb565::from_rgb888(153, 153, 153);
pub const SILVER_DARK: Rgb565 = Rgb565::from_rgb888(102, 102, 102);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_extremes() {
        assert_eq!(BLACK.0, 0x0000);
        assert_eq!(WHITE.0, 0xFFFF);
        assert_eq!(Rgb565::from_rgb888(255, 0, 0).0, 0xF800);
        assert_eq!(Rgb565::from_rgb888(0, 255, 0).0, 0x07E0);
        assert_eq!(Rgb565::from_rgb888(0, 0, 255).0, 0x001F);
    }

    #[test]
    fn test_be_bytes_high_byte_first() {
        let c = Rgb565(0x1234);
        assert_eq!(c.to_be_bytes(), [0x12, 0x34]);
    }

    #[test]
    fn test_channel_roundtrip() {
        // 5/6-bit expansion must reproduce full-scale channels exactly
        assert_eq!(WHITE.r(), 255);
        assert_eq!(WHITE.g(), 255);
        assert_eq!(WHITE.b(), 255);
        assert_eq!(BLACK.r(), 0);
    }

    #[test]
    fn test_over_endpoints() {
        assert_eq!(BLACK.over(WHITE, 0), WHITE);
        assert_eq!(BLACK.over(WHITE, 255), BLACK);
        // Mid-alpha lands strictly between
        let mid = BLACK.over(WHITE, 128);
        assert!(mid.r() > 0 && mid.r() < 255);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(SILVER_DARK.lerp(SILVER_LIGHT, 0.0), SILVER_DARK);
        // t=1.0 reproduces the target up to 565 quantization
        let end = SILVER_DARK.lerp(SILVER_LIGHT, 1.0);
        assert_eq!(end, SILVER_LIGHT);
    }
}
