//! GC9A01 display controller driver
//!
//! 240x240 round LCD, 16-bit color over the serial transport. Owns the
//! static initialization command table and the addressable-window
//! protocol: `CASET`/`RASET` arm a window, `RAMWR` opens a pixel
//! stream that must carry exactly the window's pixel count. There is
//! no read-back on this family - correctness rests on the table being
//! reproduced bit-for-bit and on windows being validated before any
//! command is issued.

use guilloche_core::color::Rgb565;
use guilloche_core::panel::{Panel, Region, RegionError};
use guilloche_hal::{DelayProvider, OutputPin, SpiBus};

use crate::transport::SpiTransport;

/// Panel width in pixels
pub const WIDTH: u16 = 240;

/// Panel height in pixels
pub const HEIGHT: u16 = 240;

/// Settle after sleep-out before any further command, ms
///
/// Issuing `DISPON` before this elapses corrupts the first frames on
/// this controller family.
pub const SLPOUT_SETTLE_MS: u32 = 120;

/// Settle after display-on, ms
pub const DISPON_SETTLE_MS: u32 = 20;

/// GC9A01 command opcodes
#[allow(dead_code)]
pub mod cmd {
    pub const NOP: u8 = 0x00;
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const PTLON: u8 = 0x12;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const RAMRD: u8 = 0x2E;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// One initialization table entry: opcode plus its argument bytes
///
/// The argument count is the slice length itself, so the table walk
/// needs no separate entry count and cannot read past an entry.
pub struct InitEntry {
    pub opcode: u8,
    pub args: &'static [u8],
}

const fn entry(opcode: u8, args: &'static [u8]) -> InitEntry {
    InitEntry { opcode, args }
}

/// GC9A01A power-on command table, reproduced from the vendor bring-up
/// sequence. The 0x84-0x8F and 0xB/0xF ranges are manufacturer tuning
/// opcodes with fixed argument bytes.
pub static INIT_TABLE: &[InitEntry] = &[
    entry(0xEF, &[]),
    entry(0xEB, &[0x14]),
    entry(0xFE, &[]),
    entry(0xEF, &[]),
    entry(0xEB, &[0x14]),
    entry(0x84, &[0x40]),
    entry(0x85, &[0xFF]),
    entry(0x86, &[0xFF]),
    entry(0x87, &[0xFF]),
    entry(0x88, &[0x0A]),
    entry(0x89, &[0x21]),
    entry(0x8A, &[0x00]),
    entry(0x8B, &[0x80]),
    entry(0x8C, &[0x01]),
    entry(0x8D, &[0x01]),
    entry(0x8E, &[0xFF]),
    entry(0x8F, &[0xFF]),
    entry(cmd::COLMOD, &[0x05]), // 16-bit/pixel
    entry(0x90, &[0x08, 0x08, 0x08, 0x08]),
    entry(0xBD, &[0x06]),
    entry(0xBC, &[0x00]),
    entry(0xFF, &[0x60, 0x01, 0x04]),
    entry(cmd::MADCTL, &[0x48]), // MX | BGR
    entry(cmd::NORON, &[]),
    entry(cmd::SLPIN, &[]),
];

/// Pixels converted per chunk while streaming
const CHUNK_PIXELS: usize = 32;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gc9a01Error<E> {
    /// Serial bus fault; fatal for this layer, recover by re-`init`
    Bus(E),
    /// Window rejected before any controller command went out
    Window(RegionError),
    /// Pixel stream length does not match the armed window
    PixelCount { expected: u32, got: u32 },
}

/// GC9A01 driver over the serial transport
pub struct Gc9a01<SPI, DC, CS, RST, BL, D> {
    bus: SpiTransport<SPI, DC, CS, RST, BL, D>,
    /// Last window committed to the controller
    window: Option<Region>,
    /// Pixels the controller still expects after the last `RAMWR`
    armed: u32,
}

impl<SPI, DC, CS, RST, BL, D> Gc9a01<SPI, DC, CS, RST, BL, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    D: DelayProvider,
{
    pub fn new(bus: SpiTransport<SPI, DC, CS, RST, BL, D>) -> Self {
        Self {
            bus,
            window: None,
            armed: 0,
        }
    }

    /// Full power-on sequence
    ///
    /// Reset pulse, command table walk, sleep-out with its long settle,
    /// display-on with its short settle, then backlight. The ordering
    /// and both settle times are controller requirements.
    pub fn init(&mut self) -> Result<(), Gc9a01Error<SPI::Error>> {
        self.bus.reset();

        for e in INIT_TABLE {
            self.bus.command(e.opcode).map_err(Gc9a01Error::Bus)?;
            if !e.args.is_empty() {
                self.bus.data(e.args).map_err(Gc9a01Error::Bus)?;
            }
        }

        self.bus.command(cmd::SLPOUT).map_err(Gc9a01Error::Bus)?;
        self.bus.settle_ms(SLPOUT_SETTLE_MS);
        self.bus.command(cmd::DISPON).map_err(Gc9a01Error::Bus)?;
        self.bus.settle_ms(DISPON_SETTLE_MS);
        self.bus.set_backlight(true);
        Ok(())
    }

    /// Arm an addressable window
    ///
    /// Re-validates against this panel's dimensions before the first
    /// command byte - a malformed window must never reach the
    /// controller, or its write cursor desynchronizes.
    pub fn set_window(&mut self, region: Region) -> Result<(), Gc9a01Error<SPI::Error>> {
        let region = Region::new(
            region.x1(),
            region.y1(),
            region.x2(),
            region.y2(),
            WIDTH,
            HEIGHT,
        )
        .map_err(Gc9a01Error::Window)?;

        self.bus.command(cmd::CASET).map_err(Gc9a01Error::Bus)?;
        self.bus
            .data(&coords(region.x1(), region.x2()))
            .map_err(Gc9a01Error::Bus)?;

        self.bus.command(cmd::RASET).map_err(Gc9a01Error::Bus)?;
        self.bus
            .data(&coords(region.y1(), region.y2()))
            .map_err(Gc9a01Error::Bus)?;

        self.bus.command(cmd::RAMWR).map_err(Gc9a01Error::Bus)?;
        self.armed = region.pixel_count();
        self.window = Some(region);
        Ok(())
    }

    /// Stream the armed window's pixels, high byte first
    ///
    /// The slice length must equal the count armed by
    /// [`Gc9a01::set_window`]; anything else desynchronizes the
    /// controller framing and is rejected up front.
    pub fn write_pixels(&mut self, pixels: &[Rgb565]) -> Result<(), Gc9a01Error<SPI::Error>> {
        if pixels.len() as u32 != self.armed {
            return Err(Gc9a01Error::PixelCount {
                expected: self.armed,
                got: pixels.len() as u32,
            });
        }

        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        let mut txn = self.bus.data_transaction();
        for group in pixels.chunks(CHUNK_PIXELS) {
            for (i, px) in group.iter().enumerate() {
                let [hi, lo] = px.to_be_bytes();
                chunk[2 * i] = hi;
                chunk[2 * i + 1] = lo;
            }
            txn.write(&chunk[..group.len() * 2])
                .map_err(Gc9a01Error::Bus)?;
        }
        drop(txn);

        self.armed = 0;
        Ok(())
    }

    /// Fill the whole panel with one color
    pub fn clear(&mut self, color: Rgb565) -> Result<(), Gc9a01Error<SPI::Error>> {
        self.set_window(Region::full(WIDTH, HEIGHT))?;

        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; CHUNK_PIXELS * 2];
        for i in 0..CHUNK_PIXELS {
            chunk[2 * i] = hi;
            chunk[2 * i + 1] = lo;
        }

        let mut remaining = WIDTH as usize * HEIGHT as usize;
        let mut txn = self.bus.data_transaction();
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            txn.write(&chunk[..n * 2]).map_err(Gc9a01Error::Bus)?;
            remaining -= n;
        }
        drop(txn);

        self.armed = 0;
        Ok(())
    }

    /// Switch the display output on
    pub fn display_on(&mut self) -> Result<(), Gc9a01Error<SPI::Error>> {
        self.bus.command(cmd::DISPON).map_err(Gc9a01Error::Bus)
    }

    /// Blank the display output without losing controller state
    pub fn display_off(&mut self) -> Result<(), Gc9a01Error<SPI::Error>> {
        self.bus.command(cmd::DISPOFF).map_err(Gc9a01Error::Bus)
    }

    pub fn set_backlight(&mut self, on: bool) {
        self.bus.set_backlight(on);
    }

    /// Last window committed to the controller, if any
    pub fn committed_window(&self) -> Option<Region> {
        self.window
    }
}

/// CASET/RASET argument layout: both bounds as big-endian u16 pairs
fn coords(a: u16, b: u16) -> [u8; 4] {
    let [a_hi, a_lo] = a.to_be_bytes();
    let [b_hi, b_lo] = b.to_be_bytes();
    [a_hi, a_lo, b_hi, b_lo]
}

impl<SPI, DC, CS, RST, BL, D> Panel for Gc9a01<SPI, DC, CS, RST, BL, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    D: DelayProvider,
{
    type Error = Gc9a01Error<SPI::Error>;

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn set_window(&mut self, region: Region) -> Result<(), Self::Error> {
        Gc9a01::set_window(self, region)
    }

    fn write_pixels(&mut self, pixels: &[Rgb565]) -> Result<(), Self::Error> {
        Gc9a01::write_pixels(self, pixels)
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        Gc9a01::clear(self, color)
    }

    fn set_backlight(&mut self, on: bool) {
        Gc9a01::set_backlight(self, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{transport, Ev, Log, MockDelay, MockPin, MockSpi};
    use std::vec;
    use std::vec::Vec;

    type MockDriver = Gc9a01<MockSpi, MockPin, MockPin, MockPin, MockPin, MockDelay>;

    fn driver() -> (MockDriver, Log) {
        let (bus, log) = transport();
        (Gc9a01::new(bus), log)
    }

    /// Command opcodes in issue order: every write while DC is low
    fn commands(log: &Log) -> Vec<u8> {
        let mut dc_low = false;
        let mut out = Vec::new();
        for ev in log.borrow().iter() {
            match ev {
                Ev::Dc(level) => dc_low = !level,
                Ev::Write(bytes) if dc_low => out.extend_from_slice(bytes),
                _ => {}
            }
        }
        out
    }

    /// All data-mode bytes, in order
    fn data_bytes(log: &Log) -> Vec<u8> {
        let mut dc_low = false;
        let mut out = Vec::new();
        for ev in log.borrow().iter() {
            match ev {
                Ev::Dc(level) => dc_low = !level,
                Ev::Write(bytes) if !dc_low => out.extend_from_slice(bytes),
                _ => {}
            }
        }
        out
    }

    fn delays(log: &Log) -> Vec<u32> {
        log.borrow()
            .iter()
            .filter_map(|e| match e {
                Ev::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_init_walks_table_then_wakes_panel() {
        let (mut d, log) = driver();
        d.init().unwrap();

        let mut expected: Vec<u8> = INIT_TABLE.iter().map(|e| e.opcode).collect();
        expected.push(cmd::SLPOUT);
        expected.push(cmd::DISPON);
        assert_eq!(commands(&log), expected);

        // Reset pulse timing, then the two wake settles, in order
        assert_eq!(delays(&log), vec![5, 15, 15, 120, 20]);

        // Backlight comes on last
        assert_eq!(log.borrow().last(), Some(&Ev::Backlight(true)));
    }

    #[test]
    fn test_init_table_argument_bytes() {
        let (mut d, log) = driver();
        d.init().unwrap();

        let expected: Vec<u8> = INIT_TABLE
            .iter()
            .flat_map(|e| e.args.iter().copied())
            .collect();
        assert_eq!(data_bytes(&log), expected);
    }

    #[test]
    fn test_set_window_byte_layout() {
        let (mut d, log) = driver();
        let region = Region::new(10, 20, 99, 219, WIDTH, HEIGHT).unwrap();
        d.set_window(region).unwrap();

        assert_eq!(commands(&log), vec![cmd::CASET, cmd::RASET, cmd::RAMWR]);
        assert_eq!(
            data_bytes(&log),
            vec![0x00, 0x0A, 0x00, 0x63, 0x00, 0x14, 0x00, 0xDB]
        );
    }

    #[test]
    fn test_invalid_window_rejected_before_any_command() {
        let (mut d, log) = driver();
        // Valid for a hypothetical 400px panel, not for this one
        let region = Region::new(0, 0, 300, 10, 400, 400).unwrap();
        let err = d.set_window(region).unwrap_err();
        assert_eq!(err, Gc9a01Error::Window(RegionError::OutOfBounds));
        assert!(log.borrow().is_empty(), "commands issued for bad window");
        assert_eq!(d.committed_window(), None);
    }

    #[test]
    fn test_pixel_count_must_match_armed_window() {
        let (mut d, _log) = driver();
        let region = Region::new(0, 0, 1, 1, WIDTH, HEIGHT).unwrap();
        d.set_window(region).unwrap();

        let three = [Rgb565(0xAAAA); 3];
        assert_eq!(
            d.write_pixels(&three),
            Err(Gc9a01Error::PixelCount {
                expected: 4,
                got: 3
            })
        );

        let four = [Rgb565(0xAAAA); 4];
        d.write_pixels(&four).unwrap();

        // The window is consumed; a second stream needs a new RAMWR
        assert_eq!(
            d.write_pixels(&four),
            Err(Gc9a01Error::PixelCount {
                expected: 0,
                got: 4
            })
        );
    }

    #[test]
    fn test_write_pixels_streams_big_endian_in_one_transaction() {
        let (mut d, log) = driver();
        let region = Region::new(0, 0, 1, 0, WIDTH, HEIGHT).unwrap();
        d.set_window(region).unwrap();
        log.borrow_mut().clear();

        d.write_pixels(&[Rgb565(0x1234), Rgb565(0xABCD)]).unwrap();

        assert_eq!(data_bytes(&log), vec![0x12, 0x34, 0xAB, 0xCD]);
        let asserts = log.borrow().iter().filter(|e| **e == Ev::Cs(false)).count();
        assert_eq!(asserts, 1, "pixel stream split across CS transactions");
    }

    #[test]
    fn test_clear_streams_full_panel() {
        let (mut d, log) = driver();
        d.clear(Rgb565(0xF800)).unwrap();

        let bytes = data_bytes(&log);
        // CASET/RASET args (8 bytes) plus two bytes per pixel
        assert_eq!(bytes.len(), 8 + WIDTH as usize * HEIGHT as usize * 2);
        assert_eq!(&bytes[8..10], &[0xF8, 0x00]);
    }

    #[test]
    fn test_init_then_clear_commits_full_panel_window() {
        let (mut d, _log) = driver();
        d.init().unwrap();
        d.clear(Rgb565(0x0000)).unwrap();

        let w = d.committed_window().unwrap();
        assert_eq!((w.x1(), w.y1(), w.x2(), w.y2()), (0, 0, 239, 239));
        assert_eq!(w.pixel_count(), 57_600);
    }
}
