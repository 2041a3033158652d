//! Serial display transport
//!
//! Byte-level command/data framing over the clocked serial link:
//! mode-select (DC) picks command vs data, chip-select brackets every
//! transaction, reset and backlight are plain level lines. The bus is
//! assumed lossless and synchronous - there is no retry path here; a
//! bus fault propagates to the caller, whose only recovery is a
//! controller reset.

use guilloche_hal::{DelayProvider, OutputPin, SpiBus};

/// Reset line release before the pulse, ms
pub const RESET_SETUP_MS: u32 = 5;

/// Reset line held asserted, ms (controller minimum)
pub const RESET_HOLD_MS: u32 = 15;

/// Settle after reset deassert before the first command, ms
pub const RESET_SETTLE_MS: u32 = 15;

/// Command/data framing over SPI plus the four control lines
pub struct SpiTransport<SPI, DC, CS, RST, BL, D> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: RST,
    backlight: BL,
    delay: D,
}

impl<SPI, DC, CS, RST, BL, D> SpiTransport<SPI, DC, CS, RST, BL, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
    D: DelayProvider,
{
    /// Take ownership of the bus and control lines; parks CS/DC/RST
    /// high and the backlight off, matching the panel's idle levels
    pub fn new(spi: SPI, mut dc: DC, mut cs: CS, mut rst: RST, mut backlight: BL, delay: D) -> Self {
        cs.set_high();
        dc.set_high();
        rst.set_high();
        backlight.set_low();
        Self {
            spi,
            dc,
            cs,
            rst,
            backlight,
            delay,
        }
    }

    /// Send one opcode in command mode, as a single CS transaction
    pub fn command(&mut self, opcode: u8) -> Result<(), SPI::Error> {
        self.dc.set_low();
        self.cs.set_low();
        let res = self.spi.write(&[opcode]);
        // CS must release even when the write faults
        self.cs.set_high();
        res
    }

    /// Send argument bytes in data mode, as a single CS transaction
    pub fn data(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        let mut txn = self.data_transaction();
        txn.write(bytes)
    }

    /// Open a bulk data-mode transaction
    ///
    /// CS is asserted now and released when the guard drops, so a pixel
    /// stream of any length is still exactly one logical transaction.
    pub fn data_transaction(&mut self) -> DataTransaction<'_, SPI, CS> {
        self.dc.set_high();
        self.cs.set_low();
        DataTransaction {
            spi: &mut self.spi,
            cs: &mut self.cs,
        }
    }

    /// Hardware reset pulse with the controller-mandated minimum delays
    pub fn reset(&mut self) {
        self.rst.set_high();
        self.delay.delay_ms(RESET_SETUP_MS);
        self.rst.set_low();
        self.delay.delay_ms(RESET_HOLD_MS);
        self.rst.set_high();
        self.delay.delay_ms(RESET_SETTLE_MS);
    }

    /// Backlight level toggle
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight.set_state(on);
    }

    /// Blocking settle wait between initialization commands
    pub fn settle_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

/// RAII guard for one bulk data transaction
///
/// Holds CS asserted across any number of writes; releasing happens in
/// `Drop` so the invariant survives early returns on bus faults.
pub struct DataTransaction<'a, SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    spi: &'a mut SPI,
    cs: &'a mut CS,
}

impl<SPI, CS> DataTransaction<'_, SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), SPI::Error> {
        self.spi.write(bytes)
    }
}

impl<SPI, CS> Drop for DataTransaction<'_, SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    fn drop(&mut self) {
        self.cs.set_high();
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording mocks shared by the transport and driver tests

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Ev {
        Dc(bool),
        Cs(bool),
        Rst(bool),
        Backlight(bool),
        Write(Vec<u8>),
        DelayMs(u32),
    }

    pub type Log = Rc<RefCell<Vec<Ev>>>;

    pub struct MockPin {
        make: fn(bool) -> Ev,
        state: bool,
        log: Log,
    }

    impl MockPin {
        pub fn new(make: fn(bool) -> Ev, log: Log) -> Self {
            Self {
                make,
                state: false,
                log,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.state = true;
            self.log.borrow_mut().push((self.make)(true));
        }

        fn set_low(&mut self) {
            self.state = false;
            self.log.borrow_mut().push((self.make)(false));
        }

        fn is_set_high(&self) -> bool {
            self.state
        }
    }

    pub struct MockSpi {
        pub log: Log,
    }

    impl SpiBus for MockSpi {
        type Error = core::convert::Infallible;

        fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Ev::Write(data.to_vec()));
            Ok(())
        }
    }

    pub struct MockDelay {
        pub log: Log,
    }

    impl DelayProvider for MockDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Ev::DelayMs(ms));
        }

        fn delay_us(&mut self, _us: u32) {}
    }

    pub type MockTransport = SpiTransport<MockSpi, MockPin, MockPin, MockPin, MockPin, MockDelay>;

    pub fn transport() -> (MockTransport, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let t = SpiTransport::new(
            MockSpi { log: log.clone() },
            MockPin::new(Ev::Dc, log.clone()),
            MockPin::new(Ev::Cs, log.clone()),
            MockPin::new(Ev::Rst, log.clone()),
            MockPin::new(Ev::Backlight, log.clone()),
            MockDelay { log: log.clone() },
        );
        // Drop the constructor's idle-level writes so tests start clean
        log.borrow_mut().clear();
        (t, log)
    }
}
