pub(crate) mod err;

use embedded_hal::i2c::I2c;
use tracing::{debug, trace};

use crate::conf::Config;
use crate::op::channel;
use crate::reg::*;

pub use err::R850Error;

/// Register the chip starts streaming from on every read
const READ_START: u8 = 0x00;

/// Wrapper around a Rafael Micro R850 tuner
pub struct R850<TI2C> {
    i2c: TI2C,
    address: u8,
    regs: [u8; NUM_REGS],
}

impl<TI2C, TI2CERR> R850<TI2C>
where
    TI2C: I2c<Error = TI2CERR>,
{
    // Create a new R850. Nothing is sent over the bus until the first write
    pub fn new(i2c: TI2C, conf: Config) -> Self {
        Self {
            i2c,
            address: conf.address,
            regs: [0; NUM_REGS],
        }
    }

    /// Tune to a channel by writing its register row at [`CHANNEL_REGS_BASE`].
    /// Unknown channels are rejected before anything is written.
    pub fn set_channel(&mut self, channel: u32) -> Result<(), R850Error<TI2CERR>> {
        let mut row = [0u8; ROW_LENGTH];
        channel::get_regs(channel, &mut row)?;
        self.write_regs(CHANNEL_REGS_BASE, &row)?;
        debug!(channel, "r850 channel set");
        Ok(())
    }

    /// Write data into consecutive registers, starting at `reg`.
    /// Writing nothing puts nothing on the bus.
    pub fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), R850Error<TI2CERR>> {
        let start = reg as usize;
        let end = start + data.len();
        if start >= NUM_REGS || end > NUM_REGS {
            return Err(R850Error::OutOfRange);
        }
        if data.is_empty() {
            return Ok(());
        }

        // The register address leads the payload in a single write
        let mut buf = [0u8; NUM_REGS + 1];
        buf[0] = reg;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..=data.len()])
            .map_err(R850Error::I2c)?;

        self.regs[start..end].copy_from_slice(data);
        trace!(reg, len = data.len(), "r850 registers written");
        Ok(())
    }

    /// Read consecutive registers, starting at `reg`.
    /// An empty `result` reads nothing.
    pub fn read_regs(&mut self, reg: u8, result: &mut [u8]) -> Result<(), R850Error<TI2CERR>> {
        let start = reg as usize;
        let end = start + result.len();
        if start >= NUM_REGS || end > NUM_REGS {
            return Err(R850Error::OutOfRange);
        }
        if result.is_empty() {
            return Ok(());
        }

        // Reads can't be addressed, so everything up to `end` is fetched
        let mut buf = [0u8; NUM_REGS];
        self.i2c
            .write_read(self.address, &[READ_START], &mut buf[..end])
            .map_err(R850Error::I2c)?;

        // The chip shifts each byte out LSB first
        for (dst, src) in result.iter_mut().zip(&buf[start..end]) {
            *dst = src.reverse_bits();
        }
        self.regs[start..end].copy_from_slice(result);
        Ok(())
    }

    /// Last known value of every register, as written or read by this driver
    pub fn regs(&self) -> &[u8; NUM_REGS] {
        &self.regs
    }

    /// Give back the I2C bus
    pub fn release(self) -> TI2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::DEFAULT_ADDRESS;
    use crate::op::ChannelError;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn tuner(expectations: &[I2cTransaction]) -> R850<I2cMock> {
        R850::new(I2cMock::new(expectations), Config::default())
    }

    fn done(tuner: R850<I2cMock>) {
        let mut i2c = tuner.release();
        i2c.done();
    }

    #[test]
    fn set_channel_writes_row_at_base() {
        let row = channel::row(63).unwrap();
        let mut frame = vec![CHANNEL_REGS_BASE];
        frame.extend_from_slice(row);

        let mut tuner = tuner(&[I2cTransaction::write(DEFAULT_ADDRESS, frame)]);
        tuner.set_channel(63).unwrap();

        assert_eq!(&tuner.regs()[..CHANNEL_REGS_BASE as usize], &[0u8; 8]);
        assert_eq!(&tuner.regs()[CHANNEL_REGS_BASE as usize..], row);
        done(tuner);
    }

    #[test]
    fn set_channel_rejects_unknown_channels_without_bus_traffic() {
        let mut tuner = tuner(&[]);
        assert_eq!(
            tuner.set_channel(62),
            Err(R850Error::Channel(ChannelError::Invalid))
        );
        assert_eq!(
            tuner.set_channel(103),
            Err(R850Error::Channel(ChannelError::Unsupported))
        );
        assert_eq!(tuner.regs(), &[0; NUM_REGS]);
        done(tuner);
    }

    #[test]
    fn set_channel_passes_bus_errors_on() {
        let mut frame = vec![CHANNEL_REGS_BASE];
        frame.extend_from_slice(channel::row(102).unwrap());

        let mut tuner = tuner(&[
            I2cTransaction::write(DEFAULT_ADDRESS, frame).with_error(ErrorKind::Other)
        ]);
        assert_eq!(tuner.set_channel(102), Err(R850Error::I2c(ErrorKind::Other)));
        assert_eq!(tuner.regs(), &[0; NUM_REGS]);
        done(tuner);
    }

    #[test]
    fn write_regs_uses_configured_address() {
        let i2c = I2cMock::new(&[I2cTransaction::write(0x3C, vec![0x0A, 0x12, 0x34])]);
        let mut tuner = R850::new(i2c, Config { address: 0x3C });
        tuner.write_regs(0x0A, &[0x12, 0x34]).unwrap();
        assert_eq!(tuner.regs()[0x0A..0x0C], [0x12u8, 0x34]);
        done(tuner);
    }

    #[test]
    fn write_regs_rejects_ranges_past_bank() {
        let mut tuner = tuner(&[]);
        assert_eq!(tuner.write_regs(0x2F, &[0, 0]), Err(R850Error::OutOfRange));
        assert_eq!(tuner.write_regs(0x30, &[]), Err(R850Error::OutOfRange));
        done(tuner);
    }

    #[test]
    fn empty_write_skips_bus() {
        let mut tuner = tuner(&[]);
        assert_eq!(tuner.write_regs(0x08, &[]), Ok(()));
        assert_eq!(tuner.write_regs(0x00, &[]), Ok(()));
        assert_eq!(tuner.regs(), &[0; NUM_REGS]);
        done(tuner);
    }

    #[test]
    fn read_regs_reads_from_start_and_reverses_bits() {
        let mut tuner = tuner(&[I2cTransaction::write_read(
            DEFAULT_ADDRESS,
            vec![0x00],
            vec![0x00, 0x00, 0x01, 0x80],
        )]);
        let mut result = [0u8; 2];
        tuner.read_regs(0x02, &mut result).unwrap();
        assert_eq!(result, [0x80u8, 0x01]);
        assert_eq!(tuner.regs()[0x02..0x04], [0x80u8, 0x01]);
        done(tuner);
    }

    #[test]
    fn empty_read_skips_bus() {
        let mut tuner = tuner(&[]);
        let mut result = [0u8; 0];
        assert_eq!(tuner.read_regs(0x00, &mut result), Ok(()));
        assert_eq!(tuner.read_regs(0x2F, &mut result), Ok(()));
        assert_eq!(tuner.read_regs(0x30, &mut result), Err(R850Error::OutOfRange));
        done(tuner);
    }

    #[test]
    fn read_regs_rejects_ranges_past_bank() {
        let mut tuner = tuner(&[]);
        let mut result = [0u8; 2];
        assert_eq!(tuner.read_regs(0x2F, &mut result), Err(R850Error::OutOfRange));
        done(tuner);
    }
}
