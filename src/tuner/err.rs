use core::fmt;

use crate::op::ChannelError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum R850Error<TI2CERR> {
    /// Bus failure reported by the I2C peripheral
    I2c(TI2CERR),
    /// Channel could not be resolved to a register row
    Channel(ChannelError),
    /// Register range runs past the end of the bank
    OutOfRange,
}

impl<TI2CERR> From<ChannelError> for R850Error<TI2CERR> {
    fn from(err: ChannelError) -> Self {
        Self::Channel(err)
    }
}

impl<TI2CERR: fmt::Debug> fmt::Display for R850Error<TI2CERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "i2c error: {:?}", e),
            Self::Channel(e) => write!(f, "{}", e),
            Self::OutOfRange => f.write_str("register range out of bounds"),
        }
    }
}
