/// 7-bit I2C address the R850 answers on when strapped to the default
pub const DEFAULT_ADDRESS: u8 = 0x3E;

/// Configuration parameters.
/// Used to create an R850 driver
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 7-bit I2C address of the tuner
    pub address: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
        }
    }
}
