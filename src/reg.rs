/// Size of the R850 register bank
pub const NUM_REGS: usize = 0x30;

/// First register written when selecting a channel. Registers below this
/// hold chip status and are never part of a channel row.
pub const CHANNEL_REGS_BASE: u8 = 0x08;

/// Number of registers programmed per channel, from
/// [`CHANNEL_REGS_BASE`] up to the end of the bank
pub const ROW_LENGTH: usize = NUM_REGS - CHANNEL_REGS_BASE as usize;
