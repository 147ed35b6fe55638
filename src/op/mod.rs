//! Defines the register data programmed by the driver
pub mod channel;

pub use channel::ChannelError;
