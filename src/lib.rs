//! Channel register tables and a register bank driver for the
//! Rafael Micro R850 terrestrial tuner.
//!
//! [`op::channel`] resolves a channel number to the register row that tunes
//! the chip to it. [`R850`] writes those rows over any `embedded-hal` I2C bus.
#![cfg_attr(not(test), no_std)]

pub mod conf;
pub mod op;
pub mod reg;
pub mod tuner;

pub use tuner::{R850Error, R850};
