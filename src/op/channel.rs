//! Per-channel register rows.
//!
//! Each row holds the values for registers `0x08..0x30` that tune the R850 to
//! one ISDB-T channel. The values are calibration constants measured on real
//! hardware and are not derived from the carrier frequency.

use core::fmt;
use core::ops::Range;

use crate::reg::ROW_LENGTH;

/// Lowest channel number with a register row
pub const FIRST_SUPPORTED_CHANNEL: u32 = 63;

/// Number of rows in the channel table
pub const NUM_CHANNELS: usize = 40;

/// Channel numbers [`get_regs`] resolves
pub const SUPPORTED: Range<u32> =
    FIRST_SUPPORTED_CHANNEL..FIRST_SUPPORTED_CHANNEL + NUM_CHANNELS as u32;

const EINVAL: i32 = 22;
const ENOSYS: i32 = 38;

static CHANNEL_REGS: [[u8; ROW_LENGTH]; NUM_CHANNELS] = [
    // UHF 13
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe0, 0x00, 0x30,
        0x9f, 0xbb, 0xb8, 0xb0, 0xd2, 0x00, 0xcd, 0x55,
        0xa7, 0x40, 0x89, 0x90, 0x16, 0x2e, 0x09, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0xa9, 0x6c,
        0x53, 0xab, 0x5b, 0x46, 0xb3, 0x97, 0x7e, 0x45,
    ],
    // UHF 14
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x9f, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0xcb, 0x58, 0xb8, 0x0b, 0x23,
        0x21, 0xf1, 0x0f, 0x5f, 0xc4, 0x20, 0xa9, 0x8c,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 15
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x90, 0x16, 0x2e, 0x0b, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0xa9, 0x8c,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 16
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x91, 0x16, 0x2e, 0x08, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0xa9, 0x8c,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 17
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x91, 0x16, 0x2e, 0x09, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 18
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x91, 0x16, 0x2e, 0x0a, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 19
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x91, 0x16, 0x2e, 0x0b, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 20
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x92, 0x16, 0x2e, 0x08, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 21
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x92, 0x16, 0x2e, 0x09, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 22
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x92, 0x16, 0x2e, 0x0a, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 23
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x92, 0x16, 0x2e, 0x0b, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 24
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x93, 0x16, 0x2e, 0x08, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 25
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x93, 0x16, 0x2e, 0x09, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 26
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x97, 0xbb, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x93, 0x16, 0x2e, 0x0a, 0x23,
        0x21, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x57, 0x7e, 0x45,
    ],
    // UHF 27
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8f, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x88, 0x0c, 0x17, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 28
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8f, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x88, 0x0c, 0x97, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 29
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8f, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x88, 0x0c, 0x17, 0x06, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 30
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8f, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x88, 0x0c, 0x97, 0x06, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 31
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8f, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x88, 0x0c, 0x17, 0x07, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 32
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x88, 0x0c, 0x97, 0x07, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 33
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x17, 0x04, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 34
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x97, 0x04, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 35
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x17, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 36
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x97, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 37
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x17, 0x06, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 38
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x97, 0x06, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 39
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x17, 0x07, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 40
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x89, 0x0c, 0x97, 0x07, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 41
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x17, 0x04, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 42
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x97, 0x04, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 43
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x17, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 44
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x89, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x97, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 45
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x17, 0x06, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 46
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x97, 0x06, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 47
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x17, 0x07, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 48
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8a, 0x0c, 0x97, 0x07, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
    // UHF 49
    [
        0xca, 0xc0, 0x32, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8b, 0x0c, 0x17, 0x04, 0x22,
        0x00, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x45, 0x73, 0x43, 0x7d, 0x45,
    ],
    // UHF 50
    [
        0xca, 0xc0, 0x32, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8b, 0x0c, 0x97, 0x04, 0x22,
        0x00, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x45, 0x73, 0x43, 0x7d, 0x45,
    ],
    // UHF 51
    [
        0xca, 0xc0, 0x32, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x8e, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0xc1, 0x8b, 0x0c, 0x17, 0x05, 0x22,
        0x00, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5b,
        0x53, 0x99, 0x6b, 0x45, 0x73, 0x43, 0x79, 0x45,
    ],
    // UHF 52
    [
        0xca, 0xc0, 0x72, 0x50, 0x00, 0xe4, 0x00, 0x30,
        0x86, 0x3b, 0xb8, 0xb7, 0xd2, 0x10, 0xcd, 0x55,
        0xa7, 0x42, 0x81, 0x8b, 0x0c, 0x97, 0x05, 0x23,
        0x20, 0xf1, 0x0c, 0x5f, 0xc4, 0x20, 0x9a, 0x5a,
        0xc1, 0x99, 0x6b, 0x44, 0x53, 0x53, 0x7d, 0x45,
    ],
];

/// Reason a channel number has no register row
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelError {
    /// Channel number lies below any numbering the table covers
    Invalid,
    /// Channel number has no register row
    Unsupported,
}

impl ChannelError {
    /// Negative errno equivalent, for callers that expect an integer status
    pub const fn code(self) -> i32 {
        match self {
            Self::Invalid => -EINVAL,
            Self::Unsupported => -ENOSYS,
        }
    }
}

impl From<ChannelError> for i32 {
    fn from(err: ChannelError) -> Self {
        err.code()
    }
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("invalid channel number"),
            Self::Unsupported => f.write_str("unsupported channel"),
        }
    }
}

/// Map a channel number to its row index in the table
pub const fn offset(channel: u32) -> Result<usize, ChannelError> {
    // Checked before use so channels below the range can't wrap to a huge index
    let offset = match channel.checked_sub(FIRST_SUPPORTED_CHANNEL) {
        Some(offset) => offset,
        None => return Err(ChannelError::Invalid),
    };
    // Bounded in u32, a narrower usize would truncate large offsets
    if offset >= NUM_CHANNELS as u32 {
        return Err(ChannelError::Unsupported);
    }
    Ok(offset as usize)
}

/// Borrow the register row of a channel
pub fn row(channel: u32) -> Result<&'static [u8; ROW_LENGTH], ChannelError> {
    offset(channel).map(|offset| &CHANNEL_REGS[offset])
}

/// Copy the register row of a channel into `regs`.
/// `regs` is left untouched if the channel can't be resolved.
pub fn get_regs(channel: u32, regs: &mut [u8; ROW_LENGTH]) -> Result<(), ChannelError> {
    regs.copy_from_slice(row(channel)?);
    Ok(())
}

/// Same as [`get_regs`], but reports `0` on success and a negative errno
/// on failure
pub fn status(channel: u32, regs: &mut [u8; ROW_LENGTH]) -> i32 {
    match get_regs(channel, regs) {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}
