//! Bit-addressable 16-bit flag words.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;

/// A packed, bit-addressable 16-bit value.
///
/// GPI uses two-byte flag words throughout the format — the record header's flag-byte pair,
/// a waypoint's own flags, an area's flags, and so on. All of them are addressed as 16
/// individually-settable bits, so they share this one representation instead of sixteen
/// hand-rolled bitfield structs. Byte 0 occupies bits 0..7, byte 1 occupies bits 8..15.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags16(
    /// The raw packed bits.
    pub u16,
);

impl Flags16 {
    /// Returns the value of the given bit (0-indexed, 0..=15).
    pub fn get(&self, bit: u8) -> bool {
        debug_assert!(bit < 16);
        self.0 & (1 << bit) != 0
    }

    /// Sets or clears the given bit (0-indexed, 0..=15).
    pub fn set(&mut self, bit: u8, value: bool) {
        debug_assert!(bit < 16);
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }

    /// Builds a `Flags16` with the given bit set.
    pub fn with(bit: u8, value: bool) -> Flags16 {
        let mut flags = Flags16::default();
        flags.set(bit, value);
        flags
    }

    /// Reads a little-endian `Flags16` from `read`.
    pub fn read_from<R: Read>(read: &mut R) -> Result<Flags16> {
        Ok(Flags16(read.read_u16::<LittleEndian>()?))
    }

    /// Writes this `Flags16` to `write` in little-endian order.
    pub fn write_to<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.0)?;
        Ok(())
    }
}

impl From<u16> for Flags16 {
    fn from(n: u16) -> Flags16 {
        Flags16(n)
    }
}

impl From<Flags16> for u16 {
    fn from(flags: Flags16) -> u16 {
        flags.0
    }
}
