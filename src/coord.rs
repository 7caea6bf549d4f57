//! Fixed-point angular coordinates.
//!
//! GPI stores latitude/longitude as fixed-point integers rather than floats. `coord<24>` packs
//! into 3 wire bytes (sign-extended to 4 on read); `coord<32>` uses the full 4 bytes. The raw
//! integer, not a degree value, is the canonical representation: [`CoordPair`] and the
//! `read_coord*`/`write_coord*` functions move raw units to and from the wire directly, so
//! `encode(decode(x)) == x` holds for every raw `x` the format can carry.
//!
//! [`degrees`] and [`from_degrees`] convert between raw units and `f64` degrees using the
//! documented `raw * 360 / 2^(bits+1)` scale. That conversion is lossy in both directions: the
//! scale's grid is coarser than `f64` precision, and a signed 32-bit raw value only reaches
//! about ±90 degrees, well short of the ±180 a real-world longitude needs. Neither function is
//! used on the encode/decode path; they exist for display and for building test fixtures from
//! human-readable coordinates, not for round-tripping wire data.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;

fn sign_extend(raw: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((raw << shift) as i32) >> shift
}

/// Converts a `coord<bits>` raw value to degrees via `raw * 360 / 2^(bits+1)`. Lossy and
/// range-limited; see the module docs. Not used by the wire codec.
pub fn degrees(raw: i32, bits: u32) -> f64 {
    f64::from(raw) * 360.0 / (1u64 << (bits + 1)) as f64
}

/// The inverse of [`degrees`], saturating to the representable raw range if `deg` is further
/// from zero than a `bits`-wide signed raw value can reach.
pub fn from_degrees(deg: f64, bits: u32) -> i32 {
    let scaled = deg * (1u64 << (bits + 1)) as f64 / 360.0;
    scaled.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Reads one `coord<24>`'s raw value, sign-extended from its 3 wire bytes.
pub fn read_coord24<R: Read>(read: &mut R) -> Result<i32> {
    let mut buf = [0u8; 3];
    read.read_exact(&mut buf)?;
    let raw = u32::from(buf[0]) | (u32::from(buf[1]) << 8) | (u32::from(buf[2]) << 16);
    Ok(sign_extend(raw, 24))
}

/// Writes one `coord<24>`'s raw value, truncating to its low 24 bits.
pub fn write_coord24<W: Write>(write: &mut W, raw: i32) -> Result<()> {
    let n = raw as u32 & 0x00FF_FFFF;
    write.write_all(&[n as u8, (n >> 8) as u8, (n >> 16) as u8])?;
    Ok(())
}

/// Reads one `coord<32>`'s raw value.
pub fn read_coord32<R: Read>(read: &mut R) -> Result<i32> {
    Ok(read.read_u32::<LittleEndian>()? as i32)
}

/// Writes one `coord<32>`'s raw value.
pub fn write_coord32<W: Write>(write: &mut W, raw: i32) -> Result<()> {
    write.write_u32::<LittleEndian>(raw as u32)?;
    Ok(())
}

/// A (latitude, longitude) pair, always encoded latitude-then-longitude.
///
/// Fields are raw fixed-point units, not degrees; use [`CoordPair::from_degrees_32`] and
/// [`CoordPair::to_degrees_32`] to convert.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoordPair {
    /// Raw latitude value.
    pub latitude: i32,
    /// Raw longitude value.
    pub longitude: i32,
}

impl CoordPair {
    /// Reads a `coord_pair<24>`.
    pub fn read_from_24<R: Read>(read: &mut R) -> Result<CoordPair> {
        let latitude = read_coord24(read)?;
        let longitude = read_coord24(read)?;
        Ok(CoordPair { latitude, longitude })
    }

    /// Writes a `coord_pair<24>`.
    pub fn write_to_24<W: Write>(&self, write: &mut W) -> Result<()> {
        write_coord24(write, self.latitude)?;
        write_coord24(write, self.longitude)
    }

    /// Reads a `coord_pair<32>`.
    pub fn read_from_32<R: Read>(read: &mut R) -> Result<CoordPair> {
        let latitude = read_coord32(read)?;
        let longitude = read_coord32(read)?;
        Ok(CoordPair { latitude, longitude })
    }

    /// Writes a `coord_pair<32>`.
    pub fn write_to_32<W: Write>(&self, write: &mut W) -> Result<()> {
        write_coord32(write, self.latitude)?;
        write_coord32(write, self.longitude)
    }

    /// Builds a pair from degree values using the `coord<32>` scale. Lossy and saturating; see
    /// the module docs. Useful for constructing a pair from a human-readable coordinate, not for
    /// round-tripping one already on the wire.
    pub fn from_degrees_32(latitude: f64, longitude: f64) -> CoordPair {
        CoordPair {
            latitude: from_degrees(latitude, 32),
            longitude: from_degrees(longitude, 32),
        }
    }

    /// Converts this pair's raw units to `(latitude, longitude)` degrees using the `coord<32>`
    /// scale. Lossy; see the module docs.
    pub fn to_degrees_32(&self) -> (f64, f64) {
        (degrees(self.latitude, 32), degrees(self.longitude, 32))
    }
}
