//! `area` (kind 8): a bounding box, standalone or nested inside a `poi_group`.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::coord::CoordPair;
use crate::flags::Flags16;
use crate::raw::RecordHeader;

use super::Record;

/// Bit always set on an `area`'s flags.
pub const ALWAYS_SET_BIT: u8 = 0;

/// An `area` record (kind 8): a rectangular bounding box.
///
/// An `area`'s own primary body never carries children, but per the generic child-record
/// recursion rule it may still carry auxiliary data — e.g. a `poi_group`'s embedded areas may
/// each own waypoint children.
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    /// The common record header.
    pub header: RecordHeader,
    /// The box's northeast/maximum corner.
    pub max: CoordPair,
    /// The box's southwest/minimum corner.
    pub min: CoordPair,
    /// Reserved, always `0`.
    pub reserved: u32,
    /// Body-level flags. Bit 0 is always set.
    pub flags: Flags16,
    /// Undocumented trailing byte.
    pub unknown: u8,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

/// The fixed wire size of an area's primary body.
pub const BODY_SIZE: u32 = 4 + 4 + 4 + 4 + 4 + 2 + 1;

impl Area {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Area> {
        let max = CoordPair::read_from_32(read)?;
        let min = CoordPair::read_from_32(read)?;
        let reserved = read.read_u32::<LittleEndian>()?;
        let flags = Flags16::read_from(read)?;
        let mut unknown = [0u8; 1];
        read.read_exact(&mut unknown)?;
        Ok(Area {
            header,
            max,
            min,
            reserved,
            flags,
            unknown: unknown[0],
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        self.max.write_to_32(write)?;
        self.min.write_to_32(write)?;
        write.write_u32::<LittleEndian>(self.reserved)?;
        let mut flags = self.flags;
        flags.set(ALWAYS_SET_BIT, true);
        flags.write_to(write)?;
        write.write_all(&[self.unknown])?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        BODY_SIZE
    }
}
