//! `waypoint` (kind 2): a single point of interest.

use std::io::{Read, Write};

use crate::Result;
use crate::container::Localized;
use crate::coord::CoordPair;
use crate::flags::Flags16;
use crate::raw::RecordHeader;

use super::Record;

/// Bit always set on a waypoint's flags.
pub const ALWAYS_SET_BIT: u8 = 8;

/// A `waypoint` record (kind 2).
///
/// Children may include [`super::CategoryReference`], [`super::BitmapReference`],
/// [`super::Alert`], [`super::Comment`], [`super::Address`], [`super::Contact`], an `ImageFile`
/// set, [`super::Description`], or a `record26`; the codec does not enforce that set, it simply
/// decodes whatever children the auxiliary region holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    /// The common record header.
    pub header: RecordHeader,
    /// The waypoint's coordinates.
    pub coords: CoordPair,
    /// Reserved, always `0`.
    pub reserved: u8,
    /// Body-level flags. Bit 8 is always `1` on the wire.
    pub flags: Flags16,
    /// The waypoint's display name, by language.
    pub shortname: Localized,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Waypoint {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Waypoint> {
        let coords = CoordPair::read_from_32(read)?;
        let mut reserved_buf = [0u8; 1];
        read.read_exact(&mut reserved_buf)?;
        let flags = Flags16::read_from(read)?;
        let shortname = Localized::read_from(read)?;
        Ok(Waypoint {
            header,
            coords,
            reserved: reserved_buf[0],
            flags,
            shortname,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        self.coords.write_to_32(write)?;
        write.write_all(&[self.reserved])?;
        let mut flags = self.flags;
        flags.set(ALWAYS_SET_BIT, true);
        flags.write_to(write)?;
        self.shortname.write_to(write)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (4 + 4 + 1 + 2 + self.shortname.byte_count()) as u32
    }
}
