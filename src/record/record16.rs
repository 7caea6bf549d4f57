//! `record16` (kind 16): a length-prefixed list of (coordinate, unknown) pairs.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::coord::CoordPair;
use crate::raw::RecordHeader;

use super::Record;

/// One element of a `record16`'s `vec<u16, {coords32, u32}>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record16Entry {
    /// The entry's coordinates.
    pub coords: CoordPair,
    /// Undocumented.
    pub unknown: u32,
}

/// Wire byte size of a single [`Record16Entry`].
const ENTRY_SIZE: u32 = 4 + 4 + 4;

/// A `record16` record.
#[derive(Clone, Debug, PartialEq)]
pub struct Record16 {
    /// The common record header.
    pub header: RecordHeader,
    /// The entry list.
    pub entries: Vec<Record16Entry>,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Record16 {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Record16> {
        let len = read.read_u16::<LittleEndian>()?;
        let mut entries = Vec::with_capacity(len as usize);
        for _ in 0..len {
            let coords = CoordPair::read_from_32(read)?;
            let unknown = read.read_u32::<LittleEndian>()?;
            entries.push(Record16Entry { coords, unknown });
        }
        Ok(Record16 {
            header,
            entries,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.entries.len() as u16)?;
        for entry in &self.entries {
            entry.coords.write_to_32(write)?;
            write.write_u32::<LittleEndian>(entry.unknown)?;
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        2 + self.entries.len() as u32 * ENTRY_SIZE
    }
}
