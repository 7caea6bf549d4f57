//! `bitmap_reference` (kind 4): a link from a waypoint or category to a bitmap.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::raw::RecordHeader;

use super::Record;

/// A `bitmap_reference` record (kind 4).
#[derive(Clone, Debug, PartialEq)]
pub struct BitmapReference {
    /// The common record header.
    pub header: RecordHeader,
    /// The referenced bitmap's id.
    pub bitmap_id: u16,
    /// An optional trailing `u16`, present iff primary data is at least 4 bytes.
    pub unknown: Option<u16>,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl BitmapReference {
    pub(crate) fn read_from(
        read: &mut Cursor<&[u8]>,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<BitmapReference> {
        let bitmap_id = read.read_u16::<LittleEndian>()?;
        let unknown = if read.get_ref().len() >= 4 {
            Some(read.read_u16::<LittleEndian>()?)
        } else {
            None
        };
        Ok(BitmapReference {
            header,
            bitmap_id,
            unknown,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.bitmap_id)?;
        if let Some(unknown) = self.unknown {
            write.write_u16::<LittleEndian>(unknown)?;
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        if self.unknown.is_some() { 4 } else { 2 }
    }
}
