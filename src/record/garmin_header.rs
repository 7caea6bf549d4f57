//! `garmin_header` (kind 0): the first record in every well-formed GPI file.

use std::io::{Cursor, Read, Write};

use crate::Result;
use crate::container::{read_vec16, vec16_byte_count, write_vec16};
use crate::flags::Flags16;
use crate::raw::RecordHeader;
use crate::timestamp::Timestamp;

use super::Record;

/// The fixed 6-byte magic that opens every `garmin_header` record.
pub const MAGIC: [u8; 6] = *b"GRMREC";

/// A `garmin_header` record (kind 0). Its single expected child is a [`super::Record15`].
#[derive(Clone, Debug, PartialEq)]
pub struct GarminHeader {
    /// The common record header.
    pub header: RecordHeader,
    /// The 2-byte ASCII version string (`"00"` or `"01"`).
    pub version: [u8; 2],
    /// The record's creation timestamp.
    pub timestamp: Timestamp,
    /// Body-level flags.
    pub flags: Flags16,
    /// The file's display name.
    pub name: Vec<u8>,
    /// Auxiliary child records (a single `record15`, by convention).
    pub children: Vec<Record>,
}

impl GarminHeader {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<GarminHeader> {
        let mut magic = [0u8; 6];
        read.read_exact(&mut magic)?;
        let mut version = [0u8; 2];
        read.read_exact(&mut version)?;
        let timestamp = Timestamp::read_from(read)?;
        let flags = Flags16::read_from(read)?;
        let name = read_vec16(read)?;
        Ok(GarminHeader {
            header,
            version,
            timestamp,
            flags,
            name,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_all(&MAGIC)?;
        write.write_all(&self.version)?;
        self.timestamp.write_to(write)?;
        self.flags.write_to(write)?;
        write_vec16(write, &self.name)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (6 + 2 + 4 + 2 + vec16_byte_count(&self.name)) as u32
    }
}
