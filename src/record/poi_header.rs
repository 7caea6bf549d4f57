//! `poi_header` (kind 1): opens the POI section of the file.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::enums::Codepage;
use crate::raw::RecordHeader;

use super::Record;

/// The fixed 6-byte magic that opens every `poi_header` record.
pub const MAGIC: [u8; 6] = *b"POI\0\0\0";

/// `auxiliary_type` value meaning "a [`super::Copyright`] child follows".
pub const AUXILIARY_TYPE_COPYRIGHT: u16 = 17;

/// A `poi_header` record (kind 1). Its single expected child is a [`super::Copyright`].
#[derive(Clone, Debug, PartialEq)]
pub struct PoiHeader {
    /// The common record header.
    pub header: RecordHeader,
    /// The 2-byte ASCII version string.
    pub version: [u8; 2],
    /// The codepage used by string fields elsewhere in the file.
    pub codepage: Codepage,
    /// `0` or [`AUXILIARY_TYPE_COPYRIGHT`].
    pub auxiliary_type: u16,
    /// Auxiliary child records (a single `copyright`, by convention).
    pub children: Vec<Record>,
}

impl PoiHeader {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<PoiHeader> {
        let mut magic = [0u8; 6];
        read.read_exact(&mut magic)?;
        let mut version = [0u8; 2];
        read.read_exact(&mut version)?;
        let codepage = Codepage(read.read_u16::<LittleEndian>()?);
        let auxiliary_type = read.read_u16::<LittleEndian>()?;
        Ok(PoiHeader {
            header,
            version,
            codepage,
            auxiliary_type,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_all(&MAGIC)?;
        write.write_all(&self.version)?;
        write.write_u16::<LittleEndian>(self.codepage.0)?;
        write.write_u16::<LittleEndian>(self.auxiliary_type)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        12
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags16;
    use crate::raw::RecordKind;

    #[test]
    fn minimum_file_header() {
        let header =
            RecordHeader::without_aux(RecordKind::PoiHeader, Flags16::default(), 12);
        let poi_header = PoiHeader {
            header,
            version: *b"01",
            codepage: Codepage::UNICODE,
            auxiliary_type: 0,
            children: Vec::new(),
        };
        let mut buf = Vec::new();
        poi_header.write_body(&mut buf).unwrap();
        assert_eq!(12, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = PoiHeader::read_from(&mut cursor, header, Vec::new()).unwrap();
        assert_eq!(Codepage::UNICODE, decoded.codepage);
        assert_eq!(0, decoded.auxiliary_type);
    }
}
