//! `record15` (kind 15): per-map product/region/vendor metadata, the expected child of a
//! `garmin_header`.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::enums::Region;
use crate::raw::RecordHeader;

use super::Record;

/// A `record15` record.
#[derive(Clone, Debug, PartialEq)]
pub struct Record15 {
    /// The common record header.
    pub header: RecordHeader,
    /// The source map's id.
    pub map_id: u16,
    /// The product id.
    pub product_id: u8,
    /// The region code.
    pub region: Region,
    /// The vendor id.
    pub vendor_id: u8,
    /// An optional trailing byte, present iff primary data is more than 5 bytes.
    pub unknown: Option<u8>,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Record15 {
    pub(crate) fn read_from(
        read: &mut Cursor<&[u8]>,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Record15> {
        let data_size = read.get_ref().len();
        let map_id = read.read_u16::<LittleEndian>()?;
        let mut byte = [0u8; 1];
        read.read_exact(&mut byte)?;
        let product_id = byte[0];
        read.read_exact(&mut byte)?;
        let region = Region(byte[0]);
        read.read_exact(&mut byte)?;
        let vendor_id = byte[0];
        let unknown = if data_size > 5 {
            read.read_exact(&mut byte)?;
            Some(byte[0])
        } else {
            None
        };
        Ok(Record15 {
            header,
            map_id,
            product_id,
            region,
            vendor_id,
            unknown,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.map_id)?;
        write.write_all(&[self.product_id, self.region.0, self.vendor_id])?;
        if let Some(unknown) = self.unknown {
            write.write_all(&[unknown])?;
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        if self.unknown.is_some() { 6 } else { 5 }
    }
}
