//! `copyright` (kind 17): license/attribution metadata, the expected child of a `poi_header`.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::container::{Localized, read_vec16, vec16_byte_count, write_vec16};
use crate::raw::RecordHeader;

use super::Record;

/// `have` mask bit for an embedded `device_model` string.
pub const HAVE_DEVICE_MODEL: u32 = 1 << 0;
/// `have` mask bit for an embedded `image_files` block.
pub const HAVE_IMAGE_FILES: u32 = 1 << 1;
/// `have` mask bit for a trailing `Unknown30` word.
pub const HAVE_UNKNOWN_30: u32 = 1 << 2;
/// `have` mask bit noting the presence, elsewhere in the file, of `record23`/`record24` records.
pub const HAVE_REC23_24: u32 = 1 << 3;
/// `have` mask bit noting the presence, elsewhere in the file, of a waypoint index.
pub const HAVE_WAYPOINT_INDEX: u32 = 1 << 4;
/// `have` mask bit noting the presence, elsewhere in the file, of speed camera records.
pub const HAVE_SPEED_CAMERA_RECORDS: u32 = 1 << 5;

/// The bits this codec derives from its own optional fields, rather than passing through
/// verbatim. The remaining bits (`HAVE_REC23_24`, `HAVE_WAYPOINT_INDEX`,
/// `HAVE_SPEED_CAMERA_RECORDS`, and any undocumented bit) describe content elsewhere in the file
/// and are preserved as given.
const DERIVED_BITS: u32 = HAVE_DEVICE_MODEL | HAVE_IMAGE_FILES | HAVE_UNKNOWN_30;

/// Wire size of one entry in the (currently opaque) `image_files` block.
const IMAGE_FILE_ENTRY_SIZE: usize = 20;
/// Number of entries the source declares the `image_files` block to hold.
const IMAGE_FILE_ENTRY_COUNT: usize = 12;
/// Wire size of the whole `image_files` block.
const IMAGE_FILES_BLOCK_SIZE: usize = IMAGE_FILE_ENTRY_SIZE * IMAGE_FILE_ENTRY_COUNT;

/// A `copyright` record (kind 17).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Copyright {
    /// The common record header.
    pub header: RecordHeader,
    /// The bits of `have` not derived from this struct's own optional fields. Whether the
    /// `image_files` block is always exactly 12 × 20 bytes is left unresolved here by keeping
    /// that block itself an opaque pass-through, below.
    pub other_have_bits: u32,
    /// Undocumented.
    pub unknown0: u16,
    /// Undocumented.
    pub unknown1: u16,
    /// The data source's name, by language.
    pub data_source: Localized,
    /// The copyright notice text, by language.
    pub copyright_notice: Localized,
    /// The device model string, if present.
    pub device_model: Option<Vec<u8>>,
    /// The 12×20-byte `image_files` block, kept as an opaque pass-through blob.
    pub image_files: Option<[u8; IMAGE_FILES_BLOCK_SIZE]>,
    /// `Unknown30`, if present.
    pub unknown_30: Option<u16>,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Copyright {
    /// Computes the wire `have` mask: derived bits from this struct's optional fields, combined
    /// with the caller-set `other_have_bits`.
    pub fn have_mask(&self) -> u32 {
        let mut have = self.other_have_bits & !DERIVED_BITS;
        if self.device_model.is_some() {
            have |= HAVE_DEVICE_MODEL;
        }
        if self.image_files.is_some() {
            have |= HAVE_IMAGE_FILES;
        }
        if self.unknown_30.is_some() {
            have |= HAVE_UNKNOWN_30;
        }
        have
    }

    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Copyright> {
        let have = read.read_u32::<LittleEndian>()?;
        let unknown0 = read.read_u16::<LittleEndian>()?;
        let unknown1 = read.read_u16::<LittleEndian>()?;
        let data_source = Localized::read_from(read)?;
        let copyright_notice = Localized::read_from(read)?;

        let device_model = if have & HAVE_DEVICE_MODEL != 0 {
            Some(read_vec16(read)?)
        } else {
            None
        };
        let image_files = if have & HAVE_IMAGE_FILES != 0 {
            let mut block = [0u8; IMAGE_FILES_BLOCK_SIZE];
            read.read_exact(&mut block)?;
            Some(block)
        } else {
            None
        };
        let unknown_30 = if have & HAVE_UNKNOWN_30 != 0 {
            Some(read.read_u16::<LittleEndian>()?)
        } else {
            None
        };

        Ok(Copyright {
            header,
            other_have_bits: have & !DERIVED_BITS,
            unknown0,
            unknown1,
            data_source,
            copyright_notice,
            device_model,
            image_files,
            unknown_30,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u32::<LittleEndian>(self.have_mask())?;
        write.write_u16::<LittleEndian>(self.unknown0)?;
        write.write_u16::<LittleEndian>(self.unknown1)?;
        self.data_source.write_to(write)?;
        self.copyright_notice.write_to(write)?;
        if let Some(device_model) = &self.device_model {
            write_vec16(write, device_model)?;
        }
        if let Some(image_files) = &self.image_files {
            write.write_all(image_files)?;
        }
        if let Some(unknown_30) = self.unknown_30 {
            write.write_u16::<LittleEndian>(unknown_30)?;
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        let mut size = 4 + 2 + 2 + self.data_source.byte_count() + self.copyright_notice.byte_count();
        if let Some(device_model) = &self.device_model {
            size += vec16_byte_count(device_model);
        }
        if self.image_files.is_some() {
            size += IMAGE_FILES_BLOCK_SIZE;
        }
        if self.unknown_30.is_some() {
            size += 2;
        }
        size as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags16;
    use crate::raw::RecordKind;
    use std::io::Cursor;

    #[test]
    fn minimal_roundtrip() {
        let mut data_source = Localized::new();
        data_source.push(*b"en", b"Acme".to_vec());
        let mut copyright_notice = Localized::new();
        copyright_notice.push(*b"en", b"(c) Acme".to_vec());
        let copyright = Copyright {
            header: RecordHeader::without_aux(RecordKind::Copyright, Flags16::default(), 0),
            other_have_bits: HAVE_WAYPOINT_INDEX,
            unknown0: 0,
            unknown1: 0,
            data_source,
            copyright_notice,
            device_model: None,
            image_files: None,
            unknown_30: None,
            children: Vec::new(),
        };
        assert_eq!(HAVE_WAYPOINT_INDEX, copyright.have_mask());
        let mut buf = Vec::new();
        copyright.write_body(&mut buf).unwrap();
        assert_eq!(copyright.body_size() as usize, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Copyright::read_from(&mut cursor, copyright.header, Vec::new()).unwrap();
        assert_eq!(copyright, decoded);
    }

    #[test]
    fn with_device_model_and_image_files() {
        let copyright = Copyright {
            header: RecordHeader::without_aux(RecordKind::Copyright, Flags16::default(), 0),
            device_model: Some(b"nuvi".to_vec()),
            image_files: Some([7u8; IMAGE_FILES_BLOCK_SIZE]),
            unknown_30: Some(99),
            ..Default::default()
        };
        let have = copyright.have_mask();
        assert_eq!(HAVE_DEVICE_MODEL | HAVE_IMAGE_FILES | HAVE_UNKNOWN_30, have);
        let mut buf = Vec::new();
        copyright.write_body(&mut buf).unwrap();
        assert_eq!(copyright.body_size() as usize, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Copyright::read_from(&mut cursor, copyright.header, Vec::new()).unwrap();
        assert_eq!(copyright, decoded);
    }
}
