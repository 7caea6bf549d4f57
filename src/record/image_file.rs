//! `image_file` (kind 13): an embedded image blob.

use std::io::{Read, Write};

use crate::Result;
use crate::container::{read_vec32, vec32_byte_count, write_vec32};
use crate::raw::RecordHeader;

use super::Record;

/// An `image_file` record (kind 13).
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    /// The common record header.
    pub header: RecordHeader,
    /// Undocumented leading byte.
    pub unknown: u8,
    /// Raw image bytes.
    pub image_data: Vec<u8>,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl ImageFile {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<ImageFile> {
        let mut unknown = [0u8; 1];
        read.read_exact(&mut unknown)?;
        let image_data = read_vec32(read)?;
        Ok(ImageFile {
            header,
            unknown: unknown[0],
            image_data,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_all(&[self.unknown])?;
        write_vec32(write, &self.image_data)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (1 + vec32_byte_count(&self.image_data)) as u32
    }
}
