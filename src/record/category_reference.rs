//! `category_reference` (kind 6): a link from a waypoint to a category.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::raw::RecordHeader;

use super::Record;

/// A `category_reference` record (kind 6).
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryReference {
    /// The common record header.
    pub header: RecordHeader,
    /// The referenced category's id.
    pub category_id: u16,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl CategoryReference {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<CategoryReference> {
        let category_id = read.read_u16::<LittleEndian>()?;
        Ok(CategoryReference {
            header,
            category_id,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.category_id)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        2
    }
}
