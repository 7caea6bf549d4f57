//! `category` (kind 7): a named POI category.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::container::Localized;
use crate::raw::RecordHeader;

use super::Record;

/// A `category` record (kind 7). Its expected child is a [`super::BitmapReference`].
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    /// The common record header.
    pub header: RecordHeader,
    /// The category's id, referenced by `category_reference` records.
    pub category_id: u16,
    /// The category's display name, by language.
    pub name: Localized,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Category {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Category> {
        let category_id = read.read_u16::<LittleEndian>()?;
        let name = Localized::read_from(read)?;
        Ok(Category {
            header,
            category_id,
            name,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.category_id)?;
        self.name.write_to(write)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (2 + self.name.byte_count()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags16;
    use crate::raw::RecordKind;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let mut name = Localized::new();
        name.push(*b"en", b"Restaurants".to_vec());
        let category = Category {
            header: RecordHeader::without_aux(RecordKind::Category, Flags16::default(), 0),
            category_id: 3,
            name,
            children: Vec::new(),
        };
        let mut buf = Vec::new();
        category.write_body(&mut buf).unwrap();
        assert_eq!(category.body_size() as usize, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Category::read_from(&mut cursor, category.header, Vec::new()).unwrap();
        assert_eq!(category, decoded);
    }
}
