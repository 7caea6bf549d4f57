//! `description` (kind 14): a longer-form localized description.

use std::io::{Read, Write};

use crate::Result;
use crate::container::Localized;
use crate::raw::RecordHeader;

use super::Record;

/// A `description` record (kind 14).
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    /// The common record header.
    pub header: RecordHeader,
    /// Undocumented leading byte.
    pub unknown: u8,
    /// The description text, by language.
    pub text: Localized,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Description {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Description> {
        let mut unknown = [0u8; 1];
        read.read_exact(&mut unknown)?;
        let text = Localized::read_from(read)?;
        Ok(Description {
            header,
            unknown: unknown[0],
            text,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_all(&[self.unknown])?;
        self.text.write_to(write)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (1 + self.text.byte_count()) as u32
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
        let mut text = Localized::new();
        text.push(*b"en", b"a long description".to_vec());
        let description = Description {
            header: RecordHeader::without_aux(RecordKind::Description, Flags16::default(), 0),
            unknown: 0,
            text,
            children: Vec::new(),
        };
        let mut buf = Vec::new();
        description.write_body(&mut buf).unwrap();
        assert_eq!(description.body_size() as usize, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded =
            Description::read_from(&mut cursor, description.header, Vec::new()).unwrap();
        assert_eq!(description, decoded);
    }
}
