//! `comment` (kind 10): free-text annotation.

use std::io::{Read, Write};

use crate::Result;
use crate::container::Localized;
use crate::raw::RecordHeader;

use super::Record;

/// A `comment` record (kind 10).
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    /// The common record header.
    pub header: RecordHeader,
    /// The comment text, by language.
    pub text: Localized,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Comment {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Comment> {
        let text = Localized::read_from(read)?;
        Ok(Comment {
            header,
            text,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        self.text.write_to(write)
    }

    pub(crate) fn body_size(&self) -> u32 {
        self.text.byte_count() as u32
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
        text.push(*b"en", b"nice view".to_vec());
        let comment = Comment {
            header: RecordHeader::without_aux(RecordKind::Comment, Flags16::default(), 0),
            text,
            children: Vec::new(),
        };
        let mut buf = Vec::new();
        comment.write_body(&mut buf).unwrap();
        assert_eq!(comment.body_size() as usize, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Comment::read_from(&mut cursor, comment.header, Vec::new()).unwrap();
        assert_eq!(comment, decoded);
    }
}
