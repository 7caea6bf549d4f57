//! Sequential encoding of top-level [`Record`]s into a GPI byte stream.

use std::io::Write;

use crate::Result;
use crate::record::Record;

/// Writes top-level records to a GPI byte stream.
///
/// GPI carries no running record count the way some container formats carry a point/record
/// count in their header, so there is no header to patch on close: `Writer` has no `Drop` impl
/// and nothing to flush.
#[derive(Debug)]
pub struct Writer<W> {
    write: W,
}

impl<W: Write> Writer<W> {
    /// Wraps a byte sink for writing.
    pub fn new(write: W) -> Writer<W> {
        Writer { write }
    }

    /// Encodes and writes a single record, header, body, and any auxiliary children included.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let bytes = record.encode()?;
        self.write.write_all(&bytes)?;
        Ok(())
    }

    /// Writes a sequence of records in order.
    pub fn write_all<'a>(&mut self, records: impl IntoIterator<Item = &'a Record>) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Writes the bare `0xFFFF` `End` sentinel that terminates a well-formed GPI stream. An `End`
    /// record carries no body.
    pub fn write_end(&mut self) -> Result<()> {
        use crate::flags::Flags16;
        use crate::raw::RecordHeader;

        let end = RecordHeader {
            kind: crate::raw::RecordKind::END,
            flags: Flags16::default(),
            end_of_record: 0,
            end_of_data: None,
        };
        end.write_to(&mut self.write)?;
        Ok(())
    }

    /// Consumes the writer and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.write
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Localized;
    use crate::flags::Flags16;
    use crate::raw::RecordHeader;
    use crate::raw::RecordKind;
    use crate::reader::Reader;
    use crate::record::Comment;
    use std::io::Cursor;

    fn comment(text: &str) -> Record {
        let mut localized = Localized::new();
        localized.push(*b"en", text.as_bytes().to_vec());
        Record::Comment(Comment {
            header: RecordHeader::without_aux(RecordKind::Comment, Flags16::default(), 0),
            text: localized,
            children: Vec::new(),
        })
    }

    #[test]
    fn write_all_then_read_back() {
        let records = vec![comment("a"), comment("b")];
        let mut writer = Writer::new(Vec::new());
        writer.write_all(records.iter()).unwrap();
        writer.write_end().unwrap();
        let bytes = writer.into_inner();

        let mut reader = Reader::new(Cursor::new(bytes));
        let first = reader.next().unwrap().unwrap();
        let second = reader.next().unwrap().unwrap();
        assert!(reader.next().is_none());
        assert!(reader.saw_end());
        match (first, second) {
            (Record::Comment(a), Record::Comment(b)) => {
                assert_eq!(Some(&b"a"[..]), a.text.get(b"en"));
                assert_eq!(Some(&b"b"[..]), b.text.get(b"en"));
            }
            other => panic!("expected two Comments, got {other:?}"),
        }
    }
}
