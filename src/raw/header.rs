//! The 8- or 12-byte record header.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::flags::Flags16;

use super::RecordKind;

/// Bit 3 of flag byte 0: the header carries the optional `end_of_data` field.
const EXTENDED_BIT: u8 = 3;

/// A decoded record header: type, flags, and the one or two declared length fields.
///
/// `end_of_data` being `None` means the header was the 8-byte short form; `Some` means it was
/// the 12-byte extended form. `RecordHeader::write_to` derives the extended bit from whichever
/// of those two shapes `end_of_data` is in — callers never set the bit directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordHeader {
    /// The raw wire type tag. Use [`RecordKind::from_wire`] to interpret it.
    pub kind: u16,
    /// The two packed flag bytes, addressed as one 16-bit word (byte 0 = bits 0..7).
    pub flags: Flags16,
    /// Bytes from the end of the header to the end of the record, including auxiliary data.
    pub end_of_record: u32,
    /// Bytes from the end of the header to the end of primary data, if the header is extended.
    pub end_of_data: Option<u32>,
}

impl RecordHeader {
    /// `true` if this header uses the 12-byte extended form.
    pub fn is_extended(&self) -> bool {
        self.end_of_data.is_some()
    }

    /// The on-wire size of the header itself: 8 or 12 bytes.
    pub fn wire_size(&self) -> u32 {
        if self.is_extended() { 12 } else { 8 }
    }

    /// The length of this record's primary data.
    pub fn data_size(&self) -> u32 {
        self.end_of_data.unwrap_or(self.end_of_record)
    }

    /// The length of this record's auxiliary (child-record) data.
    pub fn aux_data_size(&self) -> u32 {
        match self.end_of_data {
            Some(end_of_data) => self.end_of_record.saturating_sub(end_of_data),
            None => 0,
        }
    }

    /// Reads a record header, returning `Ok(None)` on a clean end of stream (zero bytes
    /// available before the type tag) rather than an I/O error.
    ///
    /// This is what lets the top-level reader distinguish "the file ended where a new
    /// top-level record was expected" — normal, whether or not an `End` record preceded it —
    /// from a stream that was truncated mid-header, which is still an error.
    pub fn try_read_from<R: Read>(read: &mut R) -> Result<Option<RecordHeader>> {
        let mut first = [0u8; 1];
        if read.read(&mut first)? == 0 {
            return Ok(None);
        }
        let second = read.read_u8()?;
        let kind = u16::from_le_bytes([first[0], second]);
        let flags = Flags16::read_from(read)?;
        let end_of_record = read.read_u32::<LittleEndian>()?;
        let end_of_data = if flags.get(EXTENDED_BIT) {
            Some(read.read_u32::<LittleEndian>()?)
        } else {
            None
        };
        Ok(Some(RecordHeader {
            kind,
            flags,
            end_of_record,
            end_of_data,
        }))
    }

    /// Reads a record header.
    pub fn read_from<R: Read>(read: &mut R) -> Result<RecordHeader> {
        let kind = read.read_u16::<LittleEndian>()?;
        let flags = Flags16::read_from(read)?;
        let end_of_record = read.read_u32::<LittleEndian>()?;
        let end_of_data = if flags.get(EXTENDED_BIT) {
            Some(read.read_u32::<LittleEndian>()?)
        } else {
            None
        };
        Ok(RecordHeader {
            kind,
            flags,
            end_of_record,
            end_of_data,
        })
    }

    /// Writes a record header, recomputing the extended flag bit from `end_of_data`.
    pub fn write_to<W: Write>(&self, write: &mut W) -> Result<()> {
        let mut flags = self.flags;
        flags.set(EXTENDED_BIT, self.end_of_data.is_some());
        write.write_u16::<LittleEndian>(self.kind)?;
        flags.write_to(write)?;
        write.write_u32::<LittleEndian>(self.end_of_record)?;
        if let Some(end_of_data) = self.end_of_data {
            write.write_u32::<LittleEndian>(end_of_data)?;
        }
        Ok(())
    }

    /// Builds a header for a record with no auxiliary data.
    pub fn without_aux(kind: RecordKind, flags: Flags16, data_size: u32) -> RecordHeader {
        RecordHeader {
            kind: kind.to_wire(),
            flags,
            end_of_record: data_size,
            end_of_data: None,
        }
    }

    /// Builds a header for a record with `data_size` bytes of primary data followed by
    /// `aux_size` bytes of auxiliary data.
    pub fn with_aux(kind: RecordKind, flags: Flags16, data_size: u32, aux_size: u32) -> RecordHeader {
        RecordHeader {
            kind: kind.to_wire(),
            flags,
            end_of_record: data_size + aux_size,
            end_of_data: Some(data_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn short_header_roundtrip() {
        let header = RecordHeader::without_aux(RecordKind::Comment, Flags16::default(), 42);
        assert_eq!(8, header.wire_size());
        assert_eq!(42, header.data_size());
        assert_eq!(0, header.aux_data_size());
        let mut cursor = Cursor::new(Vec::new());
        header.write_to(&mut cursor).unwrap();
        assert_eq!(8, cursor.get_ref().len());
        cursor.set_position(0);
        assert_eq!(header, RecordHeader::read_from(&mut cursor).unwrap());
    }

    #[test]
    fn extended_header_roundtrip() {
        let header = RecordHeader::with_aux(RecordKind::Waypoint, Flags16::default(), 20, 16);
        assert_eq!(12, header.wire_size());
        assert_eq!(20, header.data_size());
        assert_eq!(16, header.aux_data_size());
        let mut cursor = Cursor::new(Vec::new());
        header.write_to(&mut cursor).unwrap();
        assert_eq!(12, cursor.get_ref().len());
        cursor.set_position(0);
        let decoded = RecordHeader::read_from(&mut cursor).unwrap();
        assert_eq!(header, decoded);
        assert!(decoded.is_extended());
    }

    #[test]
    fn short_header_never_reads_a_fifth_u32() {
        // type(2) + flags(2) + end_of_record(4) = 8 bytes, with the extended bit clear.
        let mut cursor = Cursor::new(vec![10, 0, 0, 0, 5, 0, 0, 0]);
        let header = RecordHeader::read_from(&mut cursor).unwrap();
        assert_eq!(8, cursor.position());
        assert!(!header.is_extended());
        assert_eq!(5, header.data_size());
    }

    #[test]
    fn try_read_from_reports_clean_eof() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert_eq!(None, RecordHeader::try_read_from(&mut cursor).unwrap());
    }

    #[test]
    fn try_read_from_reads_a_header_when_one_is_present() {
        let header = RecordHeader::without_aux(RecordKind::Comment, Flags16::default(), 3);
        let mut cursor = Cursor::new(Vec::new());
        header.write_to(&mut cursor).unwrap();
        cursor.set_position(0);
        assert_eq!(Some(header), RecordHeader::try_read_from(&mut cursor).unwrap());
    }

    #[test]
    fn try_read_from_errors_on_truncated_header() {
        let mut cursor = Cursor::new(vec![10, 0, 0]);
        assert!(RecordHeader::try_read_from(&mut cursor).is_err());
    }

    #[test]
    fn write_recomputes_extended_bit_regardless_of_caller_supplied_flags() {
        let mut header = RecordHeader::without_aux(RecordKind::Comment, Flags16::default(), 1);
        header.flags.set(EXTENDED_BIT, true); // caller lies; write_to must not trust it
        let mut cursor = Cursor::new(Vec::new());
        header.write_to(&mut cursor).unwrap();
        assert_eq!(8, cursor.get_ref().len());
    }
}
