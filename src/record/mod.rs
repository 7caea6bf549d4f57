//! The 19 structurally-interpreted record kinds, their shared [`Record`] enum, and the
//! generic header/body/children decode-encode walk every kind is built from.

use std::io::{Cursor, Read};

use crate::Error;
use crate::Result;
use crate::flags::Flags16;
use crate::raw::{RecordHeader, RecordKind};

/// Reads exactly `buf.len()` bytes, reporting a truncated declared-length region as
/// [`Error::UnexpectedEof`] rather than a bare `io::Error`.
fn read_declared<R: Read>(read: &mut R, buf: &mut [u8], offset: u64) -> Result<()> {
    read.read_exact(buf).map_err(|err| {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof {
                offset,
                needed: buf.len() as u64,
            }
        } else {
            Error::Io(err)
        }
    })
}

mod address;
mod alert;
mod area;
mod audio_file;
mod bitmap;
mod bitmap_reference;
mod category;
mod category_reference;
mod comment;
mod contact;
mod copyright;
mod description;
mod garmin_header;
mod image_file;
mod opaque;
mod poi_group;
mod poi_header;
mod record15;
mod record16;
mod waypoint;

pub use address::Address;
pub use alert::Alert;
pub use area::Area;
pub use audio_file::AudioFile;
pub use bitmap::Bitmap;
pub use bitmap_reference::BitmapReference;
pub use category::Category;
pub use category_reference::CategoryReference;
pub use comment::Comment;
pub use contact::Contact;
pub use copyright::Copyright;
pub use description::Description;
pub use garmin_header::GarminHeader;
pub use image_file::ImageFile;
pub use opaque::Opaque;
pub use poi_group::PoiGroup;
pub use poi_header::PoiHeader;
pub use record15::Record15;
pub use record16::Record16;
pub use waypoint::Waypoint;

/// A single decoded record, of any kind this codec interprets structurally, or [`Record::Opaque`]
/// for the undocumented kinds it only passes through.
///
/// There is no `End` variant: the `0xFFFF` sentinel carries no body and exists only to terminate
/// a stream (or, rarely, a file whose top level ends without one), so decoding it produces
/// no `Record` at all.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    /// Kind 0.
    GarminHeader(GarminHeader),
    /// Kind 1.
    PoiHeader(PoiHeader),
    /// Kind 2.
    Waypoint(Waypoint),
    /// Kind 3.
    Alert(Alert),
    /// Kind 4.
    BitmapReference(BitmapReference),
    /// Kind 5.
    Bitmap(Bitmap),
    /// Kind 6.
    CategoryReference(CategoryReference),
    /// Kind 7.
    Category(Category),
    /// Kind 8.
    Area(Area),
    /// Kind 9.
    PoiGroup(PoiGroup),
    /// Kind 10.
    Comment(Comment),
    /// Kind 11.
    Address(Address),
    /// Kind 12.
    Contact(Contact),
    /// Kind 13.
    ImageFile(ImageFile),
    /// Kind 14.
    Description(Description),
    /// Kind 15.
    Record15(Record15),
    /// Kind 16.
    Record16(Record16),
    /// Kind 17.
    Copyright(Copyright),
    /// Kind 18.
    AudioFile(AudioFile),
    /// Kind 19, 20, 21, or 22..27: an undocumented kind passed through verbatim.
    Opaque(Opaque),
}

impl Record {
    /// The record's kind.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::GarminHeader(_) => RecordKind::GarminHeader,
            Record::PoiHeader(_) => RecordKind::PoiHeader,
            Record::Waypoint(_) => RecordKind::Waypoint,
            Record::Alert(_) => RecordKind::Alert,
            Record::BitmapReference(_) => RecordKind::BitmapReference,
            Record::Bitmap(_) => RecordKind::Bitmap,
            Record::CategoryReference(_) => RecordKind::CategoryReference,
            Record::Category(_) => RecordKind::Category,
            Record::Area(_) => RecordKind::Area,
            Record::PoiGroup(_) => RecordKind::PoiGroup,
            Record::Comment(_) => RecordKind::Comment,
            Record::Address(_) => RecordKind::Address,
            Record::Contact(_) => RecordKind::Contact,
            Record::ImageFile(_) => RecordKind::ImageFile,
            Record::Description(_) => RecordKind::Description,
            Record::Record15(_) => RecordKind::Record15,
            Record::Record16(_) => RecordKind::Record16,
            Record::Copyright(_) => RecordKind::Copyright,
            Record::AudioFile(_) => RecordKind::AudioFile,
            Record::Opaque(r) => RecordKind::Opaque(r.header.kind),
        }
    }

    /// The record's header, as last decoded or constructed.
    ///
    /// For every kind but [`Record::Opaque`], `encode` recomputes the header's length fields from
    /// the record's current contents rather than trusting this one — only its `flags` and, for
    /// `Opaque`, its lengths, survive into the re-encoded bytes.
    pub fn header(&self) -> &RecordHeader {
        match self {
            Record::GarminHeader(r) => &r.header,
            Record::PoiHeader(r) => &r.header,
            Record::Waypoint(r) => &r.header,
            Record::Alert(r) => &r.header,
            Record::BitmapReference(r) => &r.header,
            Record::Bitmap(r) => &r.header,
            Record::CategoryReference(r) => &r.header,
            Record::Category(r) => &r.header,
            Record::Area(r) => &r.header,
            Record::PoiGroup(r) => &r.header,
            Record::Comment(r) => &r.header,
            Record::Address(r) => &r.header,
            Record::Contact(r) => &r.header,
            Record::ImageFile(r) => &r.header,
            Record::Description(r) => &r.header,
            Record::Record15(r) => &r.header,
            Record::Record16(r) => &r.header,
            Record::Copyright(r) => &r.header,
            Record::AudioFile(r) => &r.header,
            Record::Opaque(r) => &r.header,
        }
    }

    /// Auxiliary child records, or an empty slice for the three kinds that encode presence inline
    /// and never carry children (`Address`, `Contact`, `AudioFile`) and for `Opaque`, whose
    /// primary/auxiliary split isn't interpreted.
    pub fn children(&self) -> &[Record] {
        match self {
            Record::GarminHeader(r) => &r.children,
            Record::PoiHeader(r) => &r.children,
            Record::Waypoint(r) => &r.children,
            Record::Alert(r) => &r.children,
            Record::BitmapReference(r) => &r.children,
            Record::Bitmap(r) => &r.children,
            Record::CategoryReference(r) => &r.children,
            Record::Category(r) => &r.children,
            Record::Area(r) => &r.children,
            Record::PoiGroup(r) => &r.children,
            Record::Comment(r) => &r.children,
            Record::ImageFile(r) => &r.children,
            Record::Description(r) => &r.children,
            Record::Record15(r) => &r.children,
            Record::Record16(r) => &r.children,
            Record::Copyright(r) => &r.children,
            Record::Address(_) | Record::Contact(_) | Record::AudioFile(_) | Record::Opaque(_) => {
                &[]
            }
        }
    }

    /// Encodes this record, header included, recomputing the header's length fields (and, for
    /// auxiliary data, its extended-form bit) from the record's current contents.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Record::GarminHeader(r) => {
                encode_with_children(RecordKind::GarminHeader, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::PoiHeader(r) => {
                encode_with_children(RecordKind::PoiHeader, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Waypoint(r) => {
                encode_with_children(RecordKind::Waypoint, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Alert(r) => {
                encode_with_children(RecordKind::Alert, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::BitmapReference(r) => encode_with_children(
                RecordKind::BitmapReference,
                r.header.flags,
                &r.children,
                |buf| r.write_body(buf),
            ),
            Record::Bitmap(r) => {
                encode_with_children(RecordKind::Bitmap, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::CategoryReference(r) => encode_with_children(
                RecordKind::CategoryReference,
                r.header.flags,
                &r.children,
                |buf| r.write_body(buf),
            ),
            Record::Category(r) => {
                encode_with_children(RecordKind::Category, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Area(r) => {
                encode_with_children(RecordKind::Area, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::PoiGroup(r) => {
                encode_with_children(RecordKind::PoiGroup, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Comment(r) => {
                encode_with_children(RecordKind::Comment, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::ImageFile(r) => {
                encode_with_children(RecordKind::ImageFile, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Description(r) => encode_with_children(
                RecordKind::Description,
                r.header.flags,
                &r.children,
                |buf| r.write_body(buf),
            ),
            Record::Record15(r) => {
                encode_with_children(RecordKind::Record15, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Record16(r) => {
                encode_with_children(RecordKind::Record16, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Copyright(r) => {
                encode_with_children(RecordKind::Copyright, r.header.flags, &r.children, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Address(r) => encode_without_children(RecordKind::Address, r.header.flags, |buf| {
                r.write_body(buf)
            }),
            Record::Contact(r) => encode_without_children(RecordKind::Contact, r.header.flags, |buf| {
                r.write_body(buf)
            }),
            Record::AudioFile(r) => {
                encode_without_children(RecordKind::AudioFile, r.header.flags, |buf| {
                    r.write_body(buf)
                })
            }
            Record::Opaque(r) => {
                let mut out = Vec::new();
                r.header.write_to(&mut out)?;
                r.write_body(&mut out)?;
                Ok(out)
            }
        }
    }
}

fn encode_with_children(
    kind: RecordKind,
    flags: Flags16,
    children: &[Record],
    write_body: impl FnOnce(&mut Vec<u8>) -> Result<()>,
) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    write_body(&mut body)?;
    let mut aux = Vec::new();
    for child in children {
        aux.extend(child.encode()?);
    }
    let header = if aux.is_empty() {
        RecordHeader::without_aux(kind, flags, body.len() as u32)
    } else {
        RecordHeader::with_aux(kind, flags, body.len() as u32, aux.len() as u32)
    };
    let mut out = Vec::new();
    header.write_to(&mut out)?;
    out.extend(body);
    out.extend(aux);
    Ok(out)
}

fn encode_without_children(
    kind: RecordKind,
    flags: Flags16,
    write_body: impl FnOnce(&mut Vec<u8>) -> Result<()>,
) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    write_body(&mut body)?;
    let header = RecordHeader::without_aux(kind, flags, body.len() as u32);
    let mut out = Vec::new();
    header.write_to(&mut out)?;
    out.extend(body);
    Ok(out)
}

fn check_consumed(kind: RecordKind, offset: u64, declared: u64, consumed: u64) -> Result<()> {
    if consumed == declared {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            kind,
            offset,
            declared,
            consumed,
        })
    }
}

/// Decodes one top-level or nested record from `read`, starting at `offset` (used only to
/// annotate errors). Returns `Ok(None)` on the `End` sentinel.
///
/// `read`'s full primary-data region is always consumed into a buffer before it is interpreted,
/// so `read`'s position always lands exactly at the next record's header regardless of whether
/// interpreting this record's body succeeds — the one mechanism that lets callers recover from a
/// bad record without bespoke skip logic per error kind.
pub(crate) fn decode_one<R: Read>(read: &mut R, offset: u64) -> Result<Option<Record>> {
    let header = RecordHeader::read_from(read)?;
    decode_after_header(read, offset, header)
}

/// The rest of [`decode_one`]'s work once a header has already been read — shared with the
/// top-level reader, which peeks the header itself via [`RecordHeader::try_read_from`] to tell a
/// clean end of stream from a corrupt one.
pub(crate) fn decode_after_header<R: Read>(
    read: &mut R,
    offset: u64,
    header: RecordHeader,
) -> Result<Option<Record>> {
    if header.kind == RecordKind::END {
        return Ok(None);
    }
    let kind = RecordKind::from_wire(header.kind)?;

    let data_offset = offset + header.wire_size() as u64;
    let mut data_buf = vec![0u8; header.data_size() as usize];
    read_declared(read, &mut data_buf, data_offset)?;
    let aux_offset = data_offset + data_buf.len() as u64;
    let mut aux_buf = vec![0u8; header.aux_data_size() as usize];
    read_declared(read, &mut aux_buf, aux_offset)?;

    if let RecordKind::Opaque(_) = kind {
        let mut raw = data_buf;
        raw.extend(aux_buf);
        return Ok(Some(Record::Opaque(Opaque { header, raw })));
    }

    let data_len = data_buf.len() as u64;
    let mut data_cursor = Cursor::new(data_buf.as_slice());

    let record = if kind.encodes_presence_inline() {
        let record = match kind {
            RecordKind::Address => Record::Address(Address::read_from(&mut data_cursor, header)?),
            RecordKind::Contact => Record::Contact(Contact::read_from(&mut data_cursor, header)?),
            RecordKind::AudioFile => {
                Record::AudioFile(AudioFile::read_from(&mut data_cursor, header)?)
            }
            _ => unreachable!("encodes_presence_inline only matches these three kinds"),
        };
        record
    } else {
        let children = decode_children(&aux_buf, aux_offset)?;
        match kind {
            RecordKind::GarminHeader => Record::GarminHeader(GarminHeader::read_from(
                &mut data_cursor,
                header,
                children,
            )?),
            RecordKind::PoiHeader => {
                Record::PoiHeader(PoiHeader::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Waypoint => {
                Record::Waypoint(Waypoint::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Alert => Record::Alert(Alert::read_from(&mut data_cursor, header, children)?),
            RecordKind::BitmapReference => Record::BitmapReference(BitmapReference::read_from(
                &mut data_cursor,
                header,
                children,
            )?),
            RecordKind::Bitmap => {
                Record::Bitmap(Bitmap::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::CategoryReference => Record::CategoryReference(
                CategoryReference::read_from(&mut data_cursor, header, children)?,
            ),
            RecordKind::Category => {
                Record::Category(Category::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Area => Record::Area(Area::read_from(&mut data_cursor, header, children)?),
            RecordKind::PoiGroup => {
                Record::PoiGroup(PoiGroup::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Comment => {
                Record::Comment(Comment::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::ImageFile => {
                Record::ImageFile(ImageFile::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Description => {
                Record::Description(Description::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Record15 => {
                Record::Record15(Record15::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Record16 => {
                Record::Record16(Record16::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Copyright => {
                Record::Copyright(Copyright::read_from(&mut data_cursor, header, children)?)
            }
            RecordKind::Address | RecordKind::Contact | RecordKind::AudioFile => {
                unreachable!("handled above")
            }
            RecordKind::Opaque(_) | RecordKind::End => unreachable!("handled above"),
        }
    };

    check_consumed(kind, offset, data_len, data_cursor.position())?;
    Ok(Some(record))
}

/// Decodes a whole auxiliary (child-record) region, stopping either when its bytes are exhausted
/// or (unusually) an `End` sentinel is found inside it.
pub(crate) fn decode_children(buf: &[u8], offset: u64) -> Result<Vec<Record>> {
    let mut cursor = Cursor::new(buf);
    let total = buf.len() as u64;
    let mut children = Vec::new();
    while cursor.position() < total {
        let child_offset = offset + cursor.position();
        match decode_one(&mut cursor, child_offset)? {
            Some(record) => children.push(record),
            None => break,
        }
    }
    Ok(children)
}
