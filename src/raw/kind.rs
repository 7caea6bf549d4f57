//! `record_id_t`: the wire type tag carried by every record header.

use crate::{Error, Result};

/// The type tag carried by a record header.
///
/// The 28 documented kinds (0..27) are split here into the 19 the codec interprets structurally
/// (0..18) and the 9 it treats as opaque pass-through (19, 20, 21/Index, 22..27).
/// `End` is the `0xFFFF` stream sentinel. The "set" codes 32..38 are declarative only (they
/// describe which child kinds are legal under a given parent) and never appear as an actual
/// record's wire type; encountering one as a type tag is an [`Error::UnknownRecordType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// 0: `garmin_header`.
    GarminHeader,
    /// 1: `poi_header`.
    PoiHeader,
    /// 2: `waypoint`.
    Waypoint,
    /// 3: `alert`.
    Alert,
    /// 4: `bitmap_reference`.
    BitmapReference,
    /// 5: `bitmap`.
    Bitmap,
    /// 6: `category_reference`.
    CategoryReference,
    /// 7: `category`.
    Category,
    /// 8: `area`.
    Area,
    /// 9: `poi_group`.
    PoiGroup,
    /// 10: `comment`.
    Comment,
    /// 11: `address`.
    Address,
    /// 12: `contact`.
    Contact,
    /// 13: `image_file`.
    ImageFile,
    /// 14: `description`.
    Description,
    /// 15: `record15`.
    Record15,
    /// 16: `record16`.
    Record16,
    /// 17: `copyright`.
    Copyright,
    /// 18: `audio_file`.
    AudioFile,
    /// 19, 20, 21 (`Index`), or 22..27: opaque pass-through, carrying its original numeric code.
    Opaque(u16),
    /// `0xFFFF`: the stream-terminating sentinel.
    End,
}

/// Declarative child-kind "set" codes. These never appear on the wire as an actual record's
/// type; they exist only in the format's documentation to describe which kinds are legal
/// children of a given parent.
pub mod child_set {
    /// Category (7).
    pub const CATEGORY: u16 = 32;
    /// Bitmap (5).
    pub const BITMAP: u16 = 33;
    /// AudioFile (18).
    pub const AUDIO_FILE: u16 = 34;
    /// ImageFile (13).
    pub const IMAGE_FILE: u16 = 35;
    /// BitmapReference (4).
    pub const BITMAP_REFERENCE: u16 = 36;
    /// Record23.
    pub const RECORD_23: u16 = 37;
    /// Record24.
    pub const RECORD_24: u16 = 38;
}

impl RecordKind {
    /// The end-of-stream sentinel's wire value.
    pub const END: u16 = 0xFFFF;

    /// Decodes a wire type tag into a `RecordKind`, or fails with
    /// [`Error::UnknownRecordType`].
    pub fn from_wire(n: u16) -> Result<RecordKind> {
        let kind = match n {
            0 => RecordKind::GarminHeader,
            1 => RecordKind::PoiHeader,
            2 => RecordKind::Waypoint,
            3 => RecordKind::Alert,
            4 => RecordKind::BitmapReference,
            5 => RecordKind::Bitmap,
            6 => RecordKind::CategoryReference,
            7 => RecordKind::Category,
            8 => RecordKind::Area,
            9 => RecordKind::PoiGroup,
            10 => RecordKind::Comment,
            11 => RecordKind::Address,
            12 => RecordKind::Contact,
            13 => RecordKind::ImageFile,
            14 => RecordKind::Description,
            15 => RecordKind::Record15,
            16 => RecordKind::Record16,
            17 => RecordKind::Copyright,
            18 => RecordKind::AudioFile,
            19 | 20 | 21 | 22 | 23 | 24 | 25 | 26 | 27 => RecordKind::Opaque(n),
            Self::END => RecordKind::End,
            _ => return Err(Error::UnknownRecordType(n)),
        };
        Ok(kind)
    }

    /// The wire type tag for this kind.
    pub fn to_wire(self) -> u16 {
        match self {
            RecordKind::GarminHeader => 0,
            RecordKind::PoiHeader => 1,
            RecordKind::Waypoint => 2,
            RecordKind::Alert => 3,
            RecordKind::BitmapReference => 4,
            RecordKind::Bitmap => 5,
            RecordKind::CategoryReference => 6,
            RecordKind::Category => 7,
            RecordKind::Area => 8,
            RecordKind::PoiGroup => 9,
            RecordKind::Comment => 10,
            RecordKind::Address => 11,
            RecordKind::Contact => 12,
            RecordKind::ImageFile => 13,
            RecordKind::Description => 14,
            RecordKind::Record15 => 15,
            RecordKind::Record16 => 16,
            RecordKind::Copyright => 17,
            RecordKind::AudioFile => 18,
            RecordKind::Opaque(n) => n,
            RecordKind::End => Self::END,
        }
    }

    /// `true` for the three kinds (Address, Contact, AudioFile) that encode optional-field
    /// presence inside their own primary body instead of via auxiliary child records.
    pub fn encodes_presence_inline(self) -> bool {
        matches!(
            self,
            RecordKind::Address | RecordKind::Contact | RecordKind::AudioFile
        )
    }
}
