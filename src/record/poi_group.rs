//! `poi_group` (kind 9): a named group of `area` records.

use std::io::{Cursor, Write};

use crate::Result;
use crate::container::Localized;
use crate::raw::RecordHeader;

use super::Record;

/// A `poi_group` record (kind 9).
///
/// Unlike every other kind, its trailing `area` records live inside *primary* data rather than
/// the auxiliary section: a sequence of Area records that together consume the remaining
/// primary data. Each is still a fully self-describing record (header + body + its own
/// auxiliary data), so decoding one reuses the same [`super::decode_one`] the top-level driver and
/// the generic child-record walker both use.
///
/// Auxiliary (child) data, by contrast, may hold a `Category` set, `Bitmap` set, `AudioFile` set,
/// `record23`, or `record24`.
#[derive(Clone, Debug, PartialEq)]
pub struct PoiGroup {
    /// The common record header.
    pub header: RecordHeader,
    /// The group's source/display name, by language.
    pub source: Localized,
    /// The group's member areas, each a full [`Record::Area`].
    pub areas: Vec<Record>,
    /// Auxiliary child records (categories, bitmaps, audio clips, …).
    pub children: Vec<Record>,
}

impl PoiGroup {
    pub(crate) fn read_from(
        read: &mut Cursor<&[u8]>,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<PoiGroup> {
        let source = Localized::read_from(read)?;
        let total = read.get_ref().len() as u64;
        let mut areas = Vec::new();
        while read.position() < total {
            let offset = read.position();
            match super::decode_one(read, offset)? {
                Some(area) => areas.push(area),
                None => break,
            }
        }
        Ok(PoiGroup {
            header,
            source,
            areas,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        self.source.write_to(write)?;
        for area in &self.areas {
            write.write_all(&area.encode()?)?;
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        let areas_size: usize = self
            .areas
            .iter()
            .map(|area| area.encode().map(|bytes| bytes.len()).unwrap_or(0))
            .sum();
        (self.source.byte_count() + areas_size) as u32
    }
}
