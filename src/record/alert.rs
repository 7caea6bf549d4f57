//! `alert` (kind 3): a proximity/speed alert attached to a waypoint.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::enums::{AlertSource, AlertTrigger};
use crate::raw::RecordHeader;

use super::Record;

/// An `alert` record (kind 3).
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    /// The common record header.
    pub header: RecordHeader,
    /// Proximity radius, in meters.
    pub proximity: u16,
    /// Velocity, in units of 1/100 m/s.
    pub velocity: u16,
    /// Undocumented.
    pub unknown0: u16,
    /// Undocumented.
    pub unknown1: u16,
    /// Whether the alert is active.
    pub enabled: bool,
    /// What triggers the alert.
    pub trigger: AlertTrigger,
    /// A symbol id, internal id, or media id, interpreted according to `source`.
    pub reference: u8,
    /// How `reference` should be interpreted.
    pub source: AlertSource,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Alert {
    pub(crate) fn read_from<R: Read>(
        read: &mut R,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Alert> {
        let proximity = read.read_u16::<LittleEndian>()?;
        let velocity = read.read_u16::<LittleEndian>()?;
        let unknown0 = read.read_u16::<LittleEndian>()?;
        let unknown1 = read.read_u16::<LittleEndian>()?;
        let mut byte = [0u8; 1];
        read.read_exact(&mut byte)?;
        let enabled = byte[0] != 0;
        read.read_exact(&mut byte)?;
        let trigger = AlertTrigger(byte[0]);
        read.read_exact(&mut byte)?;
        let reference = byte[0];
        read.read_exact(&mut byte)?;
        let source = AlertSource(byte[0]);
        Ok(Alert {
            header,
            proximity,
            velocity,
            unknown0,
            unknown1,
            enabled,
            trigger,
            reference,
            source,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.proximity)?;
        write.write_u16::<LittleEndian>(self.velocity)?;
        write.write_u16::<LittleEndian>(self.unknown0)?;
        write.write_u16::<LittleEndian>(self.unknown1)?;
        write.write_all(&[u8::from(self.enabled), self.trigger.0, self.reference, self.source.0])?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        12
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
        let alert = Alert {
            header: RecordHeader::without_aux(RecordKind::Alert, Flags16::default(), 12),
            proximity: 100,
            velocity: 2500,
            unknown0: 0,
            unknown1: 0,
            enabled: true,
            trigger: AlertTrigger::PROXIMITY,
            reference: 7,
            source: AlertSource::SYMBOL,
            children: Vec::new(),
        };
        let mut buf = Vec::new();
        alert.write_body(&mut buf).unwrap();
        assert_eq!(alert.body_size() as usize, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Alert::read_from(&mut cursor, alert.header, Vec::new()).unwrap();
        assert_eq!(alert, decoded);
    }
}
