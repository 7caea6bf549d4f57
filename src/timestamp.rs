//! The Garmin epoch timestamp.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::{DateTime, TimeZone, Utc};

use crate::Result;

/// Seconds between the Unix epoch and the Garmin epoch (1989-12-31 00:00:00 UTC).
pub const GARMIN_EPOCH_UNIX_OFFSET: i64 = 631_065_600;

/// A `timestamp`: seconds since the Garmin epoch, little-endian on the wire.
///
/// The sentinel raw value `0xFFFFFFFF` means "unset" and is deliberately normalized away rather
/// than round-tripped verbatim: `Timestamp::read_from` folds `0xFFFFFFFF` into `0` at decode
/// time, so the in-memory value is always a plain seconds count and `write_to` never emits the
/// sentinel back out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(
    /// Seconds since the Garmin epoch.
    pub u32,
);

impl Timestamp {
    /// The Garmin epoch itself, i.e. raw value `0`.
    pub fn garmin_epoch() -> Timestamp {
        Timestamp(0)
    }

    /// Reads a `timestamp`, folding the `0xFFFFFFFF` "unset" sentinel to `0`.
    pub fn read_from<R: Read>(read: &mut R) -> Result<Timestamp> {
        let raw = read.read_u32::<LittleEndian>()?;
        Ok(Timestamp(if raw == 0xFFFF_FFFF { 0 } else { raw }))
    }

    /// Writes this timestamp's raw seconds value.
    pub fn write_to<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u32::<LittleEndian>(self.0)?;
        Ok(())
    }

    /// Converts to an absolute UTC datetime.
    pub fn to_datetime(self) -> DateTime<Utc> {
        Utc.timestamp_opt(GARMIN_EPOCH_UNIX_OFFSET + i64::from(self.0), 0)
            .single()
            .expect("garmin timestamps always fit in a valid unix time")
    }

    /// Builds a `Timestamp` from an absolute UTC datetime.
    ///
    /// Datetimes before the Garmin epoch saturate to `0`.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Timestamp {
        let seconds = datetime.timestamp() - GARMIN_EPOCH_UNIX_OFFSET;
        Timestamp(u32::try_from(seconds.max(0)).unwrap_or(u32::MAX))
    }
}
