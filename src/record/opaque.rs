//! Opaque records (kinds 19-27 excluding the documented ones): structurally valid but
//! undocumented records whose payload is kept verbatim rather than interpreted.

use std::io::Write;

use crate::Result;
use crate::raw::RecordHeader;

/// A record of an undocumented kind, preserved byte-for-byte.
///
/// Unlike every structured record, `Opaque` stores the *entire* post-header payload — including
/// any bytes a documented sibling kind would have split off as auxiliary child records — because
/// without knowing the kind's layout there is no principled place to draw that line. Re-encoding
/// an `Opaque` reproduces its input exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Opaque {
    /// The common record header.
    pub header: RecordHeader,
    /// The raw, uninterpreted payload.
    pub raw: Vec<u8>,
}

impl Opaque {
    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_all(&self.raw)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        self.raw.len() as u32
    }
}
