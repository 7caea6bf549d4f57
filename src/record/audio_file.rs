//! `audio_file` (kind 18): an embedded audio clip, keyed by language.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::container::LocalizedVec32;
use crate::enums::AudioFormat;
use crate::raw::RecordHeader;

/// An `audio_file` record (kind 18).
///
/// `audio_file` encodes its own presence information inline (there is none to encode — it has no
/// optional fields) and, like `address`/`contact`, carries no auxiliary child records.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioFile {
    /// The common record header.
    pub header: RecordHeader,
    /// The audio clip's id.
    pub audio_id: u16,
    /// The clip's encoding.
    pub audio_format: AudioFormat,
    /// The clip data, by language.
    pub audio_data: LocalizedVec32,
}

impl AudioFile {
    pub(crate) fn read_from<R: Read>(read: &mut R, header: RecordHeader) -> Result<AudioFile> {
        let audio_id = read.read_u16::<LittleEndian>()?;
        let mut format = [0u8; 1];
        read.read_exact(&mut format)?;
        let audio_data = LocalizedVec32::read_from(read)?;
        Ok(AudioFile {
            header,
            audio_id,
            audio_format: AudioFormat(format[0]),
            audio_data,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        write.write_u16::<LittleEndian>(self.audio_id)?;
        write.write_all(&[self.audio_format.0])?;
        self.audio_data.write_to(write)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (2 + 1 + self.audio_data.byte_count()) as u32
    }
}
