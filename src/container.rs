//! Length-prefixed containers: `vec16`, `vec32`, and `localized<V>`.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Error;
use crate::Result;

/// Reads a `vec16`: a `u16` length prefix followed by that many raw bytes.
pub fn read_vec16<R: Read>(read: &mut R) -> Result<Vec<u8>> {
    let len = read.read_u16::<LittleEndian>()?;
    let mut buf = vec![0u8; len as usize];
    read.read_exact(&mut buf)?;
    Ok(buf)
}

/// Writes a `vec16`.
pub fn write_vec16<W: Write>(write: &mut W, data: &[u8]) -> Result<()> {
    write.write_u16::<LittleEndian>(data.len() as u16)?;
    write.write_all(data)?;
    Ok(())
}

/// The wire byte count of a `vec16` holding `data`.
pub fn vec16_byte_count(data: &[u8]) -> usize {
    2 + data.len()
}

/// Reads a `vec32`: a `u32` length prefix followed by that many raw bytes.
pub fn read_vec32<R: Read>(read: &mut R) -> Result<Vec<u8>> {
    let len = read.read_u32::<LittleEndian>()?;
    let mut buf = vec![0u8; len as usize];
    read.read_exact(&mut buf)?;
    Ok(buf)
}

/// Writes a `vec32`.
pub fn write_vec32<W: Write>(write: &mut W, data: &[u8]) -> Result<()> {
    write.write_u32::<LittleEndian>(data.len() as u32)?;
    write.write_all(data)?;
    Ok(())
}

/// The wire byte count of a `vec32` holding `data`.
pub fn vec32_byte_count(data: &[u8]) -> usize {
    4 + data.len()
}

/// A `localized<vec16>`: an insertion-ordered mapping from a 2-byte ASCII language tag to a
/// `vec16` value.
///
/// Ordering is observable on the wire, so this is a plain association list rather than a
/// `HashMap`/`BTreeMap` — decoding must not reorder entries, and re-encoding must reproduce the
/// exact sequence the entries were read in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Localized {
    entries: Vec<([u8; 2], Vec<u8>)>,
}

impl Localized {
    /// Builds an empty localized map.
    pub fn new() -> Localized {
        Localized::default()
    }

    /// Iterates over `(language tag, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8; 2], &[u8])> {
        self.entries.iter().map(|(tag, value)| (tag, value.as_slice()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a `(language tag, value)` pair, preserving insertion order.
    pub fn push(&mut self, tag: [u8; 2], value: Vec<u8>) {
        self.entries.push((tag, value));
    }

    /// Looks up the value for a given language tag, returning the first match.
    pub fn get(&self, tag: &[u8; 2]) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_slice())
    }

    /// The total wire byte count, including the leading `u32` total-bytes prefix.
    pub fn byte_count(&self) -> usize {
        4 + self
            .entries
            .iter()
            .map(|(_, value)| 2 + vec16_byte_count(value))
            .sum::<usize>()
    }

    /// Reads a `localized<vec16>`.
    pub fn read_from<R: Read>(read: &mut R) -> Result<Localized> {
        let total = read.read_u32::<LittleEndian>()?;
        let mut remaining = total;
        let mut localized = Localized::new();
        while remaining > 0 {
            let mut tag = [0u8; 2];
            read.read_exact(&mut tag)?;
            let value = read_vec16(read)?;
            let consumed = 2 + vec16_byte_count(&value) as u32;
            if consumed > remaining {
                return Err(Error::LocalizedOvershoot {
                    declared: total,
                    overshoot: consumed - remaining,
                });
            }
            remaining -= consumed;
            localized.push(tag, value);
        }
        Ok(localized)
    }

    /// Writes a `localized<vec16>`.
    pub fn write_to<W: Write>(&self, write: &mut W) -> Result<()> {
        let total = (self.byte_count() - 4) as u32;
        write.write_u32::<LittleEndian>(total)?;
        for (tag, value) in &self.entries {
            write.write_all(tag)?;
            write_vec16(write, value)?;
        }
        Ok(())
    }
}

impl FromIterator<([u8; 2], Vec<u8>)> for Localized {
    fn from_iter<I: IntoIterator<Item = ([u8; 2], Vec<u8>)>>(iter: I) -> Localized {
        Localized {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A `localized<vec32>`: the same insertion-ordered language-tag mapping as [`Localized`], but
/// with `vec32`-sized (rather than `vec16`-sized) values. The only structured record that needs
/// this wider form is `audio_file`'s `audio_data`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocalizedVec32 {
    entries: Vec<([u8; 2], Vec<u8>)>,
}

impl LocalizedVec32 {
    /// Builds an empty localized map.
    pub fn new() -> LocalizedVec32 {
        LocalizedVec32::default()
    }

    /// Iterates over `(language tag, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8; 2], &[u8])> {
        self.entries.iter().map(|(tag, value)| (tag, value.as_slice()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a `(language tag, value)` pair, preserving insertion order.
    pub fn push(&mut self, tag: [u8; 2], value: Vec<u8>) {
        self.entries.push((tag, value));
    }

    /// Looks up the value for a given language tag, returning the first match.
    pub fn get(&self, tag: &[u8; 2]) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, v)| v.as_slice())
    }

    /// The total wire byte count, including the leading `u32` total-bytes prefix.
    pub fn byte_count(&self) -> usize {
        4 + self
            .entries
            .iter()
            .map(|(_, value)| 2 + vec32_byte_count(value))
            .sum::<usize>()
    }

    /// Reads a `localized<vec32>`.
    pub fn read_from<R: Read>(read: &mut R) -> Result<LocalizedVec32> {
        let total = read.read_u32::<LittleEndian>()?;
        let mut remaining = total;
        let mut localized = LocalizedVec32::new();
        while remaining > 0 {
            let mut tag = [0u8; 2];
            read.read_exact(&mut tag)?;
            let value = read_vec32(read)?;
            let consumed = 2 + vec32_byte_count(&value) as u32;
            if consumed > remaining {
                return Err(Error::LocalizedOvershoot {
                    declared: total,
                    overshoot: consumed - remaining,
                });
            }
            remaining -= consumed;
            localized.push(tag, value);
        }
        Ok(localized)
    }

    /// Writes a `localized<vec32>`.
    pub fn write_to<W: Write>(&self, write: &mut W) -> Result<()> {
        let total = (self.byte_count() - 4) as u32;
        write.write_u32::<LittleEndian>(total)?;
        for (tag, value) in &self.entries {
            write.write_all(tag)?;
            write_vec32(write, value)?;
        }
        Ok(())
    }
}

impl FromIterator<([u8; 2], Vec<u8>)> for LocalizedVec32 {
    fn from_iter<I: IntoIterator<Item = ([u8; 2], Vec<u8>)>>(iter: I) -> LocalizedVec32 {
        LocalizedVec32 {
            entries: iter.into_iter().collect(),
        }
    }
}
