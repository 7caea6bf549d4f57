//! `bitmap` (kind 5): a raw bitmap image, palette, and optional transparency mask.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::flags::Flags16;
use crate::raw::RecordHeader;

use super::Record;

/// Byte size of the fixed-width fields preceding the image/palette/mask blobs.
const STATICS_SIZE: usize = 36;

/// Bit reporting mask (transparency/mask) presence in `flags`.
const MASK_PRESENT_BIT: u8 = 0;

/// A `bitmap` record (kind 5).
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    /// The common record header.
    pub header: RecordHeader,
    /// The bitmap's id, referenced by `bitmap_reference` records.
    pub bitmap_id: u16,
    /// Image height, in pixels.
    pub height: u16,
    /// Image width, in pixels.
    pub width: u16,
    /// Bytes per scanline.
    pub line_length: u16,
    /// Bits per pixel.
    pub bits_per_pixel: u16,
    /// Reserved, always `0`.
    pub reserved0: u16,
    /// Reserved, always `0`.
    pub reserved1: u16,
    /// The transparent color, as a packed value in the image's native format.
    pub transparent_color: u32,
    /// Body-level flags. Bit 0 reports whether `mask_data` is present.
    pub flags: Flags16,
    /// Palette offset, as recorded on the wire.
    pub palette_offset: u32,
    /// Image offset, as recorded on the wire.
    pub image_offset: u32,
    /// Raw pixel data, `image_byte_length` bytes.
    pub image_data: Vec<u8>,
    /// Palette entries, each a packed `u32` color.
    pub palette: Vec<u32>,
    /// Transparency mask bytes, occupying the remainder of primary data.
    pub mask_data: Vec<u8>,
    /// Auxiliary child records.
    pub children: Vec<Record>,
}

impl Bitmap {
    pub(crate) fn read_from(
        read: &mut Cursor<&[u8]>,
        header: RecordHeader,
        children: Vec<Record>,
    ) -> Result<Bitmap> {
        let data_size = read.get_ref().len();
        let bitmap_id = read.read_u16::<LittleEndian>()?;
        let height = read.read_u16::<LittleEndian>()?;
        let width = read.read_u16::<LittleEndian>()?;
        let line_length = read.read_u16::<LittleEndian>()?;
        let bits_per_pixel = read.read_u16::<LittleEndian>()?;
        let reserved0 = read.read_u16::<LittleEndian>()?;
        let image_byte_length = read.read_u32::<LittleEndian>()?;
        let image_offset = read.read_u32::<LittleEndian>()?;
        let palette_size = read.read_u32::<LittleEndian>()?;
        let transparent_color = read.read_u32::<LittleEndian>()?;
        let reserved1 = read.read_u16::<LittleEndian>()?;
        let flags = Flags16::read_from(read)?;
        let palette_offset = read.read_u32::<LittleEndian>()?;

        let mut image_data = vec![0u8; image_byte_length as usize];
        read.read_exact(&mut image_data)?;

        let mut palette = Vec::with_capacity(palette_size as usize);
        for _ in 0..palette_size {
            palette.push(read.read_u32::<LittleEndian>()?);
        }

        let mask_len = data_size
            .saturating_sub(STATICS_SIZE)
            .saturating_sub(image_byte_length as usize)
            .saturating_sub(palette_size as usize * 4);
        let mut mask_data = vec![0u8; mask_len];
        read.read_exact(&mut mask_data)?;

        Ok(Bitmap {
            header,
            bitmap_id,
            height,
            width,
            line_length,
            bits_per_pixel,
            reserved0,
            reserved1,
            transparent_color,
            flags,
            palette_offset,
            image_offset,
            image_data,
            palette,
            mask_data,
            children,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        let mut flags = self.flags;
        flags.set(MASK_PRESENT_BIT, !self.mask_data.is_empty());

        write.write_u16::<LittleEndian>(self.bitmap_id)?;
        write.write_u16::<LittleEndian>(self.height)?;
        write.write_u16::<LittleEndian>(self.width)?;
        write.write_u16::<LittleEndian>(self.line_length)?;
        write.write_u16::<LittleEndian>(self.bits_per_pixel)?;
        write.write_u16::<LittleEndian>(self.reserved0)?;
        write.write_u32::<LittleEndian>(self.image_data.len() as u32)?;
        write.write_u32::<LittleEndian>(self.image_offset)?;
        write.write_u32::<LittleEndian>(self.palette.len() as u32)?;
        write.write_u32::<LittleEndian>(self.transparent_color)?;
        write.write_u16::<LittleEndian>(self.reserved1)?;
        flags.write_to(write)?;
        write.write_u32::<LittleEndian>(self.palette_offset)?;
        write.write_all(&self.image_data)?;
        for entry in &self.palette {
            write.write_u32::<LittleEndian>(*entry)?;
        }
        write.write_all(&self.mask_data)?;
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        (STATICS_SIZE + self.image_data.len() + self.palette.len() * 4 + self.mask_data.len())
            as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RecordKind;

    #[test]
    fn two_by_two_with_mask() {
        let mut bitmap = Bitmap {
            header: RecordHeader::without_aux(RecordKind::Bitmap, Flags16::default(), 0),
            bitmap_id: 1,
            height: 2,
            width: 2,
            line_length: 2,
            bits_per_pixel: 8,
            reserved0: 0,
            reserved1: 0,
            transparent_color: 0,
            flags: Flags16::default(),
            palette_offset: 0,
            image_offset: 0,
            image_data: vec![0, 1, 2, 3],
            palette: vec![0xFF0000, 0x00FF00, 0x0000FF, 0xFFFFFF],
            mask_data: vec![1, 2, 3, 4],
            children: Vec::new(),
        };
        bitmap.header =
            RecordHeader::without_aux(RecordKind::Bitmap, Flags16::default(), bitmap.body_size());
        assert_eq!(36 + 4 + 16 + 4, bitmap.body_size());

        let mut buf = Vec::new();
        bitmap.write_body(&mut buf).unwrap();
        assert_eq!(bitmap.body_size() as usize, buf.len());

        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Bitmap::read_from(&mut cursor, bitmap.header, Vec::new()).unwrap();
        assert_eq!(bitmap.image_data, decoded.image_data);
        assert_eq!(bitmap.palette, decoded.palette);
        assert_eq!(bitmap.mask_data, decoded.mask_data);
        assert!(decoded.flags.get(MASK_PRESENT_BIT));
    }

    #[test]
    fn zero_palette_reads_no_palette_bytes() {
        let bitmap = Bitmap {
            header: RecordHeader::without_aux(RecordKind::Bitmap, Flags16::default(), 0),
            bitmap_id: 1,
            height: 1,
            width: 1,
            line_length: 1,
            bits_per_pixel: 1,
            reserved0: 0,
            reserved1: 0,
            transparent_color: 0,
            flags: Flags16::default(),
            palette_offset: 0,
            image_offset: 0,
            image_data: vec![9],
            palette: Vec::new(),
            mask_data: Vec::new(),
            children: Vec::new(),
        };
        let mut buf = Vec::new();
        bitmap.write_body(&mut buf).unwrap();
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Bitmap::read_from(&mut cursor, bitmap.header, Vec::new()).unwrap();
        assert!(decoded.palette.is_empty());
        assert!(decoded.mask_data.is_empty());
    }
}
