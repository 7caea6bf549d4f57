//! `address` (kind 11): a structured postal address.
//!
//! Presence of each optional field is carried by a 16-bit `have` mask inside the primary body
//! itself, which is why `address` never has auxiliary child records.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::Result;
use crate::container::{Localized, read_vec16, vec16_byte_count, write_vec16};
use crate::flags::Flags16;
use crate::raw::RecordHeader;

/// `have` mask bit for `city`.
pub const HAVE_CITY: u8 = 0;
/// `have` mask bit for `country`.
pub const HAVE_COUNTRY: u8 = 1;
/// `have` mask bit for `state`.
pub const HAVE_STATE: u8 = 2;
/// `have` mask bit for `postal_code`.
pub const HAVE_POSTAL_CODE: u8 = 3;
/// `have` mask bit for `street_name`.
pub const HAVE_STREET_NAME: u8 = 4;
/// `have` mask bit for `building_id`.
pub const HAVE_BUILDING_ID: u8 = 5;

/// An `address` record (kind 11).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    /// The common record header.
    pub header: RecordHeader,
    /// Body-level flags, preceding the `have` mask.
    pub flags: Flags16,
    /// City name, by language.
    pub city: Option<Localized>,
    /// Country name, by language.
    pub country: Option<Localized>,
    /// State/province name, by language.
    pub state: Option<Localized>,
    /// Postal code.
    pub postal_code: Option<Vec<u8>>,
    /// Street name, by language.
    pub street_name: Option<Localized>,
    /// Building id.
    pub building_id: Option<Vec<u8>>,
}

impl Address {
    /// Computes the wire `have` mask from which optional fields are present.
    ///
    /// The encoder always derives this mask from the fields themselves; it never trusts a
    /// caller-supplied mask, so [`crate::Error::PresenceConflict`] cannot arise through this
    /// path.
    pub fn have_mask(&self) -> Flags16 {
        let mut have = Flags16::default();
        have.set(HAVE_CITY, self.city.is_some());
        have.set(HAVE_COUNTRY, self.country.is_some());
        have.set(HAVE_STATE, self.state.is_some());
        have.set(HAVE_POSTAL_CODE, self.postal_code.is_some());
        have.set(HAVE_STREET_NAME, self.street_name.is_some());
        have.set(HAVE_BUILDING_ID, self.building_id.is_some());
        have
    }

    pub(crate) fn read_from<R: Read>(read: &mut R, header: RecordHeader) -> Result<Address> {
        let flags = Flags16::read_from(read)?;
        let have = Flags16::read_from(read)?;

        let city = have
            .get(HAVE_CITY)
            .then(|| Localized::read_from(read))
            .transpose()?;
        let country = have
            .get(HAVE_COUNTRY)
            .then(|| Localized::read_from(read))
            .transpose()?;
        let state = have
            .get(HAVE_STATE)
            .then(|| Localized::read_from(read))
            .transpose()?;
        let postal_code = have
            .get(HAVE_POSTAL_CODE)
            .then(|| read_vec16(read))
            .transpose()?;
        let street_name = have
            .get(HAVE_STREET_NAME)
            .then(|| Localized::read_from(read))
            .transpose()?;
        let building_id = have
            .get(HAVE_BUILDING_ID)
            .then(|| read_vec16(read))
            .transpose()?;

        Ok(Address {
            header,
            flags,
            city,
            country,
            state,
            postal_code,
            street_name,
            building_id,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        self.flags.write_to(write)?;
        self.have_mask().write_to(write)?;
        if let Some(city) = &self.city {
            city.write_to(write)?;
        }
        if let Some(country) = &self.country {
            country.write_to(write)?;
        }
        if let Some(state) = &self.state {
            state.write_to(write)?;
        }
        if let Some(postal_code) = &self.postal_code {
            write_vec16(write, postal_code)?;
        }
        if let Some(street_name) = &self.street_name {
            street_name.write_to(write)?;
        }
        if let Some(building_id) = &self.building_id {
            write_vec16(write, building_id)?;
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        let mut size = 4;
        if let Some(city) = &self.city {
            size += city.byte_count();
        }
        if let Some(country) = &self.country {
            size += country.byte_count();
        }
        if let Some(state) = &self.state {
            size += state.byte_count();
        }
        if let Some(postal_code) = &self.postal_code {
            size += vec16_byte_count(postal_code);
        }
        if let Some(street_name) = &self.street_name {
            size += street_name.byte_count();
        }
        if let Some(building_id) = &self.building_id {
            size += vec16_byte_count(building_id);
        }
        size as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RecordKind;
    use std::io::Cursor;

    #[test]
    fn empty_have_mask_consumes_four_bytes() {
        let address = Address {
            header: RecordHeader::without_aux(RecordKind::Address, Flags16::default(), 4),
            ..Default::default()
        };
        let mut buf = Vec::new();
        address.write_body(&mut buf).unwrap();
        assert_eq!(4, buf.len());
        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Address::read_from(&mut cursor, address.header).unwrap();
        assert_eq!(address, decoded);
    }

    #[test]
    fn city_and_postal_code_mask() {
        let mut city = Localized::new();
        city.push(*b"en", b"Boston".to_vec());
        let address = Address {
            header: RecordHeader::without_aux(RecordKind::Address, Flags16::default(), 0),
            city: Some(city),
            postal_code: Some(b"02108".to_vec()),
            ..Default::default()
        };
        assert_eq!(0x0009, address.have_mask().0);

        let mut buf = Vec::new();
        address.write_body(&mut buf).unwrap();
        assert_eq!(address.body_size() as usize, buf.len());

        let mut cursor = Cursor::new(buf.as_slice());
        let decoded = Address::read_from(&mut cursor, address.header).unwrap();
        assert_eq!(address, decoded);
    }
}
