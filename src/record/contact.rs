//! `contact` (kind 12): phone/fax/email/URL contact details.
//!
//! Like `address`, presence is carried inline via a `have` mask, so `contact` never has
//! auxiliary child records.

use std::io::{Read, Write};

use crate::Result;
use crate::container::{read_vec16, vec16_byte_count, write_vec16};
use crate::flags::Flags16;
use crate::raw::RecordHeader;

/// `have` mask bit for `phone1`.
pub const HAVE_PHONE1: u8 = 0;
/// `have` mask bit for `phone2`.
pub const HAVE_PHONE2: u8 = 1;
/// `have` mask bit for `fax`.
pub const HAVE_FAX: u8 = 2;
/// `have` mask bit for `email`.
pub const HAVE_EMAIL: u8 = 3;
/// `have` mask bit for `url`.
pub const HAVE_URL: u8 = 4;

/// A `contact` record (kind 12).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contact {
    /// The common record header.
    pub header: RecordHeader,
    /// Body-level flags, preceding the `have` mask.
    pub flags: Flags16,
    /// Primary phone number.
    pub phone1: Option<Vec<u8>>,
    /// Secondary phone number.
    pub phone2: Option<Vec<u8>>,
    /// Fax number.
    pub fax: Option<Vec<u8>>,
    /// Email address.
    pub email: Option<Vec<u8>>,
    /// Web URL.
    pub url: Option<Vec<u8>>,
}

impl Contact {
    /// Computes the wire `have` mask from which optional fields are present.
    pub fn have_mask(&self) -> Flags16 {
        let mut have = Flags16::default();
        have.set(HAVE_PHONE1, self.phone1.is_some());
        have.set(HAVE_PHONE2, self.phone2.is_some());
        have.set(HAVE_FAX, self.fax.is_some());
        have.set(HAVE_EMAIL, self.email.is_some());
        have.set(HAVE_URL, self.url.is_some());
        have
    }

    pub(crate) fn read_from<R: Read>(read: &mut R, header: RecordHeader) -> Result<Contact> {
        let flags = Flags16::read_from(read)?;
        let have = Flags16::read_from(read)?;

        let phone1 = have.get(HAVE_PHONE1).then(|| read_vec16(read)).transpose()?;
        let phone2 = have.get(HAVE_PHONE2).then(|| read_vec16(read)).transpose()?;
        let fax = have.get(HAVE_FAX).then(|| read_vec16(read)).transpose()?;
        let email = have.get(HAVE_EMAIL).then(|| read_vec16(read)).transpose()?;
        let url = have.get(HAVE_URL).then(|| read_vec16(read)).transpose()?;

        Ok(Contact {
            header,
            flags,
            phone1,
            phone2,
            fax,
            email,
            url,
        })
    }

    pub(crate) fn write_body<W: Write>(&self, write: &mut W) -> Result<()> {
        self.flags.write_to(write)?;
        self.have_mask().write_to(write)?;
        for field in [&self.phone1, &self.phone2, &self.fax, &self.email, &self.url] {
            if let Some(value) = field {
                write_vec16(write, value)?;
            }
        }
        Ok(())
    }

    pub(crate) fn body_size(&self) -> u32 {
        let mut size = 4;
        for field in [&self.phone1, &self.phone2, &self.fax, &self.email, &self.url] {
            if let Some(value) = field {
                size += vec16_byte_count(value);
            }
        }
        size as u32
    }
}
