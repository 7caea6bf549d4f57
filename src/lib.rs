//! Reads and writes [Garmin Points-of-Interest
//! (GPI)](https://en.wikipedia.org/wiki/Garmin_POI_Loader) files, the binary container format
//! used by Garmin personal navigation devices to carry waypoints, alerts, bitmaps, categories,
//! audio clips, and associated metadata.
//!
//! A GPI file is a hierarchical, type-tagged stream of records: each record has a small header
//! declaring its type and length, a primary body, and optionally auxiliary data holding further
//! (child) records. This crate decodes that stream into an in-memory forest of typed [`Record`]s
//! and encodes it back, preserving byte-for-byte fidelity for every field it models; records of
//! an undocumented kind are carried through verbatim as [`record::Opaque`] rather than rejected.
//!
//! Semantic validation of POI content (e.g. whether a `bitmap_id` resolves to an actual bitmap
//! elsewhere in the file), bitmap rendering, and audio playback are out of scope — this crate
//! only concerns itself with the container format's structure.
//!
//! # Reading records
//!
//! Use a [`Reader`] to iterate over a file's top-level records:
//!
//! ```
//! use std::io::Cursor;
//! use gpi::Reader;
//!
//! let mut reader = Reader::new(Cursor::new(Vec::new()));
//! for record in &mut reader {
//!     let record = record.unwrap();
//!     // ...
//! }
//! ```
//!
//! # Writing records
//!
//! A [`Writer`] accepts records one at a time, or all at once via [`Writer::write_all`]:
//!
//! ```
//! use std::io::Cursor;
//! use gpi::Writer;
//!
//! let mut writer = Writer::new(Cursor::new(Vec::new()));
//! writer.write_end().unwrap();
//! let bytes = writer.into_inner().into_inner();
//! assert!(!bytes.is_empty());
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

pub mod container;
pub mod coord;
pub mod enums;
pub mod flags;
pub mod raw;
pub mod record;
pub mod timestamp;

mod error;
mod reader;
mod writer;

pub use error::Error;
pub use reader::Reader;
pub use record::Record;
pub use writer::Writer;

/// The crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
