//! Errors returned by this crate.

use thiserror::Error;

/// Everything that can go wrong when reading or writing a GPI stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Wraps a lower-level io error that isn't otherwise classified.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The stream ended before a declared length was satisfied.
    #[error("unexpected end of stream at offset {offset}: needed {needed} more byte(s)")]
    UnexpectedEof {
        /// The byte offset, relative to the start of the stream, at which the read was attempted.
        offset: u64,
        /// The number of bytes that were still expected.
        needed: u64,
    },

    /// A record's declared `end_of_record`/`end_of_data` did not match the number of bytes its
    /// body actually consumed.
    #[error(
        "record of kind {kind:?} at offset {offset} declared {declared} byte(s) but consumed {consumed}"
    )]
    LengthMismatch {
        /// The record kind whose declared length was violated.
        kind: crate::raw::RecordKind,
        /// The byte offset of the record's header.
        offset: u64,
        /// The length the header declared.
        declared: u64,
        /// The number of bytes the body decoder actually consumed.
        consumed: u64,
    },

    /// A record header named a type this codec does not recognize.
    #[error("unknown record type {0:#06x}")]
    UnknownRecordType(u16),

    /// A `localized<V>` container consumed more bytes than its length prefix declared.
    #[error(
        "localized map overshot its declared byte budget of {declared} by {overshoot} byte(s)"
    )]
    LocalizedOvershoot {
        /// The total byte budget the map declared.
        declared: u32,
        /// How far past that budget decoding ran before the error was detected.
        overshoot: u32,
    },

    /// On encode, the caller-supplied presence bits disagreed with the actual presence of the
    /// optional fields they describe.
    ///
    /// The encoder never trusts a caller-supplied mask, so this variant is reserved for an API
    /// surface that accepts a raw mask directly; it is not reachable through
    /// [`crate::Record::encode`].
    #[error("presence mask {mask:#06x} disagrees with the fields actually present")]
    PresenceConflict {
        /// The mask the caller supplied.
        mask: u32,
    },
}
