//! Sequential decoding of a GPI byte stream into top-level [`Record`]s.

use std::io::Read;

use log::warn;

use crate::Result;
use crate::raw::RecordHeader;
use crate::record::{self, Record};

/// Reads top-level records from a GPI byte stream, one at a time.
///
/// `Reader` is a plain iterator over `R`: it holds no buffering beyond what a single record
/// needs, tracks only a running byte offset (for error messages) and whether an `End` record has
/// been seen, and never seeks.
#[derive(Debug)]
pub struct Reader<R> {
    read: R,
    offset: u64,
    saw_end: bool,
    done: bool,
}

impl<R: Read> Reader<R> {
    /// Wraps a byte stream for reading.
    pub fn new(read: R) -> Reader<R> {
        Reader {
            read,
            offset: 0,
            saw_end: false,
            done: false,
        }
    }

    /// `true` once an `End` record has been read.
    ///
    /// A stream that reaches EOF without ever setting this is tolerated but logs a warning the
    /// moment it happens, since a well-formed GPI file always terminates explicitly.
    pub fn saw_end(&self) -> bool {
        self.saw_end
    }

    /// Consumes the reader and returns the underlying stream.
    pub fn into_inner(self) -> R {
        self.read
    }
}

impl<R: Read> Iterator for Reader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Result<Record>> {
        if self.done {
            return None;
        }
        loop {
            let offset = self.offset;
            let header = match RecordHeader::try_read_from(&mut self.read) {
                Ok(None) => {
                    self.done = true;
                    if !self.saw_end {
                        warn!(
                            "GPI stream ended at offset {offset} without an End record"
                        );
                    }
                    return None;
                }
                Ok(Some(header)) => header,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };
            self.offset += header.wire_size() as u64
                + header.data_size() as u64
                + header.aux_data_size() as u64;

            match record::decode_after_header(&mut self.read, offset, header) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {
                    // The End sentinel: stop producing records, but keep `done` false until the
                    // *next* poll so a caller who checks `saw_end()` right after seeing `None`
                    // from this branch still gets an accurate answer.
                    self.saw_end = true;
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    warn!(
                        "skipping record at offset {offset} after a decode error: {err}"
                    );
                    // The declared length was already fully consumed by `decode_after_header`
                    // (or the error is itself an I/O failure, in which case retrying can't help),
                    // so the stream sits at the next top-level record's header either way.
                    continue;
                }
            }
        }
    }
}
