//! Splitting of the delimiter-joined `string_cells` blob.

use std::borrow::Cow;

use qresult_common::{Result, error::Error};

use crate::options::Utf8Policy;

/// Lazily splits a `string_cells` blob into its entries, one per call.
///
/// The blob holds the strings joined by the delimiter, so `n` delimiters
/// separate `n + 1` entries: an empty blob holds one empty string and a
/// delimiter at the very end is followed by an empty entry. The splitter holds
/// only its position; the blob is passed in on every call, so it can live
/// inside the batch that owns it.
#[derive(Debug, Clone)]
pub struct StringCellSplitter {
    delimiter: u8,
    offset: usize,
    exhausted: bool,
}

impl StringCellSplitter {
    pub fn new(delimiter: u8) -> StringCellSplitter {
        StringCellSplitter {
            delimiter,
            offset: 0,
            exhausted: false,
        }
    }

    /// Returns the next entry of `blob`, or `None` once every entry has been
    /// returned.
    pub fn next_entry<'a>(&mut self, blob: &'a [u8]) -> Option<&'a [u8]> {
        if self.exhausted {
            return None;
        }
        let rest = blob.get(self.offset..)?;
        match rest.iter().position(|&b| b == self.delimiter) {
            Some(end) => {
                self.offset += end + 1;
                Some(&rest[..end])
            }
            None => {
                self.exhausted = true;
                self.offset = blob.len();
                Some(rest)
            }
        }
    }

    /// Rewinds to the start, for the next batch's blob.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.exhausted = false;
    }

    pub fn set_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }
}

/// Converts a string entry to an owned `String` according to `policy`.
pub fn decode_utf8(bytes: &[u8], policy: Utf8Policy) -> Result<String> {
    match policy {
        Utf8Policy::Strict => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|e| Error::invalid_format("string_cells", e.to_string())),
        Utf8Policy::Lossy => match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(s) => Ok(s.to_string()),
            Cow::Owned(s) => {
                log::warn!(
                    "replaced invalid UTF-8 in a {}-byte string cell",
                    bytes.len()
                );
                Ok(s)
            }
        },
    }
}
