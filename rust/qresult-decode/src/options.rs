//! Decoder configuration.

use qresult_format::defs::STRING_CELL_DELIMITER;

/// How string cells holding invalid UTF-8 are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Utf8Policy {
    /// Invalid sequences are replaced with U+FFFD.
    #[default]
    Lossy,
    /// Invalid UTF-8 fails the decode pass with `ErrorKind::InvalidFormat`.
    Strict,
}

/// Options controlling how cell values are decoded.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    string_delimiter: u8,
    utf8_policy: Utf8Policy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            string_delimiter: STRING_CELL_DELIMITER,
            utf8_policy: Utf8Policy::default(),
        }
    }
}

impl DecodeOptions {
    pub fn new() -> DecodeOptions {
        Default::default()
    }

    /// Sets the byte that separates entries of `string_cells`.
    pub fn with_string_delimiter(self, string_delimiter: u8) -> Self {
        Self {
            string_delimiter,
            ..self
        }
    }

    pub fn with_utf8_policy(self, utf8_policy: Utf8Policy) -> Self {
        Self {
            utf8_policy,
            ..self
        }
    }

    #[inline]
    pub fn string_delimiter(&self) -> u8 {
        self.string_delimiter
    }

    #[inline]
    pub fn utf8_policy(&self) -> Utf8Policy {
        self.utf8_policy
    }
}
