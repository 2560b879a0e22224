//! Code-point cursor over a UTF-8 byte buffer.
//!
//! The cursor holds one decoded code point of lookahead. [`Cursor::advance`]
//! consumes it and decodes the next one, taking a single-byte fast path for
//! ASCII and falling back to full UTF-8 decoding otherwise.
//!
//! # Malformed Input
//!
//! Decoding never fails. An invalid UTF-8 unit or a byte order mark past the
//! start of the buffer is reported to the [`ErrorHandler`] and skipped, and
//! decoding continues with the following bytes. A leading BOM is skipped
//! silently, exactly once, when the cursor is created.
//!
//! # Lines
//!
//! Line bookkeeping happens when a `'\n'` is *consumed*: the line counter
//! moves on while advancing past it, so the character that follows the line
//! feed is the first one on the new line.

use crate::{ErrorHandler, LexError, LexErrorKind};

/// Byte order mark. Permitted only as the first character of the input.
pub const BOM: char = '\u{FEFF}';

const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";

/// Cursor state: current code point plus byte offsets and line bookkeeping.
///
/// # Invariant
///
/// `offset <= scan_offset <= source.len()`, and `offset < scan_offset`
/// unless the cursor is at end of input, where both equal `source.len()`.
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a [u8],
    /// Current code point; `None` at end of input.
    ch: Option<char>,
    /// Byte offset of `ch`.
    offset: usize,
    /// Byte offset where the next code point starts.
    scan_offset: usize,
    /// Current line (1-based).
    line: u32,
    /// Byte offset where the current line starts.
    line_offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first code point of `source`.
    ///
    /// May report errors if the input starts with malformed code points;
    /// each is skipped before the first valid one is loaded.
    pub fn new<H: ErrorHandler + ?Sized>(source: &'a [u8], errors: &mut H) -> Self {
        let scan_offset = if source.starts_with(BOM_BYTES) {
            BOM_BYTES.len()
        } else {
            0
        };
        let mut cursor = Cursor {
            source,
            ch: None,
            offset: 0,
            scan_offset,
            line: 1,
            line_offset: 0,
        };
        cursor.decode(errors);
        cursor
    }

    /// Consume the current code point and load the next one.
    ///
    /// No-op at end of input.
    #[inline]
    pub fn advance<H: ErrorHandler + ?Sized>(&mut self, errors: &mut H) {
        match self.ch {
            None => return,
            Some('\n') => {
                self.line += 1;
                self.line_offset = self.scan_offset;
            }
            Some(_) => {}
        }
        self.decode(errors);
    }

    /// Decode the code point at `scan_offset`, skipping malformed units.
    #[inline]
    fn decode<H: ErrorHandler + ?Sized>(&mut self, errors: &mut H) {
        loop {
            self.offset = self.scan_offset;
            let Some(&byte) = self.source.get(self.offset) else {
                self.ch = None;
                return;
            };
            if byte.is_ascii() {
                self.scan_offset += 1;
                self.ch = Some(char::from(byte));
                return;
            }

            let (decoded, width) = bstr::decode_utf8(&self.source[self.offset..]);
            // A non-empty slice always yields at least one byte.
            let width = width.max(1);
            let kind = match decoded {
                Some(BOM) => LexErrorKind::IllegalByteOrderMark,
                Some(ch) => {
                    self.scan_offset += width;
                    self.ch = Some(ch);
                    return;
                }
                None => LexErrorKind::IllegalEncoding,
            };
            tracing::debug!(offset = self.offset, width, ?kind, "skipping malformed code point");
            errors.report(LexError::new(kind, self.line, self.offset, width));
            self.scan_offset += width;
        }
    }

    /// Current code point, `None` at end of input.
    #[inline]
    pub fn ch(&self) -> Option<char> {
        self.ch
    }

    #[inline]
    pub fn is_eoi(&self) -> bool {
        self.ch.is_none()
    }

    /// Byte offset of the current code point (`source.len()` at end of input).
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset where decoding resumes after the current code point.
    #[inline]
    pub fn scan_offset(&self) -> usize {
        self.scan_offset
    }

    /// Current 1-based line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the first byte of the current line.
    #[inline]
    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    /// 1-based byte column of the current code point.
    #[inline]
    pub fn column(&self) -> usize {
        self.offset - self.line_offset + 1
    }

    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }
}

#[cfg(test)]
mod tests;
