use crate::error::WireError;

/// A forward-only position within an immutable BCBP payload.
///
/// All parsers in the workspace advance through a single `Cursor`; none
/// of them rewinds. The cursor tracks `(offset, total_length)` and turns
/// every out-of-range read into [`WireError::UnexpectedEof`] rather than
/// a panic.
///
/// Offsets are character offsets. The constructor rejects non-ASCII
/// input, which keeps character offsets equal to byte offsets and makes
/// every later slice infallible.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// # Errors
    ///
    /// [`WireError::NonAscii`] if the payload contains a byte outside
    /// the ASCII range.
    pub fn new(input: &'a str) -> Result<Self, WireError> {
        if let Some(offset) = input.bytes().position(|b| !b.is_ascii()) {
            return Err(WireError::NonAscii { offset });
        }
        Ok(Self { input, offset: 0 })
    }

    /// Current offset from the start of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of characters left between the offset and the end.
    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// True once the whole input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Read `width` characters and advance past them.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `width` characters
    /// remain; the cursor is left unmoved.
    pub fn take(&mut self, width: usize) -> Result<&'a str, WireError> {
        let end = self.offset + width;
        if end > self.input.len() {
            return Err(WireError::UnexpectedEof {
                offset: self.offset,
                needed: end - self.input.len(),
            });
        }
        let slice = &self.input[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Consume and return everything left in the input.
    pub fn take_remaining(&mut self) -> &'a str {
        let slice = &self.input[self.offset..];
        self.offset = self.input.len();
        slice
    }

    /// Move the cursor forward to an absolute offset.
    ///
    /// Used to land exactly on a declared block or leg boundary after
    /// the structured fields inside it have been read.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if `target` lies past the end of
    /// the input.
    pub fn seek_to(&mut self, target: usize) -> Result<(), WireError> {
        debug_assert!(target >= self.offset, "cursor never rewinds");
        if target > self.input.len() {
            return Err(WireError::UnexpectedEof {
                offset: self.offset,
                needed: target - self.input.len(),
            });
        }
        self.offset = target;
        Ok(())
    }
}
