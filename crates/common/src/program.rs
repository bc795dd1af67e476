//! Program buffer representation.
//!
//! A program is a flat byte sequence with no header, no magic number, and
//! no length prefix. Bytes are interpreted positionally starting at
//! offset 0.

/// An immutable program image: raw instruction bytes.
///
/// The buffer never changes after construction. The VM reads it through
/// [`Program::byte`], a bounds-known cursor primitive, so a fetch past the
/// end is observable instead of undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    /// Create a program from its raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The byte at `offset`, or `None` past the end of the image.
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Length of the image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the image has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The full image as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
