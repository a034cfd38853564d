//! Bounds-checked read position over an immutable PDU buffer.

use crate::{Error, Result};

/// Read position into a borrowed byte buffer.
///
/// A cursor never mutates: every move produces a new cursor, so decoders
/// take it by value and report how many bytes they consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of the input.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the absolute offset of this cursor.
    #[must_use]
    pub const fn position(self) -> usize {
        self.pos
    }

    /// Returns true if the cursor sits at the end of the input.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the byte at the cursor.
    pub fn peek(self) -> Result<u8> {
        self.byte_at(0)
    }

    /// Returns the byte `index` positions after the cursor.
    pub fn byte_at(self, index: usize) -> Result<u8> {
        self.pos
            .checked_add(index)
            .and_then(|at| self.input.get(at).copied())
            .ok_or_else(|| self.out_of_bounds(index, 1))
    }

    /// Returns a cursor `n` bytes further on.
    ///
    /// Moving exactly to the end is allowed; moving past it is not.
    pub fn advance(self, n: usize) -> Result<Self> {
        match self.pos.checked_add(n) {
            Some(pos) if pos <= self.input.len() => Ok(Self {
                input: self.input,
                pos,
            }),
            _ => Err(self.out_of_bounds(0, n)),
        }
    }

    /// Returns the next `n` bytes.
    pub fn take(self, n: usize) -> Result<&'a [u8]> {
        let end = self.advance(n)?.pos;
        Ok(&self.input[self.pos..end])
    }

    /// Returns the bytes up to (not including) the next NUL octet.
    ///
    /// The terminator itself counts as consumed, so callers advance by
    /// `slice.len() + 1`.
    pub fn take_until_nul(self) -> Result<&'a [u8]> {
        let rest = &self.input[self.pos.min(self.input.len())..];
        rest.iter()
            .position(|&b| b == 0)
            .map(|end| &rest[..end])
            .ok_or_else(|| self.out_of_bounds(rest.len(), 1))
    }

    fn out_of_bounds(self, index: usize, needed: usize) -> Error {
        Error::OutOfBounds {
            position: self.pos.saturating_add(index),
            needed,
            length: self.input.len(),
        }
    }
}
