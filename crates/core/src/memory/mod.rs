//! Flat memory buffers.
//!
//! This module provides the two memories the processor owns:
//! 1. **`MemoryBuffer`:** An owned, bounds-checked flat byte buffer with a
//!    single word accessor that enforces alignment before reinterpreting
//!    bytes as a little-endian 32-bit word.
//! 2. **`DataMemory`:** A `MemoryBuffer` paired with a per-byte touched
//!    bitset, recorded on every store and used only for reporting.

use crate::common::constants::WORD_SIZE;

/// Reason a word access was rejected by the buffer.
///
/// Callers map these onto the fetch- or data-flavored [`SimError`] variants,
/// which carry the address and PC context.
///
/// [`SimError`]: crate::common::SimError
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordAccess {
    /// Address is not a multiple of the word size.
    Misaligned,
    /// Address (or the word it starts) lies beyond the buffer.
    OutOfBounds,
}

/// An owned flat byte buffer with word-granular, alignment-checked access.
///
/// All addressing goes through [`read_word`] / [`write_word`]; there is no
/// unchecked path. Words are stored little-endian.
///
/// [`read_word`]: MemoryBuffer::read_word
/// [`write_word`]: MemoryBuffer::write_word
pub struct MemoryBuffer {
    bytes: Vec<u8>,
}

impl MemoryBuffer {
    /// Creates a zero-filled buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the capacity of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reads the little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`WordAccess::Misaligned`] if `addr` is not a multiple of 4,
    /// [`WordAccess::OutOfBounds`] if the word does not fit in the buffer.
    pub fn read_word(&self, addr: u32) -> Result<u32, WordAccess> {
        let offset = self.checked_offset(addr)?;
        let mut word = [0u8; WORD_SIZE as usize];
        word.copy_from_slice(&self.bytes[offset..offset + WORD_SIZE as usize]);
        Ok(u32::from_le_bytes(word))
    }

    /// Writes `val` as a little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`WordAccess::Misaligned`] if `addr` is not a multiple of 4,
    /// [`WordAccess::OutOfBounds`] if the word does not fit in the buffer.
    pub fn write_word(&mut self, addr: u32, val: u32) -> Result<(), WordAccess> {
        let offset = self.checked_offset(addr)?;
        self.bytes[offset..offset + WORD_SIZE as usize].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Reads the single byte at `offset`. Used only by the memory dump.
    pub fn byte(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// Validates alignment and bounds, returning the byte offset of `addr`.
    fn checked_offset(&self, addr: u32) -> Result<usize, WordAccess> {
        if addr % WORD_SIZE != 0 {
            return Err(WordAccess::Misaligned);
        }
        let offset = addr as usize;
        if offset + WORD_SIZE as usize > self.bytes.len() {
            return Err(WordAccess::OutOfBounds);
        }
        Ok(offset)
    }
}

/// Data memory: a flat word-addressed buffer plus per-byte touched tracking.
///
/// The touched bitset is set on every byte a store covers. It feeds the
/// memory dump and never influences control flow.
pub struct DataMemory {
    buf: MemoryBuffer,
    touched: Vec<bool>,
}

impl DataMemory {
    /// Creates a zero-filled data memory of `size` bytes with nothing touched.
    pub fn new(size: usize) -> Self {
        Self {
            buf: MemoryBuffer::new(size),
            touched: vec![false; size],
        }
    }

    /// Returns the capacity of the data memory in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the data memory has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Loads the little-endian word at `addr`.
    ///
    /// # Errors
    ///
    /// Propagates the buffer's alignment/bounds rejection.
    pub fn load_word(&self, addr: u32) -> Result<u32, WordAccess> {
        self.buf.read_word(addr)
    }

    /// Stores `val` at `addr` and marks all four covered bytes as touched.
    ///
    /// # Errors
    ///
    /// Propagates the buffer's alignment/bounds rejection; nothing is marked
    /// touched on failure.
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), WordAccess> {
        self.buf.write_word(addr, val)?;
        let offset = addr as usize;
        for touched in &mut self.touched[offset..offset + WORD_SIZE as usize] {
            *touched = true;
        }
        Ok(())
    }

    /// Iterates over all touched bytes as `(offset, value)` pairs, in
    /// ascending offset order.
    pub fn touched_bytes(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.touched
            .iter()
            .enumerate()
            .filter(|&(_, &touched)| touched)
            .map(|(offset, _)| (offset, self.buf.byte(offset)))
    }
}
