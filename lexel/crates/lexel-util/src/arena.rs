//! Arena - Bump allocation over a caller-supplied buffer.
//!
//! Bump allocation is the cheapest allocation technique there is: an
//! allocation pads the top of the arena up to the requested alignment and
//! moves it forward by the requested size. Individual allocations are never
//! freed; [`Arena::reset`] rewinds the top in one step.
//!
//! The backing storage belongs to the caller. The arena never grows it, so
//! an allocation that does not fit fails with [`ArenaError::OutOfSpace`]
//! and leaves the arena untouched.
//!
//! ```text
//! buf: [ used .......... | pad | new allocation | free ............ ]
//!      ^ 0               ^ top                  ^ top'             ^ capacity
//! ```

use crate::error::{ArenaError, ArenaResult};

/// Arena - bump allocator over borrowed bytes
///
/// # Example
///
/// ```
/// use lexel_util::Arena;
///
/// let mut backing = [0u8; 32];
/// let mut arena = Arena::new(&mut backing);
///
/// let slot = arena.alloc(8, 8).unwrap();
/// assert_eq!(slot.len(), 8);
/// assert!(arena.allocated() >= 8);
///
/// arena.reset();
/// assert_eq!(arena.allocated(), 0);
/// ```
#[derive(Debug)]
pub struct Arena<'buf> {
    buf: &'buf mut [u8],
    top: usize,
}

impl<'buf> Arena<'buf> {
    /// Create an arena that hands out pieces of `buf`
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, top: 0 }
    }

    /// Reserve `size` bytes whose address is a multiple of `align`
    ///
    /// The returned bytes keep whatever the backing buffer held before.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidAlignment`] if `align` is not a power of two,
    /// [`ArenaError::OutOfSpace`] if the padded request does not fit.
    pub fn alloc(&mut self, size: usize, align: usize) -> ArenaResult<&mut [u8]> {
        let padding = self.padding_for(align)?;
        let available = self.remaining();
        let requested = padding.saturating_add(size);

        if requested > available {
            return Err(ArenaError::OutOfSpace {
                requested,
                available,
            });
        }

        let start = self.top + padding;
        self.top = start + size;
        Ok(&mut self.buf[start..self.top])
    }

    /// Reserve room for `bytes` and copy them in
    pub fn alloc_copy(&mut self, bytes: &[u8], align: usize) -> ArenaResult<&mut [u8]> {
        let slot = self.alloc(bytes.len(), align)?;
        slot.copy_from_slice(bytes);
        Ok(slot)
    }

    /// Rewind the top to the start of the buffer
    ///
    /// Contents of earlier allocations are left in place.
    pub fn reset(&mut self) {
        self.top = 0;
    }

    /// Total size of the backing buffer
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes consumed so far, padding included
    pub fn allocated(&self) -> usize {
        self.top
    }

    /// Bytes left before the arena is exhausted
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.top
    }

    fn padding_for(&self, align: usize) -> ArenaResult<usize> {
        if !align.is_power_of_two() {
            return Err(ArenaError::InvalidAlignment(align));
        }
        let address = (self.buf.as_ptr() as usize).wrapping_add(self.top);
        Ok(address.wrapping_neg() & (align - 1))
    }
}
