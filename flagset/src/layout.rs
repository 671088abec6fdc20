//! Bit layout of a flag identifier.
//!
//! A [`FlagId`] packs a word index and a bit index into one `u16`:
//!
//! ```text
//!    15         4  3         0
//!   [ word index ][ bit index ]
//! ```
//!
//! Bits are LSB-first within a word, so writing an identifier in hex reads as
//! "word:bit" (`0x1AC` is word 26, bit 12).

use core::fmt;

/// Number of flags held by one storage word.
pub const WORD_BITS: usize = 16;

/// Largest word count an identifier can address.
pub const MAX_WORDS: usize = 1 << 12;

/// Total number of addressable flags.
pub const MAX_FLAGS: usize = MAX_WORDS * WORD_BITS;

const BIT_MASK: u16 = 0xF;
const WORD_SHIFT: u32 = 4;

/// Identifier of a single flag within word storage.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FlagId(pub u16);

impl FlagId {
    /// Compose an identifier from its word and bit index.
    ///
    /// # Panics
    ///
    /// Panics if `word_index >= MAX_WORDS` or `bit_index >= WORD_BITS`.
    pub const fn from_parts(word_index: u16, bit_index: u16) -> Self {
        assert!((word_index as usize) < MAX_WORDS, "word index exceeds 4095");
        assert!((bit_index as usize) < WORD_BITS, "bit index exceeds 15");
        Self((word_index << WORD_SHIFT) | bit_index)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn word_index(self) -> usize {
        decode_index(self.0)
    }

    pub const fn bit_index(self) -> u32 {
        (self.0 & BIT_MASK) as u32
    }

    pub const fn mask(self) -> u16 {
        decode_mask(self.0)
    }
}

impl From<u16> for FlagId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<FlagId> for u16 {
    fn from(flag: FlagId) -> Self {
        flag.0
    }
}

impl fmt::Debug for FlagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#06x} (word {}, bit {})",
            self.0,
            self.word_index(),
            self.bit_index()
        )
    }
}

impl fmt::Display for FlagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word_index(), self.bit_index())
    }
}

/// Index of the word holding `flag`.
pub const fn decode_index(flag: u16) -> usize {
    (flag >> WORD_SHIFT) as usize
}

/// Single-bit mask selecting `flag` within its word.
pub const fn decode_mask(flag: u16) -> u16 {
    1u16 << (flag & BIT_MASK)
}

/// Split `flag` into its word index and mask.
pub const fn flag_to_word(flag: FlagId) -> (usize, u16) {
    (decode_index(flag.0), decode_mask(flag.0))
}

pub fn set_bit(word: &mut u16, mask: u16) {
    *word |= mask;
}

pub fn clr_bit(word: &mut u16, mask: u16) {
    *word &= !mask;
}

pub fn xor_bit(word: &mut u16, mask: u16) {
    *word ^= mask;
}
