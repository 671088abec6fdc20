//! Compact boolean flags addressed by 16-bit identifiers.
//!
//! An array of `u16` words is treated as one bit vector. A flag identifier
//! carries its word index in the upper 12 bits and its bit index in the lower
//! 4, so `0x1AC` lives in word 26, bit 12. Storage is owned by the caller;
//! see [`ops`] for accessors over plain slices and [`Flags`] for a fixed-size
//! owned table.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(test, not(feature = "std")))]
extern crate std;

pub mod error;
pub mod flags;
mod ids;
pub mod layout;
pub mod ops;

pub use error::Error;
pub use flags::Flags;
pub use layout::{
    clr_bit, decode_index, decode_mask, flag_to_word, set_bit, xor_bit, FlagId, MAX_FLAGS,
    MAX_WORDS, WORD_BITS,
};
pub use ops::{
    assign, clear, contains, get, set, toggle, try_clear, try_get, try_set, try_toggle, try_word,
    word, word_mut,
};
