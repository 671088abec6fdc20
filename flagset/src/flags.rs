use crate::error::Error;
use crate::layout::{FlagId, MAX_WORDS, WORD_BITS};
use crate::ops;

/// Zero-initialised flag storage of `N` words.
///
/// The word count is part of the type, so storage for a fixed flag table
/// (e.g. `Flags<30>` for 480 flags) cannot be resized or mixed up with a
/// differently sized table.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Flags<const N: usize> {
    words: [u16; N],
}

impl<const N: usize> Flags<N> {
    /// Number of flags the storage holds.
    pub const CAPACITY: usize = N * WORD_BITS;

    const FITS: () = assert!(N <= MAX_WORDS, "flag storage exceeds 4096 words");

    pub const fn new() -> Self {
        Self::from_words([0; N])
    }

    /// Wrap words read from elsewhere (e.g. a save file).
    pub const fn from_words(words: [u16; N]) -> Self {
        let () = Self::FITS;
        Self { words }
    }

    pub const fn words(&self) -> &[u16; N] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [u16; N] {
        &mut self.words
    }

    pub fn into_words(self) -> [u16; N] {
        self.words
    }

    /// Whether `flag` falls inside this storage.
    pub fn contains(&self, flag: impl Into<FlagId>) -> bool {
        ops::contains(N, flag)
    }

    /// Test a flag.
    ///
    /// # Panics
    ///
    /// Panics if the flag's word index is not below `N`.
    pub fn get(&self, flag: impl Into<FlagId>) -> bool {
        ops::get(&self.words, flag)
    }

    pub fn set(&mut self, flag: impl Into<FlagId>) {
        ops::set(&mut self.words, flag)
    }

    pub fn clear(&mut self, flag: impl Into<FlagId>) {
        ops::clear(&mut self.words, flag)
    }

    pub fn toggle(&mut self, flag: impl Into<FlagId>) {
        ops::toggle(&mut self.words, flag)
    }

    pub fn assign(&mut self, flag: impl Into<FlagId>, value: bool) {
        ops::assign(&mut self.words, flag, value)
    }

    /// The whole word holding `flag`.
    pub fn word(&self, flag: impl Into<FlagId>) -> u16 {
        ops::word(&self.words, flag)
    }

    pub fn try_get(&self, flag: impl Into<FlagId>) -> Result<bool, Error> {
        ops::try_get(&self.words, flag)
    }

    pub fn try_set(&mut self, flag: impl Into<FlagId>) -> Result<(), Error> {
        ops::try_set(&mut self.words, flag)
    }

    pub fn try_clear(&mut self, flag: impl Into<FlagId>) -> Result<(), Error> {
        ops::try_clear(&mut self.words, flag)
    }

    pub fn try_toggle(&mut self, flag: impl Into<FlagId>) -> Result<(), Error> {
        ops::try_toggle(&mut self.words, flag)
    }

    pub fn try_word(&self, flag: impl Into<FlagId>) -> Result<u16, Error> {
        ops::try_word(&self.words, flag)
    }
}

impl<const N: usize> Default for Flags<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[u16; N]> for Flags<N> {
    fn from(words: [u16; N]) -> Self {
        Self::from_words(words)
    }
}

impl<const N: usize> AsRef<[u16]> for Flags<N> {
    fn as_ref(&self) -> &[u16] {
        &self.words
    }
}

impl<const N: usize> AsMut<[u16]> for Flags<N> {
    fn as_mut(&mut self) -> &mut [u16] {
        &mut self.words
    }
}

impl<const N: usize> core::fmt::Debug for Flags<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.words.iter().map(|w| Word(*w)))
            .finish()
    }
}

struct Word(u16);

impl core::fmt::Debug for Word {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}
