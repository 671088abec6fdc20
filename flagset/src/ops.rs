//! Flag accessors over caller-owned word storage.
//!
//! The plain accessors index the slice directly and panic when the flag's
//! word lies past the end of `storage`. The `try_*` forms report
//! [`Error::OutOfRange`] instead.

use crate::error::Error;
use crate::layout::{clr_bit, flag_to_word, set_bit, xor_bit, FlagId};

/// Whether `flag` addresses a word inside storage of `words` words.
pub fn contains(words: usize, flag: impl Into<FlagId>) -> bool {
    flag.into().word_index() < words
}

/// Test a flag.
pub fn get(storage: &[u16], flag: impl Into<FlagId>) -> bool {
    let (w, m) = flag_to_word(flag.into());
    (storage[w] & m) != 0
}

pub fn set(storage: &mut [u16], flag: impl Into<FlagId>) {
    let (w, m) = flag_to_word(flag.into());
    set_bit(&mut storage[w], m);
}

pub fn clear(storage: &mut [u16], flag: impl Into<FlagId>) {
    let (w, m) = flag_to_word(flag.into());
    clr_bit(&mut storage[w], m);
}

pub fn toggle(storage: &mut [u16], flag: impl Into<FlagId>) {
    let (w, m) = flag_to_word(flag.into());
    xor_bit(&mut storage[w], m);
}

/// Set `flag` when `value` is true, clear it otherwise.
pub fn assign(storage: &mut [u16], flag: impl Into<FlagId>, value: bool) {
    if value {
        set(storage, flag);
    } else {
        clear(storage, flag);
    }
}

/// The whole word holding `flag`.
pub fn word(storage: &[u16], flag: impl Into<FlagId>) -> u16 {
    storage[flag.into().word_index()]
}

pub fn word_mut(storage: &mut [u16], flag: impl Into<FlagId>) -> &mut u16 {
    &mut storage[flag.into().word_index()]
}

fn locate(words: usize, flag: FlagId) -> Result<(usize, u16), Error> {
    let (w, m) = flag_to_word(flag);
    if w >= words {
        log::debug!("rejected flag {:?}: storage holds {} words", flag, words);
        return Err(Error::OutOfRange { flag, words });
    }
    Ok((w, m))
}

pub fn try_get(storage: &[u16], flag: impl Into<FlagId>) -> Result<bool, Error> {
    let (w, m) = locate(storage.len(), flag.into())?;
    Ok((storage[w] & m) != 0)
}

pub fn try_set(storage: &mut [u16], flag: impl Into<FlagId>) -> Result<(), Error> {
    let (w, m) = locate(storage.len(), flag.into())?;
    set_bit(&mut storage[w], m);
    Ok(())
}

pub fn try_clear(storage: &mut [u16], flag: impl Into<FlagId>) -> Result<(), Error> {
    let (w, m) = locate(storage.len(), flag.into())?;
    clr_bit(&mut storage[w], m);
    Ok(())
}

pub fn try_toggle(storage: &mut [u16], flag: impl Into<FlagId>) -> Result<(), Error> {
    let (w, m) = locate(storage.len(), flag.into())?;
    xor_bit(&mut storage[w], m);
    Ok(())
}

pub fn try_word(storage: &[u16], flag: impl Into<FlagId>) -> Result<u16, Error> {
    let (w, _) = locate(storage.len(), flag.into())?;
    Ok(storage[w])
}
