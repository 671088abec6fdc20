use core::fmt;

use crate::layout::FlagId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The flag's word index is not below the storage length.
    OutOfRange { flag: FlagId, words: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { flag, words } => write!(
                f,
                "flag {:#06x} addresses word {} but storage holds {} words",
                flag.raw(),
                flag.word_index(),
                words
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn out_of_range_message() {
        let err = Error::OutOfRange {
            flag: FlagId(0x1AC),
            words: 2,
        };
        assert_eq!(
            err.to_string(),
            "flag 0x01ac addresses word 26 but storage holds 2 words"
        );
    }
}
