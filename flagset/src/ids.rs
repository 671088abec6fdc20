/// Declare a `#[repr(u16)]` enum of named flags usable wherever a
/// [`FlagId`](crate::FlagId) is accepted.
///
/// Variants without an explicit value continue from the previous one, so a
/// plain list packs flags densely while hex values place them by word:
///
/// ```
/// flagset::flag_ids! {
///     pub enum Sightings {
///         Bob,            // word 0, bit 0
///         Alice,          // word 0, bit 1
///         Link = 0x10,    // word 1, bit 0
///         Zelda = 0x1A,   // word 1, bit 10
///     }
/// }
///
/// let mut flags = flagset::Flags::<2>::new();
/// flags.set(Sightings::Zelda);
/// assert_eq!(flags.words(), &[0x0000, 0x0400]);
/// ```
#[macro_export]
macro_rules! flag_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident $(= $value:expr)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant $(= $value)? ),*
        }

        impl $name {
            pub const fn id(self) -> $crate::FlagId {
                $crate::FlagId(self as u16)
            }
        }

        impl ::core::convert::From<$name> for $crate::FlagId {
            fn from(flag: $name) -> Self {
                flag.id()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::FlagId;

    crate::flag_ids! {
        enum Dense {
            First,
            Second,
            Third,
        }
    }

    crate::flag_ids! {
        /// Flags placed by word.
        enum Placed {
            Low = 0x05,
            Next,
            High = 0x1AC,
        }
    }

    #[test]
    fn implicit_values_count_up_from_zero() {
        assert_eq!(FlagId::from(Dense::First), FlagId(0));
        assert_eq!(FlagId::from(Dense::Second), FlagId(1));
        assert_eq!(Dense::Third.id(), FlagId(2));
    }

    #[test]
    fn explicit_values_place_flags_by_word() {
        assert_eq!(Placed::Low.id(), FlagId(0x05));
        assert_eq!(Placed::Next.id(), FlagId(0x06));
        assert_eq!(Placed::High.id().word_index(), 26);
        assert_eq!(Placed::High.id().bit_index(), 12);
    }
}
