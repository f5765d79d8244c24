//! Fixed-size bitset for digits
//!
//! Candidate bookkeeping intersects and copies sets of digits constantly.
//! A bitmask in a `u16` keeps those sets cheap while the newtype prevents
//! mixing raw masks with other integers.

use crate::board::Digit;
use crate::helper::Unsolvable;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

/// A set of digits `1..=9`, backed by the low 9 bits of a `u16`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DigitSet(u16);

/// Potential return value of [`DigitSet::unique`]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Empty;

impl From<Empty> for Unsolvable {
    fn from(_: Empty) -> Unsolvable {
        Unsolvable
    }
}

impl DigitSet {
    /// Set containing all nine digits
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Empty set
    pub const NONE: DigitSet = DigitSet(0);

    /// Returns the raw integer backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns the digits in this set that aren't present in `other`.
    pub fn without(self, other: Self) -> Self {
        DigitSet(self.0 & !other.0)
    }

    /// Deletes `digit` from this set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.as_set().0;
    }

    /// Checks if `digit` is in this set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & digit.as_set().0 != 0
    }

    /// Returns the number of digits in this set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains no digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the only digit in this set, iff exactly 1 digit exists.
    /// Returns `Err(Empty)` for an empty set and `Ok(None)` for more than
    /// one digit.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.0 {
            0 => Err(Empty),
            n if n.is_power_of_two() => Ok(self.into_iter().next()),
            _ => Ok(None),
        }
    }
}

impl Digit {
    /// Returns a `DigitSet` containing only this digit.
    pub fn as_set(self) -> DigitSet {
        DigitSet(1 << self.as_index())
    }
}

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl $trait for DigitSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Self) -> Self {
                    DigitSet($trait::$fn_name(self.0, other.0))
                }
            }

            impl $trait<Digit> for DigitSet {
                type Output = Self;

                #[inline(always)]
                fn $fn_name(self, other: Digit) -> Self {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl $trait for DigitSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }

            impl $trait<Digit> for DigitSet {
                #[inline(always)]
                fn $fn_name(&mut self, other: Digit) {
                    $trait::$fn_name(self, other.as_set())
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

/// Iterator over the digits in a [`DigitSet`], in ascending order
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Iter(u16);

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        debug_assert!(self.0 <= DigitSet::ALL.0);
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & self.0.wrapping_neg();
        self.0 ^= lowest_bit;
        Some(Digit::from_index(lowest_bit.trailing_zeros() as u8))
    }
}

impl std::iter::FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in iter {
            set |= digit;
        }
        set
    }
}
