// Written by Clark Moody and the rust-bitcoin developers.
// SPDX-License-Identifier: MIT

//! A single bech32 symbol.
//!
//! Every character of the data part of a bech32 string carries five bits. [`Fe32`] is the
//! element of GF(32) those five bits represent, together with the mapping to and from the
//! 32-character bech32 alphabet.

use core::convert::TryFrom;
use core::fmt;

/// The bech32 alphabet. Maps a symbol value to its (lowercase) character.
const CHARS_LOWER: [char; 32] = [
    'q', 'p', 'z', 'r', 'y', '9', 'x', '8', //  +0
    'g', 'f', '2', 't', 'v', 'd', 'w', '0', //  +8
    's', '3', 'j', 'n', '5', '4', 'k', 'h', // +16
    'c', 'e', '6', 'm', 'u', 'a', '7', 'l', // +24
];

/// Reverse alphabet. Maps an ASCII byte to its symbol value, or -1 for non-bech32 characters.
///
/// Upper and lowercase letters map to the same value.
#[rustfmt::skip]
const CHARS_INV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// An element of GF(32), i.e. a 5 bit value in the range `0..32`.
///
/// # Examples
///
/// ```
/// use core::convert::TryFrom;
/// use zil_bech32::Fe32;
///
/// let fe = Fe32::from_char('z').expect("z is in the bech32 alphabet");
/// assert_eq!(fe.to_u8(), 2);
/// assert_eq!(fe.to_char(), 'z');
/// assert_eq!(Fe32::try_from(2_u8), Ok(fe));
/// ```
// Maintains the invariant that inner is never greater than 31.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Fe32(u8);

impl Fe32 {
    /// The symbol with value 0, rendered as 'q'.
    pub const Q: Fe32 = Fe32(0);

    /// The number of bits carried by one symbol.
    pub const BITS: u32 = 5;

    /// Constructs a symbol from the low five bits of `value`, discarding the rest.
    #[inline]
    pub(crate) const fn from_low_5_bits(value: u8) -> Self { Fe32(value & 0x1f) }

    /// Looks up a character of the bech32 alphabet.
    ///
    /// Both cases are accepted; the case of the surrounding string is checked elsewhere.
    ///
    /// # Errors
    ///
    /// If `c` is not a bech32 character.
    pub fn from_char(c: char) -> Result<Fe32, Error> {
        // Only ASCII characters can index the table, everything else is invalid.
        let byte = u8::try_from(u32::from(c)).map_err(|_| Error::InvalidChar(c))?;
        match CHARS_INV.get(usize::from(byte)) {
            Some(&v) if v >= 0 => Ok(Fe32(v as u8)),
            _ => Err(Error::InvalidChar(c)),
        }
    }

    /// Returns the lowercase bech32 character for this symbol.
    #[inline]
    pub fn to_char(self) -> char { CHARS_LOWER[usize::from(self.0)] }

    /// Returns the underlying value, guaranteed to be less than 32.
    #[inline]
    pub const fn to_u8(self) -> u8 { self.0 }
}

impl TryFrom<u8> for Fe32 {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 31 {
            Err(Error::InvalidValue(value))
        } else {
            Ok(Fe32(value))
        }
    }
}

impl From<Fe32> for u8 {
    #[inline]
    fn from(fe: Fe32) -> u8 { fe.0 }
}

impl fmt::Display for Fe32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.to_char()) }
}

/// Errors constructing a [`Fe32`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The character is not part of the bech32 alphabet.
    InvalidChar(char),
    /// The value does not fit in five bits.
    InvalidValue(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            InvalidChar(c) => write!(f, "invalid bech32 character {:?}", c),
            InvalidValue(v) => write!(f, "value {} does not fit in 5 bits", v),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            InvalidChar(_) | InvalidValue(_) => None,
        }
    }
}
