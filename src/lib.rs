// Written by Clark Moody and the rust-bitcoin developers.
// SPDX-License-Identifier: MIT

//! Encoding and decoding of Zilliqa addresses.
//!
//! Zilliqa identifies accounts by 20 bytes, which are shown to users either as 40 hex digits or
//! as a bech32 string with the human-readable part `zil`. Bech32 is a 5-bit (base-32) encoding
//! scheme that produces strings that comprise a human-readable part, a separator, a data part,
//! and a checksum. The encoding implements a BCH code that guarantees error detection of up to
//! four characters with less than 1 in 1 billion chance of failing to detect more errors.
//!
//! The Bech32 encoding was originally formulated in [BIP-0173](https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki)
//!
//! The crate is layered, each layer usable on its own:
//!
//! * [`primitives`]: the checksum, the bit regrouping and the bech32 alphabet.
//! * The crate root: generic bech32 [`encode`] and [`decode`] for any human-readable part.
//! * [`address`]: Zilliqa addresses, conversion between bech32 and hex, and validation.
//! * [`batch`]: conversion of a bounded list of addresses in one call.
//!
//! # Examples
//!
//! ```
//! use zil_bech32::address;
//!
//! let hex = "0x4baf5fada8e5db92c3d3242618c5b47133ae003c";
//! let bech32 = address::hex_to_bech32(hex).expect("valid hex address");
//! assert_eq!(bech32, "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7");
//!
//! let back = address::bech32_to_hex(&bech32).expect("valid bech32 address");
//! assert_eq!(back, "4baf5fada8e5db92c3d3242618c5b47133ae003c");
//! ```
//!
//! Generic bech32 strings can be handled with the crate level functions.
//!
//! ```
//! let encoded = zil_bech32::encode("bech32", &[0xb4, 0xff, 0xa5]).expect("hrp is valid");
//! assert_eq!(encoded, "bech321knl623tk6v7");
//!
//! let decoded = zil_bech32::decode(&encoded).expect("valid bech32 string");
//! assert_eq!(decoded.hrp().as_str(), "bech32");
//! assert_eq!(decoded.to_bytes().expect("no padding issues"), vec![0xb4, 0xff, 0xa5]);
//! ```
//!
//! # Features
//!
//! * `std` (default): implements `std::error::Error` for all error types.
//! * `serde`: implements `Serialize` for the validation and batch result types.
//! * `parallel`: converts batches on the rayon thread pool.

#![cfg_attr(bench, feature(test))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions
#![deny(missing_docs)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]

#[cfg(bench)]
extern crate test;

pub mod address;
pub mod batch;
pub mod primitives;

use core::fmt;
use core::str::FromStr;

use internals::write_err;

use crate::primitives::checksum::{self, CHECKSUM_LENGTH};
use crate::primitives::convert;
#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use {
    crate::address::{Address, AddressForms, AddressType, ValidationResult},
    crate::primitives::convert::{convert_bits, FromBase32, ToBase32},
    crate::primitives::gf32::Fe32,
    crate::primitives::hrp::{self, Hrp, KnownHrp},
};

/// Human-readable part and data part separator.
pub const SEP: char = '1';

/// The maximum length of a bech32 string, as defined by BIP-173.
pub const MAX_STRING_LENGTH: usize = 90;

/// The minimum length of a bech32 string: one hrp character, the separator and a checksum.
const MIN_STRING_LENGTH: usize = 1 + 1 + CHECKSUM_LENGTH;

/// Grouping structure for the human-readable part and the data part of a bech32 string.
///
/// The data part does not include the checksum, it is computed when the value is displayed.
#[derive(PartialEq, Eq, Debug, Clone, PartialOrd, Ord, Hash)]
pub struct Bech32 {
    /// Human-readable part
    hrp: Hrp,
    /// Data payload
    data: Vec<Fe32>,
}

impl Bech32 {
    /// Constructs a `Bech32` struct from a human-readable part and already regrouped symbols.
    pub fn new(hrp: Hrp, data: Vec<Fe32>) -> Bech32 { Bech32 { hrp, data } }

    /// Constructs a `Bech32` struct from bytes, regrouping them into 5-bit symbols.
    pub fn from_bytes(hrp: Hrp, bytes: &[u8]) -> Bech32 {
        Bech32 { hrp, data: bytes.to_base32() }
    }

    /// Returns the human readable part.
    pub fn hrp(&self) -> &Hrp { &self.hrp }

    /// Returns the data part as 5-bit symbols, without the checksum.
    pub fn data(&self) -> &[Fe32] { &self.data }

    /// Regroups the data part into bytes.
    ///
    /// # Errors
    ///
    /// If the trailing bits of the data part are not valid zero padding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, convert::Error> { Vec::from_base32(&self.data) }

    /// Destructures the `Bech32` struct into its parts.
    pub fn into_parts(self) -> (Hrp, Vec<Fe32>) { (self.hrp, self.data) }

    /// Returns the length of the string this value encodes to.
    pub fn encoded_len(&self) -> usize { self.hrp.len() + 1 + self.data.len() + CHECKSUM_LENGTH }
}

impl fmt::Display for Bech32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let checksum = checksum::create_checksum(&self.hrp, &self.data);

        write!(f, "{}{}", self.hrp, SEP)?;
        for fe in self.data.iter().chain(checksum.iter()) {
            write!(f, "{}", fe.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Bech32 {
    type Err = DecodeError;

    /// Decode from a string, see [`decode`].
    fn from_str(s: &str) -> Result<Bech32, DecodeError> { decode(s) }
}

/// Encodes `data` as a lowercase bech32 string under the human-readable part `hrp`.
///
/// # Errors
///
/// If `hrp` is not a valid human-readable part, or if the encoded string would be longer than
/// [`MAX_STRING_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// let s = zil_bech32::encode("zil", &[0_u8; 20]).expect("20 bytes fit");
/// assert_eq!(s, "zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq9yf6pz");
/// ```
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, EncodeError> {
    let hrp = Hrp::parse(hrp)?;
    let bech32 = Bech32::from_bytes(hrp, data);

    let len = bech32.encoded_len();
    if len > MAX_STRING_LENGTH {
        return Err(EncodeError::TooLong(len));
    }
    Ok(bech32.to_string())
}

/// Decodes and verifies a bech32 string.
///
/// Either an all lowercase or an all uppercase string is accepted. The returned human-readable
/// part is lowercase and the data part excludes the checksum.
///
/// # Errors
///
/// Checks run in this order, the first failure is returned:
///
/// * [`DecodeError::InvalidLength`] if the string is not between 8 and 90 bytes long.
/// * [`DecodeError::MixedCase`] if the string contains both upper and lowercase letters.
/// * [`DecodeError::MissingSeparator`] or [`DecodeError::InvalidSeparatorPosition`] if the last
///   `'1'` does not split the string into a non-empty hrp and at least 6 checksum characters.
/// * [`DecodeError::InvalidHrp`] or [`DecodeError::InvalidChar`] if a character is invalid.
/// * [`DecodeError::InvalidChecksum`] if the checksum does not match.
pub fn decode(s: &str) -> Result<Bech32, DecodeError> {
    use DecodeError::*;

    // Ensure overall length is within bounds
    let len = s.len();
    if !(MIN_STRING_LENGTH..=MAX_STRING_LENGTH).contains(&len) {
        return Err(InvalidLength(len));
    }

    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let sep = s.rfind(SEP).ok_or(MissingSeparator)?;
    if sep < 1 || sep + 1 + CHECKSUM_LENGTH > len {
        return Err(InvalidSeparatorPosition(sep));
    }
    let (raw_hrp, raw_data) = (&s[..sep], &s[sep + 1..]);

    let hrp = Hrp::parse(raw_hrp)?;
    let mut data = raw_data
        .chars()
        .map(|c| Fe32::from_char(c).map_err(|_| InvalidChar(c)))
        .collect::<Result<Vec<Fe32>, DecodeError>>()?;

    if !checksum::verify_checksum(&hrp, &data) {
        return Err(InvalidChecksum);
    }

    // Every data character is ASCII at this point, so there are at least 6 symbols.
    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok(Bech32 { hrp, data })
}

/// Errors decoding a bech32 string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The string is shorter than 8 or longer than 90 bytes.
    InvalidLength(usize),
    /// The whole string must be of one case.
    MixedCase,
    /// String does not contain the separator character.
    MissingSeparator,
    /// The last separator leaves no room for the human-readable part or the checksum.
    InvalidSeparatorPosition(usize),
    /// Human-readable part is invalid.
    InvalidHrp(hrp::Error),
    /// The data part contains a character that is not in the bech32 alphabet.
    InvalidChar(char),
    /// The checksum does not match the rest of the data.
    InvalidChecksum,
}

impl DecodeError {
    /// Returns true if the string is well formed but its checksum is wrong.
    ///
    /// This usually means a typo in an otherwise valid string, as opposed to the input not being
    /// bech32 at all.
    pub fn is_checksum_error(&self) -> bool { matches!(self, DecodeError::InvalidChecksum) }
}

impl From<hrp::Error> for DecodeError {
    fn from(e: hrp::Error) -> Self { DecodeError::InvalidHrp(e) }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DecodeError::*;

        match *self {
            InvalidLength(len) => write!(
                f,
                "invalid bech32 length {}, must be between {} and {} characters",
                len, MIN_STRING_LENGTH, MAX_STRING_LENGTH
            ),
            MixedCase => write!(f, "mixed-case strings not allowed"),
            MissingSeparator => write!(f, "missing human-readable separator, \"{}\"", SEP),
            InvalidSeparatorPosition(pos) => write!(
                f,
                "separator \"{}\" at position {} must follow at least 1 and precede at least {} characters",
                SEP, pos, CHECKSUM_LENGTH
            ),
            InvalidHrp(ref e) => write_err!(f, "invalid human-readable part"; e),
            InvalidChar(c) => write!(f, "invalid bech32 character {:?}", c),
            InvalidChecksum => write!(f, "invalid bech32 checksum"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DecodeError::*;

        match *self {
            InvalidHrp(ref e) => Some(e),
            InvalidLength(_)
            | MixedCase
            | MissingSeparator
            | InvalidSeparatorPosition(_)
            | InvalidChar(_)
            | InvalidChecksum => None,
        }
    }
}

/// Errors encoding a bech32 string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// Human-readable part is invalid.
    InvalidHrp(hrp::Error),
    /// The encoded string would exceed the maximum bech32 length.
    TooLong(usize),
}

impl From<hrp::Error> for EncodeError {
    fn from(e: hrp::Error) -> Self { EncodeError::InvalidHrp(e) }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use EncodeError::*;

        match *self {
            InvalidHrp(ref e) => write_err!(f, "invalid human-readable part"; e),
            TooLong(len) => write!(
                f,
                "encoded string would be {} characters, the maximum is {}",
                len, MAX_STRING_LENGTH
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use EncodeError::*;

        match *self {
            InvalidHrp(ref e) => Some(e),
            TooLong(_) => None,
        }
    }
}
