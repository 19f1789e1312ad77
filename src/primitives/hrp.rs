// Written by Clark Moody and the rust-bitcoin developers.
// SPDX-License-Identifier: MIT

//! Provides an `Hrp` type that represents the human-readable part of a bech32 encoded string.
//!
//! > The human-readable part, which is intended to convey the type of data, or anything else that
//! > is relevant to the reader. This part MUST contain 1 to 83 US-ASCII characters, with each
//! > character having a value in the range [33-126]. HRP validity may be further restricted by
//! > specific applications.
//!
//! ref: [BIP-173](https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki#user-content-Bech32)

use core::fmt;
use core::str::FromStr;

/// Maximum length of the human-readable part, as defined by BIP-173.
const MAX_HRP_LEN: usize = 83;

/// The human-readable part (human readable prefix before the '1' separator).
///
/// Always stored in lowercase, which is the form the checksum is computed over.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hrp(String);

impl Hrp {
    /// Parses the human-readable part checking it is valid as defined by [BIP-173].
    ///
    /// This does _not_ check that the `hrp` is the Zilliqa namespace, use [`KnownHrp`] for that.
    /// An uppercase `hrp` is accepted and normalized to lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use zil_bech32::Hrp;
    ///
    /// assert_eq!(Hrp::parse("ZIL").expect("valid hrp").as_str(), "zil");
    /// assert!(Hrp::parse("Zil").is_err());
    /// ```
    ///
    /// [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki>
    pub fn parse(hrp: &str) -> Result<Self, Error> {
        use Error::*;

        if hrp.is_empty() {
            return Err(Empty);
        }
        if hrp.len() > MAX_HRP_LEN {
            return Err(TooLong(hrp.len()));
        }

        let mut has_lower: bool = false;
        let mut has_upper: bool = false;
        for b in hrp.bytes() {
            // Valid subset of ASCII
            if !(33..=126).contains(&b) {
                return Err(InvalidAsciiByte(b));
            }

            if b.is_ascii_lowercase() {
                has_lower = true;
            } else if b.is_ascii_uppercase() {
                has_upper = true;
            };

            if has_lower && has_upper {
                return Err(MixedCase);
            }
        }

        Ok(Hrp(hrp.to_ascii_lowercase()))
    }

    /// Returns the human-readable part as a lowercase string.
    pub fn as_str(&self) -> &str { &self.0 }

    /// Returns the lowercase ASCII bytes of the human-readable part.
    pub fn as_bytes(&self) -> &[u8] { self.0.as_bytes() }

    /// Returns the length (number of characters) of the human-readable part.
    ///
    /// Guaranteed to be between 1 and 83 inclusive.
    pub fn len(&self) -> usize { self.0.len() }

    /// The human-readable part is guaranteed to be between 1-83 characters.
    pub fn is_empty(&self) -> bool { false }
}

impl fmt::Display for Hrp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.0) }
}

impl FromStr for Hrp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Hrp::parse(s) }
}

impl PartialEq<str> for Hrp {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl PartialEq<&str> for Hrp {
    fn eq(&self, other: &&str) -> bool { self.0 == *other }
}

/// The human-readable parts in use on the Zilliqa network.
///
/// Mainnet, testnet and devnet all share the "zil" prefix.
#[derive(Copy, PartialEq, Eq, Clone, Hash, Debug)]
#[non_exhaustive]
pub enum KnownHrp {
    /// Zilliqa account addresses - "zil".
    Zilliqa,
}

impl KnownHrp {
    /// Returns the human-readable part as a lowercase string.
    pub fn as_str(self) -> &'static str {
        match self {
            KnownHrp::Zilliqa => "zil",
        }
    }
}

/// Parses a [`KnownHrp`] from a string.
///
/// # Examples
///
/// ```
/// # use core::str::FromStr;
/// # use zil_bech32::primitives::hrp::KnownHrp;
/// assert!(KnownHrp::from_str("randomvalidhrp").is_err());
/// assert_eq!(KnownHrp::from_str("zil").expect("zil is valid"), KnownHrp::Zilliqa);
/// assert_eq!(KnownHrp::from_str("ZIL").expect("uppercase is valid also"), KnownHrp::Zilliqa);
/// ```
impl FromStr for KnownHrp {
    type Err = UnknownHrpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zil" | "ZIL" => Ok(KnownHrp::Zilliqa),
            _ => Err(UnknownHrpError { unknown: s.to_string() }),
        }
    }
}

/// Creates an [`Hrp`] from a [`KnownHrp`].
///
/// # Examples
///
/// ```
/// # use zil_bech32::primitives::hrp::{Hrp, KnownHrp};
/// assert_eq!(Hrp::parse("zil").expect("zil is valid"), Hrp::from(KnownHrp::Zilliqa))
/// ```
impl From<KnownHrp> for Hrp {
    fn from(hrp: KnownHrp) -> Self { Hrp(hrp.as_str().to_owned()) }
}

/// Error if string is not a known Zilliqa HRP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHrpError {
    unknown: String,
}

impl fmt::Display for UnknownHrpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is not a known Zilliqa HRP", self.unknown)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownHrpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { None }
}

/// Errors encountered while checking the human-readable part as defined by [BIP-173].
///
/// [BIP-173]: <https://github.com/bitcoin/bips/blob/master/bip-0173.mediawiki#user-content-Bech32>
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The human-readable part is too long.
    TooLong(usize),
    /// The human-readable part is empty.
    Empty,
    /// Invalid byte (not within acceptable US-ASCII range).
    InvalidAsciiByte(u8),
    /// The human-readable part cannot mix upper and lower case.
    MixedCase,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            TooLong(len) => write!(
                f,
                "hrp is too long, found {} characters, must be <= {}",
                len, MAX_HRP_LEN
            ),
            Empty => write!(f, "hrp is empty, must have at least 1 character"),
            InvalidAsciiByte(b) => write!(f, "character is not valid US-ASCII: \'{:x}\'", b),
            MixedCase => write!(f, "hrp cannot mix upper and lower case"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            TooLong(_) | Empty | InvalidAsciiByte(_) | MixedCase => None,
        }
    }
}
