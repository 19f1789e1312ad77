// SPDX-License-Identifier: MIT

//! Zilliqa account addresses.
//!
//! An account is identified by 20 bytes which users see in one of two forms:
//!
//! * bech32 with the human-readable part `zil`, for example
//!   `zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7`;
//! * 40 hex digits, with or without a `0x` prefix, for example
//!   `0x4baf5fada8e5db92c3d3242618c5b47133ae003c`.
//!
//! # Examples
//!
//! ```
//! use zil_bech32::address::{self, AddressType};
//!
//! let result = address::validate("zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7");
//! assert!(result.valid);
//! assert_eq!(result.address_type, Some(AddressType::Bech32));
//!
//! // A typo in the bech32 form is caught by the checksum.
//! let result = address::validate("zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz8");
//! assert!(!result.valid);
//! assert!(result.error.expect("invalid").is_checksum_error());
//! ```

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use hex::{DisplayHex, FromHex, HexToArrayError};
use internals::write_err;

use crate::primitives::convert::{self, FromBase32};
use crate::primitives::hrp::{Hrp, KnownHrp};
use crate::DecodeError;

/// The number of bytes in a Zilliqa account address.
pub const ADDRESS_LEN: usize = 20;

/// The number of hex digits in a Zilliqa account address.
pub const HEX_LEN: usize = ADDRESS_LEN * 2;

/// Every bech32 Zilliqa address starts with the human-readable part and the separator.
pub const BECH32_PREFIX: &str = "zil1";

/// Optional prefix of a hex address.
pub const HEX_PREFIX: &str = "0x";

/// A 20 byte Zilliqa account address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Decodes a bech32 address, for example `zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7`.
    ///
    /// The `zil1` prefix is matched exactly, so the all uppercase form of an address is rejected
    /// here even though it is valid bech32.
    pub fn from_bech32(s: &str) -> Result<Address, Error> {
        if !s.starts_with(BECH32_PREFIX) {
            return Err(Error::MissingBech32Prefix);
        }

        let (hrp, data) = crate::decode(s)?.into_parts();
        if hrp != KnownHrp::Zilliqa.as_str() {
            return Err(Error::HrpMismatch(hrp.as_str().to_owned()));
        }

        let bytes = Vec::from_base32(&data)?;
        Address::from_slice(&bytes)
    }

    /// Parses 40 hex digits of either case, optionally prefixed with `0x`.
    pub fn from_hex(s: &str) -> Result<Address, Error> {
        let hex = s.strip_prefix(HEX_PREFIX).unwrap_or(s);

        let len = hex.chars().count();
        if len != HEX_LEN {
            return Err(Error::InvalidHexLength(len));
        }
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexChar(c));
        }

        let bytes = <[u8; ADDRESS_LEN]>::from_hex(hex)?;
        Ok(Address(bytes))
    }

    /// Constructs an address from a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Address, Error> {
        <[u8; ADDRESS_LEN]>::try_from(bytes)
            .map(Address)
            .map_err(|_| Error::InvalidPayloadLength(bytes.len()))
    }

    /// Returns the canonical lowercase bech32 form.
    pub fn to_bech32(&self) -> String {
        crate::Bech32::from_bytes(Hrp::from(KnownHrp::Zilliqa), &self.0).to_string()
    }

    /// Returns the lowercase hex form without a prefix, the "Zilliqa hex format".
    pub fn to_hex(&self) -> String { self.0.as_slice().to_lower_hex_string() }

    /// Returns the lowercase hex form with a `0x` prefix.
    pub fn to_prefixed_hex(&self) -> String { format!("{}{}", HEX_PREFIX, self.to_hex()) }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] { &self.0 }

    /// Returns every rendering of this address.
    pub fn forms(&self) -> AddressForms {
        let hex = self.to_hex();
        AddressForms {
            bech32: self.to_bech32(),
            hex_with_prefix: format!("{}{}", HEX_PREFIX, hex),
            hex,
        }
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self { Address(bytes) }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.to_bech32()) }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses either form, detected with [`sniff`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match sniff(s) {
            Some(AddressType::Bech32) => Address::from_bech32(s),
            Some(AddressType::Hex) => Address::from_hex(s),
            None => Err(Error::UnrecognizedFormat),
        }
    }
}

/// Converts a bech32 address to 40 lowercase hex digits without a prefix.
///
/// # Examples
///
/// ```
/// let hex = zil_bech32::address::bech32_to_hex("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq9yf6pz")
///     .expect("valid address");
/// assert_eq!(hex, "0".repeat(40));
/// ```
pub fn bech32_to_hex(s: &str) -> Result<String, Error> { Ok(Address::from_bech32(s)?.to_hex()) }

/// Converts a hex address, with or without `0x`, to its bech32 form.
///
/// # Examples
///
/// ```
/// let bech32 = zil_bech32::address::hex_to_bech32("0x4BAF5FADA8E5DB92C3D3242618C5B47133AE003C")
///     .expect("valid address");
/// assert_eq!(bech32, "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7");
/// ```
pub fn hex_to_bech32(s: &str) -> Result<String, Error> { Ok(Address::from_hex(s)?.to_bech32()) }

/// The two ways of writing an address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// `zil1...` bech32 form.
    Bech32,
    /// 40 hex digits, optionally `0x` prefixed.
    Hex,
}

impl AddressType {
    /// Returns the lowercase name of the form.
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::Bech32 => "bech32",
            AddressType::Hex => "hex",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Detects which form `s` claims to be, without validating it.
///
/// A `zil1` prefix is checked first, then a `0x` prefix or exactly 40 hex digits.
pub fn sniff(s: &str) -> Option<AddressType> {
    if s.starts_with(BECH32_PREFIX) {
        Some(AddressType::Bech32)
    } else if s.starts_with(HEX_PREFIX)
        || (s.len() == HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit()))
    {
        Some(AddressType::Hex)
    } else {
        None
    }
}

/// Outcome of [`validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the input is a well formed address.
    pub valid: bool,
    /// The form the input was recognized as, `None` if neither.
    pub address_type: Option<AddressType>,
    /// Why the input is invalid, `None` if it is valid.
    pub error: Option<Error>,
}

/// Validates an address in either form.
///
/// Never fails, the outcome including the reason for rejection is in the returned value.
pub fn validate(s: &str) -> ValidationResult {
    let address_type = sniff(s);
    let error = match address_type {
        Some(AddressType::Bech32) => Address::from_bech32(s).err(),
        Some(AddressType::Hex) => Address::from_hex(s).err(),
        None => Some(Error::UnrecognizedFormat),
    };
    log::trace!("validated {:?} as {:?}: {:?}", s, address_type, error);

    ValidationResult { valid: error.is_none(), address_type, error }
}

/// An address rendered in every supported form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressForms {
    /// Lowercase bech32.
    pub bech32: String,
    /// Lowercase hex without a prefix.
    pub hex: String,
    /// Lowercase hex with a `0x` prefix.
    pub hex_with_prefix: String,
}

impl AddressForms {
    /// Parses an address in either form and renders all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use zil_bech32::AddressForms;
    ///
    /// let forms = AddressForms::parse("4baf5fada8e5db92c3d3242618c5b47133ae003c").expect("valid");
    /// assert_eq!(forms.bech32, "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7");
    /// assert_eq!(forms.hex_with_prefix, "0x4baf5fada8e5db92c3d3242618c5b47133ae003c");
    /// ```
    pub fn parse(s: &str) -> Result<AddressForms, Error> { Ok(s.parse::<Address>()?.forms()) }
}

/// Errors parsing a Zilliqa address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A bech32 address does not start with `zil1`.
    MissingBech32Prefix,
    /// The bech32 string is malformed.
    Bech32(DecodeError),
    /// The bech32 string decoded under a human-readable part other than `zil`.
    HrpMismatch(String),
    /// The bech32 data part does not regroup into whole bytes.
    Padding(convert::Error),
    /// The payload is not 20 bytes.
    InvalidPayloadLength(usize),
    /// The hex form is not 40 characters, after stripping `0x`.
    InvalidHexLength(usize),
    /// The hex form contains a character that is not a hex digit.
    InvalidHexChar(char),
    /// The hex form could not be decoded.
    Hex(HexToArrayError),
    /// The input looks like neither a bech32 nor a hex address.
    UnrecognizedFormat,
}

impl Error {
    /// Returns true if the input is a well formed bech32 string with a wrong checksum.
    pub fn is_checksum_error(&self) -> bool {
        match *self {
            Error::Bech32(ref e) => e.is_checksum_error(),
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            MissingBech32Prefix => write!(f, "bech32 address must start with {}", BECH32_PREFIX),
            Bech32(ref e) => write_err!(f, "invalid bech32 address"; e),
            HrpMismatch(ref hrp) => write!(
                f,
                "human-readable part {:?} does not match {:?}",
                hrp,
                KnownHrp::Zilliqa.as_str()
            ),
            Padding(ref e) => write_err!(f, "invalid bech32 address payload"; e),
            InvalidPayloadLength(len) =>
                write!(f, "address payload is {} bytes, must be {}", len, ADDRESS_LEN),
            InvalidHexLength(len) => write!(
                f,
                "hex address has {} characters, must be {} excluding the {} prefix",
                len, HEX_LEN, HEX_PREFIX
            ),
            InvalidHexChar(c) => write!(f, "invalid hex character {:?}", c),
            Hex(ref e) => write_err!(f, "invalid hex address"; e),
            UnrecognizedFormat => write!(
                f,
                "unrecognized address format, expected {}... or {} hex characters",
                BECH32_PREFIX, HEX_LEN
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            Bech32(ref e) => Some(e),
            Padding(ref e) => Some(e),
            Hex(ref e) => Some(e),
            MissingBech32Prefix
            | HrpMismatch(_)
            | InvalidPayloadLength(_)
            | InvalidHexLength(_)
            | InvalidHexChar(_)
            | UnrecognizedFormat => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self { Error::Bech32(e) }
}

impl From<convert::Error> for Error {
    fn from(e: convert::Error) -> Self { Error::Padding(e) }
}

impl From<HexToArrayError> for Error {
    fn from(e: HexToArrayError) -> Self { Error::Hex(e) }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{AddressForms, AddressType, ValidationResult};

    impl Serialize for AddressType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for ValidationResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ValidationResult", 3)?;
            state.serialize_field("valid", &self.valid)?;
            state.serialize_field("type", &self.address_type)?;
            state.serialize_field("error", &self.error.as_ref().map(|e| e.to_string()))?;
            state.end()
        }
    }

    impl Serialize for AddressForms {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("AddressForms", 3)?;
            state.serialize_field("bech32", &self.bech32)?;
            state.serialize_field("hexZilliqaFormat", &self.hex)?;
            state.serialize_field("hexWithPrefix", &self.hex_with_prefix)?;
            state.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_BECH32: &str = "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7";
    const KNOWN_HEX: &str = "4baf5fada8e5db92c3d3242618c5b47133ae003c";

    #[test]
    fn known_address_both_ways() {
        assert_eq!(bech32_to_hex(KNOWN_BECH32).unwrap(), KNOWN_HEX);
        assert_eq!(hex_to_bech32(KNOWN_HEX).unwrap(), KNOWN_BECH32);
    }

    #[test]
    fn valid_address_pairs() {
        let pairs = [
            ("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq9yf6pz", "0000000000000000000000000000000000000000"),
            ("zil1llllllllllllllllllllllllllllllllf4g4xg", "ffffffffffffffffffffffffffffffffffffffff"),
            ("zil1qy352euf40x77qfrg4ncn27dauqjx3t8lppx3p", "0123456789abcdef0123456789abcdef01234567"),
        ];
        for (bech32, hex) in pairs.iter() {
            assert_eq!(bech32_to_hex(bech32).unwrap(), *hex);
            assert_eq!(hex_to_bech32(hex).unwrap(), *bech32);
        }
    }

    #[test]
    fn hex_prefix_and_case_are_ignored() {
        let upper = KNOWN_HEX.to_uppercase();
        let prefixed = format!("0x{}", KNOWN_HEX);
        let prefixed_upper = format!("0x{}", upper);
        for input in [KNOWN_HEX, upper.as_str(), prefixed.as_str(), prefixed_upper.as_str()].iter() {
            assert_eq!(hex_to_bech32(input).unwrap(), KNOWN_BECH32, "input {}", input);
        }
    }

    #[test]
    fn invalid_bech32() {
        let pairs: Vec<(&str, Error)> = vec![
            ("0x4baf5fada8e5db92c3d3242618c5b47133ae003c", Error::MissingBech32Prefix),
            ("ZIL1FWH4LTDGUHDE9S7NYSNP33D5WYE6UQPUGUFKZ7", Error::MissingBech32Prefix),
            ("bc1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqmql8k8", Error::MissingBech32Prefix),
            (
                "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz8",
                Error::Bech32(DecodeError::InvalidChecksum),
            ),
            (
                "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufKz7",
                Error::Bech32(DecodeError::MixedCase),
            ),
            (
                "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkzb",
                Error::Bech32(DecodeError::InvalidChar('b')),
            ),
            (
                "zil1x1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqx9fgqs",
                Error::HrpMismatch("zil1x".to_owned()),
            ),
            ("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq6a5ydc", Error::InvalidPayloadLength(19)),
            ("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqquzevp9", Error::InvalidPayloadLength(21)),
            ("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqk4vj3f", Error::Padding(convert::Error::InvalidPadding)),
            ("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqp8tq3s2", Error::Padding(convert::Error::InvalidPadding)),
            ("zil13q4z0c", Error::InvalidPayloadLength(0)),
        ];
        for (s, expected_error) in pairs {
            assert_eq!(Address::from_bech32(s), Err(expected_error), "testing input '{}'", s);
        }
    }

    #[test]
    fn invalid_hex() {
        let pairs: Vec<(&str, Error)> = vec![
            ("", Error::InvalidHexLength(0)),
            ("0x", Error::InvalidHexLength(0)),
            ("4baf5fada8e5db92c3d3242618c5b47133ae003", Error::InvalidHexLength(39)),
            ("0x4baf5fada8e5db92c3d3242618c5b47133ae003c00", Error::InvalidHexLength(42)),
            ("0x4baf5fada8e5db92c3d3242618c5b47133ae003g", Error::InvalidHexChar('g')),
            ("4baf5fada8e5db92c3d3242618c5b47133ae00 c", Error::InvalidHexChar(' ')),
            ("0x4baf5fada8e5db92c3d3242618c5b47133ae003\u{e9}", Error::InvalidHexChar('\u{e9}')),
        ];
        for (s, expected_error) in pairs {
            assert_eq!(Address::from_hex(s), Err(expected_error), "testing input '{}'", s);
        }
    }

    #[test]
    fn sniffing() {
        assert_eq!(sniff(KNOWN_BECH32), Some(AddressType::Bech32));
        assert_eq!(sniff("zil1"), Some(AddressType::Bech32));
        assert_eq!(sniff(KNOWN_HEX), Some(AddressType::Hex));
        assert_eq!(sniff("0x12"), Some(AddressType::Hex));
        assert_eq!(sniff("4BAF5FADA8E5DB92C3D3242618C5B47133AE003C"), Some(AddressType::Hex));
        assert_eq!(sniff("4baf5fada8e5db92c3d3242618c5b47133ae003"), None);
        assert_eq!(sniff("ZIL1FWH4LTDGUHDE9S7NYSNP33D5WYE6UQPUGUFKZ7"), None);
        assert_eq!(sniff(""), None);
    }

    #[test]
    fn validate_reports_type_and_error() {
        let ok = validate(KNOWN_BECH32);
        assert_eq!(ok, ValidationResult { valid: true, address_type: Some(AddressType::Bech32), error: None });

        let ok = validate(&format!("0x{}", KNOWN_HEX));
        assert_eq!(ok, ValidationResult { valid: true, address_type: Some(AddressType::Hex), error: None });

        // Checksum valid but 19 bytes long.
        let short = validate("zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq6a5ydc");
        assert!(!short.valid);
        assert_eq!(short.address_type, Some(AddressType::Bech32));
        assert_eq!(short.error, Some(Error::InvalidPayloadLength(19)));

        let short_hex = validate("0x1234");
        assert!(!short_hex.valid);
        assert_eq!(short_hex.address_type, Some(AddressType::Hex));
        assert_eq!(short_hex.error, Some(Error::InvalidHexLength(4)));

        let unknown = validate("hello");
        assert_eq!(
            unknown,
            ValidationResult { valid: false, address_type: None, error: Some(Error::UnrecognizedFormat) }
        );
    }

    #[test]
    fn address_accessors() {
        let address: Address = KNOWN_BECH32.parse().unwrap();
        assert_eq!(address, KNOWN_HEX.parse::<Address>().unwrap());
        assert_eq!(address.to_string(), KNOWN_BECH32);
        assert_eq!(address.to_prefixed_hex(), format!("0x{}", KNOWN_HEX));
        assert_eq!(Address::from(*address.as_bytes()), address);
        assert_eq!(Address::from_slice(&[0; 3]), Err(Error::InvalidPayloadLength(3)));
        assert_eq!("nope".parse::<Address>(), Err(Error::UnrecognizedFormat));
    }

    #[test]
    fn forms() {
        let forms = AddressForms::parse(KNOWN_BECH32).unwrap();
        assert_eq!(
            forms,
            AddressForms {
                bech32: KNOWN_BECH32.to_owned(),
                hex: KNOWN_HEX.to_owned(),
                hex_with_prefix: format!("0x{}", KNOWN_HEX),
            }
        );
        assert_eq!(AddressForms::parse(&forms.hex_with_prefix).unwrap(), forms);
    }

    #[test]
    fn error_messages_name_the_rule() {
        assert_eq!(Error::MissingBech32Prefix.to_string(), "bech32 address must start with zil1");
        assert!(Error::Bech32(DecodeError::InvalidChecksum).is_checksum_error());
        assert!(!Error::InvalidPayloadLength(19).is_checksum_error());
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_source_is_the_decode_error() {
        use std::error::Error as _;

        let err = Address::from_bech32("zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz8").unwrap_err();
        let source = err.source().expect("has a source");
        assert_eq!(source.to_string(), "invalid bech32 checksum");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_shapes() {
        let json = serde_json::to_value(validate(KNOWN_BECH32)).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true, "type": "bech32", "error": null }));

        let json = serde_json::to_value(validate("hello")).unwrap();
        assert_eq!(json["type"], serde_json::Value::Null);
        assert_eq!(json["error"], Error::UnrecognizedFormat.to_string());

        let json = serde_json::to_value(AddressForms::parse(KNOWN_HEX).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bech32": KNOWN_BECH32,
                "hexZilliqaFormat": KNOWN_HEX,
                "hexWithPrefix": format!("0x{}", KNOWN_HEX),
            })
        );
    }
}

#[cfg(bench)]
mod benches {
    use test::{black_box, Bencher};

    #[bench]
    fn bech32_to_hex(bh: &mut Bencher) {
        let addr = black_box("zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7");

        bh.iter(|| {
            let hex = super::bech32_to_hex(&addr).expect("address is well formed");
            black_box(&hex);
        })
    }

    #[bench]
    fn hex_to_bech32(bh: &mut Bencher) {
        let hex = black_box("0x4baf5fada8e5db92c3d3242618c5b47133ae003c");

        bh.iter(|| {
            let addr = super::hex_to_bech32(&hex).expect("hex is well formed");
            black_box(&addr);
        })
    }

    #[bench]
    fn validate(bh: &mut Bencher) {
        let addr = black_box("zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7");

        bh.iter(|| {
            let result = super::validate(&addr);
            black_box(&result);
        })
    }
}
