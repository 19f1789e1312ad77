// SPDX-License-Identifier: MIT

//! Degree-2 [BCH] code checksum used by bech32.
//!
//! The checksum is computed over the expanded human-readable part followed by the data symbols,
//! so a checksum created under one human-readable part never verifies under another.
//!
//! [BCH]: <https://en.wikipedia.org/wiki/BCH_code>

use crate::primitives::gf32::Fe32;
use crate::primitives::hrp::Hrp;

/// The number of symbols in a bech32 checksum.
pub const CHECKSUM_LENGTH: usize = 6;

/// The residue a valid bech32 codeword leaves, as defined in BIP-173.
pub const TARGET_RESIDUE: u32 = 1;

/// Bech32 generator coefficients, copied from Bitcoin Core src/bech32.cpp
pub const GEN: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Expands the human-readable part into symbols for checksum computation.
///
/// The high three bits of every character, a zero separator, then the low five bits of every
/// character.
pub fn hrp_expand(hrp: &Hrp) -> Vec<Fe32> {
    let bytes = hrp.as_bytes();
    let mut v = Vec::with_capacity(bytes.len() * 2 + 1);
    v.extend(bytes.iter().map(|b| Fe32::from_low_5_bits(b >> 5)));
    v.push(Fe32::Q);
    v.extend(bytes.iter().map(|b| Fe32::from_low_5_bits(*b)));
    v
}

/// Computes the bech32 checksum polynomial over `values`.
///
/// The result fits in 30 bits.
pub fn polymod(values: &[Fe32]) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ u32::from(v.to_u8());
        for (i, gen) in GEN.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

/// Creates the six checksum symbols for `data` under `hrp`.
pub fn create_checksum(hrp: &Hrp, data: &[Fe32]) -> [Fe32; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[Fe32::Q; CHECKSUM_LENGTH]);
    let plm = polymod(&values) ^ TARGET_RESIDUE;

    let mut checksum = [Fe32::Q; CHECKSUM_LENGTH];
    for (p, fe) in checksum.iter_mut().enumerate() {
        *fe = Fe32::from_low_5_bits((plm >> (5 * (5 - p))) as u8);
    }
    checksum
}

/// Verifies `data`, which must include its six trailing checksum symbols, under `hrp`.
pub fn verify_checksum(hrp: &Hrp, data: &[Fe32]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == TARGET_RESIDUE
}

#[cfg(test)]
mod tests {
    use core::convert::TryFrom;

    use super::*;
    use crate::primitives::hrp::KnownHrp;

    fn fes(values: &[u8]) -> Vec<Fe32> {
        values.iter().map(|v| Fe32::try_from(*v).unwrap()).collect()
    }

    #[test]
    fn expand_zil() {
        let hrp = Hrp::from(KnownHrp::Zilliqa);
        // 'z' = 0x7a, 'i' = 0x69, 'l' = 0x6c
        assert_eq!(hrp_expand(&hrp), fes(&[3, 3, 3, 0, 26, 9, 12]));
    }

    #[test]
    fn polymod_of_nothing_is_one() {
        assert_eq!(polymod(&[]), 1);
    }

    #[test]
    fn zil_expansion_residue() {
        let hrp = Hrp::from(KnownHrp::Zilliqa);
        assert_eq!(polymod(&hrp_expand(&hrp)), 81_615_253);
    }

    #[test]
    fn checksum_of_empty_data() {
        // "a12uel5l" from BIP-173
        let hrp = Hrp::parse("a").unwrap();
        let checksum = create_checksum(&hrp, &[]);
        let s = checksum.iter().map(|fe| fe.to_char()).collect::<String>();
        assert_eq!(s, "2uel5l");
        assert!(verify_checksum(&hrp, &checksum));
    }

    #[test]
    fn checksum_is_bound_to_hrp() {
        let zil = Hrp::from(KnownHrp::Zilliqa);
        let other = Hrp::parse("zip").unwrap();
        let mut data = fes(&[1, 2, 3, 4, 5]);
        data.extend_from_slice(&create_checksum(&zil, &data));

        assert!(verify_checksum(&zil, &data));
        assert!(!verify_checksum(&other, &data));
    }

    #[test]
    fn checksum_detects_substitution() {
        let hrp = Hrp::from(KnownHrp::Zilliqa);
        let mut data = fes(&[0; 32]);
        data.extend_from_slice(&create_checksum(&hrp, &data));

        for i in 0..data.len() {
            let mut corrupt = data.clone();
            corrupt[i] = Fe32::from_low_5_bits(corrupt[i].to_u8() ^ 1);
            assert!(!verify_checksum(&hrp, &corrupt), "substitution at {} not detected", i);
        }
    }
}
