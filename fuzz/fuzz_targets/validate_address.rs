use zil_bech32::address::{self, Address, AddressForms};
use honggfuzz::fuzz;

fn do_test(data: &[u8]) {
    let s = String::from_utf8_lossy(data);

    let result = address::validate(&s);
    assert_eq!(result.valid, result.error.is_none());

    if let Ok(forms) = AddressForms::parse(&s) {
        assert!(result.valid);
        let from_bech32 = Address::from_bech32(&forms.bech32).expect("own bech32 is valid");
        let from_hex = Address::from_hex(&forms.hex_with_prefix).expect("own hex is valid");
        assert_eq!(from_bech32, from_hex);
    }
}

fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}

#[cfg(test)]
mod tests {
    fn extend_vec_from_hex(hex: &str, out: &mut Vec<u8>) {
        let mut b = 0;
        for (idx, c) in hex.as_bytes().iter().filter(|&&c| c != b'\n').enumerate() {
            b <<= 4;
            match *c {
                b'A'..=b'F' => b |= c - b'A' + 10,
                b'a'..=b'f' => b |= c - b'a' + 10,
                b'0'..=b'9' => b |= c - b'0',
                _ => panic!("Bad hex"),
            }
            if (idx & 1) == 1 {
                out.push(b);
                b = 0;
            }
        }
    }

    #[test]
    fn duplicate_crash() {
        let mut a = Vec::new();
        extend_vec_from_hex("7a696c31", &mut a);
        super::do_test(&a);
    }
}
