use zil_bech32::address;
use honggfuzz::fuzz;

// Checks that we do not crash if passed random data while decoding.
fn do_test(data: &[u8]) {
    let data_str = String::from_utf8_lossy(data);
    if let Ok(bech32) = zil_bech32::decode(&data_str) {
        // Anything that decodes renders back to its lowercase form.
        assert_eq!(bech32.to_string(), data_str.to_lowercase());
        let _ = bech32.to_bytes();
    }
    let _ = address::bech32_to_hex(&data_str);
    let _ = address::hex_to_bech32(&data_str);
}

fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}
