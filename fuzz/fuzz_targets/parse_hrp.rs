use zil_bech32::Hrp;
use honggfuzz::fuzz;

fn do_test(data: &[u8]) {
    let s = String::from_utf8_lossy(data);

    // Make sure parsing garbage doesn't make us crash (from_utf8_lossy should
    // contain some garbage, perhaps even invalid chars).
    if let Ok(hrp) = Hrp::parse(&s) {
        assert_eq!(hrp.as_str(), s.to_ascii_lowercase());
        assert_eq!(Hrp::parse(hrp.as_str()), Ok(hrp.clone()));
    }
}

fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}
