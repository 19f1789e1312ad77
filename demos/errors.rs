//! Demonstrate output from the various crate errors.

#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

fn main() {
    crate_decode();
    crate_encode();

    address_bech32_to_hex();
    address_hex_to_bech32();
    address_validate();

    batch_convert();

    primitives_hrp();
}

/// Demonstrates `zil_bech32::decode` errors.
fn crate_decode() {
    use zil_bech32::decode;
    let function = "zil_bech32::decode";

    // The arguments to pass to `function`.
    let strings = vec!["1qqq", "hrp1abc", "zil1Fwh4ltdg", " 1nwldj5", "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz8"];

    for s in strings {
        let err = decode(s).unwrap_err();
        println!("\n\n* Call `{}(\"{}\")` -> {:?}", function, s, err);
        println!("\n------------");
        print_source(&err);
        println!("------------");
    }
}

/// Demonstrates `zil_bech32::encode` errors.
fn crate_encode() {
    use zil_bech32::encode;
    let function = "zil_bech32::encode";

    let print = |hrp: &str, len: usize| {
        let err = encode(hrp, &vec![0; len]).unwrap_err();
        println!("\n\n* Call `{}(\"{}\", [0; {}])` -> {:?}", function, hrp, len, err);
        println!("\n------------");
        print_source(&err);
        println!("------------");
    };

    print("", 20);
    print("zil", 60);
}

/// Demonstrates `zil_bech32::address::bech32_to_hex` errors.
fn address_bech32_to_hex() {
    use zil_bech32::address::bech32_to_hex;
    let function = "zil_bech32::address::bech32_to_hex";

    // The arguments to pass to `function`.
    let strings = vec![
        "0x4baf5fada8e5db92c3d3242618c5b47133ae003c",
        "zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz8",
        "zil1x1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqx9fgqs",
        "zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq6a5ydc",
        "zil1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqk4vj3f",
    ];

    for s in strings {
        let err = bech32_to_hex(s).unwrap_err();
        println!("\n\n* Call `{}(\"{}\")` -> {:?}", function, s, err);
        println!("\n------------");
        print_source(&err);
        println!("------------");
    }
}

/// Demonstrates `zil_bech32::address::hex_to_bech32` errors.
fn address_hex_to_bech32() {
    use zil_bech32::address::hex_to_bech32;
    let function = "zil_bech32::address::hex_to_bech32";

    // The arguments to pass to `function`.
    let strings = vec!["0x1234", "0x4baf5fada8e5db92c3d3242618c5b47133ae003g"];

    for s in strings {
        let err = hex_to_bech32(s).unwrap_err();
        println!("\n\n* Call `{}(\"{}\")` -> {:?}", function, s, err);
        println!("\n------------");
        print_source(&err);
        println!("------------");
    }
}

/// Demonstrates `zil_bech32::address::validate` results.
fn address_validate() {
    use zil_bech32::address::validate;

    println!("\n\n* Validation results");
    println!("\n------------");
    for s in &["zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7", "4baf5fada8e5db92c3d3242618c5b47133ae003c", "hello"] {
        let result = validate(s);
        let error = result.error.map(|e| e.to_string()).unwrap_or_default();
        println!("{:?}: valid {} type {:?} {}", s, result.valid, result.address_type, error);
    }
    println!("------------");
}

/// Demonstrates `zil_bech32::batch::convert` errors.
fn batch_convert() {
    use zil_bech32::batch::{convert, MAX_BATCH_LEN};
    let function = "zil_bech32::batch::convert";

    let inputs = vec!["zil1fwh4ltdguhde9s7nysnp33d5wye6uqpugufkz7"; MAX_BATCH_LEN + 1];
    let err = convert(&inputs).unwrap_err();
    println!("\n\n* Call `{}([..; {}])` -> {:?}", function, inputs.len(), err);
    println!("\n------------");
    print_source(&err);
    println!("------------");
}

/// Demonstrates the `Hrp::Error` variants.
fn primitives_hrp() {
    use zil_bech32::primitives::hrp::Error::*;

    println!("\n\n* All errors when parsing an invalid HRP");
    let errs = vec![TooLong(99), Empty, InvalidAsciiByte(200), MixedCase];
    println!("\n------------");

    let last = errs.len() - 1;
    for (i, e) in errs.iter().enumerate() {
        println!("Debug: {:?}\nError: {}", e.clone(), e);
        if i != last {
            println!();
        }
    }
    println!("------------");
}

/// Prints `e` in a similar fashion to the output created by `anyhow`.
#[cfg(feature = "std")]
fn print_source(mut e: &dyn Error) {
    println!("Error: {}", e);

    let mut counter = 0;
    if e.source().is_some() {
        println!("\nCaused by: ");
    }
    while let Some(inner) = e.source() {
        println!("\t{}: {}", counter, inner);
        e = inner;
        counter += 1;
    }
}

#[cfg(not(feature = "std"))]
fn print_source(e: &dyn fmt::Display) { println!("{}", e) }
