//! Encrypts and decrypts the textbook message with the sample 3×3 key and prints the trace.

use hill_engine::{example_rows, render_trace, CipherEngine};

fn main() {
    let rows = example_rows(3).expect("3x3 sample key");
    let engine = CipherEngine::new();

    let cipher = engine.encrypt("ACT", &rows);
    assert_eq!(cipher.result, "POH");
    println!("{}", render_trace(&cipher.steps));

    let plain = engine.decrypt(&cipher.result, &rows);
    assert_eq!(plain.result, "ACT");

    println!("\nexample succeeded; ACT -> {} -> {}", cipher.result, plain.result);
}
