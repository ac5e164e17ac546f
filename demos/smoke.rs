//! Smoke test for kmp-dfa: prints an automaton and runs a few searches

use kmp_dfa::{search, Kmp};

fn main() {
    println!("Running kmp-dfa smoke tests...\n");

    test_dump();
    test_bytes();
    test_chars();
    test_empty_pattern();

    println!("\n✅ All smoke tests passed!");
}

fn test_dump() {
    let kmp = Kmp::new(b"ABABAC").unwrap();
    print!("{}", kmp);
    assert_eq!(kmp.find(b"BCBAABACAABABACAA"), Some(9));
    println!("✓ Dump and search");
}

fn test_bytes() {
    assert_eq!(search(b"abc", b"xabcabc"), Ok(Some(1)));
    assert_eq!(search(b"aaa", b"aa"), Ok(None));
    assert_eq!(search(b"abab", b"ababab"), Ok(Some(0)));
    println!("✓ Byte patterns");
}

fn test_chars() {
    let kmp = Kmp::from_symbols("wörld".chars()).unwrap();
    assert_eq!(kmp.find_str("hello wörld"), Some(6));
    println!("✓ Char patterns");
}

fn test_empty_pattern() {
    match Kmp::<u8>::new(b"") {
        Err(e) => println!("✓ Empty pattern rejected: {}", e),
        Ok(_) => panic!("empty pattern should be rejected"),
    }
}
