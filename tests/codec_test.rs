//! Integration tests for the identifier codec's public API.

use myident::ident::charset::{is_safe_char, ESCAPE_MARKER};
use myident::ident::codec::{
    decode, encode, escapes, is_valid_encoding, requires_decoding, requires_encoding, runs,
    RunKind,
};
use myident::MyIdentError;

/// Names seen in real data directories plus a few awkward ones.
const NAMES: &[&str] = &[
    "",
    "employees",
    "sales_2024",
    "$tmp$",
    "my-app",
    "my.app.db",
    "order details",
    "a!!b",
    "#sql-1f2a_3",
    "back`tick",
    "quote'and\"double",
    "slash/and\\back",
    "tab\there",
    "línea_ñ",
    "Ünïcödé",
    "データベース",
    "表_1",
    "😀",
    "rocket🚀ship",
    "\u{7f}\u{80}\u{ffff}",
    "already@0040escaped",
];

#[test]
fn round_trip_for_every_sample() {
    for name in NAMES {
        let encoded = encode(name);
        assert_eq!(&decode(&encoded).unwrap(), name, "encoded form {:?}", encoded);
    }
}

#[test]
fn encoded_output_is_always_valid() {
    for name in NAMES {
        let encoded = encode(name);
        assert!(
            encoded.chars().all(|c| is_safe_char(c) || c == ESCAPE_MARKER),
            "{:?} -> {:?}",
            name,
            encoded
        );
        assert!(is_valid_encoding(&encoded), "{:?} -> {:?}", name, encoded);
    }
}

#[test]
fn requires_decoding_matches_marker_presence() {
    for name in NAMES {
        assert_eq!(requires_decoding(name), name.contains('@'));
        let encoded = encode(name);
        assert_eq!(requires_decoding(&encoded), encoded.contains('@'));
    }
}

#[test]
fn encode_changes_exactly_the_names_that_require_it() {
    for name in NAMES {
        assert_eq!(encode(name) != *name, requires_encoding(name), "{:?}", name);
    }
}

#[test]
fn runs_reassemble_the_input() {
    for name in NAMES {
        let joined: String = runs(name).map(|r| r.text).collect();
        assert_eq!(&joined, name);

        let kinds: Vec<RunKind> = runs(name).map(|r| r.kind).collect();
        assert!(
            kinds.windows(2).all(|w| w[0] != w[1]),
            "runs of {:?} must alternate",
            name
        );
    }
}

#[test]
fn escape_count_matches_utf16_units() {
    for name in NAMES {
        let encoded = encode(name);
        let unsafe_units: usize = name
            .chars()
            .filter(|c| !is_safe_char(*c))
            .map(char::len_utf16)
            .sum();
        assert_eq!(encoded.matches('@').count(), unsafe_units, "{:?}", name);

        let decoded_chars: usize = escapes(&encoded).unwrap().len();
        assert_eq!(
            decoded_chars,
            name.chars().filter(|c| !is_safe_char(*c)).count()
        );
    }
}

#[test]
fn documented_examples() {
    assert_eq!(encode("this.has.periods"), "this@002ehas@002eperiods");
    assert_eq!(decode("this@002ehas@002eperiods").unwrap(), "this.has.periods");
    assert_eq!(encode(""), "");
    assert!(!requires_encoding(""));
    assert_eq!(encode("safe_name123"), "safe_name123");
    assert_eq!(encode("a!!b"), "a@0021@0021b");
}

#[test]
fn malformed_escapes_are_rejected() {
    for bad in ["@00", "@", "x@", "@xyz1", "ab@12", "a@002e@0", "user@example.com"] {
        match decode(bad) {
            Err(MyIdentError::InvalidEncodingFormat(msg)) => assert!(!msg.is_empty()),
            other => panic!("{:?} should be rejected, got {:?}", bad, other),
        }
        assert!(requires_decoding(bad));
        assert!(!is_valid_encoding(bad));
    }
}
