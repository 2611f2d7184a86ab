#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn splits_at_first_equals() {
    let var = EnvVar::split(b"A=B=C").unwrap();
    assert_eq!(var.name, b"A");
    assert_eq!(var.value, b"B=C");
}

#[test]
fn splits_simple_entry() {
    let var = EnvVar::split(b"HOME=/root").unwrap();
    assert_eq!(var.name, b"HOME");
    assert_eq!(var.value, b"/root");
}

#[test]
fn splits_empty_value() {
    let var = EnvVar::split(b"NAME=").unwrap();
    assert_eq!(var.name, b"NAME");
    assert_eq!(var.value, b"");
}

#[test]
fn splits_empty_name() {
    let var = EnvVar::split(b"=rest").unwrap();
    assert_eq!(var.name, b"");
    assert_eq!(var.value, b"rest");
}

#[test]
fn rejects_entry_without_equals() {
    assert!(EnvVar::split(b"JUNK").is_none());
    assert!(EnvVar::split(b"").is_none());
}

#[test]
fn preserves_arbitrary_value_bytes() {
    let raw = [0xff, b'=', 0x80, 0x00, b'\''];
    let var = EnvVar::split(&raw).unwrap();
    assert_eq!(var.name, &[0xff]);
    assert_eq!(var.value, &[0x80, 0x00, b'\'']);
}
