use legaldb_core::error::Error;
use legaldb_vector::codec::{approx_eq, decode, encode};
use legaldb_vector::cosine_distance;

#[test]
fn encode_decode_round_trips() {
    let v = vec![1.0f32, -2.5, 0.000_123, 4_096.75];
    let wire = encode(&v);
    let back = decode(&wire).expect("decode");
    assert!(approx_eq(&v, &back, 1e-6));
}

#[test]
fn empty_vector_has_explicit_wire_form() {
    assert_eq!(encode(&[]), "[]");
    assert_eq!(decode("[]").expect("decode"), Vec::<f32>::new());
    assert_eq!(decode("[ ]").expect("decode"), Vec::<f32>::new());
}

#[test]
fn decode_rejects_malformed_wire_forms() {
    for wire in ["", "1.0,2.0", "[1.0,two]", "[1.0,]"] {
        match decode(wire) {
            Err(Error::MalformedVector(_)) => {}
            other => panic!("expected MalformedVector for {wire:?}, got {other:?}"),
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    let v = vec![0.3f32, -0.4, 0.5, 0.1];
    assert!(cosine_distance(&v, &v).abs() < 1e-6);
}

#[test]
fn degenerate_vectors_are_maximally_dissimilar() {
    let v = vec![0.3f32, 0.4];
    let zeros = vec![0.0f32, 0.0];
    assert_eq!(cosine_distance(&v, &zeros), 1.0);
    assert_eq!(cosine_distance(&zeros, &v), 1.0);
    assert_eq!(cosine_distance(&v, &[]), 1.0);
    assert_eq!(cosine_distance(&[], &[]), 1.0);
}

#[test]
fn opposite_vectors_approach_two() {
    let a = vec![1.0f32, 0.0];
    let b = vec![-1.0f32, 0.0];
    assert!((cosine_distance(&a, &b) - 2.0).abs() < 1e-6);
}

#[test]
fn mismatched_lengths_pair_over_shorter_prefix() {
    let a = vec![1.0f32, 0.0];
    let b = vec![1.0f32, 0.0, 9.9];
    let d = cosine_distance(&a, &b);
    assert!((0.0..=2.0).contains(&d));
}
