// SPDX short identifier: Unlicense

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde_json::Value;

use ringsig::{
    common::*,
    signature::LSAGSignature,
    wire::*
};

fn signed_bundle(seed: u64, msg: &[u8]) -> SignedBundle {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let signer = PrivateKey::generate(&mut rng);
    let mut ring = Ring::new();
    for _ in 0..4 {
        ring.push(PublicKey::random_decoy(&mut rng));
    }
    ring.push(signer.public_key());
    ring.sort();

    let signature = LSAGSignature::sign_with_rng(&signer, &ring, msg, &mut rng).unwrap();
    return SignedBundle::new(signature, ring)
}

#[test]
fn json_round_trip() {
    let bundle = signed_bundle(1, b"hello");
    let json = bundle.to_json().unwrap();

    let parsed = SignedBundle::from_json(&json).unwrap();
    assert_eq!(parsed, bundle);
    assert_eq!(parsed.verify(b"hello"), Ok(true));
    assert_eq!(parsed.verify(b"hellp"), Ok(false));
}

#[test]
fn json_shape() {
    let bundle = signed_bundle(2, b"shape");
    let value: Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();

    let signature = &value["signature"];
    assert_eq!(signature["keyImage"].as_str().unwrap().len(), 64);
    assert_eq!(signature["c"].as_array().unwrap().len(), 5);
    assert_eq!(signature["r"].as_array().unwrap().len(), 5);
    assert_eq!(value["publicKeys"].as_array().unwrap().len(), 5);

    for key in value["publicKeys"].as_array().unwrap() {
        let key = key.as_str().unwrap();
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }
}

#[test]
fn public_key_order_survives_the_wire() {
    let bundle = signed_bundle(3, b"order");
    let mut value: Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();

    value["publicKeys"].as_array_mut().unwrap().swap(0, 1);
    let swapped = SignedBundle::from_json(&value.to_string()).unwrap();
    assert_eq!(swapped.verify(b"order"), Ok(false));
}

#[test]
fn bad_encodings_are_malformed() {
    let bundle = signed_bundle(4, b"bad");
    let json = bundle.to_json().unwrap();
    let original: Value = serde_json::from_str(&json).unwrap();

    //not JSON at all
    assert_eq!(SignedBundle::from_json("{"), Err(SignatureError::MalformedSignature));
    //missing fields
    assert_eq!(SignedBundle::from_json("{\"signature\": {}}"), Err(SignatureError::MalformedSignature));

    //non-canonical scalar (the group order itself)
    let mut value = original.clone();
    value["signature"]["c"][0] = Value::from(hex::encode(constants::BASEPOINT_ORDER.to_bytes()));
    assert_eq!(SignedBundle::from_json(&value.to_string()), Err(SignatureError::MalformedSignature));

    //wrong width
    let mut value = original.clone();
    value["signature"]["r"][1] = Value::from("abcd");
    assert_eq!(SignedBundle::from_json(&value.to_string()), Err(SignatureError::MalformedSignature));

    //not hex
    let mut value = original.clone();
    value["signature"]["keyImage"] = Value::from("z".repeat(64));
    assert_eq!(SignedBundle::from_json(&value.to_string()), Err(SignatureError::MalformedSignature));

    //not a valid Ristretto encoding
    let mut value = original.clone();
    value["publicKeys"][2] = Value::from("ff".repeat(32));
    assert_eq!(SignedBundle::from_json(&value.to_string()), Err(SignatureError::MalformedSignature));
}

#[test]
fn length_mismatch_is_reported_by_verify() {
    let bundle = signed_bundle(5, b"len");
    let mut value: Value = serde_json::from_str(&bundle.to_json().unwrap()).unwrap();
    value["signature"]["r"].as_array_mut().unwrap().pop();

    let parsed = SignedBundle::from_json(&value.to_string()).unwrap();
    assert_eq!(parsed.verify(b"len"), Err(SignatureError::MalformedSignature));
}
