// SPDX short identifier: Unlicense

use rand::thread_rng;

use ringsig::{
    PrivateKey,
    PublicKey,
    Ring,
    signature::LSAGSignature,
    wire::SignedBundle,
};

const DECOYS: usize = 4;

fn main() {
    let message = std::env::args().nth(1).unwrap_or_else(|| "hello".to_string());

    //Create the signer's private key.
    //In practice this would be an existing key,
    //but for demonstration it will just be randomly generated.
    let signer = PrivateKey::generate(&mut thread_rng());

    let mut ring: Ring = Ring::new();
    for _ in 0..DECOYS {
        //Random decoy keys, nobody knows their private keys.
        ring.push(PublicKey::random_decoy(&mut thread_rng()));
    }
    ring.push(signer.public_key());

    //If the signer's key was simply always placed at the end,
    //then everyone would know who signed it, which defeats the purpose.
    ring.sort();

    //The message is signed as raw bytes; text encoding is up to the caller.
    let signature = LSAGSignature::sign(&signer, &ring, message.as_bytes())
        .expect("Real software should have proper error handling.");

    //The verifier needs the exact ring, in order, so it travels with the signature.
    let json = SignedBundle::new(signature, ring).to_json()
        .expect("Real software should have proper error handling.");
    println!("Signature and public keys:\n{json}");

    let bundle = SignedBundle::from_json(&json)
        .expect("Real software should have proper error handling.");
    let valid = bundle.verify(message.as_bytes())
        .expect("Real software should have proper error handling.");
    println!("Verification result: {}", if valid { "Valid" } else { "Invalid" });

    let tampered = format!("{message}!");
    let valid = bundle.verify(tampered.as_bytes())
        .expect("Real software should have proper error handling.");
    println!("Verification of {tampered:?}: {}", if valid { "Valid" } else { "Invalid" });

    //Key images will always be the same when signing with the same key,
    //regardless of other ring members or the message.
    assert!(bundle.signature.key_image == signer.key_image());
}
