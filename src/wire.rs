/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! JSON wire format for a signature together with the ring it was signed over.
//!
//! ```json
//! {
//!   "signature": { "keyImage": "<hex>", "c": ["<hex>", ...], "r": ["<hex>", ...] },
//!   "publicKeys": ["<hex>", ...]
//! }
//! ```
//!
//! Scalars are 32-byte little-endian canonical encodings,
//! points are 32-byte compressed Ristretto encodings,
//! both as 64 lowercase hex characters. A leading `0x` is accepted when decoding.

use crate::internal_common::*;
use crate::signature::LSAGSignature;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSignature {
    key_image: String,
    c: Vec<String>,
    r: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBundle {
    signature: WireSignature,
    public_keys: Vec<String>,
}

fn decode_hex_32(input: &str) -> Result<[u8; 32], SignatureError> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(input.strip_prefix("0x").unwrap_or(input), &mut bytes)
        .map_err(|_| SignatureError::MalformedSignature)?;
    return Ok(bytes)
}

///Encode a scalar as 64 hex characters.
pub fn scalar_to_hex(scalar: &Scalar) -> String {
    return hex::encode(scalar.reduce().to_bytes())
}

///Decode a scalar from hex, rejecting anything which is not a canonical encoding.
pub fn scalar_from_hex(input: &str) -> Result<Scalar, SignatureError> {
    return Scalar::from_canonical_bytes(decode_hex_32(input)?)
        .ok_or(SignatureError::MalformedSignature)
}

///Encode a point as 64 hex characters.
pub fn point_to_hex(point: &RistrettoPoint) -> String {
    return hex::encode(encode_point(point))
}

///Decode a point from hex, rejecting anything which is not a valid Ristretto encoding.
pub fn point_from_hex(input: &str) -> Result<RistrettoPoint, SignatureError> {
    return CompressedRistretto(decode_hex_32(input)?).decompress()
        .ok_or(SignatureError::MalformedSignature)
}

///A signature bundled with the exact ring (including order) it was signed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedBundle {
    pub signature: LSAGSignature,
    pub ring: Ring

} impl SignedBundle {
    pub fn new(signature: LSAGSignature, ring: Ring) -> Self {
        return Self { signature, ring }
    }

    ///Verify the bundled signature against `msg`.
    pub fn verify(&self, msg: &[u8]) -> Result<bool, SignatureError> {
        return LSAGSignature::verify(&self.signature, &self.ring, msg)
    }

    ///Encode this bundle as JSON.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        let wire = WireBundle {
            signature: WireSignature {
                key_image: point_to_hex(&self.signature.key_image.0),
                c: self.signature.c.iter().map(scalar_to_hex).collect(),
                r: self.signature.r.iter().map(scalar_to_hex).collect(),
            },
            public_keys: self.ring.iter().map(|key| point_to_hex(&key.0)).collect(),
        };
        return serde_json::to_string(&wire)
            .map_err(|_| SerializationError::EncodingError)
    }

    ///Decode a bundle from JSON.
    ///
    ///Any syntax error, missing field, or invalid scalar/point encoding
    ///is reported as `SignatureError::MalformedSignature`.
    ///Lengths are not checked here; `verify` does that.
    pub fn from_json(json: &str) -> Result<Self, SignatureError> {
        let wire: WireBundle = serde_json::from_str(json).map_err(|err| {
            tracing::debug!(%err, "rejecting bundle: invalid JSON");
            SignatureError::MalformedSignature
        })?;

        let key_image = KeyImage(point_from_hex(&wire.signature.key_image)?);
        let c = wire.signature.c.iter()
            .map(|s| scalar_from_hex(s))
            .collect::<Result<Vec<Scalar>, SignatureError>>()?;
        let r = wire.signature.r.iter()
            .map(|s| scalar_from_hex(s))
            .collect::<Result<Vec<Scalar>, SignatureError>>()?;
        let ring = wire.public_keys.iter()
            .map(|key| point_from_hex(key).map(PublicKey))
            .collect::<Result<Vec<PublicKey>, SignatureError>>()?;

        return Ok(Self {
            signature: LSAGSignature { key_image, c, r },
            ring: Ring(ring)
        })
    }
}
