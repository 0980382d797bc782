/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::slice::Iter;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::SignatureError;
use crate::hashes::{domain_h_scalar, domains};
use crate::signature::{
    get_key_image,
    h_key_image_point
};

use zeroize::Zeroize;

///The largest ring accepted by signing and verification.
pub const MAX_RING_SIZE: usize = 1 << 16;

///A public key: `x * G` for some private key `x`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKey(
    pub RistrettoPoint

); impl PublicKey {
    ///Return the elliptic curve point which represents this key.
    pub fn to_point(&self) -> RistrettoPoint {
        return self.0
    }

    ///Canonical 32-byte encoding of this key.
    pub fn encode(&self) -> [u8; 32] {
        return encode_point(&self.0)
    }

    ///Generate a random public key with no known private key, for use as a decoy.
    pub fn random_decoy<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        return Self(random_point(rng))
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for PublicKey {}

///A private key, together with its public key.
///
///The public key is derived once on creation.
///**This should never be shared or serialized.**
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: Scalar,
    public: PublicKey

} impl PrivateKey {
    ///Wrap a scalar as a private key.
    ///
    ///Returns `CryptoFailure` for the zero scalar, whose public key would be the identity.
    pub fn from_scalar(scalar: Scalar) -> Result<Self, SignatureError> {
        if scalar == Scalar::zero() {
            return Err(SignatureError::CryptoFailure)
        }
        return Ok(Self {
            scalar,
            public: PublicKey(&scalar * G)
        })
    }

    ///Generate a random new private key.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            if let Ok(key) = Self::from_scalar(random_scalar(rng)) {
                return key
            }
        }
    }

    ///Deterministically convert a seed into a private key.
    pub fn from_seed(mut bytes: [u8; 32]) -> Result<Self, SignatureError> {
        let scalar = domain_h_scalar(&bytes, domains::PRIVATE_KEY_SEED);
        bytes.zeroize();
        return Self::from_scalar(scalar)
    }

    ///Return the public key of this private key.
    pub fn public_key(&self) -> PublicKey {
        return self.public
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        return &self.scalar
    }

    ///Return the key image of this private key.
    ///
    ///The key image is the same for every signature made with this key.
    pub fn key_image(&self) -> KeyImage {
        return get_key_image(&self.scalar, &h_key_image_point(&self.public))
    }

} impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        //never print the scalar
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }

} impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.scalar.zeroize();
    }

} impl Drop for PrivateKey {
    fn drop(&mut self) {
        //clear the keys from memory to improve security
        self.zeroize()
    }
}

///The key image of a signature: `x * H_p(x * G)`.
///
///Two signatures with equal key images were made with the same private key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyImage(
    pub RistrettoPoint

); impl KeyImage {
    ///Return the elliptic curve point which represents this key image.
    pub fn to_point(&self) -> RistrettoPoint {
        return self.0
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for KeyImage {}

///A Ring represents the ordered public keys of a ring signature.
///
///This is a wrapper type for `Vec<PublicKey>`.
///The internal `Vec` can be accessed with `ring.0`.
///Order matters: a signature only verifies against the exact ordering it was signed with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ring(pub Vec<PublicKey>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Creates a ring from a list of keys, keeping their order.
    pub fn from_keys(keys: Vec<PublicKey>) -> Self {
        return Self(keys);
    }

    ///Appends a key to the ring.
    pub fn push(&mut self, value: PublicKey) {
        self.0.push(value);
    }

    ///Inserts a key at position `index` within the ring, shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, element: PublicKey) {
        self.0.insert(index, element);
    }

    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, PublicKey> {
        return self.0.iter()
    }

    ///How many times `key` appears in the ring.
    pub fn count_of(&self, key: &PublicKey) -> usize {
        return self.0.iter().filter(|member| *member == key).count()
    }

    ///Sorts the ring by encoding and removes duplicates.
    ///
    ///Placing keys in canonical order means the signer's position
    ///reveals nothing about how the ring was assembled.
    pub fn sort(&mut self) {
        let mut encoded: Vec<([u8; 32], PublicKey)> = self.0.iter()
            .map(|key| (key.encode(), *key)).collect();
        encoded.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        encoded.dedup_by(|a, b| a.0 == b.0);
        self.0 = encoded.into_iter().map(|(_, key)| key).collect();
    }

    ///Checks if the ring is sorted and has no duplicates.
    pub fn is_sorted(&self) -> bool {
        let encoded: Vec<[u8; 32]> = self.0.iter().map(|key| key.encode()).collect();
        return encoded.windows(2)
            .all(|keys| keys[0] < keys[1])
    }

    ///Canonical encodings of every key, in ring order.
    pub(crate) fn encode(&self) -> Vec<[u8; 32]> {
        return self.0.iter().map(|key| key.encode()).collect()
    }

} impl From<Vec<PublicKey>> for Ring {
    fn from(keys: Vec<PublicKey>) -> Self {
        return Self(keys)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Ring {}
