/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants

#[cfg(feature = "to_bytes")]
use crate::errors::SerializationError;
#[cfg(feature = "to_bytes")]
use crate::tobytes::*;

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    ristretto::{
        RistrettoPoint,
        CompressedRistretto,
        RistrettoBasepointTable,
        VartimeRistrettoPrecomputation
    },
    traits::{
        Identity,
        IsIdentity,
        MultiscalarMul,
        VartimeMultiscalarMul,
        VartimePrecomputedMultiscalarMul
    }
};
pub use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &RistrettoBasepointTable = &constants::RISTRETTO_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: RistrettoPoint = constants::RISTRETTO_BASEPOINT_POINT;

lazy_static! {
    pub(crate) static ref G_MULTISCALAR_MUL: VartimeRistrettoPrecomputation = VartimeRistrettoPrecomputation::new(vec!(G_POINT));
}

///Encode a point to byte array for hashing purposes.
///
///This is the canonical 32-byte compressed Ristretto encoding,
///so `CompressedRistretto(bytes).decompress()` reverses it.
pub fn encode_point(point: &RistrettoPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Efficient batch encoding for multiple points to byte arrays for hashing purposes.
///
///The output always matches `encode_point` for each point,
///so encodings can be mixed freely between the two.
pub fn batch_encode_points(points: &[RistrettoPoint]) -> Vec<[u8; 32]> {
    return points.iter().map(encode_point).collect()
}

///Return a random scalar drawn from `rng`.
///
///64 bytes are reduced modulo the group order, so the result is uniform.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    let mut scalar_bytes = [0u8; 64];
    rng.fill_bytes(&mut scalar_bytes);
    let scalar = Scalar::from_bytes_mod_order_wide(&scalar_bytes);
    scalar_bytes.zeroize();
    return scalar
}

///Return a random point on the curve.
pub fn random_point<R: RngCore + CryptoRng>(rng: &mut R) -> RistrettoPoint {
    return &random_scalar(rng) * G;
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.reduce().to_bytes().to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let bytes: [u8; 32] = bytes.try_into()
            .map_err(|_| SerializationError::DecodingError)?;
        return Scalar::from_canonical_bytes(bytes)
            .ok_or(SerializationError::DecodingError)
    }
}

#[cfg(feature = "to_bytes")]
impl ToBytes<'_> for RistrettoPoint {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.compress().to_bytes().to_vec());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        if bytes.len() != 32 {
            return Err(SerializationError::DecodingError)
        }

        return CompressedRistretto::from_slice(bytes).decompress()
            .ok_or(SerializationError::DecodingError)
    }
}
