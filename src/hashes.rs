/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain separated hashing to bytes, scalars and curve points.
//!
//! Every hash is Blake2b over `msg || domain`.
//! 32-byte outputs use Blake2b-256, scalars and points use Blake2b-512
//! so that the wide reduction / Elligator map sees uniform input.

use blake2::{
    Blake2b,
    Digest,
    digest::consts::{U32, U64}
};
use crate::curve::*;

type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;

fn wide_digest(msg: &[u8], domain: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::default();
    hasher.update(msg);
    hasher.update(domain);
    let mut digest = [0u8; 64];
    digest.copy_from_slice(hasher.finalize().as_slice());
    return digest
}

///Hash bytes to bytes, domain separated.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::default();
    hasher.update(msg);
    hasher.update(domain);
    let mut digest = [0u8; 32];
    digest.copy_from_slice(hasher.finalize().as_slice());
    return digest
}

///Hash bytes to elliptic curve point, domain separated (`HashToPoint`).
pub fn domain_h_point(msg: &[u8], domain: &[u8]) -> RistrettoPoint {
    return RistrettoPoint::from_uniform_bytes(&wide_digest(msg, domain));
}

///Hash bytes to scalar, domain separated (`HashToScalar`).
pub fn domain_h_scalar(msg: &[u8], domain: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order_wide(&wide_digest(msg, domain));
}

pub mod domains {
    //! Pre-defined hash domains

    pub const SIGNATURE_KEY_IMAGE: &[u8] =  "lsag_key_img".as_bytes();
    pub const SIGNATURE_MESSAGE: &[u8] =    "lsag_msg".as_bytes();
    pub const SIGNATURE_CHALLENGE: &[u8] =  "lsag_challenge".as_bytes();

    pub const PRIVATE_KEY_SEED: &[u8] =     "lsag_seed".as_bytes();
}
