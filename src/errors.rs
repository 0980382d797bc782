/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
}

///Ring signature errors.
///
///A signature which is well-formed but does not verify is **not** an error:
///`LSAGSignature::verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    ///The ring is too short or too long,
    ///contains an invalid key,
    ///or the signer's public key is missing or appears more than once.
    #[error("Invalid ring.")]
    InvalidRing,
    ///The signature is malformed in some way:
    ///mismatched lengths, or out-of-range scalar/point encodings.
    #[error("Malformed signature or parameters.")]
    MalformedSignature,
    ///A group operation produced a value that must never occur for correct inputs,
    ///such as the identity point or a zero private key.
    #[error("Cryptographic failure.")]
    CryptoFailure,
}
