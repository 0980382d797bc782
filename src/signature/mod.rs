/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Linkable ring signatures
//!
//!Given a private key and a ring containing its public key (along with decoys),
//!create a signature which proves that:
//! 1. one of the ring's keys authorizes the signature, without revealing which one
//! 2. the key image (accessible with `signature.key_image`) is correct,
//!    so two signatures by the same key can be linked

mod lsag;
mod signature_utils;

pub use lsag::LSAGSignature;

pub(crate) use signature_utils::{
    get_key_image,
    h_key_image_point
};
