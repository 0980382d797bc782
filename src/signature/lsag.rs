/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::internal_common::*;
use super::signature_utils::*;

///A linkable ring signature.
///
///LSAG stands for "Linkable Spontaneous Anonymous Group (signature)".
///
///For a ring `P_0..P_{n-1}`, key image `I` and message digest `m`,
///every position `i` satisfies
///`c[i+1] = H_s(m, r[i]*G + c[i]*P_i, r[i]*H_p(P_i) + c[i]*I)`,
///with indices taken modulo `n`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LSAGSignature {
    pub key_image: KeyImage,
    pub c: Vec<Scalar>,
    pub r: Vec<Scalar>,

} impl LSAGSignature {
    ///Create a signature given a ring, the private key of one of its members, and a message.
    ///
    ///Randomness is drawn from the operating system.
    ///Returns `SignatureError::InvalidRing` if the ring has fewer than 2 keys,
    ///or if the signer's public key is not in it exactly once.
    pub fn sign(
        private_key: &PrivateKey, ring: &Ring, msg: &[u8]
    ) -> Result<Self, SignatureError> {
        return Self::sign_with_rng(private_key, ring, msg, &mut OsRng)
    }

    ///Same as `sign`, except randomness is drawn from `rng`.
    ///
    ///`rng` is advanced by every call, so two signatures never share nonces.
    ///**Never** pass a freshly seeded deterministic generator outside of tests.
    pub fn sign_with_rng<R: RngCore + CryptoRng>(
        private_key: &PrivateKey, ring: &Ring, msg: &[u8], rng: &mut R
    ) -> Result<Self, SignatureError> {
        check_ring(ring)?;
        let j = find_signer(ring, &private_key.public_key())?;
        let n = ring.len();
        let x = private_key.scalar();

        let key_image_points = get_key_image_points(ring);
        let key_image = get_key_image(x, &key_image_points[j]);
        if key_image.0.is_identity() {
            return Err(SignatureError::CryptoFailure)
        }

        let m = create_message(&ring.encode(), &key_image, msg);

        //draw the same amount of randomness wherever the signer sits;
        //the signer's response is overwritten when the ring is closed
        let mut alpha = random_scalar(rng);
        let mut r: Vec<Scalar> = (0..n).map(|_| random_scalar(rng)).collect();
        let mut c: Vec<Scalar> = vec!(Scalar::zero(); n);

        let mut left = &alpha * G;
        let mut right = alpha * key_image_points[j];
        let mut i = j;
        for _ in 1..n {
            c[(i + 1) % n] = challenge(&m, &left, &right);
            i = (i + 1) % n;

            //(r[i] * G) + (c[i] * ring[i])
            left = RistrettoPoint::multiscalar_mul(
                &[r[i], c[i]], &[G_POINT, ring.0[i].0]
            );
            //(r[i] * key_image_points[i]) + (c[i] * key_image)
            right = RistrettoPoint::multiscalar_mul(
                &[r[i], c[i]], &[key_image_points[i], key_image.0]
            );
        }
        //i is now the position just before the signer
        c[(i + 1) % n] = challenge(&m, &left, &right);

        r[j] = alpha - (c[j] * x);
        alpha.zeroize();

        tracing::trace!(ring_size = n, "created ring signature");

        return Ok(Self {
            key_image,
            c,
            r
        })
    }

    ///Given a signature, the ring it was signed with (in the same order), and the message, check if it's valid.
    ///
    ///Returns `Ok(true)` if every challenge in the chain is reproduced and the chain closes,
    ///`Ok(false)` if it does not,
    ///or `Err(SignatureError)` if the inputs are malformed and verification could not be attempted.
    pub fn verify(
        signature: &LSAGSignature, ring: &Ring, msg: &[u8]
    ) -> Result<bool, SignatureError> {
        let LSAGSignature {
            key_image,
            c,
            r
        } = signature;

        if c.len() != r.len() || c.len() != ring.len() {
            tracing::debug!(
                ring_size = ring.len(), challenges = c.len(), responses = r.len(),
                "rejecting signature: length mismatch"
            );
            return Err(SignatureError::MalformedSignature)
        }
        check_ring(ring)?;
        if key_image.0.is_identity() {
            tracing::debug!("rejecting signature: identity key image");
            return Err(SignatureError::MalformedSignature)
        }

        let n = ring.len();
        let key_image_points = get_key_image_points(ring);
        let m = create_message(&ring.encode(), key_image, msg);

        //travel around the ring
        let mut e_i = c[0];
        let mut valid = true;
        for i in 0..n {
            //(r[i] * G) + (e_i * ring[i])
            let left = G_MULTISCALAR_MUL.vartime_mixed_multiscalar_mul(
                &[r[i]], &[e_i], &[ring.0[i].0]
            );
            //(r[i] * key_image_points[i]) + (e_i * key_image)
            let right = RistrettoPoint::vartime_multiscalar_mul(
                &[r[i], e_i], &[key_image_points[i], key_image.0]
            );

            e_i = challenge(&m, &left, &right);
            //the last comparison checks that we end up back where we started
            valid &= e_i == c[(i + 1) % n];
        }

        tracing::trace!(ring_size = n, valid, "verified ring signature");
        return Ok(valid)
    }

    ///Check if two signatures were created with the same private key.
    pub fn is_linked(&self, other: &LSAGSignature) -> bool {
        return self.key_image == other.key_image
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for LSAGSignature {}
