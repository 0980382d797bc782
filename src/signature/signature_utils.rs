/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::internal_common::*;

///hash to point, specific for key image (`H_p`)
pub(crate) fn h_key_image_point(public_key: &PublicKey) -> RistrettoPoint {
    return domain_h_point(&public_key.encode(), domains::SIGNATURE_KEY_IMAGE);
}

///return the key image points for every key in the ring
pub(crate) fn get_key_image_points(ring: &Ring) -> Vec<RistrettoPoint> {
    return ring.iter()
        .map(h_key_image_point).collect();
}

///Given a private key and its key image point, return its key image
pub(crate) fn get_key_image(private_key: &Scalar, key_image_point: &RistrettoPoint) -> KeyImage {
    return KeyImage(private_key * key_image_point)
}

///Create the signed message digest, binding the ring (in order) and the key image.
pub(crate) fn create_message(encoded_ring: &[[u8; 32]], key_image: &KeyImage, msg: &[u8]) -> [u8; 32] {
    return domain_h_bytes(
        &[msg, &encoded_ring.concat(), &encode_point(&key_image.0)].concat(),
        domains::SIGNATURE_MESSAGE
    );
}

///Derive the next challenge from the message digest and the two commitments.
pub(crate) fn challenge(m: &[u8; 32], left: &RistrettoPoint, right: &RistrettoPoint) -> Scalar {
    let encoded = batch_encode_points(&[*left, *right]);
    return domain_h_scalar(
        &[m.as_slice(), &encoded[0], &encoded[1]].concat(),
        domains::SIGNATURE_CHALLENGE
    );
}

///Check the shape of a ring: size bounds and no identity keys.
pub(crate) fn check_ring(ring: &Ring) -> Result<(), SignatureError> {
    if ring.len() < 2 || ring.len() > MAX_RING_SIZE {
        tracing::debug!(ring_size = ring.len(), "rejecting ring: size out of bounds");
        return Err(SignatureError::InvalidRing)
    }
    if ring.iter().any(|key| key.0.is_identity()) {
        tracing::debug!(ring_size = ring.len(), "rejecting ring: identity key");
        return Err(SignatureError::InvalidRing)
    }
    return Ok(())
}

///Find the signer's position in the ring.
///
///The key must appear exactly once.
///Every member is compared and the index is selected without branching on the match,
///so the work done does not depend on where the signer sits.
pub(crate) fn find_signer(ring: &Ring, public_key: &PublicKey) -> Result<usize, SignatureError> {
    return find_signer_by(ring, |key| key.0.ct_eq(&public_key.0))
}

pub(crate) fn find_signer_by<F: FnMut(&PublicKey) -> Choice>(
    ring: &Ring, mut is_signer: F
) -> Result<usize, SignatureError> {
    let (matches, index) = ring.iter().enumerate()
        .fold((0u64, 0u64), |(matches, index), (i, key)| {
            let found = is_signer(key);
            (
                matches + u64::from(found.unwrap_u8()),
                u64::conditional_select(&index, &(i as u64), found)
            )
        });

    if matches != 1 {
        tracing::debug!(ring_size = ring.len(), "rejecting ring: signer key missing or duplicated");
        return Err(SignatureError::InvalidRing)
    }
    return Ok(index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn key_image_matches_private_key() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let key = PrivateKey::generate(&mut rng);
        let expected = key.scalar() * h_key_image_point(&key.public_key());
        assert_eq!(key.key_image().0, expected);
    }

    #[test]
    fn message_binds_ring_order() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let a = PublicKey::random_decoy(&mut rng);
        let b = PublicKey::random_decoy(&mut rng);
        let image = PrivateKey::generate(&mut rng).key_image();

        let forward = create_message(&Ring::from_keys(vec!(a, b)).encode(), &image, b"m");
        let backward = create_message(&Ring::from_keys(vec!(b, a)).encode(), &image, b"m");
        assert_ne!(forward, backward);
    }

    #[test]
    fn find_signer_requires_exactly_one_match() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let me = PrivateKey::generate(&mut rng).public_key();
        let other = PublicKey::random_decoy(&mut rng);

        assert_eq!(find_signer(&Ring::from_keys(vec!(other, me)), &me), Ok(1));
        assert_eq!(find_signer(&Ring::from_keys(vec!(other, other)), &me), Err(SignatureError::InvalidRing));
        assert_eq!(find_signer(&Ring::from_keys(vec!(me, other, me)), &me), Err(SignatureError::InvalidRing));
    }

    #[test]
    fn signer_lookup_compares_every_member() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let size = 7;
        let me = PrivateKey::generate(&mut rng).public_key();

        for index in 0..size {
            let mut ring = Ring::new();
            for _ in 0..size - 1 {
                ring.push(PublicKey::random_decoy(&mut rng));
            }
            ring.insert(index, me);

            let mut comparisons = 0;
            let found = find_signer_by(&ring, |key| {
                comparisons += 1;
                key.0.ct_eq(&me.0)
            });
            assert_eq!(found, Ok(index));
            assert_eq!(comparisons, size);
        }
    }

    #[test]
    fn check_ring_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let a = PublicKey::random_decoy(&mut rng);
        let b = PublicKey::random_decoy(&mut rng);

        assert!(check_ring(&Ring::from_keys(vec!(a, b))).is_ok());
        assert_eq!(check_ring(&Ring::from_keys(vec!(a))), Err(SignatureError::InvalidRing));
        assert_eq!(check_ring(&Ring::new()), Err(SignatureError::InvalidRing));
        assert_eq!(
            check_ring(&Ring::from_keys(vec!(a, PublicKey(RistrettoPoint::identity())))),
            Err(SignatureError::InvalidRing)
        );
    }
}
