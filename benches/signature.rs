// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 10] = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024];

use ringsig::{
    common::*,
    signature::LSAGSignature
};

fn random_ring(x: usize) -> (PrivateKey, Ring) {
    let my_key = PrivateKey::generate(&mut thread_rng());
    let mut ring: Ring = Ring::new();
    for _ in 0..(x - 1) {
        ring.push(PublicKey::random_decoy(&mut thread_rng()));
    }
    ring.insert(thread_rng().gen::<usize>() % x, my_key.public_key());
    return (my_key, ring)
}

fn lsag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("LSAG");
    group.sample_size(20);

    //sign
    for x in RING_SIZES {
        let params = random_ring(x);
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &params,
            |b, (my_key, ring)| b.iter(|| {
                LSAGSignature::sign(my_key, ring, b"abcdef").unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let (my_key, ring) = random_ring(x);
        let sig = LSAGSignature::sign(&my_key, &ring, b"abcdef").unwrap();

        let params = (sig, ring);
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &params,
            |b, (sig, ring)| b.iter(|| {
                LSAGSignature::verify(sig, ring, b"abcdef").unwrap()
            }));
    }
}


criterion_group!(signature_lsag, lsag_benchmark);
criterion_main!(signature_lsag);
