//! Criterion benchmarks for ShareSeal crypto: keygen, multiply, encapsulate, seal/open, encrypt/decrypt.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use shareseal_core::Commitment;
use shareseal_crypto::{
    decrypt, encapsulate, encrypt, generate_keypair, multiply, open, seal,
};

fn bench_keygen(c: &mut Criterion) {
    let mut g = c.benchmark_group("keygen");
    g.throughput(Throughput::Elements(1));
    g.bench_function("generate_keypair", |b| {
        b.iter(|| black_box(generate_keypair()));
    });
    g.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let dealer = generate_keypair();
    let recipient = generate_keypair();
    let mut g = c.benchmark_group("multiply");
    g.throughput(Throughput::Elements(1));
    g.bench_function("multiply", |b| {
        b.iter(|| black_box(multiply(&recipient.public, &dealer.secret)).unwrap());
    });
    g.finish();
}

fn bench_encapsulate(c: &mut Criterion) {
    let dealer = generate_keypair();
    let recipient = generate_keypair();
    let commit = Commitment::new(b"vector-1".to_vec());
    let mut g = c.benchmark_group("encapsulate");
    g.throughput(Throughput::Elements(1));
    g.bench_function("encapsulate", |b| {
        b.iter(|| black_box(encapsulate(&dealer.secret, &recipient.public, &commit)).unwrap());
    });
    g.finish();
}

fn bench_aead(c: &mut Criterion) {
    let dealer = generate_keypair();
    let recipient = generate_keypair();
    let commit = Commitment::new(b"vector-1".to_vec());
    let key = encapsulate(&dealer.secret, &recipient.public, &commit).unwrap();
    let payload = vec![0xABu8; 1024];
    let sealed = seal(&key, &payload).unwrap();

    let mut g = c.benchmark_group("aead_1kib");
    g.throughput(Throughput::Bytes(payload.len() as u64));
    g.bench_function("seal", |b| {
        b.iter(|| black_box(seal(&key, &payload)).unwrap());
    });
    g.bench_function("open", |b| {
        b.iter(|| black_box(open(&key, sealed.as_bytes())).unwrap());
    });
    g.finish();
}

fn bench_envelope(c: &mut Criterion) {
    let dealer = generate_keypair();
    let recipient = generate_keypair();
    let commit = Commitment::new(b"vector-1".to_vec());
    let payload = vec![0xABu8; 1024];
    let sealed = encrypt(&recipient.public, &dealer.secret, &commit, &payload).unwrap();

    let mut g = c.benchmark_group("envelope_1kib");
    g.throughput(Throughput::Bytes(payload.len() as u64));
    g.bench_function("encrypt", |b| {
        b.iter(|| {
            black_box(encrypt(&recipient.public, &dealer.secret, &commit, &payload)).unwrap()
        });
    });
    g.bench_function("decrypt", |b| {
        b.iter(|| {
            black_box(decrypt(
                &recipient.secret,
                &dealer.public,
                &commit,
                sealed.as_bytes(),
            ))
            .unwrap()
        });
    });
    g.finish();
}

criterion_group!(
    benches,
    bench_keygen,
    bench_multiply,
    bench_encapsulate,
    bench_aead,
    bench_envelope
);
criterion_main!(benches);
