use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quartz_crypto::PqAlgorithm;
use quartz_ledger::{codec, sign_pq, validate_transaction, verify_transaction, Address, Transaction};

fn signed_tx(alg: PqAlgorithm, nonce: u64, sk: &[u8], pk: &[u8]) -> Transaction {
    let mut tx = Transaction::unsigned(
        1,
        nonce,
        pk.to_vec(),
        Address::from_bytes([0xAA; 32]),
        1000,
        10,
    );
    sign_pq(&mut tx, sk, alg).expect("sign");
    tx
}

fn bench_verify(c: &mut Criterion) {
    let alg = PqAlgorithm::MlDsa65;
    let (pk, sk) = alg.keypair();

    let txs: Vec<Transaction> = (1..=100)
        .map(|n| signed_tx(alg, n, &sk.0, &pk.0))
        .collect();

    let mut group = c.benchmark_group("verify");
    group.throughput(Throughput::Elements(100));
    group.bench_with_input(BenchmarkId::new("pq_only", 100), &txs, |b, txs| {
        b.iter(|| {
            let mut ok = 0usize;
            for tx in txs {
                if verify_transaction(tx, 1).unwrap() {
                    ok += 1;
                }
            }
            assert_eq!(ok, 100);
        })
    });
    group.bench_with_input(BenchmarkId::new("full_pipeline", 100), &txs, |b, txs| {
        b.iter(|| {
            for tx in txs {
                assert!(validate_transaction(tx, 1).unwrap());
            }
        })
    });
    // Structural rejection must stay orders of magnitude cheaper than a
    // real verification (the DoS-ordering contract).
    group.bench_function("cheap_reject_wrong_chain", |b| {
        let tx = &txs[0];
        b.iter(|| assert!(!validate_transaction(tx, 2).unwrap()))
    });
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let alg = PqAlgorithm::MlDsa65;
    let (pk, sk) = alg.keypair();
    let tx = signed_tx(alg, 1, &sk.0, &pk.0);
    let bytes = codec::encode(&tx).unwrap();

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("encode", |b| b.iter(|| codec::encode(&tx).unwrap()));
    group.bench_function("decode", |b| b.iter(|| codec::decode(&bytes).unwrap()));
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let alg = PqAlgorithm::MlDsa65;
    let (pk, sk) = alg.keypair();

    c.bench_function("sign_pq", |b| {
        let mut nonce = 0u64;
        b.iter(|| {
            nonce += 1;
            signed_tx(alg, nonce, &sk.0, &pk.0)
        })
    });
}

criterion_group!(benches, bench_verify, bench_codec, bench_sign);
criterion_main!(benches);
