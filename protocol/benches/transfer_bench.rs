// Transfer construction benchmarks.
//
// Covers proof signing and verification, coin selection over wallets of
// various sizes, and full create-and-sign of a transfer.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use boxpay_protocol::boxes::{BoxId, RegularBox, RegularBoxData};
use boxpay_protocol::clock::FixedClock;
use boxpay_protocol::crypto::PrivateKey25519;
use boxpay_protocol::transaction::{
    select_inputs, RegularTransactionCreator, RegularTransactionFactory,
};
use boxpay_protocol::wallet::MemoryWallet;

fn funded_wallet(boxes: u32, value: u64) -> (MemoryWallet, PrivateKey25519) {
    let key = PrivateKey25519::from_seed(&[7u8; 32]);
    let mut wallet = MemoryWallet::new();
    let owner = wallet.add_secret(key.clone());
    for i in 0..boxes {
        let id = BoxId::derive(b"bench-funding", u64::from(i));
        wallet
            .add_box(RegularBox::new(id, owner, value))
            .expect("fresh ids");
    }
    (wallet, key)
}

fn bench_sign_proof(c: &mut Criterion) {
    let key = PrivateKey25519::generate();
    let message = [0x5Au8; 160];

    c.bench_function("proof/sign", |b| {
        b.iter(|| key.sign(&message));
    });
}

fn bench_verify_proof(c: &mut Criterion) {
    let key = PrivateKey25519::generate();
    let message = [0x5Au8; 160];
    let proof = key.sign(&message);
    let proposition = key.public_image();

    c.bench_function("proof/is_valid", |b| {
        b.iter(|| proof.is_valid(&proposition, &message));
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/whole_wallet");

    for size in [16u32, 256, 4096] {
        let (wallet, _) = funded_wallet(size, 10);
        // Target forces a scan of every box.
        let target = u64::from(size) * 10;
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &target, |b, &target| {
            b.iter(|| select_inputs(&wallet, target, &[]).expect("funded"));
        });
    }

    group.finish();
}

fn bench_create_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("create/inputs");
    let payee = PrivateKey25519::from_seed(&[9u8; 32]).public_image();
    let creator =
        RegularTransactionCreator::new(RegularTransactionFactory::default(), FixedClock(0));

    for inputs in [1u32, 8, 64] {
        let (wallet, key) = funded_wallet(inputs, 100);
        let to = [RegularBoxData::new(payee, u64::from(inputs) * 100 - 10)];
        let change = key.public_image();
        group.throughput(Throughput::Elements(u64::from(inputs)));
        group.bench_with_input(BenchmarkId::from_parameter(inputs), &to, |b, to| {
            b.iter(|| creator.create(&wallet, to, &change, 1, &[]).expect("funded"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sign_proof,
    bench_verify_proof,
    bench_selection,
    bench_create_transfer,
);
criterion_main!(benches);
