use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ctr_drbg::{
    cipher::CipherVariant,
    ctr::{CtrBuilder, CtrDrbg},
    entropy::OsEntropy,
    thread::LocalCtrDrbg,
};
use std::time::Duration;

// Iterate without additional data.
fn ctr_drbg(buf: &mut [u8], drbg: &LocalCtrDrbg) {
    drbg.fill_bytes(buf, None).unwrap();
}

// Iterate with additional data.
fn ctr_drbg_adata(buf: &mut [u8], drbg: &LocalCtrDrbg) {
    let adata = vec![0u8; 8];
    drbg.fill_bytes(buf, Some(&adata)).unwrap();
}

fn build(cipher: CipherVariant, df: bool) -> CtrDrbg<OsEntropy> {
    CtrBuilder::new(OsEntropy::default())
        .cipher(cipher)
        .derivation_function(df)
        .build()
        .unwrap()
}

fn ctr_drbg_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ctr_drbg");
    group.measurement_time(Duration::new(10, 0));
    //
    // Measure the latency for filling small buffers. This reflects
    // the use-case of generating symmetric encryption keys and or
    // nonces.
    //
    let len_steps = vec![16, 32];
    let drbg = LocalCtrDrbg::default();
    for len in &len_steps {
        let title = format!("{}_bytes", len);
        let mut buf = vec![0u8; *len];
        group.bench_function(&title, |b| b.iter(|| ctr_drbg(&mut buf, &drbg)));
    }
    for len in &len_steps {
        let title = format!("{}_bytes_additional_data", len);
        let mut buf = vec![0u8; *len];
        group.bench_function(&title, |b| b.iter(|| ctr_drbg_adata(&mut buf, &drbg)));
    }
    //
    // Measure the throughput for bulk random data.
    //
    let title = "1_MiB";
    let mut buf = vec![0u8; 1 << 20];
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function(title, |b| b.iter(|| ctr_drbg(&mut buf, &drbg)));
    let title = "1_MiB_additional_data";
    group.bench_function(title, |b| b.iter(|| ctr_drbg_adata(&mut buf, &drbg)));
    group.finish();

    //
    // Compare key sizes and seeding modes on a single max-size request.
    //
    let mut group = c.benchmark_group("ctr_drbg_variants");
    let mut buf = vec![0u8; 1 << 16];
    group.throughput(Throughput::Bytes(buf.len() as u64));
    for cipher in [
        CipherVariant::Aes128,
        CipherVariant::Aes192,
        CipherVariant::Aes256,
    ] {
        for df in [true, false] {
            let mut drbg = build(cipher, df);
            let id = BenchmarkId::new(format!("{:?}", cipher), if df { "df" } else { "no_df" });
            group.bench_function(id, |b| {
                b.iter(|| drbg.generate(&mut buf, None, false).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, ctr_drbg_benchmark);
criterion_main!(benches);
