// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use instar_core::codec::{decode_instance_id, encode_instance_id};
use instar_core::resolve::instance_list;
use instar_core::{Flag, FlagSet, InstanceListFlags};

fn build_names(count: usize) -> String {
    (0..count)
        .map(|i| format!("instance-{i}@10.0.0.{}", i % 255))
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_instance_id", |b| {
        b.iter(|| black_box(encode_instance_id("c3Zj.1", "instance-42@10.0.0.42")))
    });
}

fn bench_decode(c: &mut Criterion) {
    let id = encode_instance_id("c3Zj.1", "instance-42@10.0.0.42");
    c.bench_function("decode_instance_id", |b| {
        b.iter(|| black_box(decode_instance_id(&id)))
    });
}

fn bench_instance_list(c: &mut Criterion) {
    let names = build_names(1000);
    c.bench_function("instance_list_1000", |b| {
        b.iter_batched(
            || {
                let mut ctx = FlagSet::with_flags(&[
                    Flag::ServiceId,
                    Flag::InstanceIdList,
                    Flag::InstanceNameList,
                ]);
                ctx.insert(Flag::ServiceId, "c3Zj.1");
                ctx.insert(Flag::InstanceNameList, names.clone());
                ctx
            },
            |mut ctx| {
                black_box(instance_list(&mut ctx, true, &InstanceListFlags::PRIMARY))
                    .expect("Failed to resolve list");
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_instance_list);
criterion_main!(benches);
