use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vxl_engine::{check_support, VoxelMap};

/// A large floating plate that never reaches the support layers
fn floating_plate() -> VoxelMap {
    let mut map = VoxelMap::empty();
    for x in 100..356 {
        for y in 100..356 {
            for z in 28..31 {
                map.set_solid(x, y, z, true);
            }
        }
    }
    map
}

/// A column anchored to bedrock, so the walk exits early
fn anchored_pillar() -> VoxelMap {
    let mut map = VoxelMap::empty();
    for z in 10..64 {
        map.set_solid(200, 200, z, true);
    }
    map
}

/// Benchmark walking a ~200k voxel unsupported region (query only)
fn bench_unsupported_walk(c: &mut Criterion) {
    let mut map = floating_plate();

    c.bench_function("support_walk_floating_plate", |b| {
        b.iter(|| black_box(check_support(&mut map, 228, 228, 28, false)))
    });
}

/// Benchmark the early-exit path for a grounded region
fn bench_supported_query(c: &mut Criterion) {
    let mut map = anchored_pillar();

    c.bench_function("support_query_anchored_pillar", |b| {
        b.iter(|| black_box(check_support(&mut map, 200, 200, 10, false)))
    });
}

criterion_group!(benches, bench_unsupported_walk, bench_supported_query);
criterion_main!(benches);
