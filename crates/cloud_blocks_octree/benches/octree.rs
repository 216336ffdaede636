use cloud_blocks_core::prelude::*;
use cloud_blocks_octree::Octree;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

fn octree_build_random_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_build_random_cloud");
    for num_points in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            num_points,
            |b, &num_points| {
                b.iter_with_setup(
                    || random_cloud(num_points),
                    |cloud| {
                        let mut tree = Octree::new(cloud, unit_region());
                        tree.setup(8).unwrap();
                        tree.build().unwrap();
                        tree
                    },
                );
            },
        );
    }
    group.finish();
}

fn octree_bft_random_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree_bft_random_cloud");
    for num_points in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            num_points,
            |b, &num_points| {
                b.iter_with_setup(
                    || {
                        let mut tree = Octree::new(random_cloud(num_points), unit_region());
                        tree.setup(8).unwrap();
                        tree.build().unwrap();
                        tree
                    },
                    |tree| black_box(tree.bft()),
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, octree_build_random_cloud, octree_bft_random_cloud);
criterion_main!(benches);

fn random_cloud(num_points: usize) -> Vec<CloudPoint<u16>> {
    let mut rng = rand::thread_rng();

    (0..num_points)
        .map(|_| {
            CloudPoint::new(
                Point3([rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()]),
                rng.gen(),
            )
        })
        .collect()
}

fn unit_region() -> Region {
    Region::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0).unwrap()
}
