use bktree::*;
use criterion::*;
use rand::distributions::Uniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_find(c: &mut Criterion) {
    let space_mags = 12..=18;
    let all_sizes = space_mags.map(|n| 2usize.pow(n));
    let mut rng = SmallRng::seed_from_u64(5);
    // 24-bit features keep radius searches selective.
    let all_input = (&mut rng)
        .sample_iter(Uniform::new(0u32, 1 << 24))
        .take(all_sizes.clone().last().unwrap())
        .collect::<Vec<u32>>();
    let random_samples = (&mut rng)
        .sample_iter(Uniform::new(0u32, 1 << 24))
        .take(1000)
        .collect::<Vec<u32>>();

    let mut group = c.benchmark_group("find");
    group.sample_size(32);
    for total in all_sizes {
        let space = &all_input[0..total];
        let tree = BkTree::from_items(hamming_distance::<u32>, space.iter().cloned());
        group.bench_with_input(BenchmarkId::new("radius_2_tree", total), &total, |bencher, _| {
            let mut cycle_samples = random_samples.iter().cycle();
            bencher.iter(|| {
                let feature = cycle_samples.next().unwrap();
                tree.find(feature, 2).count()
            });
        });
        group.bench_with_input(
            BenchmarkId::new("radius_2_linear", total),
            &total,
            |bencher, _| {
                let mut cycle_samples = random_samples.iter().cycle();
                bencher.iter(|| {
                    let feature = cycle_samples.next().unwrap();
                    space
                        .iter()
                        .filter(|&item| hamming_distance(item, feature) <= 2)
                        .count()
                });
            },
        );
    }
    group.finish();
}

fn config() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches;
    config = config();
    targets = bench_find
}
