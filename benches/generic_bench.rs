use criterion::{black_box, criterion_group, criterion_main, Criterion};
use splaycache::{Cache, LRUCache, SplayTree};

fn bench_all(c: &mut Criterion) {
    // A list of (label, factory) pairs, where 'factory' creates a fresh memo store each time.
    let cache_factories: Vec<(&'static str, Box<dyn Fn() -> Box<dyn Cache<u64, u64>>>)> = vec![
        (
            "LRU",
            Box::new(|| -> Box<dyn Cache<u64, u64>> { Box::new(LRUCache::<u64, u64>::unbounded()) }),
        ),
        (
            "SPLAY",
            Box::new(|| -> Box<dyn Cache<u64, u64>> { Box::new(SplayTree::<u64, u64>::new()) }),
        ),
    ];

    for (label, factory) in cache_factories {
        c.bench_function(&format!("{}_set", label), |b| {
            b.iter(|| {
                let mut cache = factory();
                for i in 0..100 {
                    cache.set(i, black_box(i + 1));
                }
            })
        });

        c.bench_function(&format!("{}_get", label), |b| {
            // Pre-fill the store before timing gets
            let mut cache = factory();
            for i in 0..100 {
                cache.set(i, i + 1);
            }

            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&i));
                }
            })
        });

        // Repeated access to a small hot set, which a splay tree keeps near its root
        c.bench_function(&format!("{}_get_hot", label), |b| {
            let mut cache = factory();
            for i in 0..1000 {
                cache.set(i, i);
            }

            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(500 + i % 4)));
                }
            })
        });
    }
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
