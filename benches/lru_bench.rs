use criterion::{black_box, criterion_group, criterion_main, Criterion};
use splaycache::{Cache, LRUCache};

fn bench_lru_cache(c: &mut Criterion) {
    c.bench_function("lru_set_1k", |b| {
        b.iter(|| {
            let mut cache = LRUCache::unbounded();
            for i in 0..1000u64 {
                cache.set(i, black_box(i + 1));
            }
        })
    });

    c.bench_function("lru_get_1k", |b| {
        let mut cache = LRUCache::unbounded();
        for i in 0..1000u64 {
            cache.set(i, i + 1);
        }
        b.iter(|| {
            for i in 0..1000u64 {
                black_box(cache.get(&i));
            }
        })
    });

    c.bench_function("lru_evict_1k", |b| {
        b.iter(|| {
            let mut cache = LRUCache::new(50);
            for i in 0..1000u64 {
                cache.set(i, black_box(i));
            }
        })
    });
}

criterion_group!(benches, bench_lru_cache);
criterion_main!(benches);
