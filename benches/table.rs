use criterion::{criterion_group, criterion_main, Criterion};
use hashtables::{ChainedTable, Config, FixedTable};
use rand::Rng;

fn chained_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chained insert");

    for item_count in [100, 1_000, 10_000] {
        let keys = (0..item_count)
            .map(|x| format!("key-{x}"))
            .collect::<Vec<_>>();

        group.bench_function(format!("growing from 8 ({item_count} items)"), |b| {
            b.iter(|| {
                let mut table = ChainedTable::new(8);
                for key in &keys {
                    table.insert(key.as_str(), "value");
                }
                table
            });
        });

        group.bench_function(format!("presized ({item_count} items)"), |b| {
            b.iter(|| {
                let mut table = ChainedTable::new(item_count * 2);
                for key in &keys {
                    table.insert(key.as_str(), "value");
                }
                table
            });
        });
    }
}

fn chained_retrieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Chained retrieve");

    for max_load_factor in [0.7, 4.0, 16.0] {
        let item_count = 10_000;

        let mut table = Config::new(8)
            .max_load_factor(max_load_factor)
            .open_chained()
            .unwrap();

        for x in 0..item_count {
            table.insert(format!("key-{x}"), nanoid::nanoid!());
        }

        let mut rng = rand::rng();

        group.bench_function(
            format!("load factor <= {max_load_factor} ({item_count} items)"),
            |b| {
                b.iter(|| {
                    let needle = format!("key-{}", rng.random_range(0..item_count));
                    assert!(table.retrieve(&needle).is_some());
                });
            },
        );
    }
}

fn fixed_insert_retrieve(c: &mut Criterion) {
    let mut table = FixedTable::new(1_024);

    for x in 0..1_024 {
        table.insert(format!("key-{x}"), nanoid::nanoid!());
    }

    let mut rng = rand::rng();

    c.bench_function("Fixed retrieve (1024 slots)", |b| {
        b.iter(|| {
            let needle = format!("key-{}", rng.random_range(0..1_024));
            table.retrieve(&needle).is_some()
        });
    });

    c.bench_function("Fixed insert (1024 slots)", |b| {
        b.iter(|| {
            let key = format!("key-{}", rng.random_range(0..4_096));
            table.insert(key, "value");
        });
    });
}

criterion_group!(benches, chained_insert, chained_retrieve, fixed_insert_retrieve);
criterion_main!(benches);
