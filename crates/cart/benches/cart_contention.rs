use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;
use std::thread;

use storefront_cart::ShoppingCart;
use storefront_core::Money;
use storefront_inventory::Item;

fn stocked_item(stock: i64) -> Arc<Item> {
    Arc::new(Item::new("BENCH", "Bench item", Money::from_minor(199).unwrap(), stock).unwrap())
}

fn bench_single_thread_add_remove(c: &mut Criterion) {
    let cart = ShoppingCart::new();
    let item = stocked_item(1);

    c.bench_function("add_remove_round_trip", |b| {
        b.iter(|| {
            black_box(cart.add_item(Some(&item)).unwrap());
            black_box(cart.remove_item(Some(&item)).unwrap());
        })
    });
}

fn bench_total_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_price");
    for size in [10usize, 100, 1_000] {
        let cart = ShoppingCart::new();
        let item = stocked_item(size as i64);
        for _ in 0..size {
            cart.add_item(Some(&item)).unwrap();
        }
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &cart, |b, cart| {
            b.iter(|| black_box(cart.total_price().unwrap()))
        });
    }
    group.finish();
}

fn bench_contended_adds(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_add_remove");
    for threads in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| {
                let cart = Arc::new(ShoppingCart::new());
                let item = stocked_item(threads as i64 * 100);
                let workers: Vec<_> = (0..threads)
                    .map(|_| {
                        let cart = Arc::clone(&cart);
                        let item = Arc::clone(&item);
                        thread::spawn(move || {
                            for _ in 0..100 {
                                cart.add_item(Some(&item)).unwrap();
                                cart.remove_item(Some(&item)).unwrap();
                            }
                        })
                    })
                    .collect();
                for w in workers {
                    w.join().unwrap();
                }
                black_box(cart.len().unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_thread_add_remove,
    bench_total_price,
    bench_contended_adds
);
criterion_main!(benches);
