use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use folio_physics::{BlockDesc, ColliderRect, PhysicsWorld, Vector2, WorldBounds};

fn crowded_world(blocks: usize) -> PhysicsWorld {
    let bounds = WorldBounds::new(20_000.0, 720.0, 640.0);
    let colliders = (0..10)
        .map(|i| {
            let x = i as f32 * 1500.0 + 300.0;
            ColliderRect::new(x, x + 300.0, 500.0, 720.0)
        })
        .collect();

    let mut world = PhysicsWorld::new(Vector2::new(0.0, 702.0), 18.0, bounds, colliders)
        .expect("valid world");
    for i in 0..blocks {
        let x = 200.0 + (i % 20) as f32 * 90.0;
        let y = -200.0 - (i / 20) as f32 * 100.0;
        world
            .add_block(BlockDesc::new(format!("block-{i}"), Vector2::new(x, y), 80.0, 80.0, 4.0))
            .expect("unique block id");
    }
    world.set_velocity(40.0, -25.0);
    world
}

fn bench_world_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_update");
    for blocks in [0, 10, 40] {
        group.bench_function(format!("{blocks}_blocks_120_ticks"), |b| {
            b.iter_batched(
                || crowded_world(blocks),
                |mut world| {
                    for _ in 0..120 {
                        world.update(black_box(1.0));
                    }
                    world
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_world_update);
criterion_main!(benches);
