//! Scene setup shared by the benchmarks.

use anyhow::Result;
use hitworld::{spawn_item, Group, Item, ItemStore, ManualClock, Outline, World, WorldConfig};

/// Items per row of a grid scene.
const ROW: usize = 32;

/// Spawn `n` active octagons on a grid with `spacing` between centers.
fn spawn_grid(store: &mut ItemStore, n: usize, spacing: f64) -> Result<Group> {
    let mut group = Group::default();
    for i in 0..n {
        let x = (i % ROW) as f64 * spacing;
        let y = (i / ROW) as f64 * spacing;
        let item = Item::new("ball", Outline::reg_poly(8, 10.0))?
            .with_radius(10.0)
            .with_active(true)
            .with_position(x, y);
        group.add(spawn_item(store, item));
    }
    Ok(group)
}

/// A scene where neighbours overlap, so most broadphase pairs reach SAT.
pub fn setup_dense_world(n: usize) -> Result<(ItemStore, World, ManualClock)> {
    setup_world(n, 15.0)
}

/// A scene where no two items are within reach.
pub fn setup_sparse_world(n: usize) -> Result<(ItemStore, World, ManualClock)> {
    setup_world(n, 50.0)
}

fn setup_world(n: usize, spacing: f64) -> Result<(ItemStore, World, ManualClock)> {
    let mut store = ItemStore::new();
    let group = spawn_grid(&mut store, n, spacing)?;
    let clock = ManualClock::new(0.0);
    let mut world = World::with_clock(WorldConfig::default(), clock.clone());
    world.add_group(&group);
    world.init(&mut store);
    Ok((store, world, clock))
}

/// Two outlines at `offset` apart along x, for narrowphase benches.
pub fn outline_pair(sides: usize, offset: f64) -> (Outline, Outline) {
    let a = Outline::new(Outline::reg_poly(sides, 10.0));
    let mut b = Outline::new(Outline::reg_poly(sides, 10.0));
    b.translate(offset, 0.0);
    (a, b)
}
