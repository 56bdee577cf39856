//! spawner — frame-loop driver for the rust_pace event pacer.
//!
//! Runs a simulated 60 fps game loop for one minute.  Three resource
//! categories are paced by an `EventScheduler`; each due event spawns an
//! entity at a random point in the play area.  A 20 Hz `PulseClock` ages
//! entities and despawns them after a fixed lifetime.  When few ore
//! entities are alive the ore rate is boosted until the field refills.
//!
//! Halfway through, one frame stalls for 2.5 s to show the scheduler's
//! skipped-window warning (run with `RUST_LOG=debug` for rollover detail).

mod area;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::rc::Rc;

use anyhow::Result;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pace_core::CategoryId;
use pace_pulse::{PulseClock, PulseConfig};
use pace_schedule::{EventScheduler, load_plan_configs_reader};

use area::{Entity, SpawnArea};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 42;
const FPS:              f64 = 60.0;
const SIM_SECONDS:      f64 = 60.0;
const STALL_AT_SECS:    f64 = 30.0;
const STALL_SECS:       f64 = 2.5;
const LIFETIME_PULSES:  u32 = 20 * 8;  // 8 s at 20 Hz
const ORE:              CategoryId = CategoryId(0);
const BOOST_WHEN_BELOW: usize = 4;
const BOOST_FACTOR:     f64 = 3.0;

// ── Plan CSV ──────────────────────────────────────────────────────────────────

const PLANS_CSV: &str = "\
category_id,name,rate,jitter,capacity\n\
0,ore,0.2,0.1,\n\
1,crystal,2.5,0.05,4\n\
2,debris,7.3,0.02,\n\
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Plans.
    let configs = load_plan_configs_reader(Cursor::new(PLANS_CSV))?;
    let names: BTreeMap<CategoryId, String> =
        configs.iter().map(|c| (c.category_id, c.name.clone())).collect();
    let ore_base_rate = configs
        .iter()
        .find(|c| c.category_id == ORE)
        .map(|c| c.rate)
        .unwrap_or(0.0);

    let mut scheduler = EventScheduler::new(SEED);
    let added = scheduler.add_plans(&configs);
    info!("registered {added} plan(s), seed {}", scheduler.seed());

    // 2. World + heartbeat.
    let world: Rc<RefCell<Vec<Entity>>> = Rc::new(RefCell::new(Vec::new()));
    let despawned = Rc::new(RefCell::new(0usize));

    let mut heartbeat = PulseClock::new(PulseConfig::default())?;
    {
        let world = Rc::clone(&world);
        let despawned = Rc::clone(&despawned);
        heartbeat.subscribe_pulse(move |_| {
            let mut w = world.borrow_mut();
            for e in w.iter_mut() {
                e.age += 1;
            }
            let before = w.len();
            w.retain(|e| e.age < LIFETIME_PULSES);
            *despawned.borrow_mut() += before - w.len();
        });
    }
    heartbeat.subscribe_teardown(|| info!("heartbeat stopped"));

    let area = SpawnArea { cx: 0.0, cy: 0.0, width: 40.0, height: 20.0 };
    let mut rng = SmallRng::seed_from_u64(SEED);

    // 3. Frame loop.
    let mut spawned: BTreeMap<CategoryId, u32> = BTreeMap::new();
    let mut sim_time = 0.0;
    let mut stalled = false;
    let mut boosted = false;

    while sim_time < SIM_SECONDS {
        let mut dt = rng.gen_range(0.5f64..1.5) / FPS;
        if !stalled && sim_time >= STALL_AT_SECS {
            stalled = true;
            dt += STALL_SECS;
            info!("simulating a {STALL_SECS}s stall at t={sim_time:.2}s");
        }
        sim_time += dt;

        scheduler.advance(dt, |id, count| {
            *spawned.entry(id).or_default() += count;
            let mut w = world.borrow_mut();
            for _ in 0..count {
                let (x, y) = area.random_point(&mut rng);
                w.push(Entity { category: id, x, y, age: 0 });
            }
        })?;

        heartbeat.advance(dt);

        let live_ore = world.borrow().iter().filter(|e| e.category == ORE).count();
        let want_boost = live_ore < BOOST_WHEN_BELOW;
        if want_boost != boosted {
            boosted = want_boost;
            let rate = if boosted { ore_base_rate * BOOST_FACTOR } else { ore_base_rate };
            scheduler.set_rate(ORE, rate);
            info!("ore rate -> {rate:.2}/s ({live_ore} alive)");
        }
    }

    // 4. Summary.
    println!();
    println!("Simulated {sim_time:.2} s, {} heartbeat pulses", heartbeat.total_pulses());
    println!("Skipped-window anomalies: {}", scheduler.anomaly_count());
    println!();
    println!("{:<10} {:<10} {:>8} {:>8}", "Category", "Name", "Rate", "Spawned");
    println!("{}", "-".repeat(40));
    let mut ids = Vec::new();
    scheduler.list_plan_ids(&mut ids);
    for id in ids {
        let rate = scheduler.plan(id).map(|p| p.rate()).unwrap_or(0.0);
        println!(
            "{:<10} {:<10} {:>8.2} {:>8}",
            id.0,
            names.get(&id).map(String::as_str).unwrap_or("?"),
            rate,
            spawned.get(&id).copied().unwrap_or(0),
        );
    }

    let w = world.borrow();
    println!();
    println!("Alive: {}  |  Despawned: {}", w.len(), despawned.borrow());
    if let Some(last) = w.last() {
        println!("Newest entity at ({:.1}, {:.1})", last.x, last.y);
    }
    drop(w);

    heartbeat.shutdown();
    Ok(())
}
