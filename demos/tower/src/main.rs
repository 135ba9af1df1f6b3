//! tower: runs the liftgate dispatcher over a simulated office tower.
//!
//! ```text
//! tower [CONFIG.json] [CALLS.csv] [TRACE.csv]
//! ```
//!
//! Without arguments: 12 floors, 3 cars, 600 ticks of seeded random traffic.
//! Set `RUST_LOG=debug` to watch every dispatch decision.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use liftgate_core::{Direction, SimConfig, Tick};
use liftgate_dispatch::{DispatchConfig, DispatchEvent, Dispatcher};
use liftgate_sim::{load_calls_csv, CsvTraceObserver, SimBuilder, SimCar, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:           u32 = 12;
const ELEVATOR_COUNT:        u32 = 3;
const HALL_CALL_PROBABILITY: f64 = 0.15;
const CAB_CALL_PROBABILITY:  f64 = 0.6;
const PROGRESS_EVERY_TICKS:  u64 = 100;

// ── Config file ───────────────────────────────────────────────────────────────

fn default_hall() -> f64 {
    HALL_CALL_PROBABILITY
}

fn default_cab() -> f64 {
    CAB_CALL_PROBABILITY
}

#[derive(Deserialize)]
struct TowerConfig {
    sim:      SimConfig,
    dispatch: DispatchConfig,
    #[serde(default = "default_hall")]
    hall_call_probability: f64,
    #[serde(default = "default_cab")]
    cab_call_probability: f64,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            sim:                   SimConfig::default(),
            dispatch:              DispatchConfig::new(FLOOR_COUNT, ELEVATOR_COUNT)
                .with_clear_request_on_stop(true),
            hall_call_probability: HALL_CALL_PROBABILITY,
            cab_call_probability:  CAB_CALL_PROBABILITY,
        }
    }
}

fn load_config(path: &Path) -> Result<TowerConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts events by kind, logs progress and forwards snapshots to an
/// optional CSV trace.
#[derive(Default)]
struct TowerObserver {
    trace:   Option<CsvTraceObserver<BufWriter<File>>>,
    hall:    u64,
    passing: u64,
    idles:   u64,
    busiest: usize,
}

impl SimObserver for TowerObserver {
    fn on_event(&mut self, _tick: Tick, event: &DispatchEvent) {
        match event {
            DispatchEvent::FloorButton { .. } => self.hall += 1,
            DispatchEvent::PassingFloor { .. } => self.passing += 1,
            DispatchEvent::Idle { .. } => self.idles += 1,
            _ => {}
        }
    }

    fn on_tick_end(&mut self, tick: Tick, events: usize) {
        self.busiest = self.busiest.max(events);
        if tick.0 > 0 && tick.0.is_multiple_of(PROGRESS_EVERY_TICKS) {
            info!("{tick}: {} hall calls so far", self.hall);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &[SimCar], dispatcher: &Dispatcher) {
        if let Some(trace) = self.trace.as_mut() {
            trace.on_snapshot(tick, cars, dispatcher);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(trace) = self.trace.as_mut() {
            trace.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let config_path = args.next();
    let calls_path = args.next();
    let trace_path = args.next();

    // 1. Configuration.
    let tower = match &config_path {
        Some(p) => load_config(p)?,
        None => TowerConfig::default(),
    };
    println!("=== tower | liftgate dispatch demo ===");
    println!(
        "Floors: {}  |  Cars: {}  |  Ticks: {}  |  Seed: {}",
        tower.dispatch.floor_count,
        tower.dispatch.elevator_count,
        tower.sim.total_ticks,
        tower.sim.seed
    );

    // 2. Sim.
    let mut builder = SimBuilder::new(tower.sim.clone(), tower.dispatch.clone())
        .random_traffic(tower.hall_call_probability, tower.cab_call_probability);
    if let Some(p) = &calls_path {
        let plan = load_calls_csv(p).with_context(|| format!("loading {}", p.display()))?;
        println!("Loaded {} scripted calls from {}", plan.calls().len(), p.display());
        builder = builder.calls(plan);
    }
    let mut sim = builder.build()?;

    // 3. Observer.
    let mut observer = TowerObserver::default();
    if let Some(p) = &trace_path {
        let file = File::create(p).with_context(|| format!("creating {}", p.display()))?;
        observer.trace = Some(CsvTraceObserver::new(BufWriter::new(file)));
    }

    // 4. Run.
    let started = Instant::now();
    sim.run(&mut observer)?;
    let elapsed = started.elapsed();

    if let Some(mut trace) = observer.trace.take() {
        if let Some(e) = trace.take_error() {
            return Err(e).context("writing trace");
        }
        let rows = trace.rows();
        trace.into_inner()?;
        if let Some(p) = &trace_path {
            println!("Wrote {rows} trace rows to {}", p.display());
        }
    }

    // 5. Report.
    println!();
    println!("Ran {} ticks in {:.1?}", sim.clock.0, elapsed);
    println!(
        "Hall calls: {}  |  Cab calls: {}  |  Stops: {}  |  Events: {}",
        sim.stats.hall_calls, sim.stats.cab_calls, sim.stats.stops, sim.stats.events
    );
    println!(
        "Passing-floor reports: {}  |  Idle reports: {}  |  Busiest tick: {} events",
        observer.passing, observer.idles, observer.busiest
    );
    println!();
    println!("{:<14} {:>6} {:>10} {:>7}  queue", "car", "floor", "travelled", "stops");
    for car in &sim.cars {
        let state = sim.dispatcher.elevator(car.id)?;
        println!(
            "{:<14} {:>6} {:>10} {:>7}  {:?}",
            car.id.to_string(),
            car.floor.to_string(),
            car.floors_travelled,
            car.stops_made,
            state.queue.as_slice(),
        );
    }

    let registry = sim.dispatcher.registry();
    println!();
    println!("Pending hall calls: {}", registry.len());
    for direction in [Direction::Up, Direction::Down] {
        println!("  {direction:<4} {:?}", registry.pending(direction));
    }
    Ok(())
}
