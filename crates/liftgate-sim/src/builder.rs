//! Fluent builder for constructing a [`Sim`].

use liftgate_core::{ElevatorId, Floor, SimConfig, SimRng, Tick};
use liftgate_dispatch::{DispatchConfig, Dispatcher};

use crate::sim::SimStats;
use crate::{CallPlan, RandomTraffic, Sim, SimCar, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                      |
/// |----------------------------|------------------------------|
/// | `.initial_floors(v)`       | Every car on the ground floor |
/// | `.calls(plan)`             | No scripted calls            |
/// | `.random_traffic(h, c)`    | No random traffic            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, DispatchConfig::new(12, 3))
///     .initial_floors(vec![Floor(0), Floor(6), Floor(11)])
///     .calls(load_calls_csv(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    dispatch: DispatchConfig,
    floors:   Option<Vec<Floor>>,
    plan:     Option<CallPlan>,
    traffic:  Option<(f64, f64)>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, dispatch: DispatchConfig) -> Self {
        Self {
            config,
            dispatch,
            floors:  None,
            plan:    None,
            traffic: None,
        }
    }

    /// Starting floor for each car (must be length `elevator_count`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Scripted hall calls.
    pub fn calls(mut self, plan: CallPlan) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Random hall calls (per-tick probability) and cab calls (per-stop
    /// probability), seeded from `config.seed`.
    pub fn random_traffic(mut self, hall_call_probability: f64, cab_call_probability: f64) -> Self {
        self.traffic = Some((hall_call_probability, cab_call_probability));
        self
    }

    /// Validate inputs, build the dispatcher and the cars, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let dispatcher = Dispatcher::new(self.dispatch)?;
        let floor_count = dispatcher.config().floor_count;
        let car_count = dispatcher.elevators().len();

        // ── Starting floors ───────────────────────────────────────────────
        let floors = match self.floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: car_count,
                        got:      f.len(),
                        what:     "initial floors",
                    });
                }
                f
            }
            None => vec![Floor::GROUND; car_count],
        };
        if let Some(bad) = floors.iter().find(|f| !f.in_building(floor_count)) {
            return Err(SimError::Config(format!(
                "initial floor {bad} is outside a building of {floor_count} floors"
            )));
        }

        // ── Call plan ─────────────────────────────────────────────────────
        let plan = self.plan.unwrap_or_else(CallPlan::empty);
        if let Some(bad) = plan.calls().iter().find(|c| !c.call.floor.in_building(floor_count)) {
            return Err(SimError::CallPlan(format!(
                "call at {} targets {}, outside a building of {floor_count} floors",
                bad.tick, bad.call.floor
            )));
        }

        // ── Random traffic ────────────────────────────────────────────────
        let traffic = match self.traffic {
            Some((hall, cab)) => {
                for p in [hall, cab] {
                    if !(0.0..=1.0).contains(&p) {
                        return Err(SimError::Config(format!("probability {p} is outside [0, 1]")));
                    }
                }
                let rng = SimRng::new(self.config.seed).child(0);
                Some(RandomTraffic::new(rng, hall, cab))
            }
            None => None,
        };

        let cars = floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| SimCar::new(ElevatorId(i as u32), floor))
            .collect();

        Ok(Sim {
            clock:      Tick::ZERO,
            config:     self.config,
            dispatcher,
            cars,
            plan,
            traffic,
            stats:      SimStats::default(),
        })
    }
}
