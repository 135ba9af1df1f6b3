//! Unit and scenario tests for liftgate-sim.

use liftgate_core::{Direction, ElevatorId, Floor, SimConfig, Tick};
use liftgate_dispatch::{DispatchConfig, DispatchEvent, Dispatcher};

use crate::{CallPlan, HallCall, ScheduledCall, SimCar, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, ..SimConfig::default() }
}

fn call(tick: u64, floor: i32, direction: Direction) -> ScheduledCall {
    ScheduledCall {
        tick: Tick(tick),
        call: HallCall { floor: Floor(floor), direction },
    }
}

/// Records every event handed to the dispatcher.
#[derive(Default)]
struct Recorder {
    events:    Vec<(Tick, DispatchEvent)>,
    snapshots: usize,
    ended:     Option<Tick>,
}

impl Recorder {
    fn stops_at(&self, floor: Floor) -> Vec<Tick> {
        self.events
            .iter()
            .filter_map(|&(t, e)| match e {
                DispatchEvent::StoppedAtFloor { floor: f, .. } if f == floor => Some(t),
                _ => None,
            })
            .collect()
    }
}

impl SimObserver for Recorder {
    fn on_event(&mut self, tick: Tick, event: &DispatchEvent) {
        self.events.push((tick, *event));
    }

    fn on_snapshot(&mut self, _tick: Tick, _cars: &[SimCar], _dispatcher: &Dispatcher) {
        self.snapshots += 1;
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimCar ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car_tests {
    use super::*;
    use liftgate_dispatch::ElevatorCar;

    #[test]
    fn walks_to_head_and_stops() {
        let id = ElevatorId(0);
        let mut car = SimCar::new(id, Floor(0));
        car.commit_destination_queue(&[Floor(3)]);

        assert_eq!(car.begin_tick(), Some(DispatchEvent::PassingFloor { elevator: id, floor: Floor(1) }));
        assert_eq!(car.finish_tick(), None);
        assert_eq!(car.floor, Floor(1));

        assert_eq!(car.begin_tick(), Some(DispatchEvent::PassingFloor { elevator: id, floor: Floor(2) }));
        assert_eq!(car.finish_tick(), None);

        // The next floor is the head itself: no passing event.
        assert_eq!(car.begin_tick(), None);
        assert_eq!(car.finish_tick(), Some(DispatchEvent::StoppedAtFloor { elevator: id, floor: Floor(3) }));
        assert!(car.is_idle());
        assert_eq!(car.floors_travelled, 3);
        assert_eq!(car.stops_made, 1);
    }

    #[test]
    fn idle_reported_once_per_empty_spell() {
        let id = ElevatorId(1);
        let mut car = SimCar::new(id, Floor(4));
        assert_eq!(car.finish_tick(), Some(DispatchEvent::Idle { elevator: id }));
        assert_eq!(car.finish_tick(), None);
        assert_eq!(car.finish_tick(), None);

        car.commit_destination_queue(&[Floor(4)]);
        assert_eq!(car.finish_tick(), Some(DispatchEvent::StoppedAtFloor { elevator: id, floor: Floor(4) }));
        assert_eq!(car.finish_tick(), Some(DispatchEvent::Idle { elevator: id }));
    }

    #[test]
    fn stop_at_current_floor_does_not_move() {
        let id = ElevatorId(0);
        let mut car = SimCar::new(id, Floor(2));
        car.commit_destination_queue(&[Floor(2), Floor(5)]);
        assert_eq!(car.begin_tick(), None);
        assert_eq!(car.finish_tick(), Some(DispatchEvent::StoppedAtFloor { elevator: id, floor: Floor(2) }));
        assert_eq!(car.floors_travelled, 0);
        assert_eq!(car.stops, vec![Floor(5)]);
    }

    #[test]
    fn moves_down() {
        let id = ElevatorId(0);
        let mut car = SimCar::new(id, Floor(5));
        car.commit_destination_queue(&[Floor(3)]);
        car.set_direction(Direction::Down);
        assert_eq!(car.begin_tick(), Some(DispatchEvent::PassingFloor { elevator: id, floor: Floor(4) }));
        car.finish_tick();
        assert_eq!(car.floor, Floor(4));
        assert_eq!(car.direction, Direction::Down);
    }
}

// ── Call sources ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod calls_tests {
    use super::*;
    use crate::{load_calls_reader, RandomTraffic, SimError};
    use liftgate_core::SimRng;

    #[test]
    fn plan_sorted_stably_by_tick() {
        let plan = CallPlan::new(vec![
            call(5, 7, Direction::Down),
            call(0, 2, Direction::Up),
            call(5, 0, Direction::Up),
        ]);
        let floors: Vec<i32> = plan.calls().iter().map(|c| c.call.floor.0).collect();
        assert_eq!(floors, vec![2, 7, 0]);
    }

    #[test]
    fn drain_due_returns_overdue_calls() {
        let mut plan = CallPlan::new(vec![
            call(1, 1, Direction::Up),
            call(2, 2, Direction::Up),
            call(4, 3, Direction::Down),
        ]);
        assert!(plan.drain_due(Tick(0)).is_empty());
        assert_eq!(plan.drain_due(Tick(3)).len(), 2);
        assert_eq!(plan.remaining(), 1);
        assert!(plan.drain_due(Tick(3)).is_empty());
        assert_eq!(plan.drain_due(Tick(10))[0].call.floor, Floor(3));
        assert_eq!(plan.remaining(), 0);
    }

    #[test]
    fn load_valid_csv() {
        let data = "tick,floor,direction\n5,7,down\n0,2,up\n5,0,up\n";
        let plan = load_calls_reader(data.as_bytes()).unwrap();
        assert_eq!(plan.calls(), &[
            call(0, 2, Direction::Up),
            call(5, 7, Direction::Down),
            call(5, 0, Direction::Up),
        ]);
    }

    #[test]
    fn bad_direction_names_the_row() {
        let data = "tick,floor,direction\n0,2,up\n1,3,sideways\n";
        let err = load_calls_reader(data.as_bytes()).unwrap_err();
        match err {
            SimError::CallPlan(msg) => assert!(msg.starts_with("row 2"), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn bad_number_is_call_plan_error() {
        let data = "tick,floor,direction\nsoon,2,up\n";
        assert!(matches!(load_calls_reader(data.as_bytes()), Err(SimError::CallPlan(_))));
    }

    #[test]
    fn cab_call_never_targets_current_floor() {
        let mut traffic = RandomTraffic::new(SimRng::new(7), 0.0, 1.0);
        for _ in 0..200 {
            let to = traffic.cab_call(Floor(2), 5).unwrap();
            assert_ne!(to, Floor(2));
            assert!(to.in_building(5));
        }
    }

    #[test]
    fn zero_probability_never_calls() {
        let mut traffic = RandomTraffic::new(SimRng::new(7), 0.0, 0.0);
        for _ in 0..50 {
            assert_eq!(traffic.hall_call(10), None);
            assert_eq!(traffic.cab_call(Floor(0), 10), None);
        }
    }

    #[test]
    fn hall_calls_point_into_the_building() {
        let mut traffic = RandomTraffic::new(SimRng::new(3), 1.0, 0.0);
        for _ in 0..200 {
            let c = traffic.hall_call(4).unwrap();
            assert!(c.floor.in_building(4));
            if c.floor == Floor(0) {
                assert_eq!(c.direction, Direction::Up);
            }
            if c.floor == Floor(3) {
                assert_eq!(c.direction, Direction::Down);
            }
        }
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn defaults_put_every_car_on_ground() {
        let sim = SimBuilder::new(config(10), DispatchConfig::new(8, 3)).build().unwrap();
        assert_eq!(sim.cars.len(), 3);
        assert!(sim.cars.iter().all(|c| c.floor == Floor::GROUND));
        assert_eq!(sim.cars[2].id, ElevatorId(2));
        assert_eq!(sim.clock, Tick::ZERO);
        assert!(sim.traffic.is_none());
    }

    #[test]
    fn initial_floor_count_mismatch() {
        let err = SimBuilder::new(config(10), DispatchConfig::new(8, 2))
            .initial_floors(vec![Floor(0)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::CarCountMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn initial_floor_outside_building() {
        let err = SimBuilder::new(config(10), DispatchConfig::new(8, 2))
            .initial_floors(vec![Floor(0), Floor(8)])
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn plan_call_outside_building() {
        let err = SimBuilder::new(config(10), DispatchConfig::new(5, 1))
            .calls(CallPlan::new(vec![call(0, -1, Direction::Up)]))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::CallPlan(_)));
    }

    #[test]
    fn probability_out_of_range() {
        let err = SimBuilder::new(config(10), DispatchConfig::new(5, 1))
            .random_traffic(1.5, 0.0)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn bad_configs_surface_their_layer() {
        let zero_tick = SimConfig { tick_duration_ms: 0, ..SimConfig::default() };
        let err = SimBuilder::new(zero_tick, DispatchConfig::new(5, 1)).build().err().unwrap();
        assert!(matches!(err, SimError::Core(_)));

        let err = SimBuilder::new(config(10), DispatchConfig::new(1, 1)).build().err().unwrap();
        assert!(matches!(err, SimError::Dispatch(_)));
    }
}

// ── Tick loop scenarios ───────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use super::*;
    use crate::{NoopObserver, SimBuilder};

    #[test]
    fn single_car_serves_call_and_returns_to_it() {
        let mut sim = SimBuilder::new(config(6), DispatchConfig::new(5, 1))
            .calls(CallPlan::new(vec![call(0, 2, Direction::Up)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        // The request is never consumed, so every Idle sends the car back.
        assert_eq!(rec.stops_at(Floor(2)), vec![Tick(1), Tick(3), Tick(5)]);
        assert_eq!(sim.cars[0].floor, Floor(2));
        assert!(sim.dispatcher.registry().contains(Floor(2), Direction::Up));
        assert_eq!(sim.stats.hall_calls, 1);
        assert_eq!(sim.stats.stops, 3);
        assert_eq!(rec.snapshots, 6);
        assert_eq!(rec.ended, Some(Tick(6)));
        assert_eq!(sim.clock, Tick(6));
    }

    #[test]
    fn unconsumed_request_starves_later_call() {
        let plan = CallPlan::new(vec![call(0, 2, Direction::Up), call(2, 0, Direction::Up)]);
        let mut sim = SimBuilder::new(config(20), DispatchConfig::new(5, 1))
            .calls(plan)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert!(rec.stops_at(Floor(0)).is_empty());
        assert_eq!(sim.cars[0].floor, Floor(2));
        assert!(sim.dispatcher.registry().contains(Floor(0), Direction::Up));
    }

    #[test]
    fn clearing_on_stop_serves_later_call() {
        let plan = CallPlan::new(vec![call(0, 2, Direction::Up), call(2, 0, Direction::Up)]);
        let dispatch = DispatchConfig::new(5, 1).with_clear_request_on_stop(true);
        let mut sim = SimBuilder::new(config(20), dispatch).calls(plan).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(rec.stops_at(Floor(2)), vec![Tick(1)]);
        assert_eq!(rec.stops_at(Floor(0)).first(), Some(&Tick(3)));
        assert!(sim.dispatcher.registry().is_empty());
        assert_eq!(sim.cars[0].floor, Floor::GROUND);
    }

    #[test]
    fn passing_car_picks_up_call_assigned_elsewhere() {
        // Car 0 climbs to 6 on a cab call; car 1 idles near floor 3 and is
        // the one chosen for the hall call there.
        let mut sim = SimBuilder::new(config(20), DispatchConfig::new(10, 2))
            .initial_floors(vec![Floor(0), Floor(4)])
            .calls(CallPlan::new(vec![call(0, 3, Direction::Up)]))
            .build()
            .unwrap();
        sim.dispatcher
            .handle(
                DispatchEvent::CabButton { elevator: ElevatorId(0), floor: Floor(6) },
                &mut sim.cars,
            )
            .unwrap();

        let mut rec = Recorder::default();
        sim.run_ticks(3, &mut rec).unwrap();

        assert!(rec.events.contains(&(
            Tick(2),
            DispatchEvent::PassingFloor { elevator: ElevatorId(0), floor: Floor(3) }
        )));
        assert!(sim.dispatcher.registry().is_empty());
        assert_eq!(sim.cars[0].floor, Floor(3));
        assert_eq!(sim.cars[0].stops, vec![Floor(6)]);
        assert_eq!(sim.cars[0].stops_made, 1);
        // run_ticks does not end the run.
        assert_eq!(rec.ended, None);
    }

    #[test]
    fn press_hall_call_outside_plan() {
        let mut sim = SimBuilder::new(config(10), DispatchConfig::new(6, 1)).build().unwrap();
        sim.press_hall_call(HallCall { floor: Floor(4), direction: Direction::Down }, &mut NoopObserver)
            .unwrap();
        assert_eq!(sim.cars[0].stops, vec![Floor(4)]);
        assert_eq!(sim.stats.hall_calls, 1);

        let err = sim.press_hall_call(HallCall { floor: Floor(9), direction: Direction::Down }, &mut NoopObserver);
        assert!(err.is_err());
    }

    #[test]
    fn empty_building_parks_cars_on_ground() {
        let mut sim = SimBuilder::new(config(12), DispatchConfig::new(6, 2))
            .initial_floors(vec![Floor(3), Floor(5)])
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert!(sim.cars.iter().all(|c| c.floor == Floor::GROUND));
    }

    #[test]
    fn same_seed_same_run() {
        let build = || {
            SimBuilder::new(SimConfig { seed: 99, ..config(300) }, DispatchConfig::new(12, 3))
                .random_traffic(0.3, 0.5)
                .build()
                .unwrap()
        };
        let (mut a, mut b) = (build(), build());
        let (mut ra, mut rb) = (Recorder::default(), Recorder::default());
        a.run(&mut ra).unwrap();
        b.run(&mut rb).unwrap();

        assert_eq!(a.stats, b.stats);
        assert_eq!(ra.events, rb.events);
        assert!(a.stats.hall_calls > 0);
        let floors = |s: &crate::Sim| s.cars.iter().map(|c| c.floor).collect::<Vec<_>>();
        assert_eq!(floors(&a), floors(&b));
    }

    #[test]
    fn snapshot_interval_is_honoured() {
        let cfg = SimConfig { snapshot_interval_ticks: 5, ..config(12) };
        let mut sim = SimBuilder::new(cfg, DispatchConfig::new(4, 1)).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        // Ticks 0, 5 and 10.
        assert_eq!(rec.snapshots, 3);
    }
}

// ── CsvTraceObserver ──────────────────────────────────────────────────────────

#[cfg(test)]
mod trace_tests {
    use super::*;
    use crate::{CsvTraceObserver, SimBuilder};

    #[test]
    fn writes_one_row_per_car_per_snapshot() {
        let mut sim = SimBuilder::new(config(2), DispatchConfig::new(5, 1))
            .calls(CallPlan::new(vec![call(0, 2, Direction::Up)]))
            .build()
            .unwrap();
        let mut trace = CsvTraceObserver::new(Vec::new());
        sim.run(&mut trace).unwrap();

        assert!(trace.take_error().is_none());
        assert_eq!(trace.rows(), 2);
        let out = String::from_utf8(trace.into_inner().unwrap()).unwrap();
        assert_eq!(out, "tick,elevator,floor,direction,queue\n0,0,1,up,2\n1,0,2,up,\n");
    }

    #[test]
    fn queue_column_is_space_separated() {
        let mut sim = SimBuilder::new(config(1), DispatchConfig::new(10, 1)).build().unwrap();
        for floor in [3, 7] {
            sim.dispatcher
                .handle(
                    DispatchEvent::CabButton { elevator: ElevatorId(0), floor: Floor(floor) },
                    &mut sim.cars,
                )
                .unwrap();
        }
        let mut trace = CsvTraceObserver::new(Vec::new());
        sim.run(&mut trace).unwrap();

        let out = String::from_utf8(trace.into_inner().unwrap()).unwrap();
        assert_eq!(out.lines().nth(1), Some("0,0,1,up,3 7"));
    }
}
