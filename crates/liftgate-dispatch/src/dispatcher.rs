//! The `Dispatcher`: request registry plus per-car state, driven by events.

use liftgate_core::{Direction, ElevatorId, Floor};
use log::{debug, trace, warn};

use crate::scheduler;
use crate::select::{closest_elevator_for_request, closest_pending_floor};
use crate::{
    CarStatus, DispatchConfig, DispatchError, DispatchEvent, DispatchResult, ElevatorCar,
    ElevatorState, RequestRegistry,
};

/// Session-wide dispatch state.
///
/// Build one per building at start-up and feed it every host event in the
/// order they happen.  Each entry point runs to completion before returning,
/// and `&mut self` keeps two of them from interleaving.
///
/// Every entry point takes the host's cars as `&mut [C]` in fleet order; the
/// slice length must equal `config.elevator_count`.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    config:    DispatchConfig,
    registry:  RequestRegistry,
    elevators: Vec<ElevatorState>,
}

impl Dispatcher {
    /// Validate `config` and create one idle, upward-working state per car.
    pub fn new(config: DispatchConfig) -> DispatchResult<Self> {
        config.validate()?;
        let elevators = (0..config.elevator_count)
            .map(|i| ElevatorState::new(ElevatorId(i)))
            .collect();
        Ok(Self {
            config,
            registry: RequestRegistry::new(),
            elevators,
        })
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    pub fn registry(&self) -> &RequestRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub(crate) fn registry_mut(&mut self) -> &mut RequestRegistry {
        &mut self.registry
    }

    /// Per-car state in fleet order.
    pub fn elevators(&self) -> &[ElevatorState] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> DispatchResult<&ElevatorState> {
        self.elevators
            .get(id.index())
            .ok_or(DispatchError::UnknownElevator(id))
    }

    // ── Event routing ─────────────────────────────────────────────────────

    /// Route one host event to its entry point.
    pub fn handle<C: ElevatorCar>(
        &mut self,
        event: DispatchEvent,
        cars:  &mut [C],
    ) -> DispatchResult<()> {
        trace!("dispatch event: {event}");
        match event {
            DispatchEvent::FloorButton { floor, direction } => {
                self.on_floor_button_pressed(floor, direction, cars).map(drop)
            }
            DispatchEvent::CabButton { elevator, floor } => {
                self.on_cab_button_pressed(elevator, floor, cars)
            }
            DispatchEvent::PassingFloor { elevator, floor } => {
                self.on_passing_floor(elevator, floor, cars).map(drop)
            }
            DispatchEvent::StoppedAtFloor { elevator, floor } => {
                self.on_stopped_at_floor(elevator, floor, cars)
            }
            DispatchEvent::Idle { elevator } => {
                self.on_elevator_idle(elevator, cars).map(drop)
            }
        }
    }

    /// Hall call: register it, pick the closest car and run the idle flow
    /// for that car.  Returns the chosen car.
    pub fn on_floor_button_pressed<C: ElevatorCar>(
        &mut self,
        floor:     Floor,
        direction: Direction,
        cars:      &mut [C],
    ) -> DispatchResult<ElevatorId> {
        self.check_fleet(cars)?;
        self.check_floor(floor)?;

        if !self.registry.add(floor, direction) {
            trace!("hall call {direction} at {floor} already pending");
        }

        let statuses = self.elevators.iter().zip(cars.iter()).map(|(state, car)| CarStatus {
            id:            state.id,
            current_floor: car.current_floor(),
            idle:          state.is_idle(),
        });
        let chosen = closest_elevator_for_request(floor, statuses, self.config.floor_count)
            .ok_or_else(|| DispatchError::Config("the fleet is empty".into()))?;
        debug!("hall call {direction} at {floor} → {chosen}");

        self.on_elevator_idle(chosen, cars)?;
        Ok(chosen)
    }

    /// Idle flow: send `elevator` to the pending floor nearest to it (the
    /// ground floor if nothing is pending).  Returns the floor scheduled.
    pub fn on_elevator_idle<C: ElevatorCar>(
        &mut self,
        elevator: ElevatorId,
        cars:     &mut [C],
    ) -> DispatchResult<Floor> {
        self.check_fleet(cars)?;
        self.check_elevator(elevator)?;

        let current = cars[elevator.index()].current_floor();
        let target = closest_pending_floor(current, &self.registry);
        debug!("{elevator} idle at {current} → {target}");
        self.schedule(elevator, target, cars);
        Ok(target)
    }

    /// Passing-floor pickup.  Matches against the hall calls in the car's
    /// recorded working direction, not the way it is moving right now.
    /// Returns `true` if the floor was picked up.
    pub fn on_passing_floor<C: ElevatorCar>(
        &mut self,
        elevator: ElevatorId,
        floor:    Floor,
        cars:     &mut [C],
    ) -> DispatchResult<bool> {
        self.check_fleet(cars)?;
        self.check_elevator(elevator)?;
        self.check_floor(floor)?;

        let direction = self.elevators[elevator.index()].direction;
        if !self.registry.contains(floor, direction) {
            return Ok(false);
        }

        debug!("{elevator} picks up {direction} call at {floor} in passing");
        self.schedule(elevator, floor, cars);
        self.registry.remove(floor, direction);
        Ok(true)
    }

    /// Cab call: schedule `floor` straight onto the car.  The hall-call
    /// registry is not involved.
    pub fn on_cab_button_pressed<C: ElevatorCar>(
        &mut self,
        elevator: ElevatorId,
        floor:    Floor,
        cars:     &mut [C],
    ) -> DispatchResult<()> {
        self.check_fleet(cars)?;
        self.check_elevator(elevator)?;
        self.check_floor(floor)?;

        debug!("{elevator} cab call to {floor}");
        self.schedule(elevator, floor, cars);
        Ok(())
    }

    /// The car served `floor` and dropped it from its own list; mirror that.
    pub fn on_stopped_at_floor<C: ElevatorCar>(
        &mut self,
        elevator: ElevatorId,
        floor:    Floor,
        cars:     &mut [C],
    ) -> DispatchResult<()> {
        self.check_fleet(cars)?;
        self.check_elevator(elevator)?;
        self.check_floor(floor)?;

        let state = &mut self.elevators[elevator.index()];
        if !state.queue.remove(floor) {
            trace!("{elevator} stopped at unqueued {floor}");
        }
        if self.config.clear_request_on_stop {
            let cleared = self.registry.clear_floor(floor);
            if cleared > 0 {
                debug!("{elevator} at {floor} cleared {cleared} hall call(s)");
            }
        }
        Ok(())
    }

    /// Periodic hook called once per host tick.  Dispatch is purely
    /// event-driven, so there is nothing to re-evaluate here.
    pub fn update(&mut self, dt_secs: f64) {
        trace!("update dt={dt_secs:.3}s, {} call(s) pending", self.registry.len());
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Add `target` to the car's queue, SCAN-reorder it, record the working
    /// direction and push both to the host.
    fn schedule<C: ElevatorCar>(&mut self, elevator: ElevatorId, target: Floor, cars: &mut [C]) {
        let car = &mut cars[elevator.index()];
        let state = &mut self.elevators[elevator.index()];

        let current = car.current_floor();
        let direction = scheduler::schedule(current, &mut state.queue, target);
        state.direction = direction;

        car.commit_destination_queue(state.queue.as_slice());
        car.set_direction(direction);
        debug!(
            "{elevator} at {current} working {direction}: queue {:?}",
            state.queue.as_slice()
        );
    }

    fn check_fleet<C>(&self, cars: &[C]) -> DispatchResult<()> {
        if cars.len() != self.elevators.len() {
            warn!("host passed {} cars, expected {}", cars.len(), self.elevators.len());
            return Err(DispatchError::FleetMismatch {
                expected: self.elevators.len(),
                got:      cars.len(),
            });
        }
        Ok(())
    }

    fn check_elevator(&self, elevator: ElevatorId) -> DispatchResult<()> {
        if elevator.index() >= self.elevators.len() {
            warn!("event for unknown {elevator}");
            return Err(DispatchError::UnknownElevator(elevator));
        }
        Ok(())
    }

    fn check_floor(&self, floor: Floor) -> DispatchResult<()> {
        if !floor.in_building(self.config.floor_count) {
            warn!("{floor} is outside the building");
            return Err(DispatchError::FloorOutOfRange {
                floor,
                floor_count: self.config.floor_count,
            });
        }
        Ok(())
    }
}
