//! Distance selectors.
//!
//! Both selectors fold over their candidates in canonical order and only
//! replace the current best on a *strictly* smaller distance, so ties always
//! resolve to the earliest candidate.

use liftgate_core::{ElevatorId, Floor};

use crate::{CarStatus, RequestRegistry};

/// Pick the car that should answer a hall call at `request`.
///
/// An idle car (empty queue) is `|request - current_floor|` away.  A busy car
/// is treated as `floor_count` away, which no idle car inside the building
/// can reach, so busy cars are only chosen when every car is busy, and then
/// the first one in fleet order wins.
///
/// Returns `None` only for an empty fleet.
pub fn closest_elevator_for_request(
    request:     Floor,
    cars:        impl IntoIterator<Item = CarStatus>,
    floor_count: u32,
) -> Option<ElevatorId> {
    let mut best: Option<(ElevatorId, u32)> = None;
    for car in cars {
        let distance = if car.idle {
            request.distance(car.current_floor)
        } else {
            floor_count
        };
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((car.id, distance)),
        }
    }
    best.map(|(id, _)| id)
}

/// The pending floor (either direction) nearest to `reference`.
///
/// Falls back to [`Floor::GROUND`] when nothing is pending.
pub fn closest_pending_floor(reference: Floor, registry: &RequestRegistry) -> Floor {
    let mut best: Option<Floor> = None;
    for floor in registry.pending_union() {
        match best {
            Some(b) if reference.distance(floor) >= reference.distance(b) => {}
            _ => best = Some(floor),
        }
    }
    best.unwrap_or(Floor::GROUND)
}
