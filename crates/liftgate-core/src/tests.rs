//! Unit tests for liftgate-core primitives.

#[cfg(test)]
mod ids {
    use crate::ElevatorId;

    #[test]
    fn index_roundtrip() {
        let id = ElevatorId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(ElevatorId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering_is_fleet_order() {
        assert!(ElevatorId(0) < ElevatorId(1));
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
    }
}

#[cfg(test)]
mod floor {
    use crate::Floor;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(4).distance(Floor(0)), 4);
        assert_eq!(Floor(0).distance(Floor(4)), 4);
        assert_eq!(Floor(5).distance(Floor(5)), 0);
    }

    #[test]
    fn building_bounds() {
        assert!(Floor(0).in_building(3));
        assert!(Floor(2).in_building(3));
        assert!(!Floor(3).in_building(3));
        assert!(!Floor(-1).in_building(3));
    }

    #[test]
    fn step_toward() {
        assert_eq!(Floor(2).step_toward(Floor(5)), Floor(3));
        assert_eq!(Floor(2).step_toward(Floor(0)), Floor(1));
        assert_eq!(Floor(2).step_toward(Floor(2)), Floor(2));
    }

    #[test]
    fn ground_is_default() {
        assert_eq!(Floor::default(), Floor::GROUND);
        assert_eq!(Floor::GROUND.to_string(), "F0");
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn default_is_up() {
        assert_eq!(Direction::default(), Direction::Up);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" down ".parse::<Direction>().unwrap(), Direction::Down);
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::Down.to_string(), "down");
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn config_helpers() {
        let config = SimConfig {
            tick_duration_ms:        500,
            total_ticks:             20,
            seed:                    1,
            snapshot_interval_ticks: 5,
        };
        assert_eq!(config.end_tick(), Tick(20));
        assert!((config.tick_secs() - 0.5).abs() < 1e-9);
        assert!(config.is_snapshot_tick(Tick(10)));
        assert!(!config.is_snapshot_tick(Tick(11)));
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let config = SimConfig { tick_duration_ms: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { snapshot_interval_ticks: 0, ..SimConfig::default() };
        assert!(!config.is_snapshot_tick(Tick(0)));
    }
}

#[cfg(test)]
mod rng {
    use crate::{Direction, Floor, SimRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..50 {
            assert_eq!(a.floor(10), b.floor(10));
        }
    }

    #[test]
    fn floors_stay_in_building() {
        let mut rng = SimRng::new(7);
        for _ in 0..500 {
            assert!(rng.floor(4).in_building(4));
        }
    }

    #[test]
    fn edge_floors_have_one_sensible_direction() {
        let mut rng = SimRng::new(7);
        for _ in 0..20 {
            assert_eq!(rng.call_direction(Floor::GROUND, 5), Direction::Up);
            assert_eq!(rng.call_direction(Floor(4), 5), Direction::Down);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: Vec<Floor> = (0..8).map(|_| c0.floor(1_000)).collect();
        let b: Vec<Floor> = (0..8).map(|_| c1.floor(1_000)).collect();
        assert_ne!(a, b);
    }
}
