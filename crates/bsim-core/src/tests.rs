//! Unit tests for bsim-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PaxId, SeatId};

    #[test]
    fn index_roundtrip() {
        let id = PaxId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PaxId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PaxId(0) < PaxId(1));
        assert!(SeatId(100) > SeatId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PaxId::INVALID.0, u32::MAX);
        assert_eq!(SeatId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PaxId(7).to_string(), "PaxId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{StepClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = StepClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 1.0);
    }

    #[test]
    fn duration_rounds_up_with_floor() {
        let clock = StepClock::new(0.5);
        assert_eq!(clock.duration_ticks(3.0), 6);
        assert_eq!(clock.duration_ticks(3.1), 7);
        // sub-step activity still takes one observable tick
        assert_eq!(clock.duration_ticks(0.01), 1);
    }

    #[test]
    fn offset_keeps_zero() {
        let clock = StepClock::new(0.5);
        assert_eq!(clock.offset_ticks(0.0), 0);
        assert_eq!(clock.offset_ticks(60.0), 120);
    }
}

#[cfg(test)]
mod rng {
    use crate::{PaxId, PaxRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PaxRng::new(12345, PaxId(0));
        let mut r2 = PaxRng::new(12345, PaxId(0));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_pax_differ() {
        let mut r0 = PaxRng::new(1, PaxId(0));
        let mut r1 = PaxRng::new(1, PaxId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent passengers should diverge");
    }

    #[test]
    fn child_streams_are_reproducible() {
        let mut base1 = SimRng::new(7);
        let mut base2 = SimRng::new(7);
        let mut c1 = base1.child(3);
        let mut c2 = base2.child(3);
        let a: u64 = c1.random();
        let b: u64 = c2.random();
        assert_eq!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = PaxRng::new(0, PaxId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod policy {
    use crate::BoardingMethod;

    #[test]
    fn canonical_names_roundtrip() {
        for m in BoardingMethod::ALL {
            assert_eq!(m.name().parse::<BoardingMethod>().unwrap(), m);
        }
    }

    #[test]
    fn aliases_accepted() {
        assert_eq!(
            "window_middle_aisle".parse::<BoardingMethod>().unwrap(),
            BoardingMethod::OutsideIn
        );
        assert_eq!("group".parse::<BoardingMethod>().unwrap(), BoardingMethod::ByGroup);
    }

    #[test]
    fn unknown_method_rejected() {
        let err = "steffen_perfect".parse::<BoardingMethod>().unwrap_err();
        assert!(err.to_string().contains("steffen_perfect"));
    }
}

#[cfg(test)]
mod config {
    use crate::{
        AircraftConfig, Assumptions, BagConfig, BehaviorConfig, BoardingConfig, BoardingMethod,
        ControlsConfig, LoadConfig, Scenario,
    };

    fn scenario() -> Scenario {
        Scenario {
            aircraft: AircraftConfig {
                aircraft_type: "A320".into(),
                num_rows:      30,
                seats_per_row: 6,
                num_aisles:    1,
            },
            load:     LoadConfig { load_factor: 0.85 },
            boarding: BoardingConfig {
                method:          BoardingMethod::BackToFront,
                baseline_method: BoardingMethod::Random,
            },
            bags:        BagConfig { carry_on_rate: 0.7, bin_capacity_per_row: 4 },
            behavior:    BehaviorConfig::default(),
            controls:    ControlsConfig::default(),
            assumptions: Assumptions::default(),
            seed:        Some(42),
        }
    }

    #[test]
    fn valid_scenario_passes() {
        scenario().validate().unwrap();
    }

    #[test]
    fn pax_count_rounds() {
        let mut s = scenario();
        s.load.load_factor = 1.0;
        assert_eq!(s.pax_count(), 180);
        s.load.load_factor = 0.0;
        assert_eq!(s.pax_count(), 0);
        s.load.load_factor = 0.5;
        assert_eq!(s.pax_count(), 90);
    }

    #[test]
    fn zero_rows_rejected() {
        let mut s = scenario();
        s.aircraft.num_rows = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn three_aisles_rejected() {
        let mut s = scenario();
        s.aircraft.num_aisles = 3;
        assert!(s.validate().is_err());
    }

    #[test]
    fn out_of_range_load_rejected() {
        let mut s = scenario();
        s.load.load_factor = 1.2;
        assert!(s.validate().is_err());
        s.load.load_factor = -0.1;
        assert!(s.validate().is_err());
    }

    #[test]
    fn zero_time_step_rejected() {
        let mut s = scenario();
        s.controls.time_step = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn zero_runs_rejected() {
        let mut s = scenario();
        s.controls.num_runs = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn defaults_match_service_contract() {
        let b = BehaviorConfig::default();
        assert_eq!(b.walking_speed_mean, 1.3);
        assert_eq!(b.stow_time_carry_on_mean, 12.0);
        assert_eq!(b.seat_slide_time_mean, 3.0);
        assert_eq!(b.late_pax_rate, 0.02);

        let c = ControlsConfig::default();
        assert_eq!(c.time_step, 0.5);
        assert_eq!(c.num_runs, 25);
        assert_eq!(c.cost_per_minute_delay, 75.0);

        assert_eq!(Assumptions::default().flights_per_year, 1825);
    }

    #[test]
    fn partial_behavior_json_fills_defaults() {
        let b: BehaviorConfig = serde_json::from_str(r#"{"late_pax_rate": 0.1}"#).unwrap();
        assert_eq!(b.late_pax_rate, 0.1);
        assert_eq!(b.walking_speed_mean, 1.3);
    }
}
