//! Unit tests for aco-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, UnitId};

    #[test]
    fn index_roundtrip() {
        let id = UnitId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(UnitId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(1) < NodeId(2));
        assert!(UnitId(100) > UnitId(99));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(UnitId(0).to_string(), "UnitId(0)");
    }

    #[test]
    fn from_raw() {
        assert_eq!(NodeId::from(3u32), NodeId(3));
    }
}

#[cfg(test)]
mod round {
    use crate::{ColonyConfig, Round};

    #[test]
    fn round_arithmetic() {
        let r = Round(10);
        assert_eq!(r + 5, Round(15));
        assert_eq!(r.next(), Round(11));
        assert_eq!(Round(15).since(Round(10)), 5);
        assert_eq!(Round(3).to_string(), "R3");
    }

    #[test]
    fn end_round() {
        let cfg = ColonyConfig::new(120, 1_000, 42);
        assert_eq!(cfg.end_round(), Round(1_000));
    }

    #[test]
    fn snapshot_cadence() {
        let mut cfg = ColonyConfig::new(1, 10, 0);
        assert!(!cfg.is_snapshot_round(Round(0)));
        cfg.snapshot_interval_rounds = 5;
        assert!(cfg.is_snapshot_round(Round(0)));
        assert!(!cfg.is_snapshot_round(Round(4)));
        assert!(cfg.is_snapshot_round(Round(10)));
    }

    #[test]
    fn validate_rejects_empty_population() {
        let cfg = ColonyConfig::new(0, 10, 0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_threads() {
        let mut cfg = ColonyConfig::new(4, 10, 0);
        cfg.num_threads = Some(0);
        assert!(cfg.validate().is_err());
        cfg.num_threads = Some(2);
        assert!(cfg.validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::{UnitId, UnitRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = UnitRng::new(12345, UnitId(0));
        let mut r2 = UnitRng::new(12345, UnitId(0));
        for _ in 0..100 {
            assert_eq!(r1.draw_ticket(1_000_000), r2.draw_ticket(1_000_000));
        }
    }

    #[test]
    fn different_units_differ() {
        let mut r0 = UnitRng::new(1, UnitId(0));
        let mut r1 = UnitRng::new(1, UnitId(1));
        let a: Vec<u64> = (0..8).map(|_| r0.draw_ticket(u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| r1.draw_ticket(u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent units should diverge");
    }

    #[test]
    fn ticket_in_bounds() {
        let mut rng = UnitRng::new(0, UnitId(0));
        for _ in 0..1000 {
            let t = rng.draw_ticket(7);
            assert!((1..=7).contains(&t));
        }
        assert_eq!(rng.draw_ticket(1), 1);
    }
}
