use rosu_sim::{
    taiko::UnrealizablePolicy, HitResult, SimulateError, TaikoSimulate, TaikoStatistics,
};

struct SimulateCase {
    total: u32,
    acc: f64,
    misses: u32,
    n100: Option<u32>,
    expected: TaikoStatistics,
    expected_acc: f64,
}

#[test]
fn taiko() {
    let acc_margin = 1e-12;

    for case in CASES {
        let SimulateCase {
            total,
            acc,
            misses,
            n100,
            expected,
            expected_acc,
        } = case;

        let mut simulate = TaikoSimulate::new(*total).accuracy(*acc).misses(*misses);

        if let Some(n100) = n100 {
            simulate = simulate.n100(*n100);
        }

        let attrs = match simulate.calculate() {
            Ok(attrs) => attrs,
            Err(why) => panic!("Failed to simulate {total} objects at {acc}%: {why}"),
        };

        assert_eq!(
            attrs.statistics, *expected,
            "Statistics mismatch [total {total} | acc {acc} | misses {misses}]"
        );

        assert!(
            (attrs.accuracy - expected_acc).abs() < acc_margin,
            "Accuracy: {} | Expected: {} [total {total} | acc {acc} | misses {misses}]",
            attrs.accuracy,
            expected_acc,
        );

        let total_hits: u32 = attrs
            .statistics
            .iter()
            .filter(|(result, _)| *result != HitResult::Meh)
            .map(|(_, count)| count)
            .sum();

        assert_eq!(total_hits, *total);
        assert_eq!(attrs.statistics.get(HitResult::Meh), 0);
    }
}

#[test]
fn evaluate_is_left_inverse() {
    let stats = TaikoSimulate::new(777)
        .accuracy(96.42)
        .misses(7)
        .generate_statistics()
        .unwrap();

    let acc = stats.accuracy().unwrap();
    let again = TaikoSimulate::new(777)
        .accuracy(acc * 100.0)
        .misses(7)
        .generate_statistics()
        .unwrap();

    assert_eq!(stats, again);
    assert_eq!(stats.accuracy(), again.accuracy());
}

#[test]
fn unrealizable_policies() {
    let simulate = TaikoSimulate::new(50).misses(1);

    let clamped = simulate.generate_statistics().unwrap();
    assert_eq!(clamped, TaikoStatistics::new(49, 0, 1));

    let rejected = simulate
        .unrealizable_policy(UnrealizablePolicy::Reject)
        .generate_statistics();

    assert!(matches!(
        rejected,
        Err(SimulateError::UnrealizableAccuracy {
            misses: 1,
            total: 50,
            ..
        })
    ));
}

#[test]
fn empty_map() {
    let err = TaikoSimulate::new(0).calculate().unwrap_err();

    assert_eq!(err, SimulateError::DivisionUndefined);
    assert!(!err.is_invalid_input());
}

const CASES: &[SimulateCase] = &[
    SimulateCase {
        total: 500,
        acc: 100.0,
        misses: 0,
        n100: None,
        expected: TaikoStatistics::new(500, 0, 0),
        expected_acc: 1.0,
    },
    SimulateCase {
        total: 100,
        acc: 0.0,
        misses: 100,
        n100: None,
        expected: TaikoStatistics::new(0, 0, 100),
        expected_acc: 0.0,
    },
    SimulateCase {
        total: 300,
        acc: 100.0,
        misses: 5,
        n100: Some(20),
        expected: TaikoStatistics::new(275, 20, 5),
        expected_acc: 570.0 / 600.0,
    },
    SimulateCase {
        total: 200,
        acc: 95.0,
        misses: 0,
        n100: None,
        expected: TaikoStatistics::new(180, 20, 0),
        expected_acc: 0.95,
    },
    SimulateCase {
        total: 289,
        acc: 98.5,
        misses: 2,
        n100: None,
        expected: TaikoStatistics::new(282, 5, 2),
        expected_acc: 569.0 / 578.0,
    },
];
