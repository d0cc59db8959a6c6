//! Property-based tests for schedule evaluation

use super::*;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = SchedulerKind> {
    prop_oneof![
        Just(SchedulerKind::None),
        Just(SchedulerKind::StepDecay),
        Just(SchedulerKind::CosineAnnealing),
        Just(SchedulerKind::PlateauReduction),
    ]
}

fn arb_param_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        (-100.0f64..100.0).prop_map(serde_json::Value::from),
        (-50i64..200).prop_map(serde_json::Value::from),
        "[a-z0-9. -]{0,6}".prop_map(serde_json::Value::from),
        Just(serde_json::Value::Null),
    ]
}

fn arb_request() -> impl Strategy<Value = ScheduleRequest> {
    (
        1e-6f64..1.0, // base lr
        1i64..300,    // epochs
        arb_kind(),
        proptest::collection::hash_map(
            prop_oneof![
                Just("step_size".to_string()),
                Just("gamma".to_string()),
                Just("T_max".to_string()),
                Just("eta_min".to_string()),
                Just("patience".to_string()),
                Just("factor".to_string()),
            ],
            arb_param_value(),
            0..6,
        ),
    )
        .prop_map(|(lr, epochs, kind, params)| ScheduleRequest {
            base_learning_rate: lr,
            total_epochs: epochs,
            kind,
            params,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_length_is_epochs_plus_one(request in arb_request()) {
        let series = evaluate(&request);
        prop_assert_eq!(series.len() as i64, request.total_epochs + 1);
    }

    #[test]
    fn prop_values_are_finite(request in arb_request()) {
        prop_assert!(evaluate(&request).values().all(f64::is_finite));
    }

    #[test]
    fn prop_epochs_ascend_from_zero(request in arb_request()) {
        let series = evaluate(&request);
        for (i, point) in series.iter().enumerate() {
            prop_assert_eq!(point.epoch, i as u64);
        }
    }

    #[test]
    fn prop_evaluate_is_pure(request in arb_request()) {
        let before = request.clone();
        let a = evaluate(&request);
        let b = evaluate(&request);
        prop_assert_eq!(&request, &before);
        let bits_a: Vec<u64> = a.values().map(f64::to_bits).collect();
        let bits_b: Vec<u64> = b.values().map(f64::to_bits).collect();
        prop_assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn prop_first_point_is_base_rate_for_decays(request in arb_request()) {
        let series = evaluate(&request);
        let first = series.value_at(0).unwrap();
        match request.effective_params() {
            EffectiveParams::CosineAnnealing { eta_min, .. } => {
                // eta_min cancels out at epoch 0 up to rounding
                let tolerance = 1e-12 * (1.0 + eta_min.abs());
                prop_assert!((first - request.base_learning_rate).abs() <= tolerance);
            }
            _ => prop_assert_eq!(first, request.base_learning_rate),
        }
    }

    #[test]
    fn prop_invalid_top_level_inputs_give_empty(
        lr in prop_oneof![Just(0.0f64), -10.0f64..0.0, Just(f64::NAN), Just(f64::INFINITY)],
        epochs in -100i64..300,
        kind in arb_kind(),
    ) {
        prop_assert!(evaluate(&ScheduleRequest::new(lr, epochs, kind)).is_empty());
    }

    #[test]
    fn prop_non_positive_epochs_give_empty(
        lr in 1e-6f64..1.0,
        epochs in -100i64..=0,
        kind in arb_kind(),
    ) {
        prop_assert!(evaluate(&ScheduleRequest::new(lr, epochs, kind)).is_empty());
    }

    #[test]
    fn prop_oversized_epochs_give_empty(
        lr in 1e-6f64..1.0,
        epochs in prop_oneof![
            Just(MAX_PREVIEW_EPOCHS + 1),
            Just(i64::MAX),
            (MAX_PREVIEW_EPOCHS + 1)..i64::MAX,
        ],
        kind in arb_kind(),
    ) {
        let request = ScheduleRequest::new(lr, epochs, kind);
        prop_assert!(!request.is_previewable());
        prop_assert!(evaluate(&request).is_empty());
    }

    #[test]
    fn prop_plateau_never_increases(request in arb_request()) {
        let mut request = request;
        request.kind = SchedulerKind::PlateauReduction;
        let values: Vec<f64> = evaluate(&request).values().collect();
        for pair in values.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }
}
