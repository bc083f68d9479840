use crate::features::bmi::{evaluate, BmiError, BmiInput, WeightClass};
use crate::features::Severity;

fn input(weight_kg: f64, height_cm: f64) -> BmiInput {
    BmiInput {
        weight_kg,
        height_cm,
    }
}

#[test]
fn computes_index_and_class_for_typical_reading() {
    let reading = evaluate(input(70.0, 170.0)).expect("valid measurements");

    assert_eq!(reading.formatted(), "24.22");
    assert_eq!(reading.class, WeightClass::Normal);
}

#[test]
fn lower_bound_at_normal_is_inclusive() {
    let weight_kg = 18.5 * 1.7 * 1.7;
    let reading = evaluate(input(weight_kg, 170.0)).expect("valid measurements");

    assert_eq!(reading.formatted(), "18.50");
    assert_eq!(reading.class, WeightClass::Normal);
}

#[test]
fn threshold_boundaries_belong_to_the_heavier_class() {
    // A one-meter height makes the index equal the weight exactly.
    assert_eq!(
        evaluate(input(18.5, 100.0)).expect("valid").class,
        WeightClass::Normal
    );
    assert_eq!(
        evaluate(input(25.0, 100.0)).expect("valid").class,
        WeightClass::Overweight
    );
    assert_eq!(
        evaluate(input(30.0, 100.0)).expect("valid").class,
        WeightClass::Obese
    );
    assert_eq!(
        evaluate(input(18.4, 100.0)).expect("valid").class,
        WeightClass::Underweight
    );
}

#[test]
fn zero_height_is_rejected_before_any_division() {
    let error = evaluate(input(70.0, 0.0)).expect_err("zero height rejected");

    match error {
        BmiError::InvalidHeight(value) => assert_eq!(value, 0.0),
        other => panic!("expected invalid height, got {other:?}"),
    }
}

#[test]
fn negative_height_is_rejected() {
    let error = evaluate(input(70.0, -170.0)).expect_err("negative height rejected");

    assert!(matches!(error, BmiError::InvalidHeight(_)));
}

#[test]
fn non_positive_weight_is_rejected() {
    assert!(matches!(
        evaluate(input(0.0, 170.0)),
        Err(BmiError::InvalidWeight(_))
    ));
    assert!(matches!(
        evaluate(input(-1.0, 170.0)),
        Err(BmiError::InvalidWeight(_))
    ));
}

#[test]
fn non_finite_measurements_are_rejected() {
    assert!(matches!(
        evaluate(input(f64::NAN, 170.0)),
        Err(BmiError::InvalidWeight(_))
    ));
    assert!(matches!(
        evaluate(input(70.0, f64::INFINITY)),
        Err(BmiError::InvalidHeight(_))
    ));
}

#[test]
fn each_class_carries_its_display_severity() {
    assert_eq!(WeightClass::Underweight.severity(), Severity::Info);
    assert_eq!(WeightClass::Normal.severity(), Severity::Success);
    assert_eq!(WeightClass::Overweight.severity(), Severity::Warning);
    assert_eq!(WeightClass::Obese.severity(), Severity::Error);
}

#[test]
fn evaluation_is_pure_across_repeated_calls() {
    let first = evaluate(input(82.0, 179.0)).expect("valid");
    let second = evaluate(input(82.0, 179.0)).expect("valid");

    assert_eq!(first, second);
    assert_eq!(first.class, WeightClass::Overweight);
}
