use assert_float_eq::assert_float_absolute_eq;
use lawfit::{Error, ks2_p_value, sup_distance};

#[test]
fn sup_distance_is_symmetric() {
    let a = [0.1, 0.4, 0.9, 0.2];
    let b = [0.3, 0.3, 0.5, 0.8];
    assert_eq!(sup_distance(&a, &b).unwrap(), sup_distance(&b, &a).unwrap());
}

#[test]
fn sup_distance_of_a_sequence_with_itself_is_zero() {
    let a = [0.25, 0.5, 0.75, 1.0];
    assert_eq!(sup_distance(&a, &a).unwrap(), 0.0);
}

#[test]
fn sup_distance_is_tight() {
    let a: [f64; 4] = [0.0, 0.5, 1.0, 0.25];
    let b: [f64; 4] = [0.1, 0.2, 0.4, 0.25];
    let expected = a
        .iter()
        .zip(&b)
        .map(|(x, y)| (x - y).abs())
        .fold(f64::NEG_INFINITY, f64::max);

    let sup = sup_distance(&a, &b).unwrap();
    assert_eq!(sup, expected);
    for (x, y) in a.iter().zip(&b) {
        assert!(sup >= (x - y).abs());
    }
}

#[test]
fn sup_distance_never_truncates() {
    let result = sup_distance(&[0.0, 1.0], &[0.0, 1.0, 2.0]);
    assert_eq!(result, Err(Error::LengthMismatch { left: 2, right: 3 }));

    let result = sup_distance(&[0.0, 1.0, 2.0], &[]);
    assert_eq!(result, Err(Error::LengthMismatch { left: 3, right: 0 }));
}

#[test]
fn sup_distance_of_empty_sequences_is_the_sentinel() {
    let empty: [f64; 0] = [];
    assert_eq!(sup_distance(&empty, &empty).unwrap(), -1.0);
}

#[test]
fn ks2_p_value_is_high_for_identical_samples() {
    let a: Vec<f64> = (0..100).map(|i| f64::from(i) / 100.0).collect();
    let p = ks2_p_value(&a, &a).unwrap();
    assert_float_absolute_eq!(p, 1.0, 1e-9);
}

#[test]
fn ks2_p_value_is_low_for_disjoint_samples() {
    let a: Vec<f64> = (0..50).map(f64::from).collect();
    let b: Vec<f64> = (0..50).map(|i| f64::from(i) + 1000.0).collect();
    let p = ks2_p_value(&a, &b).unwrap();
    assert!(p < 1e-6);
}

#[test]
fn ks2_p_value_is_symmetric() {
    let a = [0.1, 0.2, 0.3, 0.7, 0.9, 1.3];
    let b = [0.2, 0.4, 0.5, 0.6, 1.1];
    assert_eq!(ks2_p_value(&a, &b).unwrap(), ks2_p_value(&b, &a).unwrap());
}

#[test]
fn ks2_p_value_rejects_empty_samples() {
    let empty: [f64; 0] = [];
    assert_eq!(ks2_p_value(&empty, &[1.0]), Err(Error::EmptySample));
    assert_eq!(ks2_p_value(&[1.0], &empty), Err(Error::EmptySample));
}

#[test]
fn ks2_p_value_rejects_nan() {
    assert_eq!(
        ks2_p_value(&[0.1, f64::NAN], &[0.1, 0.2]),
        Err(Error::ContainsNaN)
    );
}
