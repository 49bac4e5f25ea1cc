use approx_libm::*;

#[test]
fn logarithm_domain() {
    assert_eq!(f64_log2(0.0), f64::NEG_INFINITY);
    assert_eq!(f32_log(-0.0), f32::NEG_INFINITY);
    assert!(f64_log10(-1e-300).is_nan());
    assert!(f32_log2(f32::NEG_INFINITY).is_nan());
    assert_eq!(f32_log2(f32::INFINITY), f32::INFINITY);
}

#[test]
fn inverse_trig_domain() {
    assert!(f64_asin(1.0 + f64::EPSILON).is_nan());
    assert!(f32_acos(-2.0).is_nan());
    assert!(f64_acos(f64::INFINITY).is_nan());
    assert!(f32_atan2(f32::NAN, 0.0).is_nan());
    assert!(f64_atan2(1.0, f64::NAN).is_nan());
}

#[test]
fn trig_of_non_finite() {
    for x in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert!(f64_sin(x).is_nan());
        assert!(f64_cos(x).is_nan());
        assert!(f64_tan(x).is_nan());

        let (s, c) = f32_sincos(x as f32);

        assert!(s.is_nan() && c.is_nan());
    }
}

#[test]
fn sincos_agrees_with_parts() {
    for x in [0.1, 1.0, 2.5, -4.0, 100.0, 12345.678] {
        assert_eq!(f64_sincos(x), (f64_sin(x), f64_cos(x)));
        assert_eq!(f32_sincos(x as f32), (f32_sin(x as f32), f32_cos(x as f32)));
    }
}

#[test]
fn exponential_limits() {
    assert_eq!(f64_exp(f64::NEG_INFINITY), 0.0);
    assert_eq!(f32_exp2(f32::INFINITY), f32::INFINITY);
    assert_eq!(f64_exp10(400.0), f64::INFINITY);
    assert_eq!(f32_expm1(-100.0), -1.0);
    assert!(f64_exp(f64::NAN).is_nan());
}

#[test]
fn erfc_underflows_to_zero() {
    assert_eq!(f64_erfc(27.3), 0.0);
    assert!(f64_erfc(26.5) > 0.0);
    assert_eq!(f32_erfc(10.2), 0.0);
    assert!(f32_erfc(9.5) > 0.0);
    assert_eq!(f32_erfc(-20.0), 2.0);
    assert_eq!(f64_erf(-6.0), -1.0);
}
