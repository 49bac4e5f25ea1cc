//! Accuracy of the runtime functions against `std` and `libm` references.

use approx_libm::eval::{Family, Function, Real};

/// Error of `got` relative to `expected`, measured absolutely where
/// `|expected| < floor`.
fn error(got: f64, expected: f64, floor: f64) -> f64 {
    if got == expected {
        return 0.0;
    }

    (got - expected).abs() / expected.abs().max(floor)
}

fn reference(function: Function, x: f64) -> f64 {
    match function {
        Function::Exp2 => x.exp2(),
        Function::Exp => x.exp(),
        Function::Exp10 => 10f64.powf(x),
        Function::Expm1 => x.exp_m1(),
        Function::Log2 => x.log2(),
        Function::Log => x.ln(),
        Function::Log10 => x.log10(),
        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => x.tan(),
        Function::Atan => x.atan(),
        Function::Asin => x.asin(),
        Function::Acos => x.acos(),
        Function::Sinh => x.sinh(),
        Function::Cosh => x.cosh(),
        Function::Tanh => x.tanh(),
        Function::Erf => libm::erf(x),
        Function::Erfc => libm::erfc(x),
        Function::Atan2 => unreachable!(),
    }
}

/// Cell midpoints of a uniform grid over `[lo, hi]`.
fn linear(lo: f64, hi: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / count as f64;

    (0..count).map(move |i| lo + step * (i as f64 + 0.5))
}

/// Cell midpoints of a geometric grid over `[2^lo, 2^hi]`.
fn geometric(lo: f64, hi: f64, count: usize) -> impl Iterator<Item = f64> {
    linear(lo, hi, count).map(f64::exp2)
}

fn check<T: Real>(
    function: Function,
    points: impl Iterator<Item = f64>,
    floor: f64,
    widen: fn(T) -> f64,
    narrow: fn(f64) -> T,
) {
    let tolerance = function.family().tolerance::<T>();

    for point in points {
        let x = narrow(point);
        let Some(got) = function.eval(&[x]) else {
            panic!("{function} is not unary");
        };

        let expected = reference(function, widen(x));
        let err = error(widen(got), expected, floor);

        assert!(
            err <= tolerance,
            "{function}({x:?}) = {got:?}, expected {expected:e}, error {err:e}"
        );
    }
}

fn check_f32(
    function: Function,
    points: impl Iterator<Item = f64>,
    floor: f64,
) {
    check::<f32>(function, points, floor, f64::from, |x| x as f32);
}

fn check_f64(
    function: Function,
    points: impl Iterator<Item = f64>,
    floor: f64,
) {
    check::<f64>(function, points, floor, |x| x, |x| x);
}

const N: usize = 2000;

#[test]
fn exponential_single() {
    check_f32(Function::Exp2, linear(-120.0, 120.0, N), 0.0);
    check_f32(Function::Exp, linear(-85.0, 85.0, N), 0.0);
    check_f32(Function::Exp10, linear(-30.0, 30.0, N), 0.0);
    check_f32(Function::Expm1, linear(-1.0, 1.0, N), 0.0);
}

#[test]
fn exponential_double() {
    check_f64(Function::Exp2, linear(-1000.0, 1000.0, N), 0.0);
    check_f64(Function::Exp, linear(-700.0, 700.0, N), 0.0);
    check_f64(Function::Exp10, linear(-30.0, 30.0, N), 0.0);
    check_f64(Function::Expm1, linear(-1.0, 1.0, N), 0.0);
}

#[test]
fn logarithmic() {
    for function in [Function::Log2, Function::Log, Function::Log10] {
        check_f32(function, geometric(-100.0, 100.0, N), 0.0);
        check_f32(function, linear(0.5, 2.0, N), 0.0);
        check_f64(function, geometric(-1000.0, 1000.0, N), 0.0);
        check_f64(function, linear(0.5, 2.0, N), 0.0);
    }
}

#[test]
fn trigonometric() {
    for function in [Function::Sin, Function::Cos] {
        check_f32(function, linear(-10.0, 10.0, N), 0.25);
        check_f64(function, linear(-10.0, 10.0, N), 0.25);

        check_f32(function, linear(-1000.0, 1000.0, N), 1.0);
        check_f64(function, linear(-1000.0, 1000.0, N), 1.0);
    }

    check_f32(Function::Tan, linear(-1.4, 1.4, N), 0.0);
    check_f64(Function::Tan, linear(-1.4, 1.4, N), 0.0);
}

#[test]
fn trigonometric_large_arguments() {
    for function in [Function::Sin, Function::Cos] {
        check_f32(function, linear(1000.0, 5000.0, N), 1.0);
        check_f32(function, geometric(13.0, 27.0, N), 1.0);
        check_f32(function, geometric(0.0, 127.99, N), 1.0);
        check_f32(function, geometric(0.0, 127.99, N).map(|x| -x), 1.0);

        check_f64(function, linear(1e6, 1.1e6, N), 1.0);
        check_f64(function, geometric(0.0, 1023.99, N), 1.0);
        check_f64(function, geometric(0.0, 1023.99, N).map(|x| -x), 1.0);
        check_f64(function, [f64::MAX, -f64::MAX].into_iter(), 1.0);
    }
}

#[test]
fn inverse_trigonometric() {
    check_f32(Function::Atan, linear(-100.0, 100.0, N), 0.0);
    check_f64(Function::Atan, linear(-100.0, 100.0, N), 0.0);

    for function in [Function::Asin, Function::Acos] {
        check_f32(function, linear(-1.0, 1.0, N), 0.0);
        check_f64(function, linear(-1.0, 1.0, N), 0.0);
    }
}

#[test]
fn atan2_around_the_circle() {
    let count = 720;
    let step = std::f64::consts::TAU / count as f64;

    for radius in [1e-3, 1.0, 37.5] {
        for i in 0..count {
            let angle = step * (i as f64 + 0.5) - std::f64::consts::PI;
            let (y, x) = (radius * angle.sin(), radius * angle.cos());

            let expected = y.atan2(x);
            let err = error(approx_libm::f64_atan2(y, x), expected, 0.0);

            assert!(err <= Family::InverseTrigonometric.tolerance::<f64>());

            let (y, x) = (y as f32, x as f32);
            let expected = f64::from(y).atan2(f64::from(x));
            let got = f64::from(approx_libm::f32_atan2(y, x));

            assert!(
                error(got, expected, 0.0)
                    <= Family::InverseTrigonometric.tolerance::<f32>()
            );
        }
    }
}

#[test]
fn hyperbolic() {
    for function in [Function::Sinh, Function::Cosh] {
        check_f32(function, linear(-10.0, 10.0, N), 0.0);
        check_f64(function, linear(-10.0, 10.0, N), 0.0);
    }

    check_f32(Function::Tanh, linear(-5.0, 5.0, N), 0.0);
    check_f64(Function::Tanh, linear(-5.0, 5.0, N), 0.0);
}

#[test]
fn error_function() {
    check_f32(Function::Erf, linear(-5.0, 5.0, N), 0.0);
    check_f64(Function::Erf, linear(-5.0, 5.0, N), 0.0);

    check_f32(Function::Erfc, linear(-3.0, 8.0, N), 0.0);
    check_f64(Function::Erfc, linear(-3.0, 25.0, N), 0.0);
}
