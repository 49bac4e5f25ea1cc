//! Vectorizable approximations of elementary functions.
//!
//! [`approx`] derives rational approximants offline, [`eval`] evaluates the
//! compiled-in approximants at run time, and [`backend`] renders the same
//! evaluators as SIMD source code.

pub mod approx;
pub mod backend;
pub mod eval;
pub mod format;
pub mod opts;
pub mod order;
pub mod utils;

pub use eval::{
    f32_acos, f32_asin, f32_atan, f32_atan2, f32_cos, f32_cosh, f32_erf,
    f32_erfc, f32_exp, f32_exp2, f32_exp10, f32_expm1, f32_log, f32_log2,
    f32_log10, f32_sin, f32_sincos, f32_sinh, f32_tan, f32_tanh, f64_acos,
    f64_asin, f64_atan, f64_atan2, f64_cos, f64_cosh, f64_erf, f64_erfc,
    f64_exp, f64_exp2, f64_exp10, f64_expm1, f64_log, f64_log2, f64_log10,
    f64_sin, f64_sincos, f64_sinh, f64_tan, f64_tanh,
};
