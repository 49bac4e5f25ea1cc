//! Approximant coefficients and reduction constants.
//!
//! The tables were produced by the order search (`approx-libm search`) and
//! are laid out exactly as it prints them.

#![allow(clippy::excessive_precision)]

use super::Table;
use crate::order::Order;

/// Constants used by argument reduction and special-case handling.
#[derive(Clone, Copy, Debug)]
pub struct Constants<T> {
    pub log2_e: T,
    pub ln2: T,
    /// `ln 2` as a short leading part and a correction.
    pub ln2_split: [T; 2],
    pub log2_10: T,
    pub log10_2: T,
    /// `log₁₀ 2` as a short leading part and a correction.
    pub log10_2_split: [T; 2],
    pub pi: T,
    pub frac_pi_2: T,
    pub frac_pi_4: T,
    pub sqrt_half: T,
    pub frac_ln2_2: T,
    pub two_pi: T,
    /// 2π as three parts, the first two short enough that multiples by
    /// the reduction quotient are exact.
    pub two_pi_split: [T; 3],
    /// π/2 as a leading part and a correction.
    pub frac_pi_2_split: [T; 2],
    /// Above this magnitude multiples of `two_pi_split[0]` are no longer
    /// exact and trig arguments are reduced against [`TWO_OVER_PI`].
    pub trig_large: T,
    /// Odd multiples of π/4 separating the quadrants of `[0, 2π)`.
    pub quadrant_bounds: [T; 4],
    /// Smallest and largest arguments of `exp` with a finite nonzero result.
    pub exp_range: [T; 2],
    pub exp10_range: [T; 2],
    /// Largest argument of `sinh` and `cosh` with a finite result.
    pub sinh_overflow: T,
    /// Below this magnitude `sinh(x)` rounds to `x`.
    pub sinh_tiny: T,
    /// Above this magnitude `tanh(x)` rounds to ±1.
    pub hyperbolic_large: T,
    /// Above this magnitude `erf(x)` rounds to ±1.
    pub erf_saturation: T,
    /// Above this argument `erfc(x)` underflows to zero.
    pub erfc_cutoff: T,
    /// Significant bits kept when splitting `x` for `exp(−x²)`.
    pub erfc_split: u32,
}

pub const SINGLE: Constants<f32> = Constants {
    log2_e: 1.442695,
    ln2: 0.6931472,
    ln2_split: [0.69317627, -2.9088971e-5],
    log2_10: 3.321928,
    log10_2: 0.30103,
    log10_2_split: [0.3010254, 4.605039e-6],
    pi: 3.1415927,
    frac_pi_2: 1.5707964,
    frac_pi_4: 0.7853982,
    sqrt_half: 0.70710677,
    frac_ln2_2: 0.3465736,
    two_pi: 6.2831855,
    two_pi_split: [6.283203, -1.7814338e-5, -3.4822063e-9],
    frac_pi_2_split: [1.570796, 3.1391647e-7],
    trig_large: 4096.0,
    quadrant_bounds: [0.7853982, 2.3561945, 3.9269907, 5.497787],
    exp_range: [-103.97208, 88.72284],
    exp10_range: [-45.1545, 38.53184],
    sinh_overflow: 89.415985,
    sinh_tiny: 0.00024414062,
    hyperbolic_large: 9.0,
    erf_saturation: 4.0,
    erfc_cutoff: 10.1276245,
    erfc_split: 12,
};

pub const DOUBLE: Constants<f64> = Constants {
    log2_e: 1.4426950408889634,
    ln2: 0.6931471805599453,
    ln2_split: [0.6931471806019545, -4.2009150726810846e-11],
    log2_10: 3.321928094887362,
    log10_2: 0.3010299956639812,
    log10_2_split: [0.3010299956658855, -1.9043128467164274e-12],
    pi: 3.141592653589793,
    frac_pi_2: 1.5707963267948966,
    frac_pi_4: 0.7853981633974483,
    sqrt_half: 0.7071067811865476,
    frac_ln2_2: 0.34657359027997264,
    two_pi: 6.283185307179586,
    two_pi_split: [
        6.283185310661793,
        -3.4822062768002926e-9,
        -1.401373759235972e-18,
    ],
    frac_pi_2_split: [1.5707963267948966, 6.123233995736766e-17],
    trig_large: 1048576.0,
    quadrant_bounds: [
        0.7853981633974483,
        2.356194490192345,
        3.9269908169872414,
        5.497787143782138,
    ],
    exp_range: [-745.1332191019412, 709.782712893384],
    exp10_range: [-323.60724533877976, 308.25471555991675],
    sinh_overflow: 710.475860073944,
    sinh_tiny: 3.725290298461914e-9,
    hyperbolic_large: 22.0,
    erf_saturation: 6.0,
    erfc_cutoff: 27.226017111108362,
    erfc_split: 26,
};

/// Binary digits of 2/π, most significant first, enough to reduce any finite
/// `f64`.
pub static TWO_OVER_PI: [u64; 20] = [
    0xa2f9836e4e441529,
    0xfc2757d1f534ddc0,
    0xdb6295993c439041,
    0xfe5163abdebbc561,
    0xb7246e3a424dd2e0,
    0x06492eea09d1921c,
    0xfe1deb1cb129a73e,
    0xe88235f52ebb4484,
    0xe99c7026b45f7e41,
    0x3991d639835339f4,
    0x9c845f8bbdf9283b,
    0x1ff897ffde05980f,
    0xef2f118b5a0a6d1f,
    0x6d367ecf27cb09b7,
    0x4f463f669e5fea2d,
    0x7527bac7ebe5f17b,
    0x3d0739f78a5292ea,
    0x6bfb5fb11f8d5d08,
    0x56033046fc7b6bab,
    0xf0cfbc209af4361d,
];

pub mod single {
    use super::*;

    pub static EXP2: Table<f32> = Table::new(
        Order::new(4, 1),
        &[
            1.0,
            0.5636963,
            0.15051492,
            0.024343502,
            0.0025463812,
            -0.12944944,
        ],
    );

    pub static LOG2: Table<f32> =
        Table::new(Order::new(1, 1), &[2.88539, -0.7768232, -0.6025547]);

    pub static SIN: Table<f32> = Table::new(
        Order::new(3, 0),
        &[1.0, -0.16666664, 0.008332704, -0.00019578567],
    );

    pub static COS: Table<f32> = Table::new(
        Order::new(4, 0),
        &[1.0, -0.5, 0.041666653, -0.001388778, 2.44848e-5],
    );

    pub static ATAN_ZERO: Table<f32> = Table::new(
        Order::new(3, 1),
        &[1.0, 0.43084717, -0.054737717, 0.0102231875, 0.76418036],
    );

    pub static ATAN_ONE: Table<f32> = Table::new(
        Order::new(6, 2),
        &[
            0.7853982,
            1.1918603,
            0.48770112,
            0.052342307,
            -0.021208793,
            0.0065339655,
            -0.0011869743,
            0.88090384,
            0.3784694,
        ],
    );

    pub static EXPM1: Table<f32> = Table::new(
        Order::new(0, 4),
        &[1.0, -0.5, 0.08333322, 0.0, -0.0013839395],
    );

    pub static ERF: Table<f32> = Table::new(
        Order::new(2, 3),
        &[
            1.1283792,
            0.11356265,
            0.033590227,
            0.4339756,
            0.07442708,
            0.0052211876,
        ],
    );

    pub static ERFC_MID: Table<f32> = Table::new(
        Order::new(3, 3),
        &[
            0.5641078,
            1.8203251,
            1.0325593,
            0.056204885,
            3.7233858,
            2.9741485,
            0.42531544,
        ],
    );

    pub static ERFC_TAIL: Table<f32> = Table::new(
        Order::new(5, 1),
        &[
            0.56418943,
            1.729937,
            -0.5838483,
            0.47488245,
            -0.42025557,
            0.23089023,
            3.5661976,
        ],
    );
}

pub mod double {
    use super::*;

    pub static EXP2: Table<f64> = Table::new(
        Order::new(8, 2),
        &[
            1.0,
            0.5587148769421659,
            0.15202800164428715,
            0.026663766095227137,
            0.003353600642746795,
            0.0003169381096271763,
            2.2715168784485217e-5,
            1.1891763259892658e-6,
            3.881308367601002e-8,
            -0.13443230361777508,
            0.0049828669138992305,
        ],
    );

    pub static LOG2: Table<f64> = Table::new(
        Order::new(4, 2),
        &[
            2.8853900817779268,
            -3.0434390983927004,
            0.5210341044673685,
            0.037496319748314605,
            0.004229308427226916,
            -1.3881089484617346,
            0.44327964306408296,
        ],
    );

    pub static SIN: Table<f64> = Table::new(
        Order::new(6, 0),
        &[
            1.0,
            -0.16666666666666666,
            0.008333333333332466,
            -0.00019841269839327536,
            2.755731752213484e-6,
            -2.5051437379591582e-8,
            1.5940239269144878e-10,
        ],
    );

    pub static COS: Table<f64> = Table::new(
        Order::new(7, 0),
        &[
            1.0,
            -0.5,
            0.04166666666666666,
            -0.001388888888888659,
            2.4801587298632132e-5,
            -2.7557317406370545e-7,
            2.087619443813265e-9,
            -1.1386810444187771e-11,
        ],
    );

    pub static ATAN_ZERO: Table<f64> = Table::new(
        Order::new(7, 3),
        &[
            1.0,
            1.7719692246340968,
            0.9074218534028493,
            0.1040332360473016,
            -0.006328408699314557,
            0.0008125796947113385,
            -0.00011427723330734162,
            1.1537752474038101e-5,
            2.10530255796743,
            1.4091893727253262,
            0.29555965821938307,
        ],
    );

    pub static ATAN_ONE: Table<f64> = Table::new(
        Order::new(18, 2),
        &[
            0.7853981633974483,
            1.2459640153174123,
            0.578603878568191,
            0.07106339713121626,
            -0.033439652034422965,
            0.012529630768462755,
            -0.0029114387479556468,
            -0.0004001505914260342,
            0.0009021319488046927,
            -0.0005488096436252776,
            0.00017288501098011185,
            1.6092601430875362e-5,
            -5.8226367819102536e-5,
            3.874874301022982e-5,
            -1.275222738739105e-5,
            -1.0513619882338783e-6,
            3.974796732052711e-6,
            -2.3623162672500776e-6,
            6.025053714109832e-7,
            0.949790883251556,
            0.4503555692215439,
        ],
    );

    pub static EXPM1: Table<f64> = Table::new(
        Order::new(2, 6),
        &[
            1.0,
            2.016153679783741e-39,
            0.024998577145894544,
            -0.5,
            0.1083319104792275,
            -0.012499288572947272,
            0.000694325873341327,
            -2.7863401989476673e-42,
            -1.6514661769408062e-6,
        ],
    );

    pub static ERF: Table<f64> = Table::new(
        Order::new(9, 2),
        &[
            1.1283791670955126,
            -0.18415090610559792,
            0.05778909904721978,
            -0.010649625679089867,
            0.001547433791834787,
            -0.00017898612740718917,
            1.6520181447886363e-5,
            -1.1904548436453583e-6,
            6.229768083000971e-8,
            -1.866548108066302e-9,
            0.17013384199602977,
            0.007925536238645751,
        ],
    );

    pub static ERFC_MID: Table<f64> = Table::new(
        Order::new(10, 6),
        &[
            0.5641895504989916,
            8.28030596953689,
            41.774137486171846,
            90.49802459385482,
            85.68954997928132,
            31.440828139508195,
            2.726877758261098,
            -0.10564456069501858,
            0.00787883352226707,
            -0.0005583820896976567,
            2.3754320203561623e-5,
            15.17645705992124,
            80.8810458856881,
            191.33509498784855,
            208.80624804727253,
            97.87975507520773,
            15.037473718436663,
        ],
    );

    pub static ERFC_TAIL: Table<f64> = Table::new(
        Order::new(11, 7),
        &[
            0.5641895835477562,
            21.805251051655702,
            320.02498263081293,
            2279.0067719196077,
            8336.748645670095,
            15188.22359250959,
            12019.698672974559,
            2582.2469201892472,
            -220.83528217402352,
            40.446966245096725,
            -7.733979726550825,
            0.9617170597398177,
            39.14880119646855,
            586.0539134482271,
            4304.974684950629,
            16556.290651073687,
            32841.308013561764,
            30527.338157412174,
            10005.236274466688,
        ],
    );
}
