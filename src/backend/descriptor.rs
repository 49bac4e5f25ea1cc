//! Backend idiom tables.

use strum_macros::{
    Display, EnumCount, EnumString, IntoStaticStr, VariantArray,
};

/// An instruction-set family targeted by the generator.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Isa {
    Scalar,
    Sse,
    Avx,
    Avx512,
    Neon,
}

impl Isa {
    /// Base name of the generated file.
    pub fn stem(self) -> &'static str {
        self.into()
    }

    pub fn arch(self) -> Option<&'static str> {
        match self {
            Isa::Scalar => None,
            Isa::Sse | Isa::Avx | Isa::Avx512 => Some("x86_64"),
            Isa::Neon => Some("aarch64"),
        }
    }

    /// Imports needed by the generated code.
    pub fn preamble(self) -> Option<&'static str> {
        match self.arch()? {
            "aarch64" => Some("use core::arch::aarch64::*;"),
            _ => Some("use core::arch::x86_64::*;"),
        }
    }

    /// Features enabled on every generated function. Functions of an ISA
    /// with required features are `unsafe` to call.
    pub fn target_feature(self) -> Option<&'static str> {
        match self {
            Isa::Scalar => None,
            Isa::Sse => Some("sse2,fma"),
            Isa::Avx => Some("avx2,fma"),
            Isa::Avx512 => Some("avx512f"),
            Isa::Neon => Some("neon"),
        }
    }
}

/// Scalar element type of a vector.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum ElementType {
    F32,
    F64,
}

impl ElementType {
    pub fn bits(self) -> u32 {
        match self {
            ElementType::F32 => 32,
            ElementType::F64 => 64,
        }
    }

    /// Name of the module holding this element type's functions.
    pub fn module(self) -> &'static str {
        match self {
            ElementType::F32 => "single",
            ElementType::F64 => "double",
        }
    }
}

/// Textual idioms of one backend. Templates refer to their operands as
/// `{a}`, `{b}` and `{c}`; `fma` computes `a·b + c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackendDescriptor {
    pub isa: Isa,
    pub element: ElementType,
    pub lanes: u32,
    /// The vector type.
    pub vector: &'static str,
    pub broadcast: &'static str,
    pub fma: &'static str,
    pub divide: &'static str,
}

pub static DESCRIPTORS: [BackendDescriptor; 10] = [
    BackendDescriptor {
        isa: Isa::Scalar,
        element: ElementType::F32,
        lanes: 1,
        vector: "f32",
        broadcast: "{a}",
        fma: "{a}.mul_add({b}, {c})",
        divide: "{a} / {b}",
    },
    BackendDescriptor {
        isa: Isa::Scalar,
        element: ElementType::F64,
        lanes: 1,
        vector: "f64",
        broadcast: "{a}",
        fma: "{a}.mul_add({b}, {c})",
        divide: "{a} / {b}",
    },
    BackendDescriptor {
        isa: Isa::Sse,
        element: ElementType::F32,
        lanes: 4,
        vector: "__m128",
        broadcast: "_mm_set1_ps({a})",
        fma: "_mm_fmadd_ps({a}, {b}, {c})",
        divide: "_mm_div_ps({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Sse,
        element: ElementType::F64,
        lanes: 2,
        vector: "__m128d",
        broadcast: "_mm_set1_pd({a})",
        fma: "_mm_fmadd_pd({a}, {b}, {c})",
        divide: "_mm_div_pd({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Avx,
        element: ElementType::F32,
        lanes: 8,
        vector: "__m256",
        broadcast: "_mm256_set1_ps({a})",
        fma: "_mm256_fmadd_ps({a}, {b}, {c})",
        divide: "_mm256_div_ps({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Avx,
        element: ElementType::F64,
        lanes: 4,
        vector: "__m256d",
        broadcast: "_mm256_set1_pd({a})",
        fma: "_mm256_fmadd_pd({a}, {b}, {c})",
        divide: "_mm256_div_pd({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Avx512,
        element: ElementType::F32,
        lanes: 16,
        vector: "__m512",
        broadcast: "_mm512_set1_ps({a})",
        fma: "_mm512_fmadd_ps({a}, {b}, {c})",
        divide: "_mm512_div_ps({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Avx512,
        element: ElementType::F64,
        lanes: 8,
        vector: "__m512d",
        broadcast: "_mm512_set1_pd({a})",
        fma: "_mm512_fmadd_pd({a}, {b}, {c})",
        divide: "_mm512_div_pd({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Neon,
        element: ElementType::F32,
        lanes: 4,
        vector: "float32x4_t",
        broadcast: "vdupq_n_f32({a})",
        fma: "vfmaq_f32({c}, {a}, {b})",
        divide: "vdivq_f32({a}, {b})",
    },
    BackendDescriptor {
        isa: Isa::Neon,
        element: ElementType::F64,
        lanes: 2,
        vector: "float64x2_t",
        broadcast: "vdupq_n_f64({a})",
        fma: "vfmaq_f64({c}, {a}, {b})",
        divide: "vdivq_f64({a}, {b})",
    },
];

impl BackendDescriptor {
    pub fn lookup(
        isa: Isa,
        element: ElementType,
    ) -> Option<&'static BackendDescriptor> {
        DESCRIPTORS.iter().find(|descriptor| {
            descriptor.isa == isa && descriptor.element == element
        })
    }

    pub fn is_unsafe(&self) -> bool {
        self.isa.target_feature().is_some()
    }

    pub fn render_broadcast(&self, a: &str) -> String {
        fill(self.broadcast, [a, "", ""])
    }

    pub fn render_fma(&self, a: &str, b: &str, c: &str) -> String {
        fill(self.fma, [a, b, c])
    }

    pub fn render_divide(&self, a: &str, b: &str) -> String {
        fill(self.divide, [a, b, ""])
    }
}

/// Substitutes operands into a template in a single left-to-right pass.
fn fill(template: &str, operands: [&str; 3]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);

        let operand = match rest.get(start..start + 3) {
            Some("{a}") => operands[0],
            Some("{b}") => operands[1],
            Some("{c}") => operands[2],
            _ => {
                out.push('{');
                rest = &rest[start + 1..];

                continue;
            }
        };

        out.push_str(operand);
        rest = &rest[start + 3..];
    }

    out.push_str(rest);
    out
}
