//! Rendering of generated units into backend source text.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use strum::VariantArray;

use super::descriptor::{BackendDescriptor, ElementType, Isa};
use super::unit::{Expr, GeneratedUnit, UnitKind};
use crate::order::Order;

/// Highest total order emitted by default.
pub const DEFAULT_CEILING: u32 = 30;

/// Accumulates the definitions of one backend module, emitting each unit
/// once and after the units it calls.
pub struct Emitter {
    descriptor: &'static BackendDescriptor,
    indent: usize,
    generated: HashSet<UnitKind>,
    text: String,
}

impl Emitter {
    pub fn new(descriptor: &'static BackendDescriptor) -> Emitter {
        Emitter {
            descriptor,
            indent: 0,
            generated: HashSet::new(),
            text: String::new(),
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Emitter {
        self.indent = indent;
        self
    }

    pub fn emit(&mut self, kind: UnitKind) {
        if !self.generated.insert(kind) {
            return;
        }

        let unit = GeneratedUnit::new(kind);

        for dependency in unit.dependencies() {
            self.emit(dependency);
        }

        self.write_unit(&unit);
    }

    pub fn finish(self) -> String {
        self.text
    }

    fn write_unit(&mut self, unit: &GeneratedUnit) {
        let d = self.descriptor;
        let elem = d.element;

        let input = if unit.uses_input() { "x" } else { "_x" };
        let qualifier = if d.is_unsafe() { "pub unsafe fn" } else { "pub fn" };
        let body = self.render(&unit.body);

        if !self.text.is_empty() {
            self.text.push('\n');
        }

        self.line("#[inline]");

        if let Some(features) = d.isa.target_feature() {
            self.line(&format!("#[target_feature(enable = \"{features}\")]"));
        }

        self.line(&format!(
            "{qualifier} {}({input}: {}, c: &[{elem}]) -> {} {{",
            unit.name(),
            d.vector,
            d.vector,
        ));

        if d.is_unsafe() {
            self.line(&format!("    unsafe {{ {body} }}"));
        } else {
            self.line(&format!("    {body}"));
        }

        self.line("}");
    }

    fn line(&mut self, content: &str) {
        self.text.push_str(&" ".repeat(self.indent));
        self.text.push_str(content);
        self.text.push('\n');
    }

    fn render(&self, expr: &Expr) -> String {
        let d = self.descriptor;

        match expr {
            Expr::Input => String::from("x"),
            Expr::Coefficient(index) => format!("c[{index}]"),
            Expr::One => String::from("1.0"),
            Expr::Broadcast(a) => d.render_broadcast(&self.render(a)),
            Expr::MulAdd(a, b, c) => d.render_fma(
                &self.render(a),
                &self.render(b),
                &self.render(c),
            ),
            Expr::Divide(a, b) => {
                d.render_divide(&self.render(a), &self.render(b))
            }
            Expr::Call { callee, slice } => {
                format!("{}(x, {slice})", callee.name())
            }
        }
    }
}

/// Renders `polynomial_<degree>` and the units it calls.
///
/// # Examples
///
/// ```
/// # use approx_libm::backend::{BackendDescriptor, ElementType, Isa};
/// # use approx_libm::backend::emit_polynomial;
/// #
/// let d = BackendDescriptor::lookup(Isa::Scalar, ElementType::F64).unwrap();
/// let text = emit_polynomial(d, 1);
///
/// assert!(text.contains("polynomial_0(x, &c[1..]).mul_add(x, c[0])"));
/// ```
pub fn emit_polynomial(
    descriptor: &'static BackendDescriptor,
    degree: u32,
) -> String {
    let mut emitter = Emitter::new(descriptor);

    emitter.emit(UnitKind::Polynomial(degree));
    emitter.finish()
}

/// Renders the unit for `order` and the units it calls.
pub fn emit_rational(
    descriptor: &'static BackendDescriptor,
    order: Order,
) -> String {
    let mut emitter = Emitter::new(descriptor);

    emitter.emit(order.into());
    emitter.finish()
}

/// Renders a complete source file for `isa` covering every order up to
/// `ceiling`, with one module per element type.
pub fn render_backend(isa: Isa, ceiling: u32) -> String {
    let mut text = format!(
        "// Generated by approx-libm for the {isa} backend.\n\
         // Orders up to a total degree of {ceiling}. Do not edit.\n\
         \n\
         #![allow(dead_code, unused_unsafe)]\n"
    );

    for &element in ElementType::VARIANTS {
        let Some(descriptor) = BackendDescriptor::lookup(isa, element) else {
            continue;
        };

        let mut emitter = Emitter::new(descriptor).with_indent(4);

        for order in Order::candidates(ceiling) {
            emitter.emit(order.into());
        }

        text.push('\n');

        if let Some(arch) = isa.arch() {
            text.push_str(&format!("#[cfg(target_arch = \"{arch}\")]\n"));
        }

        text.push_str(&format!("pub mod {} {{\n", element.module()));

        if let Some(preamble) = isa.preamble() {
            text.push_str(&format!("    {preamble}\n\n"));
        }

        text.push_str(&emitter.finish());
        text.push_str("}\n");
    }

    text
}

pub fn write_backend(
    isa: Isa,
    ceiling: u32,
    out: &mut impl Write,
) -> io::Result<()> {
    out.write_all(render_backend(isa, ceiling).as_bytes())
}

/// Writes one `<isa>.rs` file per backend in `isas` into `dir`, returning
/// the paths written.
pub fn write_all(
    dir: &Path,
    ceiling: u32,
    isas: &[Isa],
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(isas.len());

    for &isa in isas {
        let path = dir.join(format!("{}.rs", isa.stem()));
        let mut out = BufWriter::new(File::create(&path)?);

        write_backend(isa, ceiling, &mut out)?;
        out.flush()?;

        log::info!("wrote {} backend to {}", isa, path.display());

        paths.push(path);
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(
        isa: Isa,
        element: ElementType,
    ) -> &'static BackendDescriptor {
        BackendDescriptor::lookup(isa, element).unwrap()
    }

    #[test]
    fn sse_single_degree_one() {
        let text = emit_polynomial(descriptor(Isa::Sse, ElementType::F32), 1);

        assert!(text.contains(
            "_mm_fmadd_ps(polynomial_0(x, &c[1..]), x, _mm_set1_ps(c[0]))"
        ));
        assert!(text.contains(
            "pub unsafe fn polynomial_0(_x: __m128, c: &[f32]) -> __m128 {"
        ));
        assert!(text.contains("#[target_feature(enable = \"sse2,fma\")]"));
        assert!(
            text.find("fn polynomial_0").unwrap()
                < text.find("fn polynomial_1").unwrap()
        );
    }

    #[test]
    fn rational_body() {
        let text = emit_rational(
            descriptor(Isa::Avx, ElementType::F64),
            Order::new(2, 1),
        );

        assert!(text.contains(
            "_mm256_div_pd(polynomial_2(x, &c[..=2]), \
             _mm256_fmadd_pd(polynomial_0(x, &c[3..]), x, _mm256_set1_pd(1.0)))"
        ));

        let scalar = emit_rational(
            descriptor(Isa::Scalar, ElementType::F32),
            Order::new(1, 1),
        );

        assert!(scalar.contains(
            "pub fn rational_1_1(x: f32, c: &[f32]) -> f32 {\n    \
             polynomial_1(x, &c[..=1]) / polynomial_0(x, &c[2..]).mul_add(x, 1.0)"
        ));
        assert!(!scalar.contains("unsafe"));
    }

    #[test]
    fn each_unit_once() {
        let d = descriptor(Isa::Neon, ElementType::F32);
        let mut emitter = Emitter::new(d);

        for order in Order::candidates(4) {
            emitter.emit(order.into());
        }

        let text = emitter.finish();

        assert_eq!(text.matches("fn polynomial_2(").count(), 1);
        assert_eq!(text.matches("fn rational_1_3(").count(), 1);
        assert_eq!(text.matches("#[inline]").count(), 5 + 10);
        assert!(text.contains(
            "vfmaq_f32(vdupq_n_f32(c[0]), polynomial_0(x, &c[1..]), x)"
        ));
    }

    #[test]
    fn backend_file_layout() {
        let text = render_backend(Isa::Avx512, 2);

        assert!(text.contains("#![allow(dead_code, unused_unsafe)]"));
        assert!(
            text.contains("#[cfg(target_arch = \"x86_64\")]\npub mod single {")
        );
        assert!(
            text.contains("pub mod double {\n    use core::arch::x86_64::*;")
        );
        assert!(
            text.contains("fn rational_0_2(x: __m512d, c: &[f64]) -> __m512d")
        );

        let scalar = render_backend(Isa::Scalar, 1);

        assert!(!scalar.contains("target_arch"));
        assert!(scalar.contains("    pub fn rational_0_1("));
    }

    #[test]
    fn writes_one_file_per_isa() {
        let dir = std::env::temp_dir()
            .join(format!("approx-libm-backends-{}", std::process::id()));

        let paths = write_all(&dir, 3, Isa::VARIANTS).unwrap();

        assert_eq!(paths.len(), Isa::VARIANTS.len());

        for (path, isa) in paths.iter().zip(Isa::VARIANTS) {
            let written = fs::read_to_string(path).unwrap();

            assert_eq!(written, render_backend(*isa, 3));
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
