use std::io::{self, Write};
use std::process::ExitCode;

use strum::VariantArray;

use approx_libm::approx::{self, Search, export};
use approx_libm::backend::{self, Isa};
use approx_libm::eval::Approximant;
use approx_libm::format::Precision;
use approx_libm::opts::{Command, GenerateOpts, Opts, SearchOpts};

fn run_search(opts: &SearchOpts) -> io::Result<()> {
    let all = Precision::ALL;
    let classes: &[Precision] = if opts.precision.is_empty() {
        &all
    } else {
        &opts.precision
    };

    let approximants: &[Approximant] = if opts.approximant.is_empty() {
        Approximant::VARIANTS
    } else {
        &opts.approximant
    };

    let search = Search {
        ceiling: opts.ceiling,
        samples: opts.samples,
    };

    let mut out = io::stdout().lock();

    for derivation in approx::derive(approximants, classes, &search) {
        export::write_derivation(&mut out, &derivation)?;
    }

    out.flush()
}

fn run_generate(opts: &GenerateOpts) -> io::Result<()> {
    let isas: &[Isa] = if opts.backend.is_empty() {
        Isa::VARIANTS
    } else {
        &opts.backend
    };

    if opts.ceiling > backend::MAX_ORDER {
        log::warn!(
            "ceiling {} exceeds {}, clamping",
            opts.ceiling,
            backend::MAX_ORDER
        );
    }

    let ceiling = opts.ceiling.min(backend::MAX_ORDER);

    backend::write_all(&opts.output, ceiling, isas).map(|_| ())
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .format_timestamp(None)
        .init();

    let result = match &opts.command {
        Command::Search(search) => run_search(search),
        Command::Generate(generate) => run_generate(generate),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
