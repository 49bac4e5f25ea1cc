use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;

use crate::approx::{DEFAULT_CEILING, DEFAULT_SAMPLES};
use crate::backend::{self, Isa};
use crate::eval::Approximant;
use crate::format::Precision;

/// Derivation and code generation for vectorized elementary functions.
#[derive(FromArgs)]
pub struct Opts {
    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Search(SearchOpts),
    Generate(GenerateOpts),
}

/// Search for approximant orders and print their coefficient tables.
#[derive(FromArgs)]
#[argh(subcommand, name = "search")]
pub struct SearchOpts {
    /// precision class to target (default: all)
    #[argh(option, short = 'p')]
    pub precision: Vec<Precision>,

    /// approximant to derive (default: all)
    #[argh(option, short = 'a')]
    pub approximant: Vec<Approximant>,

    /// highest total order to try
    #[argh(option, default = "DEFAULT_CEILING")]
    pub ceiling: u32,

    /// number of interior points at which error is measured
    #[argh(option, default = "DEFAULT_SAMPLES")]
    pub samples: usize,
}

/// Generate evaluator source files for each backend.
#[derive(FromArgs)]
#[argh(subcommand, name = "generate")]
pub struct GenerateOpts {
    /// output directory
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    pub output: PathBuf,

    /// backend to generate (default: all)
    #[argh(option, short = 'b')]
    pub backend: Vec<Isa>,

    /// highest total order to generate
    #[argh(option, default = "backend::DEFAULT_CEILING")]
    pub ceiling: u32,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Opts, argh::EarlyExit> {
        Opts::from_args(&["approx-libm"], args)
    }

    #[test]
    fn search_defaults() {
        let opts = parse(&["search"]).unwrap();

        assert_eq!(opts.log_level, LevelFilter::Warn);

        let Command::Search(search) = opts.command else {
            panic!("expected search");
        };

        assert!(search.precision.is_empty());
        assert_eq!(search.ceiling, DEFAULT_CEILING);
        assert_eq!(search.samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn search_filters() {
        let opts = parse(&[
            "--log", "debug", "search", "-p", "f32", "-p", "half", "-a", "exp2",
        ])
        .unwrap();

        assert_eq!(opts.log_level, LevelFilter::Debug);

        let Command::Search(search) = opts.command else {
            panic!("expected search");
        };

        assert_eq!(search.precision, [Precision::Single, Precision::Half]);
        assert_eq!(search.approximant, [Approximant::Exp2]);
    }

    #[test]
    fn generate_options() {
        let opts = parse(&["generate", "-o", "out", "-b", "avx", "--ceiling", "8"])
            .unwrap();

        let Command::Generate(generate) = opts.command else {
            panic!("expected generate");
        };

        assert_eq!(generate.output, PathBuf::from("out"));
        assert_eq!(generate.backend, [Isa::Avx]);
        assert_eq!(generate.ceiling, 8);
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(parse(&["generate", "-b", "mmx"]).is_err());
    }
}
