//! Command line lint for macro literals.
//!
//! Each argument is validated as one literal; without arguments every
//! non-empty line of stdin is. Exits with 1 if any literal is invalid and
//! with 2 if the tool itself could not run.
use sqlmacro::{Result, SqlParserOracle, Validator, config};
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = config();
    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|err| {
        eprintln!("sqlmacro: invalid SQLMACRO_LOG '{}', using 'warn': {err}", config.log);
        EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let outcome = config.dialect().and_then(|dialect| {
        tracing::debug!("Validating with the {dialect} dialect");
        let validator = Validator::new(SqlParserOracle::new(dialect));
        let args = std::env::args().skip(1).collect();
        run(&validator, args, io::stdin().lock(), &mut io::stdout().lock())
    });

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("sqlmacro: {err}");
            ExitCode::from(2)
        }
    }
}

/// Validates `args`, or the non-empty lines of `input` when there are none.
///
/// Returns whether every literal was valid.
fn run(
    validator: &Validator,
    args: Vec<String>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let literals = if args.is_empty() {
        input
            .lines()
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        args
    };

    let mut all_valid = true;
    for literal in &literals {
        match validator.validate(literal) {
            None => writeln!(out, "ok    {literal}")?,
            Some(diagnostic) => {
                all_valid = false;
                writeln!(out, "error {literal}\n{diagnostic}\n")?;
            }
        }
    }
    Ok(all_valid)
}
