use anyhow::{bail, Context};
use clap::Parser;
use report::model::TableReport;
use std::fs;
use std::io;
use std::path::PathBuf;
use workflow::config::GeneratorConfig;
use workflow::runner::{Runner, TableCheck};

mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Sine lookup-table generator for DDS carriers")]
struct Args {
    /// Load table parameters from YAML instead of the flags below
    #[arg(long)]
    config: Option<PathBuf>,
    /// Samples per full sine cycle
    #[arg(long, default_value_t = 360)]
    resolution: usize,
    #[arg(long, default_value_t = 100_000_000.0)]
    clock_hz: f64,
    #[arg(long, default_value_t = 1_000.0)]
    carrier_hz: f64,
    #[arg(long, default_value_t = 80)]
    scale_numerator: u32,
    #[arg(long, default_value_t = 100)]
    scale_denominator: u32,
    /// Destination of the hex table
    #[arg(long, default_value = "sine_lut.hex")]
    output: PathBuf,
    /// Write the table to stdout instead of a file
    #[arg(long, default_value_t = false)]
    stdout: bool,
    /// Also write a JSON summary of the run
    #[arg(long)]
    report: Option<PathBuf>,
    /// Compare an existing table against the generated one instead of writing
    #[arg(long, conflicts_with_all = ["report", "stdout"])]
    check: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let generator_config = if let Some(path) = args.config {
        GeneratorConfig::load(path)?
    } else {
        GeneratorConfig::from_args(
            args.resolution,
            args.clock_hz,
            args.carrier_hz,
            args.scale_numerator,
            args.scale_denominator,
        )
    };

    let runner = Runner::new(generator_config);
    let lut = runner.execute()?;

    if let Some(path) = args.check {
        match runner.verify_table(&lut, &path)? {
            TableCheck::Match => println!("{} matches ({} rows)", path.display(), lut.len()),
            TableCheck::LengthMismatch { expected, found } => bail!(
                "{} has {} rows, expected {}",
                path.display(),
                found,
                expected
            ),
            TableCheck::RowMismatch {
                row,
                expected,
                found,
            } => bail!(
                "{} differs at row {}: found {:04x}, expected {:04x}",
                path.display(),
                row,
                found,
                expected
            ),
        }
        return Ok(());
    }

    let output = if args.stdout {
        lut.write_hex(io::stdout().lock())
            .context("writing table to stdout")?;
        None
    } else {
        runner.write_table(&lut, &args.output)?;
        Some(args.output.display().to_string())
    };

    if let Some(path) = args.report {
        let report = TableReport::from_lut(&lut, output);
        fs::write(&path, report.to_json()?)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn check_refuses_report_and_stdout() {
        let err = Args::try_parse_from(["lutgen", "--check", "a.hex", "--report", "r.json"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        assert!(Args::try_parse_from(["lutgen", "--check", "a.hex", "--stdout"]).is_err());
        assert!(Args::try_parse_from(["lutgen", "--check", "a.hex"]).is_ok());
    }
}
