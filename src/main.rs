//! vendas-clean - cleaning pipeline for semicolon-delimited sales exports

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use vendas_clean::clean::Cleaner;
use vendas_clean::config::{CleanConfig, ReportFormat};
use vendas_clean::output::{render_to_stdout, write_csv};
use vendas_clean::parser::read_csv;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Terminal,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(f: CliReportFormat) -> Self {
        match f {
            CliReportFormat::Terminal => ReportFormat::Terminal,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

/// Cleaning pipeline for semicolon-delimited sales exports
#[derive(Parser, Debug)]
#[command(name = "vendas-clean")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raw sales export to clean
    #[arg(short, long, default_value = "data/raw/vendas_raw.csv")]
    input: PathBuf,

    /// Destination for the cleaned export
    #[arg(short, long, default_value = "data/processed/vendas_tratadas.csv")]
    output: PathBuf,

    /// Post-run report format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliReportFormat,

    /// Number of rows shown in the report preview
    #[arg(long, default_value_t = 5)]
    preview: usize,

    /// Suppress the post-run report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // The only fatal precondition: checked before any other work begins.
    if !cli.input.exists() {
        bail!("Input file not found: {}", cli.input.display());
    }

    let mut table = read_csv(&cli.input)
        .with_context(|| format!("Failed to parse input file: {}", cli.input.display()))?;

    let cleaner = Cleaner::new(CleanConfig::default());
    let report = cleaner.run(&mut table)?;

    write_csv(&cli.output, &table)
        .with_context(|| format!("Failed to write output file: {}", cli.output.display()))?;

    if !cli.quiet {
        render_to_stdout(&table, &report, &cli.output, cli.format.into(), cli.preview)?;
    }

    print_confirmation(&cli.output)
}

fn print_confirmation(path: &Path) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(&mut stdout, "Cleaned file written to")?;
    stdout.reset()?;
    writeln!(&mut stdout, ": {}", path.display())?;
    Ok(())
}
