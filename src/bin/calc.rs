use anyhow::{bail, Context, Result};
use calcengine::{parse_values, Calculator, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Checked arithmetic calculator
#[derive(Parser, Debug)]
#[command(name = "calc", version, about)]
struct Cli {
    /// Log evaluation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an infix expression such as "3 + 5 * (2 - 8)"
    Eval {
        /// The expression to evaluate
        expression: String,
        /// Reject characters that are not part of the expression language
        #[arg(long)]
        strict: bool,
        /// Fail instead of using 0 when a binary operator has no left operand
        #[arg(long)]
        no_lenient_operands: bool,
    },
    /// Compute the standard deviation of the numbers found in a file
    Stddev {
        /// File containing whitespace separated numbers
        file: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Eval {
            expression,
            strict,
            no_lenient_operands,
        } => {
            let config = Config::default()
                .with_strict_lexing(strict)
                .with_lenient_operands(!no_lenient_operands);
            let result = Calculator::with_config(config)
                .evaluate(&expression)
                .with_context(|| format!("failed to evaluate '{}'", expression))?;
            println!("{}", result);
        }
        Command::Stddev { file } => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let values = parse_values(&input);
            if values.is_empty() {
                bail!("no valid numbers found in {}", file.display());
            }
            tracing::info!(count = values.len(), "computing standard deviation");
            let deviation = Calculator::new()
                .standard_deviation(&values)
                .context("failed to compute the standard deviation")?;
            println!("Standard Deviation: {:.10}", deviation);
        }
    }
    Ok(())
}
