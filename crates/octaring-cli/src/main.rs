//! Command-line front end for ring digit numbers.
//!
//! Reads non-negative decimal numbers from the command line or from one-number
//! text files, stores them as ring digit lists, and prints or saves the results.
//!
//! # Usage
//!
//! ```sh
//! # Show the octal digits of a number
//! octaring show 83
//!
//! # Convert a number stored in a file to decimal digits (or any radix)
//! octaring convert --file number.txt --to 16
//!
//! # Add two numbers digit by digit and save the decimal sum
//! octaring add 83 7 --output sum.txt
//!
//! # Sort or rotate the digits
//! octaring reorder 83 --sort descending --rotate -1
//! ```
//!
//! Set `RUST_LOG=debug` to see file and conversion logging.

use std::{path::PathBuf, process};

use clap::{Args, Parser, Subcommand, ValueEnum};
use octaring_core::{
    DecimalFileError, ParseDecimalError, Radix, RingDigitList, RingListError, add_with_carry,
    change_scale_to, decimal_file, from_decimal, to_decimal_string,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Radix of the digit lists built from decimal input (2-36).
    #[arg(
        long,
        global = true,
        value_name = "N",
        default_value_t = Radix::OCTAL,
        value_parser = parse_radix
    )]
    radix: Radix,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the digits of a number and its decimal value.
    Show {
        #[command(flatten)]
        source: NumberSource,
    },
    /// Re-express a number in another radix.
    Convert {
        #[command(flatten)]
        source: NumberSource,

        /// Target radix (2-36).
        #[arg(long, value_name = "N", default_value_t = Radix::DECIMAL, value_parser = parse_radix)]
        to: Radix,
    },
    /// Add two numbers with columnar carry propagation.
    Add {
        /// First decimal operand.
        a: String,

        /// Second decimal operand.
        b: String,

        /// Write the decimal sum to this file.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Sort and/or rotate the digits of a number.
    Reorder {
        #[command(flatten)]
        source: NumberSource,

        /// Sort the digits before rotating.
        #[arg(long, value_name = "ORDER")]
        sort: Option<SortOrder>,

        /// Rotate left by this many positions (negative rotates right).
        #[arg(long, value_name = "STEPS", default_value_t = 0, allow_negative_numbers = true)]
        rotate: i64,
    },
}

/// Where a number comes from: the command line or a number file.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct NumberSource {
    /// Non-negative decimal number.
    number: Option<String>,

    /// Read the number from the first line of this file.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    File(#[from] DecimalFileError),
    #[display("{_0}")]
    Parse(#[from] ParseDecimalError),
    #[display("{_0}")]
    List(#[from] RingListError),
}

fn parse_radix(s: &str) -> Result<Radix, String> {
    let value: u8 = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    Radix::try_new(value).map_err(|e| e.to_string())
}

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log::debug!("command failed: {err:?}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let radix = cli.radix;
    match &cli.command {
        Command::Show { source } => {
            let list = source.load(radix)?;
            print_number(&list);
        }
        Command::Convert { source, to } => {
            let list = source.load(radix)?;
            let converted = change_scale_to(&list, *to);
            println!("{list} (radix {radix}) = {converted} (radix {to})");
        }
        Command::Add { a, b, output } => {
            let left = from_decimal(radix, a.trim())?;
            let right = from_decimal(radix, b.trim())?;
            let sum = add_with_carry(&left, &right)?;
            println!("{left} + {right} = {sum} (radix {radix})");
            println!("decimal: {}", to_decimal_string(&sum));
            if let Some(path) = output {
                decimal_file::save(&sum, path)?;
                log::info!("saved sum to {}", path.display());
            }
        }
        Command::Reorder {
            source,
            sort,
            rotate,
        } => {
            let mut list = source.load(radix)?;
            match sort {
                Some(SortOrder::Ascending) => list.sort_ascending(),
                Some(SortOrder::Descending) => list.sort_descending(),
                None => {}
            }
            for _ in 0..rotate.unsigned_abs() {
                if *rotate > 0 {
                    list.rotate_left();
                } else {
                    list.rotate_right();
                }
            }
            print_number(&list);
        }
    }
    Ok(())
}

fn print_number(list: &RingDigitList) {
    println!("digits (radix {}): {list}", list.radix());
    println!("decimal: {}", to_decimal_string(list));
}

impl NumberSource {
    fn load(&self, radix: Radix) -> Result<RingDigitList, CliError> {
        let list = match &self.file {
            Some(path) => decimal_file::load(path, radix)?,
            None => from_decimal(radix, self.number.as_deref().unwrap_or_default().trim())?,
        };
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_radix() {
        let cli = Cli::try_parse_from(["octaring", "show", "83", "--radix", "16"]).unwrap();
        assert_eq!(cli.radix, Radix::new(16));
        let Command::Show { source } = cli.command else {
            panic!("expected show command");
        };
        assert_eq!(source.number.as_deref(), Some("83"));
        assert!(source.file.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_radix_and_two_sources() {
        assert!(Cli::try_parse_from(["octaring", "show", "1", "--radix", "40"]).is_err());
        assert!(Cli::try_parse_from(["octaring", "show", "1", "--file", "n.txt"]).is_err());
        assert!(Cli::try_parse_from(["octaring", "show"]).is_err());
    }

    #[test]
    fn test_parse_negative_rotation() {
        let cli = Cli::try_parse_from(["octaring", "reorder", "83", "--rotate", "-2"]).unwrap();
        let Command::Reorder { rotate, sort, .. } = cli.command else {
            panic!("expected reorder command");
        };
        assert_eq!(rotate, -2);
        assert!(sort.is_none());
    }

    #[test]
    fn test_run_reports_parse_errors() {
        let cli = Cli::try_parse_from(["octaring", "add", "12", "x"]).unwrap();
        assert!(matches!(
            run(&cli),
            Err(CliError::Parse(ParseDecimalError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_number_source_load() {
        let source = NumberSource {
            number: Some(" 83 ".to_owned()),
            file: None,
        };
        assert_eq!(source.load(Radix::OCTAL).unwrap().to_vec(), [1, 2, 3]);
    }
}
