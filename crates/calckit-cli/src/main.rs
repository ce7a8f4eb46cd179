mod logging;

use std::path::PathBuf;
use std::process;

use calckit_core::bmi::{self, BmiCategory};
use calckit_core::diagnostics::{ConsoleSink, DiagnosticSink, NullSink, TracingSink};
use calckit_core::discount;
use calckit_core::palindrome;
use calckit_core::Value;
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::logging::{init_logging, LogConfig};

const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

/// calckit: discount, palindrome and BMI calculators
///
/// Numeric arguments are read as JSON when they parse (`70`, `null`, `[1]`)
/// and as plain text otherwise.
#[derive(Parser)]
#[command(name = "calckit", version, about, long_about = None)]
struct Cli {
    /// More diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable diagnostic output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Append diagnostic records to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Omit timestamps from diagnostic records
    #[arg(long, global = true)]
    no_timestamps: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a percentage discount to a price
    Discount {
        #[arg(allow_negative_numbers = true)]
        price: String,
        /// Discount percentage (0 or more)
        #[arg(allow_negative_numbers = true)]
        percent: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether each text reads the same backwards
    Palindrome {
        #[arg(required = true)]
        texts: Vec<String>,
        /// Read each text as a JSON value when it parses
        #[arg(long)]
        typed: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute body mass index from meters and kilograms
    Bmi {
        /// Height in meters
        #[arg(allow_negative_numbers = true)]
        height: String,
        /// Weight in kilograms
        #[arg(allow_negative_numbers = true)]
        weight: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        let config = LogConfig::from_verbosity(cli.verbose)
            .with_timestamps(!cli.no_timestamps)
            .with_log_file(cli.log_file.clone());
        if let Err(err) = init_logging(&config) {
            eprintln!("{} cannot open log file: {}", "error:".red().bold(), err);
            process::exit(EXIT_ERROR);
        }
    }

    let exit_code = match cli.command {
        Commands::Discount {
            price,
            percent,
            json,
        } => {
            let mut sink = console_sink(cli.quiet);
            run_discount(&price, &percent, json, sink.as_mut())
        }
        Commands::Palindrome { texts, typed, json } => {
            let mut sink: Box<dyn DiagnosticSink> = if cli.quiet {
                Box::new(NullSink)
            } else {
                Box::new(TracingSink)
            };
            run_palindrome(&texts, typed, json, sink.as_mut())
        }
        Commands::Bmi {
            height,
            weight,
            json,
        } => {
            let mut sink = console_sink(cli.quiet);
            run_bmi(&height, &weight, json, sink.as_mut())
        }
        Commands::Version => {
            println!("calckit {}", env!("CARGO_PKG_VERSION"));
            EXIT_OK
        }
    };

    process::exit(exit_code);
}

fn console_sink(quiet: bool) -> Box<dyn DiagnosticSink> {
    if quiet {
        Box::new(NullSink)
    } else {
        Box::new(ConsoleSink)
    }
}

// ── Commands ──────────────────────────────────────────────

fn run_discount(price: &str, percent: &str, json: bool, sink: &mut dyn DiagnosticSink) -> i32 {
    tracing::debug!(price, percent, "discount");
    let price = Value::parse_arg(price);
    let percent = Value::parse_arg(percent);

    let outcome = discount::try_discounted_price(&price, &percent);
    let final_price = discount::mask(&outcome, sink);

    if json {
        let out = serde_json::json!({
            "price": price.to_json(),
            "discount_percent": percent.to_json(),
            "final_price": final_price,
            "valid": outcome.is_ok(),
        });
        println!("{}", out);
    } else {
        println!("{}", final_price);
    }

    match outcome {
        Ok(_) => EXIT_OK,
        Err(err) => {
            if !json {
                sink.error(&format!("invalid input: {}", err));
            }
            EXIT_INVALID
        }
    }
}

fn run_palindrome(texts: &[String], typed: bool, json: bool, sink: &mut dyn DiagnosticSink) -> i32 {
    let mut results = Vec::with_capacity(texts.len());
    let mut exit_code = EXIT_OK;

    for text in texts {
        let value = if typed {
            Value::parse_arg(text)
        } else {
            Value::from(text.as_str())
        };
        match palindrome::is_palindrome_with(&value, sink) {
            Ok(result) => {
                if !json {
                    let verdict = if result {
                        "palindrome".green()
                    } else {
                        "not a palindrome".red()
                    };
                    println!("'{}': {}", text, verdict);
                }
                results.push(serde_json::json!({ "input": text, "palindrome": result }));
            }
            Err(err) => {
                if !json {
                    eprintln!("{} '{}': {}", "error:".red().bold(), text, err);
                }
                results.push(serde_json::json!({ "input": text, "error": err.to_string() }));
                exit_code = EXIT_ERROR;
            }
        }
    }

    if json {
        println!("{}", serde_json::Value::Array(results));
    }
    exit_code
}

fn run_bmi(height: &str, weight: &str, json: bool, sink: &mut dyn DiagnosticSink) -> i32 {
    tracing::debug!(height, weight, "bmi");
    let height = Value::parse_arg(height);
    let weight = Value::parse_arg(weight);

    let result = bmi::calculate_bmi_with(&height, &weight, sink);

    if json {
        let out = serde_json::json!({
            "height": height.to_json(),
            "weight": weight.to_json(),
            "bmi": result,
            "category": result.map(|v| BmiCategory::classify(v).to_string()),
        });
        println!("{}", out);
    } else {
        match result {
            Some(value) => println!("{} ({})", value, BmiCategory::classify(value).to_string().cyan()),
            None => println!("{}", "no value".dimmed()),
        }
    }

    if result.is_some() {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}
