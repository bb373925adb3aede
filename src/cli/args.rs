//! CLI argument parsing.
//!
//! Hand-rolled so that parsing is a pure function of an iterator of
//! strings and can be tested without a process.

use std::path::PathBuf;

use crate::data::parse_values;
use crate::sorting::Algorithm;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Options selecting the input sequence, shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataArgs {
    /// YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Explicit sequence.
    pub values: Option<Vec<i64>>,
    /// Use the sample data of the algorithm.
    pub sample: bool,
    /// Number of random elements.
    pub size: Option<usize>,
    /// Seed for random data.
    pub seed: Option<u64>,
}

/// Output format of the `trace` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a run step by step on stdout.
    Run {
        /// Algorithm override.
        algorithm: Option<Algorithm>,
        /// Input selection.
        data: DataArgs,
        /// Pause between steps in milliseconds.
        delay_ms: Option<u64>,
        /// Print the sequence after every step.
        verbose: bool,
    },
    /// Print every step of a run as a document.
    Trace {
        /// Algorithm override.
        algorithm: Option<Algorithm>,
        /// Input selection.
        data: DataArgs,
        /// Output format.
        format: TraceFormat,
    },
    /// Compare operation counts of all algorithms on one input.
    Stats {
        /// Input selection.
        data: DataArgs,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// The first item is the program name.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let rest = &args[2..];
        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(rest),
            "trace" => Self::parse_trace_command(rest),
            "stats" => Self::parse_stats_command(rest),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_run_command(rest: &[String]) -> Command {
        let Ok((algorithm, rest)) = split_algorithm(rest) else {
            return Command::Help;
        };
        let mut data = DataArgs::default();
        let mut delay_ms = None;
        let mut verbose = false;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--delay" => {
                    let Some(ms) = value_of(rest, i, "--delay") else {
                        return Command::Help;
                    };
                    delay_ms = Some(ms);
                    i += 2;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                _ => match parse_data_flag(rest, i, &mut data) {
                    Ok(consumed) => i += consumed,
                    Err(()) => return Command::Help,
                },
            }
        }

        Command::Run {
            algorithm,
            data,
            delay_ms,
            verbose,
        }
    }

    fn parse_trace_command(rest: &[String]) -> Command {
        let Ok((algorithm, rest)) = split_algorithm(rest) else {
            return Command::Help;
        };
        let mut data = DataArgs::default();
        let mut format = TraceFormat::default();

        let mut i = 0;
        while i < rest.len() {
            if rest[i] == "--format" {
                format = match rest.get(i + 1).map(String::as_str) {
                    Some("json") => TraceFormat::Json,
                    Some("yaml") => TraceFormat::Yaml,
                    other => {
                        eprintln!("Error: --format expects json or yaml, got {other:?}");
                        return Command::Help;
                    }
                };
                i += 2;
                continue;
            }
            match parse_data_flag(rest, i, &mut data) {
                Ok(consumed) => i += consumed,
                Err(()) => return Command::Help,
            }
        }

        Command::Trace {
            algorithm,
            data,
            format,
        }
    }

    fn parse_stats_command(rest: &[String]) -> Command {
        let mut data = DataArgs::default();
        let mut i = 0;
        while i < rest.len() {
            match parse_data_flag(rest, i, &mut data) {
                Ok(consumed) => i += consumed,
                Err(()) => return Command::Help,
            }
        }
        Command::Stats { data }
    }
}

/// Take a leading positional algorithm name, if present.
fn split_algorithm(rest: &[String]) -> Result<(Option<Algorithm>, &[String]), ()> {
    match rest.first() {
        Some(first) if !first.starts_with('-') => {
            let algorithm: Algorithm = first.parse().map_err(|e| eprintln!("Error: {e}"))?;
            Ok((Some(algorithm), &rest[1..]))
        }
        _ => Ok((None, rest)),
    }
}

/// Parse the value following a flag.
fn value_of<T: std::str::FromStr>(rest: &[String], i: usize, flag: &str) -> Option<T> {
    let parsed = rest.get(i + 1).and_then(|v| v.parse().ok());
    if parsed.is_none() {
        eprintln!("Error: {flag} requires a valid value");
    }
    parsed
}

/// Apply one data flag at `rest[i]`, returning how many items it consumed.
fn parse_data_flag(rest: &[String], i: usize, data: &mut DataArgs) -> Result<usize, ()> {
    match rest[i].as_str() {
        "--config" | "-c" => {
            let path = rest.get(i + 1).ok_or_else(|| {
                eprintln!("Error: --config requires a file path");
            })?;
            data.config_path = Some(PathBuf::from(path));
            Ok(2)
        }
        "--values" => {
            let raw = rest.get(i + 1).ok_or_else(|| {
                eprintln!("Error: --values requires a list such as 5,1,4");
            })?;
            let values = parse_values(raw).map_err(|e| eprintln!("Error: {e}"))?;
            data.values = Some(values);
            Ok(2)
        }
        "--sample" => {
            data.sample = true;
            Ok(1)
        }
        "--size" => {
            data.size = Some(value_of(rest, i, "--size").ok_or(())?);
            Ok(2)
        }
        "--seed" => {
            data.seed = Some(value_of(rest, i, "--seed").ok_or(())?);
            Ok(2)
        }
        other => {
            eprintln!("Warning: ignoring unknown option {other}");
            Ok(1)
        }
    }
}
