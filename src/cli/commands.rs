//! CLI command handlers.

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use tracing::debug;

use super::args::{DataArgs, TraceFormat};
use super::output::{format_advance, format_run_header, format_stats, print_help, print_version};
use super::{Args, Command};
use crate::config::{DataSource, VizConfig};
use crate::error::{VizError, VizResult};
use crate::logging;
use crate::playback::{Advance, PlaybackController};
use crate::renderers::TextSurface;
use crate::sorting::Algorithm;
use crate::trace::StepTrace;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let result = match args.command {
        Command::Run {
            algorithm,
            data,
            delay_ms,
            verbose,
        } => run_playback(algorithm, &data, delay_ms, verbose),
        Command::Trace {
            algorithm,
            data,
            format,
        } => run_trace(algorithm, &data, format),
        Command::Stats { data } => run_stats(&data),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Log filter used when no config file is given.
const CLI_LOG_FILTER: &str = "warn";

/// Input resolved from config file and command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Effective configuration.
    pub config: VizConfig,
    /// Sequence to sort.
    pub values: Vec<i64>,
    /// Seed used for random values, if any.
    pub seed: Option<u64>,
    /// Whether `config` was read from a file.
    pub from_file: bool,
}

impl ResolvedInput {
    /// Delay between printed steps: `--delay` first, then the config
    /// file. Without either the CLI does not pause.
    #[must_use]
    pub fn step_delay(&self, delay_ms: Option<u64>) -> Duration {
        match delay_ms {
            Some(ms) => Duration::from_millis(ms),
            None if self.from_file => self.config.step_delay(),
            None => Duration::ZERO,
        }
    }

    /// Default log filter: the config file's, else `warn`. `RUST_LOG`
    /// still takes precedence.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        if self.from_file {
            &self.config.logging.filter
        } else {
            CLI_LOG_FILTER
        }
    }
}

/// Merge a config file (if any) with command-line overrides and produce
/// the input sequence.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the merged
/// configuration is invalid.
pub fn resolve_input(data: &DataArgs, algorithm: Option<Algorithm>) -> VizResult<ResolvedInput> {
    let mut config = match &data.config_path {
        Some(path) => VizConfig::load(path)?,
        None => VizConfig::default(),
    };

    if let Some(algorithm) = algorithm {
        config.algorithm = algorithm;
    }
    if let Some(size) = data.size {
        config.data.size = size;
    }
    if let Some(seed) = data.seed {
        config.data.seed = Some(seed);
    }
    if data.sample {
        config.data.source = DataSource::Sample;
    }
    if let Some(values) = &data.values {
        config.data.source = DataSource::Values;
        config.data.values.clone_from(values);
    }
    config.check()?;

    let mut rng = config.rng();
    let values = config.initial_sequence(&mut rng);
    let seed = (config.data.source == DataSource::Random).then(|| rng.seed());
    let input = ResolvedInput {
        config,
        values,
        seed,
        from_file: data.config_path.is_some(),
    };
    debug!(values = ?input.values, seed = ?input.seed, algorithm = %input.config.algorithm, "input resolved");
    Ok(input)
}

fn run_playback(
    algorithm: Option<Algorithm>,
    data: &DataArgs,
    delay_ms: Option<u64>,
    verbose: bool,
) -> VizResult<()> {
    let input = resolve_input(data, algorithm)?;
    logging::init(input.log_filter());
    let delay = input.step_delay(delay_ms);
    let stdout = std::io::stdout().lock();
    let surface = if verbose {
        TextSurface::new(stdout)
    } else {
        TextSurface::narration_only(stdout)
    };
    play(surface, &input, delay)?;
    Ok(())
}

/// Load `input` into a controller over `surface` and advance until done.
///
/// Steps rejected as busy are retried after the remaining delay.
///
/// # Errors
///
/// Returns an error if writing fails or the controller rejects a command.
pub fn play<W: Write>(
    surface: TextSurface<W>,
    input: &ResolvedInput,
    delay: Duration,
) -> VizResult<TextSurface<W>> {
    let algorithm = input.config.algorithm;
    let mut controller = PlaybackController::new(surface, algorithm).with_step_delay(delay);

    writeln!(
        controller.surface_mut().writer_mut(),
        "{}",
        format_run_header(algorithm, &input.values, input.seed)
    )?;
    controller.load(input.values.clone())?;
    controller.start()?;

    loop {
        match controller.advance() {
            Ok(outcome) => {
                writeln!(controller.surface_mut().writer_mut(), "{}", format_advance(&outcome))?;
                if matches!(outcome, Advance::Finished { .. }) {
                    break;
                }
            }
            Err(VizError::Busy { remaining }) => std::thread::sleep(remaining),
            Err(e) => return Err(e),
        }
    }

    Ok(controller.into_surface())
}

fn run_trace(algorithm: Option<Algorithm>, data: &DataArgs, format: TraceFormat) -> VizResult<()> {
    let input = resolve_input(data, algorithm)?;
    logging::init(input.log_filter());
    let trace = StepTrace::record(input.config.algorithm, &input.values);
    let document = match format {
        TraceFormat::Json => trace.to_json()?,
        TraceFormat::Yaml => trace.to_yaml()?,
    };
    println!("{document}");
    Ok(())
}

fn run_stats(data: &DataArgs) -> VizResult<()> {
    let input = resolve_input(data, None)?;
    logging::init(input.log_filter());
    let rows: Vec<(Algorithm, _)> = Algorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, StepTrace::record(algorithm, &input.values).counts()))
        .collect();
    print!("{}", format_stats(&input.values, &rows));
    Ok(())
}
