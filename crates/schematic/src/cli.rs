//! CLI helpers.

mod bencher;
mod error;
mod output;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::io::{self, StdoutLock};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

pub use self::bencher::Bencher;
pub use self::error::error_context;
pub use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Path which reads the schematic from stdin.
const STDIN: &str = "-";

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Scan the input once and print the totals.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Path to the schematic, stdin if absent.
    path: Option<PathBuf>,
    /// Log what the scanner is doing.
    verbose: bool,
    /// Log every row being evaluated.
    trace: bool,
    /// Output JSON.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(opts.level());
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--trace" => {
                    opts.trace = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--warmup" => {
                    opts.warmup = Some(number(it.next(), "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(number(it.next(), "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(number(it.next(), "--count")?);
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') && other != STDIN => {
                    bail!("unsupported argument: {other}");
                }
                path => {
                    opts.set_path(path)?;
                }
            }
        }

        for path in it {
            let path = path.to_str().context("non-utf8 path")?;
            opts.set_path(path)?;
        }

        Ok(opts)
    }

    fn set_path(&mut self, path: &str) -> Result<()> {
        if self.path.is_some() {
            bail!("unexpected argument: {path}");
        }

        self.path = Some(PathBuf::from(path));
        Ok(())
    }

    /// The path to read the schematic from, `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| *path != Path::new(STDIN))
    }

    /// Get a displayable name for the input.
    pub fn input_name(&self) -> String {
        match self.path() {
            Some(path) => path.display().to_string(),
            None => String::from("<stdin>"),
        }
    }

    /// Maximum log level requested.
    pub fn level(&self) -> log::LevelFilter {
        if self.trace {
            log::LevelFilter::Trace
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Construct the output configured by these options.
    pub fn output(&self) -> Output<StdoutLock<'static>> {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Output::new(io::stdout().lock(), kind)
    }
}

/// Parse the numerical argument to `name`.
fn number<T>(arg: Option<OsString>, name: &str) -> Result<T>
where
    T: core::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.with_context(|| format!("missing argument to `{name}`"))?;

    let arg = arg
        .to_str()
        .with_context(|| format!("missing string argument to `{name}`"))?;

    arg.parse()
        .with_context(|| format!("bad argument to `{name}`"))
}

/// Timings collected while benchmarking.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Build a report out of sorted samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum = samples.iter().copied().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default())
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
        }
    }
}

/// Get the sample at the given percentile, expressed in hundredths of a
/// percent.
fn percentile(samples: &[Duration], p: usize) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let index = (samples.len() * p / 10000).min(samples.len() - 1);
    samples[index]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
