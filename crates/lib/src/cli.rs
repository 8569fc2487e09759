//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::Input;

pub use self::bencher::Bencher;
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Read input from this path instead of the default one.
    input: Option<PathBuf>,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse options from the given arguments without touching global state.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<std::ffi::OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter().map(Into::into);

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
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    let warmup = warmup
                        .to_str()
                        .context("missing string argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    let time_limit = time_limit
                        .to_str()
                        .context("missing string argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    let count = count
                        .to_str()
                        .context("missing string argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// The default input of a solver.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Path used when reporting, relative to the crate.
    pub path: &'static str,
    /// Path the input is actually read from.
    pub read_path: &'static str,
}

/// Run a solver with the given options.
///
/// The expected answer is only checked against the default input, since an
/// input passed through `--input` most likely has a different answer.
pub fn run<T, O>(opts: &Opts, entry: Entry, expected: Option<O>, mut solve: T) -> Result<()>
where
    T: FnMut(&Input) -> Result<O>,
    O: fmt::Debug + Serialize + OutputEq,
{
    let (read_path, path, expected) = match &opts.input {
        Some(input) => (input.clone(), input.display().to_string(), None),
        None => (
            PathBuf::from(entry.read_path),
            entry.path.to_owned(),
            expected,
        ),
    };

    let input = load(&read_path);

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    o.info(format_args!("{path}: input size: {}", input.len()))?;

    match opts.mode {
        Mode::Default => {
            let value = solve(&input).map_err(|e| error::error_context(&path, e))?;

            if let Some(expect) = &expected {
                if !value.output_eq(expect) {
                    bail!("{value:?} (value) != {expect:?} (expected)");
                }
            }

            o.answer(&value)?;
        }
        Mode::Bench => {
            let mut b = Bencher::new();
            b.iter(&mut o, opts, expected.as_ref(), || solve(&input))?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> Input {
    log::debug!("loading {}", path.display());
    Input::load(path)
}

/// Timing report produced by a benchmark.
#[derive(Default, Debug, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    /// Build a report out of samples, which must be sorted.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();
        let sum: Duration = samples.iter().copied().sum();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50: percentile(samples, 5000),
            p95: percentile(samples, 9500),
            p99: percentile(samples, 9900),
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
        }
    }
}

/// Get the sample at the given percentile expressed in hundredths of a
/// percent.
fn percentile(samples: &[Duration], n: usize) -> Duration {
    let Some(last) = samples.len().checked_sub(1) else {
        return Duration::default();
    };

    let index = (last * n / 10000).min(last);
    samples[index]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{Mode, Opts, Report};

    #[test]
    fn test_parse_options() {
        let opts = Opts::parse_from(["--json", "--input", "inputs/other.txt", "--count", "3"])
            .unwrap();

        assert!(opts.json);
        assert!(matches!(opts.mode, Mode::Default));
        assert_eq!(opts.count, Some(3));
        assert_eq!(
            opts.input.as_deref(),
            Some(std::path::Path::new("inputs/other.txt"))
        );
    }

    #[test]
    fn test_parse_stops_at_separator() {
        let opts = Opts::parse_from(["--bench", "--", "--unknown"]).unwrap();
        assert!(matches!(opts.mode, Mode::Bench));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Opts::parse_from(["--unknown"]).is_err());
        assert!(Opts::parse_from(["--input"]).is_err());
        assert!(Opts::parse_from(["--count", "many"]).is_err());
        assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
    }

    #[test]
    fn test_report_from_sorted() {
        let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
        let report = Report::from_sorted(&samples);

        assert_eq!(report.count, 100);
        assert_eq!(report.min, Duration::from_millis(1));
        assert_eq!(report.max, Duration::from_millis(100));
        assert_eq!(report.p50, Duration::from_millis(50));
        assert_eq!(report.p99, Duration::from_millis(99));
        assert_eq!(report.avg, Duration::from_micros(50500));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::from_sorted(&[]);
        assert_eq!(report.count, 0);
        assert_eq!(report.avg, Duration::default());
        assert_eq!(report.p95, Duration::default());
    }
}
