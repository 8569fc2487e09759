use core::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::cli::{Opts, Output, OutputEq, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, reporting either a timing report or the error
    /// which stopped the bench.
    pub(crate) fn iter<T, O>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<&O>,
        iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq,
    {
        match self.inner_iter(o, opts, expected, iter) {
            Ok(report) => o.report(&report)?,
            Err(e) => o.error(format_args!("{e:#}"))?,
        }

        Ok(())
    }

    fn inner_iter<T, O>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<&O>,
        mut iter: T,
    ) -> Result<Report>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut sample = || -> Result<Duration> {
            let before = Instant::now();
            let value = iter()?;
            let after = Instant::now();

            if let Some(expect) = expected {
                if !value.output_eq(expect) {
                    bail!("{value:?} (value) != {expect:?} (expected)");
                }
            }

            let _ = std::hint::black_box(value);
            Ok(after.duration_since(before))
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            loop {
                sample()?;

                if start.elapsed() >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();
        Ok(Report::from_sorted(&samples))
    }
}
