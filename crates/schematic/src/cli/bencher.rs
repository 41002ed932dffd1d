use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Error, Result};

use crate::cli::{Opts, Output, Report};
use crate::totals::Totals;

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Runs a scan repeatedly, checking that every run agrees.
#[derive(Default)]
pub struct Bencher {
    expected: Option<Totals>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn, writing progress and the final report to `o`.
    ///
    /// A failing run is written to `o` and returned.
    pub fn iter<T, E>(&mut self, opts: &Opts, o: &mut Output<impl Write>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<Totals, E>,
        Error: From<E>,
    {
        if let Err(e) = self.inner_iter(o, opts, iter) {
            o.error(&e)?;
            return Err(e);
        }

        Ok(())
    }

    fn inner_iter<T, E>(&mut self, o: &mut Output<impl Write>, opts: &Opts, mut iter: T) -> Result<()>
    where
        T: FnMut() -> Result<Totals, E>,
        Error: From<E>,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            loop {
                let totals = iter()?;
                self.check(totals)?;

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
                samples.push(self.sample(&mut iter)?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(self.sample(&mut iter)?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        if let Some(totals) = &self.expected {
            o.totals(totals)?;
        }

        o.report(&Report::from_sorted(&samples))?;
        Ok(())
    }

    /// Time a single run.
    fn sample<T, E>(&mut self, iter: &mut T) -> Result<Duration>
    where
        T: FnMut() -> Result<Totals, E>,
        Error: From<E>,
    {
        let before = Instant::now();
        let totals = black_box(iter()?);
        let elapsed = before.elapsed();
        self.check(totals)?;
        Ok(elapsed)
    }

    /// Every run over the same input must produce the same totals.
    fn check(&mut self, totals: Totals) -> Result<()> {
        match &self.expected {
            Some(expected) if *expected != totals => {
                bail!("{totals:?} (value) != {expected:?} (expected)");
            }
            Some(..) => {}
            None => {
                self.expected = Some(totals);
            }
        }

        Ok(())
    }
}
