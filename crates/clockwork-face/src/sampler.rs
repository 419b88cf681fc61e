use std::time::{Duration, Instant};

use clockwork_engine::time::Ticker;

use crate::cell::SampleCell;
use crate::sample::{LocalTimeSource, TimeSample, TimeSource};

/// How often the face re-reads the clock.
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Reads a [`TimeSource`] on a fixed interval and publishes into a [`SampleCell`].
///
/// The sampler never blocks: the host asks for [`next_deadline`](Self::next_deadline),
/// sleeps however it likes (the window runtime uses `ControlFlow::WaitUntil`)
/// and calls [`poll`](Self::poll) when it wakes.
#[derive(Debug)]
pub struct TimeSampler<S = LocalTimeSource> {
    source: S,
    ticker: Ticker,
    cell: SampleCell,
}

impl TimeSampler<LocalTimeSource> {
    /// Samples the local wall clock every [`SAMPLE_INTERVAL`].
    pub fn local() -> Self {
        Self::new(LocalTimeSource)
    }
}

impl<S: TimeSource> TimeSampler<S> {
    pub fn new(source: S) -> Self {
        Self::with_interval(source, SAMPLE_INTERVAL)
    }

    pub fn with_interval(source: S, interval: Duration) -> Self {
        Self {
            source,
            ticker: Ticker::new(interval),
            cell: SampleCell::new(),
        }
    }

    /// Samples the source if a tick is due at `now`.
    ///
    /// Returns the fresh sample after storing it in the cell, or `None` when the
    /// interval has not elapsed yet. The first poll always samples.
    pub fn poll(&mut self, now: Instant) -> Option<TimeSample> {
        if !self.ticker.advance(now) {
            return None;
        }
        let sample = self.source.now();
        self.cell.store(sample);
        log::trace!("sampled {sample}");
        Some(sample)
    }

    /// When the next sample is due; `None` means "now" (nothing sampled yet).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.next_deadline()
    }

    pub fn interval(&self) -> Duration {
        self.ticker.interval()
    }

    /// Shared handle to the published sample.
    pub fn cell(&self) -> &SampleCell {
        &self.cell
    }

    /// Latest published sample.
    pub fn latest(&self) -> Option<TimeSample> {
        self.cell.load()
    }

    /// Turns the sampler into a lazy, endless iterator that sleeps between samples.
    ///
    /// Consumes the sampler; the sequence cannot be restarted. Blocks the calling
    /// thread while waiting, so it is meant for headless callers, not the window loop.
    pub fn into_samples(self) -> Samples<S> {
        Samples { sampler: self }
    }
}

/// Iterator returned by [`TimeSampler::into_samples`]. Never yields `None`.
#[derive(Debug)]
pub struct Samples<S> {
    sampler: TimeSampler<S>,
}

impl<S> Samples<S> {
    /// Shared handle to the cell the iterator publishes into.
    pub fn cell(&self) -> &SampleCell {
        &self.sampler.cell
    }
}

impl<S: TimeSource> Iterator for Samples<S> {
    type Item = TimeSample;

    fn next(&mut self) -> Option<TimeSample> {
        loop {
            let now = Instant::now();
            if let Some(sample) = self.sampler.poll(now) {
                return Some(sample);
            }
            std::thread::sleep(self.sampler.ticker.remaining(now));
        }
    }
}
