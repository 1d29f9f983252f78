use core::time::Duration;

use foundation::Stopwatch;

use crate::probe::{DefaultProbe, HeapProbe, ProbeKind};

/// Result of [`Meter::measure_value`].
#[derive(Clone, Debug)]
pub struct Measurement<T> {
    pub value: T,
    /// Bytes in use after minus bytes in use before. Approximate.
    pub delta: i64,
    pub elapsed: Duration,
    pub probe: ProbeKind,
}

pub struct Meter<P = DefaultProbe> {
    probe: P,
}

impl Meter<DefaultProbe> {
    pub fn detect() -> Self {
        Self::new(DefaultProbe::detect())
    }
}

impl<P: HeapProbe> Meter<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Run `op` between two samples and return the byte delta.
    ///
    /// An error from `op` is returned unchanged and no delta is produced.
    pub fn measure<F, E>(&self, op: F) -> Result<i64, E>
    where
        F: FnOnce() -> Result<(), E>,
    {
        self.measure_value(op).map(|m| m.delta)
    }

    /// Like [`measure`](Self::measure), but keeps `op`'s return value alive
    /// until after the second sample and hands it back.
    pub fn measure_value<T, F, E>(&self, op: F) -> Result<Measurement<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let before = self.probe.sample();
        let watch = Stopwatch::start();
        let value = op()?;
        let elapsed = watch.elapsed();
        let after = self.probe.sample();

        let delta = signed_delta(before, after);
        tracing::debug!(probe = %self.probe.kind(), before, after, delta, "measured");

        Ok(Measurement {
            value,
            delta,
            elapsed,
            probe: self.probe.kind(),
        })
    }
}

/// Measure `op` with the best probe available right now.
pub fn measure<F, E>(op: F) -> Result<i64, E>
where
    F: FnOnce() -> Result<(), E>,
{
    Meter::detect().measure(op)
}

fn signed_delta(before: usize, after: usize) -> i64 {
    if after >= before {
        i64::try_from(after - before).unwrap_or(i64::MAX)
    } else {
        i64::try_from(before - after).map_or(i64::MIN, |d| -d)
    }
}
