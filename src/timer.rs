//! Scoped wall-clock timer for one benchmark phase.
//!
//! Output format:
//!
//! ```text
//! Starting raw loop ..
//! .. raw loop done : 0.000412 ms
//! ```
//!
//! The dot prefix grows with `level` so nested phases indent.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Accumulating phase timer.
///
/// A timer is always stopped before it goes away: dropping a running timer
/// stops it and logs the elapsed time.
#[derive(Debug)]
pub struct PhaseTimer {
    name: String,
    level: usize,
    start: Instant,
    cumulated: Duration,
    running: bool,
}

impl PhaseTimer {
    /// Announce the phase on `out` and start timing.
    pub fn start<W: Write>(name: &str, level: usize, out: &mut W) -> io::Result<Self> {
        writeln!(out, "Starting {name} {}", dots(level))?;
        Ok(Self {
            name: name.to_owned(),
            level,
            start: Instant::now(),
            cumulated: Duration::ZERO,
            running: true,
        })
    }

    /// Stop the clock and return the total time accumulated so far.
    pub fn stop(&mut self) -> Duration {
        if self.running {
            self.cumulated += self.start.elapsed();
            self.running = false;
        }
        self.cumulated
    }

    /// Resume timing; the next [`stop`](Self::stop) adds to the total.
    pub fn restart(&mut self) {
        self.start = Instant::now();
        self.running = true;
    }

    /// Stop if still running and consume the timer, returning the total.
    pub fn finish(mut self) -> Duration {
        self.stop()
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.cumulated
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{} {} done : {:.6} ms ",
            dots(self.level),
            self.name,
            millis(self.cumulated)
        )
    }

    pub fn stop_and_display<W: Write>(&mut self, out: &mut W) -> io::Result<Duration> {
        let elapsed = self.stop();
        self.display(out)?;
        Ok(elapsed)
    }
}

impl Drop for PhaseTimer {
    fn drop(&mut self) {
        if self.running {
            let elapsed = self.stop();
            log::debug!("{} dropped while running after {} ms", self.name, millis(elapsed));
        }
    }
}

/// Duration in fractional milliseconds.
pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

fn dots(level: usize) -> String {
    "..".repeat(level + 1)
}
