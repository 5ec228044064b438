use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps a driver loop at no more than one generation per `delay`.
///
/// Time spent computing and printing a generation counts towards the delay.
pub struct GenerationPacer {
    delay: Duration,
    timer: Instant,
    period_smoothed: f64,
}

impl GenerationPacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: Instant::now(),
            period_smoothed: delay.as_secs_f64(),
        }
    }

    /// Smoothed number of generations per second.
    pub fn rate(&self) -> f64 {
        if self.period_smoothed > 0. {
            1. / self.period_smoothed
        } else {
            f64::INFINITY
        }
    }

    /// Sleeps for whatever is left of the current period and starts the next one.
    pub fn wait(&mut self) {
        let before_wait = self.timer.elapsed();
        if self.delay > before_wait {
            sleep(self.delay - before_wait);
        }

        let period = self.timer.elapsed().as_secs_f64();
        self.period_smoothed += (period - self.period_smoothed) * 0.1;

        self.timer = Instant::now();
    }
}
