//! Brainstorm session stopwatch.
//!
//! Each `start` opens a new run; ticks carry the run they were scheduled for
//! so a timer left over from an earlier run cannot advance the clock.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stopwatch {
    elapsed_secs: u64,
    running: bool,
    run: u64,
}

impl Stopwatch {
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start (or keep) running; returns the token ticks must present
    pub fn start(&mut self) -> u64 {
        if !self.running {
            self.running = true;
            self.run += 1;
        }
        self.run
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Zero the clock and stop
    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.running = false;
    }

    /// Advance one second. Returns false if the tick is stale.
    pub fn tick(&mut self, run: u64) -> bool {
        if self.running && run == self.run {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }

    /// `HH:MM:SS`
    pub fn formatted(&self) -> String {
        let hrs = self.elapsed_secs / 3600;
        let mins = (self.elapsed_secs % 3600) / 60;
        let secs = self.elapsed_secs % 60;
        format!("{:02}:{:02}:{:02}", hrs, mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_only_while_running() {
        let mut sw = Stopwatch::default();
        assert!(!sw.tick(0));

        let run = sw.start();
        assert!(sw.tick(run));
        assert!(sw.tick(run));
        sw.pause();
        assert!(!sw.tick(run));
        assert_eq!(sw.elapsed_secs(), 2);
    }

    #[test]
    fn test_stale_run_is_ignored() {
        let mut sw = Stopwatch::default();
        let first = sw.start();
        sw.pause();
        let second = sw.start();
        assert_ne!(first, second);
        assert!(!sw.tick(first));
        assert!(sw.tick(second));
        assert_eq!(sw.elapsed_secs(), 1);
    }

    #[test]
    fn test_start_while_running_keeps_run() {
        let mut sw = Stopwatch::default();
        let run = sw.start();
        assert_eq!(sw.start(), run);
    }

    #[test]
    fn test_reset() {
        let mut sw = Stopwatch::default();
        let run = sw.start();
        sw.tick(run);
        sw.reset();
        assert_eq!(sw.elapsed_secs(), 0);
        assert!(!sw.is_running());
        assert!(!sw.tick(run));
    }

    #[test]
    fn test_formatted() {
        let mut sw = Stopwatch::default();
        assert_eq!(sw.formatted(), "00:00:00");
        let run = sw.start();
        for _ in 0..3725 {
            sw.tick(run);
        }
        assert_eq!(sw.formatted(), "01:02:05");
    }
}
