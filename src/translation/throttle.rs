//! Request-rate pacing to stay under the backend's abuse protections.
//!
//! Purely advisory: the counter is owned by one pipeline run and consulted
//! after every batch, never shared statically.

use std::time::Duration;

/// Default unit threshold before a cooldown pause is forced.
pub const DEFAULT_THRESHOLD: u64 = 300;

/// Default cooldown pause.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(10);

/// Tracks consumed translation units and inserts cooldown pauses.
#[derive(Debug)]
pub struct Throttle {
    units: u64,
    threshold: u64,
    cooldown: Duration,
}

impl Throttle {
    pub const fn new(threshold: u64, cooldown: Duration) -> Self {
        Self {
            units: 0,
            threshold,
            cooldown,
        }
    }

    /// Records `n` consumed units (resolved span decodes, or single-span
    /// backend calls including retries).
    pub fn add(&mut self, n: u64) {
        self.units += n;
    }

    pub const fn units(&self) -> u64 {
        self.units
    }

    /// Pauses for the cooldown and resets the counter when the threshold is
    /// exceeded, either already or once the remaining entries are counted in.
    ///
    /// Returns whether a pause happened, so callers can report it.
    pub async fn pause_if_needed(&mut self, remaining_entries: usize) -> bool {
        if self.units > self.threshold || self.units + remaining_entries as u64 > self.threshold {
            tokio::time::sleep(self.cooldown).await;
            self.units = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_no_pause_below_threshold() {
        let mut throttle = Throttle::new(300, Duration::from_secs(10));
        throttle.add(100);
        assert!(!throttle.pause_if_needed(0).await);
        assert_eq!(throttle.units(), 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_and_reset_above_threshold() {
        let mut throttle = Throttle::new(300, Duration::from_secs(10));
        throttle.add(301);
        let before = Instant::now();
        assert!(throttle.pause_if_needed(0).await);
        assert!(before.elapsed() >= Duration::from_secs(10));
        assert_eq!(throttle.units(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_threshold_is_exclusive() {
        let mut throttle = Throttle::new(300, Duration::from_secs(10));
        throttle.add(300);
        assert!(!throttle.pause_if_needed(0).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_entries_count_toward_threshold() {
        let mut throttle = Throttle::new(300, Duration::from_secs(10));
        throttle.add(200);
        assert!(throttle.pause_if_needed(150).await);
        assert_eq!(throttle.units(), 0);
    }
}
