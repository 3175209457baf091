//! Artificial response delay
//!
//! Every access-layer call waits a random time inside the configured window
//! before touching the store.

use std::time::Duration;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencySimulator {
    min_ms: u64,
    max_ms: u64,
}

impl LatencySimulator {
    /// A window where `max_ms < min_ms` is clamped up to `min_ms`.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms,
            max_ms: max_ms.max(min_ms),
        }
    }

    /// No delay at all.
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    pub fn is_disabled(&self) -> bool {
        self.max_ms == 0
    }

    /// Pick the next delay. The RNG handle is dropped before any await.
    pub fn next_delay(&self) -> Duration {
        if self.min_ms == self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(self.min_ms..=self.max_ms))
    }

    pub async fn pause(&self) {
        if self.is_disabled() {
            return;
        }
        tokio::time::sleep(self.next_delay()).await;
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(500, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_stay_inside_window() {
        let sim = LatencySimulator::default();
        for _ in 0..200 {
            let d = sim.next_delay();
            assert!(d >= Duration::from_millis(500) && d <= Duration::from_millis(800));
        }
    }

    #[test]
    fn inverted_window_is_clamped() {
        let sim = LatencySimulator::new(300, 100);
        assert_eq!(sim.next_delay(), Duration::from_millis(300));
    }

    #[tokio::test]
    async fn disabled_returns_immediately() {
        let sim = LatencySimulator::disabled();
        assert!(sim.is_disabled());
        tokio::time::timeout(Duration::from_millis(50), sim.pause())
            .await
            .unwrap();
    }
}
