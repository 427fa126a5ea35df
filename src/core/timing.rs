//! Simulated latency
//!
//! Every delay in the engines (assistant typing, symptom analysis, call
//! connection, duration ticks, doctor replies) goes through a [`Clock`] so
//! tests and dry runs can swap wall-clock waiting for something faster.

use crate::config::LatencyConfig;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Source of deferred wake-ups
#[async_trait]
pub trait Clock: Send + Sync + 'static {
    /// Suspends the caller for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the Tokio timer
///
/// Honors `tokio::time::pause`, so tests can drive it with virtual time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Clock that never waits
///
/// Only yields to the scheduler so that pending tasks still interleave.
/// Not suitable for driving a call session: its duration ticker would spin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateClock;

#[async_trait]
impl Clock for ImmediateClock {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

/// Resolved delays used by the sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Lower bound (inclusive) of the assistant typing delay
    pub typing_min: Duration,
    /// Upper bound (exclusive) of the assistant typing delay
    pub typing_max: Duration,
    /// Symptom analysis delay
    pub analysis: Duration,
    /// Call connection delay
    pub connect: Duration,
    /// Interval between call duration ticks
    pub tick: Duration,
    /// Delay before the doctor answers a chat message
    pub doctor_reply: Duration,
}

impl LatencyProfile {
    /// Draws an assistant typing delay uniformly from `[typing_min, typing_max)`
    ///
    /// Falls back to `typing_min` when the range is empty.
    pub fn typing_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.typing_max <= self.typing_min {
            return self.typing_min;
        }
        rng.gen_range(self.typing_min..self.typing_max)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from(&LatencyConfig::default())
    }
}

impl From<&LatencyConfig> for LatencyProfile {
    fn from(config: &LatencyConfig) -> Self {
        Self {
            typing_min: Duration::from_millis(config.typing_min_ms),
            typing_max: Duration::from_millis(config.typing_max_ms),
            analysis: Duration::from_millis(config.analysis_ms),
            connect: Duration::from_millis(config.connect_ms),
            tick: Duration::from_millis(config.tick_ms),
            doctor_reply: Duration::from_millis(config.doctor_reply_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_profile_matches_product_timings() {
        let profile = LatencyProfile::default();
        assert_eq!(profile.typing_min, Duration::from_millis(1000));
        assert_eq!(profile.typing_max, Duration::from_millis(2000));
        assert_eq!(profile.analysis, Duration::from_millis(3000));
        assert_eq!(profile.connect, Duration::from_millis(2000));
        assert_eq!(profile.tick, Duration::from_millis(1000));
        assert_eq!(profile.doctor_reply, Duration::from_millis(1500));
    }

    #[test]
    fn test_typing_delay_stays_in_range() {
        let profile = LatencyProfile::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let delay = profile.typing_delay(&mut rng);
            assert!(delay >= profile.typing_min);
            assert!(delay < profile.typing_max);
        }
    }

    #[test]
    fn test_typing_delay_empty_range() {
        let profile = LatencyProfile {
            typing_min: Duration::ZERO,
            typing_max: Duration::ZERO,
            ..LatencyProfile::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(profile.typing_delay(&mut rng), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_uses_virtual_time() {
        let start = tokio::time::Instant::now();
        TokioClock.sleep(Duration::from_secs(3)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_clock_does_not_wait() {
        let start = tokio::time::Instant::now();
        ImmediateClock.sleep(Duration::from_secs(3)).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
