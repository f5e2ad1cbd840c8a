use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep, Duration};

use crate::config::config::PacingConfig;

/// Pause length for one product: the fixed delay, stretched by a random
/// amount up to `jitter_ms` when jitter is enabled.
pub fn pick_delay(pacing: &PacingConfig) -> Duration {
    if pacing.jitter_ms == 0 {
        return Duration::from_millis(pacing.delay_ms);
    }

    let mut rng = StdRng::from_entropy();
    let delay = rng.gen_range(pacing.delay_ms..=pacing.delay_ms.saturating_add(pacing.jitter_ms));
    Duration::from_millis(delay)
}

pub async fn generate_delay(pacing: &PacingConfig) {
    let delay = pick_delay(pacing);
    if delay.is_zero() {
        return;
    }

    sleep(delay).await;
}
