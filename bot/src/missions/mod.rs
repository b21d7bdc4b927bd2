mod decision;
mod patrol;
mod pursuit;

use std::time::Duration;

pub use decision::DecisionMission;
pub use patrol::PatrolMission;
pub use pursuit::PursuitMission;

/// pause after each painted cell, per phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub patrol: Duration,
    pub search: Duration,
    pub path: Duration,
}

impl Timings {
    pub fn uniform(delay_ms: u64) -> Self {
        let delay = Duration::from_millis(delay_ms);
        Self {
            patrol: delay,
            search: delay,
            path: delay,
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            patrol: Duration::from_millis(150),
            search: Duration::from_millis(100),
            path: Duration::from_millis(100),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
