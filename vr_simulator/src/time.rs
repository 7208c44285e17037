use std::time::Duration;

use crate::error::{Result, SimulatorError};

#[derive(Clone, Debug, Default)]
pub struct Time {
    pub elapsed: Duration,
    pub total: Duration,
}

impl Time {
    pub fn delta_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Advance by one frame of `delta_seconds`. Negative deltas count as zero;
    /// NaN or values too large for a `Duration` are rejected.
    pub fn advance(&self, delta_seconds: f32) -> Result<Time> {
        if delta_seconds.is_nan() {
            return Err(SimulatorError::InvalidFrameTime(delta_seconds));
        }

        let elapsed = Duration::try_from_secs_f32(delta_seconds.max(0.0))
            .map_err(|_| SimulatorError::InvalidFrameTime(delta_seconds))?;
        let total = self
            .total
            .checked_add(elapsed)
            .ok_or(SimulatorError::InvalidFrameTime(delta_seconds))?;
        Ok(Time { elapsed, total })
    }
}
