//! Frame clock
//!
//! Turns animation-frame timestamps into bounded per-tick deltas.

use crate::consts::{MAX_FRAME_GAP, STALL_DT};

/// Converts host timestamps (milliseconds) into tick deltas (seconds)
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last_ms: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Delta since the previous timestamp
    ///
    /// The first call yields zero. Gaps longer than [`MAX_FRAME_GAP`] (tab
    /// suspended, debugger, stalls) are replaced by [`STALL_DT`]; a timestamp
    /// earlier than the previous one yields zero.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let last = self.last_ms.replace(timestamp_ms).unwrap_or(timestamp_ms);
        let dt = ((timestamp_ms - last) * 0.001) as f32;

        if !dt.is_finite() || dt < 0.0 {
            0.0
        } else if dt > MAX_FRAME_GAP {
            log::warn!("Frame gap of {dt:.3}s, substituting {STALL_DT}s");
            STALL_DT
        } else {
            dt
        }
    }

    /// Forget the previous timestamp (next tick yields zero)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
