//! Simulation clock driven by externally supplied frame deltas.
//!
//! Unlike a wall-clock timer, this clock only moves when the render loop
//! feeds it a delta, and a time scale multiplies every delta before it is
//! accumulated — freezing or slowing the drift fields and shader time
//! together. Elapsed time is monotonically non-decreasing; a scale of zero
//! holds it still.

/// Frame-delta driven clock with a global time scale.
#[derive(Debug, Clone)]
pub struct SimClock {
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    time_scale: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            time_scale: 1.0,
        }
    }

    /// Advance by a raw frame delta. Returns the scaled delta that was
    /// accumulated. Negative deltas are treated as zero.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let scaled = dt.max(0.0) * self.time_scale;
        self.elapsed_secs += scaled;
        self.delta_secs = scaled;
        self.frame_count += 1;
        scaled
    }

    /// Set the time scale multiplier (`1.0` normal, `0.1` slow motion,
    /// `0.0` frozen). Negative scales clamp to zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Scaled elapsed time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Scaled delta applied on the last `advance`.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames advanced, including frozen ones.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Current time scale.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
