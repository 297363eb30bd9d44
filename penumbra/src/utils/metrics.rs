use std::time::Instant;

use log::info;

const REPORT_EVERY: u32 = 120;

/// Rolling frame-time reporter; ticks once per flushed frame and logs the
/// average every [`REPORT_EVERY`] frames.
#[derive(Debug)]
pub struct FrameMetrics {
    frames: u32,
    started_at: Instant,
}

impl FrameMetrics {
    pub fn new() -> Self {
        Self {
            frames: 0,
            started_at: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        self.frames += 1;

        if self.frames % REPORT_EVERY == 0 {
            let avg = self.started_at.elapsed() / REPORT_EVERY;

            info!("Average frame time: {}", humantime::format_duration(avg));

            self.started_at = Instant::now();
        }
    }
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
