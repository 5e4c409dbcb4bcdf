// Rolling FPS / frame-time counter for the stats panel.

const REPORT_INTERVAL_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatsReport {
    pub fps: f32,
    pub frame_ms: f32,
    pub min_fps: f32,
    pub max_fps: f32,
}

#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed_ms: f64,
    min_fps: Option<f32>,
    max_fps: Option<f32>,
}

impl FrameStats {
    /// Record one frame that took `dt_ms`. Returns a fresh report once per
    /// second of accumulated frame time.
    pub fn record(&mut self, dt_ms: f64) -> Option<StatsReport> {
        if !dt_ms.is_finite() || dt_ms < 0.0 {
            return None;
        }
        self.frames += 1;
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < REPORT_INTERVAL_MS {
            return None;
        }
        let fps = (self.frames as f64 * 1000.0 / self.elapsed_ms) as f32;
        let min_fps = self.min_fps.map_or(fps, |m| m.min(fps));
        let max_fps = self.max_fps.map_or(fps, |m| m.max(fps));
        let report = StatsReport {
            fps,
            frame_ms: (self.elapsed_ms / self.frames as f64) as f32,
            min_fps,
            max_fps,
        };
        self.min_fps = Some(min_fps);
        self.max_fps = Some(max_fps);
        self.frames = 0;
        self.elapsed_ms = 0.0;
        Some(report)
    }
}
