/// Result of one host frame: how many fixed updates to run, then how to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSteps {
    /// Number of fixed updates of `MainLoop::timestep()` to run.
    pub steps: u32,
    /// Fraction of a timestep left in the accumulator, for drawing between ticks.
    pub interpolation: f32,
    /// The step cap was hit this frame and the backlog was discarded.
    pub panic: bool,
}

/// Fixed timestep main loop driven by host frame timestamps (milliseconds).
///
/// Accumulates real frame time, hands out whole simulation steps, measures
/// FPS and guards against the spiral of death with a per-frame step cap.
#[derive(Debug, Clone)]
pub struct MainLoop {
    /// The fixed delta time per update.
    timestep: f64,
    /// Accumulated time not yet simulated.
    frame_delta: f64,
    last_frame_ms: f64,
    max_update_steps: u32,
    /// Frames arriving sooner than this after the last one are skipped.
    min_frame_delay: f64,
    fps: f64,
    fps_alpha: f64,
    fps_update_interval: f64,
    last_fps_update: f64,
    frames_since_fps_update: u32,
    running: bool,
}

impl MainLoop {
    pub const DEFAULT_TIMESTEP: f64 = 1000.0 / 60.0;
    pub const DEFAULT_MAX_UPDATE_STEPS: u32 = 240;

    pub fn new(timestep: f64) -> Self {
        Self {
            timestep,
            frame_delta: 0.0,
            last_frame_ms: 0.0,
            max_update_steps: Self::DEFAULT_MAX_UPDATE_STEPS,
            min_frame_delay: 0.0,
            fps: 60.0,
            fps_alpha: 0.9,
            fps_update_interval: 1000.0,
            last_fps_update: 0.0,
            frames_since_fps_update: 0,
            running: false,
        }
    }

    pub fn with_max_update_steps(mut self, steps: u32) -> Self {
        self.max_update_steps = steps.max(1);
        self
    }

    /// Weight of the newest sample and interval between FPS refreshes.
    pub fn with_fps_smoothing(mut self, alpha: f64, update_interval_ms: f64) -> Self {
        self.fps_alpha = alpha.clamp(0.0, 1.0);
        self.fps_update_interval = update_interval_ms;
        self
    }

    /// Cap the frame rate. `None` removes the cap.
    pub fn set_max_fps(&mut self, max_fps: Option<f64>) {
        self.min_frame_delay = match max_fps {
            Some(fps) if fps > 0.0 => 1000.0 / fps,
            _ => 0.0,
        };
    }

    pub fn max_fps(&self) -> Option<f64> {
        if self.min_frame_delay > 0.0 {
            Some(1000.0 / self.min_frame_delay)
        } else {
            None
        }
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin timing from `timestamp`. No-op if already running.
    pub fn start(&mut self, timestamp: f64) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_frame_ms = timestamp;
        self.last_fps_update = timestamp;
        self.frames_since_fps_update = 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Discard unsimulated time. Returns the discarded amount.
    pub fn reset_frame_delta(&mut self) -> f64 {
        std::mem::take(&mut self.frame_delta)
    }

    /// Account for a host frame at `timestamp`.
    /// Returns `None` when stopped or when the frame is throttled by the FPS cap.
    pub fn frame(&mut self, timestamp: f64) -> Option<FrameSteps> {
        if !self.running || timestamp < self.last_frame_ms + self.min_frame_delay {
            return None;
        }

        self.frame_delta += timestamp - self.last_frame_ms;
        self.last_frame_ms = timestamp;

        if timestamp > self.last_fps_update + self.fps_update_interval {
            let sample = self.frames_since_fps_update as f64 * 1000.0 / (timestamp - self.last_fps_update);
            self.fps = self.fps_alpha * sample + (1.0 - self.fps_alpha) * self.fps;
            self.last_fps_update = timestamp;
            self.frames_since_fps_update = 0;
        }
        self.frames_since_fps_update += 1;

        let mut steps = 0;
        let mut panic = false;
        while self.frame_delta >= self.timestep {
            self.frame_delta -= self.timestep;
            steps += 1;
            if steps >= self.max_update_steps {
                panic = true;
                break;
            }
        }
        if panic {
            let dropped = self.reset_frame_delta();
            log::warn!("main loop fell behind, dropped {:.1} ms of simulation", dropped);
        }

        Some(FrameSteps {
            steps,
            interpolation: (self.frame_delta / self.timestep) as f32,
            panic,
        })
    }
}

impl Default for MainLoop {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMESTEP)
    }
}
