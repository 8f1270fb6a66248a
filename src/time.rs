use std::time::{Duration, Instant};

/// Frame delta source. `tick` measures wall time, `advance` injects a fixed step.
pub struct FrameClock {
    start: Instant,
    last: Instant,
    pub delta: Duration,
    injected: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last: now, delta: Duration::ZERO, injected: Duration::ZERO }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last;
        self.last = now;
    }

    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.injected += delta;
    }

    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    pub fn elapsed_seconds(&self) -> f32 {
        (self.last.duration_since(self.start) + self.injected).as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
