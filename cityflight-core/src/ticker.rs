use crate::config::PhysicsConfig;

/// Converts variable frame time into whole fixed-size physics steps.
///
/// A stopped ticker holds no debt and releases nothing, so cancelling it leaves
/// no pending step behind.
#[derive(Debug, Clone)]
pub struct FixedTicker {
    step_seconds: f64,
    max_catch_up: u32,
    accumulator: f64,
    running: bool,
    ticks: u64,
}

impl FixedTicker {
    pub fn new(step_seconds: f32, max_catch_up: u32) -> Self {
        Self {
            step_seconds: f64::from(step_seconds),
            max_catch_up: max_catch_up.max(1),
            accumulator: 0.0,
            running: false,
            ticks: 0,
        }
    }

    pub fn from_config(params: &PhysicsConfig) -> Self {
        Self::new(params.tick_seconds(), params.max_catch_up_ticks)
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = 0.0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total steps released since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one frame's elapsed time and return how many steps are due now.
    pub fn advance(&mut self, frame_seconds: f32) -> u32 {
        if !self.running || !frame_seconds.is_finite() || frame_seconds <= 0.0 {
            return 0;
        }

        self.accumulator += f64::from(frame_seconds);
        let mut due = 0;
        while self.accumulator >= self.step_seconds && due < self.max_catch_up {
            self.accumulator -= self.step_seconds;
            due += 1;
        }

        if self.accumulator >= self.step_seconds {
            log::debug!(
                "dropping {:.1} ms of physics debt after {} catch-up ticks",
                self.accumulator * 1000.0,
                due
            );
            self.accumulator %= self.step_seconds;
        }

        self.ticks += u64::from(due);
        due
    }
}
