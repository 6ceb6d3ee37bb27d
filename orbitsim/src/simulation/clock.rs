//! Simulation clock.
//!
//! Turns measured frame deltas into simulation steps. Holds the run/pause
//! state, the time scale and the elapsed simulation time.
//!
//! In [`StepMode::Variable`] every frame yields exactly one step of
//! `frame_delta * time_scale`, so results depend on the host frame rate.
//! [`StepMode::Fixed`] decouples steps from frames with an accumulator and is
//! reproducible for a given sequence of frame deltas.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepMode {
    /// One step per frame, length scaled frame delta
    Variable,
    /// Steps of exactly `step`, at most `max_substeps` per frame
    Fixed { step: f64, max_substeps: u32 },
}

#[derive(Debug, Clone)]
pub struct SimClock {
    state: RunState,
    time_scale: f64,
    mode: StepMode,
    accumulator: f64, // fixed mode only, scaled time not yet stepped
    elapsed: f64,     // simulation time
    ticks: u64,       // steps processed
}

impl SimClock {
    pub fn new(time_scale: f64, mode: StepMode) -> Self {
        Self {
            state: RunState::Running,
            time_scale,
            mode,
            accumulator: 0.0,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }

    pub fn toggle(&mut self) {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, value: f64) {
        self.time_scale = value;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Zero elapsed time and step count. Run state and scale are kept.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.elapsed = 0.0;
        self.ticks = 0;
    }

    /// Step lengths to run for a frame that lasted `frame_delta` seconds.
    ///
    /// Empty while paused. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, frame_delta: f64) -> Vec<f64> {
        if self.state == RunState::Paused {
            return Vec::new();
        }
        let frame_delta = if frame_delta.is_finite() { frame_delta.max(0.0) } else { 0.0 };
        let scaled = frame_delta * self.time_scale;

        let steps = match self.mode {
            StepMode::Variable => vec![scaled],
            StepMode::Fixed { step, max_substeps } => {
                self.accumulator += scaled;
                let mut steps = Vec::new();
                while self.accumulator >= step && steps.len() < max_substeps as usize {
                    self.accumulator -= step;
                    steps.push(step);
                }
                // too far behind, drop the backlog instead of spiralling
                if self.accumulator >= step {
                    log::debug!("clock: dropping {:.4}s of backlog", self.accumulator);
                    self.accumulator %= step;
                }
                steps
            }
        };

        for dt in &steps {
            self.elapsed += dt;
            self.ticks += 1;
        }
        steps
    }
}
