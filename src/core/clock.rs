use std::time::Instant;

/// A monotonic millisecond clock
pub trait TimeSource {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock time source backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// A time source that only moves when told to. Used to replay exact tick
/// sequences.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualTimeSource {
    now_ms: f64,
}

impl ManualTimeSource {
    pub fn new(start_ms: f64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    pub fn set(&mut self, ms: f64) {
        self.now_ms = ms;
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&mut self) -> f64 {
        self.now_ms
    }
}

/// Turns wall-clock time between render callbacks into frame units.
///
/// One frame unit is `frame_duration_ms`. A single delta never exceeds
/// `max_delta`, so a long pause (a backgrounded tab, a debugger) does not turn
/// into one huge physics step.
#[derive(Debug)]
pub struct FrameClock<T: TimeSource> {
    source: T,
    last_ms: f64,
    frame_duration_ms: f64,
    max_delta: f32,
}

impl<T: TimeSource> FrameClock<T> {
    pub fn new(mut source: T, frame_duration_ms: f32, max_delta: f32) -> Self {
        let last_ms = source.now_ms();
        Self {
            source,
            last_ms,
            frame_duration_ms: f64::from(frame_duration_ms),
            max_delta,
        }
    }

    /// Frame units elapsed since the previous tick, capped
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now_ms();
        let elapsed = (now - self.last_ms).max(0.0);
        self.last_ms = now;

        let frames = (elapsed / self.frame_duration_ms) as f32;
        frames.min(self.max_delta)
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}
