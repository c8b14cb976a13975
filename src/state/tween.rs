// Linear tween for the animated campaign totals
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    start: f64,
    end: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

impl Tween {
    pub fn new(start: u32, end: u32, duration_ms: f64) -> Self {
        Self {
            start: start as f64,
            end: end as f64,
            duration_ms: duration_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.elapsed_ms += dt_ms;
    }

    fn progress(&self) -> f64 {
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }

    /// Current display value, floored. Lands exactly on `end` at progress 1.
    pub fn value(&self) -> u32 {
        (self.start + (self.end - self.start) * self.progress()).floor() as u32
    }

    pub fn done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}
