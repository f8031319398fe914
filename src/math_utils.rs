// src/math_utils.rs
pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }

    /// Events per second given `count` events since the last start
    pub fn throughput(&self, count: u64) -> f64 {
        let secs = self.start_time.elapsed().as_secs_f64();
        if secs > 0.0 {
            count as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
