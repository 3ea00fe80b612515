//! Performance monitoring for frame timing and hot-path instrumentation.
//!
//! Pointer-move events arrive at input-pipeline frequency, so the gesture
//! path must stay O(1). `PerfMonitor` tracks inter-frame time and logs
//! slow frames; `profile_scope!` adds opt-in scoped timing behind the
//! `profiling` cargo feature.

use crate::constants::SLOW_FRAME_THRESHOLD_MS;
use std::time::Instant;

/// Scoped timer profiling macro.
///
/// With the `profiling` feature enabled, times the enclosing scope and
/// warns when it exceeds the threshold. Compiles to nothing otherwise.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Rolling frame-time statistics over the last 120 frames.
pub struct PerfMonitor {
    last_frame: Option<Instant>,
    frame_times: Vec<f64>,
    frame_count: u64,
}

impl Default for PerfMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl PerfMonitor {
    const WINDOW: usize = 120;

    pub fn new() -> Self {
        Self {
            last_frame: None,
            frame_times: Vec::with_capacity(Self::WINDOW),
            frame_count: 0,
        }
    }

    /// Record a frame boundary. Returns the time since the previous
    /// frame in milliseconds, if there was one, and warns on slow frames.
    pub fn frame(&mut self) -> Option<f64> {
        let now = Instant::now();
        let elapsed = self.last_frame.map(|last| {
            let ms = now.duration_since(last).as_secs_f64() * 1000.0;
            if ms > SLOW_FRAME_THRESHOLD_MS {
                tracing::warn!(frame_ms = ms, "slow frame");
            }
            if self.frame_times.len() >= Self::WINDOW {
                self.frame_times.remove(0);
            }
            self.frame_times.push(ms);
            ms
        });
        self.last_frame = Some(now);
        self.frame_count += 1;
        elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frame time over the window, in milliseconds.
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.frame_times.iter().copied().fold(0.0, f64::max)
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }
}

/// Times a scope and warns when it exceeds a threshold on drop.
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    /// Timer with the default hot-path threshold (2ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 2.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            tracing::warn!(op = self.name, ms = elapsed, "slow operation");
        }
    }
}
