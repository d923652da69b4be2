//! Operation Metrics Module
//!
//! This module provides standardized operation counters for all randq containers.
//! It records how many operations succeeded or failed, how often a container had to
//! reallocate, and how large it grew, without changing any container's behaviour.
//!
//! Counters use `Cell` since every container assumes a single owner; updating them
//! from `&self` methods such as `sample` needs no synchronisation.

use core::cell::Cell;
use core::time::Duration;

/// Snapshot of the metrics recorded by a container
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContainerMetrics {
    /// Total number of operations performed
    pub total_operations: u64,
    /// Number of successful operations
    pub successful_operations: u64,
    /// Number of failed operations (empty container, absent item)
    pub failed_operations: u64,
    /// Number of times the backing storage doubled
    pub grow_events: u64,
    /// Number of times the backing storage halved
    pub shrink_events: u64,
    /// Largest number of elements held at once
    pub peak_len: usize,
    /// Average operation time in nanoseconds (zero without the `std` feature)
    pub avg_operation_time_ns: u64,
    /// Maximum operation time in nanoseconds (zero without the `std` feature)
    pub max_operation_time_ns: u64,
}

impl ContainerMetrics {
    /// Calculate success rate as percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.successful_operations as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Calculate failure rate as percentage
    pub fn failure_rate(&self) -> f64 {
        if self.total_operations == 0 {
            0.0
        } else {
            (self.failed_operations as f64 / self.total_operations as f64) * 100.0
        }
    }

    /// Total number of reallocations in either direction
    pub fn resize_events(&self) -> u64 {
        self.grow_events + self.shrink_events
    }

    /// Get average operation time as Duration
    pub fn avg_operation_time(&self) -> Duration {
        Duration::from_nanos(self.avg_operation_time_ns)
    }

    /// Get maximum operation time as Duration
    pub fn max_operation_time(&self) -> Duration {
        Duration::from_nanos(self.max_operation_time_ns)
    }
}

/// Start time of an operation, captured only when metrics are enabled
#[derive(Debug, Clone, Copy)]
pub struct OpTimer {
    #[cfg(feature = "std")]
    start: Option<std::time::Instant>,
}

impl OpTimer {
    #[cfg(feature = "std")]
    fn elapsed(&self) -> Duration {
        self.start.map_or(Duration::ZERO, |start| start.elapsed())
    }

    #[cfg(not(feature = "std"))]
    fn elapsed(&self) -> Duration {
        Duration::ZERO
    }
}

/// Interior-mutable metrics collection embedded in each container
#[derive(Debug)]
pub struct OpMetrics {
    enabled: Cell<bool>,
    total_operations: Cell<u64>,
    successful_operations: Cell<u64>,
    failed_operations: Cell<u64>,
    grow_events: Cell<u64>,
    shrink_events: Cell<u64>,
    peak_len: Cell<usize>,
    total_time_ns: Cell<u64>,
    max_time_ns: Cell<u64>,
}

impl Default for OpMetrics {
    fn default() -> Self {
        Self {
            // Enabled by default
            enabled: Cell::new(true),
            total_operations: Cell::new(0),
            successful_operations: Cell::new(0),
            failed_operations: Cell::new(0),
            grow_events: Cell::new(0),
            shrink_events: Cell::new(0),
            peak_len: Cell::new(0),
            total_time_ns: Cell::new(0),
            max_time_ns: Cell::new(0),
        }
    }
}

#[inline]
fn bump(counter: &Cell<u64>) {
    counter.set(counter.get().saturating_add(1));
}

impl OpMetrics {
    /// Capture the start of an operation
    #[inline]
    pub fn start(&self) -> OpTimer {
        OpTimer {
            #[cfg(feature = "std")]
            start: if self.enabled.get() {
                Some(std::time::Instant::now())
            } else {
                None
            },
        }
    }

    /// Record a successful operation started at `timer`
    pub fn record_success(&self, timer: OpTimer) {
        if !self.enabled.get() {
            return;
        }
        let duration_ns = timer.elapsed().as_nanos() as u64;

        bump(&self.total_operations);
        bump(&self.successful_operations);
        self.total_time_ns
            .set(self.total_time_ns.get().saturating_add(duration_ns));

        if duration_ns > self.max_time_ns.get() {
            self.max_time_ns.set(duration_ns);
        }
    }

    /// Record a failed operation
    pub fn record_failure(&self) {
        if !self.enabled.get() {
            return;
        }
        bump(&self.total_operations);
        bump(&self.failed_operations);
    }

    /// Record a doubling of the backing storage
    pub fn record_grow(&self) {
        if self.enabled.get() {
            bump(&self.grow_events);
        }
    }

    /// Record a halving of the backing storage
    pub fn record_shrink(&self) {
        if self.enabled.get() {
            bump(&self.shrink_events);
        }
    }

    /// Update the peak length if `len` exceeds it
    pub fn observe_len(&self, len: usize) {
        if self.enabled.get() && len > self.peak_len.get() {
            self.peak_len.set(len);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> ContainerMetrics {
        let total_ops = self.total_operations.get();
        let successful_ops = self.successful_operations.get();
        let total_time = self.total_time_ns.get();

        ContainerMetrics {
            total_operations: total_ops,
            successful_operations: successful_ops,
            failed_operations: self.failed_operations.get(),
            grow_events: self.grow_events.get(),
            shrink_events: self.shrink_events.get(),
            peak_len: self.peak_len.get(),
            avg_operation_time_ns: if successful_ops > 0 {
                total_time / successful_ops
            } else {
                0
            },
            max_operation_time_ns: self.max_time_ns.get(),
        }
    }

    /// Reset all metrics
    ///
    /// The peak length restarts from `current_len` since it reflects current state.
    pub fn reset(&self, current_len: usize) {
        self.total_operations.set(0);
        self.successful_operations.set(0);
        self.failed_operations.set(0);
        self.grow_events.set(0);
        self.shrink_events.set(0);
        self.peak_len.set(current_len);
        self.total_time_ns.set(0);
        self.max_time_ns.set(0);
    }

    /// Enable or disable collection
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Check if collection is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

/// Trait for containers that support operation metrics
pub trait MetricsCollector {
    /// Get current metrics
    fn metrics(&self) -> ContainerMetrics;

    /// Reset all metrics
    fn reset_metrics(&self);

    /// Enable or disable metrics collection
    fn set_metrics_enabled(&self, enabled: bool);

    /// Check if metrics collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
