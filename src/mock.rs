//! Inert and recording doubles for the sink and escalation seams.

use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::{
    level::TraceLevel,
    sink::{ComponentId, DebugSink, OutputLevel},
    status::Status,
};

/// A sink that discards everything.
#[derive(Debug)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    fn write(&self, _component: ComponentId, _level: OutputLevel, _bytes: &[u8]) {}
}

/// An escalation that does nothing and reports success.
#[derive(Debug)]
pub struct NoopEscalation;

impl crate::Escalation for NoopEscalation {
    fn debug_break(&self, _level: TraceLevel) -> Status {
        Status::SUCCESS
    }

    fn bugcheck(&self, _level: TraceLevel) -> Status {
        Status::SUCCESS
    }
}

/// An escalation that records how it was called.
#[derive(Debug, Default)]
pub struct CountingEscalation {
    debug_breaks: AtomicUsize,
    bugchecks: AtomicUsize,
    last_level: AtomicU32,
}

impl CountingEscalation {
    /// Creates a recorder with zeroed counters.
    pub const fn new() -> Self {
        Self {
            debug_breaks: AtomicUsize::new(0),
            bugchecks: AtomicUsize::new(0),
            last_level: AtomicU32::new(0),
        }
    }

    /// Number of recorded debug breaks.
    pub fn debug_breaks(&self) -> usize {
        self.debug_breaks.load(Ordering::Relaxed)
    }

    /// Number of recorded bugchecks.
    pub fn bugchecks(&self) -> usize {
        self.bugchecks.load(Ordering::Relaxed)
    }

    /// Raw value of the last escalation level seen.
    pub fn last_level(&self) -> u32 {
        self.last_level.load(Ordering::Relaxed)
    }

    /// Zeroes the counters.
    pub fn reset(&self) {
        self.debug_breaks.store(0, Ordering::Relaxed);
        self.bugchecks.store(0, Ordering::Relaxed);
        self.last_level.store(0, Ordering::Relaxed);
    }
}

impl crate::Escalation for CountingEscalation {
    fn debug_break(&self, level: TraceLevel) -> Status {
        self.debug_breaks.fetch_add(1, Ordering::Relaxed);
        self.last_level.store(level.value(), Ordering::Relaxed);

        Status::SUCCESS
    }

    fn bugcheck(&self, level: TraceLevel) -> Status {
        self.bugchecks.fetch_add(1, Ordering::Relaxed);
        self.last_level.store(level.value(), Ordering::Relaxed);

        Status::SUCCESS
    }
}
