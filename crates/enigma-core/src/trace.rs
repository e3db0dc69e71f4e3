//! # Trace Module
//!
//! Optional side channel describing each stage of the signal path.
//!
//! The machine calls a `TraceSink` with structured `TraceEvent` values.
//! Sinks observe only: nothing they do can change an encoding result.
//! `NoTrace` is the default and reports itself disabled, so the machine
//! skips building events entirely.

use crate::Letter;
use crate::rotor::Direction;

/// One observable stage of encoding a single letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// Rotor positions before stepping (left to right).
    StepStarted { positions: Vec<Letter> },

    /// Rotor positions after stepping, with which rotors advanced.
    Stepped {
        positions: Vec<Letter>,
        advanced: Vec<bool>,
    },

    /// Plugboard pass (entry or exit).
    Plugboard { input: Letter, output: Letter },

    /// One rotor pass.
    Rotor {
        /// Stack index, 0 = leftmost.
        slot: usize,
        name: String,
        direction: Direction,
        position: Letter,
        offset: i32,
        input: Letter,
        output: Letter,
    },

    /// Reflector pass.
    Reflector {
        name: String,
        input: Letter,
        output: Letter,
    },

    /// Final result for one key press.
    Encoded { input: Letter, output: Letter },
}

/// Receiver for trace events.
pub trait TraceSink {
    /// Whether events should be built at all.
    fn enabled(&self) -> bool {
        true
    }

    /// Observe one event.
    fn record(&mut self, event: TraceEvent);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _event: TraceEvent) {}
}

/// Sink that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Drop all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

impl<F: FnMut(TraceEvent)> TraceSink for F {
    fn record(&mut self, event: TraceEvent) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trace_is_disabled() {
        assert!(!NoTrace.enabled());
        assert!(TraceLog::new().enabled());
    }

    #[test]
    fn log_keeps_order() {
        let mut log = TraceLog::new();
        log.record(TraceEvent::Plugboard {
            input: Letter::A,
            output: Letter::Z,
        });
        log.record(TraceEvent::Encoded {
            input: Letter::A,
            output: Letter::Z,
        });
        assert_eq!(log.events().len(), 2);
        assert!(matches!(log.events()[0], TraceEvent::Plugboard { .. }));

        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let mut count = 0;
        let mut sink = |_event: TraceEvent| count += 1;
        sink.record(TraceEvent::Encoded {
            input: Letter::A,
            output: Letter::Z,
        });
        assert_eq!(count, 1);
    }
}
