//! # Signal Trace
//!
//! Bridges the machine's trace side channel to `tracing`.
//!
//! Every event is emitted at debug level under the `enigma::trace` target
//! (`RUST_LOG=enigma::trace=debug`). With `keep` set, events are also
//! retained so `--trace` can print them.

use enigma_core::{Direction, TraceEvent, TraceSink, alphabet::render};
use tracing::Level;

/// Trace sink that logs each event and optionally keeps it.
#[derive(Debug, Default)]
pub struct TracingSink {
    keep: bool,
    events: Vec<TraceEvent>,
}

impl TracingSink {
    pub fn new(keep: bool) -> Self {
        Self {
            keep,
            events: Vec::new(),
        }
    }

    /// Events retained so far (empty unless `keep`).
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Retained events rendered one per line.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(describe).collect()
    }
}

impl TraceSink for TracingSink {
    fn enabled(&self) -> bool {
        self.keep || tracing::enabled!(Level::DEBUG)
    }

    fn record(&mut self, event: TraceEvent) {
        tracing::debug!("{}", describe(&event));
        if self.keep {
            self.events.push(event);
        }
    }
}

/// One-line description of a trace event.
pub fn describe(event: &TraceEvent) -> String {
    match event {
        TraceEvent::StepStarted { positions } => format!("window {}", render(positions)),
        TraceEvent::Stepped {
            positions,
            advanced,
        } => {
            let moved: Vec<String> = advanced
                .iter()
                .enumerate()
                .filter(|&(_, &a)| a)
                .map(|(slot, _)| (slot + 1).to_string())
                .collect();
            format!(
                "stepped to {} (advanced slots {})",
                render(positions),
                moved.join(",")
            )
        }
        TraceEvent::Plugboard { input, output } => format!("  plugboard {} -> {}", input, output),
        TraceEvent::Rotor {
            slot,
            name,
            direction,
            position,
            offset,
            input,
            output,
        } => {
            let arrow = match direction {
                Direction::Forward => "<-",
                Direction::Backward => "->",
            };
            format!(
                "  rotor {} [slot {}, window {}, offset {}] {} {} {}",
                name,
                slot + 1,
                position,
                offset,
                input,
                arrow,
                output
            )
        }
        TraceEvent::Reflector {
            name,
            input,
            output,
        } => format!("  reflector {} {} <> {}", name, input, output),
        TraceEvent::Encoded { input, output } => format!("{} => {}", input, output),
    }
}
