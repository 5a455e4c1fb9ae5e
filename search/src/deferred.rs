use std::time::Duration;
use std::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Two-stage query value: the raw string tracks every keystroke
/// synchronously while the settled copy lags behind a debounce deadline.
/// Expensive evaluation only ever runs against the settled copy, and a
/// generation counter lets callers discard results computed for a value
/// that has since been superseded. Time is injected so tests never sleep.
#[derive(Clone, Debug)]
pub struct DeferredQuery {
    raw: String,
    settled: String,
    generation: u64,
    deadline: Option<Instant>,
    delay: Duration,
}

impl DeferredQuery {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw: String::new(),
            settled: String::new(),
            generation: 0,
            deadline: None,
            delay,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn settled(&self) -> &str {
        &self.settled
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True exactly while the raw and settled values differ, i.e. while a
    /// lower-priority evaluation is still pending. Surfaced as the
    /// "searching" affordance.
    pub fn is_searching(&self) -> bool {
        self.raw != self.settled
    }

    /// Next instant at which [`DeferredQuery::poll`] would settle, if a
    /// settle is pending. The event loop arms its timer from this.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Apply a keystroke-priority update. Supersedes any pending settle.
    pub fn set_raw(&mut self, value: impl Into<String>, now: Instant) {
        let value = value.into();
        if value == self.raw {
            return;
        }
        self.raw = value;
        self.generation += 1;
        self.deadline = if self.raw == self.settled {
            None
        } else {
            Some(now + self.delay)
        };
    }

    /// Settle if the deadline has passed. Returns true when the settled
    /// value changed, i.e. when evaluation should re-run.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let changed = self.settled != self.raw;
                self.settled = self.raw.clone();
                changed
            }
            _ => false,
        }
    }

    /// Settle immediately, skipping the remaining debounce window. Used
    /// when a suggestion is accepted and evaluation must re-run now.
    pub fn flush(&mut self) -> bool {
        self.deadline = None;
        let changed = self.settled != self.raw;
        self.settled = self.raw.clone();
        changed
    }

    /// Drop both stages back to empty and cancel any pending settle.
    pub fn clear(&mut self) {
        self.raw.clear();
        self.settled.clear();
        self.generation += 1;
        self.deadline = None;
    }
}

impl Default for DeferredQuery {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
