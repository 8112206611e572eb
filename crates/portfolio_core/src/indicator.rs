use std::time::{Duration, Instant};

use tracing::debug;

pub const INDICATOR_DURATION: Duration = Duration::from_millis(2000);

/// Transient label naming the active section.
///
/// Visibility is driven by a single hide deadline. Every trigger pushes the
/// deadline to `now + duration`, so an older trigger can never hide the label
/// after a newer one extended it.
#[derive(Debug, Clone)]
pub struct SectionIndicator {
    duration: Duration,
    hide_at: Option<Instant>,
}

impl SectionIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            hide_at: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        let deadline = now + self.duration;
        self.hide_at = Some(match self.hide_at {
            Some(existing) if existing > deadline => existing,
            _ => deadline,
        });
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.hide_at.is_some_and(|deadline| now < deadline)
    }

    /// Drops a passed deadline. Returns `true` on the visible -> hidden edge.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                debug!("section indicator hidden");
                true
            }
            _ => false,
        }
    }

    /// Time left before the indicator hides, if it is showing.
    pub fn time_until_hide(&self, now: Instant) -> Option<Duration> {
        self.hide_at
            .filter(|deadline| now < *deadline)
            .map(|deadline| deadline - now)
    }
}

impl Default for SectionIndicator {
    fn default() -> Self {
        Self::new(INDICATOR_DURATION)
    }
}

#[cfg(test)]
#[path = "tests/indicator_tests.rs"]
mod tests;
