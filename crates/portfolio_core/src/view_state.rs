//! View state owned by the UI event dispatcher, with one transition per event
//! kind.

use std::time::{Duration, Instant};

use shared::domain::SectionId;
use tracing::debug;

use crate::{
    indicator::SectionIndicator,
    tracker::{resolve_section, SectionLayouts, DEFAULT_PROBE_OFFSET},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    Scrolled { offset: f32 },
    NavClicked(SectionId),
    MenuToggled,
    Tick,
}

/// Work the shell must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    /// Smooth-scroll the viewport so the section starts at the top.
    ScrollTo(SectionId),
}

#[derive(Debug, Clone)]
pub struct ViewState {
    active_section: SectionId,
    menu_open: bool,
    indicator: SectionIndicator,
    probe_offset: f32,
}

impl ViewState {
    pub fn new(probe_offset: f32, indicator_duration: Duration) -> Self {
        Self {
            active_section: SectionId::Home,
            menu_open: false,
            indicator: SectionIndicator::new(indicator_duration),
            probe_offset,
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn indicator_visible(&self, now: Instant) -> bool {
        self.indicator.is_visible(now)
    }

    pub fn indicator_time_left(&self, now: Instant) -> Option<Duration> {
        self.indicator.time_until_hide(now)
    }

    pub fn apply(
        &mut self,
        event: ViewEvent,
        layouts: &SectionLayouts,
        now: Instant,
    ) -> Option<ViewEffect> {
        match event {
            ViewEvent::Scrolled { offset } => {
                self.on_scroll(offset, layouts, now);
                None
            }
            ViewEvent::NavClicked(section) => self.on_nav_click(section, layouts, now),
            ViewEvent::MenuToggled => {
                self.on_menu_toggle();
                None
            }
            ViewEvent::Tick => {
                self.on_tick(now);
                None
            }
        }
    }

    /// Re-resolves the active section. Returns `true` when it changed.
    pub fn on_scroll(&mut self, offset: f32, layouts: &SectionLayouts, now: Instant) -> bool {
        let Some(section) = resolve_section(layouts, offset, self.probe_offset) else {
            return false;
        };
        if section == self.active_section {
            return false;
        }

        debug!(
            from = %self.active_section,
            to = %section,
            offset,
            "active section changed by scroll"
        );
        self.active_section = section;
        self.indicator.trigger(now);
        true
    }

    pub fn on_nav_click(
        &mut self,
        section: SectionId,
        layouts: &SectionLayouts,
        now: Instant,
    ) -> Option<ViewEffect> {
        if !layouts.contains(section) {
            debug!(section = %section, "navigation target has no layout; ignoring");
            return None;
        }

        debug!(section = %section, "navigating to section");
        self.active_section = section;
        self.menu_open = false;
        self.indicator.trigger(now);
        Some(ViewEffect::ScrollTo(section))
    }

    pub fn on_menu_toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.indicator.expire(now);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_OFFSET, crate::indicator::INDICATOR_DURATION)
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
