//! Maps a vertical scroll offset to the section currently in view.
//!
//! Layout is supplied by the shell every frame as [`SectionLayouts`]; offsets are
//! measured from the top of the scrollable content, so they stay comparable with
//! the scroll offset regardless of where the viewport currently sits.

use shared::domain::SectionId;

/// Margin added to the scroll offset so the section under the fixed header
/// counts as the one in view.
pub const DEFAULT_PROBE_OFFSET: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Half-open `[top, top + height)` containment.
    pub fn contains(&self, position: f32) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Last known layout of every section; a section that has not been laid out
/// yet has no bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayouts {
    bounds: [Option<SectionBounds>; SectionId::COUNT],
}

impl SectionLayouts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, section: SectionId, bounds: SectionBounds) {
        self.bounds[section.index()] = Some(bounds);
    }

    pub fn with(mut self, section: SectionId, bounds: SectionBounds) -> Self {
        self.set(section, bounds);
        self
    }

    pub fn get(&self, section: SectionId) -> Option<SectionBounds> {
        self.bounds[section.index()]
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.get(section).is_some()
    }
}

/// Returns the first section, in display order, whose interval contains
/// `scroll_offset + probe_offset`. `None` means the position falls outside every
/// known section (above the first one, in a gap, or past the end).
pub fn resolve_section(
    layouts: &SectionLayouts,
    scroll_offset: f32,
    probe_offset: f32,
) -> Option<SectionId> {
    let position = scroll_offset + probe_offset;
    SectionId::ALL.into_iter().find(|section| {
        layouts
            .get(*section)
            .is_some_and(|bounds| bounds.contains(position))
    })
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
