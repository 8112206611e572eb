use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed content regions of the page, in display order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const COUNT: usize = 5;

    /// Display order, top of the page first.
    pub const ALL: [SectionId; SectionId::COUNT] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Skills => 3,
            SectionId::Contact => 4,
        }
    }

    /// Anchor name used for the section element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown on navigation controls and the section indicator.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
