//! Interactive core of the portfolio viewer: which section is in view, the
//! transient section indicator, navigation, and contact form delivery.
//!
//! Nothing in here touches a window. The shell feeds layout, scroll offsets and
//! the current time in, and carries out the returned [`ViewEffect`]s.

pub mod contact;
pub mod indicator;
pub mod tracker;
pub mod view_state;

pub use contact::{ContactForm, ContactSender, HttpContactSender, Notification, NotificationKind};
pub use indicator::{SectionIndicator, INDICATOR_DURATION};
pub use tracker::{resolve_section, SectionBounds, SectionLayouts, DEFAULT_PROBE_OFFSET};
pub use view_state::{ViewEffect, ViewEvent, ViewState};
